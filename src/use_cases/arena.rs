// Arena orchestration: channel wiring around a spawned world task.

use super::game::world_task;
use super::types::{Command, Envelope, WorldUpdate};
use crate::domain::{Bounds, RandomSource, World};
use thiserror::Error;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Settings for spawning an arena world.
#[derive(Debug, Clone)]
pub struct ArenaSettings {
    /// World extent.
    pub bounds: Bounds,
    /// Mailbox capacity. Senders wait when it is full; nothing is dropped.
    pub mailbox_capacity: usize,
    /// Capacity for broadcast world updates.
    pub world_broadcast_capacity: usize,
}

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("arena mailbox is closed")]
    MailboxClosed,
    #[error("world task failed: {0}")]
    WorldTask(#[from] tokio::task::JoinError),
}

/// Handle to a running arena.
pub struct ArenaHandle {
    mailbox_tx: mpsc::Sender<Envelope>,
    world_tx: broadcast::Sender<WorldUpdate>,
    task: JoinHandle<World>,
}

impl ArenaHandle {
    /// Subscribe before sending the `Update` whose snapshot you want.
    pub fn subscribe(&self) -> broadcast::Receiver<WorldUpdate> {
        self.world_tx.subscribe()
    }

    pub async fn send(&self, sender: u64, command: Command) -> Result<(), ArenaError> {
        self.mailbox_tx
            .send(Envelope::new(sender, command))
            .await
            .map_err(|_| ArenaError::MailboxClosed)
    }

    /// Closes the mailbox and waits for the world task to drain it.
    pub async fn shutdown(self) -> Result<World, ArenaError> {
        drop(self.mailbox_tx);
        Ok(self.task.await?)
    }
}

/// Spawns the authoritative world loop for a fresh arena.
pub fn spawn_arena<R>(settings: &ArenaSettings, rng: R) -> ArenaHandle
where
    R: RandomSource + 'static,
{
    let (mailbox_tx, mailbox_rx) = mpsc::channel::<Envelope>(settings.mailbox_capacity);
    let (world_tx, _world_rx) =
        broadcast::channel::<WorldUpdate>(settings.world_broadcast_capacity);

    let task = tokio::spawn(world_task(
        mailbox_rx,
        world_tx.clone(),
        World::new(settings.bounds),
        rng,
    ));

    ArenaHandle {
        mailbox_tx,
        world_tx,
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedRandom;

    fn settings() -> ArenaSettings {
        ArenaSettings {
            bounds: Bounds::new(200.0, 200.0),
            mailbox_capacity: 4,
            world_broadcast_capacity: 8,
        }
    }

    #[tokio::test]
    async fn when_commands_exceed_mailbox_capacity_then_sends_wait_instead_of_dropping() {
        let arena = spawn_arena(&settings(), ScriptedRandom::constant(0.5));

        for player_id in 0..32 {
            arena
                .send(player_id, Command::Join { player_id })
                .await
                .expect("send join");
        }

        let world = arena.shutdown().await.expect("shutdown");
        assert_eq!(world.player_count(), 32);
    }

    #[tokio::test]
    async fn when_subscribed_then_each_tick_is_observed_in_order() {
        let arena = spawn_arena(&settings(), ScriptedRandom::constant(0.5));
        let mut updates = arena.subscribe();

        arena.send(0, Command::Join { player_id: 0 }).await.expect("join");
        for _ in 0..3 {
            arena.send(0, Command::Update).await.expect("update");
        }

        let mut ticks = Vec::new();
        for _ in 0..3 {
            ticks.push(updates.recv().await.expect("update").tick);
        }
        assert_eq!(ticks, vec![1, 2, 3]);

        let world = arena.shutdown().await.expect("shutdown");
        assert_eq!(world.enemy_count(), 2);
    }
}
