use super::commands::apply_command;
use super::types::{CommandOutcome, Envelope, WorldUpdate};
use crate::domain::{RandomSource, World};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// The single owner of the world state.
///
/// Envelopes are applied one at a time in arrival order, so every tick fully
/// resolves before the next command is looked at. A snapshot goes out after
/// each tick. Returns the final world once every sender has been dropped.
pub async fn world_task<R: RandomSource>(
    mut mailbox_rx: mpsc::Receiver<Envelope>,
    world_tx: broadcast::Sender<WorldUpdate>,
    mut world: World,
    mut rng: R,
) -> World {
    while let Some(Envelope { sender, command }) = mailbox_rx.recv().await {
        let name = command.name();
        match apply_command(&mut world, &mut rng, command) {
            Ok(CommandOutcome::Ticked(_)) => {
                // No subscribers is fine; the world keeps ticking.
                let _ = world_tx.send(WorldUpdate::from(&world));
            }
            Ok(outcome) => {
                debug!(sender, command = name, ?outcome, "command applied");
            }
            Err(e) => {
                warn!(sender, command = name, error = %e, "command rejected");
            }
        }
    }

    info!(tick = world.tick(), "mailbox closed, world task exiting");
    world
}
