// Use-case level inputs/outputs for the world task.

use super::tick::TickReport;
use crate::domain::{PlayerSnapshot, Vector2D, World};

/// Every operation the world understands, each with its typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Join { player_id: u64 },
    Leave { player_id: u64 },
    Fire { player_id: u64 },
    MovePlayer { player_id: u64, acceleration: Vector2D },
    MoveEnemy { enemy_id: u64, position: Vector2D },
    MoveProjectile { projectile_id: u64 },
    DamagePlayer { player_id: u64, amount: i32 },
    DamageEnemy { enemy_id: u64, amount: i32 },
    Score { player_id: u64, points: i32 },
    Update,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Join { .. } => "join",
            Command::Leave { .. } => "leave",
            Command::Fire { .. } => "fire",
            Command::MovePlayer { .. } => "move_player",
            Command::MoveEnemy { .. } => "move_enemy",
            Command::MoveProjectile { .. } => "move_projectile",
            Command::DamagePlayer { .. } => "damage_player",
            Command::DamageEnemy { .. } => "damage_enemy",
            Command::Score { .. } => "score",
            Command::Update => "update",
        }
    }
}

/// A command plus the id of whoever issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub sender: u64,
    pub command: Command,
}

impl Envelope {
    pub fn new(sender: u64, command: Command) -> Self {
        Self { sender, command }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Joined { player_id: u64 },
    Left { player_id: u64 },
    Fired { projectile_id: u64 },
    Moved { position: Vector2D },
    Damaged { health: i32, removed: bool },
    Scored { score: i32 },
    Ticked(TickReport),
}

/// Published after every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldUpdate {
    pub tick: u64,
    pub players: Vec<PlayerSnapshot>,
    pub enemy_count: usize,
    pub projectile_count: usize,
}

impl From<&World> for WorldUpdate {
    fn from(world: &World) -> Self {
        Self {
            tick: world.tick(),
            players: world.players().map(PlayerSnapshot::from).collect(),
            enemy_count: world.enemy_count(),
            projectile_count: world.projectile_count(),
        }
    }
}
