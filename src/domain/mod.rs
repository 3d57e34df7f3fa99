// Domain layer: core simulation types and rules.

pub mod errors;
pub mod geometry;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod world;

pub use errors::CommandError;
pub use geometry::{Bounds, Vector2D};
pub use ports::RandomSource;
pub use state::{Enemy, EntityKind, Player, PlayerSnapshot, Projectile};
pub use world::World;
