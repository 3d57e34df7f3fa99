pub mod movement;
pub mod projectiles;
pub mod spawn;
