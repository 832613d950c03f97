pub mod collision;
pub mod movement;
pub mod respawn;

pub use collision::*;
pub use movement::*;
pub use respawn::*;
