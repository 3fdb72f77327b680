pub mod ball;
pub mod movement;

pub use ball::*;
pub use movement::*;
