pub mod components;
pub mod config;
pub mod fsm;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use resources::*;
pub use systems::*;
