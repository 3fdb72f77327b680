pub mod input;
pub mod session;
pub mod trail;

pub use input::*;
pub use session::*;
pub use trail::*;
