pub mod dice;
pub mod input;
pub mod rendering;
pub mod setup;

pub use dice::*;
pub use input::*;
pub use rendering::*;
pub use setup::*;
