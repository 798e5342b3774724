pub mod animation;
pub mod easing;
pub mod roll;
pub mod settings;
pub mod systems;
pub mod types;

pub use animation::*;
pub use easing::*;
pub use roll::*;
pub use settings::*;
pub use systems::*;
pub use types::*;
