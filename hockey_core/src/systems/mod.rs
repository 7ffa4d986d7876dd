pub mod bot;
pub mod clock;
pub mod collision;
pub mod input;
pub mod movement;
pub mod scoring;

pub use bot::*;
pub use clock::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
