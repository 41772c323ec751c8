pub mod camera;
pub mod collider;
pub mod input;

pub use camera::*;
pub use collider::*;
pub use input::*;
