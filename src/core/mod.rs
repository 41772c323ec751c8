pub mod first_person;
pub mod gaze;
pub mod input_adapter;

pub use first_person::{FirstPersonControls, Subscriptions};
pub use gaze::GazeProbe;
pub use input_adapter::WinitInput;
