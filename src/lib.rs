pub mod camera;
pub mod cli;
pub mod core;
pub mod math;
pub mod mesh;
pub mod scenes;
pub mod settings;
pub mod traits;
pub mod types;

pub use camera::Camera;
pub use self::core::{FirstPersonControls, GazeProbe, Subscriptions, WinitInput};
pub use mesh::{NamedHit, SceneNode};
pub use settings::{FallClock, NavSettings};
pub use traits::{
    Button, CameraPose, Collider, EventKind, InputEvent, InputSource, ScriptedInput,
};
pub use types::{Orientation, RayHit, Triangle};
