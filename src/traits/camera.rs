use glam::Vec3;

use crate::types::Orientation;

/// Camera pose abstraction - the externally-owned transform the navigation
/// controller reads and writes.
///
/// While the controller is enabled it is the sole writer of position and
/// orientation; the basis vectors must be derived from the current
/// orientation on every call so nothing goes stale when the host moves the
/// camera between frames.
pub trait CameraPose {
    /// Get the camera position in world space
    fn position(&self) -> Vec3;

    /// Set the camera position in world space
    fn set_position(&mut self, position: Vec3);

    /// Get the current look angles
    fn orientation(&self) -> Orientation;

    /// Set the look angles
    fn set_orientation(&mut self, orientation: Orientation);

    /// Get the camera right basis vector for the current orientation
    fn right(&self) -> Vec3;

    /// Get the camera up basis vector
    fn up(&self) -> Vec3;
}
