use glam::Vec3;

use crate::types::RayHit;

/// Collidable geometry abstraction - nearest-hit ray intersection against a
/// scene hierarchy.
pub trait Collider {
    /// Cast a ray and return the nearest hit, or `None` when nothing is in
    /// the way. `direction` does not need to be normalized by the caller.
    fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<RayHit>;
}
