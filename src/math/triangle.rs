use glam::Vec3;

use crate::types::Triangle;

/// Möller-Trumbore ray-triangle intersection.
///
/// Returns the distance along the ray to the hit. `direction` must be
/// normalized for the distance to be in world units. Back faces count as
/// hits; the walls of a collision mesh block from both sides.
pub fn intersect_triangle(origin: Vec3, direction: Vec3, tri: &Triangle) -> Option<f32> {
    const EPSILON: f32 = 1e-6;

    let edge1 = tri.b - tri.a;
    let edge2 = tri.c - tri.a;

    let h = direction.cross(edge2);
    let det = edge1.dot(h);

    // Ray parallel to the triangle plane
    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = origin - tri.a;
    let u = inv_det * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = inv_det * direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inv_det * edge2.dot(q);
    if t < EPSILON {
        return None;
    }

    Some(t)
}
