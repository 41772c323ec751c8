use glam::Vec3;

use crate::types::Triangle;

/// Two triangles covering the quad a-b-c-d (corners in order around the rim)
pub fn quad_triangles(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Vec<Triangle> {
    vec![Triangle::new(a, b, c), Triangle::new(a, c, d)]
}

/// Twelve triangles covering an axis-aligned box
pub fn box_triangles(min: Vec3, max: Vec3) -> Vec<Triangle> {
    let corners = [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ];

    let faces = [
        [0, 3, 2, 1], // -z
        [4, 5, 6, 7], // +z
        [0, 4, 7, 3], // -x
        [1, 2, 6, 5], // +x
        [0, 1, 5, 4], // -y
        [3, 7, 6, 2], // +y
    ];

    let mut triangles = Vec::with_capacity(12);
    for [i, j, k, l] in faces {
        triangles.extend(quad_triangles(
            corners[i], corners[j], corners[k], corners[l],
        ));
    }
    triangles
}
