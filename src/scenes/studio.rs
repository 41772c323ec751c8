use glam::Vec3;
use log::info;

use crate::mesh::SceneNode;
use crate::scenes::box_triangles;

/// Walkable demo interior: a floor, four walls, a raised step, and the two
/// tagged props the walkthrough host reacts to. All collision geometry, no
/// visuals.
pub fn create_studio_scene() -> SceneNode {
    let mut root = SceneNode::new("studio");

    // 16x16 room, 4 high, walls half a unit thick
    let half = 8.0;
    let height = 4.0;
    let thick = 0.5;

    root.add_child(SceneNode::new("floor").with_triangles(box_triangles(
        Vec3::new(-half, -thick, -half),
        Vec3::new(half, 0.0, half),
    )));

    root.add_child(SceneNode::new("wall_north").with_triangles(box_triangles(
        Vec3::new(-half, 0.0, -half - thick),
        Vec3::new(half, height, -half),
    )));
    root.add_child(SceneNode::new("wall_south").with_triangles(box_triangles(
        Vec3::new(-half, 0.0, half),
        Vec3::new(half, height, half + thick),
    )));
    root.add_child(SceneNode::new("wall_west").with_triangles(box_triangles(
        Vec3::new(-half - thick, 0.0, -half),
        Vec3::new(-half, height, half),
    )));
    root.add_child(SceneNode::new("wall_east").with_triangles(box_triangles(
        Vec3::new(half, 0.0, -half),
        Vec3::new(half + thick, height, half),
    )));

    // Low step near the middle, for the easing path to climb
    root.add_child(SceneNode::new("step").with_triangles(box_triangles(
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(3.0, 0.15, 3.0),
    )));

    // Tagged props along the north wall, at gaze height
    root.add_child(SceneNode::new("prateleira_cima").with_triangles(box_triangles(
        Vec3::new(-3.0, 1.4, -half + 0.1),
        Vec3::new(-1.0, 2.0, -half + 0.6),
    )));
    root.add_child(SceneNode::new("MIXER_e_vinil").with_triangles(box_triangles(
        Vec3::new(1.0, 0.8, -half + 0.1),
        Vec3::new(3.0, 1.3, -half + 0.9),
    )));

    info!(
        "studio scene created with {} collision triangles",
        root.triangle_count()
    );
    root
}
