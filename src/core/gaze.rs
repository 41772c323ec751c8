use glam::Vec3;

use crate::mesh::{NamedHit, SceneNode};

/// Forward-gaze query: which named scene objects is the camera looking at?
///
/// The host maps the reported names to its own interaction prompts; nothing
/// UI-related lives here.
#[derive(Debug, Clone, Copy)]
pub struct GazeProbe {
    /// Hits beyond this distance are ignored
    pub max_distance: f32,
}

impl GazeProbe {
    pub fn new(max_distance: f32) -> Self {
        Self { max_distance }
    }

    /// Named nodes under the look ray, nearest first
    pub fn probe<'a>(&self, origin: Vec3, forward: Vec3, scene: &'a SceneNode) -> Vec<NamedHit<'a>> {
        scene.pick_named(origin, forward, self.max_distance)
    }

    /// Whether any node whose name contains `tag` is under the look ray
    pub fn looking_at(&self, origin: Vec3, forward: Vec3, scene: &SceneNode, tag: &str) -> bool {
        self.probe(origin, forward, scene)
            .iter()
            .any(|hit| hit.name.contains(tag))
    }
}

impl Default for GazeProbe {
    // Interaction range: about one step in front of the camera
    fn default() -> Self {
        Self::new(2.0)
    }
}
