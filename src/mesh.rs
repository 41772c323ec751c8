use glam::Vec3;

use crate::math::{intersect_triangle, Aabb};
use crate::traits::Collider;
use crate::types::{RayHit, Triangle};

/// A named node in the collision hierarchy. Carries its own triangles plus
/// child nodes; bounds are kept up to date as geometry is added so raycasts
/// can skip whole subtrees.
#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    triangles: Vec<Triangle>,
    children: Vec<SceneNode>,
    bounds: Aabb,
}

/// A hit on a named node, reported by [`SceneNode::pick_named`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedHit<'a> {
    pub name: &'a str,
    pub distance: f32,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            triangles: Vec::new(),
            children: Vec::new(),
            bounds: Aabb::EMPTY,
        }
    }

    pub fn with_triangles(mut self, triangles: Vec<Triangle>) -> Self {
        self.add_triangles(triangles);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn add_triangles(&mut self, triangles: Vec<Triangle>) {
        for tri in &triangles {
            self.bounds.grow(tri.a);
            self.bounds.grow(tri.b);
            self.bounds.grow(tri.c);
        }
        self.triangles.extend(triangles);
    }

    pub fn add_child(&mut self, child: SceneNode) {
        if !child.bounds.is_empty() {
            self.bounds = self.bounds.union(&child.bounds);
        }
        self.children.push(child);
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() + self.children.iter().map(SceneNode::triangle_count).sum::<usize>()
    }

    // Nearest hit in this subtree; `direction` must be normalized.
    fn raycast_subtree(&self, origin: Vec3, direction: Vec3, best: &mut Option<f32>) {
        if self.bounds.is_empty() {
            return;
        }
        // The slab test reports the exit distance when the origin is inside
        // the box, which must not be used to cull the subtree.
        if !self.bounds.contains(origin) {
            match self.bounds.intersect_ray(origin, direction) {
                Some(entry) => {
                    if best.is_some_and(|b| entry >= b) {
                        return;
                    }
                }
                None => return,
            }
        }

        for tri in &self.triangles {
            if let Some(t) = intersect_triangle(origin, direction, tri) {
                if best.map_or(true, |b| t < b) {
                    *best = Some(t);
                }
            }
        }
        for child in &self.children {
            child.raycast_subtree(origin, direction, best);
        }
    }

    /// Collect hits on named nodes within `max_distance`, nearest first.
    /// Unnamed grouping nodes are traversed but never reported.
    pub fn pick_named(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Vec<NamedHit<'_>> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return Vec::new();
        }
        let mut hits = Vec::new();
        self.pick_subtree(origin, dir, max_distance, &mut hits);
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn pick_subtree<'a>(
        &'a self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        hits: &mut Vec<NamedHit<'a>>,
    ) {
        if self.bounds.is_empty() {
            return;
        }
        if !self.bounds.contains(origin) {
            match self.bounds.intersect_ray(origin, direction) {
                Some(entry) if entry <= max_distance => {}
                _ => return,
            }
        }

        let mut nearest: Option<f32> = None;
        for tri in &self.triangles {
            if let Some(t) = intersect_triangle(origin, direction, tri) {
                if t <= max_distance && nearest.map_or(true, |b| t < b) {
                    nearest = Some(t);
                }
            }
        }
        if let Some(distance) = nearest {
            if !self.name.is_empty() {
                hits.push(NamedHit {
                    name: &self.name,
                    distance,
                });
            }
        }
        for child in &self.children {
            child.pick_subtree(origin, direction, max_distance, hits);
        }
    }
}

impl Collider for SceneNode {
    fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }
        let mut best = None;
        self.raycast_subtree(origin, dir, &mut best);
        best.map(|distance| RayHit {
            distance,
            point: origin + dir * distance,
        })
    }
}
