use glam::Vec3;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Empty box that unions to whatever it is combined with
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn grow(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Slab-method ray intersection. Returns the entry distance, or the exit
    /// distance when the origin is inside the box, or `None` on a miss.
    /// `direction` must be normalized for the distance to be in world units.
    pub fn intersect_ray(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        const EPSILON: f32 = 1e-8;

        // Clamp near-zero components so the division never explodes
        let inv_dir = Vec3::new(
            if direction.x.abs() < EPSILON { 1.0 / EPSILON.copysign(direction.x) } else { 1.0 / direction.x },
            if direction.y.abs() < EPSILON { 1.0 / EPSILON.copysign(direction.y) } else { 1.0 / direction.y },
            if direction.z.abs() < EPSILON { 1.0 / EPSILON.copysign(direction.z) } else { 1.0 / direction.z },
        );

        let t_min = (self.min - origin) * inv_dir;
        let t_max = (self.max - origin) * inv_dir;

        let t1 = t_min.min(t_max);
        let t2 = t_min.max(t_max);

        let t_near = t1.x.max(t1.y).max(t1.z);
        let t_far = t2.x.min(t2.y).min(t2.z);

        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        if t_near < 0.0 {
            if t_far > 0.001 {
                Some(t_far)
            } else {
                None
            }
        } else {
            Some(t_near)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_box_from_outside() {
        let aabb = Aabb::new(Vec3::new(5.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        let t = aabb
            .intersect_ray(Vec3::ZERO, Vec3::X)
            .expect("ray should hit the box");
        assert!((t - 5.0).abs() < 0.001, "hit distance should be ~5.0, got {}", t);
    }

    #[test]
    fn test_ray_misses_box() {
        let aabb = Aabb::new(Vec3::new(5.0, 5.0, 5.0), Vec3::new(10.0, 10.0, 10.0));
        assert!(aabb.intersect_ray(Vec3::ZERO, Vec3::X).is_none());
    }

    #[test]
    fn test_ray_starts_inside_box() {
        let aabb = Aabb::new(Vec3::new(0.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        let t = aabb
            .intersect_ray(Vec3::new(5.0, 0.0, 0.0), Vec3::X)
            .expect("should return the exit distance when starting inside");
        assert!(t > 0.0);
        assert!((t - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_ray_pointing_away() {
        let aabb = Aabb::new(Vec3::new(5.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        assert!(aabb.intersect_ray(Vec3::ZERO, -Vec3::X).is_none());
    }

    #[test]
    fn test_axis_parallel_ray() {
        // Direction with a zero component must not divide by zero
        let aabb = Aabb::new(Vec3::new(-1.0, 2.0, -1.0), Vec3::new(1.0, 4.0, 1.0));
        let t = aabb
            .intersect_ray(Vec3::new(0.0, 0.0, 0.0), Vec3::Y)
            .expect("vertical ray through the box should hit");
        assert!((t - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_union_and_grow() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0));
        let u = a.union(&b);
        assert_eq!(u.min, Vec3::ZERO);
        assert_eq!(u.max, Vec3::splat(3.0));

        let mut g = Aabb::EMPTY;
        assert!(g.is_empty());
        g.grow(Vec3::new(-1.0, 0.0, 2.0));
        g.grow(Vec3::new(1.0, 5.0, -2.0));
        assert!(!g.is_empty());
        assert_eq!(g.min, Vec3::new(-1.0, 0.0, -2.0));
        assert_eq!(g.max, Vec3::new(1.0, 5.0, 2.0));
    }
}
