use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use scene_walker::scenes::create_studio_scene;
use scene_walker::{
    Button, Camera, CameraPose, Collider, FallClock, FirstPersonControls, InputEvent, RayHit,
};

const DT: f32 = 1.0 / 60.0;

/// Infinite horizontal plane; only rays with a vertical component can hit it
struct FlatGround {
    height: f32,
}

impl Collider for FlatGround {
    fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<RayHit> {
        let dir = direction.normalize();
        if dir.y.abs() < 1e-6 {
            return None;
        }
        let t = (self.height - origin.y) / dir.y;
        if t < 0.0 {
            return None;
        }
        Some(RayHit {
            distance: t,
            point: origin + dir * t,
        })
    }
}

/// Reports a hit at a fixed distance for every ray
struct FixedWall {
    distance: f32,
}

impl Collider for FixedWall {
    fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<RayHit> {
        let dir = direction.normalize();
        Some(RayHit {
            distance: self.distance,
            point: origin + dir * self.distance,
        })
    }
}

/// Never hits anything
struct Void;

impl Collider for Void {
    fn raycast(&self, _origin: Vec3, _direction: Vec3) -> Option<RayHit> {
        None
    }
}

/// Blocks laterally-dominant rays only, and records every ray origin
struct SideBlocker {
    origins: RefCell<Vec<Vec3>>,
}

impl SideBlocker {
    fn new() -> Self {
        Self {
            origins: RefCell::new(Vec::new()),
        }
    }
}

impl Collider for SideBlocker {
    fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<RayHit> {
        self.origins.borrow_mut().push(origin);
        if direction.x.abs() > direction.z.abs() {
            Some(RayHit {
                distance: 0.1,
                point: origin + direction.normalize() * 0.1,
            })
        } else {
            None
        }
    }
}

fn walking_controls(collider: Rc<dyn Collider>) -> (FirstPersonControls, Camera) {
    let camera = Camera::new(Vec3::new(0.0, 1.7, 0.0));
    let mut controls = FirstPersonControls::default();
    controls.enable(&camera);
    controls.set_collider(Some(collider));
    (controls, camera)
}

mod gravity {
    use super::*;

    #[test]
    fn test_easing_converges_to_player_height() {
        let (mut controls, mut camera) = walking_controls(Rc::new(FlatGround { height: 0.0 }));
        camera.position.y = 3.0;

        for _ in 0..200 {
            controls.update(DT, &mut camera);
        }

        assert!(
            (camera.position.y - 1.7).abs() < 0.01,
            "camera should settle at player_height above the ground, got {}",
            camera.position.y
        );
        assert_eq!(controls.fall_time(), 0.0, "fall clock resets on ground contact");
    }

    #[test]
    fn test_easing_lifts_camera_from_below_ground_level() {
        let (mut controls, mut camera) = walking_controls(Rc::new(FlatGround { height: 0.0 }));
        camera.position.y = 1.0;

        for _ in 0..200 {
            controls.update(DT, &mut camera);
        }
        assert!(
            (camera.position.y - 1.7).abs() < 0.01,
            "easing also pulls the camera up onto low ground, got {}",
            camera.position.y
        );
    }

    #[test]
    fn test_snap_without_easing() {
        let (mut controls, mut camera) = walking_controls(Rc::new(FlatGround { height: 0.0 }));
        controls.settings_mut().position_easing = false;
        camera.position.y = 2.5; // ray travels 1.5 < player_height

        controls.update(DT, &mut camera);

        assert_eq!(camera.position.y, 1.7, "snap goes straight to ground + player_height");
        assert_eq!(controls.fall_time(), 0.0);
    }

    #[test]
    fn test_quadratic_fall_when_ground_is_far_without_easing() {
        let (mut controls, mut camera) = walking_controls(Rc::new(FlatGround { height: 0.0 }));
        controls.settings_mut().position_easing = false;
        camera.position.y = 10.0; // ray travels 9.0 >= player_height

        controls.update(DT, &mut camera);
        let expected = 10.0 - 1.0 * 0.01_f32.powi(2);
        assert!(
            (camera.position.y - expected).abs() < 1e-6,
            "first fall step subtracts g * t^2, got {}",
            camera.position.y
        );

        controls.update(DT, &mut camera);
        let expected = expected - 1.0 * 0.02_f32.powi(2);
        assert!((camera.position.y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_step_clock_ignores_frame_delta() {
        let run = |dt: f32| {
            let (mut controls, mut camera) = walking_controls(Rc::new(Void));
            camera.position.y = 10.0;
            for _ in 0..20 {
                controls.update(dt, &mut camera);
            }
            camera.position.y
        };
        assert_eq!(
            run(0.001),
            run(0.1),
            "the default fall clock is per-call, not per-second"
        );
    }

    #[test]
    fn test_scaled_clock_uses_frame_delta() {
        let run = |dt: f32| {
            let (mut controls, mut camera) = walking_controls(Rc::new(Void));
            controls.settings_mut().fall_clock = FallClock::Scaled;
            camera.position.y = 10.0;
            for _ in 0..20 {
                controls.update(dt, &mut camera);
            }
            camera.position.y
        };
        assert!(
            run(0.1) < run(0.001),
            "longer frames must fall further with the scaled clock"
        );
    }

    #[test]
    fn test_no_collider_means_no_gravity() {
        let camera_start = Vec3::new(0.0, 5.0, 0.0);
        let mut camera = Camera::new(camera_start);
        let mut controls = FirstPersonControls::default();
        controls.enable(&camera);

        for _ in 0..50 {
            controls.update(DT, &mut camera);
        }
        assert_eq!(camera.position, camera_start, "absent geometry disables gravity");
    }

    #[test]
    fn test_gravity_toggle_takes_effect_immediately() {
        let (mut controls, mut camera) = walking_controls(Rc::new(FlatGround { height: 0.0 }));
        controls.settings_mut().apply_gravity = false;
        camera.position.y = 5.0;

        controls.update(DT, &mut camera);
        assert_eq!(camera.position.y, 5.0);

        controls.settings_mut().apply_gravity = true;
        controls.update(DT, &mut camera);
        assert!(camera.position.y < 5.0, "re-enabled gravity starts easing down");
    }
}

mod collision {
    use super::*;

    #[test]
    fn test_obstacle_inside_stop_distance_blocks_the_axis() {
        let (mut controls, mut camera) = walking_controls(Rc::new(FixedWall { distance: 0.25 }));
        controls.settings_mut().apply_gravity = false;
        let start = camera.position;

        controls.handle_event(InputEvent::KeyDown(Button::KeyW), &mut camera);
        controls.update(DT, &mut camera);

        assert_eq!(camera.position, start, "a hit at 0.25 < 0.3 cancels the step");
    }

    #[test]
    fn test_obstacle_beyond_stop_distance_allows_the_step() {
        let (mut controls, mut camera) = walking_controls(Rc::new(FixedWall { distance: 0.35 }));
        controls.settings_mut().apply_gravity = false;
        let start = camera.position;
        let forward = camera.up().cross(camera.right());

        controls.handle_event(InputEvent::KeyDown(Button::KeyW), &mut camera);
        controls.update(DT, &mut camera);

        let expected = start + forward * 0.02;
        assert!(
            (camera.position - expected).length() < 1e-6,
            "a hit at 0.35 leaves the full move_speed step, got {:?}",
            camera.position
        );
    }

    #[test]
    fn test_axes_resolve_independently() {
        let blocker = Rc::new(SideBlocker::new());
        let (mut controls, mut camera) = walking_controls(blocker.clone());
        controls.settings_mut().apply_gravity = false;
        let start = camera.position;
        let forward = camera.up().cross(camera.right());
        let right = camera.right();

        controls.handle_event(InputEvent::KeyDown(Button::KeyW), &mut camera);
        controls.handle_event(InputEvent::KeyDown(Button::KeyD), &mut camera);
        controls.update(DT, &mut camera);

        let moved = camera.position - start;
        assert!(
            (moved - forward * 0.02).length() < 1e-6,
            "forward advances while the lateral axis is blocked, moved {:?}",
            moved
        );
        assert!(moved.dot(right).abs() < 1e-6, "no lateral drift past a blocker");
    }

    #[test]
    fn test_obstacle_rays_start_at_the_configured_offset() {
        let blocker = Rc::new(SideBlocker::new());
        let (mut controls, mut camera) = walking_controls(blocker.clone());
        controls.settings_mut().apply_gravity = false;

        controls.handle_event(InputEvent::KeyDown(Button::KeyD), &mut camera);
        controls.update(DT, &mut camera);

        let origins = blocker.origins.borrow();
        assert!(!origins.is_empty());
        let expected = Vec3::new(0.0, 0.7, 0.0); // camera at 1.7 plus (0, -1, 0)
        assert!(
            (origins[0] - expected).length() < 1e-6,
            "obstacle ray starts below the camera by default, got {:?}",
            origins[0]
        );
    }

    #[test]
    fn test_collision_disabled_moves_through_walls() {
        let (mut controls, mut camera) = walking_controls(Rc::new(FixedWall { distance: 0.1 }));
        controls.settings_mut().apply_gravity = false;
        controls.settings_mut().apply_collision = false;
        let start = camera.position;

        controls.handle_event(InputEvent::KeyDown(Button::KeyW), &mut camera);
        controls.update(DT, &mut camera);

        assert!((camera.position - start).length() > 0.0, "collision off means free movement");
    }

    #[test]
    fn test_removing_the_collider_mid_session_skips_physics() {
        let (mut controls, mut camera) = walking_controls(Rc::new(FlatGround { height: 0.0 }));
        camera.position.y = 3.0;
        controls.update(DT, &mut camera);
        assert!(camera.position.y < 3.0, "easing was active before the swap");

        let y_before = camera.position.y;
        controls.set_collider(None);
        controls.update(DT, &mut camera);
        assert_eq!(camera.position.y, y_before, "no collider, no gravity, no error");
    }
}

mod studio_scene {
    use super::*;

    #[test]
    fn test_walking_into_the_west_wall_stops() {
        let scene = Rc::new(create_studio_scene());
        let mut camera = Camera::new(Vec3::new(-7.75, 1.7, 0.0));
        camera.yaw = -std::f32::consts::FRAC_PI_2; // facing -X, straight at the wall
        let mut controls = FirstPersonControls::default();
        controls.settings_mut().apply_gravity = false;
        controls.enable(&camera);
        controls.set_collider(Some(scene.clone()));

        controls.handle_event(InputEvent::KeyDown(Button::KeyW), &mut camera);
        controls.update(DT, &mut camera);

        assert!(
            (camera.position.x - (-7.75)).abs() < 1e-6,
            "wall 0.25 away blocks the step, got x = {}",
            camera.position.x
        );
    }

    #[test]
    fn test_walking_toward_the_west_wall_from_further_away_advances() {
        let scene = Rc::new(create_studio_scene());
        let mut camera = Camera::new(Vec3::new(-7.65, 1.7, 0.0));
        camera.yaw = -std::f32::consts::FRAC_PI_2;
        let mut controls = FirstPersonControls::default();
        controls.settings_mut().apply_gravity = false;
        controls.enable(&camera);
        controls.set_collider(Some(scene.clone()));

        controls.handle_event(InputEvent::KeyDown(Button::KeyW), &mut camera);
        controls.update(DT, &mut camera);

        assert!(
            (camera.position.x - (-7.67)).abs() < 1e-4,
            "wall 0.35 away leaves the step intact, got x = {}",
            camera.position.x
        );
    }

    #[test]
    fn test_settling_onto_the_studio_floor() {
        let scene = Rc::new(create_studio_scene());
        let mut camera = Camera::new(Vec3::new(-2.0, 6.0, 0.0));
        let mut controls = FirstPersonControls::default();
        controls.enable(&camera);
        controls.set_collider(Some(scene.clone()));

        for _ in 0..400 {
            controls.update(DT, &mut camera);
        }
        assert!(
            (camera.position.y - 1.7).abs() < 0.02,
            "camera should come to rest standing on the floor, got y = {}",
            camera.position.y
        );
    }
}
