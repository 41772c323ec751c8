use std::rc::Rc;

use glam::Vec3;
use log::debug;

use crate::settings::NavSettings;
use crate::traits::{Button, CameraPose, Collider, EventKind, InputEvent};
use crate::types::Orientation;

/// Ground gap below which the easing branch takes over instead of free fall
const EASE_THRESHOLD: f32 = 0.2;
/// Fraction of the remaining height gap closed per easing step
const EASE_FACTOR: f32 = 0.08;
/// Obstacle hits closer than this cancel the axis for the frame
const OBSTACLE_STOP_DISTANCE: f32 = 0.3;

fn kind_bit(kind: EventKind) -> u8 {
    match kind {
        EventKind::PointerDown => 1 << 0,
        EventKind::PointerMove => 1 << 1,
        EventKind::PointerUp => 1 << 2,
        EventKind::KeyDown => 1 << 3,
        EventKind::KeyUp => 1 << 4,
    }
}

/// The set of event kinds the controller currently accepts. Stands in for
/// the listener add/remove a browser host would do: an event whose kind is
/// not in the set is dropped before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Subscriptions(u8);

impl Subscriptions {
    pub fn subscribe(&mut self, kind: EventKind) {
        self.0 |= kind_bit(kind);
    }

    pub fn unsubscribe(&mut self, kind: EventKind) {
        self.0 &= !kind_bit(kind);
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.0 & kind_bit(kind) != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// First-person navigation controller.
///
/// Owns look angles, per-frame movement intent and fall state; reads and
/// writes an externally-owned [`CameraPose`] and queries an optional
/// [`Collider`] for ground and obstacles. Call [`handle_event`] for every
/// input event, then [`update`] once per frame after input dispatch.
///
/// [`handle_event`]: FirstPersonControls::handle_event
/// [`update`]: FirstPersonControls::update
pub struct FirstPersonControls {
    settings: NavSettings,
    collider: Option<Rc<dyn Collider>>,
    enabled: bool,
    subscriptions: Subscriptions,
    yaw: f32,
    pitch: f32,
    drag_anchor: (f32, f32),
    intent_lateral: f32,
    intent_forward: f32,
    fall_time: f32,
}

impl FirstPersonControls {
    pub fn new(settings: NavSettings) -> Self {
        Self {
            settings,
            collider: None,
            enabled: false,
            subscriptions: Subscriptions::default(),
            yaw: 0.0,
            pitch: 0.0,
            drag_anchor: (0.0, 0.0),
            intent_lateral: 0.0,
            intent_forward: 0.0,
            fall_time: 0.0,
        }
    }

    pub fn settings(&self) -> &NavSettings {
        &self.settings
    }

    /// Settings take effect on the next call that reads them
    pub fn settings_mut(&mut self) -> &mut NavSettings {
        &mut self.settings
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn subscriptions(&self) -> Subscriptions {
        self.subscriptions
    }

    /// Current movement intent as (lateral, forward), each in {-1, 0, 1}
    pub fn intent(&self) -> (f32, f32) {
        (self.intent_lateral, self.intent_forward)
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::new(self.yaw, self.pitch)
    }

    /// Current fall-clock accumulator; zero while grounded
    pub fn fall_time(&self) -> f32 {
        self.fall_time
    }

    /// Replace the geometry used by subsequent ground and obstacle rays.
    /// `None` disables gravity and collision checks until geometry arrives.
    pub fn set_collider(&mut self, collider: Option<Rc<dyn Collider>>) {
        debug!(
            "collider {}",
            if collider.is_some() { "set" } else { "cleared" }
        );
        self.collider = collider;
    }

    /// Start accepting input. Captures the camera's current orientation into
    /// the yaw/pitch accumulators so toggling never snaps the view.
    /// Idempotent while already enabled.
    pub fn enable(&mut self, camera: &impl CameraPose) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        let o = camera.orientation();
        self.yaw = o.yaw;
        self.pitch = o.pitch;
        self.subscriptions.subscribe(EventKind::PointerDown);
        self.subscriptions.subscribe(EventKind::PointerUp);
        self.subscriptions.subscribe(EventKind::KeyDown);
        self.subscriptions.subscribe(EventKind::KeyUp);
        debug!("controls enabled (yaw {:.3}, pitch {:.3})", self.yaw, self.pitch);
    }

    /// Stop accepting input. Clears every subscription, including an
    /// in-flight pointer drag. Idempotent while already disabled.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        self.subscriptions.clear();
        debug!("controls disabled");
    }

    /// Dispatch a raw input event. Events whose kind is not currently
    /// subscribed are dropped, which is what makes disable and drag scoping
    /// airtight.
    pub fn handle_event(&mut self, event: InputEvent, camera: &mut impl CameraPose) {
        if !self.subscriptions.contains(event.kind()) {
            return;
        }
        match event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y, camera),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::KeyDown(button) => self.on_key(button, true),
            InputEvent::KeyUp(button) => self.on_key(button, false),
        }
    }

    /// Programmatic look delta, same formulas as a pointer drag. Available
    /// to non-pointer callers regardless of subscription state.
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32, camera: &mut impl CameraPose) {
        self.yaw -= d_yaw * self.settings.look_speed;
        self.pitch -= d_pitch * self.settings.look_sign() * self.settings.look_speed;
        camera.set_orientation(Orientation::new(self.yaw, self.pitch));
    }

    fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.drag_anchor = (x, y);
        self.subscriptions.subscribe(EventKind::PointerMove);
    }

    fn on_pointer_move(&mut self, x: f32, y: f32, camera: &mut impl CameraPose) {
        let dx = x - self.drag_anchor.0;
        let dy = y - self.drag_anchor.1;
        self.yaw -= dx * self.settings.look_speed;
        self.pitch -= dy * self.settings.look_sign() * self.settings.look_speed;
        camera.set_orientation(Orientation::new(self.yaw, self.pitch));
        self.drag_anchor = (x, y);
    }

    fn on_pointer_up(&mut self) {
        self.subscriptions.unsubscribe(EventKind::PointerMove);
    }

    fn on_key(&mut self, button: Button, down: bool) {
        // Last write wins on press; release always zeroes the axis, even
        // while the opposite key is still held.
        let value = |v: f32| if down { v } else { 0.0 };
        match button {
            Button::KeyW | Button::ArrowUp => self.intent_forward = value(1.0),
            Button::KeyS | Button::ArrowDown => self.intent_forward = value(-1.0),
            Button::KeyD | Button::ArrowRight => self.intent_lateral = value(1.0),
            Button::KeyA | Button::ArrowLeft => self.intent_lateral = value(-1.0),
            _ => {}
        }
    }

    /// Per-frame physics: gravity resolution, then collision-checked
    /// translation. Call at most once per rendered frame, after input
    /// dispatch. Runs whether or not the controls are enabled, so gravity
    /// keeps acting while a modal holds the controls disabled.
    pub fn update(&mut self, dt: f32, camera: &mut impl CameraPose) {
        self.resolve_gravity(dt, camera);
        self.resolve_translation(camera);
    }

    fn resolve_gravity(&mut self, dt: f32, camera: &mut impl CameraPose) {
        if !self.settings.apply_gravity {
            return;
        }
        let Some(collider) = self.collider.clone() else {
            return;
        };

        self.fall_time += self.settings.fall_clock.advance(dt);
        let mut falling = true;

        let origin = camera.position() + self.settings.gravity_ray_offset();
        if let Some(hit) = collider.raycast(origin, -Vec3::Y) {
            let ground_y = hit.point.y + self.settings.player_height;
            let mut position = camera.position();

            if self.settings.position_easing {
                if ground_y >= position.y || ground_y - position.y < EASE_THRESHOLD {
                    position.y += (ground_y - position.y) * EASE_FACTOR;
                    camera.set_position(position);
                    self.fall_time = 0.0;
                    return;
                }
            } else if hit.distance < self.settings.player_height {
                position.y = ground_y;
                camera.set_position(position);
                self.fall_time = 0.0;
                falling = false;
            }
        }

        if falling {
            let mut position = camera.position();
            position.y -= self.settings.gravity_scale * self.fall_time * self.fall_time;
            camera.set_position(position);
        }
    }

    fn resolve_translation(&mut self, camera: &mut impl CameraPose) {
        if self.intent_lateral != 0.0 {
            let displacement = camera.right() * self.intent_lateral;
            self.step_axis(camera, displacement);
        }
        if self.intent_forward != 0.0 {
            // Forward derived from up x right stays orthogonal and horizontal
            let displacement = camera.up().cross(camera.right()) * self.intent_forward;
            self.step_axis(camera, displacement);
        }
    }

    // One axis, resolved independently of the other: a blocked lateral step
    // never cancels the forward step in the same frame.
    fn step_axis(&self, camera: &mut impl CameraPose, displacement: Vec3) {
        if self.settings.apply_collision {
            if let Some(collider) = &self.collider {
                let origin = camera.position() + self.settings.collision_ray_offset();
                if let Some(hit) = collider.raycast(origin, displacement) {
                    if hit.distance < OBSTACLE_STOP_DISTANCE {
                        return;
                    }
                }
            }
        }
        camera.set_position(camera.position() + displacement * self.settings.move_speed);
    }
}

impl Default for FirstPersonControls {
    fn default() -> Self {
        Self::new(NavSettings::default())
    }
}
