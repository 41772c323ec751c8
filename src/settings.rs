use std::path::Path;

use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How the fall-time accumulator advances each `update` call.
///
/// `FixedStep` advances by a constant increment per call, which makes fall
/// speed frame-rate dependent. `Scaled` advances by the frame delta instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FallClock {
    FixedStep(f32),
    Scaled,
}

impl FallClock {
    pub fn advance(&self, dt: f32) -> f32 {
        match self {
            FallClock::FixedStep(step) => *step,
            FallClock::Scaled => dt,
        }
    }
}

/// Navigation tuning knobs. Every field takes effect on the next call that
/// reads it; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSettings {
    pub apply_gravity: bool,
    pub apply_collision: bool,
    pub position_easing: bool,
    pub invert_look: bool,
    pub look_speed: f32,
    pub move_speed: f32,
    pub player_height: f32,
    pub gravity_scale: f32,
    pub fall_clock: FallClock,
    /// Offset added to the camera position before the downward ground ray.
    pub gravity_ray_offset: [f32; 3],
    /// Offset added to the camera position before obstacle rays. Defaults to
    /// the same downward offset as the ground check, so obstacle rays start
    /// at shin height rather than eye height.
    pub collision_ray_offset: [f32; 3],
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            apply_gravity: true,
            apply_collision: true,
            position_easing: true,
            invert_look: false,
            look_speed: 0.008,
            move_speed: 0.02,
            player_height: 1.7,
            gravity_scale: 1.0,
            fall_clock: FallClock::FixedStep(0.01),
            gravity_ray_offset: [0.0, -1.0, 0.0],
            collision_ray_offset: [0.0, -1.0, 0.0],
        }
    }
}

impl NavSettings {
    /// Pitch-delta sign multiplier derived from the inversion flag
    pub fn look_sign(&self) -> f32 {
        if self.invert_look {
            -1.0
        } else {
            1.0
        }
    }

    pub fn gravity_ray_offset(&self) -> Vec3 {
        Vec3::from_array(self.gravity_ray_offset)
    }

    pub fn collision_ray_offset(&self) -> Vec3 {
        Vec3::from_array(self.collision_ray_offset)
    }

    /// Load settings from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let settings = serde_json::from_str(&data)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        Ok(settings)
    }
}
