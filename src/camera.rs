use glam::Vec3;

use crate::traits::CameraPose;
use crate::types::Orientation;

/// Walkthrough camera: a world-space position plus yaw/pitch look angles.
/// The basis vectors are rederived from the angles on every call.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Aim the camera at a world-space point
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize();
        self.pitch = dir.y.asin();
        self.yaw = dir.x.atan2(dir.z);
    }
}

impl CameraPose for Camera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn orientation(&self) -> Orientation {
        Orientation::new(self.yaw, self.pitch)
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.yaw = orientation.yaw;
        self.pitch = orientation.pitch;
    }

    fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    fn up(&self) -> Vec3 {
        Vec3::Y
    }
}
