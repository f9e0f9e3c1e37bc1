//! Perpetual rotation of a painted node

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Seconds per full revolution for spinning brushes
pub const DEFAULT_SPIN_PERIOD: f32 = 3.0;

/// Rotate by a full turn about `axis` every `period` seconds, forever.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinAction {
    /// Unit rotation axis
    pub axis: Vec3,
    /// Seconds per revolution
    pub period: f32,
}

impl SpinAction {
    pub fn new(axis: Vec3, period: f32) -> Self {
        Self {
            axis: axis.normalize_or(Vec3::Y),
            period,
        }
    }

    /// Spin about world up (+Y)
    pub fn about_vertical(period: f32) -> Self {
        Self::new(Vec3::Y, period)
    }

    /// Radians per second
    pub fn angular_velocity(&self) -> f32 {
        if self.period > 0.0 { TAU / self.period } else { 0.0 }
    }

    /// Accumulated angle after `elapsed` seconds, wrapped to one turn
    pub fn angle_at(&self, elapsed: f32) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }
        TAU * (elapsed / self.period).rem_euclid(1.0)
    }

    /// Rotation after `elapsed` seconds of playback
    pub fn rotation_at(&self, elapsed: f32) -> Quat {
        Quat::from_axis_angle(self.axis, self.angle_at(elapsed))
    }
}

impl Default for SpinAction {
    fn default() -> Self {
        Self::about_vertical(DEFAULT_SPIN_PERIOD)
    }
}
