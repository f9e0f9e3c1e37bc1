//! Camera tracking providers
//!
//! A provider yields the latest camera-to-world transform once per render
//! tick, or `None` while tracking has not converged.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::{Mat3, Mat4, Vec3};

/// Source of per-frame camera transforms.
pub trait TrackingProvider {
    /// Latest camera transform, or `None` when no pose is available.
    fn camera_transform(&mut self) -> Option<Mat4>;
}

impl<F> TrackingProvider for F
where
    F: FnMut() -> Option<Mat4>,
{
    fn camera_transform(&mut self) -> Option<Mat4> {
        self()
    }
}

/// Camera-to-world transform for a camera at `position` looking at `target`.
pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let forward = (target - position).normalize();
    let right = forward.cross(up).normalize();
    let up = right.cross(forward);

    // Camera looks down its local -Z
    let mut transform = Mat4::from_mat3(Mat3::from_cols(right, up, -forward));
    transform.w_axis = position.extend(1.0);
    transform
}

enum Script {
    Recorded(VecDeque<Option<Mat4>>),
    Orbit {
        radius: f32,
        height: f32,
        frames_per_rev: u32,
        warmup_frames: u32,
    },
}

/// Deterministic tracking source for demos, benches and tests.
pub struct ScriptedTracking {
    script: Script,
    frame: u64,
}

impl ScriptedTracking {
    /// Replay a fixed sequence; tracking is lost once it runs out.
    pub fn from_transforms(transforms: impl IntoIterator<Item = Option<Mat4>>) -> Self {
        Self {
            script: Script::Recorded(transforms.into_iter().collect()),
            frame: 0,
        }
    }

    /// Circle the origin at `radius`, `height` above it, always looking at the
    /// origin. The first `warmup_frames` frames report no pose.
    pub fn orbit(radius: f32, height: f32, frames_per_rev: u32, warmup_frames: u32) -> Self {
        Self {
            script: Script::Orbit {
                radius,
                height,
                frames_per_rev: frames_per_rev.max(1),
                warmup_frames,
            },
            frame: 0,
        }
    }

    /// Frames polled so far.
    pub fn frames_polled(&self) -> u64 {
        self.frame
    }
}

impl TrackingProvider for ScriptedTracking {
    fn camera_transform(&mut self) -> Option<Mat4> {
        let frame = self.frame;
        self.frame += 1;

        match &mut self.script {
            Script::Recorded(queue) => queue.pop_front().flatten(),
            Script::Orbit { radius, height, frames_per_rev, warmup_frames } => {
                let warmup = u64::from(*warmup_frames);
                if frame < warmup {
                    return None;
                }
                let t = (frame - warmup) as f32 / *frames_per_rev as f32;
                let angle = TAU * t;
                let position = Vec3::new(*radius * angle.sin(), *height, *radius * angle.cos());
                Some(look_at(position, Vec3::ZERO, Vec3::Y))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CameraPose;

    #[test]
    fn test_look_at_faces_target() {
        let position = Vec3::new(0.0, 0.0, 5.0);
        let transform = look_at(position, Vec3::ZERO, Vec3::Y);
        let pose = CameraPose::from_transform(&transform);
        assert!((pose.location - position).length() < 1e-6);
        assert!((pose.facing - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_recorded_script_then_lost() {
        let mut tracking = ScriptedTracking::from_transforms([None, Some(Mat4::IDENTITY)]);
        assert!(tracking.camera_transform().is_none());
        assert_eq!(tracking.camera_transform(), Some(Mat4::IDENTITY));
        assert!(tracking.camera_transform().is_none());
        assert_eq!(tracking.frames_polled(), 3);
    }

    #[test]
    fn test_orbit_warmup_then_looks_at_origin() {
        let mut tracking = ScriptedTracking::orbit(2.0, 0.0, 8, 3);
        for _ in 0..3 {
            assert!(tracking.camera_transform().is_none());
        }
        for _ in 0..8 {
            let transform = tracking.camera_transform().unwrap();
            let pose = CameraPose::from_transform(&transform);
            assert!((pose.location.length() - 2.0).abs() < 1e-4);
            // One unit ahead lands halfway to the origin
            assert!((pose.placement_point().length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_closure_provider() {
        let mut calls = 0;
        let mut provider = || {
            calls += 1;
            (calls > 1).then_some(Mat4::IDENTITY)
        };
        assert!(provider.camera_transform().is_none());
        assert!(provider.camera_transform().is_some());
    }
}
