//! Camera pose extracted from a tracked camera transform

use crate::core::types::{Mat4, Vec3};

/// Camera location and facing for one tracking frame.
///
/// The facing vector is the transform's third column negated, left at whatever
/// scale the transform carries. Tracking transforms are rigid, so in practice
/// it is unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Translation component of the camera transform
    pub location: Vec3,
    /// Direction the camera looks along
    pub facing: Vec3,
}

impl CameraPose {
    /// Build a pose from a column-major camera-to-world transform.
    pub fn from_transform(transform: &Mat4) -> Self {
        Self {
            location: transform.w_axis.truncate(),
            facing: -transform.z_axis.truncate(),
        }
    }

    /// Point `distance` facing-lengths ahead of the camera.
    pub fn ahead(&self, distance: f32) -> Vec3 {
        self.location + self.facing * distance
    }

    /// Paint placement point: one facing offset ahead of the camera.
    pub fn placement_point(&self) -> Vec3 {
        self.ahead(1.0)
    }
}
