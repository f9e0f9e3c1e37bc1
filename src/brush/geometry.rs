//! Primitive geometry descriptors handed to the renderer
//!
//! Dimensions follow the usual scene-kit conventions: shapes are centered on
//! the origin with their long axis along +Y before any orientation is applied.
//! Zero or negative dimensions are not rejected.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Shape-specific primitive with its derived dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BrushGeometry {
    Box { width: f32, height: f32, length: f32, chamfer_radius: f32 },
    Capsule { cap_radius: f32, height: f32 },
    Cone { top_radius: f32, bottom_radius: f32, height: f32 },
    Cylinder { radius: f32, height: f32 },
    Pyramid { width: f32, height: f32, length: f32 },
    Sphere { radius: f32 },
    Torus { ring_radius: f32, pipe_radius: f32 },
    Tube { inner_radius: f32, outer_radius: f32, height: f32 },
}

impl BrushGeometry {
    /// Local-space half extents of the unrotated primitive
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            BrushGeometry::Box { width, height, length, .. } => {
                Vec3::new(width, height, length) * 0.5
            }
            BrushGeometry::Capsule { cap_radius, height } => {
                // Capsule height already includes both caps
                Vec3::new(cap_radius, height * 0.5, cap_radius)
            }
            BrushGeometry::Cone { top_radius, bottom_radius, height } => {
                let r = top_radius.max(bottom_radius);
                Vec3::new(r, height * 0.5, r)
            }
            BrushGeometry::Cylinder { radius, height } => Vec3::new(radius, height * 0.5, radius),
            BrushGeometry::Pyramid { width, height, length } => {
                Vec3::new(width, height, length) * 0.5
            }
            BrushGeometry::Sphere { radius } => Vec3::splat(radius),
            BrushGeometry::Torus { ring_radius, pipe_radius } => {
                let r = ring_radius + pipe_radius;
                Vec3::new(r, pipe_radius, r)
            }
            BrushGeometry::Tube { outer_radius, height, .. } => {
                Vec3::new(outer_radius, height * 0.5, outer_radius)
            }
        }
    }

    /// Axis-aligned half extents after rotating the primitive.
    /// Conservative for rotations that are not multiples of 90 degrees.
    pub fn rotated_half_extents(&self, rotation: Quat) -> Vec3 {
        let m = Mat3::from_quat(rotation);
        let e = self.half_extents();
        Vec3::new(
            m.x_axis.x.abs() * e.x + m.y_axis.x.abs() * e.y + m.z_axis.x.abs() * e.z,
            m.x_axis.y.abs() * e.x + m.y_axis.y.abs() * e.y + m.z_axis.y.abs() * e.z,
            m.x_axis.z.abs() * e.x + m.y_axis.z.abs() * e.y + m.z_axis.z.abs() * e.z,
        )
    }

    /// True when any dimension is zero or negative
    pub fn is_degenerate(&self) -> bool {
        let e = self.half_extents();
        e.x <= 0.0 || e.y <= 0.0 || e.z <= 0.0
    }
}
