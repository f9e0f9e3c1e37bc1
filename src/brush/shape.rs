//! Brush shapes, size mapping and the per-shape construction table

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use glam::Quat;
use serde::{Deserialize, Serialize};

use crate::core::Error;

use super::geometry::BrushGeometry;

/// Smallest brush edge length, in meters
pub const MIN_SIZE: f32 = 0.02;
/// Nominal largest brush edge length, in meters
pub const MAX_SIZE: f32 = 0.5;

/// Selectable brush shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushShape {
    Box,
    Capsule,
    Cone,
    Cylinder,
    Pyramid,
    #[default]
    Sphere,
    Torus,
    Tube,
}

impl BrushShape {
    /// All shapes, in picker order
    pub const ALL: [BrushShape; 8] = [
        BrushShape::Box,
        BrushShape::Capsule,
        BrushShape::Cone,
        BrushShape::Cylinder,
        BrushShape::Pyramid,
        BrushShape::Sphere,
        BrushShape::Torus,
        BrushShape::Tube,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BrushShape::Box => "box",
            BrushShape::Capsule => "capsule",
            BrushShape::Cone => "cone",
            BrushShape::Cylinder => "cylinder",
            BrushShape::Pyramid => "pyramid",
            BrushShape::Sphere => "sphere",
            BrushShape::Torus => "torus",
            BrushShape::Tube => "tube",
        }
    }

    /// Construction recipe for this shape
    pub fn recipe(self) -> &'static ShapeRecipe {
        &RECIPES[self as usize]
    }

    /// Geometry and default orientation for a brush of edge size `shape_size`
    pub fn build(self, shape_size: f32) -> (BrushGeometry, Quat) {
        let recipe = self.recipe();
        ((recipe.build)(shape_size), recipe.orientation.to_quat())
    }
}

impl fmt::Display for BrushShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrushShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        BrushShape::ALL
            .into_iter()
            .find(|shape| shape.name() == lower)
            .ok_or_else(|| Error::Config(format!("unknown brush shape '{}'", s)))
    }
}

/// Default orientation applied to a freshly built primitive.
///
/// Rotations turn each primitive's long axis from +Y toward the camera-facing
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    QuarterTurnX,
    QuarterTurnZ,
}

impl Orientation {
    pub fn to_quat(self) -> Quat {
        match self {
            Orientation::Upright => Quat::IDENTITY,
            Orientation::QuarterTurnX => Quat::from_rotation_x(FRAC_PI_2),
            Orientation::QuarterTurnZ => Quat::from_rotation_z(FRAC_PI_2),
        }
    }
}

/// Dimension formula plus default orientation for one shape
pub struct ShapeRecipe {
    pub build: fn(f32) -> BrushGeometry,
    pub orientation: Orientation,
}

// Indexed by `BrushShape as usize`; order must match the enum.
static RECIPES: [ShapeRecipe; 8] = [
    ShapeRecipe { build: box_geometry, orientation: Orientation::Upright },
    ShapeRecipe { build: capsule_geometry, orientation: Orientation::QuarterTurnX },
    ShapeRecipe { build: cone_geometry, orientation: Orientation::QuarterTurnX },
    ShapeRecipe { build: cylinder_geometry, orientation: Orientation::QuarterTurnX },
    ShapeRecipe { build: pyramid_geometry, orientation: Orientation::Upright },
    ShapeRecipe { build: sphere_geometry, orientation: Orientation::Upright },
    ShapeRecipe { build: torus_geometry, orientation: Orientation::QuarterTurnZ },
    ShapeRecipe { build: tube_geometry, orientation: Orientation::QuarterTurnX },
];

fn box_geometry(size: f32) -> BrushGeometry {
    BrushGeometry::Box { width: size, height: size, length: size, chamfer_radius: 0.0 }
}

fn capsule_geometry(size: f32) -> BrushGeometry {
    BrushGeometry::Capsule { cap_radius: size / 8.0, height: size }
}

fn cone_geometry(size: f32) -> BrushGeometry {
    BrushGeometry::Cone { top_radius: 0.0, bottom_radius: size / 2.0, height: size }
}

fn cylinder_geometry(size: f32) -> BrushGeometry {
    BrushGeometry::Cylinder { radius: size / 8.0, height: size }
}

fn pyramid_geometry(size: f32) -> BrushGeometry {
    BrushGeometry::Pyramid { width: size, height: size, length: size }
}

fn sphere_geometry(size: f32) -> BrushGeometry {
    BrushGeometry::Sphere { radius: size / 2.0 }
}

fn torus_geometry(size: f32) -> BrushGeometry {
    BrushGeometry::Torus { ring_radius: size / 2.0, pipe_radius: size / 8.0 }
}

fn tube_geometry(size: f32) -> BrushGeometry {
    BrushGeometry::Tube { inner_radius: size / 10.0, outer_radius: size / 8.0, height: size }
}

/// How a size factor maps onto a brush edge length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMapping {
    /// `min + s * (min + max)`: spans [0.02, 1.02] with the default bounds.
    #[default]
    Faithful,
    /// `min + clamp(s, 0, 1) * (max - min)`: spans exactly [min, max].
    Clamped,
}

/// Bounds and mapping used to turn a size factor into a shape size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSizing {
    pub min_size: f32,
    pub max_size: f32,
    pub mapping: SizeMapping,
}

impl Default for BrushSizing {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
            mapping: SizeMapping::Faithful,
        }
    }
}

impl BrushSizing {
    /// Shape edge length for a size factor. Out-of-range factors are not
    /// rejected under `Faithful`.
    pub fn shape_size(&self, size_factor: f32) -> f32 {
        match self.mapping {
            SizeMapping::Faithful => self.min_size + size_factor * (self.min_size + self.max_size),
            SizeMapping::Clamped => {
                self.min_size + size_factor.clamp(0.0, 1.0) * (self.max_size - self.min_size)
            }
        }
    }
}
