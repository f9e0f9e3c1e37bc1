//! Brush configuration: color, shape, size and spin
//!
//! The settings UI writes a [`SharedBrushSettings`]; the placement controller
//! reads a copied [`BrushSettings`] snapshot once per tracking frame.

pub mod color;
pub mod geometry;
pub mod settings;
pub mod shape;
pub mod trigger;

// Re-exports
pub use color::Rgba;
pub use geometry::BrushGeometry;
pub use settings::{BrushSettings, SharedBrushSettings};
pub use shape::{BrushShape, BrushSizing, Orientation, ShapeRecipe, SizeMapping};
pub use trigger::PaintTrigger;
