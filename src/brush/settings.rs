//! User-selected brush configuration

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::shape::BrushShape;

/// Current brush configuration. Plain data; nothing is validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    pub color: Rgba,
    pub shape: BrushShape,
    /// Nominally in [0, 1]; values outside are passed through
    pub size_factor: f32,
    pub spinning: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Rgba::ORANGE,
            shape: BrushShape::Sphere,
            size_factor: 0.5,
            spinning: false,
        }
    }
}

impl BrushSettings {
    pub fn new(color: Rgba, shape: BrushShape, size_factor: f32, spinning: bool) -> Self {
        Self { color, shape, size_factor, spinning }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_shape(mut self, shape: BrushShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_size_factor(mut self, size_factor: f32) -> Self {
        self.size_factor = size_factor;
        self
    }

    pub fn with_spinning(mut self, spinning: bool) -> Self {
        self.spinning = spinning;
        self
    }
}

/// Brush settings shared between a writer (settings UI) and readers
/// (tracking callback).
///
/// Readers always receive a whole copy taken under the lock, so a frame never
/// mixes a new shape with an old color.
#[derive(Debug, Clone, Default)]
pub struct SharedBrushSettings {
    inner: Arc<RwLock<BrushSettings>>,
}

impl SharedBrushSettings {
    pub fn new(settings: BrushSettings) -> Self {
        Self { inner: Arc::new(RwLock::new(settings)) }
    }

    /// Consistent copy of all four fields
    pub fn snapshot(&self) -> BrushSettings {
        // A panicked writer cannot leave a Copy struct half-written
        *self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Apply several changes as one atomic update
    pub fn update(&self, f: impl FnOnce(&mut BrushSettings)) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut *guard);
    }

    pub fn replace(&self, settings: BrushSettings) {
        self.update(|s| *s = settings);
    }

    pub fn set_color(&self, color: Rgba) {
        self.update(|s| s.color = color);
    }

    pub fn set_shape(&self, shape: BrushShape) {
        self.update(|s| s.shape = shape);
    }

    pub fn set_size_factor(&self, size_factor: f32) {
        self.update(|s| s.size_factor = size_factor);
    }

    pub fn set_spinning(&self, spinning: bool) {
        self.update(|s| s.spinning = spinning);
    }

    pub fn color(&self) -> Rgba {
        self.snapshot().color
    }

    pub fn shape(&self) -> BrushShape {
        self.snapshot().shape
    }

    pub fn size_factor(&self) -> f32 {
        self.snapshot().size_factor
    }

    pub fn spinning(&self) -> bool {
        self.snapshot().spinning
    }
}
