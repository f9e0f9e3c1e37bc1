//! Paint trigger press state

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether the user is holding the paint trigger.
///
/// Cloned handles share one flag: the UI presses and releases it, the tracking
/// callback reads it once per frame.
#[derive(Debug, Clone, Default)]
pub struct PaintTrigger {
    engaged: Arc<AtomicBool>,
}

impl PaintTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self) {
        self.set(true);
    }

    pub fn release(&self) {
        self.set(false);
    }

    pub fn set(&self, engaged: bool) {
        self.engaged.store(engaged, Ordering::Release);
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged.load(Ordering::Acquire)
    }
}
