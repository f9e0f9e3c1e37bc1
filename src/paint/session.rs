//! Tracking-side driver: one `tick()` per tracking frame.

use crate::brush::{PaintTrigger, SharedBrushSettings};
use crate::core::Result;
use crate::tracking::TrackingProvider;

use super::controller::PaintPlacementController;
use super::queue::MutationSender;

/// Frame counters for a session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Tracking frames seen
    pub frames: u64,
    /// Frames skipped for lack of a camera pose
    pub skipped: u64,
    /// Frames that produced a painted node
    pub painted: u64,
}

/// Wires a tracking provider, the shared brush state and the controller to
/// the render-thread queue.
pub struct PaintSession<T: TrackingProvider> {
    tracking: T,
    settings: SharedBrushSettings,
    trigger: PaintTrigger,
    controller: PaintPlacementController,
    sender: MutationSender,
    stats: SessionStats,
}

impl<T: TrackingProvider> PaintSession<T> {
    pub fn new(
        tracking: T,
        settings: SharedBrushSettings,
        trigger: PaintTrigger,
        controller: PaintPlacementController,
        sender: MutationSender,
    ) -> Self {
        log::info!(
            "Paint session started: placement distance {}, size mapping {:?}",
            controller.config().placement_distance,
            controller.config().sizing.mapping
        );
        Self {
            tracking,
            settings,
            trigger,
            controller,
            sender,
            stats: SessionStats::default(),
        }
    }

    /// Process one tracking frame. Returns `Ok(false)` when the frame was
    /// skipped, `Err(QueueClosed)` once the render side is gone.
    pub fn tick(&mut self) -> Result<bool> {
        self.stats.frames += 1;

        let transform = self.tracking.camera_transform();
        // Read each shared value exactly once per frame
        let settings = self.settings.snapshot();
        let engaged = self.trigger.is_engaged();

        let Some(mutation) = self.controller.on_tracking_frame(transform.as_ref(), engaged, &settings) else {
            self.stats.skipped += 1;
            return Ok(false);
        };

        if engaged {
            self.stats.painted += 1;
        }
        self.sender.send(mutation)?;
        Ok(true)
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn settings(&self) -> &SharedBrushSettings {
        &self.settings
    }

    pub fn trigger(&self) -> &PaintTrigger {
        &self.trigger
    }

    pub fn controller(&self) -> &PaintPlacementController {
        &self.controller
    }
}
