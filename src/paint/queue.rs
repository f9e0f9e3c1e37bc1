//! Ordered hand-off of scene mutations from the tracking thread to the
//! render thread.
//!
//! One producer, one consumer, FIFO. Sending never blocks; the render side
//! drains everything pending at the start of each draw tick.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::core::{Error, Result};
use crate::scene::{PaintScene, SceneNodeId};

use super::mutation::SceneMutation;

/// Create a connected sender/receiver pair.
pub fn channel() -> (MutationSender, MutationReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (MutationSender { tx }, MutationReceiver { rx })
}

/// Tracking-side end. Not `Clone`: a single producer keeps frames in order.
#[derive(Debug)]
pub struct MutationSender {
    tx: mpsc::UnboundedSender<SceneMutation>,
}

impl MutationSender {
    /// Enqueue a mutation. Fails once the render side has gone away.
    pub fn send(&self, mutation: SceneMutation) -> Result<()> {
        self.tx.send(mutation).map_err(|_| {
            log::warn!("Render side dropped; discarding scene mutation");
            Error::QueueClosed
        })
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Render-side end.
#[derive(Debug)]
pub struct MutationReceiver {
    rx: mpsc::UnboundedReceiver<SceneMutation>,
}

impl MutationReceiver {
    /// Apply every pending mutation in arrival order. Returns how many ran.
    pub fn apply_pending<S: PaintScene + ?Sized>(&mut self, scene: &mut S) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(mutation) => {
                    mutation.apply(scene);
                    applied += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        if applied > 0 {
            log::debug!("Applied {} scene mutations", applied);
        }
        applied
    }

    /// Block until the next mutation arrives and apply it. Returns `None` once
    /// the sender is gone and the queue is drained.
    ///
    /// Must not be called from within an async runtime.
    pub fn apply_next_blocking<S: PaintScene + ?Sized>(&mut self, scene: &mut S) -> Option<SceneNodeId> {
        self.rx.blocking_recv().map(|mutation| mutation.apply(scene))
    }
}
