use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::core::frame::frame_target::FrameTarget;

/// One-way sink for frame targets replaced by a resize.
///
/// A consumer may still be looking at pixels from the old target, so it is
/// parked here and only released when the consumer calls
/// [`RetiredTargets::drain`] after re-binding to the current target.
#[derive(Debug, Default)]
pub struct RetiredTargets {
    queue: Mutex<VecDeque<Arc<FrameTarget>>>,
}

impl RetiredTargets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn retire(&self, target: Arc<FrameTarget>) {
        debug!(
            "retiring {}x{} frame target at frame {}",
            target.width(),
            target.height(),
            target.frame_id()
        );
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(target);
    }

    /// Releases every retired target and returns how many were released.
    pub fn drain(&self) -> usize {
        let drained: Vec<_> = self
            .queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();

        drained.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
