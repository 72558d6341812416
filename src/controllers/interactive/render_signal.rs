use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};

use crate::core::cancellation::CancelToken;

/// Level-triggered "render requested" signal.
///
/// Any number of requests made before the worker wakes collapse into one
/// wake-up. Requests made while the worker is rendering re-arm the signal,
/// so they are never lost.
#[derive(Debug, Default)]
pub struct RenderSignal {
    pending: AtomicU64,
    armed: Mutex<bool>,
    wake: Condvar,
}

impl RenderSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.pending.fetch_add(1, Ordering::AcqRel);

        let mut armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
        *armed = true;
        self.wake.notify_one();
    }

    /// Blocks until the signal is armed or `cancel` fires. Disarms the signal
    /// and returns how many requests were coalesced into this wake-up, or
    /// `None` if cancelled.
    pub fn wait<C: CancelToken>(&self, cancel: &C) -> Option<u64> {
        {
            let mut armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
            loop {
                if cancel.is_cancelled() {
                    return None;
                }

                if *armed {
                    *armed = false;
                    break;
                }

                armed = self
                    .wake
                    .wait(armed)
                    .unwrap_or_else(PoisonError::into_inner);
            }
        }

        Some(self.pending.swap(0, Ordering::AcqRel))
    }

    /// Wakes every waiter so it can observe cancellation.
    pub fn wake_all(&self) {
        let _armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
        self.wake.notify_all();
    }

    #[must_use]
    pub fn pending(&self) -> u64 {
        self.pending.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        *self.armed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
