//! Single-slot debounce timer.
//!
//! Each `schedule` replaces the previously scheduled action. Only the quiet
//! period is cancelable: once the delay has elapsed the action runs on its own
//! task, and a later `schedule` or `cancel` leaves it running.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `action` after the delay unless another call arrives first.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // detached: aborting the timer from here on does not reach the action
            let fired = tokio::spawn(action);
            let _ = fired.await;
        });
        if let Some(prev) = self.slot().replace(handle) {
            prev.abort();
        }
    }

    /// Drop the scheduled action if its delay has not elapsed yet.
    /// Returns whether a scheduled action was still outstanding.
    pub fn cancel(&self) -> bool {
        match self.slot().take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot().as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Wait for the scheduled action (delay plus action) to complete.
    pub async fn settle(&self) {
        let handle = self.slot().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        // a poisoned slot still holds a valid handle
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
