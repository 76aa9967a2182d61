//! Async settle loop
//!
//! Hosts with a tokio runtime can let [`SettleDriver`] own the debounce: feed
//! raw scroll samples through the [`SettleHandle`] and spawn
//! [`SettleDriver::run`]. The loop sleeps until the controller's settle
//! deadline, restarting whenever a newer sample arrives, and settles the
//! header once per quiet period. Dropping the handle (view teardown) ends the
//! loop.
//!
//! ```rust,ignore
//! let controller = Arc::new(Mutex::new(HeaderScrollController::new()));
//! let (handle, driver) = SettleDriver::new(controller.clone());
//! tokio::spawn(driver.run());
//!
//! // From the scroll view's raw offset callback:
//! handle.feed(raw_offset);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::Notify;
use tokio::time::Instant;

use crate::header::HeaderScrollController;

/// Controller shared between the view layer and the settle loop
pub type SharedHeaderController = Arc<Mutex<HeaderScrollController>>;

struct DriverShared {
    wake: Notify,
    closed: AtomicBool,
    settles: AtomicU64,
}

impl DriverShared {
    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Feeds raw scroll samples to a running [`SettleDriver`]
pub struct SettleHandle {
    controller: SharedHeaderController,
    shared: Arc<DriverShared>,
}

impl SettleHandle {
    /// Record a raw scroll sample and restart the settle timer
    pub fn feed(&self, value: f32) {
        let now = Instant::now().into_std();
        lock(&self.controller).on_raw_scroll_sample(value, now);
        self.shared.wake.notify_one();
    }

    /// Number of quiet periods the driver has settled
    pub fn settle_count(&self) -> u64 {
        self.shared.settles.load(Ordering::Acquire)
    }

    /// Stop the settle loop and drop any pending settle
    pub fn shutdown(&self) {
        if !self.shared.closed.swap(true, Ordering::AcqRel) {
            lock(&self.controller).cancel_pending_settle();
            self.shared.wake.notify_one();
        }
    }
}

impl Drop for SettleHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// The listen loop that settles the header after scrolling pauses
pub struct SettleDriver {
    controller: SharedHeaderController,
    shared: Arc<DriverShared>,
}

impl SettleDriver {
    pub fn new(controller: SharedHeaderController) -> (SettleHandle, SettleDriver) {
        let shared = Arc::new(DriverShared {
            wake: Notify::new(),
            closed: AtomicBool::new(false),
            settles: AtomicU64::new(0),
        });
        let handle = SettleHandle {
            controller: controller.clone(),
            shared: shared.clone(),
        };
        (handle, SettleDriver { controller, shared })
    }

    /// Run until the handle is dropped or shut down
    pub async fn run(self) {
        tracing::debug!("Settle loop started");

        'listen: loop {
            self.shared.wake.notified().await;

            loop {
                if self.shared.is_closed() {
                    break 'listen;
                }

                let now = Instant::now();
                let remaining = lock(&self.controller).pending_settle(now.into_std());
                let Some(remaining) = remaining else {
                    // Nothing armed (already settled or cancelled)
                    continue 'listen;
                };

                tokio::select! {
                    _ = self.shared.wake.notified() => {
                        // Newer sample: recompute the deadline
                        continue;
                    }
                    _ = tokio::time::sleep(remaining) => {
                        let fired = lock(&self.controller).poll_settle(Instant::now().into_std());
                        if fired {
                            self.shared.settles.fetch_add(1, Ordering::AcqRel);
                            continue 'listen;
                        }
                    }
                }
            }
        }

        tracing::debug!("Settle loop stopped");
    }
}

/// Lock the controller, recovering from a poisoned mutex
fn lock(controller: &SharedHeaderController) -> MutexGuard<'_, HeaderScrollController> {
    match controller.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
