//! Aborting a table build from outside the sweep.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::SimulationError;

/// Polled by the sweep before each depth. A depth already running finishes
/// its trials; no depth starts after the flag is raised.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    /// Raise the flag. Builds holding a clone stop at their next depth.
    fn cancel(&self);

    /// `Err(Cancelled)` once the flag is raised, so a build can bail with `?`.
    fn check(&self) -> Result<(), SimulationError> {
        if self.is_cancelled() {
            Err(SimulationError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Shared abort flag for table builds. A caller keeps one clone (for a
/// timeout or a shutdown hook) and hands another to `SweepController`.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        // Acquire pairs with the Release in `cancel` so a worker thread sees
        // the flag raised on another thread.
        self.cancelled.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}
