//! Pre-flight cancellation for solver runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use thiserror::Error;

pub type SolverResult<T> = Result<T, SolverError>;

/// The only failures a solver call can produce.
///
/// Both are raised by the pre-flight context check, before any work is
/// scheduled; the computation itself cannot fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    #[error("run cancelled before any work was scheduled")]
    Cancelled,

    #[error("run deadline expired before any work was scheduled")]
    DeadlineExceeded,
}

/// Caller context checked once before a run is dispatched.
///
/// Cancellation is observed only at that pre-flight check: once workers
/// are running, the computation completes even if the context is
/// cancelled or its deadline passes afterwards. Clones share the same
/// cancellation flag, so a clone can cancel a context held elsewhere.
#[derive(Clone, Debug, Default)]
pub struct RunContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl RunContext {
    /// Context that never cancels on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: Arc::default(),
            deadline: Some(deadline),
        }
    }

    /// Context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Signal cancellation. Takes effect at the next pre-flight check;
    /// an already-dispatched run is not interrupted.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub(crate) fn ensure_active(&self) -> SolverResult<()> {
        if self.is_cancelled() {
            return Err(SolverError::Cancelled);
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return Err(SolverError::DeadlineExceeded);
        }
        Ok(())
    }
}
