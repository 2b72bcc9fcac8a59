//! Shared application state for the physioflow server.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::{Duration, Instant};

use pf_solver::Solver;

/// State available to all request handlers.
pub struct AppState {
    /// Shared solver; its configuration is immutable after construction.
    pub solver: Solver,

    /// Per-request compute budget; becomes the run context deadline.
    pub request_timeout: Duration,

    /// Server start time (for uptime reporting).
    pub started_at: Instant,

    /// Total simulation requests served (for /v1/health).
    pub total_requests: AtomicU64,
}

impl AppState {
    pub fn new(solver: Solver, request_timeout: Duration) -> Self {
        Self {
            solver,
            request_timeout,
            started_at: Instant::now(),
            total_requests: AtomicU64::new(0),
        }
    }
}

/// Type alias used in axum handlers.
pub type SharedState = Arc<AppState>;
