//! Bounded per-call worker pools for day and batch dispatch.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::aggregate::compute_day;
use crate::config::SolverConfig;
use crate::context::{RunContext, SolverResult};
use crate::types::{SimulationRequest, SimulationResponse};

/// Dose-response simulation solver.
///
/// Holds an immutable, sanitized configuration; a single instance may be
/// shared or cloned freely across threads.
#[derive(Clone, Debug)]
pub struct Solver {
    cfg: SolverConfig,
}

impl Solver {
    /// Construct a solver, replacing any non-positive configuration
    /// value with its documented default. Never fails.
    pub fn new(cfg: SolverConfig) -> Self {
        Self {
            cfg: cfg.sanitized(),
        }
    }

    /// The sanitized configuration this solver runs with.
    pub fn config(&self) -> &SolverConfig {
        &self.cfg
    }

    /// Run one simulation.
    ///
    /// The context is checked once, before any work is scheduled; after
    /// that the computation runs to completion. A duration of zero or
    /// less yields an empty response, never an error.
    pub fn run(
        &self,
        ctx: &RunContext,
        request: &SimulationRequest,
    ) -> SolverResult<SimulationResponse> {
        ctx.ensure_active()?;
        Ok(self.simulate(request))
    }

    /// Run a batch of simulations, returning responses in input order.
    ///
    /// The context is checked once for the whole batch. Batch workers
    /// each dispatch a full per-request day pool, so up to
    /// `max_concurrency * max_concurrency` workers may be live at once;
    /// there is deliberately no global ceiling shared between the two
    /// levels.
    pub fn run_batch(
        &self,
        ctx: &RunContext,
        requests: &[SimulationRequest],
    ) -> SolverResult<Vec<SimulationResponse>> {
        ctx.ensure_active()?;
        if requests.is_empty() {
            return Ok(Vec::new());
        }

        let workers = self.worker_count(requests.len());
        tracing::debug!(requests = requests.len(), workers, "dispatching batch");

        let responses = run_indexed(requests.len(), workers, |idx| self.simulate(&requests[idx]));
        Ok(responses)
    }

    fn simulate(&self, request: &SimulationRequest) -> SimulationResponse {
        if request.duration_days <= 0 {
            return SimulationResponse::default();
        }

        let days = request.duration_days as usize;
        let workers = self.worker_count(days);
        tracing::debug!(
            days,
            workers,
            compounds = request.compounds.len(),
            "dispatching simulation"
        );

        let data_points = run_indexed(days, workers, |day| {
            compute_day(&self.cfg, &request.compounds, day)
        });
        SimulationResponse { data_points }
    }

    fn worker_count(&self, units: usize) -> usize {
        self.cfg.max_concurrency.min(units).max(1)
    }
}

/// Evaluate `compute` for every index in `0..len` across a pool of
/// `workers` scoped threads and collect the results in index order.
///
/// Each worker claims indices from a shared atomic cursor and writes
/// into a slot reserved for that index alone, so the writes need no
/// locking; the scope join is the completion barrier. Which worker
/// computes which index is unspecified — only the slot order matters.
fn run_indexed<T, F>(len: usize, workers: usize, compute: F) -> Vec<T>
where
    T: Send + Sync,
    F: Fn(usize) -> T + Sync,
{
    let slots: Vec<OnceLock<T>> = (0..len).map(|_| OnceLock::new()).collect();
    let cursor = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                loop {
                    let idx = cursor.fetch_add(1, Ordering::Relaxed);
                    if idx >= len {
                        break;
                    }
                    // Each index is claimed exactly once, so its slot is
                    // still empty here.
                    let _ = slots[idx].set(compute(idx));
                }
            });
        }
    });

    slots
        .into_iter()
        .map(|slot| {
            slot.into_inner()
                .expect("every index below len was claimed by a worker")
        })
        .collect()
}
