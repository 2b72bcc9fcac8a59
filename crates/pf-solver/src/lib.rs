//! Concurrent dose-response simulation solver.
//!
//! Evaluates the pf-pharma curves day by day across a bounded per-call
//! worker pool and assembles ordered time series for single requests and
//! request batches. Degenerate numeric input never fails: it is absorbed
//! by the model layer. The only error a caller can see comes from the
//! pre-flight [`RunContext`] check, before any work is scheduled.

mod aggregate;
pub mod config;
pub mod context;
pub mod solver;
pub mod types;

pub use config::SolverConfig;
pub use context::{RunContext, SolverError, SolverResult};
pub use solver::Solver;
pub use types::{Compound, DataPoint, SimulationRequest, SimulationResponse};
