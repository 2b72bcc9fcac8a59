//! Solver configuration with default-filling construction.

use pf_pharma::{
    DEFAULT_ANABOLIC_EC50, DEFAULT_ANABOLIC_HILL, DEFAULT_ANABOLIC_MAX_EFFECT, DEFAULT_TOXICITY_KM,
    DEFAULT_TOXICITY_VMAX,
};
use serde::{Deserialize, Serialize};

/// Tunable parameters for the simulation solver.
///
/// Every field has a documented default. Any non-positive value supplied
/// here is replaced by that default when the [`Solver`](crate::Solver) is
/// constructed, so construction never fails; the sanitized copy is frozen
/// for the solver's lifetime and read concurrently by all workers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverConfig {
    /// Length of one simulated day used as model input time (default 1.0).
    pub time_step_days: f64,
    /// Worker pool size ceiling for both day and batch dispatch (default 4).
    pub max_concurrency: usize,
    /// Toxicity saturation ceiling `Vmax` (default 100.0).
    #[serde(rename = "toxicityVMax")]
    pub toxicity_vmax: f64,
    /// Toxicity half-saturation constant `Km` (default 250.0).
    pub toxicity_km: f64,
    /// Anabolic maximum effect (default 100.0).
    pub anabolic_max_effect: f64,
    /// Anabolic half-maximal concentration `EC50` (default 200.0).
    #[serde(rename = "anabolicEC50")]
    pub anabolic_ec50: f64,
    /// Anabolic Hill coefficient (default 2.0).
    pub anabolic_hill_coefficient: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_step_days: 1.0,
            max_concurrency: 4,
            toxicity_vmax: DEFAULT_TOXICITY_VMAX,
            toxicity_km: DEFAULT_TOXICITY_KM,
            anabolic_max_effect: DEFAULT_ANABOLIC_MAX_EFFECT,
            anabolic_ec50: DEFAULT_ANABOLIC_EC50,
            anabolic_hill_coefficient: DEFAULT_ANABOLIC_HILL,
        }
    }
}

impl SolverConfig {
    /// Replace every non-positive field with its documented default.
    ///
    /// The comparisons are written `!(v > 0.0)` so that NaN also falls
    /// back to the default instead of leaking into the models.
    pub(crate) fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.time_step_days > 0.0) {
            self.time_step_days = defaults.time_step_days;
        }
        if self.max_concurrency == 0 {
            self.max_concurrency = defaults.max_concurrency;
        }
        if !(self.toxicity_vmax > 0.0) {
            self.toxicity_vmax = defaults.toxicity_vmax;
        }
        if !(self.toxicity_km > 0.0) {
            self.toxicity_km = defaults.toxicity_km;
        }
        if !(self.anabolic_max_effect > 0.0) {
            self.anabolic_max_effect = defaults.anabolic_max_effect;
        }
        if !(self.anabolic_ec50 > 0.0) {
            self.anabolic_ec50 = defaults.anabolic_ec50;
        }
        if !(self.anabolic_hill_coefficient > 0.0) {
            self.anabolic_hill_coefficient = defaults.anabolic_hill_coefficient;
        }
        self
    }
}
