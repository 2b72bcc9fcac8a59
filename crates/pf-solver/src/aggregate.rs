//! Per-day aggregation across the administered compounds.

use pf_pharma::{anabolic_effect, concentration, toxicity};

use crate::config::SolverConfig;
use crate::types::{Compound, DataPoint};

/// Total serum concentration and total toxicity at elapsed time `t`.
///
/// Toxicity is summed per compound from that compound's OWN
/// concentration, never derived from the combined total; the two
/// policies differ whenever more than one compound is active.
fn aggregate_compounds(cfg: &SolverConfig, compounds: &[Compound], t: f64) -> (f64, f64) {
    let mut total_concentration = 0.0;
    let mut total_toxicity = 0.0;

    for compound in compounds {
        let c = concentration(
            compound.dosage_mg,
            compound.absorption_rate_constant,
            compound.elimination_rate_constant,
            t,
        );
        total_concentration += c;
        total_toxicity += toxicity(c, cfg.toxicity_vmax, cfg.toxicity_km);
    }

    (total_concentration, total_toxicity)
}

/// Compute one day's data point.
///
/// The anabolic score is derived once, from the combined concentration,
/// unlike toxicity which accumulates per compound.
pub(crate) fn compute_day(cfg: &SolverConfig, compounds: &[Compound], day: usize) -> DataPoint {
    let t = day as f64 * cfg.time_step_days;
    let (serum_concentration, toxicity_score) = aggregate_compounds(cfg, compounds, t);
    let anabolic_score = anabolic_effect(
        serum_concentration,
        cfg.anabolic_ec50,
        cfg.anabolic_hill_coefficient,
        cfg.anabolic_max_effect,
    );

    DataPoint {
        day: day as u32,
        serum_concentration,
        anabolic_score,
        toxicity_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(dose: f64, ka: f64, ke: f64) -> Compound {
        Compound {
            id: "c".to_string(),
            name: "Compound".to_string(),
            dosage_mg: dose,
            absorption_rate_constant: ka,
            elimination_rate_constant: ke,
        }
    }

    #[test]
    fn empty_compound_list_yields_zeros() {
        let cfg = SolverConfig::default();
        let point = compute_day(&cfg, &[], 5);
        assert_eq!(point.day, 5);
        assert_eq!(point.serum_concentration, 0.0);
        assert_eq!(point.toxicity_score, 0.0);
        assert_eq!(point.anabolic_score, 0.0);
    }

    #[test]
    fn concentrations_sum_across_compounds() {
        let cfg = SolverConfig::default();
        let single = compute_day(&cfg, &[compound(100.0, 1.2, 0.4)], 1);
        let double = compute_day(
            &cfg,
            &[compound(100.0, 1.2, 0.4), compound(100.0, 1.2, 0.4)],
            1,
        );
        assert!(
            (double.serum_concentration - 2.0 * single.serum_concentration).abs() < 1e-9,
            "concentration must be additive"
        );
    }

    #[test]
    fn toxicity_is_summed_per_compound_not_off_the_total() {
        let cfg = SolverConfig::default();
        let single = compute_day(&cfg, &[compound(100.0, 1.2, 0.4)], 1);
        let double = compute_day(
            &cfg,
            &[compound(100.0, 1.2, 0.4), compound(100.0, 1.2, 0.4)],
            1,
        );

        // Additive per-compound policy: twice one compound's score.
        assert!((double.toxicity_score - 2.0 * single.toxicity_score).abs() < 1e-9);

        // The saturation curve is concave, so scoring the combined
        // concentration once would give strictly less.
        let off_total = pf_pharma::toxicity(
            double.serum_concentration,
            cfg.toxicity_vmax,
            cfg.toxicity_km,
        );
        assert!(double.toxicity_score > off_total);
    }

    #[test]
    fn anabolic_score_comes_from_the_combined_concentration() {
        let cfg = SolverConfig::default();
        let point = compute_day(
            &cfg,
            &[compound(100.0, 1.2, 0.4), compound(200.0, 0.9, 0.3)],
            2,
        );
        let expected = pf_pharma::anabolic_effect(
            point.serum_concentration,
            cfg.anabolic_ec50,
            cfg.anabolic_hill_coefficient,
            cfg.anabolic_max_effect,
        );
        assert_eq!(point.anabolic_score, expected);
    }

    #[test]
    fn day_index_scales_by_time_step() {
        let cfg = SolverConfig {
            time_step_days: 0.5,
            ..SolverConfig::default()
        };
        let compounds = [compound(100.0, 1.2, 0.4)];
        let at_day_two = compute_day(&cfg, &compounds, 2);
        let direct = pf_pharma::concentration(100.0, 1.2, 0.4, 1.0);
        assert_eq!(at_day_two.serum_concentration, direct);
    }
}
