//! Single-dose serum concentration over time.

/// Rate constants closer than this are treated as equal; the general
/// curve divides by `ka - ke`.
const RATE_CONSTANT_EPSILON: f64 = 1e-9;

/// Serum concentration after a single administered dose, from the
/// two-exponential absorption/elimination curve.
///
/// `dose_mg` is the administered mass in mg, `ka` and `ke` are the
/// absorption and elimination rate constants (1/day), `t` is elapsed
/// time in days. Returns 0 for a non-positive dose, non-positive rate
/// constants, or negative time. Both exponential terms decay, so the
/// value stays finite for arbitrarily large `t`; underflow to 0 far out
/// on the tail is expected.
pub fn concentration(dose_mg: f64, ka: f64, ke: f64, t: f64) -> f64 {
    if dose_mg <= 0.0 || ka <= 0.0 || ke <= 0.0 || t < 0.0 {
        return 0.0;
    }

    // ka == ke collapses the general form to 0/0; use the analytic limit.
    if (ka - ke).abs() < RATE_CONSTANT_EPSILON {
        return dose_mg * ka.powi(2) * t * (-ke * t).exp();
    }

    dose_mg * ka / (ka - ke) * ((-ke * t).exp() - (-ka * t).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_time_zero() {
        assert_eq!(concentration(100.0, 1.2, 0.4, 0.0), 0.0);
    }

    #[test]
    fn positive_after_dosing() {
        let c = concentration(100.0, 1.5, 0.5, 2.0);
        assert!(c > 0.0, "expected positive concentration, got {c}");
    }

    #[test]
    fn degenerate_inputs_contribute_nothing() {
        assert_eq!(concentration(0.0, 1.2, 0.4, 1.0), 0.0);
        assert_eq!(concentration(-50.0, 1.2, 0.4, 1.0), 0.0);
        assert_eq!(concentration(100.0, 0.0, 0.4, 1.0), 0.0);
        assert_eq!(concentration(100.0, 1.2, 0.0, 1.0), 0.0);
        assert_eq!(concentration(100.0, 1.2, 0.4, -1.0), 0.0);
    }

    #[test]
    fn equal_rate_constants_use_limiting_form() {
        let got = concentration(50.0, 1.0, 1.0, 1.0);
        let expected = 50.0 * 1.0_f64.powi(2) * 1.0 * (-1.0_f64).exp();
        assert!(
            (got - expected).abs() < 1e-9,
            "unexpected limiting value: got {got} want {expected}"
        );
    }

    #[test]
    fn near_equal_rate_constants_match_limiting_form() {
        let ka = 1.0 + 1e-10;
        let got = concentration(100.0, ka, 1.0, 2.0);
        let limiting = 100.0 * ka.powi(2) * 2.0 * (-1.0 * 2.0_f64).exp();
        assert!(
            (got - limiting).abs() < 1e-9,
            "got {got}, limiting form {limiting}"
        );
    }

    #[test]
    fn general_form_is_continuous_into_the_limit() {
        // Approaching ka == ke from outside the epsilon window must land
        // next to the limiting form's value.
        let limit = concentration(100.0, 1.0, 1.0, 2.0);
        let near = concentration(100.0, 1.0 + 1e-6, 1.0, 2.0);
        assert!(
            (near - limit).abs() < 1e-3,
            "discontinuity at the rate-constant crossover: {near} vs {limit}"
        );
    }

    #[test]
    fn long_tail_underflows_to_zero() {
        let c = concentration(100.0, 1.2, 0.4, 5000.0);
        assert!(c.is_finite());
        assert!(c >= 0.0);
        assert!(c < 1e-12);
    }
}
