//! Hill-equation anabolic dose-response.

pub const DEFAULT_ANABOLIC_MAX_EFFECT: f64 = 100.0;
pub const DEFAULT_ANABOLIC_EC50: f64 = 200.0;
pub const DEFAULT_ANABOLIC_HILL: f64 = 2.0;

/// Half-maximal concentrations at or below this are floored to keep the
/// curve defined.
const EC50_FLOOR: f64 = 1e-9;

/// Anabolic response from a total serum concentration, on a Hill curve
/// rising from 0 toward `max_effect` with half-maximum exactly at
/// `concentration == ec50` and steepness set by `hill`.
///
/// Returns 0 for a non-positive concentration or maximum effect. A
/// non-positive Hill coefficient degenerates to a hyperbolic curve
/// (`hill = 1`) rather than failing.
pub fn anabolic_effect(concentration: f64, ec50: f64, hill: f64, max_effect: f64) -> f64 {
    if concentration <= 0.0 || max_effect <= 0.0 {
        return 0.0;
    }
    let hill = if hill <= 0.0 { 1.0 } else { hill };
    let ec50 = ec50.max(EC50_FLOOR);

    // Evaluated as max / (1 + (ec50/c)^n): algebraically identical to
    // max * c^n / (ec50^n + c^n), but the quotient stays finite where
    // c^n alone would overflow.
    let ratio = (ec50 / concentration).powf(hill);
    max_effect / (1.0 + ratio)
}
