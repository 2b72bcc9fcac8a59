//! Michaelis-Menten toxicity saturation.

/// Ceiling a toxicity score may approach.
pub const DEFAULT_TOXICITY_VMAX: f64 = 100.0;
/// Concentration (mg/L equivalent) at which toxicity reaches half of `vmax`.
pub const DEFAULT_TOXICITY_KM: f64 = 250.0;

/// Half-saturation constants at or below this are floored to keep the
/// denominator positive.
const KM_FLOOR: f64 = 1e-9;

/// Toxicity score from an instantaneous serum concentration, on a
/// Michaelis-Menten curve rising from 0 toward `vmax` with half-maximum
/// exactly at `concentration == km`.
///
/// Returns 0 for a non-positive concentration or ceiling.
pub fn toxicity(concentration: f64, vmax: f64, km: f64) -> f64 {
    if concentration <= 0.0 || vmax <= 0.0 {
        return 0.0;
    }
    let km = km.max(KM_FLOOR);

    // The saturation ratio is evaluated first; it never exceeds 1, so the
    // product stays finite for any representable concentration.
    vmax * (concentration / (km + concentration))
}
