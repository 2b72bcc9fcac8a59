//! pf-pharma: closed-form pharmacokinetic/pharmacodynamic models.
//!
//! Contains:
//! - kinetics (single-dose absorption/elimination concentration curve)
//! - toxicity (Michaelis-Menten saturation score)
//! - anabolic (Hill-equation dose-response score)
//!
//! Every function here absorbs degenerate input (non-positive doses,
//! rate constants, or curve parameters) by returning zero or substituting
//! a documented default; nothing in this crate can fail.

pub mod anabolic;
pub mod kinetics;
pub mod toxicity;

// Re-exports: nice ergonomics for downstream crates
pub use anabolic::{
    DEFAULT_ANABOLIC_EC50, DEFAULT_ANABOLIC_HILL, DEFAULT_ANABOLIC_MAX_EFFECT, anabolic_effect,
};
pub use kinetics::concentration;
pub use toxicity::{DEFAULT_TOXICITY_KM, DEFAULT_TOXICITY_VMAX, toxicity};
