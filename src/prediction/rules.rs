//! Prediction Rules & Constants
//!
//! Fixed business constants. No logic here.

/// Malignant probability at or above this = High Risk
pub const HIGH_RISK_MIN: f64 = 0.8;

/// Malignant probability at or above this (and below HIGH_RISK_MIN) = Moderate Risk
pub const MODERATE_RISK_MIN: f64 = 0.5;

/// Number of features kept in the importance ranking
pub const TOP_FEATURES: usize = 10;
