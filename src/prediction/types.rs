//! Prediction Types
//!
//! Data structures produced by the engine. No logic beyond small
//! accessors and display helpers.

use thiserror::Error;

use super::rules::{HIGH_RISK_MIN, MODERATE_RISK_MIN};

// ============================================================================
// DIAGNOSIS
// ============================================================================

/// Predicted class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    /// Class 0
    Benign,
    /// Class 1
    Malignant,
}

impl Diagnosis {
    pub fn from_class_index(index: usize) -> Self {
        if index == 1 { Diagnosis::Malignant } else { Diagnosis::Benign }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Diagnosis::Benign => "Benign",
            Diagnosis::Malignant => "Malignant",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Diagnosis::Benign => "✅",
            Diagnosis::Malignant => "⚠️",
        }
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// PROBABILITIES
// ============================================================================

/// Class probability pair, sums to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProbabilities {
    pub benign: f64,
    pub malignant: f64,
}

impl ClassProbabilities {
    pub fn from_proba(proba: [f64; 2]) -> Self {
        Self {
            benign: proba[0],
            malignant: proba[1],
        }
    }

    pub fn get(&self, diagnosis: Diagnosis) -> f64 {
        match diagnosis {
            Diagnosis::Benign => self.benign,
            Diagnosis::Malignant => self.malignant,
        }
    }
}

// ============================================================================
// RISK TIER
// ============================================================================

/// Coarse bucketing of the malignant probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// `[0.8, 1]` High, `[0.5, 0.8)` Moderate, otherwise Low
    pub fn from_probability(malignant: f64) -> Self {
        if malignant >= HIGH_RISK_MIN {
            RiskTier::High
        } else if malignant >= MODERATE_RISK_MIN {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High => "High Risk",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RiskTier::Low => "✅",
            RiskTier::Moderate | RiskTier::High => "⚠️",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// IMPORTANCE
// ============================================================================

/// Signed linear contribution of one feature
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

// ============================================================================
// REPORT
// ============================================================================

/// Everything one submission produces
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub diagnosis: Diagnosis,
    pub probabilities: ClassProbabilities,
    pub risk_tier: RiskTier,
    /// Top contributions by absolute value; empty when unsupported
    pub importances: Vec<FeatureImportance>,
}

// ============================================================================
// ERRORS
// ============================================================================

/// Per-submission failure; never affects other submissions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("expected {expected} feature values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("feature '{feature}' has non-finite value {value}")]
    NonFiniteValue { feature: String, value: f64 },

    /// Finite inputs whose arithmetic overflowed inside the pipeline
    #[error("input values are out of range for this model (overflow in the {stage} stage)")]
    NumericOverflow { stage: &'static str },
}
