//! Prediction Module
//!
//! Turns one ordered feature vector into a diagnosis, a probability pair,
//! a risk tier and a ranked importance list.

pub mod engine;
pub mod importance;
pub mod rules;
pub mod types;
pub mod vector;

pub use engine::predict_values;
pub use types::{ClassProbabilities, Diagnosis, FeatureImportance, PredictionError, PredictionReport};
pub use vector::FeatureVector;
