//! Prediction Engine
//!
//! Input: ModelHandle + FeatureVector
//! Output: PredictionReport
//!
//! Pure function of its inputs. Never touches the filesystem and never
//! mutates the model. Finite inputs can still overflow inside the
//! pipeline; every stage's output is checked before it is reported.

use crate::model::{class_index, BinaryClassifier, ModelHandle};

use super::importance::rank_importances;
use super::rules::TOP_FEATURES;
use super::types::{
    ClassProbabilities, Diagnosis, FeatureImportance, PredictionError, PredictionReport, RiskTier,
};
use super::vector::FeatureVector;

/// Scale, classify, rank and tier one submission
pub fn predict(model: &ModelHandle, vector: &FeatureVector) -> Result<PredictionReport, PredictionError> {
    let scaled = model.scaler().transform(vector.view());
    if scaled.iter().any(|v| !v.is_finite()) {
        return Err(PredictionError::NumericOverflow { stage: "scaler" });
    }

    let proba = model.classifier()
        .predict_proba(scaled.view())
        .filter(|p| p.iter().all(|v| v.is_finite()))
        .ok_or(PredictionError::NumericOverflow { stage: "classifier" })?;

    let diagnosis = Diagnosis::from_class_index(class_index(proba));
    let probabilities = ClassProbabilities::from_proba(proba);
    let risk_tier = RiskTier::from_probability(probabilities.malignant);

    let importances = feature_importances(model, vector);
    if importances.iter().any(|i| !i.importance.is_finite()) {
        return Err(PredictionError::NumericOverflow { stage: "importance" });
    }

    tracing::debug!(
        diagnosis = %diagnosis,
        malignant = probabilities.malignant,
        risk = %risk_tier,
        ranked = importances.len(),
        "Prediction complete"
    );

    Ok(PredictionReport {
        diagnosis,
        probabilities,
        risk_tier,
        importances,
    })
}

/// Build the vector from raw ordered values, then predict
pub fn predict_values(model: &ModelHandle, values: Vec<f64>) -> Result<PredictionReport, PredictionError> {
    let vector = FeatureVector::new(model.schema(), values)?;
    predict(model, &vector)
}

/// Top contributions, or empty when the classifier has no coefficients
pub fn feature_importances(model: &ModelHandle, vector: &FeatureVector) -> Vec<FeatureImportance> {
    match model.classifier().coefficients() {
        Some(coef) => rank_importances(model.schema(), coef, vector.view(), TOP_FEATURES),
        None => Vec::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
