//! Feature importance ranking for linear classifiers

use ndarray::{Array1, ArrayView1};

use crate::model::FeatureSchema;
use super::types::FeatureImportance;

/// Rank `coef[i] * value[i]` by absolute value, keep the top `limit`.
///
/// Sign is preserved in the output. The sort is stable, so equal
/// magnitudes keep schema order.
pub fn rank_importances(
    schema: &FeatureSchema,
    coefficients: &Array1<f64>,
    values: ArrayView1<f64>,
    limit: usize,
) -> Vec<FeatureImportance> {
    let contributions = coefficients * &values;

    let mut ranked: Vec<FeatureImportance> = schema.iter()
        .zip(contributions.iter())
        .map(|(feature, &importance)| FeatureImportance {
            feature: feature.to_string(),
            importance,
        })
        .collect();

    ranked.sort_by(|a, b| b.importance.abs().total_cmp(&a.importance.abs()));
    ranked.truncate(limit);
    ranked
}
