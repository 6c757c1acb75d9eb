//! Form handlers - input collection and result page

use axum::{extract::State, response::Html, Form};

use crate::{AppState, AppError, AppResult};
use crate::prediction::{self, FeatureVector};
use crate::render::render_page;

/// Form field carrying one feature value; repeated in schema order
pub const VALUE_FIELD: &str = "value";

/// Empty form, every input at 0.0
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let schema = state.model.schema();
    let zeros = FeatureVector::zeros(schema);
    Ok(Html(render_page(schema, zeros.as_slice(), None)?))
}

/// Run the pipeline on one submission
pub async fn predict(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    let values = collect_values(&fields)?;
    let report = prediction::predict_values(&state.model, values.clone())?;

    tracing::info!(
        diagnosis = %report.diagnosis,
        malignant = report.probabilities.malignant,
        risk = %report.risk_tier,
        "Submission classified"
    );

    Ok(Html(render_page(state.model.schema(), &values, Some(&report))?))
}

/// Ordered numeric values from the submitted `value` fields.
///
/// Only numeric coercion happens here; length and finiteness are
/// checked when the feature vector is built.
pub fn collect_values(fields: &[(String, String)]) -> AppResult<Vec<f64>> {
    fields.iter()
        .filter(|(key, _)| key == VALUE_FIELD)
        .enumerate()
        .map(|(i, (_, raw))| {
            raw.trim().parse::<f64>().map_err(|_| {
                AppError::InvalidInput(format!("input #{} ('{}') is not a number", i + 1, raw))
            })
        })
        .collect()
}
