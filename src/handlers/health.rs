//! Health check handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    model: ModelStatus,
}

#[derive(Serialize)]
pub struct ModelStatus {
    path: String,
    sha256: String,
    feature_count: usize,
    schema_hash: String,
    classifier: &'static str,
    loaded_at: DateTime<Utc>,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model = &state.model;
    let metadata = model.metadata();
    let schema = model.schema().info();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().timestamp(),
        model: ModelStatus {
            path: metadata.path.clone(),
            sha256: metadata.sha256.clone(),
            feature_count: schema.feature_count,
            schema_hash: schema.hash,
            classifier: model.classifier().kind(),
            loaded_at: metadata.loaded_at,
        },
    })
}
