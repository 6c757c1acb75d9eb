//! Test fixtures: small in-memory pipelines

use chrono::Utc;
use serde_json::json;

use super::artifact::{ModelHandle, ModelMetadata, PipelineArtifact};

/// Two features `[A, B]`, identity scaler, coef `[2.0, -1.0]`
pub fn linear_artifact_json() -> serde_json::Value {
    json!({
        "format_version": 1,
        "named_steps": {
            "scaler": {
                "type": "standard_scaler",
                "feature_names_in": ["A", "B"],
                "mean": [0.0, 0.0],
                "scale": [1.0, 1.0]
            },
            "classifier": {
                "type": "logistic_regression",
                "classes": [0, 1],
                "coef": [[2.0, -1.0]],
                "intercept": [0.0]
            }
        }
    })
}

/// Two features `[A, B]` with a naive Bayes classifier
pub fn gaussian_nb_artifact_json() -> serde_json::Value {
    json!({
        "format_version": 1,
        "named_steps": {
            "scaler": {
                "type": "standard_scaler",
                "feature_names_in": ["A", "B"],
                "mean": null,
                "scale": null
            },
            "classifier": {
                "type": "gaussian_nb",
                "classes": [0, 1],
                "theta": [[-1.0, -1.0], [1.0, 1.0]],
                "var": [[1.0, 1.0], [1.0, 1.0]],
                "class_prior": [0.5, 0.5]
            }
        }
    })
}

/// `n` features `f0..fn`, coef `i + 1` for feature `i`, identity scaler
pub fn wide_linear_artifact_json(n: usize) -> serde_json::Value {
    let names: Vec<String> = (0..n).map(|i| format!("f{}", i)).collect();
    let coef: Vec<f64> = (0..n).map(|i| (i + 1) as f64).collect();
    json!({
        "format_version": 1,
        "named_steps": {
            "scaler": {
                "type": "standard_scaler",
                "feature_names_in": names,
            },
            "classifier": {
                "type": "logistic_regression",
                "coef": [coef],
                "intercept": [0.0]
            }
        }
    })
}

pub fn handle_from_json(value: serde_json::Value) -> ModelHandle {
    let artifact: PipelineArtifact = serde_json::from_value(value).unwrap();
    let metadata = ModelMetadata {
        path: "<memory>".to_string(),
        sha256: "0".repeat(64),
        loaded_at: Utc::now(),
    };
    ModelHandle::from_artifact(artifact, metadata).unwrap()
}

pub fn linear_handle() -> ModelHandle {
    handle_from_json(linear_artifact_json())
}

pub fn gaussian_nb_handle() -> ModelHandle {
    handle_from_json(gaussian_nb_artifact_json())
}
