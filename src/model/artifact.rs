//! Model Artifact - loading the exported scaler + classifier pipeline
//!
//! The artifact is trained elsewhere and exported as JSON with the same
//! shape as the fitted pipeline: a `named_steps` map holding a `scaler`
//! stage and a `classifier` stage. Loading happens once at startup and
//! every failure here is fatal; there is nothing sensible to serve
//! without a complete pipeline.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::classifier::ClassifierStage;
use super::scaler::StandardScaler;
use super::schema::{read_schema, FeatureSchema};

/// Artifact format version understood by this build
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

pub const SCALER_STEP: &str = "scaler";
pub const CLASSIFIER_STEP: &str = "classifier";

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("model artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported artifact format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("pipeline has no '{0}' stage")]
    MissingStage(&'static str),

    #[error("invalid '{stage}' stage: {message}")]
    InvalidStage { stage: &'static str, message: String },

    #[error("feature schema unavailable: {0}")]
    Schema(String),
}

// ============================================================================
// ON-DISK FORMAT
// ============================================================================

/// Raw exported pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineArtifact {
    pub format_version: u32,
    pub named_steps: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScalerStep {
    StandardScaler(ScalerParams),
}

/// Fitted standard scaler parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScalerParams {
    #[serde(default)]
    pub feature_names_in: Option<Vec<String>>,
    /// Per-feature mean; `None` means no centering
    #[serde(default)]
    pub mean: Option<Vec<f64>>,
    /// Per-feature scale; `None` means no scaling
    #[serde(default)]
    pub scale: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassifierStep {
    LogisticRegression(LogisticRegressionParams),
    GaussianNb(GaussianNbParams),
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegressionParams {
    #[serde(default)]
    pub classes: Option<Vec<i64>>,
    /// Shape `[1, n_features]` for a binary model
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GaussianNbParams {
    #[serde(default)]
    pub classes: Option<Vec<i64>>,
    /// Per-class feature means, shape `[2, n_features]`
    pub theta: Vec<Vec<f64>>,
    /// Per-class feature variances, shape `[2, n_features]`
    pub var: Vec<Vec<f64>>,
    pub class_prior: Vec<f64>,
}

// ============================================================================
// LOADED HANDLE
// ============================================================================

/// Load metadata, kept for logs and the health endpoint
#[derive(Debug, Clone)]
pub struct ModelMetadata {
    pub path: String,
    pub sha256: String,
    pub loaded_at: DateTime<Utc>,
}

/// Immutable, fully validated pipeline.
///
/// Built once in `main` and shared read-only behind an `Arc`.
#[derive(Debug)]
pub struct ModelHandle {
    schema: FeatureSchema,
    scaler: StandardScaler,
    classifier: ClassifierStage,
    metadata: ModelMetadata,
}

pub type SharedModel = Arc<ModelHandle>;

impl ModelHandle {
    /// Validate a parsed artifact and assemble the pipeline
    pub fn from_artifact(artifact: PipelineArtifact, metadata: ModelMetadata) -> Result<Self, ArtifactError> {
        if artifact.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: artifact.format_version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }

        let mut steps = artifact.named_steps;

        let scaler_value = steps.remove(SCALER_STEP)
            .ok_or(ArtifactError::MissingStage(SCALER_STEP))?;
        let ScalerStep::StandardScaler(scaler_params) = serde_json::from_value(scaler_value)
            .map_err(|e| invalid(SCALER_STEP, e))?;

        let classifier_value = steps.remove(CLASSIFIER_STEP)
            .ok_or(ArtifactError::MissingStage(CLASSIFIER_STEP))?;
        let classifier_params: ClassifierStep = serde_json::from_value(classifier_value)
            .map_err(|e| invalid(CLASSIFIER_STEP, e))?;

        for extra in steps.keys() {
            tracing::warn!("Ignoring unknown pipeline step '{}'", extra);
        }

        let schema = read_schema(&scaler_params)?;
        let scaler = StandardScaler::from_params(&scaler_params, schema.len())
            .map_err(|message| ArtifactError::InvalidStage { stage: SCALER_STEP, message })?;
        let classifier = ClassifierStage::from_params(classifier_params, schema.len())
            .map_err(|message| ArtifactError::InvalidStage { stage: CLASSIFIER_STEP, message })?;

        Ok(Self {
            schema,
            scaler,
            classifier,
            metadata,
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn classifier(&self) -> &ClassifierStage {
        &self.classifier
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

fn invalid(stage: &'static str, err: serde_json::Error) -> ArtifactError {
    ArtifactError::InvalidStage {
        stage,
        message: err.to_string(),
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Load and validate the pipeline from a file
pub fn load_pipeline(path: &Path) -> Result<ModelHandle, ArtifactError> {
    tracing::info!("Loading model artifact from: {}", path.display());

    if !path.exists() {
        return Err(ArtifactError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let sha256 = hex::encode(Sha256::digest(&bytes));
    let artifact: PipelineArtifact = serde_json::from_slice(&bytes)?;

    let metadata = ModelMetadata {
        path: path.display().to_string(),
        sha256,
        loaded_at: Utc::now(),
    };

    let handle = ModelHandle::from_artifact(artifact, metadata)?;

    tracing::info!(
        features = handle.schema().len(),
        schema_hash = %format!("{:08x}", handle.schema().hash()),
        classifier = handle.classifier().kind(),
        sha256 = %handle.metadata().sha256,
        "Model artifact loaded"
    );

    Ok(handle)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing;
    use serde_json::json;
    use std::io::Write;

    fn write_artifact(value: &serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(value.to_string().as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_linear_pipeline() {
        let file = write_artifact(&testing::linear_artifact_json());
        let handle = load_pipeline(file.path()).unwrap();

        assert_eq!(handle.schema().iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(handle.classifier().coefficients().is_some());
        assert_eq!(handle.metadata().sha256.len(), 64);
    }

    #[test]
    fn test_load_nonlinear_pipeline() {
        let file = write_artifact(&testing::gaussian_nb_artifact_json());
        let handle = load_pipeline(file.path()).unwrap();

        assert_eq!(handle.classifier().kind(), "gaussian_nb");
        assert!(handle.classifier().coefficients().is_none());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_pipeline(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ArtifactError::NotFound(_))));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(load_pipeline(file.path()), Err(ArtifactError::Parse(_))));
    }

    #[test]
    fn test_unsupported_version() {
        let mut value = testing::linear_artifact_json();
        value["format_version"] = json!(99);
        let file = write_artifact(&value);
        assert!(matches!(
            load_pipeline(file.path()),
            Err(ArtifactError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_missing_classifier_stage() {
        let mut value = testing::linear_artifact_json();
        value["named_steps"].as_object_mut().unwrap().remove("classifier");
        let file = write_artifact(&value);
        assert!(matches!(
            load_pipeline(file.path()),
            Err(ArtifactError::MissingStage("classifier"))
        ));
    }

    #[test]
    fn test_missing_feature_names() {
        let mut value = testing::linear_artifact_json();
        value["named_steps"]["scaler"]
            .as_object_mut()
            .unwrap()
            .remove("feature_names_in");
        let file = write_artifact(&value);
        assert!(matches!(load_pipeline(file.path()), Err(ArtifactError::Schema(_))));
    }

    #[test]
    fn test_unknown_classifier_type() {
        let mut value = testing::linear_artifact_json();
        value["named_steps"]["classifier"]["type"] = json!("random_forest");
        let file = write_artifact(&value);
        assert!(matches!(
            load_pipeline(file.path()),
            Err(ArtifactError::InvalidStage { stage: "classifier", .. })
        ));
    }

    #[test]
    fn test_coefficient_length_mismatch() {
        let mut value = testing::linear_artifact_json();
        value["named_steps"]["classifier"]["coef"] = json!([[1.0, 2.0, 3.0]]);
        let file = write_artifact(&value);
        assert!(matches!(
            load_pipeline(file.path()),
            Err(ArtifactError::InvalidStage { stage: "classifier", .. })
        ));
    }

    #[test]
    fn test_scaler_length_mismatch() {
        let mut value = testing::linear_artifact_json();
        value["named_steps"]["scaler"]["mean"] = json!([0.0]);
        let file = write_artifact(&value);
        assert!(matches!(
            load_pipeline(file.path()),
            Err(ArtifactError::InvalidStage { stage: "scaler", .. })
        ));
    }
}
