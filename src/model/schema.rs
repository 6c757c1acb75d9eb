//! Feature Schema - ordered feature names from the scaler stage
//!
//! The scaler is fitted on a named column set; that order is the only
//! valid order for a feature vector. The schema also carries a CRC32
//! fingerprint so a swapped artifact with a different layout shows up
//! in the logs and on the health endpoint.

use crc32fast::Hasher;
use std::collections::HashSet;

use super::artifact::{ArtifactError, ScalerParams};

// ============================================================================
// FEATURE SCHEMA
// ============================================================================

/// Ordered feature names the pipeline was fitted on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Vec<String>,
    hash: u32,
}

impl FeatureSchema {
    /// Build a schema from ordered names.
    ///
    /// Fails on an empty list or duplicate names, since either makes
    /// positional correspondence ambiguous.
    pub fn new(names: Vec<String>) -> Result<Self, ArtifactError> {
        if names.is_empty() {
            return Err(ArtifactError::Schema("scaler was fitted on zero features".to_string()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ArtifactError::Schema(format!("duplicate feature name '{}'", name)));
            }
        }

        let hash = compute_schema_hash(&names);
        Ok(Self { names, hash })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// CRC32 fingerprint of the ordered names
    pub fn hash(&self) -> u32 {
        self.hash
    }

    pub fn info(&self) -> SchemaInfo {
        SchemaInfo {
            feature_count: self.len(),
            hash: format!("{:08x}", self.hash),
        }
    }
}

/// Read the feature schema from the scaler stage.
///
/// This is the Feature Schema Reader: without `feature_names_in` there is
/// no way to know what to ask the user for, so it is a hard error.
pub fn read_schema(scaler: &ScalerParams) -> Result<FeatureSchema, ArtifactError> {
    let names = scaler.feature_names_in.clone().ok_or_else(|| {
        ArtifactError::Schema("scaler stage has no feature_names_in".to_string())
    })?;
    FeatureSchema::new(names)
}

// ============================================================================
// SCHEMA HASH
// ============================================================================

/// Compute CRC32 hash of the ordered feature names
pub fn compute_schema_hash(names: &[String]) -> u32 {
    let mut hasher = Hasher::new();

    for name in names {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Schema summary for logging / health output
#[derive(Debug, Clone)]
pub struct SchemaInfo {
    pub feature_count: usize,
    pub hash: String,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_schema_keeps_order() {
        let schema = FeatureSchema::new(names(&["mean radius", "mean texture", "worst area"])).unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(
            schema.iter().collect::<Vec<_>>(),
            vec!["mean radius", "mean texture", "worst area"]
        );
    }

    #[test]
    fn test_schema_hash_depends_on_order() {
        let a = FeatureSchema::new(names(&["a", "b"])).unwrap();
        let b = FeatureSchema::new(names(&["b", "a"])).unwrap();
        let a2 = FeatureSchema::new(names(&["a", "b"])).unwrap();
        assert_ne!(a.hash(), b.hash());
        assert_eq!(a.hash(), a2.hash());
    }

    #[test]
    fn test_separator_prevents_collisions() {
        assert_ne!(
            compute_schema_hash(&names(&["ab", "c"])),
            compute_schema_hash(&names(&["a", "bc"]))
        );
    }

    #[test]
    fn test_empty_schema_rejected() {
        assert!(matches!(FeatureSchema::new(vec![]), Err(ArtifactError::Schema(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = FeatureSchema::new(names(&["a", "b", "a"]));
        assert!(matches!(result, Err(ArtifactError::Schema(_))));
    }

    #[test]
    fn test_read_schema_requires_feature_names() {
        let scaler = ScalerParams {
            feature_names_in: None,
            mean: None,
            scale: None,
        };
        assert!(matches!(read_schema(&scaler), Err(ArtifactError::Schema(_))));

        let scaler = ScalerParams {
            feature_names_in: Some(names(&["x"])),
            mean: None,
            scale: None,
        };
        assert_eq!(read_schema(&scaler).unwrap().iter().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_schema_info() {
        let schema = FeatureSchema::new(names(&["a"])).unwrap();
        let info = schema.info();
        assert_eq!(info.feature_count, 1);
        assert_eq!(info.hash.len(), 8);
    }
}
