//! Feature Vector - one submission's values, checked against the schema

use ndarray::{Array1, ArrayView1};

use crate::model::FeatureSchema;
use super::types::PredictionError;

/// Ordered feature values matching a schema exactly.
///
/// Construction is the only place length and finiteness are checked;
/// there is no truncation, padding or imputation.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Array1<f64>,
}

impl FeatureVector {
    pub fn new(schema: &FeatureSchema, values: Vec<f64>) -> Result<Self, PredictionError> {
        if values.len() != schema.len() {
            return Err(PredictionError::DimensionMismatch {
                expected: schema.len(),
                actual: values.len(),
            });
        }

        if let Some((name, &value)) = schema.iter().zip(values.iter()).find(|(_, v)| !v.is_finite()) {
            return Err(PredictionError::NonFiniteValue {
                feature: name.to_string(),
                value,
            });
        }

        Ok(Self {
            values: Array1::from(values),
        })
    }

    /// All-zero vector, the form's initial state
    pub fn zeros(schema: &FeatureSchema) -> Self {
        Self {
            values: Array1::zeros(schema.len()),
        }
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec!["A".to_string(), "B".to_string()]).unwrap()
    }

    #[test]
    fn test_valid_vector() {
        let vector = FeatureVector::new(&schema(), vec![3.0, 4.0]).unwrap();
        assert_eq!(vector.as_slice(), &[3.0, 4.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        assert_eq!(
            FeatureVector::new(&schema(), vec![1.0]),
            Err(PredictionError::DimensionMismatch { expected: 2, actual: 1 })
        );
        assert_eq!(
            FeatureVector::new(&schema(), vec![1.0, 2.0, 3.0]),
            Err(PredictionError::DimensionMismatch { expected: 2, actual: 3 })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = FeatureVector::new(&schema(), vec![1.0, f64::INFINITY]);
        assert!(matches!(
            result,
            Err(PredictionError::NonFiniteValue { ref feature, .. }) if feature == "B"
        ));
        assert!(FeatureVector::new(&schema(), vec![f64::NAN, 0.0]).is_err());
    }

    #[test]
    fn test_zeros() {
        let vector = FeatureVector::zeros(&schema());
        assert_eq!(vector.as_slice(), &[0.0, 0.0]);
    }
}
