//! Standard scaler stage

use ndarray::{Array1, ArrayView1};

use super::artifact::ScalerParams;

/// Fitted standardization: `(x - mean) / scale`
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Option<Array1<f64>>,
    scale: Option<Array1<f64>>,
}

impl StandardScaler {
    /// Build from exported parameters, checking lengths against the schema
    pub fn from_params(params: &ScalerParams, n_features: usize) -> Result<Self, String> {
        let mean = params.mean.as_ref()
            .map(|m| checked_vector("mean", m, n_features))
            .transpose()?;

        let scale = params.scale.as_ref()
            .map(|s| checked_vector("scale", s, n_features))
            .transpose()?
            // Zero-variance columns were fitted with scale 0; treat as 1.
            .map(|s| s.mapv(|v| if v == 0.0 { 1.0 } else { v }));

        Ok(Self { mean, scale })
    }

    /// Standardize one sample
    pub fn transform(&self, x: ArrayView1<f64>) -> Array1<f64> {
        let mut out = x.to_owned();
        if let Some(mean) = &self.mean {
            out -= mean;
        }
        if let Some(scale) = &self.scale {
            out /= scale;
        }
        out
    }
}

fn checked_vector(field: &str, values: &[f64], n_features: usize) -> Result<Array1<f64>, String> {
    if values.len() != n_features {
        return Err(format!(
            "{} has {} entries but the schema has {} features",
            field,
            values.len(),
            n_features
        ));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(format!("{} contains non-finite value {}", field, bad));
    }
    Ok(Array1::from(values.to_vec()))
}
