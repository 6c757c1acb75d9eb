//! Classifier stage
//!
//! Two variants are supported. Logistic regression exposes a coefficient
//! vector and therefore supports importance ranking; Gaussian naive Bayes
//! does not. The set is closed: `ClassifierStage` is an enum and the
//! coefficient capability is answered by a `match`, not a runtime check.

use ndarray::{Array1, Array2, ArrayView1};

use super::artifact::{ClassifierStep, GaussianNbParams, LogisticRegressionParams};

/// Class index of the positive (malignant) class
pub const POSITIVE_CLASS: usize = 1;

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Binary probabilistic classifier over a standardized sample
pub trait BinaryClassifier {
    /// Probability per class index, `[p(class 0), p(class 1)]`.
    ///
    /// `None` when the sample overflows the model's arithmetic and no
    /// distribution can be computed.
    fn predict_proba(&self, x: ArrayView1<f64>) -> Option<[f64; 2]>;
}

/// Argmax over a probability pair; an exact tie goes to class 0
pub fn class_index(proba: [f64; 2]) -> usize {
    if proba[POSITIVE_CLASS] > proba[0] { POSITIVE_CLASS } else { 0 }
}

// ============================================================================
// STAGE ENUM
// ============================================================================

#[derive(Debug, Clone)]
pub enum ClassifierStage {
    /// Has a coefficient vector
    Linear(LogisticRegression),
    /// No coefficients
    NonLinear(GaussianNb),
}

impl ClassifierStage {
    pub fn from_params(params: ClassifierStep, n_features: usize) -> Result<Self, String> {
        match params {
            ClassifierStep::LogisticRegression(s) => {
                LogisticRegression::from_params(s, n_features).map(ClassifierStage::Linear)
            }
            ClassifierStep::GaussianNb(s) => {
                GaussianNb::from_params(s, n_features).map(ClassifierStage::NonLinear)
            }
        }
    }

    /// Linear coefficients, if this variant has them
    pub fn coefficients(&self) -> Option<&Array1<f64>> {
        match self {
            ClassifierStage::Linear(lr) => Some(&lr.coef),
            ClassifierStage::NonLinear(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ClassifierStage::Linear(_) => "logistic_regression",
            ClassifierStage::NonLinear(_) => "gaussian_nb",
        }
    }
}

impl BinaryClassifier for ClassifierStage {
    fn predict_proba(&self, x: ArrayView1<f64>) -> Option<[f64; 2]> {
        match self {
            ClassifierStage::Linear(lr) => lr.predict_proba(x),
            ClassifierStage::NonLinear(nb) => nb.predict_proba(x),
        }
    }
}

// ============================================================================
// LOGISTIC REGRESSION
// ============================================================================

#[derive(Debug, Clone)]
pub struct LogisticRegression {
    coef: Array1<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(coef: Array1<f64>, intercept: f64) -> Self {
        Self { coef, intercept }
    }

    fn from_params(params: LogisticRegressionParams, n_features: usize) -> Result<Self, String> {
        check_classes(params.classes.as_deref())?;

        let [row] = <[Vec<f64>; 1]>::try_from(params.coef)
            .map_err(|rows| format!("coef must have exactly 1 row for a binary model, got {}", rows.len()))?;
        check_row("coef", &row, n_features)?;

        let intercept = match params.intercept.as_slice() {
            [b] if b.is_finite() => *b,
            [b] => return Err(format!("intercept is not finite: {}", b)),
            other => return Err(format!("intercept must have exactly 1 entry, got {}", other.len())),
        };

        Ok(Self::new(Array1::from(row), intercept))
    }

    /// Raw decision score `coef · x + intercept`
    pub fn decision_function(&self, x: ArrayView1<f64>) -> f64 {
        self.coef.dot(&x) + self.intercept
    }
}

impl BinaryClassifier for LogisticRegression {
    fn predict_proba(&self, x: ArrayView1<f64>) -> Option<[f64; 2]> {
        // inf + -inf in the dot product surfaces here as NaN
        let z = self.decision_function(x);
        if !z.is_finite() {
            return None;
        }
        let p = sigmoid(z);
        Some([1.0 - p, p])
    }
}

/// Logistic function, stable for large |z|
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

// ============================================================================
// GAUSSIAN NAIVE BAYES
// ============================================================================

#[derive(Debug, Clone)]
pub struct GaussianNb {
    theta: Array2<f64>,
    var: Array2<f64>,
    log_prior: [f64; 2],
}

impl GaussianNb {
    fn from_params(params: GaussianNbParams, n_features: usize) -> Result<Self, String> {
        check_classes(params.classes.as_deref())?;

        let theta = checked_matrix("theta", params.theta, n_features)?;
        let var = checked_matrix("var", params.var, n_features)?;
        if var.iter().any(|&v| v <= 0.0) {
            return Err("var must be strictly positive".to_string());
        }

        let log_prior = match params.class_prior.as_slice() {
            [p0, p1] if *p0 > 0.0 && *p1 > 0.0 => [p0.ln(), p1.ln()],
            [_, _] => return Err("class_prior entries must be positive".to_string()),
            other => return Err(format!("class_prior must have 2 entries, got {}", other.len())),
        };

        Ok(Self { theta, var, log_prior })
    }

    /// Per-class joint log likelihood
    fn joint_log_likelihood(&self, x: ArrayView1<f64>) -> [f64; 2] {
        let mut jll = self.log_prior;
        for (class, slot) in jll.iter_mut().enumerate() {
            let theta = self.theta.row(class);
            let var = self.var.row(class);
            let mut ll = 0.0;
            for ((&xi, &mu), &v) in x.iter().zip(theta.iter()).zip(var.iter()) {
                ll -= 0.5 * (2.0 * std::f64::consts::PI * v).ln();
                ll -= 0.5 * (xi - mu).powi(2) / v;
            }
            *slot += ll;
        }
        jll
    }
}

impl BinaryClassifier for GaussianNb {
    fn predict_proba(&self, x: ArrayView1<f64>) -> Option<[f64; 2]> {
        let jll = self.joint_log_likelihood(x);
        let max = jll[0].max(jll[1]);
        // Both classes at -inf: the sample is out of range for either one
        if !max.is_finite() {
            return None;
        }
        let e0 = (jll[0] - max).exp();
        let e1 = (jll[1] - max).exp();
        let total = e0 + e1;
        Some([e0 / total, e1 / total])
    }
}

// ============================================================================
// VALIDATION HELPERS
// ============================================================================

fn check_classes(classes: Option<&[i64]>) -> Result<(), String> {
    match classes {
        None | Some([0, 1]) => Ok(()),
        Some(other) => Err(format!("expected classes [0, 1], got {:?}", other)),
    }
}

fn check_row(field: &str, row: &[f64], n_features: usize) -> Result<(), String> {
    if row.len() != n_features {
        return Err(format!(
            "{} has {} entries but the schema has {} features",
            field,
            row.len(),
            n_features
        ));
    }
    if row.iter().any(|v| !v.is_finite()) {
        return Err(format!("{} contains non-finite values", field));
    }
    Ok(())
}

fn checked_matrix(field: &str, rows: Vec<Vec<f64>>, n_features: usize) -> Result<Array2<f64>, String> {
    if rows.len() != 2 {
        return Err(format!("{} must have 2 rows, got {}", field, rows.len()));
    }
    for row in &rows {
        check_row(field, row, n_features)?;
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((2, n_features), flat).map_err(|e| format!("{}: {}", field, e))
}

// ============================================================================
// TESTS
// ============================================================================
