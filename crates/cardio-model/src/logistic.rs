//! Binary logistic regression.

use cardio_core::{Classifier, FeatureVector, PredictionError, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

fn default_threshold() -> f64 {
    0.5
}

fn default_classes() -> [i64; 2] {
    [0, 1]
}

/// Linear model over the raw (unscaled) features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One weight per feature, in feature order.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Probability above which the positive class is returned.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Labels for the negative and positive class.
    #[serde(default = "default_classes")]
    pub classes: [i64; 2],
}

impl LogisticRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            threshold: default_threshold(),
            classes: default_classes(),
        }
    }

    /// Probability of the positive class.
    pub fn probability(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(PredictionError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: FEATURE_COUNT,
            });
        }
        let z = self
            .coefficients
            .iter()
            .zip(features.as_f64())
            .fold(self.intercept, |acc, (w, x)| acc + w * x);
        if !z.is_finite() {
            return Err(PredictionError::InvalidModel(format!("non-finite decision value {}", z)));
        }
        Ok(sigmoid(z))
    }
}

impl Classifier for LogisticRegression {
    fn predict(&self, features: &FeatureVector) -> Result<i64, PredictionError> {
        let p = self.probability(features)?;
        let [negative, positive] = self.classes;
        Ok(if p > self.threshold { positive } else { negative })
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
