//! Prediction adapter: classifier output to display label.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::{FeatureVector, PredictionError};

const LIKELY_MESSAGE: &str = "The patient is likely to have heart disease.";
const UNLIKELY_MESSAGE: &str = "The patient is unlikely to have heart disease.";

/// A pre-trained binary decision function.
///
/// Implementations must be safe to call concurrently; the loaded model is
/// shared read-only by every request.
pub trait Classifier: Send + Sync {
    /// Returns the raw class label, expected to be 0 or 1.
    fn predict(&self, features: &FeatureVector) -> Result<i64, PredictionError>;
}

/// How labels other than 0 and 1 are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    /// Anything but 1 reads as "unlikely".
    #[default]
    Lenient,
    /// Anything outside {0, 1} is a prediction error.
    Strict,
}

/// Human-readable outcome of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnosis {
    Likely,
    Unlikely,
}

impl Diagnosis {
    pub fn from_label(label: i64, policy: LabelPolicy) -> Result<Self, PredictionError> {
        match (label, policy) {
            (1, _) => Ok(Diagnosis::Likely),
            (0, _) => Ok(Diagnosis::Unlikely),
            (other, LabelPolicy::Strict) => Err(PredictionError::UnexpectedLabel(other)),
            (other, LabelPolicy::Lenient) => {
                warn!("Classifier returned label {}, reporting as unlikely", other);
                Ok(Diagnosis::Unlikely)
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Diagnosis::Likely => LIKELY_MESSAGE,
            Diagnosis::Unlikely => UNLIKELY_MESSAGE,
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Immutable prediction service, built once at startup and shared by handle.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
    policy: LabelPolicy,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>, policy: LabelPolicy) -> Self {
        Self { classifier, policy }
    }

    pub fn policy(&self) -> LabelPolicy {
        self.policy
    }

    pub fn classify(&self, features: &FeatureVector) -> Result<Diagnosis, PredictionError> {
        debug!("Making a prediction with input: {}", features);
        let label = self.classifier.predict(features)?;
        Diagnosis::from_label(label, self.policy)
    }
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor").field("policy", &self.policy).finish_non_exhaustive()
    }
}
