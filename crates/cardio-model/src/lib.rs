//! Serialized classifier formats and the startup loader.
//!
//! A model file is a JSON envelope:
//!
//! ```json
//! {
//!   "format": "cardio-classifier",
//!   "version": 1,
//!   "model": { "type": "logistic_regression", "coefficients": [...], "intercept": -4.2 }
//! }
//! ```
//!
//! [`load_classifier`] reads it once at process start; the returned [`Model`]
//! implements [`cardio_core::Classifier`].

mod loader;
mod logistic;
mod tree;

pub use loader::{load_classifier, parse_classifier, LoadError, FORMAT_TAG, FORMAT_VERSION};
pub use logistic::LogisticRegression;
pub use tree::{DecisionTree, TreeNode};

use cardio_core::{Classifier, FeatureVector, PredictionError};
use serde::{Deserialize, Serialize};

/// Any model kind the loader understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Model {
    LogisticRegression(LogisticRegression),
    DecisionTree(DecisionTree),
}

impl Model {
    pub fn kind(&self) -> &'static str {
        match self {
            Model::LogisticRegression(_) => "logistic_regression",
            Model::DecisionTree(_) => "decision_tree",
        }
    }
}

impl Classifier for Model {
    fn predict(&self, features: &FeatureVector) -> Result<i64, PredictionError> {
        match self {
            Model::LogisticRegression(m) => m.predict(features),
            Model::DecisionTree(m) => m.predict(features),
        }
    }
}
