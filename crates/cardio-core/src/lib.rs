//! Core domain types for cardio.
//!
//! This crate holds the two pieces of request-path logic:
//!
//! - [`validate`] — turns raw form strings into a [`FeatureVector`]
//! - [`Predictor`] — wraps a [`Classifier`] and maps its output to a [`Diagnosis`]
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cardio_core::{validate, Classifier, FeatureVector, LabelPolicy, PredictionError, Predictor, RawFeatures};
//!
//! struct AlwaysSick;
//!
//! impl Classifier for AlwaysSick {
//!     fn predict(&self, _features: &FeatureVector) -> Result<i64, PredictionError> {
//!         Ok(1)
//!     }
//! }
//!
//! let raw = RawFeatures {
//!     age: Some("63"),
//!     sex: Some("1"),
//!     cp: Some("3"),
//!     trestbps: Some("145"),
//!     chol: Some("233"),
//! };
//! let features = validate(&raw).unwrap();
//! let predictor = Predictor::new(Arc::new(AlwaysSick), LabelPolicy::Lenient);
//! let diagnosis = predictor.classify(&features).unwrap();
//! assert_eq!(diagnosis.message(), "The patient is likely to have heart disease.");
//! ```

mod features;
mod predict;

pub use features::{validate, FeatureVector, Field, RawFeatures, FEATURE_COUNT};
pub use predict::{Classifier, Diagnosis, LabelPolicy, Predictor};

use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Rejection of a submitted form. Any single bad field rejects the whole form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("missing field: {0}")]
    Missing(Field),

    #[error("{field} is not an integer: {value:?}")]
    NotAnInteger { field: Field, value: String },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: Field, value: i64 },
}

/// Failure while asking the classifier for a label.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The model expects a different number of features.
    #[error("X has {actual} features, but the model is expecting {expected} features as input")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The model's parameters are internally inconsistent.
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// The classifier produced something outside {0, 1} under a strict policy.
    #[error("unexpected classifier output: {0}")]
    UnexpectedLabel(i64),

    /// Catch-all for failures reported by external `Classifier` implementations.
    #[error("{0}")]
    Failed(String),
}
