//! Form submission to diagnosis.

use std::fmt;

use cardio_core::{validate, Diagnosis, InvalidInputError, PredictionError, Predictor};

use crate::dto::PatientForm;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please check the values and try again.";

/// Why a submission produced no diagnosis.
#[derive(Debug)]
pub enum AssessmentError {
    InvalidInput(InvalidInputError),
    Prediction(PredictionError),
}

impl AssessmentError {
    /// Text shown on the result page in place of a diagnosis.
    pub fn user_message(&self) -> String {
        match self {
            AssessmentError::InvalidInput(_) => INVALID_INPUT_MESSAGE.to_string(),
            AssessmentError::Prediction(e) => format!("An error occurred during prediction: {}", e),
        }
    }
}

impl fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            AssessmentError::Prediction(e) => write!(f, "Prediction error: {}", e),
        }
    }
}

/// Validates the form and runs it through the classifier.
pub fn assess(predictor: &Predictor, form: &PatientForm) -> Result<Diagnosis, AssessmentError> {
    let features = validate(&form.raw()).map_err(AssessmentError::InvalidInput)?;
    predictor.classify(&features).map_err(AssessmentError::Prediction)
}
