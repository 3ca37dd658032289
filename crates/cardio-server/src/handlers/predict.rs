//! Prediction form handler.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use tracing::{debug, error};

use crate::dto::PatientForm;
use crate::error::AppError;
use crate::services::assessment;
use crate::ServerState;

/// POST /predict - Renders the diagnosis, or a message explaining why there is none.
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let form = PatientForm::from_pairs(pairs);
    let message = match assessment::assess(&state.predictor, &form) {
        Ok(diagnosis) => {
            debug!("Prediction result: {}", diagnosis);
            diagnosis.message().to_string()
        }
        Err(e) => {
            error!("{}", e);
            e.user_message()
        }
    };

    Ok(Html(state.pages.result(&message)?))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use cardio_core::{Classifier, FeatureVector, LabelPolicy, PredictionError, Predictor};
    use cardio_model::{DecisionTree, Model, TreeNode};
    use tower::ServiceExt;

    use super::*;
    use crate::pages::Pages;

    struct Fixed(Result<i64, PredictionError>);

    impl Classifier for Fixed {
        fn predict(&self, _features: &FeatureVector) -> Result<i64, PredictionError> {
            self.0.clone()
        }
    }

    fn state_with(classifier: impl Classifier + 'static, policy: LabelPolicy) -> Arc<ServerState> {
        Arc::new(ServerState {
            predictor: Predictor::new(Arc::new(classifier), policy),
            pages: Pages::new().unwrap(),
        })
    }

    async fn post_form(state: Arc<ServerState>, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = crate::router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_likely_diagnosis() {
        let state = state_with(Fixed(Ok(1)), LabelPolicy::Lenient);
        let (status, html) = post_form(state, "age=63&sex=1&cp=3&trestbps=145&chol=233").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("The patient is likely to have heart disease."));
        assert!(!html.contains("unlikely"));
    }

    #[tokio::test]
    async fn test_unlikely_diagnosis() {
        let state = state_with(Fixed(Ok(0)), LabelPolicy::Lenient);
        let (status, html) = post_form(state, "age=50&sex=0&cp=0&trestbps=120&chol=200").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("The patient is unlikely to have heart disease."));
    }

    #[tokio::test]
    async fn test_invalid_input() {
        let state = state_with(Fixed(Ok(1)), LabelPolicy::Lenient);
        let (status, html) = post_form(state, "age=0&sex=1&cp=3&trestbps=145&chol=233").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Invalid input."));
        assert!(!html.contains("heart disease."));
    }

    #[tokio::test]
    async fn test_non_numeric_and_missing_fields() {
        let state = state_with(Fixed(Ok(1)), LabelPolicy::Lenient);
        let (_, html) = post_form(state.clone(), "age=abc&sex=1&cp=3&trestbps=145&chol=233").await;
        assert!(html.contains("Invalid input."));

        let (status, html) = post_form(state, "age=63&sex=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Invalid input."));
    }

    #[tokio::test]
    async fn test_repeated_field_uses_first_value() {
        let state = state_with(Fixed(Ok(1)), LabelPolicy::Lenient);
        let (status, html) =
            post_form(state.clone(), "age=63&age=64&sex=1&cp=3&trestbps=145&chol=233").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("The patient is likely to have heart disease."));

        let (status, html) = post_form(state, "age=0&age=63&sex=1&cp=3&trestbps=145&chol=233").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Invalid input."));
    }

    #[tokio::test]
    async fn test_prediction_error_embeds_cause() {
        let state = state_with(
            Fixed(Err(PredictionError::Failed("classifier exploded".into()))),
            LabelPolicy::Lenient,
        );
        let (status, html) = post_form(state, "age=63&sex=1&cp=3&trestbps=145&chol=233").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("An error occurred during prediction: classifier exploded"));
    }

    #[tokio::test]
    async fn test_strict_policy_surfaces_unexpected_label() {
        let state = state_with(Fixed(Ok(2)), LabelPolicy::Strict);
        let (_, html) = post_form(state, "age=63&sex=1&cp=3&trestbps=145&chol=233").await;
        assert!(html.contains("An error occurred during prediction: unexpected classifier output: 2"));
    }

    #[tokio::test]
    async fn test_with_loaded_model_kind() {
        let tree = Model::DecisionTree(DecisionTree {
            nodes: vec![
                TreeNode::Split { feature: 4, threshold: 220.0, left: 1, right: 2 },
                TreeNode::Leaf(0),
                TreeNode::Leaf(1),
            ],
        });
        let state = state_with(tree, LabelPolicy::Lenient);
        let (_, html) = post_form(state.clone(), "age=63&sex=1&cp=3&trestbps=145&chol=233").await;
        assert!(html.contains("The patient is likely to have heart disease."));
        let (_, html) = post_form(state, "age=50&sex=0&cp=0&trestbps=120&chol=200").await;
        assert!(html.contains("The patient is unlikely to have heart disease."));
    }

    #[tokio::test]
    async fn test_index_and_health() {
        let state = state_with(Fixed(Ok(0)), LabelPolicy::Lenient);

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = crate::router(state.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("<form"));

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = crate::router(state).oneshot(request).await.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }
}
