//! HTTP route handlers.

pub mod predict;

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::ServerState;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// GET / - The input form.
pub async fn index(State(state): State<Arc<ServerState>>) -> Result<Html<String>, AppError> {
    Ok(Html(state.pages.index()?))
}
