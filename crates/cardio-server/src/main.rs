mod dto;
mod error;
mod handlers;
mod pages;
mod services;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use cardio_config::ServerConfig;
use cardio_core::Predictor;
use cardio_model::load_classifier;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::pages::Pages;

/// Everything a request handler needs. Built once, never mutated.
pub struct ServerState {
    pub predictor: Predictor,
    pub pages: Pages,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let config = ServerConfig::from_env().context("invalid configuration")?;
    let state = Arc::new(init_server_state(&config)?);
    let app = router(state);

    info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_server_state(config: &ServerConfig) -> Result<ServerState> {
    let model = load_classifier(&config.model_path)
        .context("cannot serve predictions without a classifier")?;
    let predictor = Predictor::new(Arc::new(model), config.label_policy);
    info!("Label policy: {:?}", predictor.policy());

    let pages = Pages::new().context("failed to compile page templates")?;

    Ok(ServerState { predictor, pages })
}

fn router(state: Arc<ServerState>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/", get(handlers::index))
        .route("/predict", post(handlers::predict::predict))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .with_state(state)
}
