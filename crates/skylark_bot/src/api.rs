//! HTTP API for health, metrics, and manual triggering.

use crate::metrics::BotMetrics;
use crate::pipeline::BotPipeline;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info};

/// API state shared by the handlers.
#[derive(Clone)]
pub struct ApiState {
    pipeline: BotPipeline,
    metrics: BotMetrics,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(pipeline: BotPipeline, metrics: BotMetrics) -> Self {
        Self { pipeline, metrics }
    }
}

/// Creates the bot API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(get_metrics))
        .route("/trigger", post(trigger_run))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Get current metrics snapshot.
async fn get_metrics(State(state): State<ApiState>) -> impl IntoResponse {
    let snapshot = state.metrics.snapshot();
    (StatusCode::OK, Json(snapshot))
}

/// Execute one reply cycle immediately and return its report.
///
/// Runs in the handler itself, independent of the scheduled loop.
async fn trigger_run(State(state): State<ApiState>) -> Response {
    info!("manual trigger received");

    state.metrics.record_run();
    match state.pipeline.run_once().await {
        Ok(report) => {
            state.metrics.record_report(&report);
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(e) => {
            state.metrics.record_failure();
            error!(error = %e, "triggered run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
