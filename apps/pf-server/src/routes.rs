//! HTTP route handlers for the physioflow server.
//!
//! All endpoints live under `/v1/` and accept/return JSON.

use std::sync::atomic::Ordering;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use pf_solver::{RunContext, SimulationRequest, SimulationResponse, SolverError};

use crate::state::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/v1/simulate", post(simulate_handler))
        .route("/v1/simulate/batch", post(simulate_batch_handler))
        .route("/v1/health", get(health_handler))
}

// ---------------------------------------------------------------------------
// POST /v1/simulate
// ---------------------------------------------------------------------------

async fn simulate_handler(
    State(state): State<SharedState>,
    Json(request): Json<Option<SimulationRequest>>,
) -> Result<Json<SimulationResponse>, AppError> {
    state.total_requests.fetch_add(1, Ordering::Relaxed);

    // An absent (JSON null) request is an empty response, not an error.
    let Some(request) = request else {
        return Ok(Json(SimulationResponse::default()));
    };

    let solver = state.solver.clone();
    let ctx = RunContext::with_timeout(state.request_timeout);

    let response = tokio::task::spawn_blocking(move || solver.run(&ctx, &request))
        .await
        .map_err(|e| AppError::internal(format!("simulation task panicked: {e}")))??;

    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// POST /v1/simulate/batch
// ---------------------------------------------------------------------------

async fn simulate_batch_handler(
    State(state): State<SharedState>,
    Json(requests): Json<Vec<SimulationRequest>>,
) -> Result<Json<Vec<SimulationResponse>>, AppError> {
    state.total_requests.fetch_add(1, Ordering::Relaxed);

    let solver = state.solver.clone();
    let ctx = RunContext::with_timeout(state.request_timeout);

    let responses = tokio::task::spawn_blocking(move || solver.run_batch(&ctx, &requests))
        .await
        .map_err(|e| AppError::internal(format!("batch task panicked: {e}")))??;

    Ok(Json(responses))
}

// ---------------------------------------------------------------------------
// GET /v1/health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_s: f64,
    total_requests: u64,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_s: state.started_at.elapsed().as_secs_f64(),
        total_requests: state.total_requests.load(Ordering::Relaxed),
    })
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error body returned by all endpoints.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    fn internal(message: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl From<SolverError> for AppError {
    fn from(err: SolverError) -> Self {
        let status = match err {
            SolverError::Cancelled | SolverError::DeadlineExceeded => StatusCode::REQUEST_TIMEOUT,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
