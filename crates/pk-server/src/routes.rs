//! HTTP route handlers for the ProbKit server.
//!
//! All endpoints live under `/v1/` and accept/return JSON. The engine is
//! pure and every calculation is closed-form, so handlers run inline with
//! no blocking-pool offload.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use pk_core::Error;
use pk_engine::{dispatch, CalculationOutput, CalculationRequest};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct AppState {
    started: Instant,
}

pub fn router(started: Instant) -> Router {
    Router::new()
        .route("/v1/calculate", post(calculate_handler))
        .route("/v1/health", get(health_handler))
        .with_state(AppState { started })
}

// ---------------------------------------------------------------------------
// POST /v1/calculate
// ---------------------------------------------------------------------------

async fn calculate_handler(
    Json(request): Json<CalculationRequest>,
) -> Result<Json<CalculationOutput>, AppError> {
    let result = dispatch(&request)?;
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// GET /v1/health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_s: f64,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: pk_core::VERSION,
        uptime_s: state.started.elapsed().as_secs_f64(),
    })
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Structured JSON error response.
///
/// The four calculation error kinds map to 400 (the request was wrong);
/// the ambient kinds map to 500.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    message: String,
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        let status = match err {
            Error::Validation(_) | Error::Domain(_) | Error::Format(_) | Error::Lookup(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::Io(_) | Error::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, message: err.to_string() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "error": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}
