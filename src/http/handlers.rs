//! Request handlers for the demo endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::demo::{DemoResponse, Network};
use crate::http::server::AppState;

/// `POST /api/run-demo`: one run, answered as `{ result, link? }`.
///
/// Submission failures are part of a 200 answer; only setup or balance-query
/// failures produce a 500.
pub async fn run_demo<N: Network + 'static>(State(state): State<AppState<N>>) -> impl IntoResponse {
    match state.runner.run().await {
        Ok(outcome) => (StatusCode::OK, Json(DemoResponse::from(outcome))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(DemoResponse {
                result: e.to_string(),
                link: None,
            }),
        )
            .into_response(),
    }
}

pub async fn health() -> &'static str {
    "ok"
}
