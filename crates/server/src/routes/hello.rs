//! The greeting endpoint and its neighbours.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use greeter_shared::ProblemDetails;

use crate::state::AppState;

/// `GET /api/hello`: the text the front-end puts in its heading.
pub async fn hello(State(state): State<AppState>) -> String {
    let body = state.next_greeting();
    tracing::debug!(calls = state.calls(), "serving greeting");
    body
}

pub async fn health() -> &'static str {
    "ok"
}

/// Anything else under `/api` gets a problem document instead of the SPA fallback.
pub async fn api_not_found(uri: Uri) -> Response {
    let problem = ProblemDetails::not_found(format!("no route for {}", uri.path()))
        .with_instance(uri.path());
    match serde_json::to_string(&problem) {
        Ok(body) => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/problem+json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to encode problem document: {}", e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
