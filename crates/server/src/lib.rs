//! Greeter Server
//!
//! Answers `GET /api/hello` for the greeter front-end and optionally serves
//! the front-end itself.

use axum::{routing::get, Router};
use greeter_shared::{HEALTH_PATH, HELLO_PATH};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod frontend;
pub mod routes;
pub mod state;

use config::FrontendMode;
use state::AppState;

/// API routes only.
pub fn api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(HELLO_PATH, get(routes::hello::hello))
        .route(HEALTH_PATH, get(routes::hello::health))
        .route("/api/{*rest}", get(routes::hello::api_not_found))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes plus whatever frontend serving `mode` asks for.
pub fn app(state: AppState, mode: &FrontendMode) -> Result<Router, frontend::FrontendError> {
    frontend::with_frontend(api_router(state), mode)
}
