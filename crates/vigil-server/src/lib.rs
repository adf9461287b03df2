//! Vigil server library logic.

pub mod api;
pub mod api_outbound;
pub mod config;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use vigil_outbound::OutboundCallClient;

/// Maximum request body size (2 MiB). Protects against OOM from oversized
/// transcript payloads.
const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application state shared across all request handlers.
///
/// The follow-up proxy is stateless: nothing here is mutated between
/// requests, and two concurrent submissions for the same transcript are
/// independent (and are not deduplicated).
#[derive(Clone)]
pub struct AppState {
    /// Client for the external call-initiation API.
    pub outbound: Arc<OutboundCallClient>,
}

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/outbound-call",
            post(api_outbound::outbound_call_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
