//! HTTP API server for unidir.

#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

pub mod api_error;
mod handlers;
mod query_types;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use unidir_core::UniversityDirectory;

/// Shared state: whichever directory backs this server.
pub struct AppState {
    pub directory: Arc<dyn UniversityDirectory>,
}

impl AppState {
    #[must_use]
    pub fn new(directory: Arc<dyn UniversityDirectory>) -> Self {
        Self { directory }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search", get(handlers::universities::search))
        .route("/universities", get(handlers::universities::list_universities))
        .route("/countries", get(handlers::universities::list_countries))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", version: env!("CARGO_PKG_VERSION") })
}
