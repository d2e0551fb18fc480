//! HTTP API server for quizlink.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod landing;
mod response_types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use quizlink_service::IngestService;

pub use landing::{LandingSettings, render_landing_page};
pub use response_types::{ProfileSavedResponse, WebhookResponse};

/// Shared application state for all HTTP handlers.
///
/// Immutable after startup; every request opens its own database connection.
pub struct AppState {
    /// Profile and webhook ingest
    pub ingest_service: Arc<IngestService>,
    /// Landing page HTML, rendered once at startup
    pub landing_page: String,
}

impl AppState {
    #[must_use]
    pub fn new(ingest_service: Arc<IngestService>, landing: &LandingSettings) -> Self {
        Self { ingest_service, landing_page: render_landing_page(landing) }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing::serve_landing))
        .route("/health", get(health))
        .route("/api/facebook-data", post(handlers::profile::save_facebook_data))
        .route("/webhooks/scoreapp", post(handlers::webhooks::scoreapp_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
