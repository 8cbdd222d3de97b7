//! HTTP edge in front of the static site.
//!
//! Requests for `/` are redirected to the visitor's language; API routes
//! handle lead capture and link generation; everything else is served from
//! the pre-built site directory.

mod error;
mod handlers;
mod middleware;

pub use error::ApiError;
pub use middleware::{language_redirect, redirect_response};

use crate::leads::LeadStore;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state of the HTTP handlers
pub struct AppState {
    pub store: LeadStore,
    pub admin_api_key: Option<String>,
    pub site_url: String,
}

/// Build the application router
pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/health/storage", get(handlers::storage_health))
        .route("/api/alternates", get(handlers::alternates))
        .route("/api/navigation", get(handlers::navigation))
        .route(
            "/api/leads",
            get(handlers::list_leads).post(handlers::create_lead),
        )
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(language_redirect))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}
