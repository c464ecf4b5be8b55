//! ExamVector portal.
//!
//! The client-side view layer of the exam portal (navigation, listings,
//! application and result workflows, admin dashboard) plus the static server
//! that delivers the portal document.

pub mod config;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod portal;
pub mod site;
pub mod view;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use gateway::{Gateway, HttpGateway};
pub use portal::{Portal, Section};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Create the document server router.
///
/// Everything but `/health` falls through to the document, whatever the method.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(site::health_check))
        .fallback(site::serve_document)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
