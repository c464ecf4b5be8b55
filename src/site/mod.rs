//! Static delivery of the portal document.

use axum::{
    extract::State,
    http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    response::IntoResponse,
};

use crate::errors::AppError;
use crate::AppState;

/// Any page request - the fixed portal document, read fresh on every request.
pub async fn serve_document(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = tokio::fs::read(&state.config.document_path).await?;

    Ok((
        [(CONTENT_TYPE, "text/html"), (ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        body,
    ))
}

/// Health check endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
