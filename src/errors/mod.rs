//! Error handling module for the ExamVector portal.
//!
//! Two families live here: `GatewayError` for calls into the remote exam API,
//! and `AppError` for the static document server and its configuration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const REJECTED: &str = "REJECTED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
}

/// Failure of a single gateway call.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The request could not complete, or its body could not be decoded
    Transport(String),
    /// The gateway answered with a non-success status
    Rejected { status: u16, message: String },
    /// The gateway reports the requested record does not exist
    NotFound(String),
}

impl GatewayError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Transport(_) => codes::TRANSPORT_ERROR,
            GatewayError::Rejected { .. } => codes::REJECTED,
            GatewayError::NotFound(_) => codes::NOT_FOUND,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            GatewayError::Transport(msg) => msg.clone(),
            GatewayError::Rejected { message, .. } => message.clone(),
            GatewayError::NotFound(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Rejected { status, message } => {
                write!(f, "{} ({}): {}", self.error_code(), status, message)
            }
            _ => write!(f, "{}: {}", self.error_code(), self.message()),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Transport error: {:?}", err);
        GatewayError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        GatewayError::Transport(format!("JSON error: {}", err))
    }
}

/// Error body the gateway sends alongside a non-success status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Server and configuration errors.
#[derive(Debug)]
pub enum AppError {
    /// Invalid or missing configuration value
    Config(String),
    /// The fixed document could not be read
    Document(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Document(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => codes::CONFIG_ERROR,
            AppError::Document(_) => codes::DOCUMENT_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Config(msg) => msg.clone(),
            AppError::Document(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Document read error: {:?}", err);
        AppError::Document(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, format!("Server Error: {}", self.message())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_codes() {
        assert_eq!(
            GatewayError::Transport("down".into()).error_code(),
            codes::TRANSPORT_ERROR
        );
        assert_eq!(
            GatewayError::NotFound("nope".into()).error_code(),
            codes::NOT_FOUND
        );
        let rejected = GatewayError::Rejected {
            status: 400,
            message: "Registration closed".into(),
        };
        assert_eq!(rejected.message(), "Registration closed");
        assert_eq!(rejected.to_string(), "REJECTED (400): Registration closed");
    }

    #[test]
    fn test_document_error_status() {
        let err = AppError::Document("missing".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "DOCUMENT_ERROR: missing");
    }
}
