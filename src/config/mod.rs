//! Configuration module for the ExamVector portal.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;

/// Period of the home/admin auto-refresh when nothing is configured.
pub const DEFAULT_REFRESH_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the document server to
    pub bind_addr: SocketAddr,
    /// Path to the fixed HTML document served for every page request
    pub document_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Common prefix of every gateway endpoint
    pub api_base: String,
    /// Period of the active-section refresh
    pub refresh_period: Duration,
    /// Optional per-request timeout for gateway calls
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            document_path: PathBuf::from("./index.html"),
            log_level: "info".to_string(),
            api_base: "http://127.0.0.1:3000/api".to_string(),
            refresh_period: Duration::from_secs(DEFAULT_REFRESH_SECS),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let bind_addr = match env::var("EXAMVECTOR_BIND_ADDR") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::Config(format!("Invalid EXAMVECTOR_BIND_ADDR format: {}", raw))
            })?,
            Err(_) => defaults.bind_addr,
        };

        let document_path = env::var("EXAMVECTOR_DOCUMENT_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.document_path);

        let log_level = env::var("EXAMVECTOR_LOG_LEVEL").unwrap_or(defaults.log_level);

        let api_base = env::var("EXAMVECTOR_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let refresh_period = match env::var("EXAMVECTOR_REFRESH_SECS") {
            Ok(raw) => Duration::from_secs(parse_secs("EXAMVECTOR_REFRESH_SECS", &raw)?),
            Err(_) => defaults.refresh_period,
        };

        let request_timeout = match env::var("EXAMVECTOR_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(parse_secs(
                "EXAMVECTOR_REQUEST_TIMEOUT_SECS",
                &raw,
            )?)),
            Err(_) => None,
        };

        Ok(Self {
            bind_addr,
            document_path,
            log_level,
            api_base,
            refresh_period,
            request_timeout,
        })
    }
}

fn parse_secs(name: &str, raw: &str) -> Result<u64, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::Config(format!("{} must be greater than zero", name))),
        Ok(secs) => Ok(secs),
        Err(_) => Err(AppError::Config(format!("Invalid {} value: {}", name, raw))),
    }
}
