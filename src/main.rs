//! ExamVector document server.
//!
//! Serves the portal document; everything else happens in the browser
//! against the exam gateway.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use examvector::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ExamVector document server");
    tracing::info!("Document path: {:?}", config.document_path);
    tracing::info!("Gateway base: {}", config.api_base);

    if !config.document_path.exists() {
        tracing::warn!(
            "Document {:?} does not exist yet; requests will fail until it does",
            config.document_path
        );
    }

    let state = AppState {
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("ExamVector Platform running at http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
