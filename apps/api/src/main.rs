mod config;
mod errors;
mod experience;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on an unparseable PORT)
    let config = Config::from_env()?;

    // Initialize structured logging; RUST_LOG wins when set and valid
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_filter()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting PMP Experience Generator API v{}",
        env!("CARGO_PKG_VERSION")
    );

    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; generation requests will fail until it is configured");
    }

    let llm = LlmClient::new(config.openai_base_url.clone());
    info!(
        "LLM client initialized (model: {}, base_url: {})",
        llm_client::MODEL,
        config.openai_base_url
    );
    info!("Allowed origins: {}", config.allowed_origins.join(", "));

    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
        llm: Arc::new(llm),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");
    info!("Health check: http://localhost:{port}/health");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn default_log_filter() -> EnvFilter {
    EnvFilter::new(format!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_targets_this_crate_at_info() {
        let filter = default_log_filter().to_string();
        assert!(filter.contains(&format!("{}=info", env!("CARGO_CRATE_NAME"))));
        assert!(filter.contains("tower_http=info"));
    }
}
