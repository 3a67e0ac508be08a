mod config;
mod errors;
mod extraction;
mod improvement;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::improvement::PromptBuilder;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS CV Improver v{}", env!("CARGO_PKG_VERSION"));

    // Initialize completion gateway
    let gemini = GeminiClient::new(config.gateway()).context("Failed to build HTTP client")?;
    info!(
        "Completion gateway initialized (model: {}, timeout: {}, retries: {})",
        gemini.model(),
        config.timeout_label(),
        config.llm_max_retries
    );

    let prompts = PromptBuilder::new(config.template_variant);
    info!("Default template variant: {}", config.template_variant);

    // Build app state
    let state = AppState {
        gateway: Arc::new(gemini),
        prompts,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
