//! HTTP server initialization and runtime setup.
//!
//! Handles dataset loading, cache selection, model client construction, and
//! the Axum server lifecycle.

use crate::application::services::{InsightService, SignatureService};
use crate::config::Config;
use crate::domain::Dataset;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use crate::infrastructure::data::CsvDataLoader;
use crate::infrastructure::llm::OpenAiClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds application state from configuration.
///
/// Loads the CSV dataset (an unreadable data directory leaves it empty and is
/// reported by the health check), picks [`MemoryCache`] or [`NullCache`], and wires
/// the OpenAI-compatible client into the services.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let dataset = match CsvDataLoader::new(config.data_dir.clone()).load() {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(
                "Failed to load dataset from {}: {}. Serving an empty dataset.",
                config.data_dir.display(),
                e
            );
            Dataset::default()
        }
    };

    let cache: Arc<dyn CacheService> = if config.cache_enabled {
        tracing::info!("Cache enabled (in-memory, TTL {}s)", config.cache_ttl_seconds);
        Arc::new(MemoryCache::new(Duration::from_secs(config.cache_ttl_seconds)))
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let model = OpenAiClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        Duration::from_secs(config.model_timeout_seconds),
    )
    .context("Failed to build language model client")?;

    let insight_service = Arc::new(InsightService::new(Arc::new(model), cache.clone()));
    let signature_service = Arc::new(SignatureService::new(Arc::new(dataset)));

    Ok(AppState::new(
        insight_service,
        signature_service,
        cache,
        config.openai_api_key.is_some(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The model client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => build_state(&config)?.with_metrics(handle),
        Err(e) => {
            tracing::warn!("Failed to install metrics recorder: {}", e);
            build_state(&config)?
        }
    };

    let app = app_router(state, config.rate_limit_enabled);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
