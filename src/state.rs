//! Shared application state injected into every handler.

use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::application::services::{InsightService, SignatureService};
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub insight_service: Arc<InsightService>,
    pub signature_service: Arc<SignatureService>,
    pub cache: Arc<dyn CacheService>,
    /// Whether an API key is configured. Reported by the health check only.
    pub model_configured: bool,
    /// Renders installed counters for `GET /api/metrics`. `None` disables the endpoint.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        insight_service: Arc<InsightService>,
        signature_service: Arc<SignatureService>,
        cache: Arc<dyn CacheService>,
        model_configured: bool,
    ) -> Self {
        Self {
            insight_service,
            signature_service,
            cache,
            model_configured,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
