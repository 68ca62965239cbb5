//! Retrying client for `/api/insight`, `/api/compare` and `/api/recommend`.

use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;
use tokio_retry::Retry;
use tracing::{debug, warn};

use crate::application::fallback::{COMPARISON_UNAVAILABLE, rule_based_insight};
use crate::domain::entities::{GuitaristProfile, Recommendation, TierDistribution};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Attempts per request, including the first one.
pub const DEFAULT_RETRIES: usize = 3;

/// Base delay between attempts; the n-th retry waits `n` times this.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

const USER_AGENT: &str = concat!("gts/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status. `body` is kept when it was JSON.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: Option<Value> },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// The `fallback` text a degraded backend response carried, if any.
    pub fn fallback_text(&self) -> Option<String> {
        match self {
            ClientError::Status {
                body: Some(body), ..
            } => text_field(body, "fallback"),
            _ => None,
        }
    }
}

/// Client for the insight backend.
///
/// # Example
///
/// ```rust,ignore
/// let client = InsightClient::new("http://localhost:3000")?;
/// let text = client
///     .generate_insight("Slash", &distribution, &["Bending".into()], Some("Hard Rock"))
///     .await;
/// ```
#[derive(Clone)]
pub struct InsightClient {
    http_client: reqwest::Client,
    base_url: String,
    retries: usize,
    retry_delay: Duration,
}

impl InsightClient {
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        })
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Sets the total number of attempts. Values below 1 are raised to 1.
    pub fn with_retries(mut self, retries: usize) -> Self {
        self.retries = retries.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` to `path`, retrying network errors and non-2xx statuses.
    ///
    /// Waits `retry_delay * attempt` before each retry and gives up after
    /// `retries` attempts in total.
    ///
    /// # Errors
    ///
    /// Returns the error of the last attempt.
    pub async fn fetch_with_retry<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let payload =
            serde_json::to_value(body).map_err(|e| ClientError::Decode(e.to_string()))?;

        Retry::spawn(retry_delays(self.retry_delay, self.retries), || {
            self.post_once(&url, &payload)
        })
        .await
    }

    async fn post_once(&self, url: &str, payload: &Value) -> Result<Value, ClientError> {
        debug!(url, "Sending request");

        let response = self
            .http_client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!(url, error = %e, "Request failed");
                ClientError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.ok();
            warn!(url, status = status.as_u16(), "Backend returned an error status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Insight text for one guitarist.
    ///
    /// Returns the model's `insight`, else the backend's `fallback`, else a
    /// locally generated rule-based paragraph.
    pub async fn generate_insight(
        &self,
        guitarist: &str,
        distribution: &TierDistribution,
        top_techniques: &[String],
        style: Option<&str>,
    ) -> String {
        let body = json!({
            "guitarist": guitarist,
            "distribution": distribution,
            "topTechniques": top_techniques,
            "style": style,
        });

        let remote = match self.fetch_with_retry("/api/insight", &body).await {
            Ok(response) => {
                text_field(&response, "insight").or_else(|| text_field(&response, "fallback"))
            }
            Err(e) => {
                warn!(guitarist, error = %e, "Insight request failed");
                e.fallback_text()
            }
        };

        remote.unwrap_or_else(|| rule_based_insight(guitarist, distribution, top_techniques))
    }

    /// Comparison text for two or more guitarists.
    pub async fn compare_guitarists(&self, guitarists: &[GuitaristProfile]) -> String {
        let body = json!({ "guitarists": guitarists });

        let remote = match self.fetch_with_retry("/api/compare", &body).await {
            Ok(response) => text_field(&response, "comparison")
                .or_else(|| text_field(&response, "fallback")),
            Err(e) => {
                warn!(error = %e, "Compare request failed");
                e.fallback_text()
            }
        };

        remote.unwrap_or_else(|| COMPARISON_UNAVAILABLE.to_string())
    }

    /// Guitarists similar to `guitarist`, or an empty list on any failure.
    pub async fn get_recommendations(
        &self,
        guitarist: &GuitaristProfile,
        all_guitarists: &[GuitaristProfile],
    ) -> Vec<Recommendation> {
        let body = json!({ "guitarist": guitarist, "allGuitarists": all_guitarists });

        match self.fetch_with_retry("/api/recommend", &body).await {
            Ok(mut response) => serde_json::from_value(response["recommendations"].take())
                .unwrap_or_else(|e| {
                    warn!(error = %e, "Unexpected recommendations payload");
                    Vec::new()
                }),
            Err(e) => {
                warn!(error = %e, "Recommend request failed");
                Vec::new()
            }
        }
    }

    /// Single unretried `GET /api/health`. Any failure reads as unavailable.
    pub async fn check_api_health(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);

        match self.http_client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "API health check failed");
                false
            }
        }
    }
}

/// Linear backoff: `base`, `2 * base`, ... for the `retries - 1` waits between attempts.
fn retry_delays(base: Duration, retries: usize) -> impl Iterator<Item = Duration> {
    (1..retries).map(move |attempt| base * attempt as u32)
}

/// Non-empty string field of a JSON object.
fn text_field(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}
