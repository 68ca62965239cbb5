//! Language-model insight generation with response caching.

use metrics::counter;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::application::fallback::{COMPARISON_FALLBACK, INSIGHT_FALLBACK};
use crate::application::prompts;
use crate::domain::entities::{
    Comparison, GuitaristProfile, Insight, Recommendation, Recommendations, TierDistribution,
};
use crate::domain::{CompletionRequest, LanguageModel};
use crate::error::AppError;
use crate::infrastructure::cache::{CacheKey, CacheService};

/// Model-backed operations, each with its own cache namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Insight,
    Compare,
    Recommend,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Insight => "insight",
            Endpoint::Compare => "compare",
            Endpoint::Recommend => "recommend",
        }
    }
}

/// Service that turns technique data into natural-language text.
///
/// Each operation checks the cache first, makes at most one model call on a
/// miss, and stores successful results. Model failures become
/// [`AppError::Degraded`] carrying a static fallback; there is no retry here.
pub struct InsightService {
    model: Arc<dyn LanguageModel>,
    cache: Arc<dyn CacheService>,
}

impl InsightService {
    /// Creates a new insight service.
    pub fn new(model: Arc<dyn LanguageModel>, cache: Arc<dyn CacheService>) -> Self {
        Self { model, cache }
    }

    /// Describes one guitarist's technique signature.
    ///
    /// Cached by guitarist name and distribution.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `guitarist` is blank.
    /// Returns [`AppError::Degraded`] with a `fallback` string if the model fails.
    pub async fn generate_insight(
        &self,
        guitarist: &str,
        style: Option<&str>,
        distribution: TierDistribution,
        top_techniques: Option<&[String]>,
    ) -> Result<Insight, AppError> {
        if guitarist.trim().is_empty() {
            return Err(AppError::bad_request("Missing required fields", json!({})));
        }

        let key = self.key(
            Endpoint::Insight,
            &json!({ "guitarist": guitarist, "distribution": distribution }),
        );
        if let Some(hit) = self.lookup::<Insight>(Endpoint::Insight, key.as_ref()).await {
            return Ok(hit);
        }

        let request = prompts::insight(guitarist, style, &distribution, top_techniques);
        let text = self.call_model(Endpoint::Insight, request).await.ok_or_else(|| {
            AppError::degraded(
                "Failed to generate insight",
                json!({ "fallback": INSIGHT_FALLBACK }),
            )
        })?;

        let insight = Insight {
            insight: text,
            guitarist: guitarist.to_string(),
            distribution,
        };
        self.store(key.as_ref(), &insight).await;

        Ok(insight)
    }

    /// Compares two or more guitarists.
    ///
    /// Cached by the full list of profiles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if fewer than two guitarists are given.
    /// Returns [`AppError::Degraded`] with a `fallback` string if the model fails.
    pub async fn compare(&self, guitarists: &[GuitaristProfile]) -> Result<Comparison, AppError> {
        if guitarists.len() < 2 {
            return Err(AppError::bad_request(
                "Need at least 2 guitarists to compare",
                json!({ "received": guitarists.len() }),
            ));
        }

        let key = self.key(Endpoint::Compare, guitarists);
        if let Some(hit) = self
            .lookup::<Comparison>(Endpoint::Compare, key.as_ref())
            .await
        {
            return Ok(hit);
        }

        let request = prompts::compare(guitarists);
        let text = self.call_model(Endpoint::Compare, request).await.ok_or_else(|| {
            AppError::degraded(
                "Failed to generate comparison",
                json!({ "fallback": COMPARISON_FALLBACK }),
            )
        })?;

        let comparison = Comparison {
            comparison: text,
            guitarists: guitarists.iter().map(|g| g.name.clone()).collect(),
        };
        self.store(key.as_ref(), &comparison).await;

        Ok(comparison)
    }

    /// Suggests guitarists similar to `guitarist` from `candidates`.
    ///
    /// Cached by the guitarist's name and the candidate names. If the model
    /// answers with JSON that does not hold a recommendation list, the result is
    /// an empty list; that degraded result is returned but not cached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Degraded`] with `recommendations: []` if the model call fails.
    pub async fn recommend(
        &self,
        guitarist: &GuitaristProfile,
        candidates: &[GuitaristProfile],
    ) -> Result<Recommendations, AppError> {
        if guitarist.name.trim().is_empty() {
            return Err(AppError::bad_request("Missing required fields", json!({})));
        }

        let candidate_names: Vec<&str> = candidates.iter().map(|g| g.name.as_str()).collect();
        let key = self.key(
            Endpoint::Recommend,
            &json!({ "guitarist": guitarist.name, "allGuitarists": candidate_names }),
        );
        if let Some(hit) = self
            .lookup::<Recommendations>(Endpoint::Recommend, key.as_ref())
            .await
        {
            return Ok(hit);
        }

        let request = prompts::recommend(guitarist, candidates);
        let text = self
            .call_model(Endpoint::Recommend, request)
            .await
            .ok_or_else(|| {
                AppError::degraded(
                    "Failed to generate recommendations",
                    json!({ "recommendations": [] }),
                )
            })?;

        match parse_recommendations(&text) {
            Some(recommendations) => {
                let result = Recommendations {
                    recommendations,
                    for_guitarist: guitarist.name.clone(),
                };
                self.store(key.as_ref(), &result).await;
                Ok(result)
            }
            None => {
                warn!(
                    guitarist = %guitarist.name,
                    "Model returned malformed recommendation JSON, answering with an empty list"
                );
                counter!("insight_malformed_recommendations_total").increment(1);
                Ok(Recommendations {
                    recommendations: Vec::new(),
                    for_guitarist: guitarist.name.clone(),
                })
            }
        }
    }

    fn key<T: Serialize + ?Sized>(&self, endpoint: Endpoint, payload: &T) -> Option<CacheKey> {
        match CacheKey::new(endpoint.as_str(), payload) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!(endpoint = endpoint.as_str(), "Skipping cache: {}", e);
                None
            }
        }
    }

    async fn lookup<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        key: Option<&CacheKey>,
    ) -> Option<T> {
        let key = key?;
        let body = match self.cache.get(key).await {
            Ok(Some(body)) => body,
            Ok(None) => {
                counter!("insight_cache_misses_total", "endpoint" => endpoint.as_str()).increment(1);
                return None;
            }
            Err(e) => {
                warn!(endpoint = endpoint.as_str(), "Cache read failed: {}", e);
                return None;
            }
        };

        match serde_json::from_value(body) {
            Ok(hit) => {
                counter!("insight_cache_hits_total", "endpoint" => endpoint.as_str()).increment(1);
                debug!(endpoint = endpoint.as_str(), "Serving cached response");
                Some(hit)
            }
            Err(e) => {
                warn!(endpoint = endpoint.as_str(), "Ignoring undecodable cache entry: {}", e);
                None
            }
        }
    }

    async fn store<T: Serialize>(&self, key: Option<&CacheKey>, value: &T) {
        let Some(key) = key else { return };

        let body = match serde_json::to_value(value) {
            Ok(body) => body,
            Err(e) => {
                warn!("Cannot cache response: {}", e);
                return;
            }
        };

        if let Err(e) = self.cache.set(key, body).await {
            warn!("Cache write failed: {}", e);
        }
    }

    async fn call_model(&self, endpoint: Endpoint, request: CompletionRequest) -> Option<String> {
        match self.model.complete(request).await {
            Ok(text) => Some(text),
            Err(e) => {
                counter!("insight_model_failures_total", "endpoint" => endpoint.as_str())
                    .increment(1);
                error!(endpoint = endpoint.as_str(), "Language model call failed: {}", e);
                None
            }
        }
    }
}

/// Extracts the recommendation list from model output.
///
/// Accepts either `{"recommendations": [...]}` or a bare array.
fn parse_recommendations(text: &str) -> Option<Vec<Recommendation>> {
    let value: Value = serde_json::from_str(text).ok()?;

    let list = match value {
        Value::Object(mut map) => map.remove("recommendations")?,
        array @ Value::Array(_) => array,
        _ => return None,
    };

    serde_json::from_value(list).ok()
}
