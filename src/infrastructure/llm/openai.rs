//! OpenAI-compatible chat completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::{CompletionRequest, LanguageModel, ModelError};

const USER_AGENT: &str = concat!("guitar-tech-signature/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Client for `POST {base_url}/chat/completions`.
///
/// Without an API key every call fails with [`ModelError::MissingApiKey`]
/// before touching the network.
pub struct OpenAiClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiClient {
    /// Builds a client with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Network`] if the HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ModelError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ModelError> {
        let api_key = self.api_key.as_deref().ok_or(ModelError::MissingApiKey)?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_output.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        debug!(model = %self.model, max_tokens = request.max_tokens, "Calling language model");

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or(text);
            warn!(status = status.as_u16(), "Language model request rejected");
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Parse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ModelError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1")
    }

    fn request(json_output: bool) -> CompletionRequest {
        CompletionRequest {
            system: "You are a music analyst.".to_string(),
            prompt: "Describe Slash.".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            json_output,
        }
    }

    #[tokio::test]
    async fn test_complete_sends_chat_request_and_returns_content() {
        let captured: Arc<Mutex<Option<(Value, String)>>> = Arc::new(Mutex::new(None));
        let sink = captured.clone();

        let router = Router::new().route(
            "/v1/chat/completions",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    *sink.lock().unwrap() = Some((body, auth));
                    Json(json!({
                        "choices": [{ "message": { "role": "assistant", "content": "Melodic phrasing." } }]
                    }))
                }
            }),
        );
        let base_url = spawn_stub(router).await;

        let client = OpenAiClient::new(
            format!("{base_url}/"),
            Some("sk-test".to_string()),
            "gpt-4.1-mini",
            Duration::from_secs(5),
        )
        .unwrap();

        let text = client.complete(request(true)).await.unwrap();
        assert_eq!(text, "Melodic phrasing.");

        let (body, auth) = captured.lock().unwrap().take().unwrap();
        assert_eq!(auth, "Bearer sk-test");
        assert_eq!(body["model"], "gpt-4.1-mini");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "Describe Slash.");
        assert_eq!(body["response_format"]["type"], "json_object");
    }

    #[tokio::test]
    async fn test_complete_maps_api_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({ "error": { "message": "quota exceeded" } })),
                )
            }),
        );
        let base_url = spawn_stub(router).await;
        let client =
            OpenAiClient::new(base_url, Some("sk-test".into()), "m", Duration::from_secs(5)).unwrap();

        let err = client.complete(request(false)).await.unwrap_err();

        match err {
            ModelError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_rejects_empty_choices() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [] })) }),
        );
        let base_url = spawn_stub(router).await;
        let client =
            OpenAiClient::new(base_url, Some("sk-test".into()), "m", Duration::from_secs(5)).unwrap();

        let err = client.complete(request(false)).await.unwrap_err();
        assert!(matches!(err, ModelError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_complete_without_api_key() {
        let client =
            OpenAiClient::new("http://127.0.0.1:9", None, "m", Duration::from_secs(1)).unwrap();

        let err = client.complete(request(false)).await.unwrap_err();
        assert!(matches!(err, ModelError::MissingApiKey));
    }
}
