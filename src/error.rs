//! Application error type and its HTTP mapping.
//!
//! Every error renders a JSON body with a top-level `error` message. Degraded
//! responses additionally merge their fallback payload into the body, so that a
//! failed insight call still answers with `{"error": ..., "fallback": ...}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed request input (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Unknown guitarist or resource (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The language model failed; the body carries a usable fallback (500).
    #[error("{message}")]
    Degraded {
        message: String,
        fallback: Map<String, Value>,
    },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// Builds a degraded error. `fallback` must be a JSON object; its fields are
    /// merged into the response body.
    pub fn degraded(message: impl Into<String>, fallback: Value) -> Self {
        let fallback = match fallback {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("fallback".to_string(), other);
                map
            }
        };
        Self::Degraded {
            message: message.into(),
            fallback,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Degraded { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Fallback payload of a degraded error.
    pub fn fallback(&self) -> Option<&Map<String, Value>> {
        match self {
            AppError::Degraded { fallback, .. } => Some(fallback),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation { message, details } => ErrorBody {
                error: message,
                code: "validation_error",
                details,
                extra: Map::new(),
            },
            AppError::NotFound { message, details } => ErrorBody {
                error: message,
                code: "not_found",
                details,
                extra: Map::new(),
            },
            AppError::Degraded { message, fallback } => ErrorBody {
                error: message,
                code: "upstream_error",
                details: Value::Null,
                extra: fallback,
            },
            AppError::Internal { message, details } => ErrorBody {
                error: message,
                code: "internal_error",
                details,
                extra: Map::new(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Converts validator output into a 400.
///
/// The first field message becomes the `error` text; every failing field is
/// listed under `details`.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut first_message = None;
        let mut fields = Map::new();

        let mut entries: Vec<_> = errors.errors().iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (field, kind) in entries {
            let messages: Vec<String> = match kind {
                ValidationErrorsKind::Field(field_errors) => field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect(),
                ValidationErrorsKind::Struct(_) | ValidationErrorsKind::List(_) => {
                    vec!["invalid nested value".to_string()]
                }
            };

            if first_message.is_none() {
                first_message = messages.first().cloned();
            }
            fields.insert(field.to_string(), json!(messages));
        }

        AppError::bad_request(
            first_message.unwrap_or_else(|| "Invalid request".to_string()),
            json!({ "fields": fields }),
        )
    }
}
