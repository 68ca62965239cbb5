//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is deserialized and validated before reaching the handler.
///
/// Malformed JSON and validation failures both become a 400 with an `error`
/// message, instead of axum's default plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            AppError::bad_request(
                "Invalid JSON body",
                json!({ "reason": rejection.body_text() }),
            )
        })?;

        value.validate()?;

        Ok(Self(value))
    }
}
