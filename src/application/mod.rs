//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations: evaluating a guitarist's
//! signature, building prompts, calling the language model through the cache,
//! and producing fallback text. HTTP handlers and the CLI consume it.
//!
//! # Available Services
//!
//! - [`services::signature_service::SignatureService`] - Distribution and top techniques per guitarist
//! - [`services::insight_service::InsightService`] - Cached, model-backed insight, comparison and recommendations

pub mod fallback;
pub mod prompts;
pub mod services;
