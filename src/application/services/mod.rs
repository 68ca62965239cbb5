//! Business logic services for the application layer.

pub mod insight_service;
pub mod signature_service;

pub use insight_service::{Endpoint, InsightService};
pub use signature_service::{SignatureService, TOP_TECHNIQUES_LIMIT};
