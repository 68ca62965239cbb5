//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod compare;
pub mod guitarists;
pub mod health;
pub mod insight;
pub mod metrics;
pub mod recommend;

pub use compare::compare_handler;
pub use guitarists::{guitarist_list_handler, signature_handler};
pub use health::health_handler;
pub use insight::insight_handler;
pub use metrics::metrics_handler;
pub use recommend::recommend_handler;
