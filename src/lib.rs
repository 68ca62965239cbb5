//! # Guitar Tech Signature
//!
//! Technique signatures of guitarists: tier and category bar charts computed
//! from a small CSV dataset, plus natural-language insights from a language
//! model, served with Axum.
//!
//! ## Architecture
//!
//! The crate keeps the usual layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, evaluation rules and the language model trait
//! - **Application Layer** ([`application`]) - Signature evaluation, cached insight generation, fallbacks
//! - **Infrastructure Layer** ([`infrastructure`]) - CSV loading, response cache, OpenAI-compatible client
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered signature page
//! - **Charts** ([`chart`]) - Bar geometry shared by the HTML page and the terminal
//! - **Client** ([`client`]) - Retrying HTTP client used by the `gts` CLI
//!
//! ## Features
//!
//! - Tier and category distributions with top techniques by confidence
//! - Insight, comparison and recommendation endpoints backed by a language model
//! - In-memory response cache with a fixed TTL
//! - Static and rule-based fallbacks whenever the model or backend is unavailable
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."   # Optional, fallbacks are served without it
//! export DATA_DIR="data"
//!
//! # Start the service
//! cargo run
//!
//! # Explore from the terminal
//! cargo run --bin gts -- show "Jimi Hendrix"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod chart;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{InsightService, SignatureService};
    pub use crate::client::{ClientError, InsightClient};
    pub use crate::domain::entities::{
        Guitarist, GuitaristProfile, Signature, Source, Technique, Tier, TierDistribution,
    };
    pub use crate::domain::{Dataset, LanguageModel};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
