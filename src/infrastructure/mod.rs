//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data loading, caching and the language model.
//!
//! # Modules
//!
//! - [`cache`] - Response cache abstractions (in-memory and no-op implementations)
//! - [`data`] - CSV loading of the static data files
//! - [`llm`] - OpenAI-compatible chat completions client

pub mod cache;
pub mod data;
pub mod llm;
