//! Domain layer: entities, evaluation rules and the language model contract.
//!
//! # Architecture
//!
//! - [`entities`] - Reference data and derived values
//! - [`dataset`] - The loaded CSV tables
//! - [`evaluator`] - Tier, category and top-technique computations
//! - [`language_model`] - Trait implemented by model backends in the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod dataset;
pub mod entities;
pub mod evaluator;
pub mod language_model;

pub use dataset::Dataset;
pub use language_model::{CompletionRequest, LanguageModel, ModelError};

#[cfg(test)]
pub use language_model::MockLanguageModel;
