//! Per-guitarist signature evaluation over the loaded dataset.

use serde_json::json;
use std::sync::Arc;

use crate::domain::Dataset;
use crate::domain::entities::{Guitarist, GuitaristProfile, Signature};
use crate::domain::evaluator;
use crate::error::AppError;

/// Number of top techniques shown for a guitarist.
pub const TOP_TECHNIQUES_LIMIT: usize = 5;

/// Service answering "what does this guitarist's technique profile look like".
pub struct SignatureService {
    dataset: Arc<Dataset>,
}

impl SignatureService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// All guitarists in file order.
    pub fn guitarists(&self) -> &[Guitarist] {
        &self.dataset.guitarists
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Evaluates the signature of the guitarist called `name`.
    ///
    /// A guitarist without source rows yields an empty signature
    /// ([`Signature::is_empty`]), not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no guitarist has that exact name.
    pub fn signature(&self, name: &str) -> Result<Signature, AppError> {
        let guitarist = self.dataset.find_guitarist(name).ok_or_else(|| {
            AppError::not_found("Guitarist not found", json!({ "guitarist": name }))
        })?;

        let sources = self.dataset.sources_for(name);
        let techniques = &self.dataset.techniques;

        Ok(Signature {
            guitarist: guitarist.clone(),
            distribution: evaluator::distribution(&sources, techniques),
            category_distribution: evaluator::category_distribution(&sources, techniques),
            top_techniques: evaluator::top_techniques(&sources, techniques, TOP_TECHNIQUES_LIMIT),
            source_count: sources.len(),
        })
    }

    /// Profiles of every guitarist, used as recommendation candidates.
    pub fn profiles(&self) -> Vec<GuitaristProfile> {
        self.dataset
            .guitarists
            .iter()
            .filter_map(|g| self.signature(&g.name).ok())
            .map(|signature| signature.profile())
            .collect()
    }
}
