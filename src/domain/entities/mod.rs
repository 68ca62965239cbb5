//! Core domain entities.
//!
//! Reference data loaded from the CSV files ([`Guitarist`], [`Technique`],
//! [`Source`]), values derived from it ([`TierDistribution`], [`Signature`]) and
//! the results produced by the insight service ([`Insight`], [`Comparison`],
//! [`Recommendations`]).

pub mod distribution;
pub mod guitarist;
pub mod insight;
pub mod signature;
pub mod source;
pub mod technique;

pub use distribution::{CategoryDistribution, TierDistribution};
pub use guitarist::{Guitarist, GuitaristProfile};
pub use insight::{Comparison, Insight, Recommendation, Recommendations};
pub use signature::{RankedTechnique, Signature};
pub use source::Source;
pub use technique::{Technique, Tier, UnknownTier};
