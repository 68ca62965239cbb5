//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization and validator for input
//! validation. Successful insight responses are the domain result types
//! themselves (see [`crate::domain::entities::insight`]).

pub mod compare;
pub mod guitarists;
pub mod health;
pub mod insight;
pub mod recommend;
