//! Amenity label normalization and fuzzy matching.
//!
//! [`Normalizer`] maps raw labels to comparison keys; [`score`] provides the
//! edit-distance similarity used to propose corrections between catalogs.

#![deny(unsafe_code)]

pub mod error;
pub mod normalize;
pub mod policy;
pub mod score;

pub use error::PolicyError;
pub use normalize::{Normalizer, normalize};
pub use policy::{Alias, DEFAULT_THRESHOLD, MatchPolicy};
pub use score::{Score, best_match, distance, similarity, similarity_at_least};
