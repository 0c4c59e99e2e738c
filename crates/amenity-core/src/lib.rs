//! Amenity catalog reconciliation.
//!
//! Compares a PMG amenity export with the Amber listing and reports missing
//! and unexpected amenities, duplicates within each catalog, and likely
//! spelling variants. The entry point is [`analyze_amenities`]; each stage is
//! also exposed for callers that want intermediate results.

#![deny(unsafe_code)]

pub mod analyze;
pub mod group;
pub mod parse;
pub mod reconcile;
pub mod sample;
pub mod suggest;

pub use amenity_map::MatchPolicy;
pub use analyze::{AmenityAnalyzer, analyze_amenities, analyze_amenities_with};
pub use group::{GroupMap, group};
pub use parse::parse_labels;
pub use reconcile::{Reconciliation, reconcile};
pub use suggest::{find_potential_typos, suggest};
