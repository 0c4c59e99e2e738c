//! Library components behind the `amenity-qa` binary.

pub mod input;
pub mod logging;
pub mod report;
