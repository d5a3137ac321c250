//! # pathlen
//!
//! Length of race-track paths stored as GeoJSON.
//! Every LineString and MultiLineString reachable in a document is measured as the sum
//! of great-circle (haversine) distances between consecutive positions.

pub mod common;
pub mod input;
pub mod measure;

pub use common::errors::{AppError, LengthError};
pub use common::types::{EarthRadius, Meters, Unit};
pub use input::geojson::GeoJson;
pub use measure::length::{compute_length, LengthOptions, PathLengthCalculator};
