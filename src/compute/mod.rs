//! Radius-to-rectangle resolution, validation, and GeoJSON conversion.

#[cfg(feature = "geojson")]
pub mod geojson;
pub mod resolver;
pub mod span;
pub mod validation;
