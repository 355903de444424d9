//! Validation for query coordinates and radii.

use crate::error::{Result, SearchError};

/// Validates a latitude/longitude pair.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0], both inclusive.
///
/// # Examples
///
/// ```
/// use radius_search::compute::validation::validate_coordinates;
///
/// // Valid point (New York)
/// assert!(validate_coordinates(40.7128, -74.0060).is_ok());
///
/// // Invalid longitude
/// assert!(validate_coordinates(40.0, 200.0).is_err());
///
/// // Invalid latitude
/// assert!(validate_coordinates(95.0, -74.0).is_err());
/// ```
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() {
        return Err(reject(format!("Latitude must be finite, got: {}", lat)));
    }

    if !lon.is_finite() {
        return Err(reject(format!("Longitude must be finite, got: {}", lon)));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(reject(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(reject(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    Ok(())
}

/// Validates a query radius. Zero is a valid degenerate point query.
///
/// # Examples
///
/// ```
/// use radius_search::compute::validation::validate_radius;
///
/// assert!(validate_radius(0.0).is_ok());
/// assert!(validate_radius(250.0).is_ok());
/// assert!(validate_radius(-1.0).is_err());
/// ```
pub fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() {
        return Err(reject(format!("Radius must be finite, got: {}", radius)));
    }

    if radius < 0.0 {
        return Err(reject(format!(
            "Radius must be non-negative, got: {}",
            radius
        )));
    }

    Ok(())
}

/// Validates a full radius query: center coordinates and radius.
pub fn validate_query(lat: f64, lon: f64, radius: f64) -> Result<()> {
    validate_coordinates(lat, lon)?;
    validate_radius(radius)
}

/// Validates a circumference constant of the reference sphere.
pub fn validate_circumference(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(reject(format!(
            "{} circumference must be finite and positive, got: {}",
            name, value
        )));
    }
    Ok(())
}

fn reject(message: String) -> SearchError {
    log::warn!("Rejecting radius query: {}", message);
    SearchError::InvalidInput(message)
}
