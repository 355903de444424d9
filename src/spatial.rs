//! Distance calculations and post-filtering of range-query results.
//!
//! A range query returns everything inside the bounding rectangles, which
//! includes the corners outside the circle. [`filter_and_sort`] trims those
//! and orders what remains by great-circle distance.

use crate::compute::validation::validate_query;
use crate::config::EarthModel;
use crate::error::Result;
use geo::{Distance, HaversineMeasure, Point};
use radius_search_types::airport::{Airport, RankedAirport};
use std::cmp::Ordering;

/// Haversine distance between two coordinates on a sphere of `sphere_radius`.
///
/// The result is in the unit of `sphere_radius`.
///
/// # Examples
///
/// ```rust
/// use radius_search::spatial::haversine_distance;
///
/// // One degree of longitude at the equator on the unit sphere.
/// let d = haversine_distance(0.0, 0.0, 0.0, 1.0, 1.0);
/// assert!((d - 1f64.to_radians()).abs() < 1e-12);
/// ```
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, sphere_radius: f64) -> f64 {
    HaversineMeasure::new(sphere_radius).distance(Point::new(lon1, lat1), Point::new(lon2, lat2))
}

/// Haversine distance in kilometres on the default [`EarthModel`] sphere, the
/// same sphere [`filter_and_sort`] uses for kilometre queries.
///
/// # Examples
///
/// ```rust
/// use radius_search::spatial::distance_km;
///
/// // JFK to LAX, roughly 3,980 km
/// let d = distance_km(40.6398, -73.7789, 33.9425, -118.4081);
/// assert!(d > 3_950.0 && d < 4_000.0);
/// ```
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_distance(lat1, lon1, lat2, lon2, EarthModel::default().mean_radius())
}

/// Keep the candidates within `radius` of the center and sort them by distance.
///
/// Distances are computed on the sphere whose meridian is the model's polar
/// circumference, so they share the unit of `radius`. Ties are ordered by id.
///
/// # Errors
///
/// Returns `SearchError::InvalidInput` if the center or radius is out of domain.
pub fn filter_and_sort<I>(
    candidates: I,
    radius: f64,
    lat: f64,
    lon: f64,
    model: &EarthModel,
) -> Result<Vec<RankedAirport>>
where
    I: IntoIterator<Item = Airport>,
{
    validate_query(lat, lon, radius)?;
    let sphere_radius = model.mean_radius();

    let mut ranked: Vec<RankedAirport> = candidates
        .into_iter()
        .filter_map(|airport| {
            let distance = haversine_distance(lat, lon, airport.lat, airport.lon, sphere_radius);
            (distance <= radius).then_some(RankedAirport { airport, distance })
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.airport.id.cmp(&b.airport.id))
    });

    Ok(ranked)
}
