//! Resolution of circular radius queries into range-filter rectangles.
//!
//! A document store that only supports `min <= field <= max` filters cannot
//! express a circle, nor a longitude range that wraps around ±180°. The
//! resolver classifies each query into exactly one [`Coverage`] case and
//! turns that case into one or two non-wrapping [`Rectangle`]s.
//!
//! Cases are tried in order; the first that applies wins:
//!
//! 1. **GlobalCoverage**: the radius reaches half the meridian, so the whole
//!    globe is covered.
//! 2. **PoleOverflow**: the latitude band touches a pole, so every longitude
//!    is reachable.
//! 3. **GlobalLongitude**: the east-west extent wraps the whole parallel.
//! 4. **Normal**: a single rectangle inside [-180, 180].
//! 5. **AntimeridianSplit**: the longitude range crosses ±180° and is split
//!    into two rectangles sharing the latitude bounds.
//!
//! The longitude span is evaluated on the parallel through the query center,
//! not through the pole-ward latitude bound. Near the poles this covers
//! slightly less than the true circle; that contract is kept as is.

use crate::compute::span::{latitude_span, local_circumference, longitude_span};
use crate::compute::validation::{validate_circumference, validate_query};
use crate::config::EarthModel;
use crate::error::Result;
use radius_search_types::rect::{Rectangle, RectangleSet};

/// The case a radius query falls into, with the bounds needed to build its
/// rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coverage {
    /// The circle covers the entire globe.
    GlobalCoverage,
    /// The latitude band reaches a pole; all longitudes apply.
    PoleOverflow { lat_min: f64, lat_max: f64 },
    /// The circle wraps the whole parallel; all longitudes apply.
    GlobalLongitude { lat_min: f64, lat_max: f64 },
    /// One rectangle, no wrap-around.
    Normal {
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    },
    /// Longitude range crossing ±180°, as two `(lon_min, lon_max)` ranges in
    /// output order.
    AntimeridianSplit {
        lat_min: f64,
        lat_max: f64,
        first: (f64, f64),
        second: (f64, f64),
    },
}

impl Coverage {
    /// Classify a radius query.
    ///
    /// # Arguments
    ///
    /// * `lat` - Center latitude in degrees, [-90, 90]
    /// * `lon` - Center longitude in degrees, [-180, 180]
    /// * `radius` - Query radius, >= 0, in the unit of the circumferences
    /// * `polar_circumference` - Meridian circumference of the reference sphere
    /// * `equatorial_circumference` - Equatorial circumference of the reference sphere
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidInput` for out-of-domain arguments.
    pub fn classify(
        lat: f64,
        lon: f64,
        radius: f64,
        polar_circumference: f64,
        equatorial_circumference: f64,
    ) -> Result<Self> {
        validate_query(lat, lon, radius)?;
        validate_circumference("Polar", polar_circumference)?;
        validate_circumference("Equatorial", equatorial_circumference)?;

        let delta_lat = latitude_span(radius, polar_circumference);
        if 2.0 * delta_lat >= 360.0 {
            return Ok(Coverage::GlobalCoverage);
        }

        let raw_lat_max = lat + delta_lat;
        let raw_lat_min = lat - delta_lat;
        let lat_max = raw_lat_max.min(90.0);
        let lat_min = raw_lat_min.max(-90.0);
        if raw_lat_max > 90.0 || raw_lat_min < -90.0 || lat.abs() == 90.0 {
            return Ok(Coverage::PoleOverflow { lat_min, lat_max });
        }

        let local = local_circumference(equatorial_circumference, lat);
        let delta_lon = match longitude_span(radius, local) {
            Some(delta_lon) if 2.0 * radius < local => delta_lon,
            _ => return Ok(Coverage::GlobalLongitude { lat_min, lat_max }),
        };

        let lon_min = lon - delta_lon;
        let lon_max = lon + delta_lon;
        let coverage = if lon_max > 180.0 {
            Coverage::AntimeridianSplit {
                lat_min,
                lat_max,
                first: (lon_min, 180.0),
                second: (-180.0, lon_max - 360.0),
            }
        } else if lon_min < -180.0 {
            Coverage::AntimeridianSplit {
                lat_min,
                lat_max,
                first: (-180.0, lon_max),
                second: (lon_min + 360.0, 180.0),
            }
        } else {
            Coverage::Normal {
                lat_min,
                lat_max,
                lon_min,
                lon_max,
            }
        };
        Ok(coverage)
    }

    /// Short name of the case, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Coverage::GlobalCoverage => "global_coverage",
            Coverage::PoleOverflow { .. } => "pole_overflow",
            Coverage::GlobalLongitude { .. } => "global_longitude",
            Coverage::Normal { .. } => "normal",
            Coverage::AntimeridianSplit { .. } => "antimeridian_split",
        }
    }

    /// Build the rectangles for this case.
    pub fn into_rectangles(self) -> RectangleSet {
        match self {
            Coverage::GlobalCoverage => RectangleSet::full_globe(),
            Coverage::PoleOverflow { lat_min, lat_max }
            | Coverage::GlobalLongitude { lat_min, lat_max } => {
                RectangleSet::single(Rectangle::latitude_band(lat_min, lat_max))
            }
            Coverage::Normal {
                lat_min,
                lat_max,
                lon_min,
                lon_max,
            } => RectangleSet::single(Rectangle::new(lat_min, lat_max, lon_min, lon_max)),
            Coverage::AntimeridianSplit {
                lat_min,
                lat_max,
                first,
                second,
            } => RectangleSet::split(
                Rectangle::new(lat_min, lat_max, first.0, first.1),
                Rectangle::new(lat_min, lat_max, second.0, second.1),
            ),
        }
    }
}

/// Resolve a radius query into the rectangles a range-filter engine can run.
///
/// # Examples
///
/// ```
/// use radius_search::compute::resolver::resolve_rectangles;
///
/// // A 1000 km circle around Fiji crosses the antimeridian.
/// let rects = resolve_rectangles(-17.75, 178.0, 1000.0, 40_007.863, 40_075.017)?;
/// assert_eq!(rects.len(), 2);
/// assert_eq!(rects.get(0).unwrap().lon_max, 180.0);
/// assert_eq!(rects.get(1).unwrap().lon_min, -180.0);
/// # Ok::<(), radius_search::SearchError>(())
/// ```
pub fn resolve_rectangles(
    lat: f64,
    lon: f64,
    radius: f64,
    polar_circumference: f64,
    equatorial_circumference: f64,
) -> Result<RectangleSet> {
    let coverage = Coverage::classify(
        lat,
        lon,
        radius,
        polar_circumference,
        equatorial_circumference,
    )?;
    log::debug!(
        "Resolved radius query ({}, {}, r={}) as {}",
        lat,
        lon,
        radius,
        coverage.name()
    );
    Ok(coverage.into_rectangles())
}

/// Resolve a radius query against a configured reference sphere.
pub fn resolve_with_model(
    lat: f64,
    lon: f64,
    radius: f64,
    model: &EarthModel,
) -> Result<RectangleSet> {
    resolve_rectangles(
        lat,
        lon,
        radius,
        model.polar_circumference,
        model.equatorial_circumference,
    )
}

/// Resolve a radius query, in kilometres, on the standard Earth sphere.
pub fn resolve(lat: f64, lon: f64, radius_km: f64) -> Result<RectangleSet> {
    resolve_with_model(lat, lon, radius_km, &EarthModel::default())
}
