//! Conversion of linear distances into angular spans on a reference sphere.
//!
//! All functions are pure. Distances and circumferences must share a unit;
//! results are in degrees.

/// Degrees of latitude covered by `radius` along a meridian.
///
/// # Examples
///
/// ```
/// use radius_search::compute::span::latitude_span;
///
/// // A quarter of the meridian is 90 degrees.
/// assert_eq!(latitude_span(10_000.0, 40_000.0), 90.0);
/// ```
pub fn latitude_span(radius: f64, polar_circumference: f64) -> f64 {
    (radius / polar_circumference) * 360.0
}

/// Circumference of the parallel through `reference_lat`.
///
/// Exactly zero at the poles, where `cos` would otherwise leave a tiny
/// positive residue.
pub fn local_circumference(equatorial_circumference: f64, reference_lat: f64) -> f64 {
    if reference_lat.abs() >= 90.0 {
        return 0.0;
    }
    equatorial_circumference * reference_lat.to_radians().cos()
}

/// Degrees of longitude covered by `radius` along a parallel.
///
/// Returns `None` when the parallel has no length (the poles): the span is
/// undefined there and every longitude must be treated as reachable.
///
/// # Examples
///
/// ```
/// use radius_search::compute::span::{local_circumference, longitude_span};
///
/// let at_equator = local_circumference(40_000.0, 0.0);
/// assert_eq!(longitude_span(10_000.0, at_equator), Some(90.0));
///
/// let at_pole = local_circumference(40_000.0, 90.0);
/// assert_eq!(longitude_span(10_000.0, at_pole), None);
/// ```
pub fn longitude_span(radius: f64, local_circumference: f64) -> Option<f64> {
    if local_circumference <= 0.0 {
        return None;
    }
    Some((radius / local_circumference) * 360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_latitude_span_scales_linearly() {
        let polar = 40_007.863;
        assert_eq!(latitude_span(0.0, polar), 0.0);
        assert!((latitude_span(polar / 2.0, polar) - 180.0).abs() < EPS);
        assert!((latitude_span(polar, polar) - 360.0).abs() < EPS);
        let one = latitude_span(100.0, polar);
        let two = latitude_span(200.0, polar);
        assert!((two - 2.0 * one).abs() < EPS);
    }

    #[test]
    fn test_local_circumference_shrinks_with_latitude() {
        let equatorial = 40_075.017;
        assert_eq!(local_circumference(equatorial, 0.0), equatorial);
        let at_60 = local_circumference(equatorial, 60.0);
        assert!((at_60 - equatorial / 2.0).abs() < 1e-6);
        assert_eq!(
            local_circumference(equatorial, 45.0),
            local_circumference(equatorial, -45.0)
        );
    }

    #[test]
    fn test_local_circumference_is_zero_at_poles() {
        assert_eq!(local_circumference(40_075.017, 90.0), 0.0);
        assert_eq!(local_circumference(40_075.017, -90.0), 0.0);
    }

    #[test]
    fn test_longitude_span_widens_toward_poles() {
        let equatorial = 40_075.017;
        let at_equator = longitude_span(100.0, local_circumference(equatorial, 0.0)).unwrap();
        let at_60 = longitude_span(100.0, local_circumference(equatorial, 60.0)).unwrap();
        assert!((at_60 - 2.0 * at_equator).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_span_undefined_without_circumference() {
        assert_eq!(longitude_span(1.0, 0.0), None);
        assert_eq!(longitude_span(0.0, 0.0), None);
    }
}
