use radius_search::config::{EQUATORIAL_CIRCUMFERENCE_KM, POLAR_CIRCUMFERENCE_KM};
use radius_search::{Coverage, RectangleSet, SearchError, resolve, resolve_rectangles};

const EPS: f64 = 1e-9;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_centers() -> Vec<(f64, f64)> {
    let mut centers = Vec::new();
    for lat in [-90.0, -89.9, -75.0, -45.0, -10.0, 0.0, 10.0, 45.0, 60.0, 80.0, 89.9, 90.0] {
        for lon in [-180.0, -179.5, -120.0, -30.0, 0.0, 30.0, 150.0, 179.5, 180.0] {
            centers.push((lat, lon));
        }
    }
    centers
}

fn sample_radii() -> Vec<f64> {
    vec![
        0.0,
        1.0,
        50.0,
        500.0,
        2_500.0,
        7_500.0,
        15_000.0,
        POLAR_CIRCUMFERENCE_KM / 2.0 - 1.0,
        POLAR_CIRCUMFERENCE_KM / 2.0,
        60_000.0,
    ]
}

#[test]
fn test_every_rectangle_is_valid() {
    init_logging();
    for (lat, lon) in sample_centers() {
        for radius in sample_radii() {
            let rects = resolve(lat, lon, radius).unwrap();
            assert!(
                rects.len() == 1 || rects.len() == 2,
                "({}, {}, {}) produced {} rectangles",
                lat,
                lon,
                radius,
                rects.len()
            );
            for rect in &rects {
                assert!(
                    rect.is_valid(),
                    "({}, {}, {}) produced invalid {:?}",
                    lat,
                    lon,
                    radius,
                    rect
                );
            }
            if let (Some(a), Some(b)) = (rects.get(0), rects.get(1)) {
                assert_eq!(a.lat_min, b.lat_min);
                assert_eq!(a.lat_max, b.lat_max);
            }
        }
    }
}

#[test]
fn test_center_is_always_covered() {
    for (lat, lon) in sample_centers() {
        for radius in sample_radii() {
            let rects = resolve(lat, lon, radius).unwrap();
            assert!(
                rects.contains(lat, lon),
                "({}, {}, {}) does not cover its own center",
                lat,
                lon,
                radius
            );
        }
    }
}

#[test]
fn test_resolution_is_idempotent() {
    for (lat, lon) in sample_centers() {
        for radius in sample_radii() {
            assert_eq!(resolve(lat, lon, radius), resolve(lat, lon, radius));
        }
    }
}

#[test]
fn test_area_grows_with_radius() {
    for (lat, lon) in sample_centers() {
        let mut previous = 0.0;
        let mut radius = 0.0;
        while radius < POLAR_CIRCUMFERENCE_KM / 2.0 {
            let area = resolve(lat, lon, radius).unwrap().area();
            assert!(
                area + EPS >= previous,
                "area shrank at ({}, {}) between radii, {} -> {}",
                lat,
                lon,
                previous,
                area
            );
            previous = area;
            radius += 250.0;
        }
        let last = resolve(lat, lon, POLAR_CIRCUMFERENCE_KM / 2.0).unwrap();
        assert_eq!(last, RectangleSet::full_globe());
    }
}

#[test]
fn test_pole_case_spans_all_longitudes() {
    let rects = resolve(89.9, 0.0, 100.0).unwrap();
    assert_eq!(rects.len(), 1);
    let rect = rects.first().unwrap();
    assert_eq!(rect.lat_max, 90.0);
    assert_eq!((rect.lon_min, rect.lon_max), (-180.0, 180.0));
}

#[test]
fn test_exact_pole() {
    let rects = resolve(90.0, 0.0, 1.0).unwrap();
    let rect = rects.first().unwrap();
    assert_eq!(rect.lat_max, 90.0);
    assert!(rect.lat_min < 90.0 && rect.lat_min > 89.9);
    assert_eq!((rect.lon_min, rect.lon_max), (-180.0, 180.0));
}

#[test]
fn test_antimeridian_split_with_forty_degree_span() {
    let radius = EQUATORIAL_CIRCUMFERENCE_KM * 40.0 / 360.0;
    let rects = resolve(0.0, 150.0, radius).unwrap();
    assert_eq!(rects.len(), 2);

    let first = rects.get(0).unwrap();
    let second = rects.get(1).unwrap();
    assert!((first.lon_min - 110.0).abs() < EPS);
    assert_eq!(first.lon_max, 180.0);
    assert_eq!(second.lon_min, -180.0);
    assert!((second.lon_max + 170.0).abs() < EPS);
}

#[test]
fn test_full_globe_at_half_polar_circumference() {
    let rects = resolve_rectangles(
        0.0,
        0.0,
        POLAR_CIRCUMFERENCE_KM / 2.0,
        POLAR_CIRCUMFERENCE_KM,
        EQUATORIAL_CIRCUMFERENCE_KM,
    )
    .unwrap();
    assert_eq!(rects, RectangleSet::full_globe());
}

#[test]
fn test_each_case_is_reachable() {
    let cases = [
        (Coverage::classify(0.0, 0.0, 200.0, 360.0, 360.0).unwrap(), "global_coverage"),
        (Coverage::classify(85.0, 0.0, 10.0, 360.0, 360.0).unwrap(), "pole_overflow"),
        (Coverage::classify(0.0, 0.0, 20.0, 360.0, 36.0).unwrap(), "global_longitude"),
        (Coverage::classify(0.0, 0.0, 10.0, 360.0, 360.0).unwrap(), "normal"),
        (Coverage::classify(0.0, 175.0, 10.0, 360.0, 360.0).unwrap(), "antimeridian_split"),
    ];
    for (coverage, name) in cases {
        assert_eq!(coverage.name(), name);
    }
}

#[test]
fn test_invalid_input_kinds() {
    for (lat, lon, radius) in [(0.0, 0.0, -0.5), (90.01, 0.0, 1.0), (0.0, -180.01, 1.0)] {
        assert!(matches!(
            resolve(lat, lon, radius),
            Err(SearchError::InvalidInput(_))
        ));
    }
}

#[test]
fn test_concurrent_callers_agree() {
    let expected = resolve(-33.9, 151.2, 1_200.0).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| resolve(-33.9, 151.2, 1_200.0).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
