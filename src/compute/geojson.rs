//! GeoJSON conversion for resolved rectangles.

use crate::error::{Result, SearchError};
use geojson::{Feature, FeatureCollection, Geometry, Value};
use radius_search_types::rect::{Rectangle, RectangleSet};
use serde_json::{Map, json};

/// Converts a rectangle to a GeoJSON Polygon geometry (lon/lat order, closed ring).
pub fn rectangle_to_geometry(rect: &Rectangle) -> Geometry {
    let ring: Vec<Vec<f64>> = rect.ring().iter().map(|&(x, y)| vec![x, y]).collect();
    Geometry::new(Value::Polygon(vec![ring]))
}

/// Converts a rectangle set to a GeoJSON FeatureCollection string.
///
/// Each rectangle becomes one Polygon feature with an `index` property giving
/// its position in the set.
///
/// # Examples
///
/// ```
/// use radius_search::compute::geojson::rectangles_to_geojson;
/// use radius_search::compute::resolver::resolve;
///
/// let rects = resolve(-17.75, 178.0, 1000.0)?;
/// let geojson = rectangles_to_geojson(&rects)?;
/// assert!(geojson.contains("FeatureCollection"));
/// # Ok::<(), radius_search::SearchError>(())
/// ```
pub fn rectangles_to_geojson(rects: &RectangleSet) -> Result<String> {
    let features = rects
        .iter()
        .enumerate()
        .map(|(index, rect)| {
            let mut properties = Map::new();
            properties.insert("index".to_string(), json!(index));
            Feature {
                bbox: None,
                geometry: Some(rectangle_to_geometry(rect)),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    serde_json::to_string(&collection).map_err(|e| {
        SearchError::Serialization(format!("Failed to serialize rectangles: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_geometry_is_closed_ring() {
        let geom = rectangle_to_geometry(&Rectangle::new(1.0, 2.0, 3.0, 4.0));
        let Value::Polygon(rings) = geom.value else {
            panic!("expected polygon");
        };
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 5);
        assert_eq!(rings[0][0], vec![3.0, 1.0]);
        assert_eq!(rings[0][0], rings[0][4]);
    }

    #[test]
    fn test_split_set_has_two_features() {
        let set = RectangleSet::split(
            Rectangle::new(-1.0, 1.0, 170.0, 180.0),
            Rectangle::new(-1.0, 1.0, -180.0, -170.0),
        );
        let json = rectangles_to_geojson(&set).unwrap();
        let parsed: geojson::GeoJson = json.parse().unwrap();
        let collection = FeatureCollection::try_from(parsed).unwrap();
        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.features[1].property("index"), Some(&json!(1)));
    }
}
