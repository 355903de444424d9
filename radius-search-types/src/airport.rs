use geo::Point;
use serde::{Deserialize, Serialize};

/// An airport document as stored in the geo-indexed document store.
///
/// Store documents carry their identity in `_id`; `id` is accepted as well.
/// Fields other than the ones below are ignored.
///
/// # Examples
///
/// ```
/// use radius_search_types::airport::Airport;
///
/// let json = r#"{"_id": "a1", "name": "Heathrow", "lat": 51.47, "lon": -0.4543, "type": "airport"}"#;
/// let airport: Airport = serde_json::from_str(json).unwrap();
/// assert_eq!(airport.name, "Heathrow");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Airport {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Location as a `geo::Point` (x = longitude, y = latitude).
    pub fn point(&self) -> Point {
        Point::new(self.lon, self.lat)
    }
}

/// An airport together with its distance from a query center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAirport {
    pub airport: Airport,
    /// Distance from the query center, in the unit of the query radius
    pub distance: f64,
}
