//! Construction of document-store range selectors for a radius search.
//!
//! The store filters on two geo-indexed numeric fields. Each rectangle of a
//! resolved query becomes one Mango-style selector:
//!
//! ```json
//! { "lat": { "$gte": 40.1, "$lte": 41.9 }, "lon": { "$gte": -75.2, "$lte": -72.8 } }
//! ```
//!
//! Running the selectors is up to the caller. Their result batches come back
//! through [`SearchPlan::merge_results`] and [`SearchPlan::finish`].

use crate::config::Config;
use crate::error::Result;
use crate::spatial::filter_and_sort;
use radius_search_types::airport::{Airport, RankedAirport};
use radius_search_types::rect::{Rectangle, RectangleSet};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Names of the latitude and longitude fields in store documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorFields {
    pub lat: String,
    pub lon: String,
}

impl SelectorFields {
    pub fn new(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lon: lon.into(),
        }
    }
}

impl Default for SelectorFields {
    fn default() -> Self {
        Self::new("lat", "lon")
    }
}

/// Inclusive `(min, max)` range filters on both coordinates, built from one
/// rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelector {
    pub lat: (f64, f64),
    pub lon: (f64, f64),
}

impl RangeSelector {
    /// Whether a document at this coordinate passes the filter.
    pub fn matches(&self, lat: f64, lon: f64) -> bool {
        self.bounds().contains(lat, lon)
    }

    /// The rectangle this selector filters on.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.lat.0, self.lat.1, self.lon.0, self.lon.1)
    }

    /// Render the selector as a Mango query object.
    pub fn to_json(&self, fields: &SelectorFields) -> Value {
        let mut selector = serde_json::Map::new();
        selector.insert(
            fields.lat.clone(),
            json!({ "$gte": self.lat.0, "$lte": self.lat.1 }),
        );
        selector.insert(
            fields.lon.clone(),
            json!({ "$gte": self.lon.0, "$lte": self.lon.1 }),
        );
        Value::Object(selector)
    }
}

impl From<&Rectangle> for RangeSelector {
    fn from(rect: &Rectangle) -> Self {
        Self {
            lat: (rect.lat_min, rect.lat_max),
            lon: (rect.lon_min, rect.lon_max),
        }
    }
}

/// The selectors of one radius search, one per resolved rectangle.
///
/// # Examples
///
/// ```rust
/// use radius_search::{Config, SearchPlan};
///
/// // Around Auckland the circle crosses the antimeridian.
/// let plan = SearchPlan::new(-37.0, 179.0, 300.0, &Config::default())?;
/// assert_eq!(plan.query_count(), 2);
/// # Ok::<(), radius_search::SearchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchPlan {
    lat: f64,
    lon: f64,
    radius: f64,
    config: Config,
    rectangles: RectangleSet,
    fields: SelectorFields,
}

impl SearchPlan {
    /// Resolve the query and prepare its selectors.
    pub fn new(lat: f64, lon: f64, radius: f64, config: &Config) -> Result<Self> {
        let rectangles = config.resolve(lat, lon, radius)?;
        log::debug!(
            "Planned {} range selector(s) for ({}, {}, r={})",
            rectangles.len(),
            lat,
            lon,
            radius
        );
        Ok(Self {
            lat,
            lon,
            radius,
            config: config.clone(),
            rectangles,
            fields: SelectorFields::default(),
        })
    }

    /// Use different document field names in rendered selectors.
    pub fn with_fields(mut self, fields: SelectorFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn rectangles(&self) -> &RectangleSet {
        &self.rectangles
    }

    pub fn selectors(&self) -> Vec<RangeSelector> {
        self.rectangles.iter().map(RangeSelector::from).collect()
    }

    /// Selectors rendered as Mango query objects, in query order.
    pub fn selector_json(&self) -> Vec<Value> {
        self.selectors()
            .iter()
            .map(|selector| selector.to_json(&self.fields))
            .collect()
    }

    /// Number of store queries the search needs: 1, or 2 when split.
    pub fn query_count(&self) -> usize {
        self.rectangles.len()
    }

    /// Whether a document at this coordinate would be returned by any selector.
    pub fn matches(&self, lat: f64, lon: f64) -> bool {
        self.rectangles.contains(lat, lon)
    }

    /// Union per-selector result batches, keeping the first copy of each id.
    pub fn merge_results<I>(batches: I) -> Vec<Airport>
    where
        I: IntoIterator<Item = Vec<Airport>>,
    {
        let mut seen = FxHashSet::default();
        batches
            .into_iter()
            .flatten()
            .filter(|airport| seen.insert(airport.id.clone()))
            .collect()
    }

    /// Merge result batches, then drop candidates beyond the radius and sort
    /// by distance.
    pub fn finish<I>(&self, batches: I) -> Result<Vec<RankedAirport>>
    where
        I: IntoIterator<Item = Vec<Airport>>,
    {
        let merged = Self::merge_results(batches);
        filter_and_sort(
            merged,
            self.radius,
            self.lat,
            self.lon,
            &self.config.earth_model(),
        )
    }
}
