use geo::{Point, Rect};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Reasons a deserialized rectangle or rectangle set is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RectangleError {
    #[error("rectangle bounds out of order or out of range: {0:?}")]
    InvalidBounds(Rectangle),

    #[error("rectangle set must hold 1 or 2 rectangles, got {0}")]
    InvalidLength(usize),

    #[error("split rectangles must share latitude bounds")]
    MismatchedLatitudes,
}

/// An axis-aligned latitude/longitude rectangle in degrees.
///
/// A rectangle never straddles the antimeridian: `lon_min <= lon_max` always
/// holds for rectangles produced by the resolver. A query that crosses ±180°
/// is represented by two rectangles in a [`RectangleSet`].
///
/// # Examples
///
/// ```
/// use radius_search_types::rect::Rectangle;
///
/// let rect = Rectangle::new(40.0, 41.0, -74.5, -73.5);
/// assert!(rect.contains(40.7128, -74.0060));
/// assert_eq!(rect.lat_span(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleBounds")]
pub struct Rectangle {
    /// Southern bound
    pub lat_min: f64,
    /// Northern bound
    pub lat_max: f64,
    /// Western bound
    pub lon_min: f64,
    /// Eastern bound
    pub lon_max: f64,
}

impl Rectangle {
    /// The rectangle covering every latitude and longitude.
    pub const FULL_GLOBE: Rectangle = Rectangle {
        lat_min: -90.0,
        lat_max: 90.0,
        lon_min: -180.0,
        lon_max: 180.0,
    };

    /// Create a rectangle from its four bounds.
    ///
    /// # Arguments
    ///
    /// * `lat_min` - Southern bound in degrees
    /// * `lat_max` - Northern bound in degrees
    /// * `lon_min` - Western bound in degrees
    /// * `lon_max` - Eastern bound in degrees
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// Create a rectangle spanning every longitude between two latitudes.
    pub fn latitude_band(lat_min: f64, lat_max: f64) -> Self {
        Self::new(lat_min, lat_max, -180.0, 180.0)
    }

    /// Whether the bounds are ordered and inside the legal degree ranges.
    pub fn is_valid(&self) -> bool {
        self.lat_min <= self.lat_max
            && self.lon_min <= self.lon_max
            && self.lat_min >= -90.0
            && self.lat_max <= 90.0
            && self.lon_min >= -180.0
            && self.lon_max <= 180.0
    }

    /// Whether this rectangle is the whole globe.
    pub fn is_full_globe(&self) -> bool {
        *self == Self::FULL_GLOBE
    }

    /// Whether every longitude is covered.
    pub fn spans_all_longitudes(&self) -> bool {
        self.lon_min <= -180.0 && self.lon_max >= 180.0
    }

    /// Latitude extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// Longitude extent in degrees.
    pub fn lon_span(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Area in square degrees.
    pub fn area(&self) -> f64 {
        self.lat_span() * self.lon_span()
    }

    /// Check if a coordinate lies within the closed bounds.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lon >= self.lon_min && lon <= self.lon_max
    }

    /// Center of the rectangle as a `geo::Point` (x = longitude, y = latitude).
    pub fn center(&self) -> Point {
        Point::new(
            (self.lon_min + self.lon_max) / 2.0,
            (self.lat_min + self.lat_max) / 2.0,
        )
    }

    /// Corners in ring order starting south-west, closed (first corner repeated).
    pub fn ring(&self) -> [(f64, f64); 5] {
        [
            (self.lon_min, self.lat_min),
            (self.lon_max, self.lat_min),
            (self.lon_max, self.lat_max),
            (self.lon_min, self.lat_max),
            (self.lon_min, self.lat_min),
        ]
    }
}

/// Unchecked wire form of [`Rectangle`].
#[derive(Deserialize)]
struct RectangleBounds {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl TryFrom<RectangleBounds> for Rectangle {
    type Error = RectangleError;

    fn try_from(bounds: RectangleBounds) -> Result<Self, Self::Error> {
        let rect = Rectangle::new(
            bounds.lat_min,
            bounds.lat_max,
            bounds.lon_min,
            bounds.lon_max,
        );
        if !rect.is_valid() {
            return Err(RectangleError::InvalidBounds(rect));
        }
        Ok(rect)
    }
}

impl From<Rectangle> for Rect {
    fn from(rect: Rectangle) -> Self {
        Rect::new(
            geo::coord! { x: rect.lon_min, y: rect.lat_min },
            geo::coord! { x: rect.lon_max, y: rect.lat_max },
        )
    }
}

/// The one or two rectangles that together cover a radius query.
///
/// Two rectangles only occur when the query crosses the antimeridian; both
/// then share the same latitude bounds and are longitude-disjoint. The set is
/// stored inline and never allocates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rectangle>", into = "Vec<Rectangle>")]
pub struct RectangleSet {
    rects: SmallVec<[Rectangle; 2]>,
}

impl RectangleSet {
    /// A set holding a single rectangle.
    pub fn single(rect: Rectangle) -> Self {
        let mut rects = SmallVec::new();
        rects.push(rect);
        Self { rects }
    }

    /// A set holding two rectangles split at the antimeridian, in the given order.
    pub fn split(first: Rectangle, second: Rectangle) -> Self {
        debug_assert_eq!(first.lat_min, second.lat_min);
        debug_assert_eq!(first.lat_max, second.lat_max);
        let mut rects = SmallVec::new();
        rects.push(first);
        rects.push(second);
        Self { rects }
    }

    /// The whole globe as a single rectangle.
    pub fn full_globe() -> Self {
        Self::single(Rectangle::FULL_GLOBE)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Whether the query was split at the antimeridian.
    pub fn is_split(&self) -> bool {
        self.rects.len() == 2
    }

    pub fn first(&self) -> Option<&Rectangle> {
        self.rects.first()
    }

    pub fn get(&self, index: usize) -> Option<&Rectangle> {
        self.rects.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.rects.iter()
    }

    pub fn as_slice(&self) -> &[Rectangle] {
        &self.rects
    }

    /// Check if any member rectangle contains the coordinate.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.rects.iter().any(|rect| rect.contains(lat, lon))
    }

    /// Total area of the members in square degrees.
    pub fn area(&self) -> f64 {
        self.rects.iter().map(Rectangle::area).sum()
    }
}

impl TryFrom<Vec<Rectangle>> for RectangleSet {
    type Error = RectangleError;

    fn try_from(rects: Vec<Rectangle>) -> Result<Self, Self::Error> {
        match rects.as_slice() {
            [single] => Ok(Self::single(*single)),
            [first, second] => {
                if first.lat_min != second.lat_min || first.lat_max != second.lat_max {
                    return Err(RectangleError::MismatchedLatitudes);
                }
                Ok(Self::split(*first, *second))
            }
            _ => Err(RectangleError::InvalidLength(rects.len())),
        }
    }
}

impl From<RectangleSet> for Vec<Rectangle> {
    fn from(set: RectangleSet) -> Self {
        set.rects.into_vec()
    }
}

impl<'a> IntoIterator for &'a RectangleSet {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
