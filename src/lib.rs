//! Resolve circular radius queries into range filters a document store can run.
//!
//! Stores that index latitude and longitude as plain numbers can only answer
//! `min <= lat <= max AND min <= lon <= max`. This crate turns
//! "everything within `r` of (lat, lon)" into one or two such rectangles,
//! handling the poles and the antimeridian, then post-filters the store's
//! answers down to the true circle.
//!
//! ```rust
//! use radius_search::{Config, SearchPlan, resolve};
//!
//! // Rectangles for a 200 km search around Heathrow.
//! let rects = resolve(51.47, -0.4543, 200.0)?;
//! assert_eq!(rects.len(), 1);
//!
//! // Range selectors for a search that crosses the antimeridian.
//! let plan = SearchPlan::new(-17.75, 178.0, 1000.0, &Config::default())?;
//! assert_eq!(plan.selector_json().len(), 2);
//! # Ok::<(), radius_search::SearchError>(())
//! ```

pub mod compute;
pub mod config;
pub mod error;
pub mod query;
pub mod spatial;

pub use compute::resolver::{Coverage, resolve, resolve_rectangles, resolve_with_model};
pub use config::{Config, DistanceUnit, EarthModel};
pub use error::{Result, SearchError};
pub use query::{RangeSelector, SearchPlan, SelectorFields};
pub use spatial::{distance_km, filter_and_sort, haversine_distance};

pub use radius_search_types::airport::{Airport, RankedAirport};
pub use radius_search_types::rect::{Rectangle, RectangleSet};

#[cfg(feature = "geojson")]
pub use compute::geojson::rectangles_to_geojson;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        Airport, Config, EarthModel, RankedAirport, Rectangle, RectangleSet, Result,
        SearchError, SearchPlan,
    };

    pub use crate::{filter_and_sort, resolve, resolve_rectangles};
}
