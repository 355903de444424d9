//! # radius-search-types
//!
//! Value types shared by the `radius-search` crate:
//!
//! - **Rectangle types**: `Rectangle`, `RectangleSet`, `RectangleError`
//! - **Document types**: `Airport`, `RankedAirport`
//!
//! All types are serializable with Serde and convert into the `geo` crate's
//! primitives where that makes sense.
//!
//! ## Examples
//!
//! ```rust
//! use radius_search_types::rect::{Rectangle, RectangleSet};
//!
//! let east = Rectangle::new(-1.0, 1.0, 110.0, 180.0);
//! let west = Rectangle::new(-1.0, 1.0, -180.0, -170.0);
//! let set = RectangleSet::split(east, west);
//!
//! assert!(set.is_split());
//! assert!(set.contains(0.0, 179.5));
//! assert!(set.contains(0.0, -175.0));
//! ```

pub mod airport;
pub mod rect;
