//! Reference-sphere constants and search configuration.
//!
//! The resolver works with any pair of circumferences as long as the query
//! radius uses the same unit. [`EarthModel::default`] is the standard Earth
//! sphere in kilometres.

use crate::compute::resolver::resolve_with_model;
use crate::compute::validation::validate_circumference;
use crate::error::{Result, SearchError};
use radius_search_types::rect::RectangleSet;
use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Meridian (pole-to-pole great circle) circumference in kilometres.
pub const POLAR_CIRCUMFERENCE_KM: f64 = 40_007.863;

/// Equatorial circumference in kilometres.
pub const EQUATORIAL_CIRCUMFERENCE_KM: f64 = 40_075.017;

/// Unit of query radii and circumferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Meters,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    /// How many of this unit make one kilometre.
    pub const fn per_kilometer(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 1.0,
            DistanceUnit::Meters => 1_000.0,
            DistanceUnit::Miles => 0.621_371_192,
            DistanceUnit::NauticalMiles => 0.539_956_803,
        }
    }
}

/// Circumferences of the reference sphere, in the unit of the query radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EarthModel {
    /// Circumference along any meridian
    pub polar_circumference: f64,
    /// Circumference along the equator
    pub equatorial_circumference: f64,
}

impl EarthModel {
    /// Create a model, checking that both circumferences are finite and positive.
    pub fn new(polar_circumference: f64, equatorial_circumference: f64) -> Result<Self> {
        let model = Self {
            polar_circumference,
            equatorial_circumference,
        };
        model.validate()?;
        Ok(model)
    }

    /// The standard Earth sphere expressed in `unit`.
    pub fn in_unit(unit: DistanceUnit) -> Self {
        let scale = unit.per_kilometer();
        Self {
            polar_circumference: POLAR_CIRCUMFERENCE_KM * scale,
            equatorial_circumference: EQUATORIAL_CIRCUMFERENCE_KM * scale,
        }
    }

    /// Radius of a sphere with the polar circumference. Haversine distances
    /// are measured on this sphere.
    pub fn mean_radius(&self) -> f64 {
        self.polar_circumference / std::f64::consts::TAU
    }

    pub fn validate(&self) -> Result<()> {
        validate_circumference("Polar", self.polar_circumference)?;
        validate_circumference("Equatorial", self.equatorial_circumference)
    }
}

impl Default for EarthModel {
    fn default() -> Self {
        Self::in_unit(DistanceUnit::Kilometers)
    }
}

/// Search configuration.
///
/// All fields are optional when deserializing.
///
/// # Examples
///
/// ```
/// use radius_search::config::{Config, DistanceUnit};
///
/// let json = r#"{ "distance_unit": "miles", "max_radius": 500.0 }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.distance_unit, DistanceUnit::Miles);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Unit of query radii
    #[serde(default)]
    pub distance_unit: DistanceUnit,

    /// Largest radius accepted by [`Config::resolve`]
    #[serde(default)]
    pub max_radius: Option<f64>,

    /// Explicit reference sphere; when absent the standard Earth in
    /// `distance_unit` is used
    #[serde(default)]
    pub earth: Option<EarthModel>,
}

impl Config {
    pub fn with_earth_model(mut self, model: EarthModel) -> Self {
        self.earth = Some(model);
        self
    }

    pub fn with_distance_unit(mut self, unit: DistanceUnit) -> Self {
        self.distance_unit = unit;
        self
    }

    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        assert!(
            max_radius.is_finite() && max_radius > 0.0,
            "Max radius must be finite and positive"
        );
        self.max_radius = Some(max_radius);
        self
    }

    /// The reference sphere queries are resolved against.
    pub fn earth_model(&self) -> EarthModel {
        self.earth
            .unwrap_or_else(|| EarthModel::in_unit(self.distance_unit))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(model) = &self.earth {
            model
                .validate()
                .map_err(|e| SearchError::InvalidConfig(e.to_string()))?;
        }

        if let Some(max_radius) = self.max_radius
            && (!max_radius.is_finite() || max_radius <= 0.0)
        {
            return Err(SearchError::InvalidConfig(format!(
                "Max radius must be finite and positive, got: {}",
                max_radius
            )));
        }

        Ok(())
    }

    /// Resolve a radius query with this configuration's sphere and radius cap.
    pub fn resolve(&self, lat: f64, lon: f64, radius: f64) -> Result<RectangleSet> {
        if let Some(max_radius) = self.max_radius
            && radius > max_radius
        {
            log::warn!("Rejecting radius {} above configured maximum {}", radius, max_radius);
            return Err(SearchError::InvalidInput(format!(
                "Radius {} exceeds maximum {}",
                radius, max_radius
            )));
        }
        resolve_with_model(lat, lon, radius, &self.earth_model())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a file. `.toml` files need the toml feature;
    /// anything else is read as JSON.
    ///
    /// Parse failures are `SearchError::Serialization`; values that parse
    /// but fail validation are `SearchError::InvalidConfig`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SearchError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::parse(path, &contents)?;
        config.validate()?;
        Ok(config)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self> {
        #[cfg(feature = "toml")]
        {
            if path.extension().is_some_and(|ext| ext == "toml") {
                return toml::from_str(contents)
                    .map_err(|e| SearchError::Serialization(e.to_string()));
            }
        }
        #[cfg(not(feature = "toml"))]
        let _ = path;

        serde_json::from_str(contents).map_err(SearchError::from)
    }
}
