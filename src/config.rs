//! Construction-time settings for a globe.
//!
//! Settings are plain serde types so they can be loaded from JSON, or TOML with
//! the `toml` feature, alongside the rest of an application's configuration.
use crate::sphere::DistanceFormula;
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Mean radius of the Earth in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Default number of latitude bands at the top level (180° / 18°).
pub const DEFAULT_LAT_DIVISIONS: usize = 10;

/// Default number of longitude bands at the top level (360° / 36°).
pub const DEFAULT_LON_DIVISIONS: usize = 10;

const LARGE_FAN_OUT: usize = 1_000;

/// What `Globe::add` does with coordinates outside `[-90, 90] × [-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatePolicy {
    /// Fail with `GlobeError::InvalidCoordinate`.
    #[default]
    Reject,
    /// Route the item to the nearest edge cell.
    Clamp,
}

/// Globe configuration.
///
/// # Example
///
/// ```rust
/// use globe_lookup::{CoordinatePolicy, GlobeConfig};
///
/// let config = GlobeConfig::from_json(r#"{
///     "lat_divisions": 10,
///     "lon_divisions": 18,
///     "coordinate_policy": "clamp"
/// }"#).unwrap();
///
/// assert_eq!(config.radius, 6_371_000.0);
/// assert_eq!(config.lon_divisions, 18);
/// assert_eq!(config.coordinate_policy, CoordinatePolicy::Clamp);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobeConfig {
    /// Sphere radius. Distances passed to and returned from the globe use its unit.
    #[serde(default = "GlobeConfig::default_radius")]
    pub radius: f64,

    #[serde(default = "GlobeConfig::default_lat_divisions")]
    pub lat_divisions: usize,

    #[serde(default = "GlobeConfig::default_lon_divisions")]
    pub lon_divisions: usize,

    #[serde(default)]
    pub distance_formula: DistanceFormula,

    #[serde(default)]
    pub coordinate_policy: CoordinatePolicy,
}

impl GlobeConfig {
    const fn default_radius() -> f64 {
        EARTH_RADIUS_METERS
    }

    const fn default_lat_divisions() -> usize {
        DEFAULT_LAT_DIVISIONS
    }

    const fn default_lon_divisions() -> usize {
        DEFAULT_LON_DIVISIONS
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_divisions(mut self, lat_divisions: usize, lon_divisions: usize) -> Self {
        if lat_divisions > LARGE_FAN_OUT || lon_divisions > LARGE_FAN_OUT {
            log::warn!(
                "Grid of {} x {} cells is very large; every cell is allocated up front.",
                lat_divisions,
                lon_divisions
            );
        }

        self.lat_divisions = lat_divisions;
        self.lon_divisions = lon_divisions;
        self
    }

    pub fn with_distance_formula(mut self, formula: DistanceFormula) -> Self {
        self.distance_formula = formula;
        self
    }

    pub fn with_coordinate_policy(mut self, policy: CoordinatePolicy) -> Self {
        self.coordinate_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(format!(
                "Radius must be finite and greater than zero, got: {}",
                self.radius
            ));
        }

        if self.lat_divisions == 0 || self.lon_divisions == 0 {
            return Err(format!(
                "Divisions must be greater than zero, got: {} x {}",
                self.lat_divisions, self.lon_divisions
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GlobeConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: GlobeConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: Self::default_radius(),
            lat_divisions: Self::default_lat_divisions(),
            lon_divisions: Self::default_lon_divisions(),
            distance_formula: DistanceFormula::default(),
            coordinate_policy: CoordinatePolicy::default(),
        }
    }
}
