//! Globe builder for step-by-step configuration
//!
//! This module provides a builder pattern for creating globes from individual
//! settings or a complete `GlobeConfig`.

use crate::config::{CoordinatePolicy, GlobeConfig};
use crate::error::Result;
use crate::globe::Globe;
use crate::sphere::DistanceFormula;
use globe_lookup_types::item::GeoItem;

/// Builder for globe configuration.
///
/// ```rust
/// use globe_lookup::{CoordinatePolicy, GeoPoint, Globe, GlobeBuilder};
///
/// let globe: Globe<GeoPoint> = GlobeBuilder::new()
///     .radius(6_371.0)
///     .divisions(18, 36)
///     .coordinate_policy(CoordinatePolicy::Clamp)
///     .build()?;
///
/// assert_eq!(globe.root().lon_divisions(), 36);
/// # Ok::<(), globe_lookup::GlobeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GlobeBuilder {
    config: GlobeConfig,
}

impl GlobeBuilder {
    /// Create a builder starting from the default configuration.
    pub fn new() -> Self {
        Self {
            config: GlobeConfig::default(),
        }
    }

    /// Replace every setting with `config`.
    pub fn config(mut self, config: GlobeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.config = self.config.with_radius(radius);
        self
    }

    /// Top-level grid fan-out.
    pub fn divisions(mut self, lat_divisions: usize, lon_divisions: usize) -> Self {
        self.config = self.config.with_divisions(lat_divisions, lon_divisions);
        self
    }

    pub fn distance_formula(mut self, formula: DistanceFormula) -> Self {
        self.config = self.config.with_distance_formula(formula);
        self
    }

    pub fn coordinate_policy(mut self, policy: CoordinatePolicy) -> Self {
        self.config = self.config.with_coordinate_policy(policy);
        self
    }

    /// Validate the configuration and build the whole region tree.
    pub fn build<T: GeoItem>(self) -> Result<Globe<T>> {
        Globe::from_config(self.config)
    }
}

impl Default for GlobeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlobeError;
    use globe_lookup_types::item::GeoPoint;

    #[test]
    fn test_builder_defaults() {
        let globe: Globe<GeoPoint> = GlobeBuilder::new().build().unwrap();
        assert_eq!(globe.config(), &GlobeConfig::default());
    }

    #[test]
    fn test_builder_settings() {
        let globe: Globe<GeoPoint> = GlobeBuilder::new()
            .radius(1.0)
            .divisions(3, 4)
            .distance_formula(DistanceFormula::LegacyDegrees)
            .build()
            .unwrap();

        assert_eq!(globe.radius(), 1.0);
        assert_eq!(globe.root().lat_divisions(), 3);
        assert_eq!(globe.config().distance_formula, DistanceFormula::LegacyDegrees);
    }

    #[test]
    fn test_builder_validates() {
        let result = GlobeBuilder::new().divisions(0, 0).build::<GeoPoint>();
        assert!(matches!(result, Err(GlobeError::InvalidConfig(_))));
    }
}
