//! Distance and angle conversions on a sphere.
//!
//! Every region of a globe carries a copy of the globe's `Sphere`, so leaf cells
//! and nested grids reach the distance math without walking back up the tree.

use serde::{Deserialize, Serialize};

/// Which great-circle formula a sphere evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceFormula {
    /// Haversine with every angle converted to radians.
    #[default]
    Haversine,
    /// Haversine with the latitudes fed to `cos` in degrees while only the deltas
    /// are converted. Wrong for most inputs; kept for callers whose stored
    /// expectations were produced by that arithmetic.
    LegacyDegrees,
}

/// Radius and formula of the globe an index lives on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    radius: f64,
    formula: DistanceFormula,
}

impl Sphere {
    pub fn new(radius: f64, formula: DistanceFormula) -> Self {
        Self { radius, formula }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn formula(&self) -> DistanceFormula {
        self.formula
    }

    /// Great-circle distance between two points given in degrees, in the
    /// radius' unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globe_lookup::{DistanceFormula, Sphere};
    ///
    /// let earth = Sphere::new(6_371_000.0, DistanceFormula::Haversine);
    /// let d = earth.great_circle_distance(40.7128, -74.0060, 34.0522, -118.2437);
    /// assert!((d - 3_935_746.0).abs() < 1_000.0);
    /// ```
    pub fn great_circle_distance(&self, lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
        let delta_lat = (lat_b - lat_a).to_radians();
        let delta_lon = (lon_b - lon_a).to_radians();

        let a = match self.formula {
            DistanceFormula::Haversine => {
                let a = (delta_lat / 2.0).sin().powi(2)
                    + lat_a.to_radians().cos()
                        * lat_b.to_radians().cos()
                        * (delta_lon / 2.0).sin().powi(2);
                // Rounding can push antipodal points just past 1.
                a.clamp(0.0, 1.0)
            }
            DistanceFormula::LegacyDegrees => {
                (delta_lat / 2.0).sin().powi(2)
                    + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2)
            }
        };
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.radius * c
    }

    /// Express a distance as degrees of arc, `180 / (π·r) · d`.
    ///
    /// This is arc length along a great circle, used as a planar radius against
    /// lat/lon bounds to seed candidate windows.
    #[inline]
    pub fn angular_radius(&self, distance: f64) -> f64 {
        (distance / self.radius).to_degrees()
    }
}
