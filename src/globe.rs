//! The root of the index.
//!
//! A `Globe` is a grid over the whole sphere, `[-90, 90] × [-180, 180]`. It owns
//! the sphere's radius and is the only region whose longitude axis wraps around:
//! a search near the antimeridian continues into the columns on the other side.
//!
//! Search windows are planar: the longitude half-width equals the latitude
//! half-width in degrees. Near the poles a degree of longitude is far shorter than
//! a degree of latitude, so an item within range but many degrees of longitude
//! away from a high-latitude query may be missed.
//!
//! ```rust
//! use globe_lookup::prelude::*;
//!
//! let mut globe = Globe::with_divisions(EARTH_RADIUS_METERS, 10, 18)?;
//! globe.add(GeoPoint::new(40.7128, -74.0060))?;
//!
//! assert_eq!(globe.search(40.7306, -73.9352, 15_000.0).len(), 1);
//! assert!(globe.search(34.0522, -118.2437, 15_000.0).is_empty());
//! # Ok::<(), globe_lookup::GlobeError>(())
//! ```

use crate::config::{CoordinatePolicy, GlobeConfig};
use crate::error::{GlobeError, Result};
use crate::region::{Cell, GridRegion, LeafCell, LonEdges, Region};
use crate::sphere::Sphere;
use globe_lookup_types::bounds::Bounds;
use globe_lookup_types::item::GeoItem;
use serde::{Deserialize, Serialize};

/// Root region of the index, carrying the sphere the distances are measured on.
#[derive(Debug)]
pub struct Globe<T> {
    config: GlobeConfig,
    root: GridRegion<T>,
}

/// Shape and population of a globe's region tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobeStats {
    pub items: usize,
    pub leaf_cells: usize,
    /// Grid regions including the root.
    pub grid_regions: usize,
    /// Number of grid levels on the longest path; 1 for a globe never subdivided.
    pub max_depth: usize,
}

impl<T: GeoItem> Globe<T> {
    /// Earth-sized globe with the default 10 × 10 top-level grid.
    pub fn new() -> Self {
        Self::build(GlobeConfig::default())
    }

    /// Globe of the given radius with the default top-level grid.
    pub fn with_radius(radius: f64) -> Result<Self> {
        Self::from_config(GlobeConfig::default().with_radius(radius))
    }

    pub fn with_divisions(radius: f64, lat_divisions: usize, lon_divisions: usize) -> Result<Self> {
        Self::from_config(
            GlobeConfig::default()
                .with_radius(radius)
                .with_divisions(lat_divisions, lon_divisions),
        )
    }

    pub fn from_config(config: GlobeConfig) -> Result<Self> {
        config.validate().map_err(GlobeError::InvalidConfig)?;
        Ok(Self::build(config))
    }

    fn build(config: GlobeConfig) -> Self {
        let sphere = Sphere::new(config.radius, config.distance_formula);
        let root = GridRegion::with_leaves(
            Bounds::GLOBAL,
            sphere,
            config.lat_divisions,
            config.lon_divisions,
        );

        log::debug!(
            "Built globe: radius {}, {} x {} cells, {:?}",
            config.radius,
            config.lat_divisions,
            config.lon_divisions,
            config.distance_formula
        );

        Self { config, root }
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    /// The top-level grid.
    pub fn root(&self) -> &GridRegion<T> {
        &self.root
    }

    /// Great-circle distance between two points in degrees, in the radius' unit.
    pub fn great_circle_distance(&self, lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
        self.root
            .sphere()
            .great_circle_distance(lat_a, lon_a, lat_b, lon_b)
    }

    /// A distance in the radius' unit expressed as degrees of arc.
    pub fn angular_radius(&self, distance: f64) -> f64 {
        self.root.sphere().angular_radius(distance)
    }

    /// Top-level child responsible for `(lat, lon)`.
    pub fn sub_region(&self, lat: f64, lon: f64) -> &Cell<T> {
        self.root.sub_region(lat, lon)
    }

    /// Deepest leaf responsible for `(lat, lon)`.
    pub fn leaf_at(&self, lat: f64, lon: f64) -> &LeafCell<T> {
        self.root.leaf_at(lat, lon)
    }

    /// Replace the top-level child at `(row, col)` with a finer grid.
    ///
    /// See [`GridRegion::divide_sub_region`]: the returned items are no longer
    /// indexed until they are added again.
    pub fn divide_sub_region(
        &mut self,
        row: usize,
        col: usize,
        lat_divisions: usize,
        lon_divisions: usize,
    ) -> Result<Vec<T>> {
        self.root
            .divide_sub_region(row, col, lat_divisions, lon_divisions)
    }

    /// Subdivide the deepest leaf holding `(lat, lon)` and re-index its items.
    /// Returns how many items were moved into the new grid.
    pub fn subdivide_at(
        &mut self,
        lat: f64,
        lon: f64,
        lat_divisions: usize,
        lon_divisions: usize,
    ) -> Result<usize> {
        self.check_coordinate(lat, lon)?;
        self.root
            .subdivide_leaf_at(lat, lon, lat_divisions, lon_divisions)
    }

    pub fn stats(&self) -> GlobeStats {
        let mut stats = GlobeStats::default();
        collect_stats(&self.root, 1, &mut stats);
        stats
    }

    fn check_coordinate(&self, lat: f64, lon: f64) -> Result<()> {
        let valid = if !lat.is_finite() || !lon.is_finite() {
            false
        } else {
            self.config.coordinate_policy == CoordinatePolicy::Clamp
                || Bounds::GLOBAL.contains_inclusive(lat, lon)
        };

        if !valid {
            log::warn!("Rejecting coordinate outside the globe: ({}, {})", lat, lon);
            return Err(GlobeError::InvalidCoordinate { lat, lon });
        }

        Ok(())
    }
}

fn collect_stats<T: GeoItem>(grid: &GridRegion<T>, depth: usize, stats: &mut GlobeStats) {
    stats.grid_regions += 1;
    stats.max_depth = stats.max_depth.max(depth);

    for (_, cell) in grid.cells() {
        match cell {
            Cell::Leaf(leaf) => {
                stats.leaf_cells += 1;
                stats.items += leaf.len();
            }
            Cell::Grid(child) => collect_stats(child, depth + 1, stats),
        }
    }
}

impl<T: GeoItem> Default for Globe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: GeoItem> Region<T> for Globe<T> {
    fn bounds(&self) -> &Bounds {
        self.root.bounds()
    }

    fn sphere(&self) -> &Sphere {
        self.root.sphere()
    }

    /// Fails with `InvalidCoordinate` for non-finite coordinates, and for
    /// coordinates off the globe unless the policy is `Clamp`.
    fn add(&mut self, item: T) -> Result<()> {
        self.check_coordinate(item.lat(), item.lon())?;
        self.root.add(item)
    }

    fn remove(&mut self, item: &T)
    where
        T: PartialEq,
    {
        self.root.remove(item)
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a T>) {
        self.root.collect_into(out)
    }

    /// Longitude wraps here: the window continues across the antimeridian.
    /// Latitude is clamped at the poles.
    ///
    /// The longitude window is as wide in degrees as the latitude window and does
    /// not widen towards the poles. At high latitudes an item closer than `range`
    /// whose longitude differs by more than the angular radius of `range` is not
    /// returned.
    fn search_into<'a>(&'a self, lat: f64, lon: f64, range: f64, out: &mut Vec<&'a T>) {
        self.root
            .search_window(lat, lon, range, LonEdges::Wrap, out)
    }

    fn len(&self) -> usize {
        self.root.len()
    }
}
