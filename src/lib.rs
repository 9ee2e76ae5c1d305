//! Recursive grid index over the surface of a sphere.
//!
//! A [`Globe`] divides `[-90, 90] × [-180, 180]` into a fixed grid of cells.
//! Each cell is either a leaf holding items or, after subdivision, a finer
//! nested grid. Radius searches turn a metric distance into a window of
//! candidate cells and filter the leaves by exact great-circle distance.
//!
//! ```rust
//! use globe_lookup::prelude::*;
//!
//! let mut globe = Globe::new();
//! globe.add(GeoPoint::new(40.7128, -74.0060))?;
//! globe.add(GeoPoint::new(34.0522, -118.2437))?;
//!
//! let near_williamsburg = globe.search(40.7306, -73.9352, 15_000.0);
//! assert_eq!(near_williamsburg, vec![&GeoPoint::new(40.7128, -74.0060)]);
//!
//! // Split a crowded cell; its items are re-indexed into the new grid.
//! globe.subdivide_at(40.7128, -74.0060, 6, 6)?;
//! assert_eq!(globe.all_items().len(), 2);
//! # Ok::<(), globe_lookup::GlobeError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod globe;
pub mod region;
pub mod sphere;

#[cfg(feature = "sync")]
pub mod sync;

pub use builder::GlobeBuilder;
pub use config::{
    CoordinatePolicy, DEFAULT_LAT_DIVISIONS, DEFAULT_LON_DIVISIONS, EARTH_RADIUS_METERS,
    GlobeConfig,
};
pub use error::{GlobeError, Result};
pub use globe::{Globe, GlobeStats};
pub use region::{Cell, GridRegion, LeafCell, Region};
pub use sphere::{DistanceFormula, Sphere};

#[cfg(feature = "sync")]
pub use sync::SyncGlobe;

pub use geo::{Point, Rect};
pub use globe_lookup_types::bounds::Bounds;
pub use globe_lookup_types::item::{GeoItem, GeoPoint};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeoItem, GeoPoint, Globe, GlobeBuilder, GlobeConfig, Region};

    pub use crate::{CoordinatePolicy, DistanceFormula, EARTH_RADIUS_METERS};

    pub use crate::{GlobeError, Result};

    #[cfg(feature = "sync")]
    pub use crate::SyncGlobe;
}
