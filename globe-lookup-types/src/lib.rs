//! # globe-lookup-types
//!
//! Plain data types shared by the `globe-lookup` spatial index:
//!
//! - **Item contract**: `GeoItem`, implemented by anything with a latitude and longitude
//! - **Points**: `GeoPoint`, a minimal serializable item
//! - **Bounds**: `Bounds`, the lat/lon rectangle every region covers
//!
//! ## Examples
//!
//! ```rust
//! use globe_lookup_types::bounds::Bounds;
//! use globe_lookup_types::item::{GeoItem, GeoPoint};
//!
//! let nyc = GeoPoint::new(40.7128, -74.0060);
//! assert!(Bounds::GLOBAL.contains(nyc.lat(), nyc.lon()));
//! ```

pub mod bounds;
pub mod item;
