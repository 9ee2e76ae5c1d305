//! The capability an indexed item must expose.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

/// Anything that can be placed on the globe.
///
/// Coordinates are in degrees, latitude in `[-90, 90]` and longitude in
/// `[-180, 180)`. The index reads them at add, remove and search time and never
/// caches them, so an item whose coordinates change after insertion must be
/// removed *before* the change and re-added after it.
pub trait GeoItem {
    /// Latitude in degrees.
    fn lat(&self) -> f64;

    /// Longitude in degrees.
    fn lon(&self) -> f64;

    /// Whether `other` is this very item, for removal.
    ///
    /// Owned values compare with `PartialEq`. Shared handles (`&T`, `Rc<T>`,
    /// `Arc<T>`) compare by address, so two handles to equal but distinct values
    /// are different items.
    #[inline]
    fn same_item(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        self == other
    }
}

impl<T: GeoItem + ?Sized> GeoItem for &T {
    #[inline]
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    #[inline]
    fn lon(&self) -> f64 {
        (**self).lon()
    }

    #[inline]
    fn same_item(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        std::ptr::eq(*self, *other)
    }
}

impl<T: GeoItem + ?Sized> GeoItem for Box<T> {
    #[inline]
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    #[inline]
    fn lon(&self) -> f64 {
        (**self).lon()
    }
}

impl<T: GeoItem + ?Sized> GeoItem for Rc<T> {
    #[inline]
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    #[inline]
    fn lon(&self) -> f64 {
        (**self).lon()
    }

    #[inline]
    fn same_item(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        Rc::ptr_eq(self, other)
    }
}

impl<T: GeoItem + ?Sized> GeoItem for Arc<T> {
    #[inline]
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    #[inline]
    fn lon(&self) -> f64 {
        (**self).lon()
    }

    #[inline]
    fn same_item(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        Arc::ptr_eq(self, other)
    }
}

/// `geo` points are `(x, y)`, i.e. `(lon, lat)`.
impl GeoItem for geo::Point<f64> {
    #[inline]
    fn lat(&self) -> f64 {
        self.y()
    }

    #[inline]
    fn lon(&self) -> f64 {
        self.x()
    }
}

/// A bare latitude/longitude pair.
///
/// # Examples
///
/// ```
/// use globe_lookup_types::item::{GeoItem, GeoPoint};
///
/// let la = GeoPoint::new(34.0522, -118.2437);
/// assert_eq!(la.lat(), 34.0522);
/// assert_eq!(la.to_point().x(), -118.2437);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude, in that order.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert into a `geo::Point` (x = longitude, y = latitude).
    #[inline]
    pub fn to_point(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

impl GeoItem for GeoPoint {
    #[inline]
    fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    fn lon(&self) -> f64 {
        self.lon
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}
