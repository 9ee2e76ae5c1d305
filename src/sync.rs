//! Thread-safe wrapper for shared globe access.
//!
//! `Globe` itself is single-owner. `SyncGlobe` puts the whole region tree behind
//! one `parking_lot::RwLock`: searches share the lock, while adds, removes and
//! subdivisions take it exclusively, so a subdivision never races a search.
//!
//! Enable the `sync` feature to use this module:
//!
//! ```toml
//! [dependencies]
//! globe-lookup = { version = "0.1", features = ["sync"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use globe_lookup::{GeoPoint, SyncGlobe};
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let globe = SyncGlobe::<GeoPoint>::new(Default::default());
//!
//! let writer = globe.clone();
//! let handle = thread::spawn(move || {
//!     writer.add(GeoPoint::new(48.8566, 2.3522)).unwrap();
//! });
//! handle.join().unwrap();
//!
//! assert_eq!(globe.search(48.8566, 2.3522, 1.0).len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::config::GlobeConfig;
use crate::error::Result;
use crate::globe::{Globe, GlobeStats};
use crate::region::Region;
use globe_lookup_types::item::GeoItem;
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe wrapper around `Globe` using `Arc<RwLock<Globe>>`.
///
/// Results are cloned out of the lock; use [`SyncGlobe::read`] to work with
/// borrowed items instead.
pub struct SyncGlobe<T> {
    inner: Arc<RwLock<Globe<T>>>,
}

impl<T> Clone for SyncGlobe<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: GeoItem> SyncGlobe<T> {
    pub fn new(globe: Globe<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(globe)),
        }
    }

    pub fn from_config(config: GlobeConfig) -> Result<Self> {
        Ok(Self::new(Globe::from_config(config)?))
    }

    pub fn add(&self, item: T) -> Result<()> {
        self.inner.write().add(item)
    }

    pub fn remove(&self, item: &T)
    where
        T: PartialEq,
    {
        self.inner.write().remove(item)
    }

    pub fn search(&self, lat: f64, lon: f64, range: f64) -> Vec<T>
    where
        T: Clone,
    {
        self.inner
            .read()
            .search(lat, lon, range)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn all_items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().all_items().into_iter().cloned().collect()
    }

    pub fn subdivide_at(
        &self,
        lat: f64,
        lon: f64,
        lat_divisions: usize,
        lon_divisions: usize,
    ) -> Result<usize> {
        self.inner
            .write()
            .subdivide_at(lat, lon, lat_divisions, lon_divisions)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> GlobeStats {
        self.inner.read().stats()
    }

    /// Run `f` under the shared lock.
    pub fn read<R>(&self, f: impl FnOnce(&Globe<T>) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` under the exclusive lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut Globe<T>) -> R) -> R {
        f(&mut *self.inner.write())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_lookup_types::item::GeoPoint;
    use std::thread;

    #[test]
    fn test_concurrent_adds_and_searches() {
        let globe = SyncGlobe::<GeoPoint>::new(Globe::new());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let globe = globe.clone();
                thread::spawn(move || {
                    for i in 0..250 {
                        let lat = -80.0 + (i as f64) * 0.6;
                        let lon = -170.0 + (t as f64) * 80.0 + (i as f64) * 0.1;
                        globe.add(GeoPoint::new(lat, lon)).unwrap();
                        let _ = globe.search(lat, lon, 10_000.0);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(globe.len(), 1000);
        assert_eq!(globe.all_items().len(), 1000);
    }

    #[test]
    fn test_subdivide_under_lock() {
        let globe = SyncGlobe::<GeoPoint>::new(Globe::new());
        let p = GeoPoint::new(12.0, 34.0);
        globe.add(p).unwrap();

        assert_eq!(globe.subdivide_at(12.0, 34.0, 4, 4).unwrap(), 1);
        assert_eq!(globe.search(12.0, 34.0, 1.0), vec![p]);
        assert_eq!(globe.stats().grid_regions, 2);

        globe.remove(&p);
        assert!(globe.is_empty());
        assert_eq!(globe.read(|g| g.leaf_at(12.0, 34.0).len()), 0);
        globe.write(|g| g.add(p)).unwrap();
        assert_eq!(globe.len(), 1);
    }
}
