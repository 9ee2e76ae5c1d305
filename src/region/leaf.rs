use super::Region;
use crate::error::Result;
use crate::sphere::Sphere;
use globe_lookup_types::bounds::Bounds;
use globe_lookup_types::item::GeoItem;
use smallvec::SmallVec;

/// Terminal region holding items in a flat, unordered list.
#[derive(Debug)]
pub struct LeafCell<T> {
    bounds: Bounds,
    sphere: Sphere,
    items: SmallVec<[T; 4]>,
}

impl<T: GeoItem> LeafCell<T> {
    pub fn new(bounds: Bounds, sphere: Sphere) -> Self {
        Self {
            bounds,
            sphere,
            items: SmallVec::new(),
        }
    }

    /// Items stored in this cell.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items.into_vec()
    }
}

impl<T: GeoItem> Region<T> for LeafCell<T> {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.items.push(item);
        Ok(())
    }

    fn remove(&mut self, item: &T)
    where
        T: PartialEq,
    {
        match self.items.iter().position(|stored| stored.same_item(item)) {
            Some(index) => {
                self.items.swap_remove(index);
            }
            None => log::trace!(
                "Remove missed: no matching item at ({}, {}) in cell {:?}",
                item.lat(),
                item.lon(),
                self.bounds
            ),
        }
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a T>) {
        out.extend(self.items.iter());
    }

    fn search_into<'a>(&'a self, lat: f64, lon: f64, range: f64, out: &mut Vec<&'a T>) {
        for item in &self.items {
            if self
                .sphere
                .great_circle_distance(lat, lon, item.lat(), item.lon())
                < range
            {
                out.push(item);
            }
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
