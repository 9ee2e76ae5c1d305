//! The region tree: the contract every node satisfies and the slot type a grid
//! stores its children in.
//!
//! A globe is a [`GridRegion`] whose slots hold either a [`LeafCell`] with items
//! or a nested [`GridRegion`]. Calls enter at the top and are routed down by
//! coordinate until they reach leaves.

mod grid;
mod leaf;

pub(crate) use grid::LonEdges;
pub use grid::GridRegion;
pub use leaf::LeafCell;

use crate::error::Result;
use crate::sphere::Sphere;
use globe_lookup_types::bounds::Bounds;
use globe_lookup_types::item::GeoItem;

/// Operations shared by every node of the index.
///
/// Items are owned by the tree once added; index references (`&T`, `Rc<T>`,
/// `Arc<T>`) when the caller needs to keep ownership.
pub trait Region<T: GeoItem> {
    /// Rectangle covered by this region.
    fn bounds(&self) -> &Bounds;

    /// The globe's sphere, used for every distance computation below this region.
    fn sphere(&self) -> &Sphere;

    /// Insert an item into the part of this region responsible for its coordinates.
    fn add(&mut self, item: T) -> Result<()>;

    /// Remove the first item that [`GeoItem::same_item`] matches with `item` from
    /// the cell its coordinates route to. Shared handles match by address.
    ///
    /// Does nothing when no such item is found there, including when the item's
    /// coordinates changed after it was added.
    fn remove(&mut self, item: &T)
    where
        T: PartialEq;

    /// Append every item in this subtree to `out`.
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a T>);

    /// Append every item within great-circle distance `range` (strictly less)
    /// of `(lat, lon)` to `out`.
    fn search_into<'a>(&'a self, lat: f64, lon: f64, range: f64, out: &mut Vec<&'a T>);

    /// Number of items in this subtree.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every item in this subtree, in no particular order.
    fn all_items(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_into(&mut out);
        out
    }

    /// Items within `range` of `(lat, lon)`, in no particular order.
    fn search(&self, lat: f64, lon: f64, range: f64) -> Vec<&T> {
        let mut out = Vec::new();
        self.search_into(lat, lon, range, &mut out);
        out
    }
}

/// One slot of a grid.
#[derive(Debug)]
pub enum Cell<T> {
    Leaf(LeafCell<T>),
    Grid(GridRegion<T>),
}

impl<T: GeoItem> Cell<T> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Cell::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&LeafCell<T>> {
        match self {
            Cell::Leaf(leaf) => Some(leaf),
            Cell::Grid(_) => None,
        }
    }

    pub fn as_grid(&self) -> Option<&GridRegion<T>> {
        match self {
            Cell::Leaf(_) => None,
            Cell::Grid(grid) => Some(grid),
        }
    }

    /// Search with an explicit longitude mode for a nested grid. Leaves ignore it.
    pub(crate) fn search_window<'a>(
        &'a self,
        lat: f64,
        lon: f64,
        range: f64,
        lon_edges: LonEdges,
        out: &mut Vec<&'a T>,
    ) {
        match self {
            Cell::Leaf(leaf) => leaf.search_into(lat, lon, range, out),
            Cell::Grid(grid) => grid.search_window(lat, lon, range, lon_edges, out),
        }
    }

    /// Dismantle the subtree, returning its items.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Cell::Leaf(leaf) => leaf.into_items(),
            Cell::Grid(grid) => grid.into_items(),
        }
    }
}

impl<T: GeoItem> Region<T> for Cell<T> {
    fn bounds(&self) -> &Bounds {
        match self {
            Cell::Leaf(leaf) => leaf.bounds(),
            Cell::Grid(grid) => grid.bounds(),
        }
    }

    fn sphere(&self) -> &Sphere {
        match self {
            Cell::Leaf(leaf) => leaf.sphere(),
            Cell::Grid(grid) => grid.sphere(),
        }
    }

    fn add(&mut self, item: T) -> Result<()> {
        match self {
            Cell::Leaf(leaf) => leaf.add(item),
            Cell::Grid(grid) => grid.add(item),
        }
    }

    fn remove(&mut self, item: &T)
    where
        T: PartialEq,
    {
        match self {
            Cell::Leaf(leaf) => leaf.remove(item),
            Cell::Grid(grid) => grid.remove(item),
        }
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a T>) {
        match self {
            Cell::Leaf(leaf) => leaf.collect_into(out),
            Cell::Grid(grid) => grid.collect_into(out),
        }
    }

    fn search_into<'a>(&'a self, lat: f64, lon: f64, range: f64, out: &mut Vec<&'a T>) {
        match self {
            Cell::Leaf(leaf) => leaf.search_into(lat, lon, range, out),
            Cell::Grid(grid) => grid.search_into(lat, lon, range, out),
        }
    }

    fn len(&self) -> usize {
        match self {
            Cell::Leaf(leaf) => leaf.len(),
            Cell::Grid(grid) => grid.len(),
        }
    }
}
