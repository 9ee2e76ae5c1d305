use super::{Cell, LeafCell, Region};
use crate::error::{GlobeError, Result};
use crate::sphere::Sphere;
use globe_lookup_types::bounds::Bounds;
use globe_lookup_types::item::GeoItem;
use std::ops::Range;

/// How a candidate window treats longitude indices past the grid's edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LonEdges {
    /// Drop columns outside `[0, lon_divisions)`.
    Clamp,
    /// Fold them back modulo `lon_divisions`; only valid when the grid spans 360°.
    Wrap,
    /// Visit every column. Used below a wrapped column the window reaches from
    /// both sides, where no single longitude frame covers it.
    Full,
}

/// What a wrapped search does with one column.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ColumnVisit {
    Skip,
    /// Search it with the query longitude moved into the column's frame.
    At(f64),
    /// Search all of it.
    Full,
}

/// Non-terminal region owning a `lat_divisions × lon_divisions` array of children.
///
/// Children are stored row-major: row is the latitude index (south to north),
/// column the longitude index (west to east). Each child covers an equal
/// sub-rectangle of this region, so every point inside the region routes to
/// exactly one child.
#[derive(Debug)]
pub struct GridRegion<T> {
    bounds: Bounds,
    sphere: Sphere,
    lat_divisions: usize,
    lon_divisions: usize,
    cells: Vec<Cell<T>>,
}

impl<T: GeoItem> GridRegion<T> {
    /// Build a grid over `bounds` whose children all start out as empty leaves.
    pub fn new(
        bounds: Bounds,
        sphere: Sphere,
        lat_divisions: usize,
        lon_divisions: usize,
    ) -> Result<Self> {
        if lat_divisions == 0 || lon_divisions == 0 {
            return Err(GlobeError::InvalidDivisions {
                lat_divisions,
                lon_divisions,
            });
        }

        Ok(Self::with_leaves(bounds, sphere, lat_divisions, lon_divisions))
    }

    /// Caller guarantees both division counts are non-zero.
    pub(crate) fn with_leaves(
        bounds: Bounds,
        sphere: Sphere,
        lat_divisions: usize,
        lon_divisions: usize,
    ) -> Self {
        let mut cells = Vec::with_capacity(lat_divisions * lon_divisions);
        for row in 0..lat_divisions {
            for col in 0..lon_divisions {
                let cell_bounds = bounds.cell(row, col, lat_divisions, lon_divisions);
                cells.push(Cell::Leaf(LeafCell::new(cell_bounds, sphere)));
            }
        }

        Self {
            bounds,
            sphere,
            lat_divisions,
            lon_divisions,
            cells,
        }
    }

    pub fn lat_divisions(&self) -> usize {
        self.lat_divisions
    }

    pub fn lon_divisions(&self) -> usize {
        self.lon_divisions
    }

    #[inline]
    fn slot(&self, row: usize, col: usize) -> usize {
        row * self.lon_divisions + col
    }

    /// Child at `(row, col)`, if the address is inside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell<T>> {
        if row < self.lat_divisions && col < self.lon_divisions {
            Some(&self.cells[self.slot(row, col)])
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell<T>> {
        if row < self.lat_divisions && col < self.lon_divisions {
            let slot = self.slot(row, col);
            Some(&mut self.cells[slot])
        } else {
            None
        }
    }

    /// Children with their `(row, col)` addresses, in storage order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell<T>)> {
        let lon_divisions = self.lon_divisions;
        self.cells
            .iter()
            .enumerate()
            .map(move |(slot, cell)| ((slot / lon_divisions, slot % lon_divisions), cell))
    }

    #[inline]
    fn lat_position(&self, lat: f64) -> f64 {
        (lat - self.bounds.min_lat) / self.bounds.lat_span() * self.lat_divisions as f64
    }

    #[inline]
    fn lon_position(&self, lon: f64) -> f64 {
        (lon - self.bounds.min_lon) / self.bounds.lon_span() * self.lon_divisions as f64
    }

    /// `(row, col)` of the child responsible for `(lat, lon)`.
    ///
    /// Indices are clamped into the grid, so the closed outer edge (latitude 90,
    /// longitude 180) and points outside the bounds land in the nearest edge cell.
    pub fn sub_region_index(&self, lat: f64, lon: f64) -> (usize, usize) {
        let row = (self.lat_position(lat).floor() as usize).min(self.lat_divisions - 1);
        let col = (self.lon_position(lon).floor() as usize).min(self.lon_divisions - 1);
        (row, col)
    }

    pub fn sub_region(&self, lat: f64, lon: f64) -> &Cell<T> {
        let (row, col) = self.sub_region_index(lat, lon);
        &self.cells[self.slot(row, col)]
    }

    pub fn sub_region_mut(&mut self, lat: f64, lon: f64) -> &mut Cell<T> {
        let (row, col) = self.sub_region_index(lat, lon);
        let slot = self.slot(row, col);
        &mut self.cells[slot]
    }

    /// Deepest leaf responsible for `(lat, lon)`.
    pub fn leaf_at(&self, lat: f64, lon: f64) -> &LeafCell<T> {
        match self.sub_region(lat, lon) {
            Cell::Leaf(leaf) => leaf,
            Cell::Grid(grid) => grid.leaf_at(lat, lon),
        }
    }

    /// Replace the child at `(row, col)` with an empty grid of
    /// `lat_divisions × lon_divisions` cells covering the same bounds.
    ///
    /// The replaced child's items are returned, not migrated: re-insert them into
    /// this region (or anywhere else) or they leave the index. Nothing changes if
    /// the address or the division counts are invalid.
    pub fn divide_sub_region(
        &mut self,
        row: usize,
        col: usize,
        lat_divisions: usize,
        lon_divisions: usize,
    ) -> Result<Vec<T>> {
        if row >= self.lat_divisions || col >= self.lon_divisions {
            return Err(GlobeError::SectorNotFound { row, col });
        }

        let bounds = self
            .bounds
            .cell(row, col, self.lat_divisions, self.lon_divisions);
        let grid = GridRegion::new(bounds, self.sphere, lat_divisions, lon_divisions)?;

        let slot = self.slot(row, col);
        let displaced = std::mem::replace(&mut self.cells[slot], Cell::Grid(grid));

        log::debug!(
            "Divided cell ({}, {}) {:?} into {} x {} cells",
            row,
            col,
            bounds,
            lat_divisions,
            lon_divisions
        );

        Ok(displaced.into_items())
    }

    /// Subdivide the deepest leaf responsible for `(lat, lon)` and re-insert its
    /// items into the new grid. Returns how many items were moved.
    pub fn subdivide_leaf_at(
        &mut self,
        lat: f64,
        lon: f64,
        lat_divisions: usize,
        lon_divisions: usize,
    ) -> Result<usize> {
        let (row, col) = self.sub_region_index(lat, lon);
        let slot = self.slot(row, col);

        if let Cell::Grid(grid) = &mut self.cells[slot] {
            return grid.subdivide_leaf_at(lat, lon, lat_divisions, lon_divisions);
        }

        let items = self.divide_sub_region(row, col, lat_divisions, lon_divisions)?;
        let moved = items.len();
        let target = &mut self.cells[slot];
        for item in items {
            target.add(item)?;
        }

        Ok(moved)
    }

    pub fn into_items(self) -> Vec<T> {
        self.cells.into_iter().flat_map(Cell::into_items).collect()
    }

    /// Search every child whose bounds may hold an item within `range`.
    ///
    /// The metric range becomes an angular radius, which is turned into a window
    /// of child indices per axis: `floor` of the low edge to one past `floor` of
    /// the high edge. The window over-covers; leaves filter by exact distance.
    pub(crate) fn search_window<'a>(
        &'a self,
        lat: f64,
        lon: f64,
        range: f64,
        lon_edges: LonEdges,
        out: &mut Vec<&'a T>,
    ) {
        if range.is_nan() || range <= 0.0 {
            return;
        }

        let angle = self.sphere.angular_radius(range);
        let rows = clamped_window(
            self.lat_position(lat - angle),
            self.lat_position(lat + angle),
            self.lat_divisions,
        );
        let low = self.lon_position(lon - angle);
        let high = self.lon_position(lon + angle);

        match lon_edges {
            LonEdges::Clamp => {
                let cols = clamped_window(low, high, self.lon_divisions);
                for row in rows {
                    for col in cols.clone() {
                        self.cells[self.slot(row, col)].search_into(lat, lon, range, out);
                    }
                }
            }
            LonEdges::Wrap => {
                let visits = self.wrapped_columns(lon, low, high);
                for row in rows {
                    for (col, visit) in visits.iter().enumerate() {
                        let cell = &self.cells[self.slot(row, col)];
                        match *visit {
                            ColumnVisit::Skip => {}
                            ColumnVisit::At(shifted_lon) => {
                                cell.search_window(lat, shifted_lon, range, LonEdges::Clamp, out)
                            }
                            ColumnVisit::Full => {
                                cell.search_window(lat, lon, range, LonEdges::Full, out)
                            }
                        }
                    }
                }
            }
            LonEdges::Full => {
                for row in rows {
                    for col in 0..self.lon_divisions {
                        self.cells[self.slot(row, col)].search_window(
                            lat,
                            lon,
                            range,
                            LonEdges::Full,
                            out,
                        );
                    }
                }
            }
        }
    }

    /// Plan a wrapped longitude window `[floor(low), floor(high)]` column by column.
    ///
    /// Window index `x` is column `x mod n` seen `x div n` turns away. A column the
    /// window reaches once is searched in that turn's frame; one it reaches twice
    /// (from both ends of a window wider than a turn) is searched in full.
    fn wrapped_columns(&self, lon: f64, low: f64, high: f64) -> Vec<ColumnVisit> {
        let n = self.lon_divisions as i128;
        // Float to int casts saturate, so huge windows stay representable.
        let first = low.floor() as i128;
        let last = high.floor() as i128;

        if last < first {
            return vec![ColumnVisit::Skip; self.lon_divisions];
        }
        if last.saturating_sub(first) >= 2 * n - 1 {
            return vec![ColumnVisit::Full; self.lon_divisions];
        }

        let span = self.bounds.lon_span();
        let mut visits = vec![ColumnVisit::Skip; self.lon_divisions];
        for x in first..=last {
            let col = x.rem_euclid(n) as usize;
            visits[col] = match visits[col] {
                ColumnVisit::Skip => ColumnVisit::At(lon - x.div_euclid(n) as f64 * span),
                _ => ColumnVisit::Full,
            };
        }
        visits
    }
}

/// Index range `[floor(low), floor(high) + 1)` clamped to `[0, divisions)`.
fn clamped_window(low: f64, high: f64, divisions: usize) -> Range<usize> {
    if high < 0.0 {
        return 0..0;
    }
    // Float to int casts saturate, so a negative low edge becomes 0.
    let start = low.floor() as usize;
    let end = (high.floor() as usize).saturating_add(1).min(divisions);
    start..end
}

impl<T: GeoItem> Region<T> for GridRegion<T> {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    fn add(&mut self, item: T) -> Result<()> {
        let (lat, lon) = (item.lat(), item.lon());
        self.sub_region_mut(lat, lon).add(item)
    }

    fn remove(&mut self, item: &T)
    where
        T: PartialEq,
    {
        self.sub_region_mut(item.lat(), item.lon()).remove(item)
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a T>) {
        for cell in &self.cells {
            cell.collect_into(out);
        }
    }

    fn search_into<'a>(&'a self, lat: f64, lon: f64, range: f64, out: &mut Vec<&'a T>) {
        self.search_window(lat, lon, range, LonEdges::Clamp, out);
    }

    fn len(&self) -> usize {
        self.cells.iter().map(|cell| cell.len()).sum()
    }
}
