use geo::Rect;
use serde::{Deserialize, Serialize};

/// A latitude/longitude rectangle in degrees.
///
/// Membership is half-open, `[min_lat, max_lat) × [min_lon, max_lon)`, so the
/// cells of a uniform grid tile their parent without overlap.
///
/// # Examples
///
/// ```
/// use globe_lookup_types::bounds::Bounds;
///
/// let cell = Bounds::GLOBAL.cell(5, 5, 10, 10);
/// assert_eq!(cell, Bounds::new(0.0, 18.0, 0.0, 36.0));
/// assert!(cell.contains(0.0, 0.0));
/// assert!(!cell.contains(18.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// The whole sphere, `[-90, 90] × [-180, 180]`.
    pub const GLOBAL: Bounds = Bounds {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lon: -180.0,
        max_lon: 180.0,
    };

    /// Create bounds from latitude and longitude ranges.
    pub const fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Half-open containment test.
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat < self.max_lat && lon >= self.min_lon && lon < self.max_lon
    }

    /// Closed containment test, used for the outer edge of the globe where
    /// latitude 90 and longitude 180 are legal coordinates.
    #[inline]
    pub fn contains_inclusive(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    /// Bounds of the cell at `(row, col)` when these bounds are divided into a
    /// uniform `lat_divisions × lon_divisions` grid. Rows run along latitude,
    /// columns along longitude.
    pub fn cell(&self, row: usize, col: usize, lat_divisions: usize, lon_divisions: usize) -> Self {
        let lat_step = self.lat_span() / lat_divisions as f64;
        let lon_step = self.lon_span() / lon_divisions as f64;

        Self {
            min_lat: self.min_lat + lat_step * row as f64,
            max_lat: self.min_lat + lat_step * (row + 1) as f64,
            min_lon: self.min_lon + lon_step * col as f64,
            max_lon: self.min_lon + lon_step * (col + 1) as f64,
        }
    }

    /// Whether `other` lies entirely inside these bounds.
    pub fn encloses(&self, other: &Bounds) -> bool {
        other.min_lat >= self.min_lat
            && other.max_lat <= self.max_lat
            && other.min_lon >= self.min_lon
            && other.max_lon <= self.max_lon
    }

    /// Convert into a `geo::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.min_lon, y: self.min_lat },
            geo::coord! { x: self.max_lon, y: self.max_lat },
        )
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::new(rect.min().y, rect.max().y, rect.min().x, rect.max().x)
    }
}
