//! Error types for the globe index.

use thiserror::Error;

/// Errors raised by globe construction, insertion and subdivision.
///
/// Removing an item that is not present is deliberately *not* an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GlobeError {
    /// No child exists at the requested grid address.
    #[error("sector not found at row {row}, column {col}")]
    SectorNotFound { row: usize, col: usize },

    /// Coordinates are not finite or fall outside the globe.
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// A grid was requested with zero cells along an axis.
    #[error("invalid grid divisions: {lat_divisions} x {lon_divisions}")]
    InvalidDivisions {
        lat_divisions: usize,
        lon_divisions: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GlobeError>;
