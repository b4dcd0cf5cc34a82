//! Error types for ipmap-curve.

use thiserror::Error;

use crate::GridCoord;

/// Result type for ipmap-curve operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when addressing a grid outside its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The distance lies past the end of the curve.
    #[error("distance {distance} out of range: curve has {capacity} cells")]
    DistanceOutOfRange { distance: u64, capacity: u64 },

    /// One or both axes lie outside the grid.
    #[error("coordinate {coord} out of range for side {side}")]
    CoordinateOutOfRange { coord: GridCoord, side: u32 },
}
