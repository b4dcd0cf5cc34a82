//! IPMap Curve
//!
//! Hilbert curve transforms and a square grid container indexed along the curve.
//!
//! # Mathematical Foundation
//!
//! A Hilbert curve of side `n` (a power of two) visits every cell of an
//! `n × n` grid exactly once. The position of a cell along the curve is its
//! *distance* `d ∈ [0, n²)`. The transforms [`xy2d`] and [`d2xy`] are exact
//! mutual inverses, so the curve is a bijection between distances and
//! coordinates.
//!
//! Consecutive distances always land on edge-adjacent cells. This locality is
//! what lets a 1-D key space (host addresses, byte offsets) read as contiguous
//! blobs once laid out in 2-D.
//!
//! # Containers
//!
//! [`HilbertContainer`] stores one value per cell and can be addressed either
//! by distance or by coordinate. Iteration always follows the curve.

mod container;
mod coord;
mod error;
mod hilbert;

pub use container::{HilbertContainer, Iter};
pub use coord::GridCoord;
pub use error::{Error, Result};
pub use hilbert::{capacity, d2xy, normalize, xy2d, HilbertWalk};

/// Largest side length a grid may have.
///
/// Requests above this saturate here so that every coordinate fits in a `u32`.
pub const MAX_SIDE: u32 = 1 << 31;

// Sides are always powers of two
const _: () = assert!(MAX_SIDE.is_power_of_two());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_side_is_a_fixed_point_of_normalize() {
        assert_eq!(normalize(MAX_SIDE as i64), MAX_SIDE);
        assert_eq!(normalize(i64::MAX), MAX_SIDE);
    }
}
