//! Fixed-size grid storage addressable by curve distance or by coordinate.
//!
//! Values live in a flat buffer ordered by curve distance. Coordinate access
//! converts through [`xy2d`] first, so both addressing modes share one slot
//! per cell. The buffer is never resized after construction.

use crate::{capacity, d2xy, normalize, xy2d, Error, GridCoord, Result};

/// A square grid of `side × side` values laid out along a Hilbert curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HilbertContainer<T> {
    side: u32,
    cells: Vec<T>,
}

impl<T: Clone> HilbertContainer<T> {
    /// Create a container with every cell set to `empty`.
    ///
    /// The side is coerced with [`normalize`], so any request is accepted.
    ///
    /// # Panics
    ///
    /// Panics if `side²` cells cannot be allocated.
    pub fn new(side: i64, empty: T) -> Self {
        let side = normalize(side);
        let len = usize::try_from(capacity(side)).unwrap_or(usize::MAX);
        Self {
            side,
            cells: vec![empty; len],
        }
    }
}

impl<T: Clone + Default> HilbertContainer<T> {
    /// Create a container filled with `T::default()`.
    pub fn with_side(side: i64) -> Self {
        Self::new(side, T::default())
    }
}

impl<T> HilbertContainer<T> {
    /// Side length of the grid (always a power of two).
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Number of cells (`side²`).
    #[inline]
    pub fn capacity(&self) -> u64 {
        capacity(self.side)
    }

    /// All values in curve order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Curve distance of a coordinate, checked against the grid.
    pub fn distance_of(&self, coord: GridCoord) -> Result<u64> {
        if !coord.within(self.side) {
            return Err(Error::CoordinateOutOfRange {
                coord,
                side: self.side,
            });
        }
        Ok(xy2d(self.side, coord.x, coord.y))
    }

    /// Coordinate at a curve distance, checked against the grid.
    pub fn coord_of(&self, distance: u64) -> Result<GridCoord> {
        self.check_distance(distance)?;
        Ok(d2xy(self.side, distance).into())
    }

    /// Value at a curve distance.
    pub fn get_by_distance(&self, distance: u64) -> Result<&T> {
        let slot = self.check_distance(distance)?;
        Ok(&self.cells[slot])
    }

    /// Value at a coordinate.
    pub fn get_by_coord(&self, coord: GridCoord) -> Result<&T> {
        let distance = self.distance_of(coord)?;
        self.get_by_distance(distance)
    }

    /// Mutable value at a curve distance.
    pub fn get_mut_by_distance(&mut self, distance: u64) -> Result<&mut T> {
        let slot = self.check_distance(distance)?;
        Ok(&mut self.cells[slot])
    }

    /// Mutable value at a coordinate.
    pub fn get_mut_by_coord(&mut self, coord: GridCoord) -> Result<&mut T> {
        let distance = self.distance_of(coord)?;
        self.get_mut_by_distance(distance)
    }

    /// Replace the value at a curve distance.
    pub fn set_by_distance(&mut self, distance: u64, value: T) -> Result<()> {
        *self.get_mut_by_distance(distance)? = value;
        Ok(())
    }

    /// Replace the value at a coordinate.
    pub fn set_by_coord(&mut self, coord: GridCoord, value: T) -> Result<()> {
        *self.get_mut_by_coord(coord)? = value;
        Ok(())
    }

    /// Iterate `(coord, value)` pairs in curve order.
    ///
    /// Consecutive items are always edge-adjacent cells. The iterator borrows
    /// the container, so it can be restarted by calling `iter` again or by
    /// cloning it part way through.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            side: self.side,
            cells: self.cells.iter().enumerate(),
        }
    }

    fn check_distance(&self, distance: u64) -> Result<usize> {
        if distance >= self.capacity() {
            return Err(Error::DistanceOutOfRange {
                distance,
                capacity: self.capacity(),
            });
        }
        // Fits: the buffer holds `capacity` elements.
        Ok(distance as usize)
    }
}

impl<'a, T> IntoIterator for &'a HilbertContainer<T> {
    type Item = (GridCoord, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Curve-ordered iterator over a [`HilbertContainer`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    side: u32,
    cells: std::iter::Enumerate<std::slice::Iter<'a, T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            side: self.side,
            cells: self.cells.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (GridCoord, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (distance, value) = self.cells.next()?;
        Some((d2xy(self.side, distance as u64).into(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
