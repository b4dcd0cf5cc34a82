//! Hilbert curve transforms between curve distance and grid coordinates.
//!
//! The square is folded recursively into quadrants. At every scale a quadrant
//! inherits a reflected or transposed orientation from its parent, which keeps
//! the curve continuous across quadrant boundaries. That continuity is what
//! separates the Hilbert curve from plain Z-order.
//!
//! All functions here are pure integer arithmetic. They do not validate their
//! inputs; bounds checks belong to [`HilbertContainer`](crate::HilbertContainer).

use crate::{GridCoord, MAX_SIDE};

/// Smallest power of two that is at least `requested`.
///
/// Any request below 1 (zero or negative) yields 1. Requests above
/// [`MAX_SIDE`] saturate at it. This coercion never fails.
pub fn normalize(requested: i64) -> u32 {
    if requested <= 1 {
        return 1;
    }
    if requested >= i64::from(MAX_SIDE) {
        return MAX_SIDE;
    }
    (requested as u32).next_power_of_two()
}

/// Number of cells on a grid of the given side (`side²`).
#[inline]
pub const fn capacity(side: u32) -> u64 {
    side as u64 * side as u64
}

/// Reflect and transpose a quadrant into its parent's orientation.
#[inline(always)]
fn rotate(s: u32, x: &mut u32, y: &mut u32, rx: u32, ry: u32) {
    if ry == 0 {
        if rx == 1 {
            // Either axis may still carry bit `s`; only lower bits are read afterwards.
            *x = (s - 1).wrapping_sub(*x);
            *y = (s - 1).wrapping_sub(*y);
        }
        std::mem::swap(x, y);
    }
}

/// Distance of `(x, y)` along the curve filling a `side × side` grid.
///
/// `side` must be a power of two and both coordinates must be below it.
pub fn xy2d(side: u32, x: u32, y: u32) -> u64 {
    let (mut x, mut y) = (x, y);
    let mut d = 0u64;
    let mut s = side / 2;

    while s > 0 {
        let rx = u32::from(x & s != 0);
        let ry = u32::from(y & s != 0);
        d += u64::from(s) * u64::from(s) * u64::from((3 * rx) ^ ry);
        rotate(s, &mut x, &mut y, rx, ry);
        s /= 2;
    }

    d
}

/// Coordinates of the cell at distance `d` along the curve.
///
/// `side` must be a power of two and `d` must be below `side²`.
pub fn d2xy(side: u32, d: u64) -> (u32, u32) {
    let (mut x, mut y) = (0u32, 0u32);
    let mut t = d;
    let mut s = 1u64;

    while s < u64::from(side) {
        let rx = (1 & (t / 2)) as u32;
        let ry = (1 & (t ^ u64::from(rx))) as u32;
        let scale = s as u32;
        rotate(scale, &mut x, &mut y, rx, ry);
        x += scale * rx;
        y += scale * ry;
        t /= 4;
        s *= 2;
    }

    (x, y)
}

/// Iterator over grid cells in curve order.
#[derive(Debug, Clone)]
pub struct HilbertWalk {
    side: u32,
    current: u64,
    end: u64,
}

impl HilbertWalk {
    /// Walk every cell of a grid, starting at the origin.
    pub fn new(side: u32) -> Self {
        Self {
            side,
            current: 0,
            end: capacity(side),
        }
    }

    /// Walk the half-open distance range `[start, end)`, clamped to the grid.
    pub fn range(side: u32, start: u64, end: u64) -> Self {
        let end = end.min(capacity(side));
        Self {
            side,
            current: start.min(end),
            end,
        }
    }

    /// Side length of the grid being walked.
    pub fn side(&self) -> u32 {
        self.side
    }
}

impl Iterator for HilbertWalk {
    type Item = GridCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.end {
            return None;
        }

        let coord = GridCoord::from(d2xy(self.side, self.current));
        self.current += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HilbertWalk {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn normalize_rounds_up_to_power_of_two() {
        assert_eq!(normalize(0), 1);
        assert_eq!(normalize(1), 1);
        assert_eq!(normalize(2), 2);
        assert_eq!(normalize(3), 4);
        assert_eq!(normalize(5), 8);
        assert_eq!(normalize(16), 16);
        assert_eq!(normalize(17), 32);
    }

    #[test]
    fn normalize_maps_non_positive_to_one() {
        assert_eq!(normalize(-1), 1);
        assert_eq!(normalize(i64::MIN), 1);
    }

    #[test]
    fn capacity_is_side_squared() {
        assert_eq!(capacity(1), 1);
        assert_eq!(capacity(8), 64);
        assert_eq!(capacity(MAX_SIDE), 1u64 << 62);
    }

    #[test]
    fn side_one_is_a_single_cell() {
        assert_eq!(xy2d(1, 0, 0), 0);
        assert_eq!(d2xy(1, 0), (0, 0));
    }

    #[test]
    fn side_two_known_order() {
        assert_eq!(xy2d(2, 0, 0), 0);
        assert_eq!(xy2d(2, 0, 1), 1);
        assert_eq!(xy2d(2, 1, 1), 2);
        assert_eq!(xy2d(2, 1, 0), 3);
    }

    #[test]
    fn side_four_known_order() {
        let expected = [
            (0, 0), (1, 0), (1, 1), (0, 1),
            (0, 2), (0, 3), (1, 3), (1, 2),
            (2, 2), (2, 3), (3, 3), (3, 2),
            (3, 1), (2, 1), (2, 0), (3, 0),
        ];
        for (d, &xy) in expected.iter().enumerate() {
            assert_eq!(d2xy(4, d as u64), xy, "d2xy mismatch at d={}", d);
            assert_eq!(xy2d(4, xy.0, xy.1), d as u64, "xy2d mismatch at {:?}", xy);
        }
    }

    #[test]
    fn reflection_past_quadrant_bit() {
        // (3, 0) reflects about s-1 while x still holds bit s
        let d = xy2d(4, 3, 0);
        assert_eq!(d, 15);
        assert_eq!(d2xy(4, d), (3, 0));
    }

    #[test]
    fn round_trip_every_cell_up_to_256() {
        let mut side = 2u32;
        while side <= 256 {
            for x in 0..side {
                for y in 0..side {
                    let d = xy2d(side, x, y);
                    assert!(d < capacity(side));
                    assert_eq!(d2xy(side, d), (x, y), "side {} cell ({}, {})", side, x, y);
                }
            }
            for d in 0..capacity(side) {
                let (x, y) = d2xy(side, d);
                assert_eq!(xy2d(side, x, y), d, "side {} distance {}", side, d);
            }
            side *= 2;
        }
    }

    #[test]
    fn consecutive_distances_are_adjacent() {
        for side in [2u32, 4, 8, 16, 32] {
            let cells: Vec<_> = HilbertWalk::new(side).collect();
            for pair in cells.windows(2) {
                assert!(
                    pair[0].is_adjacent(&pair[1]),
                    "side {}: {} -> {} not adjacent",
                    side,
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn walk_covers_grid_once() {
        let cells: Vec<_> = HilbertWalk::new(4).collect();
        assert_eq!(cells.len(), 16);
        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(unique.len(), 16);
        assert!(cells.iter().all(|c| c.within(4)));
    }

    #[test]
    fn walk_range_is_clamped() {
        assert_eq!(HilbertWalk::range(4, 4, 8).len(), 4);
        assert_eq!(HilbertWalk::range(4, 10, 100).len(), 6);
        assert_eq!(HilbertWalk::range(4, 20, 30).count(), 0);

        let first = HilbertWalk::range(4, 4, 8).next();
        assert_eq!(first, Some(GridCoord::new(0, 2)));
    }

    #[test]
    fn large_side_does_not_overflow() {
        let side = MAX_SIDE;
        let last = capacity(side) - 1;
        let (x, y) = d2xy(side, last);
        assert_eq!(xy2d(side, x, y), last);
        assert_eq!((x, y), (side - 1, 0));
    }

    proptest! {
        #[test]
        fn xy_round_trip(order in 0u32..=16, x in any::<u32>(), y in any::<u32>()) {
            let side = 1u32 << order;
            let (x, y) = (x % side, y % side);
            prop_assert_eq!(d2xy(side, xy2d(side, x, y)), (x, y));
        }

        #[test]
        fn distance_round_trip(order in 0u32..=16, d in any::<u64>()) {
            let side = 1u32 << order;
            let d = d % capacity(side);
            let (x, y) = d2xy(side, d);
            prop_assert_eq!(xy2d(side, x, y), d);
        }

        #[test]
        fn normalize_is_smallest_power_at_least_request(requested in 1i64..(1 << 31)) {
            let side = normalize(requested);
            prop_assert!(side.is_power_of_two());
            prop_assert!(i64::from(side) >= requested);
            prop_assert!(side == 1 || i64::from(side / 2) < requested);
        }
    }
}
