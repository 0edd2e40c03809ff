// Copyright (c) 2025 The Spindle contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The hollow shaft region of a grid layout.
//!
//! The shaft is a centered sub-square left unassigned by design. It is
//! computed once per search from the side length and requested shaft
//! width, then queried on the hot path as a bitset.
//!
//! Centering policy: offsets are floor-based. An odd side centers the
//! shaft on the middle cell with radius `(w - 1) / 2`; an even side
//! centers it on the middle 2x2 block, extending `w/2 - 1` cells to the
//! low side and `w/2` to the high side. A requested width whose parity
//! does not match the side is thereby rounded down to the nearest width
//! that centers exactly (down to zero for width 1 on an even side).

use fixedbitset::FixedBitSet;

/// A precomputed bitmask of hollow cells within an `side x side` grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaftMask {
    side: usize,
    hollow: FixedBitSet,
}

impl ShaftMask {
    /// Computes the mask for a grid of the given side and shaft width.
    ///
    /// # Panics
    ///
    /// Panics if `shaft_width > side`; designers validate this before
    /// any mask is built.
    pub fn new(side: usize, shaft_width: usize) -> Self {
        assert!(
            shaft_width <= side,
            "called `ShaftMask::new` with shaft width {} exceeding side {}",
            shaft_width,
            side
        );

        let mut hollow = FixedBitSet::with_capacity(side * side);
        if shaft_width > 0 {
            let (lo, hi) = Self::span(side, shaft_width);
            if lo <= hi {
                for y in 0..side as i64 {
                    for x in 0..side as i64 {
                        if lo <= x && x <= hi && lo <= y && y <= hi {
                            hollow.insert((y * side as i64 + x) as usize);
                        }
                    }
                }
            }
        }

        Self { side, hollow }
    }

    /// The inclusive coordinate span of the shaft on either axis.
    fn span(side: usize, shaft_width: usize) -> (i64, i64) {
        let side = side as i64;
        let width = shaft_width as i64;
        if side % 2 == 1 {
            let mid = (side - 1) / 2;
            let radius = (width - 1) / 2;
            (mid - radius, mid + radius)
        } else {
            let mid = side / 2 - 1;
            let radius_low = width / 2 - 1;
            let radius_high = width / 2;
            (mid - radius_low, mid + radius_high)
        }
    }

    /// The grid side length this mask was built for.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns `true` if the cell at `(x, y)` is hollow.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside `[0, side)`.
    #[inline]
    pub fn is_hollow(&self, x: usize, y: usize) -> bool {
        debug_assert!(
            x < self.side && y < self.side,
            "called `ShaftMask::is_hollow` with coordinates ({}, {}) outside a grid of side {}",
            x,
            y,
            self.side
        );
        self.hollow.contains(y * self.side + x)
    }

    /// Number of hollow cells.
    #[inline]
    pub fn num_hollow(&self) -> usize {
        self.hollow.count_ones(..)
    }

    /// Number of assignable cells.
    #[inline]
    pub fn num_open(&self) -> usize {
        self.side * self.side - self.num_hollow()
    }

    /// Iterates over assignable cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;
        (0..side * side)
            .filter(move |i| !self.hollow.contains(*i))
            .map(move |i| (i % side, i / side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hollow_cells(mask: &ShaftMask) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..mask.side() {
            for x in 0..mask.side() {
                if mask.is_hollow(x, y) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn test_odd_side_unit_shaft_is_the_center_cell() {
        let mask = ShaftMask::new(3, 1);
        assert_eq!(hollow_cells(&mask), vec![(1, 1)]);
        assert_eq!(mask.num_hollow(), 1);
        assert_eq!(mask.num_open(), 8);
    }

    #[test]
    fn test_full_width_shaft_hollows_everything() {
        let odd = ShaftMask::new(3, 3);
        assert_eq!(odd.num_hollow(), 9);
        assert_eq!(odd.num_open(), 0);

        let even = ShaftMask::new(4, 4);
        assert_eq!(even.num_hollow(), 16);
    }

    #[test]
    fn test_even_side_even_width_centers_on_middle_block() {
        let mask = ShaftMask::new(4, 2);
        assert_eq!(hollow_cells(&mask), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_mismatched_parity_rounds_width_down() {
        // Width 2 on an odd side behaves like width 1.
        let odd = ShaftMask::new(5, 2);
        assert_eq!(hollow_cells(&odd), vec![(2, 2)]);

        // Width 1 on an even side rounds down to no shaft at all.
        let even = ShaftMask::new(4, 1);
        assert_eq!(even.num_hollow(), 0);

        // Width 3 on an even side behaves like width 2.
        let even3 = ShaftMask::new(4, 3);
        assert_eq!(hollow_cells(&even3), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_zero_width_means_no_hollow_cells() {
        let mask = ShaftMask::new(3, 0);
        assert_eq!(mask.num_hollow(), 0);
        assert_eq!(mask.num_open(), 9);
    }

    #[test]
    fn test_open_cells_skip_the_shaft_in_row_major_order() {
        let mask = ShaftMask::new(3, 1);
        let open: Vec<_> = mask.open_cells().collect();
        assert_eq!(
            open,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (0, 1),
                (2, 1),
                (0, 2),
                (1, 2),
                (2, 2)
            ]
        );
    }

    #[test]
    #[should_panic(expected = "shaft width 5 exceeding side 3")]
    fn test_oversized_width_panics() {
        let _ = ShaftMask::new(3, 5);
    }
}
