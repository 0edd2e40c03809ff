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

//! Candidate layouts yielded by the design streams.
//!
//! Layouts are fully owned snapshots: once yielded, the engine never
//! touches them again, and dropping the stream leaves them intact.

use crate::index::{SlotIndex, VariantIndex};
use spindle_core::num::fitness::Fitness;

/// A complete rotor blade sequence and its fitness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceLayout {
    variants: Vec<VariantIndex>,
    fitness: Fitness,
}

impl SequenceLayout {
    /// Wraps a complete assignment.
    pub fn new(variants: Vec<VariantIndex>, fitness: Fitness) -> Self {
        Self { variants, fitness }
    }

    /// The number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` if the layout has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// The assigned variant of one slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    #[inline]
    pub fn variant_at(&self, slot: SlotIndex) -> VariantIndex {
        debug_assert!(
            slot.get() < self.variants.len(),
            "called `SequenceLayout::variant_at` with slot out of bounds: the len is {} but the index is {}",
            self.variants.len(),
            slot.get()
        );
        self.variants[slot.get()]
    }

    /// All assigned variants in slot order.
    #[inline]
    pub fn variants(&self) -> &[VariantIndex] {
        &self.variants
    }

    /// The fitness of this layout.
    #[inline]
    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    /// Counts the occurrences of one variant.
    pub fn count_of(&self, variant: VariantIndex) -> usize {
        self.variants.iter().filter(|v| **v == variant).count()
    }
}

impl std::fmt::Display for SequenceLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sequence Layout")?;
        writeln!(f, "   Fitness: {}", self.fitness)?;
        writeln!(f)?;
        writeln!(f, "   {:<6} | {:<8}", "Slot", "Variant")?;
        writeln!(f, "   {:-<6}-+-{:-<8}", "", "")?;
        for (slot, variant) in self.variants.iter().enumerate() {
            writeln!(f, "   {:<6} | {:<8}", slot, variant.get())?;
        }
        Ok(())
    }
}

/// One cell of a grid layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// A hollow shaft cell; never assigned.
    Empty,
    /// A cell holding the given part variant.
    Part(VariantIndex),
}

impl Cell {
    /// Returns `true` for hollow cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The assigned variant, or `None` for hollow cells.
    #[inline]
    pub fn variant(&self) -> Option<VariantIndex> {
        match self {
            Cell::Empty => None,
            Cell::Part(variant) => Some(*variant),
        }
    }
}

/// A complete dynamo coil grid and its fitness.
///
/// Cells are stored row-major; `(x, y)` indexing covers the full square
/// including the hollow shaft, which reads back as `Cell::Empty`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    side: usize,
    cells: Vec<Cell>,
    fitness: Fitness,
}

impl GridLayout {
    /// Wraps a complete grid assignment.
    ///
    /// # Panics
    ///
    /// Panics if `cells` does not hold exactly `side * side` entries.
    pub fn new(side: usize, cells: Vec<Cell>, fitness: Fitness) -> Self {
        assert_eq!(
            cells.len(),
            side * side,
            "called `GridLayout::new` with inconsistent cell count: side is {} but {} cells were given",
            side,
            cells.len()
        );
        Self {
            side,
            cells,
            fitness,
        }
    }

    /// The side length of the grid.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// The cell at `(x, y)`, `x` and `y` in `[0, side)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        debug_assert!(
            x < self.side && y < self.side,
            "called `GridLayout::get` with coordinates ({}, {}) outside a grid of side {}",
            x,
            y,
            self.side
        );
        self.cells[y * self.side + x]
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The fitness of this layout.
    #[inline]
    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    /// Number of hollow cells.
    pub fn num_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Number of assigned cells.
    pub fn num_parts(&self) -> usize {
        self.cells.len() - self.num_empty()
    }

    /// Counts the occurrences of one variant.
    pub fn count_of(&self, variant: VariantIndex) -> usize {
        self.cells
            .iter()
            .filter(|c| c.variant() == Some(variant))
            .count()
    }
}

impl std::fmt::Display for GridLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid Layout ({}x{})", self.side, self.side)?;
        writeln!(f, "   Fitness: {}", self.fitness)?;
        writeln!(f)?;
        for y in 0..self.side {
            write!(f, "   ")?;
            for x in 0..self.side {
                match self.get(x, y) {
                    Cell::Empty => write!(f, " .")?,
                    Cell::Part(variant) => write!(f, " {}", variant.get())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
