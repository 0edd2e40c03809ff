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

use crate::eval::objective::ScoreFrame;
use spindle_model::index::VariantIndex;

/// Mutable per-run search state: the assigned prefix, per-variant usage
/// counts, and the score trail.
///
/// Open positions are filled strictly in order, so the state is a plain
/// prefix stack: `assignments[i]` is the variant at open position `i`.
/// One `ScoreFrame` per depth (plus the initial frame) makes
/// backtracking a pop instead of a rescore.
#[derive(Clone, Debug)]
pub struct SearchState {
    assignments: Vec<VariantIndex>,
    counts: Vec<u32>,
    frames: Vec<ScoreFrame>,
}

impl SearchState {
    /// Creates the empty state for a problem with `num_variants` catalog
    /// entries and `num_positions` open positions.
    pub fn new(num_variants: usize, num_positions: usize) -> Self {
        let mut frames = Vec::with_capacity(num_positions + 1);
        frames.push(ScoreFrame::INITIAL);
        Self {
            assignments: Vec::with_capacity(num_positions),
            counts: vec![0; num_variants],
            frames,
        }
    }

    /// Number of assigned open positions.
    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.assignments.len()
    }

    /// The assigned prefix, in open-position order.
    #[inline]
    pub fn assignments(&self) -> &[VariantIndex] {
        &self.assignments
    }

    /// The variant at an open position, if assigned.
    #[inline]
    pub fn variant_at(&self, position: usize) -> Option<VariantIndex> {
        self.assignments.get(position).copied()
    }

    /// Current usage count of a variant.
    ///
    /// # Panics
    ///
    /// Panics if `variant` is out of bounds.
    #[inline]
    pub fn count(&self, variant: VariantIndex) -> u32 {
        debug_assert!(
            variant.get() < self.counts.len(),
            "called `SearchState::count` with variant out of bounds: the len is {} but the index is {}",
            self.counts.len(),
            variant.get()
        );
        self.counts[variant.get()]
    }

    /// The score frame of the current depth.
    #[inline]
    pub fn current_frame(&self) -> &ScoreFrame {
        // `frames` always holds at least the initial frame.
        &self.frames[self.frames.len() - 1]
    }

    /// Assigns `variant` to the next open position with its precomputed
    /// score frame.
    #[inline]
    pub fn assign(&mut self, variant: VariantIndex, frame: ScoreFrame) {
        self.assignments.push(variant);
        self.counts[variant.get()] += 1;
        self.frames.push(frame);
    }

    /// Reverts the most recent assignment. Returns the removed variant,
    /// or `None` at the root.
    #[inline]
    pub fn unassign(&mut self) -> Option<VariantIndex> {
        let variant = self.assignments.pop()?;
        self.counts[variant.get()] -= 1;
        self.frames.pop();
        Some(variant)
    }
}
