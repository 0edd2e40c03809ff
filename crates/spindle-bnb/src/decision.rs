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

use spindle_model::index::VariantIndex;

/// One branching step: assign `variant` to the open position `position`.
///
/// Positions count open slots in construction order — sequence slots for
/// the sequence engine, open (non-hollow) cells in row-major order for
/// the grid engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    position: usize,
    variant: VariantIndex,
}

impl Decision {
    /// Creates a new decision.
    #[inline(always)]
    pub const fn new(position: usize, variant: VariantIndex) -> Self {
        Self { position, variant }
    }

    /// The open position this decision fills.
    #[inline(always)]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The variant this decision assigns.
    #[inline(always)]
    pub const fn variant(&self) -> VariantIndex {
        self.variant
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Decision(position: {}, variant: {})",
            self.position,
            self.variant.get()
        )
    }
}
