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

/// The raw assignment space of a layout problem, stored in log space.
///
/// With `V` catalog variants and `P` open positions the space holds
/// `V^P` complete assignments. Even small grids overflow `u64` (a 7x7
/// grid over 8 coils is `8^49 ≈ 10^44`), so the gauge stores
/// `log10(V^P) = P * log10(V)` instead.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    log_val: f64,
}

impl Complexity {
    /// Gauges a problem with the given catalog size and open positions.
    pub fn new(num_variants: usize, open_positions: usize) -> Self {
        let log_val = if open_positions == 0 {
            // A single (empty) assignment.
            0.0
        } else if num_variants == 0 {
            // No assignment can exist.
            f64::NEG_INFINITY
        } else {
            open_positions as f64 * (num_variants as f64).log10()
        };
        Self { log_val }
    }

    /// Percentage of the space covered by `nodes_explored` nodes, or
    /// `None` when the space is empty. Spaces beyond `10^15` report 0.
    pub fn coverage(&self, nodes_explored: u64) -> Option<f64> {
        if self.log_val == f64::NEG_INFINITY {
            return None;
        }
        if self.log_val > 15.0 {
            return Some(0.0);
        }
        let total_size = 10.0_f64.powf(self.log_val);
        Some((nodes_explored as f64 / total_size) * 100.0)
    }

    /// The order of magnitude, e.g. 44 for `1.2 x 10^44`.
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// The coefficient, e.g. 1.2 for `1.2 x 10^44`.
    #[inline]
    pub fn mantissa(&self) -> f64 {
        10.0_f64.powf(self.log_val - self.log_val.floor())
    }

    /// The raw base-10 logarithm of the space size.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity({:.3})", self.log_val)
    }
}
