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

//! # Objective Traits
//!
//! An objective decouples the engines from a particular scoring model.
//! The engines call:
//! - `extend` to fold one assignment into the running score frame,
//! - `upper_bound` to estimate the best reachable completion,
//! - `finalize` to turn a complete frame into a fitness.
//!
//! Bounds must be admissible: `upper_bound` may overestimate but must
//! never fall below the fitness of the best completion of the partial
//! state. The engines prune a branch when its bound cannot *strictly*
//! beat the incumbent, so an underestimating bound silently loses
//! optimal candidates.

use spindle_core::num::fitness::Fitness;
use spindle_model::catalog::Catalog;
use spindle_model::index::VariantIndex;

/// The running score of a partial assignment, one frame per depth.
///
/// The engines keep a stack of these frames; backtracking pops a frame
/// instead of recomputing prefix scores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreFrame {
    /// Sum of contributions of scoring parts assigned so far.
    pub sum: f64,
    /// Number of scoring parts assigned so far.
    pub scored: u32,
    /// Cumulative steam expansion of the assigned prefix (sequences
    /// only; stays 1.0 for grids).
    pub expansion: f64,
}

impl ScoreFrame {
    /// The frame of the empty assignment.
    pub const INITIAL: ScoreFrame = ScoreFrame {
        sum: 0.0,
        scored: 0,
        expansion: 1.0,
    };

    /// Mean contribution per scoring part, 0 if none were assigned.
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.scored == 0 {
            0.0
        } else {
            self.sum / f64::from(self.scored)
        }
    }
}

/// Admissible bound for mean-of-contributions objectives.
///
/// With current sum `s` over `k` scoring parts and `m` open positions,
/// each worth at most `c_max`, the best reachable mean is
/// `max over j in [0, m] of (s + j * c_max) / (k + j)`. The expression
/// is monotone in `j` (its derivative has the constant sign of
/// `c_max * k - s`), so only the endpoints matter.
pub(crate) fn mean_upper_bound(frame: &ScoreFrame, remaining: usize, c_max: f64) -> f64 {
    if remaining == 0 {
        return frame.mean();
    }
    if frame.scored == 0 {
        return c_max.max(0.0);
    }
    let s = frame.sum;
    let k = f64::from(frame.scored);
    let m = remaining as f64;
    if c_max * k >= s {
        (s + m * c_max) / (k + m)
    } else {
        s / k
    }
}

/// A scoring model for sequence layouts. Contributions may depend on the
/// slot and on the assigned prefix (through the score frame).
pub trait SequenceObjective {
    /// The name of this objective.
    fn name(&self) -> &str;

    /// Folds the assignment of `variant` at `slot` (of a run of
    /// `length` slots) into `frame`.
    fn extend(
        &self,
        catalog: &Catalog,
        length: usize,
        slot: usize,
        variant: VariantIndex,
        frame: &ScoreFrame,
    ) -> ScoreFrame;

    /// Admissible bound on the fitness of any completion of `frame`
    /// with `remaining` open slots.
    fn upper_bound(&self, catalog: &Catalog, frame: &ScoreFrame, remaining: usize) -> Fitness;

    /// The fitness of a complete assignment.
    fn finalize(&self, frame: &ScoreFrame) -> Fitness;
}

/// A scoring model for grid layouts. Grid contributions are
/// position-independent; adjacency feasibility is the constraint
/// checker's concern, not the objective's.
pub trait GridObjective {
    /// The name of this objective.
    fn name(&self) -> &str;

    /// Folds the assignment of `variant` into `frame`.
    fn extend(&self, catalog: &Catalog, variant: VariantIndex, frame: &ScoreFrame) -> ScoreFrame;

    /// Admissible bound on the fitness of any completion of `frame`
    /// with `remaining` open cells.
    fn upper_bound(&self, catalog: &Catalog, frame: &ScoreFrame, remaining: usize) -> Fitness;

    /// The fitness of a complete assignment.
    fn finalize(&self, frame: &ScoreFrame) -> Fitness;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_frame() {
        let frame = ScoreFrame::INITIAL;
        assert_eq!(frame.sum, 0.0);
        assert_eq!(frame.scored, 0);
        assert_eq!(frame.expansion, 1.0);
        assert_eq!(frame.mean(), 0.0);
    }

    #[test]
    fn test_mean_of_scored_parts() {
        let frame = ScoreFrame {
            sum: 3.0,
            scored: 2,
            expansion: 1.0,
        };
        assert_eq!(frame.mean(), 1.5);
    }

    #[test]
    fn test_mean_bound_with_nothing_scored_yet() {
        let frame = ScoreFrame::INITIAL;
        assert_eq!(mean_upper_bound(&frame, 4, 1.2), 1.2);
        assert_eq!(mean_upper_bound(&frame, 4, 0.0), 0.0);
    }

    #[test]
    fn test_mean_bound_grows_toward_c_max() {
        // Current mean 0.5, two open positions worth up to 2.0 each:
        // best completion is (0.5 + 2 * 2.0) / 3 = 1.5.
        let frame = ScoreFrame {
            sum: 0.5,
            scored: 1,
            expansion: 1.0,
        };
        assert_eq!(mean_upper_bound(&frame, 2, 2.0), 1.5);
    }

    #[test]
    fn test_mean_bound_keeps_a_high_mean() {
        // Current mean 2.0 beats c_max 1.0; filling more positions can
        // only drag the mean down, so the bound is the current mean.
        let frame = ScoreFrame {
            sum: 4.0,
            scored: 2,
            expansion: 1.0,
        };
        assert_eq!(mean_upper_bound(&frame, 3, 1.0), 2.0);
    }

    #[test]
    fn test_mean_bound_with_no_remaining_is_the_mean() {
        let frame = ScoreFrame {
            sum: 2.2,
            scored: 2,
            expansion: 1.0,
        };
        assert_eq!(mean_upper_bound(&frame, 0, 9.9), 1.1);
    }
}
