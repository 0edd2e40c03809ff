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

//! Position-independent additive scoring: a sequence is worth the sum
//! of its parts' coefficients. This is the linear subset the LP backend
//! can express, which makes it the meeting point for consistency checks
//! between the two backends.

use crate::eval::objective::{ScoreFrame, SequenceObjective};
use spindle_core::num::fitness::Fitness;
use spindle_model::catalog::Catalog;
use spindle_model::index::VariantIndex;

/// Sum-of-coefficients scoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdditiveEfficiency;

impl AdditiveEfficiency {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// The best single-slot contribution available in the catalog.
    fn best_coefficient(catalog: &Catalog) -> f64 {
        catalog
            .iter()
            .map(|v| v.coefficient())
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl SequenceObjective for AdditiveEfficiency {
    fn name(&self) -> &str {
        "AdditiveEfficiency"
    }

    fn extend(
        &self,
        catalog: &Catalog,
        _length: usize,
        _slot: usize,
        variant: VariantIndex,
        frame: &ScoreFrame,
    ) -> ScoreFrame {
        ScoreFrame {
            sum: frame.sum + catalog.variant(variant).coefficient(),
            scored: frame.scored,
            expansion: frame.expansion,
        }
    }

    fn upper_bound(&self, catalog: &Catalog, frame: &ScoreFrame, remaining: usize) -> Fitness {
        // Every open slot must hold some part; the best it can add is
        // the best coefficient in the catalog (possibly negative).
        Fitness::new(frame.sum + remaining as f64 * Self::best_coefficient(catalog))
    }

    fn finalize(&self, frame: &ScoreFrame) -> Fitness {
        Fitness::new(frame.sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_model::catalog::Variant;

    fn two_part_catalog() -> Catalog {
        Catalog::new(vec![
            Variant::new("a", 1.0, 1.0),
            Variant::new("b", 2.0, 1.0),
        ])
    }

    #[test]
    fn test_sum_of_coefficients() {
        let catalog = two_part_catalog();
        let objective = AdditiveEfficiency::new();
        let a = catalog.find("a").unwrap();
        let b = catalog.find("b").unwrap();

        let mut frame = ScoreFrame::INITIAL;
        frame = objective.extend(&catalog, 2, 0, b, &frame);
        frame = objective.extend(&catalog, 2, 1, a, &frame);
        assert_eq!(objective.finalize(&frame), Fitness::new(3.0));
    }

    #[test]
    fn test_upper_bound_assumes_best_part_everywhere() {
        let catalog = two_part_catalog();
        let objective = AdditiveEfficiency::new();
        let bound = objective.upper_bound(&catalog, &ScoreFrame::INITIAL, 2);
        assert_eq!(bound, Fitness::new(4.0));
    }

    #[test]
    fn test_upper_bound_with_only_negative_coefficients() {
        let catalog = Catalog::new(vec![
            Variant::new("drag", -1.0, 1.0),
            Variant::new("worse_drag", -3.0, 1.0),
        ]);
        let objective = AdditiveEfficiency::new();
        // Something must fill each slot, so the bound goes down.
        let bound = objective.upper_bound(&catalog, &ScoreFrame::INITIAL, 3);
        assert_eq!(bound, Fitness::new(-3.0));
    }
}
