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

//! Mean conductivity scoring for dynamo coil grids: conducting coils
//! contribute their conductivity, structural cells (casings,
//! connectors) fill space without scoring, and fitness is the mean over
//! conducting coils only.

use crate::eval::objective::{mean_upper_bound, GridObjective, ScoreFrame};
use spindle_core::num::fitness::Fitness;
use spindle_model::catalog::Catalog;
use spindle_model::index::VariantIndex;

/// Mean-conductivity scoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeanConductivity;

impl MeanConductivity {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl GridObjective for MeanConductivity {
    fn name(&self) -> &str {
        "MeanConductivity"
    }

    fn extend(&self, catalog: &Catalog, variant: VariantIndex, frame: &ScoreFrame) -> ScoreFrame {
        let part = catalog.variant(variant);
        if part.is_scoring() {
            ScoreFrame {
                sum: frame.sum + part.coefficient(),
                scored: frame.scored + 1,
                expansion: frame.expansion,
            }
        } else {
            *frame
        }
    }

    fn upper_bound(&self, catalog: &Catalog, frame: &ScoreFrame, remaining: usize) -> Fitness {
        Fitness::new(mean_upper_bound(
            frame,
            remaining,
            catalog.max_scoring_coefficient(),
        ))
    }

    fn finalize(&self, frame: &ScoreFrame) -> Fitness {
        Fitness::new(frame.mean())
    }
}
