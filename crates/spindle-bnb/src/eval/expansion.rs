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

//! # Steam Expansion Efficiency
//!
//! The physical scoring model for rotor blade sequences. Steam expands
//! as it travels the rotor: the cumulative expansion after a prefix is
//! the product of the prefix's expansion factors, and a blade at slot
//! `i` sees the level `P_i * sqrt(e_v)` (its own factor applied
//! half-way). The rotor is tuned toward a target expansion `T`: the
//! ideal level at slot `i` of `N` is `T^((i + 0.5) / N)`, and a scoring
//! blade earns its efficiency scaled by how closely its actual level
//! matches the ideal (the min/max ratio of the two). Fitness is the
//! mean earned efficiency over scoring blades.
//!
//! Stators score nothing but contract the steam (factor < 1), buying
//! later blades a better match against a low target.

use crate::eval::objective::{mean_upper_bound, ScoreFrame, SequenceObjective};
use spindle_core::num::fitness::Fitness;
use spindle_model::catalog::Catalog;
use spindle_model::index::VariantIndex;

/// The steam expansion scoring model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpansionEfficiency {
    opt_expansion: f64,
}

impl ExpansionEfficiency {
    /// Creates the model for a target total expansion.
    #[inline]
    pub fn new(opt_expansion: f64) -> Self {
        Self { opt_expansion }
    }

    /// The target total expansion.
    #[inline]
    pub fn opt_expansion(&self) -> f64 {
        self.opt_expansion
    }

    /// How well an actual expansion level matches an ideal one, in
    /// `[0, 1]`. Non-positive levels match nothing.
    #[inline]
    fn match_ratio(ideal: f64, actual: f64) -> f64 {
        if ideal > 0.0 && actual > 0.0 {
            if ideal < actual {
                ideal / actual
            } else {
                actual / ideal
            }
        } else {
            0.0
        }
    }
}

impl SequenceObjective for ExpansionEfficiency {
    fn name(&self) -> &str {
        "ExpansionEfficiency"
    }

    fn extend(
        &self,
        catalog: &Catalog,
        length: usize,
        slot: usize,
        variant: VariantIndex,
        frame: &ScoreFrame,
    ) -> ScoreFrame {
        let part = catalog.variant(variant);
        let level = frame.expansion * part.expansion().sqrt();
        let next_expansion = frame.expansion * part.expansion();

        if part.is_scoring() {
            let ideal = self
                .opt_expansion
                .powf((slot as f64 + 0.5) / length as f64);
            ScoreFrame {
                sum: frame.sum + part.coefficient() * Self::match_ratio(ideal, level),
                scored: frame.scored + 1,
                expansion: next_expansion,
            }
        } else {
            ScoreFrame {
                sum: frame.sum,
                scored: frame.scored,
                expansion: next_expansion,
            }
        }
    }

    fn upper_bound(&self, catalog: &Catalog, frame: &ScoreFrame, remaining: usize) -> Fitness {
        // A blade's contribution never exceeds its raw efficiency (the
        // match ratio lives in [0, 1]).
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

#[cfg(test)]
mod tests {
    use super::*;

    fn extend_all(
        objective: &ExpansionEfficiency,
        catalog: &Catalog,
        names: &[&str],
    ) -> ScoreFrame {
        let mut frame = ScoreFrame::INITIAL;
        for (slot, name) in names.iter().enumerate() {
            let variant = catalog.find(name).expect("variant must exist");
            frame = objective.extend(catalog, names.len(), slot, variant, &frame);
        }
        frame
    }

    #[test]
    fn test_single_blade_matching_its_target_scores_full_efficiency() {
        // One steel blade against a target equal to its own expansion:
        // ideal = 1.4^0.5, actual = sqrt(1.4), a perfect match.
        let catalog = Catalog::rotor_blades();
        let objective = ExpansionEfficiency::new(1.4);
        let frame = extend_all(&objective, &catalog, &["steel"]);
        assert!((objective.finalize(&frame).get() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_geometric_run_matches_perfectly() {
        // N steel blades against target 1.4^N sit exactly on the ideal
        // expansion curve at every slot.
        let catalog = Catalog::rotor_blades();
        let objective = ExpansionEfficiency::new(1.4_f64.powi(3));
        let frame = extend_all(&objective, &catalog, &["steel", "steel", "steel"]);
        assert!((objective.finalize(&frame).get() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stator_contracts_without_scoring() {
        let catalog = Catalog::rotor_blades();
        let objective = ExpansionEfficiency::new(4.0);
        let frame = extend_all(&objective, &catalog, &["stator"]);
        assert_eq!(frame.scored, 0);
        assert_eq!(frame.sum, 0.0);
        assert!((frame.expansion - 0.75).abs() < 1e-12);
        assert_eq!(objective.finalize(&frame), Fitness::ZERO);
    }

    #[test]
    fn test_mismatch_scores_below_raw_efficiency() {
        // A single sic_sic_cmc blade against a wildly high target earns
        // strictly less than its efficiency of 1.2.
        let catalog = Catalog::rotor_blades();
        let objective = ExpansionEfficiency::new(100.0);
        let frame = extend_all(&objective, &catalog, &["sic_sic_cmc"]);
        let fitness = objective.finalize(&frame).get();
        assert!(fitness > 0.0);
        assert!(fitness < 1.2);
    }

    #[test]
    fn test_upper_bound_dominates_every_completion() {
        // For every 2-blade completion of a 1-blade prefix, the prefix
        // bound must not be below the completion's fitness.
        let catalog = Catalog::rotor_blades();
        let objective = ExpansionEfficiency::new(2.5);

        for first in catalog.indices() {
            let prefix = objective.extend(&catalog, 2, 0, first, &ScoreFrame::INITIAL);
            let bound = objective.upper_bound(&catalog, &prefix, 1);
            for second in catalog.indices() {
                let full = objective.extend(&catalog, 2, 1, second, &prefix);
                assert!(
                    bound >= objective.finalize(&full),
                    "bound {} below completion {} for ({}, {})",
                    bound,
                    objective.finalize(&full),
                    first,
                    second
                );
            }
        }
    }

    #[test]
    fn test_match_ratio_degenerate_levels() {
        assert_eq!(ExpansionEfficiency::match_ratio(0.0, 1.0), 0.0);
        assert_eq!(ExpansionEfficiency::match_ratio(1.0, 0.0), 0.0);
        assert_eq!(ExpansionEfficiency::match_ratio(2.0, 2.0), 1.0);
        assert_eq!(ExpansionEfficiency::match_ratio(1.0, 4.0), 0.25);
        assert_eq!(ExpansionEfficiency::match_ratio(4.0, 1.0), 0.25);
    }
}
