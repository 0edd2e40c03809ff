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

//! The linear objective: one coefficient per (slot, variant).
//!
//! This is the scoring vocabulary the LP backend supports. A layout is
//! worth the sum of its per-slot coefficients — position-dependent
//! weighting is fine, coupling through the assigned prefix (as in the
//! steam expansion model) is not.

use spindle_model::catalog::Catalog;
use spindle_model::index::VariantIndex;

/// A per-slot, per-variant coefficient table, stored as a per-variant
/// base coefficient and an optional per-slot weight vector.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearObjective {
    base: Vec<f64>,
    slot_weights: Option<Vec<f64>>,
}

impl LinearObjective {
    /// Position-independent scoring: every slot is worth the variant's
    /// raw coefficient. This matches the streaming engine's additive
    /// objective exactly.
    pub fn position_independent(catalog: &Catalog) -> Self {
        Self {
            base: catalog.iter().map(|v| v.coefficient()).collect(),
            slot_weights: None,
        }
    }

    /// Position-weighted scoring: slot `s` is worth the variant's
    /// coefficient times `weights[s]`. Slots beyond the weight vector
    /// fall back to a weight of 1.0.
    pub fn with_slot_weights(catalog: &Catalog, weights: Vec<f64>) -> Self {
        Self {
            base: catalog.iter().map(|v| v.coefficient()).collect(),
            slot_weights: Some(weights),
        }
    }

    /// The coefficient of assigning `variant` at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `variant` is out of bounds for the catalog this table
    /// was built from.
    #[inline]
    pub fn coefficient(&self, slot: usize, variant: VariantIndex) -> f64 {
        debug_assert!(
            variant.get() < self.base.len(),
            "called `LinearObjective::coefficient` with variant out of bounds: the len is {} but the index is {}",
            self.base.len(),
            variant.get()
        );
        let weight = match &self.slot_weights {
            Some(weights) => weights.get(slot).copied().unwrap_or(1.0),
            None => 1.0,
        };
        self.base[variant.get()] * weight
    }

    /// Number of variants this table covers.
    #[inline]
    pub fn num_variants(&self) -> usize {
        self.base.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_model::catalog::Variant;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Variant::new("a", 1.0, 1.0),
            Variant::new("b", 2.0, 1.0),
        ])
    }

    #[test]
    fn test_position_independent_uses_raw_coefficients() {
        let catalog = catalog();
        let objective = LinearObjective::position_independent(&catalog);
        let b = catalog.find("b").unwrap();
        assert_eq!(objective.coefficient(0, b), 2.0);
        assert_eq!(objective.coefficient(7, b), 2.0);
        assert_eq!(objective.num_variants(), 2);
    }

    #[test]
    fn test_slot_weights_scale_by_position() {
        let catalog = catalog();
        let objective = LinearObjective::with_slot_weights(&catalog, vec![2.0, 0.5]);
        let a = catalog.find("a").unwrap();
        assert_eq!(objective.coefficient(0, a), 2.0);
        assert_eq!(objective.coefficient(1, a), 0.5);
        // Slots beyond the weight vector default to weight 1.0.
        assert_eq!(objective.coefficient(2, a), 1.0);
    }
}
