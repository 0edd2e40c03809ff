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

//! The immutable part catalog.
//!
//! A catalog is built once, before any search starts, and is read-only
//! for the process lifetime. Engines address parts exclusively through
//! `VariantIndex`; names exist for callers (usage limits, placement
//! rules, rendering) and are resolved to indices exactly once.

use crate::index::VariantIndex;
use crate::placement::PlacementRule;
use rustc_hash::FxHashMap;

/// One part variant and its scoring-relevant properties.
///
/// A `coefficient <= 0` marks a structural part: it may be required for
/// feasibility (stators, casings) but never contributes to fitness.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    name: String,
    coefficient: f64,
    expansion: f64,
    placement: PlacementRule,
}

impl Variant {
    /// Creates a sequence variant with an expansion factor and no
    /// placement restrictions.
    pub fn new(name: &str, coefficient: f64, expansion: f64) -> Self {
        Self {
            name: name.to_owned(),
            coefficient,
            expansion,
            placement: PlacementRule::Always,
        }
    }

    /// Creates a grid variant with a placement rule. Grid scoring is
    /// position-independent, so the expansion factor is neutral.
    pub fn with_placement(name: &str, coefficient: f64, placement: PlacementRule) -> Self {
        Self {
            name: name.to_owned(),
            coefficient,
            expansion: 1.0,
            placement,
        }
    }

    /// The unique catalog name of this variant.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scoring coefficient (efficiency or conductivity).
    #[inline]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// The steam expansion factor applied along a sequence.
    #[inline]
    pub fn expansion(&self) -> f64 {
        self.expansion
    }

    /// The adjacency rule this variant imposes on its grid neighborhood.
    #[inline]
    pub fn placement(&self) -> &PlacementRule {
        &self.placement
    }

    /// Returns `true` if this variant contributes to fitness.
    #[inline]
    pub fn is_scoring(&self) -> bool {
        self.coefficient > 0.0
    }
}

/// An immutable, index-addressed collection of part variants.
#[derive(Clone, Debug)]
pub struct Catalog {
    variants: Vec<Variant>,
    by_name: FxHashMap<String, VariantIndex>,
}

impl Catalog {
    /// Builds a catalog from a list of variants.
    ///
    /// # Panics
    ///
    /// Panics if two variants share a name; catalogs are static domain
    /// data and a duplicate is a bug at the definition site.
    pub fn new(variants: Vec<Variant>) -> Self {
        let mut by_name = FxHashMap::default();
        for (i, variant) in variants.iter().enumerate() {
            let previous = by_name.insert(variant.name.clone(), VariantIndex::new(i));
            assert!(
                previous.is_none(),
                "called `Catalog::new` with duplicate variant name: {}",
                variant.name
            );
        }
        Self { variants, by_name }
    }

    /// Number of variants in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` if the catalog holds no variants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Returns the variant at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn variant(&self, index: VariantIndex) -> &Variant {
        debug_assert!(
            index.get() < self.variants.len(),
            "called `Catalog::variant` with index out of bounds: the len is {} but the index is {}",
            self.variants.len(),
            index.get()
        );
        &self.variants[index.get()]
    }

    /// Resolves a variant name to its index, if present.
    #[inline]
    pub fn find(&self, name: &str) -> Option<VariantIndex> {
        self.by_name.get(name).copied()
    }

    /// Iterates over all variant indices in catalog order.
    #[inline]
    pub fn indices(&self) -> impl Iterator<Item = VariantIndex> {
        (0..self.variants.len()).map(VariantIndex::new)
    }

    /// Iterates over all variants in catalog order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.variants.iter()
    }

    /// The largest scoring coefficient in the catalog, or 0.0 if every
    /// variant is structural. Bound computations rely on this being an
    /// upper limit on any single part's contribution.
    pub fn max_scoring_coefficient(&self) -> f64 {
        self.variants
            .iter()
            .map(|v| v.coefficient.max(0.0))
            .fold(0.0, f64::max)
    }

    /// The stock rotor blade catalog.
    pub fn rotor_blades() -> Self {
        Self::new(vec![
            Variant::new("steel", 1.0, 1.4),
            Variant::new("extreme", 1.1, 1.6),
            Variant::new("sic_sic_cmc", 1.2, 1.8),
            Variant::new("stator", -1.0, 0.75),
        ])
    }

    /// The stock dynamo coil catalog.
    ///
    /// Coils that the original game places against the rotor bearing are
    /// modeled as shaft-adjacent here, since the hollow region of a grid
    /// layout is exactly the bearing footprint.
    pub fn dynamo_coils() -> Self {
        let metals = ["magnesium", "beryllium", "aluminum", "gold", "copper", "silver"];
        Self::new(vec![
            Variant::with_placement("casing", -1.0, PlacementRule::Always),
            Variant::with_placement(
                "connector",
                -1.0,
                PlacementRule::any_of(metals.iter().map(|m| PlacementRule::adjacent(m, 1)).collect()),
            ),
            Variant::with_placement(
                "magnesium",
                0.88,
                PlacementRule::any_of(vec![
                    PlacementRule::shaft_adjacent(1),
                    PlacementRule::adjacent("connector", 1),
                ]),
            ),
            Variant::with_placement("beryllium", 0.9, PlacementRule::adjacent("magnesium", 1)),
            Variant::with_placement("aluminum", 1.0, PlacementRule::adjacent("magnesium", 2)),
            Variant::with_placement("gold", 1.04, PlacementRule::adjacent("aluminum", 1)),
            Variant::with_placement("copper", 1.06, PlacementRule::adjacent("beryllium", 1)),
            Variant::with_placement(
                "silver",
                1.12,
                PlacementRule::all_of(vec![
                    PlacementRule::adjacent("gold", 1),
                    PlacementRule::adjacent("copper", 1),
                ]),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_resolves_names_to_indices() {
        let catalog = Catalog::rotor_blades();
        let steel = catalog.find("steel").expect("steel must exist");
        assert_eq!(catalog.variant(steel).name(), "steel");
        assert_eq!(catalog.find("unobtainium"), None);
    }

    #[test]
    fn test_rotor_blade_stock_data() {
        let catalog = Catalog::rotor_blades();
        assert_eq!(catalog.len(), 4);

        let stator = catalog.variant(catalog.find("stator").unwrap());
        assert_eq!(stator.coefficient(), -1.0);
        assert_eq!(stator.expansion(), 0.75);
        assert!(!stator.is_scoring());

        let cmc = catalog.variant(catalog.find("sic_sic_cmc").unwrap());
        assert_eq!(cmc.coefficient(), 1.2);
        assert_eq!(cmc.expansion(), 1.8);
        assert!(cmc.is_scoring());
    }

    #[test]
    fn test_dynamo_coil_stock_data() {
        let catalog = Catalog::dynamo_coils();
        assert_eq!(catalog.len(), 8);

        let silver = catalog.variant(catalog.find("silver").unwrap());
        assert_eq!(silver.coefficient(), 1.12);
        assert!(matches!(silver.placement(), PlacementRule::AllOf(rules) if rules.len() == 2));

        let casing = catalog.variant(catalog.find("casing").unwrap());
        assert!(!casing.is_scoring());
        assert_eq!(*casing.placement(), PlacementRule::Always);
    }

    #[test]
    fn test_max_scoring_coefficient_ignores_structural_parts() {
        let blades = Catalog::rotor_blades();
        assert_eq!(blades.max_scoring_coefficient(), 1.2);

        let structural_only = Catalog::new(vec![
            Variant::new("a", -1.0, 1.0),
            Variant::new("b", 0.0, 1.0),
        ]);
        assert_eq!(structural_only.max_scoring_coefficient(), 0.0);
    }

    #[test]
    #[should_panic(expected = "duplicate variant name")]
    fn test_duplicate_names_panic() {
        let _ = Catalog::new(vec![
            Variant::new("steel", 1.0, 1.4),
            Variant::new("steel", 1.1, 1.6),
        ]);
    }
}
