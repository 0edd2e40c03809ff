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

//! Per-variant usage limits.
//!
//! Callers express limits by variant name; `UsageLimits` resolves them
//! against a catalog exactly once, at construction, so an unknown name
//! fails fast instead of surfacing as a silent no-op during search.
//! Variants without an entry are unconstrained. Limits are unsigned, so
//! a negative maximum is unrepresentable by construction.

use crate::catalog::Catalog;
use crate::error::DesignError;
use crate::index::VariantIndex;

/// Maximum occurrence counts per variant within one candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageLimits {
    /// Indexed by `VariantIndex`; `None` means unconstrained.
    limits: Vec<Option<u32>>,
}

impl UsageLimits {
    /// No limits: every variant of the catalog is unconstrained.
    pub fn none(catalog: &Catalog) -> Self {
        Self {
            limits: vec![None; catalog.len()],
        }
    }

    /// Builds limits from `(name, max_count)` pairs, validated against
    /// the catalog. Names absent from the pairs stay unconstrained.
    pub fn from_named<'a, I>(catalog: &Catalog, named: I) -> Result<Self, DesignError>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut limits = vec![None; catalog.len()];
        for (name, max_count) in named {
            let index = catalog
                .find(name)
                .ok_or_else(|| DesignError::UnknownVariant(name.to_owned()))?;
            limits[index.get()] = Some(max_count);
        }
        Ok(Self { limits })
    }

    /// The limit for a variant, or `None` if unconstrained.
    #[inline]
    pub fn limit(&self, index: VariantIndex) -> Option<u32> {
        debug_assert!(
            index.get() < self.limits.len(),
            "called `UsageLimits::limit` with index out of bounds: the len is {} but the index is {}",
            self.limits.len(),
            index.get()
        );
        self.limits[index.get()]
    }

    /// Returns `true` if one more occurrence of `index` stays within the
    /// limit, given `current_count` occurrences so far.
    #[inline]
    pub fn admits_one_more(&self, index: VariantIndex, current_count: u32) -> bool {
        match self.limit(index) {
            Some(max_count) => current_count < max_count,
            None => true,
        }
    }

    /// Returns `true` if every variant carries a limit and the limits
    /// sum to fewer than `positions` — i.e. no complete candidate can
    /// exist. Used as a cheap structural infeasibility check; the search
    /// would discover the same by exhaustion.
    pub fn provably_infeasible(&self, positions: usize) -> bool {
        let mut total: u64 = 0;
        for limit in &self.limits {
            match limit {
                Some(max_count) => total += u64::from(*max_count),
                None => return false,
            }
        }
        total < positions as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_unknown_name_fails_fast() {
        let catalog = Catalog::rotor_blades();
        let result = UsageLimits::from_named(&catalog, [("kryptonite", 1)]);
        assert_eq!(
            result,
            Err(DesignError::UnknownVariant("kryptonite".to_owned()))
        );
    }

    #[test]
    fn test_absent_names_are_unconstrained() {
        let catalog = Catalog::rotor_blades();
        let limits = UsageLimits::from_named(&catalog, [("stator", 1)]).unwrap();

        let stator = catalog.find("stator").unwrap();
        let steel = catalog.find("steel").unwrap();

        assert_eq!(limits.limit(stator), Some(1));
        assert_eq!(limits.limit(steel), None);

        assert!(limits.admits_one_more(stator, 0));
        assert!(!limits.admits_one_more(stator, 1));
        assert!(limits.admits_one_more(steel, 1_000));
    }

    #[test]
    fn test_zero_limit_bans_a_variant() {
        let catalog = Catalog::rotor_blades();
        let limits = UsageLimits::from_named(&catalog, [("stator", 0)]).unwrap();
        let stator = catalog.find("stator").unwrap();
        assert!(!limits.admits_one_more(stator, 0));
    }

    #[test]
    fn test_provable_infeasibility_needs_every_variant_limited() {
        let catalog = Catalog::new(vec![
            crate::catalog::Variant::new("a", 1.0, 1.0),
            crate::catalog::Variant::new("b", 2.0, 1.0),
        ]);

        let all_limited =
            UsageLimits::from_named(&catalog, [("a", 1), ("b", 1)]).unwrap();
        assert!(all_limited.provably_infeasible(3));
        assert!(!all_limited.provably_infeasible(2));

        let partially_limited = UsageLimits::from_named(&catalog, [("a", 0)]).unwrap();
        assert!(!partially_limited.provably_infeasible(100));
    }
}
