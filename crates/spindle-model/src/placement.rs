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

//! Adjacency placement rules for grid parts.
//!
//! A grid part is only legal in a cell if its rule is satisfied by the
//! four von Neumann neighbors of that cell. During search, a cell whose
//! neighborhood is not fully assigned yet must not be rejected early:
//! any rule evaluated against an `Incomplete` neighbor passes, and the
//! exact check happens once the last neighbor is known. This optimism is
//! what keeps branch pruning admissible.

/// What a placement rule sees in one of the four neighboring cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighbor<'a> {
    /// The cell lies outside the grid.
    Wall,
    /// The cell belongs to the hollow shaft region.
    Shaft,
    /// The cell is open but not assigned yet.
    Incomplete,
    /// The cell holds a part with this catalog name.
    Part(&'a str),
}

/// The four von Neumann neighbors of a grid cell.
#[derive(Clone, Copy, Debug)]
pub struct Neighborhood<'a> {
    pub up: Neighbor<'a>,
    pub right: Neighbor<'a>,
    pub down: Neighbor<'a>,
    pub left: Neighbor<'a>,
}

impl<'a> Neighborhood<'a> {
    /// Returns the neighbors in `[up, right, down, left]` order.
    #[inline]
    pub fn as_array(&self) -> [Neighbor<'a>; 4] {
        [self.up, self.right, self.down, self.left]
    }

    /// Returns `true` if any neighbor is still unassigned.
    #[inline]
    pub fn any_incomplete(&self) -> bool {
        self.as_array()
            .iter()
            .any(|n| matches!(n, Neighbor::Incomplete))
    }
}

/// What a `Requires` rule counts among the neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementTarget {
    /// A part with the given catalog name.
    Variant(String),
    /// A hollow shaft cell.
    Shaft,
}

impl PlacementTarget {
    /// Returns `true` if the neighbor counts toward this target.
    #[inline]
    pub fn matches(&self, neighbor: Neighbor<'_>) -> bool {
        match (self, neighbor) {
            (PlacementTarget::Variant(name), Neighbor::Part(other)) => name == other,
            (PlacementTarget::Shaft, Neighbor::Shaft) => true,
            _ => false,
        }
    }
}

/// An adjacency requirement a part imposes on its neighborhood.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementRule {
    /// The part is legal everywhere.
    Always,
    /// At least (or, with `exact`, precisely) `quantity` neighbors must
    /// match `target`. With `axial`, one matching pair must be opposite
    /// each other (up/down or left/right).
    Requires {
        target: PlacementTarget,
        quantity: u32,
        exact: bool,
        axial: bool,
    },
    /// All sub-rules must hold.
    AllOf(Vec<PlacementRule>),
    /// At least one sub-rule must hold.
    AnyOf(Vec<PlacementRule>),
}

impl PlacementRule {
    /// Requires at least `quantity` neighbors named `name`.
    pub fn adjacent(name: &str, quantity: u32) -> Self {
        PlacementRule::Requires {
            target: PlacementTarget::Variant(name.to_owned()),
            quantity,
            exact: false,
            axial: false,
        }
    }

    /// Requires at least `quantity` hollow shaft neighbors.
    pub fn shaft_adjacent(quantity: u32) -> Self {
        PlacementRule::Requires {
            target: PlacementTarget::Shaft,
            quantity,
            exact: false,
            axial: false,
        }
    }

    /// Requires precisely `quantity` neighbors named `name`.
    pub fn adjacent_exact(name: &str, quantity: u32) -> Self {
        PlacementRule::Requires {
            target: PlacementTarget::Variant(name.to_owned()),
            quantity,
            exact: true,
            axial: false,
        }
    }

    /// Requires an opposite pair of neighbors named `name`.
    pub fn axial(name: &str) -> Self {
        PlacementRule::Requires {
            target: PlacementTarget::Variant(name.to_owned()),
            quantity: 2,
            exact: false,
            axial: true,
        }
    }

    /// Conjunction of sub-rules.
    pub fn all_of(rules: Vec<PlacementRule>) -> Self {
        PlacementRule::AllOf(rules)
    }

    /// Disjunction of sub-rules.
    pub fn any_of(rules: Vec<PlacementRule>) -> Self {
        PlacementRule::AnyOf(rules)
    }

    /// Evaluates the rule against a neighborhood.
    ///
    /// A neighborhood with any `Incomplete` neighbor satisfies every
    /// rule; the decisive evaluation happens when the neighborhood is
    /// fully known.
    pub fn satisfied(&self, neighborhood: &Neighborhood<'_>) -> bool {
        match self {
            PlacementRule::Always => true,
            PlacementRule::Requires {
                target,
                quantity,
                exact,
                axial,
            } => {
                if neighborhood.any_incomplete() {
                    return true;
                }

                let count = neighborhood
                    .as_array()
                    .iter()
                    .filter(|n| target.matches(**n))
                    .count() as u32;

                let quantity_ok = if *exact {
                    count == *quantity
                } else {
                    count >= *quantity
                };

                let axial_ok = !*axial
                    || (target.matches(neighborhood.up) && target.matches(neighborhood.down))
                    || (target.matches(neighborhood.left) && target.matches(neighborhood.right));

                quantity_ok && axial_ok
            }
            PlacementRule::AllOf(rules) => rules.iter().all(|r| r.satisfied(neighborhood)),
            PlacementRule::AnyOf(rules) => rules.iter().any(|r| r.satisfied(neighborhood)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hood<'a>(
        up: Neighbor<'a>,
        right: Neighbor<'a>,
        down: Neighbor<'a>,
        left: Neighbor<'a>,
    ) -> Neighborhood<'a> {
        Neighborhood {
            up,
            right,
            down,
            left,
        }
    }

    #[test]
    fn test_always_holds_everywhere() {
        let rule = PlacementRule::Always;
        let walls = hood(Neighbor::Wall, Neighbor::Wall, Neighbor::Wall, Neighbor::Wall);
        assert!(rule.satisfied(&walls));
    }

    #[test]
    fn test_incomplete_neighbor_defers_judgement() {
        let rule = PlacementRule::adjacent("gold", 4);
        let pending = hood(
            Neighbor::Incomplete,
            Neighbor::Wall,
            Neighbor::Wall,
            Neighbor::Wall,
        );
        // Unsatisfiable once complete, but not rejectable yet.
        assert!(rule.satisfied(&pending));
    }

    #[test]
    fn test_quantity_counting() {
        let rule = PlacementRule::adjacent("copper", 2);
        let enough = hood(
            Neighbor::Part("copper"),
            Neighbor::Part("copper"),
            Neighbor::Wall,
            Neighbor::Part("tin"),
        );
        let short = hood(
            Neighbor::Part("copper"),
            Neighbor::Wall,
            Neighbor::Wall,
            Neighbor::Part("tin"),
        );
        assert!(rule.satisfied(&enough));
        assert!(!rule.satisfied(&short));
    }

    #[test]
    fn test_exact_quantity_rejects_surplus() {
        let rule = PlacementRule::adjacent_exact("copper", 1);
        let surplus = hood(
            Neighbor::Part("copper"),
            Neighbor::Part("copper"),
            Neighbor::Wall,
            Neighbor::Wall,
        );
        assert!(!rule.satisfied(&surplus));
    }

    #[test]
    fn test_axial_requires_an_opposite_pair() {
        let rule = PlacementRule::axial("steel");
        let opposite = hood(
            Neighbor::Part("steel"),
            Neighbor::Wall,
            Neighbor::Part("steel"),
            Neighbor::Wall,
        );
        let corner = hood(
            Neighbor::Part("steel"),
            Neighbor::Part("steel"),
            Neighbor::Wall,
            Neighbor::Wall,
        );
        assert!(rule.satisfied(&opposite));
        assert!(!rule.satisfied(&corner));
    }

    #[test]
    fn test_shaft_target_matches_hollow_cells_only() {
        let rule = PlacementRule::shaft_adjacent(1);
        let next_to_shaft = hood(
            Neighbor::Shaft,
            Neighbor::Wall,
            Neighbor::Part("casing"),
            Neighbor::Wall,
        );
        let interior = hood(
            Neighbor::Part("casing"),
            Neighbor::Wall,
            Neighbor::Part("casing"),
            Neighbor::Wall,
        );
        assert!(rule.satisfied(&next_to_shaft));
        assert!(!rule.satisfied(&interior));
    }

    #[test]
    fn test_compound_rules() {
        let either = PlacementRule::any_of(vec![
            PlacementRule::adjacent("gold", 1),
            PlacementRule::adjacent("copper", 1),
        ]);
        let both = PlacementRule::all_of(vec![
            PlacementRule::adjacent("gold", 1),
            PlacementRule::adjacent("copper", 1),
        ]);

        let gold_only = hood(
            Neighbor::Part("gold"),
            Neighbor::Wall,
            Neighbor::Wall,
            Neighbor::Wall,
        );
        assert!(either.satisfied(&gold_only));
        assert!(!both.satisfied(&gold_only));

        let gold_and_copper = hood(
            Neighbor::Part("gold"),
            Neighbor::Part("copper"),
            Neighbor::Wall,
            Neighbor::Wall,
        );
        assert!(both.satisfied(&gold_and_copper));
    }

    #[test]
    fn test_walls_never_match_targets() {
        let rule = PlacementRule::adjacent("casing", 1);
        let walls = hood(Neighbor::Wall, Neighbor::Wall, Neighbor::Wall, Neighbor::Wall);
        assert!(!rule.satisfied(&walls));
    }
}
