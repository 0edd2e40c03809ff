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

//! # Totally Ordered Fitness Values
//!
//! Objective values in the layout optimizer are real-valued (mean
//! efficiencies around 1.0), so the search compares `f64`s constantly:
//! against the incumbent, against bounds, inside monitors. Raw `f64`
//! only implements `PartialOrd`, which forces `unwrap` (or silent
//! misbehavior on NaN) into every comparison site.
//!
//! `Fitness` wraps `f64` with the total order of `f64::total_cmp`, so
//! incumbent updates and pruning checks are plain `<`/`>` expressions.
//! `Fitness::NEG_INFINITY` is the identity incumbent: every real
//! candidate beats it.

/// A totally ordered objective value.
///
/// Ordering follows `f64::total_cmp`, so all values (including NaN and
/// the infinities) compare consistently. Evaluators never produce NaN;
/// the total order exists so the search loop does not have to prove that
/// at every comparison.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Fitness(f64);

impl Fitness {
    /// The incumbent value before any candidate has been found.
    pub const NEG_INFINITY: Fitness = Fitness(f64::NEG_INFINITY);

    /// The fitness of a candidate with no scoring parts.
    pub const ZERO: Fitness = Fitness(0.0);

    /// Wraps a raw objective value.
    #[inline(always)]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw objective value.
    #[inline(always)]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the value is neither infinite nor NaN.
    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for Fitness {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == std::cmp::Ordering::Equal
    }
}

impl Eq for Fitness {}

impl PartialOrd for Fitness {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fitness {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Fitness {
    #[inline(always)]
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Fitness> for f64 {
    #[inline(always)]
    fn from(fitness: Fitness) -> Self {
        fitness.0
    }
}

impl std::fmt::Display for Fitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
