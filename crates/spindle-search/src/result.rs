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

use crate::stats::SearchStatistics;

/// What a single-shot search run concluded, generic over the candidate
/// layout type it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<C> {
    /// The problem was proven infeasible.
    Infeasible,
    /// A candidate was found and proven optimal.
    Optimal(C),
    /// A candidate was found, optimality was not proven.
    Feasible(C),
    /// The run terminated without a candidate and without proving
    /// infeasibility (typically a time budget).
    Unknown,
}

impl<C> SolverResult<C> {
    /// The candidate, if the run produced one.
    #[inline]
    pub fn candidate(&self) -> Option<&C> {
        match self {
            SolverResult::Optimal(candidate) | SolverResult::Feasible(candidate) => {
                Some(candidate)
            }
            SolverResult::Infeasible | SolverResult::Unknown => None,
        }
    }
}

impl<C> std::fmt::Display for SolverResult<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Infeasible => write!(f, "Infeasible"),
            SolverResult::Optimal(_) => write!(f, "Optimal"),
            SolverResult::Feasible(_) => write!(f, "Feasible"),
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why a search run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The run found and proved optimality of a candidate.
    OptimalityProven,
    /// The run proved that the problem is infeasible.
    InfeasibilityProven,
    /// The run stopped on a search limit (time, solutions, ...); the
    /// string names the limit.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// A finished run: result, why it stopped, and what it cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<C> {
    result: SolverResult<C>,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<C> SolverOutcome<C> {
    /// An optimality-proven outcome.
    #[inline]
    pub fn optimal(candidate: C, statistics: SearchStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(candidate),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// An infeasibility-proven outcome.
    #[inline]
    pub fn infeasible(statistics: SearchStatistics) -> Self {
        Self {
            result: SolverResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    /// An aborted outcome. With a candidate in hand the result is
    /// `Feasible`; without one it is `Unknown` — never `Infeasible`,
    /// since nothing was proven.
    #[inline]
    pub fn aborted<R>(candidate: Option<C>, reason: R, statistics: SearchStatistics) -> Self
    where
        R: Into<String>,
    {
        let result = match candidate {
            Some(candidate) => SolverResult::Feasible(candidate),
            None => SolverResult::Unknown,
        };
        Self {
            result,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// The solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<C> {
        &self.result
    }

    /// The termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// The run statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.result, SolverResult::Infeasible)
    }

    #[inline]
    pub fn has_candidate(&self) -> bool {
        self.result.candidate().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SearchStatistics {
        SearchStatistics::default()
    }

    #[test]
    fn test_optimal_outcome_carries_the_candidate() {
        let outcome = SolverOutcome::optimal("layout", stats());
        assert!(outcome.is_optimal());
        assert!(outcome.has_candidate());
        assert_eq!(outcome.result().candidate(), Some(&"layout"));
        assert_eq!(
            *outcome.termination_reason(),
            TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_infeasible_outcome_has_no_candidate() {
        let outcome = SolverOutcome::<&str>::infeasible(stats());
        assert!(outcome.is_infeasible());
        assert!(!outcome.has_candidate());
    }

    #[test]
    fn test_aborted_without_candidate_is_unknown_not_infeasible() {
        let outcome = SolverOutcome::<&str>::aborted(None, "time limit reached", stats());
        assert!(!outcome.is_infeasible());
        assert_eq!(*outcome.result(), SolverResult::Unknown);
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "time limit reached"),
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_aborted_with_candidate_is_feasible() {
        let outcome = SolverOutcome::aborted(Some("layout"), "solution limit", stats());
        assert!(!outcome.is_optimal());
        assert!(outcome.has_candidate());
        assert!(matches!(outcome.result(), SolverResult::Feasible(_)));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(format!("{}", SolverResult::<&str>::Unknown), "Unknown");
        assert_eq!(
            format!("{}", TerminationReason::Aborted("node budget".to_owned())),
            "Aborted: node budget"
        );
    }
}
