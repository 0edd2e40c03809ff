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

/// Counters and timing collected during one search run.
///
/// The counters are deliberately cheap: plain increments on the hot
/// path, read out once the run is over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Loop iterations of the search driver.
    pub steps: u64,
    /// Nodes of the search tree entered.
    pub nodes_explored: u64,
    /// Decisions taken off the pending stack.
    pub decisions_taken: u64,
    /// Improving candidates found.
    pub solutions_found: u64,
    /// Branches cut because their bound could not beat the incumbent.
    pub prunings_bound: u64,
    /// Branches cut because a constraint was violated.
    pub prunings_infeasible: u64,
    /// Backtracks performed.
    pub backtracks: u64,
    /// Wall time of the run so far.
    pub total_time: std::time::Duration,
}

impl SearchStatistics {
    #[inline(always)]
    pub fn on_step(&mut self) {
        self.steps += 1;
    }

    #[inline(always)]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored += 1;
    }

    #[inline(always)]
    pub fn on_decision_taken(&mut self) {
        self.decisions_taken += 1;
    }

    #[inline(always)]
    pub fn on_solution_found(&mut self) {
        self.solutions_found += 1;
    }

    #[inline(always)]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound += 1;
    }

    #[inline(always)]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible += 1;
    }

    #[inline(always)]
    pub fn on_backtrack(&mut self) {
        self.backtracks += 1;
    }

    #[inline]
    pub fn set_total_time(&mut self, total_time: std::time::Duration) {
        self.total_time = total_time;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Steps: {}", self.steps)?;
        writeln!(f, "  Nodes Explored: {}", self.nodes_explored)?;
        writeln!(f, "  Decisions Taken: {}", self.decisions_taken)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        writeln!(f, "  Prunings (Bound): {}", self.prunings_bound)?;
        writeln!(f, "  Prunings (Infeasible): {}", self.prunings_infeasible)?;
        writeln!(f, "  Backtracks: {}", self.backtracks)?;
        writeln!(
            f,
            "  Total Time (secs): {:.3}",
            self.total_time.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_counters_start_at_zero_and_increment() {
        let mut stats = SearchStatistics::default();
        assert_eq!(stats.nodes_explored, 0);

        stats.on_step();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_decision_taken();
        stats.on_solution_found();
        stats.on_pruning_bound();
        stats.on_pruning_infeasible();
        stats.on_backtrack();

        assert_eq!(stats.steps, 1);
        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.decisions_taken, 1);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.prunings_infeasible, 1);
        assert_eq!(stats.backtracks, 1);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let mut stats = SearchStatistics::default();
        stats.on_solution_found();
        stats.set_total_time(Duration::from_millis(1234));

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Search Statistics:"));
        assert!(rendered.contains("Solutions Found: 1"));
        assert!(rendered.contains("Total Time (secs): 1.234"));
    }
}
