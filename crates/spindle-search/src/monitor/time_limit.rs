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

//! # Time Limit Monitor
//!
//! Enforces a wall-clock budget on a search. Reading the clock on every
//! step would dominate small search nodes, so elapsed time is only
//! checked when `(steps & clock_check_mask) == 0`; the default mask
//! (`0x3FF`) checks about every 1,024 steps, which bounds the overshoot
//! to well under a millisecond of search work.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use spindle_core::num::fitness::Fitness;

/// A monitor that terminates the search once a time budget is spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    clock_check_mask: u64,
    steps: u64,
    time_limit: std::time::Duration,
    start_time: std::time::Instant,
}

impl TimeLimitMonitor {
    /// Default mask: check the clock every 1,024 steps (2^10).
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0x3FF;

    #[inline]
    pub fn new(time_limit: std::time::Duration) -> Self {
        Self {
            clock_check_mask: Self::DEFAULT_STEP_CLOCK_CHECK_MASK,
            steps: 0,
            time_limit,
            start_time: std::time::Instant::now(),
        }
    }

    /// A monitor with a custom check mask; the mask must be one less
    /// than a power of two.
    #[inline]
    pub fn with_clock_check_mask(time_limit: std::time::Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            steps: 0,
            time_limit,
            start_time: std::time::Instant::now(),
        }
    }
}

impl SearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self) {
        self.start_time = std::time::Instant::now();
        self.steps = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _fitness: Fitness) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if (self.steps & self.clock_check_mask) == 0
            && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_mask_is_power_of_two_minus_one() {
        let mask = TimeLimitMonitor::DEFAULT_STEP_CLOCK_CHECK_MASK;
        assert_eq!(mask & (mask + 1), 0);
    }

    #[test]
    fn test_zero_budget_terminates_at_a_check_point() {
        let mut monitor = TimeLimitMonitor::with_clock_check_mask(Duration::ZERO, 0);
        monitor.on_enter_search();
        monitor.on_step();
        assert_eq!(
            monitor.search_command(),
            SearchCommand::Terminate("time limit reached".to_string())
        );
    }

    #[test]
    fn test_generous_budget_continues() {
        let mut monitor = TimeLimitMonitor::new(Duration::from_secs(3600));
        monitor.on_enter_search();
        monitor.on_step();
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_mask_skips_clock_checks_between_boundaries() {
        // With the default mask, a step count off the boundary must not
        // trigger termination even with a zero budget.
        let mut monitor = TimeLimitMonitor::new(Duration::ZERO);
        monitor.on_enter_search();
        monitor.on_step(); // steps == 1, 1 & 0x3FF != 0
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_enter_search_resets_the_clock() {
        let mut monitor = TimeLimitMonitor::with_clock_check_mask(Duration::from_secs(3600), 0);
        for _ in 0..100 {
            monitor.on_step();
        }
        monitor.on_enter_search();
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }
}
