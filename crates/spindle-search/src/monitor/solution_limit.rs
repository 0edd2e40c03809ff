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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use spindle_core::num::fitness::Fitness;

/// A monitor that terminates the search once a number of improving
/// candidates has been found. Useful for "good enough" runs that want
/// the stream's anytime behavior without waiting for the proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionLimitMonitor {
    limit: u64,
    found: u64,
}

impl SolutionLimitMonitor {
    #[inline]
    pub fn new(limit: u64) -> Self {
        Self { limit, found: 0 }
    }

    /// Improving candidates seen so far.
    #[inline]
    pub fn solutions_found(&self) -> u64 {
        self.found
    }
}

impl SearchMonitor for SolutionLimitMonitor {
    fn name(&self) -> &str {
        "SolutionLimitMonitor"
    }

    fn on_enter_search(&mut self) {
        self.found = 0;
    }

    fn on_exit_search(&mut self) {}

    #[inline(always)]
    fn on_step(&mut self) {}

    fn on_solution_found(&mut self, _fitness: Fitness) {
        self.found += 1;
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.found >= self.limit {
            return SearchCommand::Terminate("solution limit reached".to_string());
        }
        SearchCommand::Continue
    }
}
