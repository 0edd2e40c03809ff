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

//! # Search Monitor Trait
//!
//! A monitor observes a running search and may ask it to stop. The
//! engines call `on_step` on every driver iteration and consult
//! `search_command` before taking the next decision; a `Terminate`
//! answer ends the run cleanly (the stream simply stops, with every
//! already-yielded candidate untouched).

use spindle_core::num::fitness::Fitness;

/// What the search should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    /// Keep searching.
    Continue,
    /// Stop the search; the string names the reason.
    Terminate(String),
}

/// An observer attached to one search run.
pub trait SearchMonitor {
    /// The name of this monitor.
    fn name(&self) -> &str;

    /// Called once before the first decision is taken.
    fn on_enter_search(&mut self);

    /// Called once after the run has ended, for any reason.
    fn on_exit_search(&mut self);

    /// Called on every driver iteration. Must be cheap.
    fn on_step(&mut self);

    /// Called whenever the run improves on its incumbent.
    fn on_solution_found(&mut self, fitness: Fitness);

    /// Polled before each decision; `Terminate` stops the run.
    fn search_command(&self) -> SearchCommand;
}

impl std::fmt::Debug for dyn SearchMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
