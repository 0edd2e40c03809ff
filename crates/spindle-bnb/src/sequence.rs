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

//! The rotor blade sequence engine.
//!
//! `SequenceDesigner` validates a problem once; each call to
//! `design_stream` starts an independent run returning a lazy iterator
//! of strictly improving `SequenceLayout`s. The run is a depth-first
//! search over slots, pruned by usage limits at enqueue time and by the
//! objective's admissible upper bound at descent time. All search state
//! (the decision stack, the assigned prefix, the score trail, the
//! incumbent) lives in the stream object, so construction suspends
//! after each improvement and resumes exactly there on the next pull.

use crate::decision::Decision;
use crate::eval::objective::SequenceObjective;
use crate::stack::SearchStack;
use crate::state::SearchState;
use spindle_core::num::fitness::Fitness;
use spindle_model::catalog::Catalog;
use spindle_model::complexity::Complexity;
use spindle_model::constraints::UsageLimits;
use spindle_model::error::DesignError;
use spindle_model::index::VariantIndex;
use spindle_model::layout::SequenceLayout;
use spindle_search::monitor::no_op::NoOperationMonitor;
use spindle_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
use spindle_search::stats::SearchStatistics;

/// A validated sequence design problem: catalog, objective, limits.
///
/// The designer is cheap to keep around; every `design_stream` call
/// starts a fresh, independent run against the same read-only inputs.
#[derive(Clone, Debug)]
pub struct SequenceDesigner<'a, O> {
    catalog: &'a Catalog,
    objective: O,
    limits: UsageLimits,
}

impl<'a, O> SequenceDesigner<'a, O>
where
    O: SequenceObjective,
{
    /// Creates a designer over a catalog, an objective, and usage
    /// limits (already validated against the same catalog).
    pub fn new(catalog: &'a Catalog, objective: O, limits: UsageLimits) -> Self {
        Self {
            catalog,
            objective,
            limits,
        }
    }

    /// The catalog this designer draws parts from.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Gauges the raw assignment space of a run of the given length.
    pub fn complexity(&self, length: usize) -> Complexity {
        Complexity::new(self.catalog.len(), length)
    }

    /// Starts an unmonitored design run.
    pub fn design_stream(
        &self,
        length: usize,
    ) -> Result<SequenceDesignStream<'_, O, NoOperationMonitor>, DesignError> {
        self.design_stream_monitored(length, NoOperationMonitor::new())
    }

    /// Starts a design run observed by `monitor`.
    pub fn design_stream_monitored<M>(
        &self,
        length: usize,
        monitor: M,
    ) -> Result<SequenceDesignStream<'_, O, M>, DesignError>
    where
        M: SearchMonitor,
    {
        if length == 0 {
            return Err(DesignError::ZeroLength);
        }
        Ok(SequenceDesignStream::new(
            self.catalog,
            &self.objective,
            &self.limits,
            length,
            monitor,
        ))
    }

    /// Runs a stream to exhaustion and returns the best layout found,
    /// or `None` if the limits admit no complete sequence.
    pub fn design(&self, length: usize) -> Result<Option<SequenceLayout>, DesignError> {
        Ok(self.design_stream(length)?.last())
    }
}

/// A running sequence search, pulled as an iterator.
///
/// Each yielded layout strictly improves on every earlier one; the last
/// layout before exhaustion is the best the run visited, and — absent a
/// terminating monitor — the optimum under the given limits. The stream
/// is finite and non-restartable; once it returns `None` it stays
/// exhausted.
#[derive(Debug)]
pub struct SequenceDesignStream<'d, O, M> {
    catalog: &'d Catalog,
    objective: &'d O,
    limits: &'d UsageLimits,
    length: usize,
    stack: SearchStack,
    state: SearchState,
    best: Fitness,
    stats: SearchStatistics,
    monitor: M,
    start_time: std::time::Instant,
    done: bool,
}

impl<'d, O, M> SequenceDesignStream<'d, O, M>
where
    O: SequenceObjective,
    M: SearchMonitor,
{
    fn new(
        catalog: &'d Catalog,
        objective: &'d O,
        limits: &'d UsageLimits,
        length: usize,
        mut monitor: M,
    ) -> Self {
        debug_assert!(length > 0, "called `SequenceDesignStream::new` with zero length");

        monitor.on_enter_search();
        let mut stream = Self {
            catalog,
            objective,
            limits,
            length,
            stack: SearchStack::preallocated(length, catalog.len()),
            state: SearchState::new(catalog.len(), length),
            best: Fitness::NEG_INFINITY,
            stats: SearchStatistics::default(),
            monitor,
            start_time: std::time::Instant::now(),
            done: false,
        };

        if stream.limits.provably_infeasible(length) {
            stream.finish();
        } else {
            stream.stack.push_frame();
            stream.stats.on_node_explored();
            stream.enqueue_decisions();
        }
        stream
    }

    /// Statistics of the run so far.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.stats
    }

    /// The incumbent fitness, if any candidate has been found.
    #[inline]
    pub fn best_fitness(&self) -> Option<Fitness> {
        if self.best == Fitness::NEG_INFINITY {
            None
        } else {
            Some(self.best)
        }
    }

    /// Returns `true` once the run has ended.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.done
    }

    /// Enqueues every limit-admissible variant for the next slot, in
    /// reverse catalog order so the LIFO pop explores catalog order.
    fn enqueue_decisions(&mut self) {
        let slot = self.state.num_assigned();
        for raw in (0..self.catalog.len()).rev() {
            let variant = VariantIndex::new(raw);
            if self
                .limits
                .admits_one_more(variant, self.state.count(variant))
            {
                self.stack.push(Decision::new(slot, variant));
            }
        }
    }

    fn backtrack(&mut self) {
        self.stats.on_backtrack();
        self.stack.pop_frame();
        self.state.unassign();
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            self.stats.set_total_time(self.start_time.elapsed());
            self.monitor.on_exit_search();
        }
    }
}

impl<O, M> Iterator for SequenceDesignStream<'_, O, M>
where
    O: SequenceObjective,
    M: SearchMonitor,
{
    type Item = SequenceLayout;

    fn next(&mut self) -> Option<SequenceLayout> {
        if self.done {
            return None;
        }

        loop {
            self.stats.on_step();
            self.monitor.on_step();
            if let SearchCommand::Terminate(_) = self.monitor.search_command() {
                self.finish();
                return None;
            }

            if self.stack.is_current_level_empty() {
                if self.stack.depth() <= 1 {
                    // Root exhausted: every feasible completion has been
                    // visited or dominated.
                    self.finish();
                    return None;
                }
                self.backtrack();
                continue;
            }

            let Some(decision) = self.stack.pop() else {
                self.finish();
                return None;
            };
            self.stats.on_decision_taken();

            let frame = self.objective.extend(
                self.catalog,
                self.length,
                decision.position(),
                decision.variant(),
                self.state.current_frame(),
            );

            if self.state.num_assigned() + 1 == self.length {
                // A complete candidate; yield only strict improvements.
                let fitness = self.objective.finalize(&frame);
                if fitness > self.best {
                    self.best = fitness;
                    self.stats.on_solution_found();
                    self.monitor.on_solution_found(fitness);

                    let mut variants = self.state.assignments().to_vec();
                    variants.push(decision.variant());
                    return Some(SequenceLayout::new(variants, fitness));
                }
                self.stats.on_pruning_bound();
                continue;
            }

            self.state.assign(decision.variant(), frame);
            self.stack.push_frame();
            self.stats.on_node_explored();

            let remaining = self.length - self.state.num_assigned();
            let bound = self
                .objective
                .upper_bound(self.catalog, self.state.current_frame(), remaining);
            if bound <= self.best {
                // No completion of this prefix can strictly improve.
                self.stats.on_pruning_bound();
                self.backtrack();
                continue;
            }

            self.enqueue_decisions();
        }
    }
}
