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

//! The solver-delegated sequence designer.
//!
//! Encoding: one variable per (slot, variant) in `[0, 1]`, one
//! pick-exactly-one row per slot, one capacity row per limited variant,
//! and the linear objective over all variables. The constraint matrix
//! is a transportation structure (slots demand one part each, limited
//! variants supply at most their cap), so basic optimal solutions of
//! the relaxation are integral and the LP solves the combinatorial
//! problem exactly — no branching needed on top of the external solver.

use crate::linear::LinearObjective;
use good_lp::{constraint, default_solver, variable, variables, Expression, ResolutionError,
    Solution, SolverModel};
use spindle_core::num::fitness::Fitness;
use spindle_model::catalog::Catalog;
use spindle_model::constraints::UsageLimits;
use spindle_model::error::DesignError;
use spindle_model::index::VariantIndex;
use spindle_model::layout::SequenceLayout;
use spindle_search::result::SolverOutcome;
use spindle_search::stats::SearchStatistics;

/// A sequence designer that delegates the search to an external LP
/// solver and returns a single outcome instead of a stream.
///
/// Owns its inputs so a solve can be moved onto a helper thread for
/// time-limited runs.
#[derive(Clone, Debug)]
pub struct LpSequenceDesigner {
    catalog: Catalog,
    objective: LinearObjective,
    limits: UsageLimits,
}

impl LpSequenceDesigner {
    /// Creates a designer over a catalog, a linear objective built from
    /// the same catalog, and usage limits validated against it.
    pub fn new(catalog: Catalog, objective: LinearObjective, limits: UsageLimits) -> Self {
        Self {
            catalog,
            objective,
            limits,
        }
    }

    /// The catalog this designer draws parts from.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Solves the assignment problem for the given length, blocking
    /// until the external solver halts.
    pub fn solve(&self, length: usize) -> Result<SolverOutcome<SequenceLayout>, DesignError> {
        if length == 0 {
            return Err(DesignError::ZeroLength);
        }
        Ok(self.solve_validated(length))
    }

    /// Like `solve`, but gives up after `budget` and reports an
    /// `Unknown` outcome instead of blocking indefinitely. The solve
    /// runs on a helper thread; a solver that beats the clock produces
    /// the same outcome as `solve`.
    pub fn solve_with_time_limit(
        &self,
        length: usize,
        budget: std::time::Duration,
    ) -> Result<SolverOutcome<SequenceLayout>, DesignError> {
        if length == 0 {
            return Err(DesignError::ZeroLength);
        }

        let designer = self.clone();
        let (sender, receiver) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            // The receiver may be gone if the budget elapsed; the
            // result is then discarded with the detached thread.
            let _ = sender.send(designer.solve_validated(length));
        });

        match receiver.recv_timeout(budget) {
            Ok(outcome) => Ok(outcome),
            Err(_) => {
                let mut stats = SearchStatistics::default();
                stats.set_total_time(budget);
                Ok(SolverOutcome::aborted(None, "time limit reached", stats))
            }
        }
    }

    fn solve_validated(&self, length: usize) -> SolverOutcome<SequenceLayout> {
        let start_time = std::time::Instant::now();
        let mut stats = SearchStatistics::default();

        let mut vars = variables!();
        let assignment: Vec<Vec<good_lp::Variable>> = (0..length)
            .map(|_| {
                (0..self.catalog.len())
                    .map(|_| vars.add(variable().min(0.0).max(1.0)))
                    .collect()
            })
            .collect();

        let mut objective = Expression::default();
        for (slot, row) in assignment.iter().enumerate() {
            for (raw, &var) in row.iter().enumerate() {
                objective += self.objective.coefficient(slot, VariantIndex::new(raw)) * var;
            }
        }

        let mut model = vars.maximise(objective).using(default_solver);

        for row in &assignment {
            let picked: Expression = row.iter().map(|&v| Expression::from(v)).sum();
            model = model.with(constraint!(picked == 1.0));
        }

        for variant in self.catalog.indices() {
            if let Some(limit) = self.limits.limit(variant) {
                let used: Expression = assignment
                    .iter()
                    .map(|row| Expression::from(row[variant.get()]))
                    .sum();
                model = model.with(constraint!(used <= f64::from(limit)));
            }
        }

        match model.solve() {
            Ok(solution) => {
                // Basic optimal solutions of the transportation
                // relaxation are integral; read each slot's picked
                // variant off the largest variable value.
                let mut picked_variants = Vec::with_capacity(length);
                let mut total = 0.0;
                for (slot, row) in assignment.iter().enumerate() {
                    let mut best_raw = 0;
                    let mut best_value = f64::NEG_INFINITY;
                    for (raw, &var) in row.iter().enumerate() {
                        let value = solution.value(var);
                        if value > best_value {
                            best_value = value;
                            best_raw = raw;
                        }
                    }
                    total += self.objective.coefficient(slot, VariantIndex::new(best_raw));
                    picked_variants.push(VariantIndex::new(best_raw));
                }

                stats.on_solution_found();
                stats.set_total_time(start_time.elapsed());
                let layout = SequenceLayout::new(picked_variants, Fitness::new(total));
                SolverOutcome::optimal(layout, stats)
            }
            Err(ResolutionError::Infeasible) => {
                stats.set_total_time(start_time.elapsed());
                SolverOutcome::infeasible(stats)
            }
            Err(error) => {
                stats.set_total_time(start_time.elapsed());
                SolverOutcome::aborted(None, error.to_string(), stats)
            }
        }
    }
}
