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

//! Spindle-BnB: streaming branch-and-bound design engines
//!
//! Depth-first, bound-pruned construction of turbine part layouts,
//! exposed as lazy iterators of strictly improving candidates. A stream
//! suspends after each improvement and resumes exactly where it stopped
//! on the next pull; the last candidate a stream ever yields is the best
//! layout the search visited — provably optimal once the stream is
//! exhausted without a monitor having stopped it.
//!
//! Core flow
//! - Build a read-only `spindle_model::catalog::Catalog` and
//!   `spindle_model::constraints::UsageLimits`.
//! - Pick an objective from `eval` (or implement the trait yourself).
//! - Create a `sequence::SequenceDesigner` or `grid::GridDesigner` and
//!   pull layouts from its design stream.
//!
//! Assumptions and guarantees
//! - Objectives must be pure and their `upper_bound` admissible (never
//!   below the best reachable completion); pruning relies on this.
//! - Ties in fitness go to the first candidate discovered; later equal
//!   candidates are not re-yielded.
//! - An infeasible limit set produces an empty stream, not an error.
//!
//! Module map
//! - `sequence`: the rotor blade sequence engine.
//! - `grid`: the dynamo coil grid engine.
//! - `eval`: objective traits and stock evaluators.
//! - `decision`: one (position, variant) branching step.
//! - `stack`: the frame-structured pending-decision stack.
//! - `state`: per-run assignment, counts, and score trail.

pub mod decision;
pub mod eval;
pub mod grid;
pub mod sequence;
pub mod stack;
pub mod state;
