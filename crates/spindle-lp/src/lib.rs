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

//! Spindle-LP: the solver-delegated sequence backend
//!
//! An alternative to the streaming branch-and-bound engine for the
//! sequence problem: the layout is encoded as a linear assignment model
//! and handed to an external LP solver in one blocking call. No
//! intermediate candidates, a single `SolverOutcome` — faster on the
//! problems it can express, which is a strict subset of what the
//! streaming engine scores: contributions must be linear per (slot,
//! variant), with no coupling through the assigned prefix.
//!
//! Module map
//! - `linear`: the per-slot, per-variant coefficient table.
//! - `solver`: model construction, the solve call, status mapping.

pub mod linear;
pub mod solver;
