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

//! Spindle-Model: the problem data layer
//!
//! Everything the search engines consume but never mutate lives here:
//! the part catalog, adjacency placement rules, per-variant usage
//! limits, the hollow shaft mask, and the candidate layout types the
//! engines yield. The crate has no search logic of its own; it is the
//! read-only contract between a caller and a running design stream.
//!
//! Module map
//! - `catalog`: immutable part variants and the stock catalogs.
//! - `placement`: adjacency rules evaluated over grid neighborhoods.
//! - `constraints`: per-variant usage limits, validated on construction.
//! - `shaft`: the centered hollow region of a grid layout.
//! - `layout`: sequence and grid candidates yielded by the engines.
//! - `complexity`: a log-space gauge of the raw assignment space.
//! - `index`: typed indices for variants and sequence slots.
//! - `error`: fatal validation errors.

pub mod catalog;
pub mod complexity;
pub mod constraints;
pub mod error;
pub mod index;
pub mod layout;
pub mod placement;
pub mod shaft;
