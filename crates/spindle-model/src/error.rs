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

//! Fatal validation errors.
//!
//! These are reported before any search state is constructed. An
//! infeasible problem is *not* an error: it surfaces as an empty design
//! stream or an `Infeasible` solver result.

use thiserror::Error;

/// A problem definition the engines refuse to search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    /// A sequence of length zero has no layout.
    #[error("sequence length must be positive")]
    ZeroLength,

    /// A grid of side zero has no layout.
    #[error("grid side length must be positive")]
    ZeroSide,

    /// The hollow shaft cannot be wider than the grid itself.
    #[error("shaft width {shaft_width} exceeds grid side length {side}")]
    ShaftTooWide { side: usize, shaft_width: usize },

    /// A usage limit names a variant the catalog does not contain.
    #[error("unknown variant `{0}` in usage limits")]
    UnknownVariant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DesignError::ZeroLength.to_string(),
            "sequence length must be positive"
        );
        assert_eq!(
            DesignError::ShaftTooWide {
                side: 3,
                shaft_width: 5
            }
            .to_string(),
            "shaft width 5 exceeds grid side length 3"
        );
        assert_eq!(
            DesignError::UnknownVariant("adamantium".to_owned()).to_string(),
            "unknown variant `adamantium` in usage limits"
        );
    }
}
