// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;

/// Input rejected at the stream graph boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// The matrix has no categories.
    #[error("frequency matrix has no categories")]
    EmptyMatrix,
    /// The categories have no values (zero pivots).
    #[error("frequency matrix has no pivots")]
    NoPivots,
    /// A category's value sequence length differs from the first category's.
    #[error("category `{category}` has {found} values, expected {expected}")]
    LengthMismatch {
        /// Offending category.
        category: String,
        /// Length of the first category's sequence.
        expected: usize,
        /// Length of this category's sequence.
        found: usize,
    },
    /// A frequency value is `NaN` or infinite.
    #[error("category `{category}` has a non-finite value at pivot {pivot}")]
    NonFinite {
        /// Offending category.
        category: String,
        /// Pivot index of the value.
        pivot: usize,
    },
    /// A pivot value is `NaN` or infinite.
    #[error("pivot {index} is not finite")]
    NonFinitePivot {
        /// Pivot index.
        index: usize,
    },
    /// The pivot count does not match the matrix sequence length.
    #[error("expected {expected} pivots, found {found}")]
    PivotCountMismatch {
        /// Matrix sequence length.
        expected: usize,
        /// Supplied pivot count.
        found: usize,
    },
    /// An ordered category is not a key of the matrix.
    #[error("category `{0}` is not in the frequency matrix")]
    UnknownCategory(String),
    /// An ordered category appears more than once.
    #[error("category `{0}` appears more than once")]
    DuplicateCategory(String),
    /// A matrix category is absent from the ordering.
    #[error("category `{0}` is missing from the ordering")]
    MissingCategory(String),
    /// A continuous color scale has no legend bounds for a category.
    #[error("no legend bounds for category `{0}`")]
    MissingLegendBounds(String),
}
