// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category ordering by net change.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::{FrequencyMatrix, InvalidInputError};

/// A permutation of a matrix's categories, bottom band first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedCategories(Vec<String>);

impl OrderedCategories {
    /// Wraps an explicit ordering.
    ///
    /// The ordering is checked against the matrix when it is stacked.
    pub fn new(names: impl Into<Vec<String>>) -> Self {
        Self(names.into())
    }

    /// Category names, bottom band first.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no categories.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates names, bottom band first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Unwraps the names.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Orders categories by `value[last] - value[0]`, largest increase first.
///
/// The first category is drawn as the bottom band, so growing categories sit at the base of
/// the stream graph. Categories with equal change keep their insertion order.
pub fn order_categories(matrix: &FrequencyMatrix) -> Result<OrderedCategories, InvalidInputError> {
    let n_pivots = matrix.validate()?;
    let last = n_pivots - 1;

    let mut keyed: Vec<(usize, f64, &str)> = matrix
        .iter()
        .enumerate()
        .map(|(i, (name, values))| (i, values[last] - values[0], name))
        .collect();

    // Validation guarantees finite deltas; the index key pins down ties explicitly.
    keyed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    tracing::debug!(
        categories = keyed.len(),
        n_pivots,
        "ordered stream categories by net change"
    );

    Ok(OrderedCategories(
        keyed.into_iter().map(|(_, _, name)| String::from(name)).collect(),
    ))
}
