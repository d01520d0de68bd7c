// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-category frequency sequences.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::InvalidInputError;

/// Category name -> one frequency value per pivot.
///
/// Categories keep their insertion order. That order carries no meaning for the chart except
/// as the tie-break when two categories change by the same amount (see
/// [`order_categories`](crate::order_categories)).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyMatrix {
    names: Vec<String>,
    rows: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
}

impl FrequencyMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matrix from `(name, values)` pairs in iteration order.
    ///
    /// A repeated name replaces the earlier values but keeps the earlier position.
    pub fn from_rows<N, V>(rows: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<Vec<f64>>,
    {
        let mut m = Self::new();
        for (name, values) in rows {
            m.insert(name, values);
        }
        m
    }

    /// Inserts or replaces a category's values.
    pub fn insert(&mut self, name: impl Into<String>, values: impl Into<Vec<f64>>) {
        let name = name.into();
        let values = values.into();
        if let Some(&i) = self.index.get(&name) {
            self.rows[i] = values;
            return;
        }
        self.index.insert(name.clone(), self.names.len());
        self.names.push(name);
        self.rows.push(values);
    }

    /// Returns a category's values.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.index.get(name).map(|&i| self.rows[i].as_slice())
    }

    /// Whether `name` is a category of this matrix.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Category names in insertion order.
    pub fn categories(&self) -> &[String] {
        &self.names
    }

    /// `(name, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the matrix has no categories.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The sequence length of the first category (`0` for an empty matrix).
    pub fn n_pivots(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Sum of all category values at pivot `j`.
    pub fn column_total(&self, j: usize) -> f64 {
        self.rows.iter().filter_map(|r| r.get(j)).sum()
    }

    /// Checks the shape invariants and returns the common pivot count.
    ///
    /// Requires at least one category, at least one pivot, equal sequence lengths and finite
    /// values.
    pub fn validate(&self) -> Result<usize, InvalidInputError> {
        if self.is_empty() {
            return Err(InvalidInputError::EmptyMatrix);
        }
        let expected = self.n_pivots();
        if expected == 0 {
            return Err(InvalidInputError::NoPivots);
        }
        for (name, values) in self.iter() {
            if values.len() != expected {
                return Err(InvalidInputError::LengthMismatch {
                    category: name.into(),
                    expected,
                    found: values.len(),
                });
            }
            if let Some(pivot) = values.iter().position(|v| !v.is_finite()) {
                return Err(InvalidInputError::NonFinite {
                    category: name.into(),
                    pivot,
                });
            }
        }
        Ok(expected)
    }
}
