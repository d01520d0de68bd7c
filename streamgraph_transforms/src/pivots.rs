// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pivot sequences.

extern crate alloc;

use alloc::vec::Vec;

use crate::InvalidInputError;

/// The ordered horizontal positions shared by every category's values.
///
/// Date-like pivots are carried as numeric timestamps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pivots(Vec<f64>);

impl Pivots {
    /// Wraps a pivot sequence.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self(values.into())
    }

    /// Pivot values.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of pivots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no pivots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pivot value at `index`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// `(first, last)`, the horizontal domain of the chart.
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((*self.0.first()?, *self.0.last()?))
    }

    /// Checks that the sequence has `expected` finite entries.
    pub fn validate(&self, expected: usize) -> Result<(), InvalidInputError> {
        if self.0.len() != expected {
            return Err(InvalidInputError::PivotCountMismatch {
                expected,
                found: self.0.len(),
            });
        }
        if let Some(index) = self.0.iter().position(|v| !v.is_finite()) {
            return Err(InvalidInputError::NonFinitePivot { index });
        }
        Ok(())
    }

    /// Index of the pivot closest to `value`.
    ///
    /// Ties resolve to the first closest pivot. Returns `None` for an empty sequence.
    pub fn nearest(&self, value: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in self.0.iter().enumerate() {
            let d = (p - value).abs();
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl From<Vec<f64>> for Pivots {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
