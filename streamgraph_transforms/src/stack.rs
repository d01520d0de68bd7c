// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cumulative band stacking.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::{FrequencyMatrix, InvalidInputError, OrderedCategories};

/// The vertical extent of one band at one pivot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BandPoint {
    /// Bottom of the band (the previous band's top, or `0`).
    pub lower: f64,
    /// Top of the band.
    pub upper: f64,
}

impl BandPoint {
    /// The band's own value at this pivot (`upper - lower`).
    pub fn frequency(&self) -> f64 {
        self.upper - self.lower
    }
}

/// One category's band across all pivots.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    category: String,
    points: Vec<BandPoint>,
}

impl Band {
    /// The category this band draws.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// One point per pivot.
    pub fn points(&self) -> &[BandPoint] {
        &self.points
    }

    /// The point at pivot `j`.
    pub fn point(&self, j: usize) -> Option<BandPoint> {
        self.points.get(j).copied()
    }
}

/// Stacked bands in drawing order, bottom band first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackedSeries {
    bands: Vec<Band>,
    n_pivots: usize,
}

impl StackedSeries {
    /// Bands, bottom first.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Band at `index`.
    pub fn band(&self, index: usize) -> Option<&Band> {
        self.bands.get(index)
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Whether there are no bands.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Number of pivots per band.
    pub fn n_pivots(&self) -> usize {
        self.n_pivots
    }

    /// Top of the stack at pivot `j` (the column total).
    pub fn total_at(&self, j: usize) -> f64 {
        self.bands
            .last()
            .and_then(|b| b.point(j))
            .map_or(0.0, |p| p.upper)
    }
}

/// Stacks `matrix` in `ordered` order.
///
/// For category `i` and pivot `j`, `lower = floor[j]` and `upper = lower + matrix[c_i][j]`,
/// where `floor[j]` starts at `0` and becomes the previous band's `upper`. Work is done
/// category-major, one running floor per pivot.
///
/// Negative values are not rejected; they produce a band whose top lies below its bottom.
pub fn stack_series(
    ordered: &OrderedCategories,
    n_pivots: usize,
    matrix: &FrequencyMatrix,
) -> Result<StackedSeries, InvalidInputError> {
    let expected = matrix.validate()?;
    if n_pivots != expected {
        return Err(InvalidInputError::PivotCountMismatch {
            expected,
            found: n_pivots,
        });
    }
    check_permutation(ordered, matrix)?;

    let mut floor = vec![0.0_f64; n_pivots];
    let mut bands = Vec::with_capacity(ordered.len());
    let mut negative = 0_usize;

    for name in ordered.iter() {
        let Some(values) = matrix.get(name) else {
            return Err(InvalidInputError::UnknownCategory(name.into()));
        };
        let mut points = Vec::with_capacity(n_pivots);
        for (f, &v) in floor.iter_mut().zip(values) {
            if v < 0.0 {
                negative += 1;
            }
            let lower = *f;
            let upper = lower + v;
            *f = upper;
            points.push(BandPoint { lower, upper });
        }
        bands.push(Band {
            category: name.into(),
            points,
        });
    }

    if negative > 0 {
        tracing::warn!(negative, "negative frequencies stack as inverted bands");
    }
    tracing::debug!(bands = bands.len(), n_pivots, "stacked stream series");

    Ok(StackedSeries { bands, n_pivots })
}

fn check_permutation(
    ordered: &OrderedCategories,
    matrix: &FrequencyMatrix,
) -> Result<(), InvalidInputError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(ordered.len());
    for name in ordered.iter() {
        if !matrix.contains(name) {
            return Err(InvalidInputError::UnknownCategory(name.into()));
        }
        if !seen.insert(name) {
            return Err(InvalidInputError::DuplicateCategory(name.into()));
        }
    }
    if let Some(missing) = matrix
        .categories()
        .iter()
        .find(|c| !seen.contains(c.as_str()))
    {
        return Err(InvalidInputError::MissingCategory(missing.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::order_categories;

    fn pairs(band: &Band) -> Vec<(f64, f64)> {
        band.points().iter().map(|p| (p.lower, p.upper)).collect()
    }

    #[test]
    fn two_series_stack_bottom_up() {
        let m = FrequencyMatrix::from_rows([("A", vec![1.0, 3.0]), ("B", vec![2.0, 2.0])]);
        let o = order_categories(&m).unwrap();
        let s = stack_series(&o, 2, &m).unwrap();

        assert_eq!(s.len(), 2);
        assert_eq!(s.bands()[0].category(), "A");
        assert_eq!(pairs(&s.bands()[0]), vec![(0.0, 1.0), (0.0, 3.0)]);
        assert_eq!(s.bands()[1].category(), "B");
        assert_eq!(pairs(&s.bands()[1]), vec![(1.0, 3.0), (3.0, 5.0)]);
        assert_eq!(s.total_at(1), 5.0);
    }

    #[test]
    fn stack_follows_the_given_order() {
        let m = FrequencyMatrix::from_rows([("A", vec![1.0, 3.0]), ("B", vec![2.0, 2.0])]);
        let o = OrderedCategories::new(vec![String::from("B"), String::from("A")]);
        let s = stack_series(&o, 2, &m).unwrap();
        assert_eq!(pairs(&s.bands()[0]), vec![(0.0, 2.0), (0.0, 2.0)]);
        assert_eq!(pairs(&s.bands()[1]), vec![(2.0, 3.0), (2.0, 5.0)]);
    }

    #[test]
    fn bands_tile_each_column() {
        let m = FrequencyMatrix::from_rows([
            ("a", vec![0.10, 0.20, 0.05, 0.40]),
            ("b", vec![0.30, 0.10, 0.25, 0.05]),
            ("c", vec![0.15, 0.35, 0.50, 0.20]),
            ("d", vec![0.45, 0.35, 0.20, 0.35]),
        ]);
        let o = order_categories(&m).unwrap();
        let s = stack_series(&o, 4, &m).unwrap();

        for j in 0..4 {
            assert_eq!(s.bands()[0].points()[j].lower, 0.0);
            let mut prev_upper = 0.0;
            for band in s.bands() {
                let p = band.points()[j];
                assert_eq!(p.lower, prev_upper, "bands must be contiguous");
                assert!(p.upper >= p.lower, "non-negative input never inverts");
                prev_upper = p.upper;
            }
            let total = m.column_total(j);
            assert!((s.total_at(j) - total).abs() < 1e-12);
            let summed: f64 = s.bands().iter().map(|b| b.points()[j].frequency()).sum();
            assert!((summed - total).abs() < 1e-12);
        }
    }

    #[test]
    fn negative_values_invert_the_band() {
        let m = FrequencyMatrix::from_rows([("a", vec![0.5]), ("b", vec![-0.2])]);
        let o = OrderedCategories::new(vec![String::from("a"), String::from("b")]);
        let s = stack_series(&o, 1, &m).unwrap();
        let p = s.bands()[1].points()[0];
        assert_eq!(p.lower, 0.5);
        assert!(p.upper < p.lower);
    }

    #[test]
    fn rejects_orderings_that_are_not_permutations() {
        let m = FrequencyMatrix::from_rows([("a", vec![1.0]), ("b", vec![1.0])]);
        let o = |names: &[&str]| OrderedCategories::new(names.iter().map(|s| String::from(*s)).collect::<Vec<_>>());

        assert_eq!(
            stack_series(&o(&["a", "x"]), 1, &m),
            Err(InvalidInputError::UnknownCategory("x".into()))
        );
        assert_eq!(
            stack_series(&o(&["a", "a"]), 1, &m),
            Err(InvalidInputError::DuplicateCategory("a".into()))
        );
        assert_eq!(
            stack_series(&o(&["b"]), 1, &m),
            Err(InvalidInputError::MissingCategory("a".into()))
        );
    }

    #[test]
    fn rejects_pivot_count_mismatch() {
        let m = FrequencyMatrix::from_rows([("a", vec![1.0, 2.0])]);
        let o = order_categories(&m).unwrap();
        assert_eq!(
            stack_series(&o, 3, &m),
            Err(InvalidInputError::PivotCountMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
