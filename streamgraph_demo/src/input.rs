// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON input for the demo.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use peniko::color::palette::css;
use serde::Deserialize;
use streamgraph_charts::{ColorScale, LegendBounds};
use streamgraph_transforms::{FrequencyMatrix, InvalidInputError, Pivots};

/// A stream graph dataset.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct StreamInput {
    /// What the categories are, e.g. `"clade"`.
    #[serde(default = "default_color_by")]
    pub(crate) color_by: String,
    /// Pivot values, ascending.
    pub(crate) pivots: Vec<f64>,
    /// One row per category.
    pub(crate) categories: Vec<CategoryInput>,
    /// Present when the categories are ranges of a continuous value.
    #[serde(default)]
    pub(crate) legend_bounds: Option<BoundsInput>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CategoryInput {
    pub(crate) name: String,
    pub(crate) values: Vec<f64>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct BoundsInput {
    pub(crate) lower: BTreeMap<String, f64>,
    pub(crate) upper: BTreeMap<String, f64>,
}

fn default_color_by() -> String {
    "category".to_string()
}

impl StreamInput {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse '{}'", path.display()))
    }

    /// Clade frequencies over seven seasons.
    pub(crate) fn sample() -> Self {
        let rows: [(&str, [f64; 7]); 4] = [
            ("3c2.A", [0.55, 0.45, 0.32, 0.20, 0.12, 0.08, 0.05]),
            ("3c3.A", [0.25, 0.22, 0.18, 0.15, 0.12, 0.10, 0.08]),
            ("A1b", [0.15, 0.25, 0.35, 0.45, 0.50, 0.47, 0.42]),
            ("A2", [0.05, 0.08, 0.15, 0.20, 0.26, 0.35, 0.45]),
        ];
        Self {
            color_by: "clade".to_string(),
            pivots: (2012..=2018).map(f64::from).collect(),
            categories: rows
                .iter()
                .map(|(name, values)| CategoryInput {
                    name: (*name).to_string(),
                    values: values.to_vec(),
                })
                .collect(),
            legend_bounds: None,
        }
    }

    pub(crate) fn matrix(&self) -> Result<FrequencyMatrix, InvalidInputError> {
        let mut seen = HashSet::new();
        let mut matrix = FrequencyMatrix::new();
        for c in &self.categories {
            if !seen.insert(c.name.as_str()) {
                return Err(InvalidInputError::DuplicateCategory(c.name.clone()));
            }
            matrix.insert(c.name.clone(), c.values.clone());
        }
        Ok(matrix)
    }

    pub(crate) fn pivots(&self) -> Pivots {
        Pivots::new(self.pivots.clone())
    }

    pub(crate) fn color_scale(&self) -> ColorScale {
        match &self.legend_bounds {
            Some(b) => {
                let mut bounds = LegendBounds::new();
                for (name, &lower) in &b.lower {
                    if let Some(&upper) = b.upper.get(name) {
                        bounds.insert(name.clone(), lower, upper);
                    }
                }
                ColorScale::continuous_ramp(css::LIGHT_STEEL_BLUE, css::MIDNIGHT_BLUE, bounds)
            }
            None => ColorScale::from_palette(self.categories.iter().map(|c| c.name.as_str())),
        }
    }
}
