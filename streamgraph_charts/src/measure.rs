// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label width estimates for the legend.
//!
//! The chart emits unshaped text marks, so the legend sizes its columns from a [`TextMeasurer`]
//! instead of real glyph metrics. Band labels are short (clade names or `0.00 - 0.10` ranges),
//! which keeps the estimate close enough to lay out columns without overlap.

/// Estimates the extent of a legend label.
pub trait TextMeasurer {
    /// Returns `(width, height)` of `text` at `font_size`, in scene units.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Counts characters at 0.6em each; the height is one em.
///
/// This is what [`StreamGraph`](crate::StreamGraph) uses for its legend.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}
