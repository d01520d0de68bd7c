// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation: a column of color swatches with band labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use streamgraph_core::{Mark, MarkId, PathMark, TextAnchor, TextBaseline, TextMark};

use crate::measure::TextMeasurer;
use crate::z_order;

/// A legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The label shown next to the swatch.
    pub label: String,
    /// The swatch color.
    pub fill: Color,
}

/// Pairs labels with colors by index; the shorter list wins.
pub fn legend_items(labels: &[String], colors: &[Color]) -> Vec<LegendItem> {
    labels
        .iter()
        .zip(colors)
        .map(|(label, &fill)| LegendItem {
            label: label.clone(),
            fill,
        })
        .collect()
}

/// An unpositioned swatch legend.
///
/// Items are laid out top-to-bottom, then left-to-right into `columns`.
#[derive(Clone, Debug)]
pub struct LegendSwatchesSpec {
    /// Stable-id base; swatch `i` is `id_base + 2i`, label `i` is `id_base + 2i + 1`.
    pub id_base: u64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Number of columns.
    pub columns: usize,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatchesSpec {
    /// Creates a one-column legend with 10px swatches.
    pub fn new(id_base: u64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            columns: 1,
            column_gap: 12.0,
            font_size: 10.0,
            text_fill: css::BLACK.into(),
            items,
        }
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    fn row_height(&self) -> f64 {
        self.swatch_size.max(self.font_size)
    }

    fn rows_per_column(&self) -> usize {
        self.items.len().div_ceil(self.columns.max(1)).max(1)
    }

    fn column_width(&self, measurer: &impl TextMeasurer) -> f64 {
        let widest = self
            .items
            .iter()
            .map(|item| measurer.measure(&item.label, self.font_size).0)
            .fold(0.0, f64::max);
        self.swatch_size + self.label_dx + widest
    }

    /// Measures the legend's `(width, height)`.
    pub fn measure(&self, measurer: &impl TextMeasurer) -> (f64, f64) {
        if self.items.is_empty() {
            return (0.0, 0.0);
        }
        let rows = self.rows_per_column();
        let cols = self.items.len().div_ceil(rows);
        let width = cols as f64 * self.column_width(measurer) + (cols - 1) as f64 * self.column_gap;
        let height = rows as f64 * self.row_height() + (rows - 1) as f64 * self.row_gap;
        (width, height)
    }

    /// The legend's bounds when placed at `(x, y)`.
    pub fn bounds(&self, x: f64, y: f64, measurer: &impl TextMeasurer) -> Rect {
        let (w, h) = self.measure(measurer);
        Rect::new(x, y, x + w, y + h)
    }

    /// Generates swatch and label marks with the top-left corner at `(x, y)`.
    pub fn marks(&self, x: f64, y: f64, measurer: &impl TextMeasurer) -> Vec<Mark> {
        let rows = self.rows_per_column();
        let row_height = self.row_height();
        let column_width = self.column_width(measurer);
        let mut out = Vec::with_capacity(2 * self.items.len());

        for (i, item) in self.items.iter().enumerate() {
            let col = i / rows;
            let row = i % rows;
            let x0 = x + col as f64 * (column_width + self.column_gap);
            let y0 = y + row as f64 * (row_height + self.row_gap);
            let swatch_y = y0 + (row_height - self.swatch_size) * 0.5;

            let swatch = Rect::new(x0, swatch_y, x0 + self.swatch_size, swatch_y + self.swatch_size);
            out.push(
                Mark::path(
                    MarkId::from_raw(self.id_base).offset(2 * i as u64),
                    PathMark::filled(swatch.to_path(0.1), item.fill),
                )
                .with_z_index(z_order::LEGEND_SWATCHES)
                .non_interactive(),
            );
            out.push(
                Mark::text(
                    MarkId::from_raw(self.id_base).offset(2 * i as u64 + 1),
                    TextMark {
                        pos: Point::new(x0 + self.swatch_size + self.label_dx, y0 + row_height * 0.5),
                        text: item.label.clone(),
                        font_size: self.font_size,
                        fill: self.text_fill.clone(),
                        anchor: TextAnchor::Start,
                        baseline: TextBaseline::Middle,
                        angle: 0.0,
                    },
                )
                .with_z_index(z_order::LEGEND_LABELS)
                .non_interactive(),
            );
        }
        out
    }
}
