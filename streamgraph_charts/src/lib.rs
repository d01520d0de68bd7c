// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stream graph chart layer for `streamgraph_core`.
//!
//! This crate turns the output of `streamgraph_transforms` into retained marks:
//! - **Scales** map pivots and stacked fractions into screen coordinates.
//! - **Bands** are closed paths, one per category, with stable ids.
//! - **Guides** (axes, legend) are generated as ordinary marks.
//! - **Hover** is driven by a [`HoverController`] through a host-supplied [`StreamView`].
//!
//! [`StreamGraph`] ties these together around a [`streamgraph_core::Scene`], so a host only
//! needs to render diffs and forward pointer events.
//!
//! Text shaping and layout are out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod axis;
mod color;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod interaction;
mod labels;
mod legend;
mod measure;
mod rule_mark;
mod scale;
mod stream_mark;
#[cfg(test)]
mod stream_tests;
mod streamgraph;
mod tooltip;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, StrokeStyle, TickFormatter};
pub use color::{ColorFn, ColorScale, DEFAULT_PALETTE, LegendBounds, css_color, series_colors};
pub use format::{
    format_fixed, format_frequency, format_percent_tick, format_pivot, format_tick_with_step,
};
pub use geometry::{ChartGeom, StreamScales, calc_scales};
pub use interaction::{HoverController, HoverInfo, SceneView, StreamView};
pub use labels::meaningful_labels;
pub use legend::{LegendItem, LegendSwatchesSpec, legend_items};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use rule_mark::RuleMarkSpec;
pub use scale::ScaleLinear;
pub use stream_mark::{BAND_OPACITY, StreamMarkSpec, band_path};
pub use streamgraph::{
    ID_GROUP_STRIDE, INDICATOR_STROKE, INDICATOR_WIDTH, StreamGraph, StreamGraphSpec,
};
pub use tooltip::{Tooltip, TooltipStyle, escape_html};
pub use z_order::*;
