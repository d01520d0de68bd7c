// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Renderers sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Stream bands.
pub const SERIES_FILL: i32 = 0;
/// The vertical pivot indicator drawn over the bands.
pub const PIVOT_INDICATOR: i32 = 15;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
