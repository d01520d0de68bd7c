// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A drawn stream graph: retained scene, overlays and hover handling.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Shape};
use peniko::Color;
use streamgraph_core::{MarkDiff, MarkId, MarkPayload, Scene};
use streamgraph_transforms::{
    FrequencyMatrix, InvalidInputError, Pivots, order_categories, stack_series,
};

use crate::axis::AxisSpec;
use crate::color::{ColorScale, series_colors};
use crate::format::format_percent_tick;
use crate::geometry::{ChartGeom, calc_scales};
use crate::interaction::{HoverController, SceneView};
use crate::labels::meaningful_labels;
use crate::legend::{LegendSwatchesSpec, legend_items};
use crate::measure::HeuristicTextMeasurer;
use crate::rule_mark::RuleMarkSpec;
use crate::stream_mark::{BAND_OPACITY, StreamMarkSpec};
use crate::tooltip::{Tooltip, TooltipStyle};
use crate::z_order;

/// Id distance between the mark groups of one graph.
///
/// Every group (bands, each axis, the indicator, the legend) allocates consecutive ids from
/// its own base, and no group can hold `2^32` marks, so groups never share an id.
pub const ID_GROUP_STRIDE: u64 = 1 << 32;

const X_AXIS_OFFSET: u64 = ID_GROUP_STRIDE;
const Y_AXIS_OFFSET: u64 = 2 * ID_GROUP_STRIDE;
const INDICATOR_OFFSET: u64 = 3 * ID_GROUP_STRIDE;
const LEGEND_OFFSET: u64 = 4 * ID_GROUP_STRIDE;

/// Pivot indicator stroke width.
pub const INDICATOR_WIDTH: f64 = 5.0;

/// Pivot indicator stroke: white at 90% alpha.
pub const INDICATOR_STROKE: Color = Color::from_rgba8(255, 255, 255, 230);

/// Stream graph configuration.
///
/// Mark ids are allocated from `id_base`: bands first, then the axes, the pivot indicator
/// and the legend, each [`ID_GROUP_STRIDE`] apart.
#[derive(Clone, Debug)]
pub struct StreamGraphSpec {
    /// Chart size and insets.
    pub geom: ChartGeom,
    /// Stable-id base for every generated mark.
    pub id_base: u64,
    /// What the categories are, shown as the first tooltip line (e.g. `"clade"`).
    pub color_by: String,
    /// Resting band opacity.
    pub opacity: f64,
    /// Whether to draw the pivot and frequency axes.
    pub axes: bool,
    /// Whether the frequency axis labels ticks as percentages.
    pub percent_axis: bool,
    /// Top-left corner of the legend, if one is drawn.
    pub legend: Option<Point>,
    /// Legend column count.
    pub legend_columns: usize,
    /// Tooltip placement and look.
    pub tooltip_style: TooltipStyle,
}

impl StreamGraphSpec {
    /// Creates a spec with axes, no legend, [`BAND_OPACITY`] and `color_by = "category"`.
    pub fn new(geom: ChartGeom) -> Self {
        Self {
            geom,
            id_base: 1,
            color_by: String::from("category"),
            opacity: BAND_OPACITY,
            axes: true,
            percent_axis: false,
            legend: None,
            legend_columns: 1,
            tooltip_style: TooltipStyle::default(),
        }
    }

    /// Sets the stable-id base.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Sets the tooltip's category title.
    pub fn with_color_by(mut self, color_by: impl Into<String>) -> Self {
        self.color_by = color_by.into();
        self
    }

    /// Sets the resting band opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Enables or disables the axes.
    pub fn with_axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self
    }

    /// Labels frequency ticks as percentages.
    pub fn with_percent_axis(mut self, percent_axis: bool) -> Self {
        self.percent_axis = percent_axis;
        self
    }

    /// Draws a legend with its top-left corner at `origin`.
    pub fn with_legend(mut self, origin: impl Into<Point>) -> Self {
        self.legend = Some(origin.into());
        self
    }

    /// Sets the legend column count.
    pub fn with_legend_columns(mut self, columns: usize) -> Self {
        self.legend_columns = columns.max(1);
        self
    }

    /// Sets the tooltip style.
    pub fn with_tooltip_style(mut self, style: TooltipStyle) -> Self {
        self.tooltip_style = style;
        self
    }

    fn bands(&self) -> StreamMarkSpec {
        StreamMarkSpec::new(self.id_base).with_opacity(self.opacity)
    }

    fn indicator_id(&self) -> MarkId {
        MarkId::from_raw(self.id_base + INDICATOR_OFFSET)
    }
}

impl Default for StreamGraphSpec {
    fn default() -> Self {
        Self::new(ChartGeom::default())
    }
}

/// A stream graph bound to a retained [`Scene`].
///
/// Each [`StreamGraph::draw`] replaces the previous drawing and its hover handlers. Pointer
/// events are forwarded with band indices; see [`StreamGraph::band_at`] for hit testing.
#[derive(Debug)]
pub struct StreamGraph {
    spec: StreamGraphSpec,
    bands: StreamMarkSpec,
    scene: Scene,
    tooltip: Option<Tooltip>,
    hover: Option<HoverController>,
}

impl StreamGraph {
    /// Creates an empty graph.
    pub fn new(spec: StreamGraphSpec) -> Self {
        let bands = spec.bands();
        Self {
            spec,
            bands,
            scene: Scene::new(),
            tooltip: None,
            hover: None,
        }
    }

    /// The configuration.
    pub fn spec(&self) -> &StreamGraphSpec {
        &self.spec
    }

    /// The retained scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The tooltip currently shown, if any.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// The hover handlers of the current drawing.
    pub fn hover(&self) -> Option<&HoverController> {
        self.hover.as_ref()
    }

    /// Mark id of the pivot indicator.
    pub fn indicator_id(&self) -> MarkId {
        self.spec.indicator_id()
    }

    /// Mark id of band `index`.
    pub fn band_id(&self, index: usize) -> MarkId {
        self.bands.band_id(index)
    }

    /// Draws `matrix` over `pivots`, replacing any previous drawing.
    ///
    /// Input is validated before the scene is touched, so an error leaves the previous drawing
    /// and its handlers in place. Marks that no longer exist exit; redrawing identical input
    /// yields no diffs.
    pub fn draw(
        &mut self,
        matrix: &FrequencyMatrix,
        pivots: &Pivots,
        color_scale: &ColorScale,
    ) -> Result<Vec<MarkDiff>, InvalidInputError> {
        let n_pivots = matrix.validate()?;
        pivots.validate(n_pivots)?;

        let geom = self.spec.geom;
        let scales = calc_scales(&geom, pivots)?;
        let ordered = order_categories(matrix)?;
        let series = stack_series(&ordered, n_pivots, matrix)?;
        let labels = meaningful_labels(&ordered, color_scale)?;
        let colors = series_colors(&ordered, color_scale);

        // Nothing from the previous drawing survives past this point.
        self.hover = None;
        self.tooltip = None;

        let mut marks = Vec::new();
        let base = self.spec.id_base;
        if self.spec.axes {
            marks.extend(
                AxisSpec::bottom(base + X_AXIS_OFFSET)
                    .with_tick_count(scales.num_ticks_x)
                    .marks(&scales.x, geom.height - geom.pad_bottom),
            );
            let mut y_axis = AxisSpec::left(base + Y_AXIS_OFFSET).with_tick_count(scales.num_ticks_y);
            if self.spec.percent_axis {
                y_axis = y_axis.with_tick_formatter(format_percent_tick);
            }
            marks.extend(y_axis.marks(&scales.y, geom.pad_left));
        }

        marks.extend(self.bands.marks(&series, pivots, &scales, &colors));

        let (x0, _) = scales.x.range();
        marks.push(
            RuleMarkSpec::vertical(
                self.spec.indicator_id(),
                x0,
                scales.y.map(1.0),
                scales.y.map(0.0),
            )
            .with_stroke(INDICATOR_STROKE, INDICATOR_WIDTH)
            .with_z_index(z_order::PIVOT_INDICATOR)
            .with_visible(false)
            .mark(),
        );

        if let Some(origin) = self.spec.legend {
            let legend = LegendSwatchesSpec::new(base + LEGEND_OFFSET, legend_items(&labels, &colors))
                .with_columns(self.spec.legend_columns);
            marks.extend(legend.marks(origin.x, origin.y, &HeuristicTextMeasurer));
        }

        let diffs = self.scene.tick(marks);
        tracing::debug!(
            bands = series.len(),
            pivots = n_pivots,
            diffs = diffs.len(),
            "drew stream graph"
        );

        self.hover = Some(
            HoverController::new(series, labels, pivots.clone(), scales, self.spec.color_by.clone())
                .with_resting_opacity(self.spec.opacity)
                .with_tooltip_style(self.spec.tooltip_style.clone()),
        );
        Ok(diffs)
    }

    /// Removes the bands and the pivot indicator and detaches the hover handlers.
    ///
    /// Axes and legend are left in place.
    pub fn remove(&mut self) -> Vec<MarkDiff> {
        let count = self.hover.as_ref().map_or(0, |h| h.series().len());
        let indicator = self.spec.indicator_id();
        let bands = &self.bands;
        let diffs = self
            .scene
            .remove_where(|m| m.id == indicator || bands.band_index(m.id, count).is_some());
        self.hover = None;
        self.tooltip = None;
        tracing::debug!(removed = diffs.len(), "removed stream bands");
        diffs
    }

    /// Pointer entered band `band`.
    pub fn pointer_over(&mut self, band: usize) -> Vec<MarkDiff> {
        let Some(hover) = &self.hover else {
            return Vec::new();
        };
        let mut view = SceneView::new(
            &mut self.scene,
            &self.bands,
            self.spec.indicator_id(),
            &mut self.tooltip,
        );
        hover.pointer_over(band, &mut view);
        view.into_diffs()
    }

    /// Pointer moved to scene x `pointer_x` over band `band`.
    pub fn pointer_move(&mut self, band: usize, pointer_x: f64) -> Vec<MarkDiff> {
        let Some(hover) = &self.hover else {
            return Vec::new();
        };
        let mut view = SceneView::new(
            &mut self.scene,
            &self.bands,
            self.spec.indicator_id(),
            &mut self.tooltip,
        );
        hover.pointer_move(band, pointer_x, &mut view);
        view.into_diffs()
    }

    /// Pointer left band `band`.
    pub fn pointer_out(&mut self, band: usize) -> Vec<MarkDiff> {
        let Some(hover) = &self.hover else {
            return Vec::new();
        };
        let mut view = SceneView::new(
            &mut self.scene,
            &self.bands,
            self.spec.indicator_id(),
            &mut self.tooltip,
        );
        hover.pointer_out(band, &mut view);
        view.into_diffs()
    }

    /// The topmost band under `point`, if any.
    pub fn band_at(&self, point: impl Into<Point>) -> Option<usize> {
        let point = point.into();
        let count = self.hover.as_ref()?.series().len();
        (0..count).rev().find(|&i| {
            let Some(mark) = self.scene.get(self.bands.band_id(i)) else {
                return false;
            };
            match &mark.payload {
                MarkPayload::Path(p) => mark.visible && mark.interactive && p.path.contains(point),
                MarkPayload::Text(_) => false,
            }
        })
    }
}
