// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer interaction for stream bands.
//!
//! The host owns pointer events and the overlay elements (tooltip, pivot indicator). It
//! forwards band hover events to a [`HoverController`], which drives those elements through
//! the [`StreamView`] handle it is given. Several charts can therefore coexist, each with its
//! own view.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use streamgraph_core::{MarkDiff, MarkId, Scene};
use streamgraph_transforms::{Pivots, StackedSeries};

use crate::geometry::StreamScales;
use crate::rule_mark::move_vertical_rule;
use crate::stream_mark::{BAND_OPACITY, StreamMarkSpec};
use crate::tooltip::{Tooltip, TooltipStyle};

/// Overlay handles a [`HoverController`] drives.
pub trait StreamView {
    /// Sets the opacity of band `band`.
    fn set_band_opacity(&mut self, band: usize, opacity: f64);
    /// Shows the tooltip with the given content and position.
    fn show_tooltip(&mut self, tooltip: &Tooltip);
    /// Hides the tooltip.
    fn hide_tooltip(&mut self);
    /// Shows the vertical pivot indicator at scene x coordinate `x`.
    fn show_pivot_indicator(&mut self, x: f64);
    /// Hides the pivot indicator.
    fn hide_pivot_indicator(&mut self);
}

/// The result of resolving a pointer position over a band.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverInfo {
    /// Hovered band index.
    pub band: usize,
    /// Nearest pivot index.
    pub pivot_index: usize,
    /// The band's own value at that pivot.
    pub frequency: f64,
    /// Scene x coordinate of the pivot.
    pub indicator_x: f64,
    /// Tooltip content and position.
    pub tooltip: Tooltip,
}

/// Event handling for one drawn stream graph.
///
/// Holds the data the handlers need (series, labels, pivots, scales) explicitly, so the
/// handlers always describe the graph that was drawn with them.
#[derive(Clone, Debug)]
pub struct HoverController {
    series: StackedSeries,
    labels: Vec<String>,
    pivots: Pivots,
    scales: StreamScales,
    color_by: String,
    resting_opacity: f64,
    tooltip_style: TooltipStyle,
}

impl HoverController {
    /// Creates a controller; `labels[i]` names band `i`.
    pub fn new(
        series: StackedSeries,
        labels: Vec<String>,
        pivots: Pivots,
        scales: StreamScales,
        color_by: impl Into<String>,
    ) -> Self {
        Self {
            series,
            labels,
            pivots,
            scales,
            color_by: color_by.into(),
            resting_opacity: BAND_OPACITY,
            tooltip_style: TooltipStyle::default(),
        }
    }

    /// Sets the opacity bands return to on pointer-out.
    pub fn with_resting_opacity(mut self, opacity: f64) -> Self {
        self.resting_opacity = opacity;
        self
    }

    /// Sets tooltip placement and look.
    pub fn with_tooltip_style(mut self, style: TooltipStyle) -> Self {
        self.tooltip_style = style;
        self
    }

    /// The stacked series the handlers describe.
    pub fn series(&self) -> &StackedSeries {
        &self.series
    }

    /// Band labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Tooltip placement and look.
    pub fn tooltip_style(&self) -> &TooltipStyle {
        &self.tooltip_style
    }

    /// Resolves a pointer at scene x `pointer_x` over band `band`.
    ///
    /// The pointer is mapped back into pivot space and snapped to the nearest pivot (ties go
    /// to the earlier pivot). Returns `None` for an unknown band.
    pub fn resolve(&self, band: usize, pointer_x: f64) -> Option<HoverInfo> {
        let b = self.series.band(band)?;
        let value = self.scales.x.invert(pointer_x);
        let pivot_index = self.pivots.nearest(value)?;
        let pivot = self.pivots.get(pivot_index)?;
        let frequency = b.point(pivot_index)?.frequency();
        let label = self.labels.get(band).map_or(b.category(), String::as_str);
        tracing::trace!(band, pivot_index, value, "resolved stream hover");
        Some(HoverInfo {
            band,
            pivot_index,
            frequency,
            indicator_x: self.scales.x.map(pivot),
            tooltip: Tooltip::for_band(
                &self.color_by,
                label,
                pivot,
                frequency,
                pointer_x,
                &self.tooltip_style,
            ),
        })
    }

    /// Pointer entered band `band`: highlight it.
    pub fn pointer_over(&self, band: usize, view: &mut impl StreamView) {
        if band < self.series.len() {
            view.set_band_opacity(band, 1.0);
        }
    }

    /// Pointer moved over band `band`: move the indicator and update the tooltip.
    pub fn pointer_move(
        &self,
        band: usize,
        pointer_x: f64,
        view: &mut impl StreamView,
    ) -> Option<HoverInfo> {
        let info = self.resolve(band, pointer_x)?;
        view.show_pivot_indicator(info.indicator_x);
        view.show_tooltip(&info.tooltip);
        Some(info)
    }

    /// Pointer left band `band`: restore it and hide the overlays.
    pub fn pointer_out(&self, band: usize, view: &mut impl StreamView) {
        if band < self.series.len() {
            view.set_band_opacity(band, self.resting_opacity);
        }
        view.hide_tooltip();
        view.hide_pivot_indicator();
    }
}

/// A [`StreamView`] that applies overlay changes to a retained [`Scene`].
///
/// Band opacity and the indicator are scene marks; the tooltip is kept in `tooltip` for the
/// host to render. Every scene change is recorded as a diff.
#[derive(Debug)]
pub struct SceneView<'a> {
    scene: &'a mut Scene,
    bands: &'a StreamMarkSpec,
    indicator: MarkId,
    tooltip: &'a mut Option<Tooltip>,
    diffs: Vec<MarkDiff>,
}

impl<'a> SceneView<'a> {
    /// Wraps a scene whose bands were generated by `bands` and whose indicator is `indicator`.
    pub fn new(
        scene: &'a mut Scene,
        bands: &'a StreamMarkSpec,
        indicator: MarkId,
        tooltip: &'a mut Option<Tooltip>,
    ) -> Self {
        Self {
            scene,
            bands,
            indicator,
            tooltip,
            diffs: Vec::new(),
        }
    }

    /// Scene diffs produced so far.
    pub fn into_diffs(self) -> Vec<MarkDiff> {
        self.diffs
    }

    fn record(&mut self, diff: Option<MarkDiff>) {
        self.diffs.extend(diff);
    }
}

impl StreamView for SceneView<'_> {
    fn set_band_opacity(&mut self, band: usize, opacity: f64) {
        let id = self.bands.band_id(band);
        let diff = self.scene.update(id, |m| m.opacity = opacity.clamp(0.0, 1.0));
        self.record(diff);
    }

    fn show_tooltip(&mut self, tooltip: &Tooltip) {
        *self.tooltip = Some(tooltip.clone());
    }

    fn hide_tooltip(&mut self) {
        *self.tooltip = None;
    }

    fn show_pivot_indicator(&mut self, x: f64) {
        let diff = self.scene.update(self.indicator, |m| {
            move_vertical_rule(m, x);
            m.visible = true;
        });
        self.record(diff);
    }

    fn hide_pivot_indicator(&mut self) {
        let diff = self.scene.update(self.indicator, |m| m.visible = false);
        self.record(diff);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use streamgraph_transforms::{FrequencyMatrix, order_categories, stack_series};

    use super::*;
    use crate::geometry::{ChartGeom, calc_scales};

    #[derive(Debug, Default)]
    struct Recorder {
        opacity: Vec<(usize, f64)>,
        tooltip: Option<Tooltip>,
        indicator: Option<f64>,
    }

    impl StreamView for Recorder {
        fn set_band_opacity(&mut self, band: usize, opacity: f64) {
            self.opacity.push((band, opacity));
        }
        fn show_tooltip(&mut self, tooltip: &Tooltip) {
            self.tooltip = Some(tooltip.clone());
        }
        fn hide_tooltip(&mut self) {
            self.tooltip = None;
        }
        fn show_pivot_indicator(&mut self, x: f64) {
            self.indicator = Some(x);
        }
        fn hide_pivot_indicator(&mut self) {
            self.indicator = None;
        }
    }

    fn controller() -> HoverController {
        let m = FrequencyMatrix::from_rows([
            ("A", vec![0.1, 0.3, 0.5]),
            ("B", vec![0.4, 0.3, 0.2]),
        ]);
        let o = order_categories(&m).unwrap();
        let s = stack_series(&o, 3, &m).unwrap();
        let pivots = Pivots::new(vec![0.0, 10.0, 20.0]);
        let geom = ChartGeom::new(200.0, 100.0, 0.0, 0.0, 0.0);
        let scales = calc_scales(&geom, &pivots).unwrap();
        let labels = o.into_inner();
        HoverController::new(s, labels, pivots, scales, "clade")
    }

    #[test]
    fn resolve_snaps_to_nearest_pivot() {
        let c = controller();
        // x = 70 is pivot value 7, nearest to pivot 10.
        let info = c.resolve(0, 70.0).unwrap();
        assert_eq!(info.pivot_index, 1);
        assert_eq!(info.indicator_x, 100.0);
        assert!((info.frequency - 0.3).abs() < 1e-12);
        assert_eq!(
            info.tooltip.lines.as_slice(),
            ["clade: A", "Pivot: 10", "Frequency 30%"]
        );
        assert_eq!(info.tooltip.left, 74.0);
        assert!(c.resolve(5, 70.0).is_none());
    }

    #[test]
    fn hover_sequence_drives_the_view() {
        let c = controller();
        let mut view = Recorder::default();

        c.pointer_over(1, &mut view);
        let info = c.pointer_move(1, 190.0, &mut view).unwrap();
        assert_eq!(info.pivot_index, 2);
        assert_eq!(view.indicator, Some(200.0));
        let tooltip = view.tooltip.clone().unwrap();
        assert_eq!(tooltip.lines[0], "clade: B");
        assert_eq!(tooltip.lines[2], "Frequency 20%");

        c.pointer_out(1, &mut view);
        assert_eq!(view.opacity, vec![(1, 1.0), (1, BAND_OPACITY)]);
        assert!(view.tooltip.is_none());
        assert!(view.indicator.is_none());
    }
}
