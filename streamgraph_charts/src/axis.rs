// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! A stream graph has two axes: pivots along the bottom and the stacked fraction along the
//! left. An [`AxisSpec`] turns a [`ScaleLinear`] into a domain line, tick rules and tick labels.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;
use streamgraph_core::{Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::format::format_tick_with_step;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::ScaleLinear;
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
        }
    }
}

/// Which side of the plot the axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis below the plot; ticks point down.
    Bottom,
    /// A vertical axis left of the plot; ticks point left.
    Left,
}

/// Tick label formatter: `(value, tick_step) -> label`.
pub type TickFormatter = Arc<dyn Fn(f64, f64) -> String>;

/// An axis specification.
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base. The domain line is `id_base`; tick `i` is `id_base + 1 + 2i` and its
    /// label `id_base + 2 + 2i`.
    pub id_base: u64,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick line length.
    pub tick_size: f64,
    /// Gap between the tick end and its label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional tick label formatter; defaults to step-aware decimal formatting.
    pub tick_formatter: Option<TickFormatter>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates an axis with `tick_count = 10`, `tick_size = 6` and `tick_padding = 3`.
    pub fn new(id_base: u64, orient: AxisOrient) -> Self {
        Self {
            id_base,
            orient,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            style: AxisStyle::default(),
            tick_formatter: None,
        }
    }

    /// A bottom axis.
    pub fn bottom(id_base: u64) -> Self {
        Self::new(id_base, AxisOrient::Bottom)
    }

    /// A left axis.
    pub fn left(id_base: u64) -> Self {
        Self::new(id_base, AxisOrient::Left)
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Generates axis marks along `scale`.
    ///
    /// `position` is the y coordinate of a bottom axis or the x coordinate of a left axis.
    pub fn marks(&self, scale: &ScaleLinear, position: f64) -> Vec<Mark> {
        let (r0, r1) = scale.range();
        let ticks = scale.ticks(self.tick_count);
        let step = scale.tick_step(self.tick_count);
        let rule = &self.style.rule;
        let mut out = Vec::with_capacity(1 + 2 * ticks.len());

        let domain = match self.orient {
            AxisOrient::Bottom => {
                RuleMarkSpec::horizontal(MarkId::from_raw(self.id_base), position, r0, r1)
            }
            AxisOrient::Left => {
                RuleMarkSpec::vertical(MarkId::from_raw(self.id_base), position, r0, r1)
            }
        };
        out.push(
            domain
                .with_stroke(rule.brush.clone(), rule.stroke_width)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
        );

        for (i, &t) in ticks.iter().enumerate() {
            let at = scale.map(t);
            let tick_id = MarkId::from_raw(self.id_base).offset(1 + 2 * i as u64);
            let label_id = tick_id.offset(1);
            let text = match &self.tick_formatter {
                Some(f) => f(t, step),
                None => format_tick_with_step(t, step),
            };

            let (tick, pos, anchor, baseline) = match self.orient {
                AxisOrient::Bottom => (
                    RuleMarkSpec::vertical(tick_id, at, position, position + self.tick_size),
                    Point::new(at, position + self.tick_size + self.tick_padding),
                    TextAnchor::Middle,
                    TextBaseline::Hanging,
                ),
                AxisOrient::Left => (
                    RuleMarkSpec::horizontal(tick_id, at, position - self.tick_size, position),
                    Point::new(position - self.tick_size - self.tick_padding, at),
                    TextAnchor::End,
                    TextBaseline::Middle,
                ),
            };
            out.push(
                tick.with_stroke(rule.brush.clone(), rule.stroke_width)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
            );
            out.push(
                Mark::text(
                    label_id,
                    TextMark {
                        pos,
                        text,
                        font_size: self.style.label_font_size,
                        fill: self.style.label_fill.clone(),
                        anchor,
                        baseline,
                        angle: 0.0,
                    },
                )
                .with_z_index(z_order::AXIS_LABELS)
                .non_interactive(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use streamgraph_core::MarkPayload;

    use super::*;

    fn labels(marks: &[Mark]) -> Vec<&str> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                MarkPayload::Path(_) => None,
            })
            .collect()
    }

    #[test]
    fn left_axis_labels_unit_domain() {
        let y = ScaleLinear::new((0.0, 1.0), (270.0, 10.0));
        let marks = AxisSpec::left(100).with_tick_count(5).marks(&y, 50.0);
        assert_eq!(
            labels(&marks),
            vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]
        );
        // Domain + 6 ticks + 6 labels.
        assert_eq!(marks.len(), 13);
        let bottom_tick = marks[1].bounds().unwrap();
        assert_eq!(bottom_tick.y0, 270.0);
        assert_eq!(bottom_tick.x0, 44.0);
        assert_eq!(bottom_tick.x1, 50.0);
    }

    #[test]
    fn bottom_axis_uses_custom_formatter() {
        let x = ScaleLinear::new((2000.0, 2004.0), (0.0, 400.0));
        let marks = AxisSpec::bottom(200)
            .with_tick_count(4)
            .with_tick_formatter(|v, _| alloc::format!("y{v}"))
            .marks(&x, 300.0);
        assert_eq!(
            labels(&marks),
            vec!["y2000", "y2001", "y2002", "y2003", "y2004"]
        );
        assert!(marks.iter().all(|m| !m.interactive));
    }

    #[test]
    fn thousands_of_ticks_keep_distinct_ids() {
        let x = ScaleLinear::new((0.0, 1500.0), (0.0, 1500.0));
        assert_eq!(x.ticks(1500).len(), 1501);
        let marks = AxisSpec::bottom(0).with_tick_count(1500).marks(&x, 0.0);
        assert_eq!(marks.len(), 1 + 2 * 1501);

        let ids: hashbrown::HashSet<MarkId> = marks.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), marks.len());
        // Ticks and labels interleave after the domain line.
        assert!(matches!(marks[1].payload, MarkPayload::Path(_)));
        assert_eq!(marks[1].id, MarkId(1));
        assert!(matches!(marks[2].payload, MarkPayload::Text(_)));
        assert_eq!(marks[2].id, MarkId(2));
    }
}
