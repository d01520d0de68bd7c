// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight line segment: axis domain lines, tick marks and the pivot indicator.

use kurbo::BezPath;
use peniko::Brush;
use streamgraph_core::{Mark, MarkId, PathMark};

use crate::z_order;

/// A rule mark spec (a stroked line segment).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Start point x in scene coordinates.
    pub x0: f64,
    /// Start point y in scene coordinates.
    pub y0: f64,
    /// End point x in scene coordinates.
    pub x1: f64,
    /// End point y in scene coordinates.
    pub y1: f64,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Rendering order hint.
    pub z_index: i32,
    /// Whether the rule starts visible.
    pub visible: bool,
}

impl RuleMarkSpec {
    /// Creates a new rule between two points.
    pub fn new(id: MarkId, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            id,
            x0,
            y0,
            x1,
            y1,
            stroke: Brush::default(),
            stroke_width: 1.0,
            z_index: z_order::AXIS_RULES,
            visible: true,
        }
    }

    /// Creates a horizontal rule.
    pub fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, x0, y, x1, y)
    }

    /// Creates a vertical rule.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, x, y0, x, y1)
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets initial visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Generates the rule mark. Rules are never pointer targets.
    pub fn mark(&self) -> Mark {
        let mut p = BezPath::new();
        p.move_to((self.x0, self.y0));
        p.line_to((self.x1, self.y1));
        Mark::path(
            self.id,
            PathMark::stroked(p, self.stroke.clone(), self.stroke_width),
        )
        .with_z_index(self.z_index)
        .with_visible(self.visible)
        .non_interactive()
    }
}

/// Moves a vertical rule mark to `x`, keeping its vertical extent.
///
/// Returns `false` if `mark` is not a two-point path.
pub(crate) fn move_vertical_rule(mark: &mut Mark, x: f64) -> bool {
    let streamgraph_core::MarkPayload::Path(p) = &mut mark.payload else {
        return false;
    };
    let els = p.path.elements();
    let (Some(kurbo::PathEl::MoveTo(a)), Some(kurbo::PathEl::LineTo(b))) =
        (els.first(), els.get(1))
    else {
        return false;
    };
    let (y0, y1) = (a.y, b.y);
    let mut moved = BezPath::new();
    moved.move_to((x, y0));
    moved.line_to((x, y1));
    p.path = moved;
    true
}
