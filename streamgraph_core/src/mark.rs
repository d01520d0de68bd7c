// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark types.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// A stable mark identity.
///
/// Chart generators derive ids from an `id_base` plus a deterministic offset, so the same
/// logical item keeps the same id across redraws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the id `n` steps after this one.
    pub const fn offset(self, n: u64) -> Self {
        Self(self.0.wrapping_add(n))
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor is on the text midline.
    Middle,
    /// The anchor is on the alphabetic baseline.
    Alphabetic,
    /// The anchor is on the hanging baseline (top).
    Hanging,
    /// The anchor is on the ideographic baseline.
    Ideographic,
}

/// A filled and/or stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0.0` disables the stroke.
    pub stroke_width: f64,
}

impl PathMark {
    /// A filled path without a stroke.
    pub fn filled(path: BezPath, fill: impl Into<Brush>) -> Self {
        Self {
            path,
            fill: fill.into(),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
        }
    }

    /// A stroked path without a fill.
    pub fn stroked(path: BezPath, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            path,
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: stroke.into(),
            stroke_width,
        }
    }
}

/// An unshaped text run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Text paint.
    pub fill: Brush,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
}

/// The drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A path.
    Path(PathMark),
    /// A text run.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns geometric bounds where they can be computed without text metrics.
    ///
    /// Stroke width is not included.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
            Self::Text(_) => None,
        }
    }
}

/// A retained drawable item.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Group opacity in `[0, 1]`.
    pub opacity: f64,
    /// Hidden marks stay in the scene but are not painted.
    pub visible: bool,
    /// Whether the mark is a pointer hit target.
    pub interactive: bool,
    /// Drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a visible, opaque, interactive path mark at z-index 0.
    pub fn path(id: MarkId, path: PathMark) -> Self {
        Self::new(id, MarkPayload::Path(path))
    }

    /// Creates a visible, opaque, interactive text mark at z-index 0.
    pub fn text(id: MarkId, text: TextMark) -> Self {
        Self::new(id, MarkPayload::Text(text))
    }

    fn new(id: MarkId, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index: 0,
            opacity: 1.0,
            visible: true,
            interactive: true,
            payload,
        }
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the group opacity (clamped to `[0, 1]`).
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Excludes the mark from pointer hit testing.
    pub fn non_interactive(mut self) -> Self {
        self.interactive = false;
        self
    }

    /// See [`MarkPayload::bounds`].
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_bounds_cover_all_points() {
        let mut p = BezPath::new();
        p.move_to((10.0, 20.0));
        p.line_to((30.0, 5.0));
        p.line_to((15.0, 40.0));
        let mark = Mark::path(MarkId(1), PathMark::filled(p, Color::BLACK));
        assert_eq!(mark.bounds(), Some(Rect::new(10.0, 5.0, 30.0, 40.0)));
    }

    #[test]
    fn empty_path_has_no_bounds() {
        let mark = Mark::path(MarkId(1), PathMark::filled(BezPath::new(), Color::BLACK));
        assert_eq!(mark.bounds(), None);
    }

    #[test]
    fn opacity_is_clamped() {
        let mark =
            Mark::path(MarkId(1), PathMark::filled(BezPath::new(), Color::BLACK)).with_opacity(3.0);
        assert_eq!(mark.opacity, 1.0);
    }
}
