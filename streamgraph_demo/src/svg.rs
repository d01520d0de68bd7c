// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `streamgraph_demo`.

use std::collections::HashMap;

use kurbo::Rect;
use peniko::Brush;
use streamgraph_charts::escape_html;
use streamgraph_core::{Mark, MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline};

/// Renderer-side copy of the scene, maintained from diffs only.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    marks: HashMap<MarkId, Mark>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter { id, new, .. } | MarkDiff::Update { id, new, .. } => {
                    self.marks.insert(*id, (**new).clone());
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.marks.len()
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        let mut marks: Vec<&Mark> = self.marks.values().filter(|m| m.visible).collect();
        marks.sort_by_key(|m| (m.z_index, m.id));

        for mark in marks {
            match &mark.payload {
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                        TextBaseline::Ideographic => "ideographic",
                    };
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        t.pos.x, t.pos.y, t.font_size, baseline
                    ));
                    if t.angle != 0.0 {
                        out.push_str(&format!(
                            r#" transform="rotate({} {} {})""#,
                            t.angle, t.pos.x, t.pos.y
                        ));
                    }
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill);
                    write_opacity_attr(&mut out, mark.opacity);
                    out.push('>');
                    out.push_str(&escape_html(&t.text));
                    out.push_str("</text>\n");
                }
                MarkPayload::Path(p) => {
                    let d = p.path.to_svg();
                    out.push_str(&format!(r#"<path id="mark-{}" d="{d}""#, mark.id.0));
                    write_paint_attr(&mut out, "fill", &p.fill);
                    if p.stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", &p.stroke);
                        out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                    }
                    write_opacity_attr(&mut out, mark.opacity);
                    out.push_str("/>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn write_opacity_attr(out: &mut String, opacity: f64) {
    if opacity < 1.0 {
        out.push_str(&format!(r#" opacity="{opacity}""#));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::BezPath;
    use peniko::color::palette::css;
    use streamgraph_core::{MarkId, PathMark, Scene};

    use super::*;

    fn band(id: u64, opacity: f64) -> Mark {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((10.0, 0.0));
        p.line_to((10.0, 10.0));
        p.close_path();
        Mark::path(MarkId(id), PathMark::filled(p, css::RED)).with_opacity(opacity)
    }

    #[test]
    fn writes_opacity_and_skips_hidden_marks() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![band(1, 0.85), band(2, 1.0).with_visible(false)]);
        let mut svg = SvgScene::default();
        svg.apply_diffs(&diffs);

        let out = svg.to_svg_string();
        assert!(out.contains(r#"id="mark-1""#));
        assert!(out.contains(r##"fill="#ff0000""##));
        assert!(out.contains(r#"opacity="0.85""#));
        assert!(!out.contains(r#"id="mark-2""#));
    }

    #[test]
    fn exits_remove_marks() {
        let mut scene = Scene::new();
        let mut svg = SvgScene::default();
        svg.apply_diffs(&scene.tick(vec![band(1, 1.0)]));
        assert_eq!(svg.len(), 1);
        svg.apply_diffs(&scene.tick(Vec::new()));
        assert_eq!(svg.len(), 0);
    }
}
