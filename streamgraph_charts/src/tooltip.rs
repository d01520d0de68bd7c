// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tooltip content and style.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use smallvec::SmallVec;

use crate::format::{format_frequency, format_pivot};

/// Tooltip placement and look.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipStyle {
    /// Horizontal gap between the pointer and the tooltip's left edge.
    pub offset_x: f64,
    /// Fixed top coordinate of the tooltip.
    pub top: f64,
    /// Stacking order above the chart.
    pub z_index: i32,
    /// Corner radius in pixels.
    pub border_radius: f64,
    /// Inner padding in pixels.
    pub padding: f64,
    /// CSS background color.
    pub background: String,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            offset_x: 4.0,
            top: 50.0,
            z_index: 20,
            border_radius: 5.0,
            padding: 10.0,
            background: String::from("hsla(0,0%,100%,.9)"),
        }
    }
}

impl TooltipStyle {
    /// Inline CSS for the tooltip element.
    ///
    /// The element never captures the pointer; it is hidden unless `shown` is given.
    pub fn css(&self, shown: Option<&Tooltip>) -> String {
        let mut css = format!(
            "position: absolute; z-index: {}; border-radius: {}px; padding: {}px; \
             background-color: {}; pointer-events: none;",
            self.z_index, self.border_radius, self.padding, self.background
        );
        match shown {
            Some(t) => css.push_str(&format!(
                " left: {}px; top: {}px; visibility: visible;",
                t.left, t.top
            )),
            None => css.push_str(" visibility: hidden;"),
        }
        css
    }
}

/// What the tooltip shows for one hovered band at one pivot.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Left edge, in the chart's coordinate space.
    pub left: f64,
    /// Top edge, in the chart's coordinate space.
    pub top: f64,
    /// Text lines, top to bottom.
    pub lines: SmallVec<[String; 3]>,
}

impl Tooltip {
    /// Builds the three-line band tooltip.
    ///
    /// `frequency` is the band's own value at the pivot, shown as a whole percentage.
    pub fn for_band(
        color_by: &str,
        label: &str,
        pivot: f64,
        frequency: f64,
        pointer_x: f64,
        style: &TooltipStyle,
    ) -> Self {
        let mut lines = SmallVec::new();
        lines.push(format!("{color_by}: {label}"));
        lines.push(format!("Pivot: {}", format_pivot(pivot)));
        lines.push(format!("Frequency {}", format_frequency(frequency)));
        Self {
            left: pointer_x + style.offset_x,
            top: style.top,
            lines,
        }
    }

    /// The lines as escaped HTML paragraphs.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str("<p>");
            out.push_str(&escape_html(line));
            out.push_str("</p>");
        }
        out
    }
}

/// Escapes text for HTML/XML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn band_tooltip_lines() {
        let t = Tooltip::for_band("clade", "A<1>", 2013.0, 0.456, 120.0, &TooltipStyle::default());
        assert_eq!(t.left, 124.0);
        assert_eq!(t.top, 50.0);
        assert_eq!(t.lines.as_slice(), ["clade: A<1>", "Pivot: 2013", "Frequency 46%"]);
        assert_eq!(
            t.to_html(),
            "<p>clade: A&lt;1&gt;</p><p>Pivot: 2013</p><p>Frequency 46%</p>"
        );
    }

    #[test]
    fn css_toggles_visibility() {
        let style = TooltipStyle::default();
        let hidden = style.css(None);
        assert!(hidden.contains("pointer-events: none;"));
        assert!(hidden.ends_with("visibility: hidden;"));

        let t = Tooltip::for_band("c", "x", 1.0, 0.5, 10.0, &style);
        let shown = style.css(Some(&t));
        assert!(shown.contains("left: 14px; top: 50px;"));
        assert!(shown.ends_with("visibility: visible;"));
    }
}
