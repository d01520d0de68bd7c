// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML page output: the chart plus its tooltip overlay.

use streamgraph_charts::{Tooltip, TooltipStyle, escape_html};

/// Renders a standalone page with `svg` inside a positioned container and the tooltip above it.
pub(crate) fn render_page(
    title: &str,
    width: f64,
    height: f64,
    svg: &str,
    style: &TooltipStyle,
    tooltip: Option<&Tooltip>,
) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(
        "<style>body { font-family: sans-serif; margin: 24px; } \
         .tooltip p { margin: 0; font-size: 12px; }</style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    out.push_str(&format!(
        "<div style=\"position: relative; width: {width}px; height: {height}px;\">\n"
    ));
    out.push_str(svg);
    out.push_str(&format!(
        "<div class=\"tooltip\" style=\"{}\">",
        escape_html(&style.css(tooltip))
    ));
    if let Some(t) = tooltip {
        out.push_str(&t.to_html());
    }
    out.push_str("</div>\n</div>\n</body>\n</html>\n");
    out
}
