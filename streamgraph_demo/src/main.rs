// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stream graph demo.
//!
//! Usage: `streamgraph_demo [INPUT.json] [OUT_DIR]`
//!
//! Without an input file a built-in clade-frequency dataset is drawn. Writes
//! `streamgraph_demo.svg` (the resting chart) and `streamgraph_demo.html` (the chart with a
//! simulated hover over the middle of the plot). Set `RUST_LOG=debug` for library logging.

mod html;
mod input;
mod svg;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kurbo::Point;
use streamgraph_charts::{ChartGeom, StreamGraph, StreamGraphSpec};
use tracing_subscriber::EnvFilter;

use crate::input::StreamInput;
use crate::svg::SvgScene;

const LEGEND_WIDTH: f64 = 160.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(path) => StreamInput::load(Path::new(&path))?,
        None => {
            tracing::info!("no input file given; drawing the built-in dataset");
            StreamInput::sample()
        }
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create '{}'", out_dir.display()))?;

    let geom = ChartGeom::new(800.0 + LEGEND_WIDTH, 300.0, 50.0, 30.0 + LEGEND_WIDTH, 40.0);
    let spec = StreamGraphSpec::new(geom)
        .with_color_by(input.color_by.clone())
        .with_percent_axis(true)
        .with_legend((geom.width - LEGEND_WIDTH + 10.0, geom.pad_top));
    let tooltip_style = spec.tooltip_style.clone();
    let mut graph = StreamGraph::new(spec);

    let matrix = input.matrix()?;
    let pivots = input.pivots();
    let color_scale = input.color_scale();

    let mut svg = SvgScene::default();
    svg.set_view_box(geom.view());
    let diffs = graph
        .draw(&matrix, &pivots, &color_scale)
        .context("failed to draw the stream graph")?;
    svg.apply_diffs(&diffs);
    tracing::info!(
        categories = matrix.len(),
        pivots = pivots.len(),
        marks = svg.len(),
        "drew stream graph"
    );
    let resting = svg.to_svg_string();

    // Hover the middle of the plot, as a pointer would.
    let probe: Point = geom.plot().center();
    match graph.band_at(probe) {
        Some(band) => {
            svg.apply_diffs(&graph.pointer_over(band));
            svg.apply_diffs(&graph.pointer_move(band, probe.x));
            if let Some(t) = graph.tooltip() {
                tracing::info!(band, lines = ?t.lines, "simulated hover");
            }
        }
        None => tracing::warn!(x = probe.x, y = probe.y, "no band under the hover probe"),
    }
    let hovered = svg.to_svg_string();

    let svg_path = out_dir.join("streamgraph_demo.svg");
    std::fs::write(&svg_path, resting)
        .with_context(|| format!("failed to write '{}'", svg_path.display()))?;

    let page = html::render_page(
        "Stream graph demo",
        geom.width,
        geom.height,
        &hovered,
        &tooltip_style,
        graph.tooltip(),
    );
    let html_path = out_dir.join("streamgraph_demo.html");
    std::fs::write(&html_path, page)
        .with_context(|| format!("failed to write '{}'", html_path.display()))?;

    println!("wrote {} and {}", svg_path.display(), html_path.display());
    Ok(())
}
