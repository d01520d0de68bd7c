// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::color::palette::css;
use streamgraph_core::{MarkDiff, MarkId, MarkPayload, Scene};
use streamgraph_transforms::{FrequencyMatrix, InvalidInputError, Pivots};

use crate::{
    BAND_OPACITY, ChartGeom, ColorScale, ID_GROUP_STRIDE, LegendBounds, StreamGraph,
    StreamGraphSpec, calc_scales,
};

fn matrix() -> FrequencyMatrix {
    FrequencyMatrix::from_rows([("A", vec![0.1, 0.3, 0.5]), ("B", vec![0.4, 0.3, 0.2])])
}

fn pivots() -> Pivots {
    Pivots::new(vec![0.0, 10.0, 20.0])
}

fn spec() -> StreamGraphSpec {
    StreamGraphSpec::new(ChartGeom::new(200.0, 100.0, 0.0, 0.0, 0.0)).with_color_by("clade")
}

fn drawn(spec: StreamGraphSpec) -> StreamGraph {
    let mut graph = StreamGraph::new(spec);
    graph
        .draw(&matrix(), &pivots(), &ColorScale::from_palette(["A", "B"]))
        .unwrap();
    graph
}

fn text_of(scene: &Scene, id: MarkId) -> String {
    match &scene.get(id).expect("text mark").payload {
        MarkPayload::Text(t) => t.text.clone(),
        MarkPayload::Path(_) => panic!("{id:?} is not a text mark"),
    }
}

fn assert_only_updates(diffs: &[MarkDiff], ids: &[MarkId]) {
    let got: Vec<MarkId> = diffs
        .iter()
        .map(|d| match d {
            MarkDiff::Update { id, .. } => *id,
            other => panic!("expected an update, got {other:?}"),
        })
        .collect();
    assert_eq!(got, ids);
}

#[test]
fn first_draw_enters_everything_with_a_hidden_indicator() {
    let mut graph = StreamGraph::new(spec());
    let diffs = graph
        .draw(&matrix(), &pivots(), &ColorScale::from_palette(["A", "B"]))
        .unwrap();

    assert!(!diffs.is_empty());
    assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Enter { .. })));
    assert_eq!(diffs.len(), graph.scene().len());

    let scene = graph.scene();
    for i in 0..2 {
        let band = scene.get(graph.band_id(i)).unwrap();
        assert_eq!(band.opacity, BAND_OPACITY);
        assert!(band.visible);
    }
    let indicator = scene.get(graph.indicator_id()).unwrap();
    assert!(!indicator.visible);
    assert!(!indicator.interactive);
    assert!(graph.hover().is_some());
    assert!(graph.tooltip().is_none());
}

#[test]
fn redrawing_identical_input_is_a_no_op() {
    let mut graph = drawn(spec());
    let before = graph.scene().len();
    let diffs = graph
        .draw(&matrix(), &pivots(), &ColorScale::from_palette(["A", "B"]))
        .unwrap();
    assert!(diffs.is_empty());
    assert_eq!(graph.scene().len(), before);
}

#[test]
fn redrawing_fewer_categories_exits_stale_bands() {
    let mut graph = drawn(spec());
    let only_a = FrequencyMatrix::from_rows([("A", vec![0.1, 0.3, 0.5])]);
    let diffs = graph
        .draw(&only_a, &pivots(), &ColorScale::from_palette(["A", "B"]))
        .unwrap();

    // `A` stays band 0 with the same outline and color; only band 1 goes away.
    assert_eq!(diffs.len(), 1);
    assert!(matches!(diffs[0], MarkDiff::Exit { id, .. } if id == graph.band_id(1)));
    assert!(graph.scene().get(graph.band_id(1)).is_none());
    assert_eq!(graph.hover().unwrap().series().len(), 1);
}

#[test]
fn redraw_resets_hover_state() {
    let mut graph = drawn(spec());
    graph.pointer_over(0);
    graph.pointer_move(0, 100.0);
    assert!(graph.tooltip().is_some());

    let diffs = graph
        .draw(&matrix(), &pivots(), &ColorScale::from_palette(["A", "B"]))
        .unwrap();
    assert_only_updates(&diffs, &[graph.band_id(0), graph.indicator_id()]);
    assert!(graph.tooltip().is_none());
    assert_eq!(graph.scene().get(graph.band_id(0)).unwrap().opacity, BAND_OPACITY);
}

#[test]
fn remove_exits_bands_and_indicator_only() {
    let mut graph = drawn(spec());
    let total = graph.scene().len();
    let diffs = graph.remove();

    let ids: Vec<MarkId> = diffs
        .iter()
        .map(|d| match d {
            MarkDiff::Exit { id, .. } => *id,
            other => panic!("expected an exit, got {other:?}"),
        })
        .collect();
    assert_eq!(ids, vec![graph.band_id(0), graph.band_id(1), graph.indicator_id()]);
    assert_eq!(graph.scene().len(), total - 3);
    assert!(graph.hover().is_none());

    // Detached: events are ignored.
    assert!(graph.pointer_over(0).is_empty());
    assert!(graph.pointer_move(0, 50.0).is_empty());
    assert!(graph.remove().is_empty());
}

#[test]
fn hover_highlights_band_and_shows_overlays() {
    let mut graph = drawn(spec());

    let over = graph.pointer_over(1);
    assert_only_updates(&over, &[graph.band_id(1)]);
    assert_eq!(graph.scene().get(graph.band_id(1)).unwrap().opacity, 1.0);

    // x = 190 is pivot value 19, nearest to pivot 20 at x = 200.
    let moved = graph.pointer_move(1, 190.0);
    assert_only_updates(&moved, &[graph.indicator_id()]);
    let indicator = graph.scene().get(graph.indicator_id()).unwrap();
    assert!(indicator.visible);
    assert_eq!(indicator.bounds().unwrap().x0, 200.0);

    let tooltip = graph.tooltip().unwrap();
    assert_eq!(
        tooltip.lines.as_slice(),
        ["clade: B", "Pivot: 20", "Frequency 20%"]
    );
    assert_eq!(tooltip.left, 194.0);
    assert_eq!(tooltip.top, 50.0);

    let out = graph.pointer_out(1);
    assert_only_updates(&out, &[graph.band_id(1), graph.indicator_id()]);
    assert_eq!(graph.scene().get(graph.band_id(1)).unwrap().opacity, BAND_OPACITY);
    assert!(!graph.scene().get(graph.indicator_id()).unwrap().visible);
    assert!(graph.tooltip().is_none());
}

#[test]
fn band_at_hits_the_band_under_the_pointer() {
    let graph = drawn(spec());
    // Plot spans y 100 (0.0) to 10 (1.0). At pivot 10, A covers [0, 0.3] and B [0.3, 0.6].
    assert_eq!(graph.band_at(Point::new(100.0, 100.0 - 0.15 * 90.0)), Some(0));
    assert_eq!(graph.band_at(Point::new(100.0, 100.0 - 0.45 * 90.0)), Some(1));
    assert_eq!(graph.band_at(Point::new(100.0, 15.0)), None);
}

#[test]
fn continuous_scale_labels_legend_and_tooltip_with_ranges() {
    let bounds = LegendBounds::new().with("A", 0.0, 0.1).with("B", 0.1, 0.25);
    let scale = ColorScale::continuous_ramp(css::WHITE, css::BLACK, bounds);
    let mut graph = StreamGraph::new(spec().with_id_base(0).with_legend((150.0, 0.0)));
    graph.draw(&matrix(), &pivots(), &scale).unwrap();

    assert_eq!(graph.hover().unwrap().labels(), ["0.00 - 0.10", "0.10 - 0.25"]);
    // Legend labels follow their swatches.
    let legend = 4 * ID_GROUP_STRIDE;
    assert_eq!(text_of(graph.scene(), MarkId(legend + 1)), "0.00 - 0.10");
    assert_eq!(text_of(graph.scene(), MarkId(legend + 3)), "0.10 - 0.25");

    graph.pointer_move(0, 0.0);
    assert_eq!(graph.tooltip().unwrap().lines[0], "clade: 0.00 - 0.10");
}

#[test]
fn continuous_scale_without_bounds_is_rejected() {
    let scale = ColorScale::continuous(|_| css::BLACK, LegendBounds::new().with("A", 0.0, 1.0));
    let mut graph = StreamGraph::new(spec());
    assert_eq!(
        graph.draw(&matrix(), &pivots(), &scale),
        Err(InvalidInputError::MissingLegendBounds("B".into()))
    );
    assert!(graph.scene().is_empty());
}

#[test]
fn invalid_redraw_keeps_the_previous_drawing() {
    let mut graph = drawn(spec());
    let before = graph.scene().len();
    let err = graph
        .draw(
            &matrix(),
            &Pivots::new(vec![0.0, 10.0]),
            &ColorScale::from_palette(["A", "B"]),
        )
        .unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::PivotCountMismatch {
            expected: 3,
            found: 2
        }
    );
    assert_eq!(graph.scene().len(), before);
    assert!(graph.hover().is_some());
}

#[test]
fn percent_axis_labels_fraction_ticks() {
    let graph = drawn(spec().with_id_base(0).with_percent_axis(true));
    // Left-axis tick `i` is labelled at `2 + 2i` past the axis base.
    let y_axis = 2 * ID_GROUP_STRIDE;
    assert_eq!(text_of(graph.scene(), MarkId(y_axis + 2)), "0%");
    assert_eq!(text_of(graph.scene(), MarkId(y_axis + 12)), "100%");
}

#[test]
fn long_pivot_series_keeps_every_axis_mark() {
    let n = 1500;
    let matrix = FrequencyMatrix::from_rows([("A", vec![1.0; n])]);
    let pivots = Pivots::new((0..n).map(|i| i as f64).collect::<Vec<_>>());
    let geom = ChartGeom::new(2000.0, 100.0, 0.0, 0.0, 0.0);
    let scales = calc_scales(&geom, &pivots).unwrap();
    let x_ticks = scales.x.ticks(scales.num_ticks_x).len();
    let y_ticks = scales.y.ticks(scales.num_ticks_y).len();
    assert!(x_ticks > 1000);

    let mut graph = StreamGraph::new(StreamGraphSpec::new(geom).with_id_base(0));
    let diffs = graph
        .draw(&matrix, &pivots, &ColorScale::from_palette(["A"]))
        .unwrap();

    // One band, the indicator, and a domain line plus a tick and label per tick on each axis.
    let expected = 2 + (1 + 2 * x_ticks) + (1 + 2 * y_ticks);
    assert_eq!(diffs.len(), expected);
    assert_eq!(graph.scene().len(), expected);
    assert!(matches!(
        graph.scene().get(MarkId(ID_GROUP_STRIDE + 2)).unwrap().payload,
        MarkPayload::Text(_)
    ));
}

#[test]
fn axes_can_be_turned_off() {
    let graph = drawn(spec().with_axes(false));
    // Two bands plus the indicator.
    assert_eq!(graph.scene().len(), 3);
}
