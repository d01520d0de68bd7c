// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stream band mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::BezPath;
use peniko::Color;
use streamgraph_core::{Mark, MarkId, PathMark};
use streamgraph_transforms::{Band, Pivots, StackedSeries};

use crate::geometry::StreamScales;
use crate::z_order;

/// Resting opacity of a band; hovered bands are drawn fully opaque.
pub const BAND_OPACITY: f64 = 0.85;

/// Generates one filled path per stacked band.
///
/// Band `i` gets mark id `id_base + i`, so hover events can be mapped back to band indices.
#[derive(Clone, Debug)]
pub struct StreamMarkSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Opacity of bands that are not hovered.
    pub opacity: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl StreamMarkSpec {
    /// Creates a band mark generator with [`BAND_OPACITY`].
    pub fn new(id_base: u64) -> Self {
        Self {
            id_base,
            opacity: BAND_OPACITY,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the resting opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Mark id of band `index`.
    pub fn band_id(&self, index: usize) -> MarkId {
        MarkId::from_raw(self.id_base).offset(index as u64)
    }

    /// Band index of a mark id produced by this spec, if it is in `0..count`.
    pub fn band_index(&self, id: MarkId, count: usize) -> Option<usize> {
        let i = usize::try_from(id.0.checked_sub(self.id_base)?).ok()?;
        (i < count).then_some(i)
    }

    /// Generates band marks; `fills[i]` colors band `i`.
    ///
    /// Bands without a matching fill are drawn black.
    pub fn marks(
        &self,
        series: &StackedSeries,
        pivots: &Pivots,
        scales: &StreamScales,
        fills: &[Color],
    ) -> Vec<Mark> {
        series
            .bands()
            .iter()
            .enumerate()
            .map(|(i, band)| {
                let fill = fills.get(i).copied().unwrap_or(Color::BLACK);
                Mark::path(
                    self.band_id(i),
                    PathMark::filled(band_path(band, pivots, scales), fill),
                )
                .with_z_index(self.z_index)
                .with_opacity(self.opacity)
            })
            .collect()
    }
}

/// The closed outline of a band: along the tops left to right, back along the bottoms.
pub fn band_path(band: &Band, pivots: &Pivots, scales: &StreamScales) -> BezPath {
    let mut top: Vec<(f64, f64)> = Vec::with_capacity(band.points().len());
    let mut bot: Vec<(f64, f64)> = Vec::with_capacity(band.points().len());
    for (p, &x) in band.points().iter().zip(pivots.as_slice()) {
        let sx = scales.x.map(x);
        top.push((sx, scales.y.map(p.upper)));
        bot.push((sx, scales.y.map(p.lower)));
    }

    let mut path = BezPath::new();
    if top.is_empty() {
        return path;
    }
    path.move_to(bot[0]);
    path.line_to(top[0]);
    for &pt in top.iter().skip(1) {
        path.line_to(pt);
    }
    for &pt in bot.iter().rev() {
        path.line_to(pt);
    }
    path.close_path();
    path
}
