// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry and the stream graph scale pair.

use kurbo::Rect;
use streamgraph_transforms::{InvalidInputError, Pivots};

use crate::scale::ScaleLinear;

/// Outer chart size and plot insets, in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeom {
    /// Total width.
    pub width: f64,
    /// Total height.
    pub height: f64,
    /// Space left of the plot (vertical axis).
    pub pad_left: f64,
    /// Space right of the plot.
    pub pad_right: f64,
    /// Space below the plot (horizontal axis).
    pub pad_bottom: f64,
    /// Space above the plot.
    pub pad_top: f64,
}

impl ChartGeom {
    /// Creates a geometry with the given size and insets, and a top inset of `10`.
    pub fn new(width: f64, height: f64, pad_left: f64, pad_right: f64, pad_bottom: f64) -> Self {
        Self {
            width,
            height,
            pad_left,
            pad_right,
            pad_bottom,
            pad_top: 10.0,
        }
    }

    /// Sets the top inset.
    pub fn with_pad_top(mut self, pad_top: f64) -> Self {
        self.pad_top = pad_top;
        self
    }

    /// The plot rectangle the bands are drawn into.
    pub fn plot(&self) -> Rect {
        Rect::new(
            self.pad_left,
            self.pad_top,
            self.width - self.pad_right,
            self.height - self.pad_bottom,
        )
    }

    /// The whole chart rectangle.
    pub fn view(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for ChartGeom {
    fn default() -> Self {
        Self::new(800.0, 300.0, 50.0, 30.0, 40.0)
    }
}

/// Scales for a stream graph: pivots across, stacked fraction up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamScales {
    /// Maps `[first pivot, last pivot]` to `[pad_left, width - pad_right]`.
    pub x: ScaleLinear,
    /// Maps `[0, 1]` to `[height - pad_bottom, pad_top]`.
    pub y: ScaleLinear,
    /// Suggested horizontal tick count (one per pivot).
    pub num_ticks_x: usize,
    /// Suggested vertical tick count.
    pub num_ticks_y: usize,
}

/// Builds the scale pair for `pivots` inside `geom`.
///
/// The vertical domain is fixed to `[0, 1]`: frequencies are fractions and the stacked total
/// is expected not to exceed one.
pub fn calc_scales(geom: &ChartGeom, pivots: &Pivots) -> Result<StreamScales, InvalidInputError> {
    let Some(domain) = pivots.domain() else {
        return Err(InvalidInputError::NoPivots);
    };
    let plot = geom.plot();
    Ok(StreamScales {
        x: ScaleLinear::new(domain, (plot.x0, plot.x1)),
        y: ScaleLinear::new((0.0, 1.0), (plot.y1, plot.y0)),
        num_ticks_x: pivots.len(),
        num_ticks_y: 5,
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn scales_span_the_plot() {
        let geom = ChartGeom::new(500.0, 300.0, 40.0, 20.0, 30.0);
        let pivots = Pivots::new(vec![2000.0, 2005.0, 2010.0]);
        let s = calc_scales(&geom, &pivots).unwrap();

        assert_eq!(s.x.map(2000.0), 40.0);
        assert_eq!(s.x.map(2010.0), 480.0);
        assert_eq!(s.y.map(0.0), 270.0);
        assert_eq!(s.y.map(1.0), 10.0);
        assert_eq!(s.num_ticks_x, 3);
        assert_eq!(s.num_ticks_y, 5);
    }

    #[test]
    fn no_pivots_is_an_error() {
        assert_eq!(
            calc_scales(&ChartGeom::default(), &Pivots::default()),
            Err(InvalidInputError::NoPivots)
        );
    }
}
