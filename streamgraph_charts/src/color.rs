// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category colors.
//!
//! The color scale is supplied by the host: a function from category name to color, plus
//! per-category legend bounds when the categories are ranges of a continuous value.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;
use peniko::color::palette::css;
use streamgraph_transforms::OrderedCategories;

/// Category name -> color.
pub type ColorFn = Arc<dyn Fn(&str) -> Color>;

/// Categorical palette used by [`ColorScale::from_palette`].
///
/// Colors repeat when there are more categories than entries.
pub const DEFAULT_PALETTE: [Color; 8] = [
    css::CORNFLOWER_BLUE,
    css::ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::CRIMSON,
    css::GOLDENROD,
    css::SLATE_BLUE,
    css::DARK_CYAN,
    css::HOT_PINK,
];

/// Lower/upper value bounds per category of a continuous color scale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendBounds {
    /// Category -> lower bound.
    pub lower: HashMap<String, f64>,
    /// Category -> upper bound.
    pub upper: HashMap<String, f64>,
}

impl LegendBounds {
    /// Creates empty bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bounds of one category.
    pub fn insert(&mut self, category: impl Into<String>, lower: f64, upper: f64) {
        let category = category.into();
        self.lower.insert(category.clone(), lower);
        self.upper.insert(category, upper);
    }

    /// Builder form of [`LegendBounds::insert`].
    pub fn with(mut self, category: impl Into<String>, lower: f64, upper: f64) -> Self {
        self.insert(category, lower, upper);
        self
    }

    /// `(lower, upper)` for `category`, if both are present.
    pub fn get(&self, category: &str) -> Option<(f64, f64)> {
        Some((*self.lower.get(category)?, *self.upper.get(category)?))
    }
}

/// How categories are colored and labeled.
#[derive(Clone)]
pub enum ColorScale {
    /// One color per category; labels are the category names.
    Discrete {
        /// Category -> color.
        scale: ColorFn,
    },
    /// Categories are ranges of a continuous value; labels show the range.
    Continuous {
        /// Category -> color.
        scale: ColorFn,
        /// Range bounds per category.
        legend_bounds: LegendBounds,
    },
}

impl core::fmt::Debug for ColorScale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Discrete { .. } => f.debug_struct("Discrete").finish_non_exhaustive(),
            Self::Continuous { legend_bounds, .. } => f
                .debug_struct("Continuous")
                .field("legend_bounds", legend_bounds)
                .finish_non_exhaustive(),
        }
    }
}

impl ColorScale {
    /// A discrete scale from a function.
    pub fn discrete(scale: impl Fn(&str) -> Color + 'static) -> Self {
        Self::Discrete {
            scale: Arc::new(scale),
        }
    }

    /// A continuous scale from a function and per-category bounds.
    pub fn continuous(scale: impl Fn(&str) -> Color + 'static, legend_bounds: LegendBounds) -> Self {
        Self::Continuous {
            scale: Arc::new(scale),
            legend_bounds,
        }
    }

    /// A continuous scale that colors each category by the midpoint of its bounds on a
    /// linear ramp between `from` (smallest midpoint) and `to` (largest).
    pub fn continuous_ramp(from: Color, to: Color, legend_bounds: LegendBounds) -> Self {
        let mids: HashMap<String, f64> = legend_bounds
            .lower
            .keys()
            .filter_map(|k| legend_bounds.get(k).map(|(lo, hi)| (k.clone(), 0.5 * (lo + hi))))
            .collect();
        let min = mids.values().copied().fold(f64::INFINITY, f64::min);
        let max = mids.values().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;
        Self::continuous(
            move |name| {
                let t = match mids.get(name) {
                    Some(&m) if span > 0.0 => (m - min) / span,
                    _ => 0.0,
                };
                lerp_rgb(from, to, t)
            },
            legend_bounds,
        )
    }

    /// A discrete scale assigning [`DEFAULT_PALETTE`] entries in the given category order.
    ///
    /// Unknown categories are gray.
    pub fn from_palette<S: AsRef<str>>(categories: impl IntoIterator<Item = S>) -> Self {
        let colors: HashMap<String, Color> = categories
            .into_iter()
            .enumerate()
            .map(|(i, c)| (String::from(c.as_ref()), DEFAULT_PALETTE[i % DEFAULT_PALETTE.len()]))
            .collect();
        Self::discrete(move |name| colors.get(name).copied().unwrap_or(css::GRAY))
    }

    /// Whether labels should show continuous ranges.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous { .. })
    }

    /// Looks up the color for `category`.
    pub fn color(&self, category: &str) -> Color {
        match self {
            Self::Discrete { scale } | Self::Continuous { scale, .. } => scale(category),
        }
    }

    /// Legend bounds of a continuous scale.
    pub fn legend_bounds(&self) -> Option<&LegendBounds> {
        match self {
            Self::Discrete { .. } => None,
            Self::Continuous { legend_bounds, .. } => Some(legend_bounds),
        }
    }
}

/// One color per ordered category, by index.
pub fn series_colors(ordered: &OrderedCategories, scale: &ColorScale) -> Vec<Color> {
    ordered.iter().map(|c| scale.color(c)).collect()
}

/// Formats a color in CSS syntax: `rgb(r, g, b)`, or `rgba(r, g, b, a)` when translucent.
pub fn css_color(color: Color) -> String {
    let c = color.to_rgba8();
    if c.a == 255 {
        format!("rgb({}, {}, {})", c.r, c.g, c.b)
    } else {
        format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, f64::from(c.a) / 255.0)
    }
}

fn lerp_rgb(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let a = from.to_rgba8();
    let b = to.to_rgba8();
    let mix = |x: u8, y: u8| -> u8 {
        let v = f64::from(x) + (f64::from(y) - f64::from(x)) * t;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "interpolates between two u8 values"
        )]
        {
            (v + 0.5).clamp(0.0, 255.0) as u8
        }
    };
    Color::from_rgba8(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), mix(a.a, b.a))
}
