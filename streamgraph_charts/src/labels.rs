// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display labels for stream categories.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use streamgraph_transforms::{InvalidInputError, OrderedCategories};

use crate::color::ColorScale;
use crate::format::format_fixed;

/// One label per ordered category, by index.
///
/// Discrete scales label categories by name. Continuous scales label each category with its
/// value range, `"{lower} - {upper}"` at two decimals.
pub fn meaningful_labels(
    ordered: &OrderedCategories,
    color_scale: &ColorScale,
) -> Result<Vec<String>, InvalidInputError> {
    let Some(bounds) = color_scale.legend_bounds() else {
        return Ok(ordered.iter().map(String::from).collect());
    };
    ordered
        .iter()
        .map(|c| {
            let (lo, hi) = bounds
                .get(c)
                .ok_or_else(|| InvalidInputError::MissingLegendBounds(c.into()))?;
            Ok(format!("{} - {}", format_fixed(lo, 2), format_fixed(hi, 2)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;
    use crate::color::LegendBounds;

    fn ordered(names: &[&str]) -> OrderedCategories {
        OrderedCategories::new(names.iter().map(|s| String::from(*s)).collect::<Vec<_>>())
    }

    #[test]
    fn discrete_labels_are_names() {
        let scale = ColorScale::from_palette(["x", "y"]);
        assert_eq!(
            meaningful_labels(&ordered(&["y", "x"]), &scale),
            Ok(vec![String::from("y"), String::from("x")])
        );
    }

    #[test]
    fn continuous_labels_show_ranges() {
        let bounds = LegendBounds::new().with("lo", 0.0, 0.1).with("hi", 0.1, 1.0 / 3.0);
        let scale = ColorScale::continuous(|_| css::BLACK, bounds);
        assert_eq!(
            meaningful_labels(&ordered(&["hi", "lo"]), &scale),
            Ok(vec![String::from("0.10 - 0.33"), String::from("0.00 - 0.10")])
        );
    }

    #[test]
    fn continuous_labels_need_bounds_for_every_category() {
        let scale = ColorScale::continuous(|_| css::BLACK, LegendBounds::new().with("a", 0.0, 1.0));
        assert_eq!(
            meaningful_labels(&ordered(&["a", "b"]), &scale),
            Err(InvalidInputError::MissingLegendBounds("b".into()))
        );
    }
}
