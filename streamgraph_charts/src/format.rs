// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for labels and tooltips.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `value` with exactly `decimals` fractional digits (like JavaScript `toFixed`).
pub fn format_fixed(value: f64, decimals: usize) -> String {
    normalize_negative_zero(format!("{value:.decimals$}"))
}

/// Formats a pivot value using the shortest representation (`2013`, `0.5`, `1e21`).
pub fn format_pivot(value: f64) -> String {
    normalize_negative_zero(format!("{value}"))
}

/// Formats a tick value with as many decimals as the tick step needs.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    format_fixed(value, step_decimals(step))
}

/// Formats a `[0, 1]` tick value as a percentage, e.g. `0.2` -> `20%`.
pub fn format_percent_tick(value: f64, step: f64) -> String {
    let mut s = format_fixed(value * 100.0, step_decimals(step * 100.0));
    s.push('%');
    s
}

/// Formats a band frequency (a fraction) as a whole percentage, e.g. `0.456` -> `46%`.
///
/// Halves round up, also for negative frequencies: `-0.125` -> `-12%`.
pub fn format_frequency(fraction: f64) -> String {
    let mut s = format_fixed((fraction * 100.0 + 0.5).floor(), 0);
    s.push('%');
    s
}

fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let d = -step.log10().floor();
    if d <= 0.0 {
        0
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to a small positive range"
        )]
        {
            d.min(20.0) as usize
        }
    }
}

fn normalize_negative_zero(s: String) -> String {
    let is_zero = s
        .strip_prefix('-')
        .is_some_and(|rest| rest.chars().all(|c| c == '0' || c == '.'));
    if is_zero { String::from(&s[1..]) } else { s }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fixed_matches_two_decimal_legend_style() {
        assert_eq!(format_fixed(0.1, 2), "0.10");
        assert_eq!(format_fixed(2.0 / 3.0, 2), "0.67");
        assert_eq!(format_fixed(-0.001, 2), "0.00");
    }

    #[test]
    fn pivots_print_without_trailing_zero() {
        assert_eq!(format_pivot(2013.0), "2013");
        assert_eq!(format_pivot(2013.25), "2013.25");
        assert_eq!(format_pivot(-0.0), "0");
    }

    #[test]
    fn tick_decimals_follow_step() {
        assert_eq!(format_tick_with_step(0.6000000000000001, 0.2), "0.6");
        assert_eq!(format_tick_with_step(2015.0, 5.0), "2015");
        assert_eq!(format_tick_with_step(0.05, 0.05), "0.05");
        assert_eq!(format_percent_tick(0.4, 0.2), "40%");
    }

    #[test]
    fn frequency_rounds_to_whole_percent() {
        assert_eq!(format_frequency(0.456), "46%");
        assert_eq!(format_frequency(0.454), "45%");
        assert_eq!(format_frequency(1.0), "100%");
        assert_eq!(format_frequency(0.0), "0%");
    }

    #[test]
    fn frequency_halves_round_up() {
        assert_eq!(format_frequency(0.125), "13%");
        assert_eq!(format_frequency(-0.125), "-12%");
        assert_eq!(format_frequency(-0.001), "0%");
    }
}
