// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric tick label formatting.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const MAX_DECIMALS: usize = 12;

/// Formats `v` with just enough decimals to show `step` exactly.
///
/// All ticks of a linear scale share one step, so they line up (`0.0`, `0.5`, `1.0`).
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let decimals = decimals_for(step.abs());
    // Avoid printing `-0`.
    let v = if v == 0.0 { 0.0 } else { v };
    alloc::format!("{v:.decimals$}")
}

/// Formats `v` with the fewest decimals that represent it (up to 12).
pub(crate) fn format_tick_value(v: f64) -> String {
    format_tick_with_step(v, v)
}

fn decimals_for(step: f64) -> usize {
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let mut scaled = step;
    for decimals in 0..MAX_DECIMALS {
        if (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs().max(1.0) {
            return decimals;
        }
        scaled *= 10.0;
    }
    MAX_DECIMALS
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn step_controls_decimals() {
        assert_eq!(format_tick_with_step(20.0, 20.0), "20");
        assert_eq!(format_tick_with_step(0.5, 0.25), "0.50");
        assert_eq!(format_tick_with_step(0.3, 0.1), "0.3");
        assert_eq!(format_tick_with_step(-0.0, 1.0), "0");
    }

    #[test]
    fn values_use_their_own_precision() {
        assert_eq!(format_tick_value(1000.0), "1000");
        assert_eq!(format_tick_value(0.05), "0.05");
    }
}
