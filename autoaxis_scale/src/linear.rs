// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scale inference.
//!
//! The domain is padded, optionally snapped to zero (and to the common `0..1` / `0..100`
//! proportion ranges), widened if degenerate, and then given either one tick per discrete value
//! (granular data) or ticks on the decimal-friendly step whose count is closest to the request.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use tracing::{debug, warn};

use crate::scale::MAX_TICKS;
use crate::{NumericExtent, Scale, ScaleKind, ScaleOptions};

/// Infers a linear scale for `extent`.
///
/// With no extent (no data) this returns the fixed scale `[0, 1]` with ticks `0` and `1`.
/// Degenerate extents are widened so the result always has `min < max`.
pub fn linear_scale(extent: Option<&NumericExtent>, options: &ScaleOptions) -> Scale {
    let Some(extent) = extent else {
        debug!("no extent, using the default [0, 1] linear scale");
        return Scale::new(ScaleKind::Linear, 0.0, 1.0, alloc::vec![0.0, 1.0]);
    };

    let range = extent.range();
    let [pad_low, pad_high] = options.pad_fraction;
    let mut a = extent.low() - pad_low * range;
    let mut b = extent.high() + pad_high * range;
    if !(b - a).is_finite() {
        warn!(
            low = extent.low(),
            high = extent.high(),
            "linear range overflows f64, keeping the data bounds"
        );
        return bounds_only(extent.low(), extent.high());
    }

    let tolerance = options.include_zero_tolerance;
    if a > 0.0 && a / b <= tolerance {
        debug!(a, b, tolerance, "including zero below positive data");
        a = 0.0;
    }
    if b < 0.0 && b / a <= tolerance {
        debug!(a, b, tolerance, "including zero above negative data");
        b = 0.0;
    }

    // Keep proportions on exactly 0..1 and percentages on exactly 0..100.
    if a == 0.0 {
        if extent.high() <= 1.0 + 1e-4 && b > 1.0 {
            b = 1.0;
        }
        if extent.high() < 100.0 + 1e-3 && b > 100.0 {
            b = 100.0;
        }
    }

    if a + 1e-9 > b {
        (a, b) = widen_degenerate(a);
        debug!(a, b, "widened a degenerate linear domain");
    }

    let div_count = options.div_count();
    if let Some(granularity) = extent.granularity()
        && (options.for_binning || extent.prefer_categorical())
    {
        let divs = (b - a) / granularity;
        if divs > div_count / 2.0 && divs < div_count * 2.0 {
            debug!(granularity, divs, "using granular ticks");
            let ticks = granular_ticks(a, b, granularity);
            return Scale::new(ScaleKind::Linear, a, b, ticks).granular();
        }
    }

    let delta = best_delta(a, b, options);
    let first = (a / delta).floor();
    if options.nice {
        let nice_a = grid_value(first, delta);
        let nice_b = grid_value((b / delta).ceil(), delta);
        if nice_a.is_finite() && nice_b.is_finite() {
            a = nice_a;
            b = nice_b;
        } else {
            warn!(a, b, delta, "nice linear domain overflows f64, keeping the data bounds");
            return bounds_only(a, b);
        }
    }

    let eps = delta * 1e-6;
    let start = if grid_value(first, delta) < a - eps {
        first + 1.0
    } else {
        first
    };
    let ticks = grid_ticks(start, delta, b + eps);
    Scale::new(ScaleKind::Linear, a, b, ticks)
}

/// A scale whose only ticks are its (finite, distinct) bounds.
fn bounds_only(a: f64, b: f64) -> Scale {
    Scale::new(ScaleKind::Linear, a, b, alloc::vec![a, b])
}

/// Spreads a single point into a range that touches zero.
fn widen_degenerate(a: f64) -> (f64, f64) {
    // Doubling can overflow near f64::MAX; the point itself still spans to zero.
    let twice = if (2.0 * a).is_finite() { 2.0 * a } else { a };
    let low = twice.min(0.0);
    let high = twice.max(0.0);
    if low == 0.0 && high == 0.0 {
        (0.0, 1.0)
    } else {
        (low, high)
    }
}

/// Picks the step from `{1, 10, 0.1, 5, 0.5, 2, 0.2} x 10^k` whose tick count is closest to
/// the desired count. Ties prefer one tick more over one tick fewer.
fn best_delta(a: f64, b: f64, options: &ScaleOptions) -> f64 {
    let desired = options.tick_count as f64;
    let raw = (b - a) / options.div_count();
    let base = 10_f64.powf(raw.log10().floor());

    let candidates = [
        base,
        base * 10.0,
        base / 10.0,
        base * 5.0,
        base / 2.0,
        base * 2.0,
        base / 5.0,
    ];
    let mut best = base;
    let mut best_diff = f64::INFINITY;
    for d in candidates {
        let low = d * (a / d).ceil();
        let high = d * (b / d).floor();
        let mut count = ((high - low) / d).round() + 1.0;
        if options.nice && a < low {
            count += 1.0;
        }
        if options.nice && b > high {
            count += 1.0;
        }
        let mut diff = (count - desired).abs();
        if count > desired {
            diff -= 0.001;
        }
        if diff < best_diff {
            best_diff = diff;
            best = d;
        }
    }
    best
}

/// One tick per multiple of `granularity` inside `[a, b]`.
fn granular_ticks(a: f64, b: f64, granularity: f64) -> Vec<f64> {
    let start = (a / granularity - 1e-6).ceil();
    grid_ticks(start, granularity, b + granularity * 1e-6)
}

/// Grid values `start * step, (start + 1) * step, ...` up to and including `limit`.
fn grid_ticks(start: f64, step: f64, limit: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    for i in 0..MAX_TICKS {
        let v = grid_value(start + i as f64, step);
        if v > limit {
            return ticks;
        }
        ticks.push(v);
    }
    warn!(step, limit, "linear tick generation hit the {MAX_TICKS} tick cap");
    ticks
}

/// Returns `index * step`, computed as a division for decimal steps so `3 * 0.1` is `0.3`.
fn grid_value(index: f64, step: f64) -> f64 {
    let v = if step < 1.0 {
        let inverse = 1.0 / step;
        let rounded = inverse.round();
        if (inverse - rounded).abs() <= 1e-9 * rounded {
            index / rounded
        } else {
            index * step
        }
    } else {
        index * step
    };
    // Normalize `-0.0`.
    v + 0.0
}
