// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base-10 log scale inference.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use tracing::{debug, warn};

use crate::scale::MAX_TICKS;
use crate::{NumericExtent, Scale, ScaleError, ScaleKind, ScaleOptions};

/// Infers a log scale for a strictly positive `extent`.
///
/// Ticks sit on powers of ten. When the domain spans few decades relative to the requested
/// tick count, half-decade ticks (`5 x 10^k`) are added; when it spans many, every other
/// decade is skipped.
pub fn log_scale(extent: &NumericExtent, options: &ScaleOptions) -> Result<Scale, ScaleError> {
    if extent.low() <= 0.0 {
        return Err(ScaleError::NonPositiveLogDomain { low: extent.low() });
    }

    let mut a = extent.low().log10();
    let mut b = extent.high().log10();

    let pad = options.pad_fraction[0].max(options.pad_fraction[1]);
    let range = b - a;
    a -= pad * range;
    b += pad * range;

    if a + 1e-9 > b {
        a -= 1.0;
        b += 1.0;
        debug!(a, b, "widened a degenerate log domain by a decade each way");
    }

    let tolerance = options.include_zero_tolerance;
    if tolerance > 0.5 && a == 0.0 {
        a = -0.5;
    }
    // Zero in log space is one in data space.
    if a > 0.0 && a / b <= tolerance {
        debug!(a, b, tolerance, "extending log domain down to one");
        a = 0.0;
    }

    if options.nice {
        a = a.floor();
        b = b.ceil();
    }

    let desired = options.tick_count as f64;
    let decades = b - a + 1.0;
    let add_fives = decades < desired * 0.666;
    let exponent_step = if decades > desired * 1.66 { 2.0 } else { 1.0 };

    let min = 10_f64.powf(a);
    let mut max = 10_f64.powf(b);
    if add_fives && max / 2.0 > extent.high() {
        max /= 2.0;
    }

    // Admit a tick that rounds onto the upper bound.
    let tolerant_high = max * 1.001;
    let mut ticks = Vec::new();
    let mut exponent = a.ceil();
    while ticks.len() < MAX_TICKS {
        let x = 10_f64.powf(exponent);
        if x >= tolerant_high {
            return Ok(Scale::new(ScaleKind::Log, min, max, ticks));
        }
        ticks.push(x);
        if add_fives && x * 5.0 < tolerant_high {
            ticks.push(x * 5.0);
        }
        exponent += exponent_step;
    }
    warn!(min, max, "log tick generation hit the {MAX_TICKS} tick cap");
    Ok(Scale::new(ScaleKind::Log, min, max, ticks))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn extent(low: f64, high: f64) -> NumericExtent {
        NumericExtent::new(low, high).unwrap()
    }

    #[test]
    fn decades_become_ticks() {
        let s = log_scale(
            &extent(1.0, 1000.0),
            &ScaleOptions::new().with_tick_count(4),
        )
        .unwrap();
        assert_eq!(s.ticks(), [1.0, 10.0, 100.0, 1000.0]);
        assert_eq!(s.domain(), (1.0, 1000.0));
        assert_eq!(s.kind(), ScaleKind::Log);
    }

    #[test]
    fn few_decades_add_half_decade_ticks() {
        let s = log_scale(
            &extent(1.0, 100.0),
            &ScaleOptions::new().with_tick_count(8),
        )
        .unwrap();
        assert_eq!(s.ticks(), [1.0, 5.0, 10.0, 50.0, 100.0]);
    }

    #[test]
    fn half_decades_trim_an_empty_top() {
        let s = log_scale(&extent(2.0, 40.0), &ScaleOptions::new().with_tick_count(8)).unwrap();
        assert_eq!(s.max(), 50.0);
        assert_eq!(s.ticks(), [1.0, 5.0, 10.0, 50.0]);
    }

    #[test]
    fn many_decades_skip_every_other_power() {
        let s = log_scale(
            &extent(1.0, 1e8),
            &ScaleOptions::new().with_tick_count(4),
        )
        .unwrap();
        assert_eq!(s.ticks(), [1.0, 100.0, 1e4, 1e6, 1e8]);
    }

    #[test]
    fn degenerate_domain_is_widened_around_the_value() {
        let s = log_scale(&extent(10.0, 10.0), &ScaleOptions::new()).unwrap();
        // One decade each way, then the empty top half-decade is trimmed.
        assert_eq!(s.domain(), (1.0, 50.0));
        assert_eq!(s.ticks(), [1.0, 5.0, 10.0, 50.0]);
    }

    #[test]
    fn non_positive_domain_is_rejected() {
        assert_eq!(
            log_scale(&extent(0.0, 10.0), &ScaleOptions::new()),
            Err(ScaleError::NonPositiveLogDomain { low: 0.0 })
        );
    }
}
