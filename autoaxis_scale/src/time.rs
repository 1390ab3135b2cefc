// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date scale inference.
//!
//! Dates are days since the epoch. The tick step is a calendar unit times a small multiple of
//! it (e.g. 15 minutes, 3 months, 5 years), and ticks are produced by stepping on the calendar
//! from a floored start, so month ticks land on month starts.

extern crate alloc;

use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::date_unit::MILLIS_PER_DAY;
use crate::scale::MAX_TICKS;
use crate::{DateUnit, NumericExtent, Scale, ScaleError, ScaleKind, ScaleOptions};

/// Infers a date scale for `extent`.
///
/// A single-instant extent (narrower than a millisecond) is widened by one of its natural date
/// units on each side, using days when the extent has no unit.
pub fn date_scale(extent: &NumericExtent, options: &ScaleOptions) -> Result<Scale, ScaleError> {
    let mut a = extent.low();
    let mut b = extent.high();

    // Closer than the calendar resolution counts as a single instant.
    if (b - a) * MILLIS_PER_DAY < 1.0 {
        let unit = extent.date_unit().unwrap_or(DateUnit::Day);
        a = unit
            .increment(a, -1)
            .ok_or(ScaleError::DateOutOfRange(a))?;
        b = unit.increment(b, 1).ok_or(ScaleError::DateOutOfRange(b))?;
        debug!(%unit, a, b, "widened a single-instant date domain");
    } else {
        let range = b - a;
        a -= options.pad_fraction[0] * range;
        b += options.pad_fraction[1] * range;
    }

    let gap = (b - a) / options.div_count();
    let unit = DateUnit::for_span(gap * 4.0);
    let multiple = best_multiple(unit, gap);
    debug!(%unit, multiple, gap, "chose date tick step");

    let mut x = unit
        .floor(a, multiple)
        .ok_or(ScaleError::DateOutOfRange(a))?;
    if options.nice {
        a = x;
    }

    let mut ticks = Vec::new();
    for _ in 0..MAX_TICKS {
        if x >= b {
            // Past the data: keep this tick only as a nice upper bound or an exact hit.
            if options.nice || x == b {
                b = x;
                ticks.push(x);
            }
            return Ok(Scale::new(ScaleKind::Date, a, b, ticks).with_tick_unit(unit, multiple));
        }
        if x >= a {
            ticks.push(x);
        }
        x = unit
            .advance(x, multiple)
            .ok_or(ScaleError::DateOutOfRange(x))?;
    }
    warn!(%unit, multiple, "date tick generation hit the {MAX_TICKS} tick cap");
    Ok(Scale::new(ScaleKind::Date, a, b, ticks).with_tick_unit(unit, multiple))
}

/// Picks the divisor of the unit's base cycle closest to the desired gap.
///
/// Multiples of 4, and of 6 for 60-based units, give awkward tick spacing and are skipped.
/// Ties go to the larger multiple.
fn best_multiple(unit: DateUnit, gap_days: f64) -> u32 {
    let target = gap_days / unit.approx_days();
    let base = unit.base();
    let mut multiple = 1;
    for i in 2..=base / 2 {
        if base % i != 0 || i == 4 || (i == 6 && base == 60) {
            continue;
        }
        if (target - f64::from(i)).abs() <= (target - f64::from(multiple)).abs() {
            multiple = i;
        }
    }
    multiple
}

#[cfg(test)]
mod tests {
    extern crate std;

    use chrono::NaiveDate;

    use super::*;
    use crate::date_unit::to_days;

    fn day(y: i32, m: u32, d: u32) -> f64 {
        to_days(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn single_day_expands_one_day_each_way() {
        let d = day(2022, 3, 10);
        let extent = NumericExtent::dates(d, d, DateUnit::Day).unwrap();
        let s = date_scale(&extent, &ScaleOptions::new()).unwrap();
        assert_eq!(s.domain(), (d - 1.0, d + 1.0));
        for boundary in [d - 1.0, d, d + 1.0] {
            assert!(s.ticks().contains(&boundary), "missing {boundary}");
        }
        assert_eq!(s.tick_unit(), Some((DateUnit::Hour, 12)));
    }

    #[test]
    fn monthly_ticks_land_on_month_starts() {
        let extent =
            NumericExtent::dates(day(2021, 1, 15), day(2021, 12, 10), DateUnit::Day).unwrap();
        let s = date_scale(&extent, &ScaleOptions::new().with_tick_count(12)).unwrap();
        assert_eq!(s.tick_unit(), Some((DateUnit::Month, 1)));
        assert_eq!(s.min(), day(2021, 1, 1));
        assert_eq!(s.max(), day(2022, 1, 1));
        assert_eq!(s.ticks().len(), 13);
        assert_eq!(s.ticks()[1], day(2021, 2, 1));
        assert_eq!(s.ticks()[2], day(2021, 3, 1));
    }

    #[test]
    fn not_nice_keeps_the_data_bounds() {
        let extent =
            NumericExtent::dates(day(2021, 1, 15), day(2021, 12, 10), DateUnit::Day).unwrap();
        let s = date_scale(
            &extent,
            &ScaleOptions::new().with_tick_count(12).with_nice(false),
        )
        .unwrap();
        assert_eq!(s.domain(), (day(2021, 1, 15), day(2021, 12, 10)));
        assert_eq!(s.ticks().first(), Some(&day(2021, 2, 1)));
        assert_eq!(s.ticks().last(), Some(&day(2021, 12, 1)));
    }

    #[test]
    fn not_nice_keeps_an_upper_tick_that_lands_exactly_on_the_data() {
        let end = day(2021, 6, 1);
        let extent = NumericExtent::dates(day(2021, 1, 15), end, DateUnit::Day).unwrap();
        let s = date_scale(&extent, &ScaleOptions::new().with_nice(false)).unwrap();
        assert_eq!(s.tick_unit(), Some((DateUnit::Month, 1)));
        assert_eq!(s.max(), end);
        assert_eq!(s.ticks().first(), Some(&day(2021, 2, 1)));
        assert_eq!(s.ticks().last(), Some(&end));
    }

    #[test]
    fn not_nice_drops_an_upper_tick_past_the_data() {
        let end = day(2021, 5, 31);
        let extent = NumericExtent::dates(day(2021, 1, 15), end, DateUnit::Day).unwrap();
        let s = date_scale(&extent, &ScaleOptions::new().with_nice(false)).unwrap();
        assert_eq!(s.tick_unit(), Some((DateUnit::Month, 1)));
        assert_eq!(s.max(), end);
        assert_eq!(s.ticks().last(), Some(&day(2021, 5, 1)));
    }

    #[test]
    fn decades_of_data_step_in_years() {
        let extent = NumericExtent::dates(day(1990, 6, 1), day(2019, 6, 1), DateUnit::Day).unwrap();
        let s = date_scale(&extent, &ScaleOptions::new().with_tick_count(7)).unwrap();
        assert_eq!(s.tick_unit(), Some((DateUnit::Year, 5)));
        assert_eq!(s.min(), day(1990, 1, 1));
        assert_eq!(s.max(), day(2020, 1, 1));
        assert_eq!(s.ticks().len(), 7);
    }

    #[test]
    fn multiple_search_skips_awkward_divisors() {
        // Four minutes would be closest, but it is skipped.
        assert_eq!(best_multiple(DateUnit::Minute, 4.0 * DateUnit::Minute.approx_days()), 5);
        // Six is skipped for 60-based units.
        assert_eq!(best_multiple(DateUnit::Second, 6.0 * DateUnit::Second.approx_days()), 5);
        assert_eq!(best_multiple(DateUnit::Hour, 6.0 * DateUnit::Hour.approx_days()), 6);
        assert_eq!(best_multiple(DateUnit::Month, 0.4 * 365.25 / 12.0), 1);
    }
}
