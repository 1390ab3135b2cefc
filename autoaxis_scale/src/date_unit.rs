// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar units for date axes.
//!
//! Dates are modeled as fractional **days** since 1970-01-01 UTC. Stepping is calendar aware:
//! a month step from Jan 1 lands on Feb 1, not 30 days later.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

pub(crate) const MILLIS_PER_DAY: f64 = 86_400_000.0;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar unit used to step between date ticks.
///
/// Units are ordered from finest to coarsest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DateUnit {
    /// One second.
    Second,
    /// One minute.
    Minute,
    /// One hour.
    Hour,
    /// One calendar day.
    Day,
    /// Seven days, starting on Monday.
    Week,
    /// One calendar month.
    Month,
    /// Three calendar months, starting in Jan/Apr/Jul/Oct.
    Quarter,
    /// One calendar year.
    Year,
    /// Ten calendar years.
    Decade,
    /// One hundred calendar years.
    Century,
}

enum Step {
    Millis(i64),
    Months(i64),
}

impl DateUnit {
    /// Every unit, finest first.
    pub const ALL: [Self; 10] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::Year,
        Self::Decade,
        Self::Century,
    ];

    /// Approximate length of the unit in days.
    pub fn approx_days(self) -> f64 {
        match self {
            Self::Second => 1.0 / 86_400.0,
            Self::Minute => 1.0 / 1_440.0,
            Self::Hour => 1.0 / 24.0,
            Self::Day => 1.0,
            Self::Week => 7.0,
            Self::Month => 365.25 / 12.0,
            Self::Quarter => 365.25 / 4.0,
            Self::Year => 365.25,
            Self::Decade => 3_652.5,
            Self::Century => 36_525.0,
        }
    }

    /// The unit's natural cycle; tick multiples are chosen among its divisors.
    pub fn base(self) -> u32 {
        match self {
            Self::Second | Self::Minute => 60,
            Self::Hour => 24,
            Self::Day => 30,
            Self::Week | Self::Quarter => 4,
            Self::Month => 12,
            Self::Year | Self::Decade | Self::Century => 10,
        }
    }

    /// Lowercase unit name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::Decade => "decade",
            Self::Century => "century",
        }
    }

    /// Picks the coarsest unit that fits at least 3.5 times into `days`.
    ///
    /// Falls back to [`DateUnit::Second`] for tiny spans.
    pub fn for_span(days: f64) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|unit| unit.approx_days() * 3.5 <= days)
            .unwrap_or(Self::Second)
    }

    /// Rounds `days` down to the start of the enclosing unit, aligned to `multiple`.
    ///
    /// For example 10:37 floored to minutes with a multiple of 15 gives 10:30, and May floored
    /// to months with a multiple of 3 gives April 1st. Days align to multiples counted from the
    /// epoch and weeks start on Monday.
    ///
    /// Returns `None` if the value is outside the representable calendar range.
    pub fn floor(self, days: f64, multiple: u32) -> Option<f64> {
        let dt = to_datetime(days)?;
        let m = multiple.max(1);
        let date = dt.date();
        let floored = match self {
            Self::Second => date.and_hms_opt(dt.hour(), dt.minute(), dt.second() / m * m)?,
            Self::Minute => date.and_hms_opt(dt.hour(), dt.minute() / m * m, 0)?,
            Self::Hour => date.and_hms_opt(dt.hour() / m * m, 0, 0)?,
            Self::Day => {
                let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
                let back = date
                    .signed_duration_since(epoch)
                    .num_days()
                    .rem_euclid(i64::from(m));
                date.checked_sub_signed(TimeDelta::try_days(back)?)?
                    .and_hms_opt(0, 0, 0)?
            }
            Self::Week => {
                let back = i64::from(date.weekday().num_days_from_monday());
                date.checked_sub_signed(TimeDelta::try_days(back)?)?
                    .and_hms_opt(0, 0, 0)?
            }
            Self::Month => month_start(date.year(), date.month0() / m * m)?,
            Self::Quarter => month_start(date.year(), date.month0() / (3 * m) * (3 * m))?,
            Self::Year => year_start(date.year(), m)?,
            Self::Decade => year_start(date.year(), m.checked_mul(10)?)?,
            Self::Century => year_start(date.year(), m.checked_mul(100)?)?,
        };
        Some(to_days(floored))
    }

    /// Moves `days` by `n` units on the calendar (`n` may be negative).
    ///
    /// Month-based units clamp the day of month (Jan 31 + 1 month is Feb 28/29).
    /// Returns `None` if the result is outside the representable calendar range.
    pub fn increment(self, days: f64, n: i32) -> Option<f64> {
        self.offset(days, i64::from(n))
    }

    /// Moves `days` forward by `multiple` units.
    pub(crate) fn advance(self, days: f64, multiple: u32) -> Option<f64> {
        self.offset(days, i64::from(multiple))
    }

    fn offset(self, days: f64, count: i64) -> Option<f64> {
        let dt = to_datetime(days)?;
        let stepped = match self.step() {
            Step::Millis(ms) => dt.checked_add_signed(TimeDelta::try_milliseconds(
                ms.checked_mul(count)?,
            )?)?,
            Step::Months(months) => {
                let total = months.checked_mul(count)?;
                let delta = Months::new(u32::try_from(total.unsigned_abs()).ok()?);
                if total >= 0 {
                    dt.checked_add_months(delta)?
                } else {
                    dt.checked_sub_months(delta)?
                }
            }
        };
        Some(to_days(stepped))
    }

    fn step(self) -> Step {
        match self {
            Self::Second => Step::Millis(1_000),
            Self::Minute => Step::Millis(60_000),
            Self::Hour => Step::Millis(3_600_000),
            Self::Day => Step::Millis(86_400_000),
            Self::Week => Step::Millis(7 * 86_400_000),
            Self::Month => Step::Months(1),
            Self::Quarter => Step::Months(3),
            Self::Year => Step::Months(12),
            Self::Decade => Step::Months(120),
            Self::Century => Step::Months(1_200),
        }
    }

    /// Formats a tick at `days` for an axis stepping in this unit.
    ///
    /// Examples: `12:05:30` (seconds), `12:05` (minutes, hours), `Jan 5` (days, weeks),
    /// `Jan 2020` (months), `Q1 2020` (quarters), `2020` (years and coarser).
    pub fn format_tick(self, days: f64) -> Option<String> {
        let dt = to_datetime(days)?;
        let month = MONTH_NAMES.get(dt.month0() as usize)?;
        let year = dt.year();
        Some(match self {
            Self::Second => alloc::format!(
                "{:02}:{:02}:{:02}",
                dt.hour(),
                dt.minute(),
                dt.second()
            ),
            Self::Minute | Self::Hour => alloc::format!("{:02}:{:02}", dt.hour(), dt.minute()),
            Self::Day | Self::Week => alloc::format!("{month} {}", dt.day()),
            Self::Month => alloc::format!("{month} {year}"),
            Self::Quarter => alloc::format!("Q{} {year}", dt.month0() / 3 + 1),
            Self::Year | Self::Decade | Self::Century => alloc::format!("{year}"),
        })
    }
}

impl core::fmt::Display for DateUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

fn month_start(year: i32, month0: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)?.and_hms_opt(0, 0, 0)
}

fn year_start(year: i32, multiple: u32) -> Option<NaiveDateTime> {
    let m = i32::try_from(multiple).ok()?;
    NaiveDate::from_ymd_opt(year.div_euclid(m) * m, 1, 1)?.and_hms_opt(0, 0, 0)
}

/// Converts days since the epoch into a calendar value (millisecond precision).
pub(crate) fn to_datetime(days: f64) -> Option<NaiveDateTime> {
    let ms = (days * MILLIS_PER_DAY).round();
    // Well past chrono's representable range, and far inside i64.
    if !ms.is_finite() || ms.abs() > 1e17 {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by the finite and magnitude checks above"
    )]
    let ms = ms as i64;
    let nanos = u32::try_from(ms.rem_euclid(1_000) * 1_000_000).ok()?;
    DateTime::from_timestamp(ms.div_euclid(1_000), nanos).map(|dt| dt.naive_utc())
}

/// Converts a calendar value back into days since the epoch.
pub(crate) fn to_days(dt: NaiveDateTime) -> f64 {
    dt.and_utc().timestamp_millis() as f64 / MILLIS_PER_DAY
}
