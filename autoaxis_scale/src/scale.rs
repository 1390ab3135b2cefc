// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale descriptions and the options that drive their inference.
//!
//! A [`Scale`] is the finished product handed to a code emitter: the scale kind, the final
//! domain, and the ticks to draw. It carries no range (pixel) information.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::{format_tick_with_step, format_tick_value};
use crate::{DateUnit, NumericExtent, Transform, date_scale, linear_scale, log_scale};

/// Upper bound on the number of ticks any inference loop produces.
pub(crate) const MAX_TICKS: usize = 10_000;

/// Caller-supplied knobs for scale inference.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScaleOptions {
    /// Expand the domain outward to the tick grid.
    pub nice: bool,
    /// Fraction of the data range added below and above the extent.
    pub pad_fraction: [f64; 2],
    /// Desired number of ticks.
    pub tick_count: usize,
    /// Snap the domain to include zero when `low / high` is at most this ratio.
    ///
    /// `0.0` only includes zero when the data already touches it; `1.0` always includes it.
    pub include_zero_tolerance: f64,
    /// The scale will bin a discrete field, so prefer one tick per discrete value.
    pub for_binning: bool,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            nice: true,
            pad_fraction: [0.0, 0.0],
            tick_count: 5,
            include_zero_tolerance: 0.1,
            for_binning: false,
        }
    }
}

impl ScaleOptions {
    /// Creates options with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Sets the low/high padding as fractions of the data range.
    pub fn with_padding(mut self, low: f64, high: f64) -> Self {
        self.pad_fraction = [low.max(0.0), high.max(0.0)];
        self
    }

    /// Sets the desired tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the zero-inclusion tolerance (clamped to `[0, 1]`).
    pub fn with_include_zero_tolerance(mut self, tolerance: f64) -> Self {
        self.include_zero_tolerance = tolerance.clamp(0.0, 1.0);
        self
    }

    /// Marks the scale as being used for binning.
    pub fn with_for_binning(mut self, for_binning: bool) -> Self {
        self.for_binning = for_binning;
        self
    }

    /// Number of gaps between the desired ticks (at least one).
    pub(crate) fn div_count(&self) -> f64 {
        self.tick_count.saturating_sub(1).max(1) as f64
    }
}

/// The kind of an inferred scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScaleKind {
    /// Continuous linear scale.
    Linear,
    /// Continuous base-10 log scale.
    Log,
    /// Calendar scale over days since the epoch.
    Date,
}

impl ScaleKind {
    /// Lowercase name, as emitted to the rendering runtime.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
            Self::Date => "date",
        }
    }
}

/// Errors returned when a scale cannot be built from an otherwise valid extent.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScaleError {
    /// A log scale was requested for data at or below zero.
    #[error("log scale requires a positive domain, got low = {low}")]
    NonPositiveLogDomain {
        /// Lower bound of the offending extent.
        low: f64,
    },
    /// A date value cannot be represented on the calendar.
    #[error("date value {0} (days since epoch) is outside the calendar range")]
    DateOutOfRange(f64),
}

/// A finished scale: kind, final domain, and the ticks to draw.
///
/// Ticks are ascending. They are not guaranteed to start at `min` when the domain was not
/// niced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale {
    kind: ScaleKind,
    min: f64,
    max: f64,
    ticks: Vec<f64>,
    granular: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    tick_unit: Option<(DateUnit, u32)>,
}

impl Scale {
    pub(crate) fn new(kind: ScaleKind, min: f64, max: f64, ticks: Vec<f64>) -> Self {
        debug_assert!(min <= max, "scale domain is inverted: [{min}, {max}]");
        debug_assert!(
            ticks.windows(2).all(|w| w[0] <= w[1]),
            "ticks must be ascending"
        );
        Self {
            kind,
            min,
            max,
            ticks,
            granular: false,
            tick_unit: None,
        }
    }

    pub(crate) fn granular(mut self) -> Self {
        self.granular = true;
        self
    }

    pub(crate) fn with_tick_unit(mut self, unit: DateUnit, multiple: u32) -> Self {
        self.tick_unit = Some((unit, multiple));
        self
    }

    /// Scale kind.
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Lower end of the final domain.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper end of the final domain.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `(min, max)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Tick positions, ascending.
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Whether ticks sit on the data's discrete step rather than a computed nice step.
    pub fn is_granular(&self) -> bool {
        self.granular
    }

    /// For date scales, the calendar unit and multiple stepped between ticks.
    pub fn tick_unit(&self) -> Option<(DateUnit, u32)> {
        self.tick_unit
    }

    /// Distance between the first two ticks, if there are at least two.
    pub fn step(&self) -> Option<f64> {
        match self.ticks.as_slice() {
            [a, b, ..] => Some(b - a),
            _ => None,
        }
    }

    /// Formats every tick for display.
    ///
    /// Date ticks use their calendar unit; linear ticks share the precision of the step; log
    /// ticks are formatted individually.
    pub fn tick_labels(&self) -> Vec<String> {
        let step = self.step().unwrap_or(0.0);
        self.ticks
            .iter()
            .map(|&v| match (self.kind, self.tick_unit) {
                (ScaleKind::Date, Some((unit, _))) => unit
                    .format_tick(v)
                    .unwrap_or_else(|| format_tick_value(v)),
                (ScaleKind::Log, _) => format_tick_value(v),
                _ => format_tick_with_step(v, step),
            })
            .collect()
    }
}

/// Infers the scale an extent asks for: date extents get a date scale, log-transformed extents
/// a log scale, everything else a linear scale.
pub fn infer_scale(extent: &NumericExtent, options: &ScaleOptions) -> Result<Scale, ScaleError> {
    if extent.is_date() {
        date_scale(extent, options)
    } else if extent.transform() == Transform::Log {
        log_scale(extent, options)
    } else {
        Ok(linear_scale(Some(extent), options))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn options_builders_clamp_inputs() {
        let o = ScaleOptions::new()
            .with_padding(-0.5, 0.1)
            .with_include_zero_tolerance(3.0)
            .with_tick_count(0);
        assert_eq!(o.pad_fraction, [0.0, 0.1]);
        assert_eq!(o.include_zero_tolerance, 1.0);
        assert_eq!(o.div_count(), 1.0);
    }

    #[test]
    fn dispatch_follows_extent_hints() {
        let options = ScaleOptions::new();
        let linear = NumericExtent::new(1.0, 50.0).unwrap();
        let log = linear.with_transform(Transform::Log);
        let date = NumericExtent::dates(18_000.0, 18_400.0, DateUnit::Day).unwrap();
        assert_eq!(infer_scale(&linear, &options).unwrap().kind(), ScaleKind::Linear);
        assert_eq!(infer_scale(&log, &options).unwrap().kind(), ScaleKind::Log);
        assert_eq!(infer_scale(&date, &options).unwrap().kind(), ScaleKind::Date);
    }

    #[test]
    fn linear_labels_share_precision() {
        let extent = NumericExtent::new(0.0, 1.0).unwrap();
        let scale = linear_scale(Some(&extent), &ScaleOptions::new().with_tick_count(3));
        assert_eq!(scale.tick_labels(), ["0.0", "0.5", "1.0"]);
    }
}
