// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric extents: the field statistics a scale is inferred from.
//!
//! An extent is produced upstream (by whatever computed the field's statistics) and is only
//! consumed here. Construction validates the input contract; a NaN bound or an inverted range
//! means the statistics stage is broken, so it is reported instead of being repaired.

use crate::DateUnit;

/// Value transform requested for a numeric field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Transform {
    /// Values are plotted as-is.
    #[default]
    Linear,
    /// Values are plotted on a base-10 logarithmic axis.
    Log,
}

/// Errors returned when an extent violates its input contract.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ExtentError {
    /// One of the bounds is NaN or infinite.
    #[error("extent bounds must be finite (low = {low}, high = {high})")]
    NonFinite {
        /// Lower bound as supplied.
        low: f64,
        /// Upper bound as supplied.
        high: f64,
    },
    /// The upper bound is below the lower bound.
    #[error("extent is inverted (low = {low} > high = {high})")]
    Inverted {
        /// Lower bound as supplied.
        low: f64,
        /// Upper bound as supplied.
        high: f64,
    },
    /// The granularity is NaN, infinite, zero, or negative.
    #[error("granularity must be finite and positive, got {0}")]
    InvalidGranularity(f64),
}

/// The numeric range of one field, plus the hints scale inference needs.
///
/// Date extents store fractional days since 1970-01-01 UTC.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "ExtentFields", into = "ExtentFields")
)]
pub struct NumericExtent {
    low: f64,
    high: f64,
    date_unit: Option<DateUnit>,
    granularity: Option<f64>,
    prefer_categorical: bool,
    transform: Transform,
}

impl NumericExtent {
    /// Creates a plain numeric extent.
    ///
    /// `low == high` is allowed; scale inference widens it.
    pub fn new(low: f64, high: f64) -> Result<Self, ExtentError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ExtentError::NonFinite { low, high });
        }
        if high < low {
            return Err(ExtentError::Inverted { low, high });
        }
        Ok(Self {
            low,
            high,
            date_unit: None,
            granularity: None,
            prefer_categorical: false,
            transform: Transform::Linear,
        })
    }

    /// Creates a date extent (days since the epoch) whose values are naturally spaced by `unit`.
    pub fn dates(low: f64, high: f64, unit: DateUnit) -> Result<Self, ExtentError> {
        Ok(Self {
            date_unit: Some(unit),
            ..Self::new(low, high)?
        })
    }

    /// Sets the discrete step of the data (e.g. `1.0` for integer-valued fields).
    pub fn with_granularity(mut self, granularity: f64) -> Result<Self, ExtentError> {
        if !granularity.is_finite() || granularity <= 0.0 {
            return Err(ExtentError::InvalidGranularity(granularity));
        }
        self.granularity = Some(granularity);
        Ok(self)
    }

    /// Marks the field as preferring categorical display.
    pub fn with_prefer_categorical(mut self, prefer_categorical: bool) -> Self {
        self.prefer_categorical = prefer_categorical;
        self
    }

    /// Sets the value transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns `high - low`.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns `true` for date extents.
    pub fn is_date(&self) -> bool {
        self.date_unit.is_some()
    }

    /// Natural date unit of a date extent.
    pub fn date_unit(&self) -> Option<DateUnit> {
        self.date_unit
    }

    /// Discrete step of the data, if known.
    pub fn granularity(&self) -> Option<f64> {
        self.granularity
    }

    /// Whether the field prefers categorical display.
    pub fn prefer_categorical(&self) -> bool {
        self.prefer_categorical
    }

    /// Requested value transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct ExtentFields {
    low: f64,
    high: f64,
    #[serde(default)]
    date_unit: Option<DateUnit>,
    #[serde(default)]
    granularity: Option<f64>,
    #[serde(default)]
    prefer_categorical: bool,
    #[serde(default)]
    transform: Transform,
}

#[cfg(feature = "serde")]
impl TryFrom<ExtentFields> for NumericExtent {
    type Error = ExtentError;

    fn try_from(fields: ExtentFields) -> Result<Self, Self::Error> {
        let mut extent = Self::new(fields.low, fields.high)?
            .with_prefer_categorical(fields.prefer_categorical)
            .with_transform(fields.transform);
        extent.date_unit = fields.date_unit;
        if let Some(granularity) = fields.granularity {
            extent = extent.with_granularity(granularity)?;
        }
        Ok(extent)
    }
}

#[cfg(feature = "serde")]
impl From<NumericExtent> for ExtentFields {
    fn from(extent: NumericExtent) -> Self {
        Self {
            low: extent.low,
            high: extent.high,
            date_unit: extent.date_unit,
            granularity: extent.granularity,
            prefer_categorical: extent.prefer_categorical,
            transform: extent.transform,
        }
    }
}
