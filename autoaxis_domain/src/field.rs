// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field statistics handed over by the upstream data stage.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use autoaxis_scale::NumericExtent;

/// Name the upstream stage gives to a synthesized row-count field.
pub const COUNT_FIELD_NAME: &str = "#count";

/// How a field's values were summarized upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Summary {
    /// Number of rows.
    Count,
    /// Sum of values.
    Sum,
    /// Arithmetic mean.
    Mean,
    /// Minimum value.
    Min,
    /// Maximum value.
    Max,
}

/// A categorical value.
///
/// Numbers compare by bit pattern (with `-0.0` equal to `0.0`), so category sets stay
/// duplicate-free without float tolerance games.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Category {
    /// A numeric category, e.g. a small integer range shown categorically.
    Number(f64),
    /// A text category.
    Text(Arc<str>),
}

impl Category {
    fn number_bits(v: f64) -> u64 {
        // -0.0 and 0.0 are the same category.
        (v + 0.0).to_bits()
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => Self::number_bits(*a) == Self::number_bits(*b),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Category {}

impl core::hash::Hash for Category {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(v) => {
                state.write_u8(0);
                Self::number_bits(*v).hash(state);
            }
            Self::Text(s) => {
                state.write_u8(1);
                s.hash(state);
            }
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<f64> for Category {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Statistics for one field (column) of the dataset.
///
/// A field with an extent is numeric (or a date, if the extent says so). Categories are the
/// field's distinct values in first-seen order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    name: Arc<str>,
    #[cfg_attr(feature = "serde", serde(default))]
    summary: Option<Summary>,
    #[cfg_attr(feature = "serde", serde(default))]
    categories: Option<Arc<[Category]>>,
    #[cfg_attr(feature = "serde", serde(default))]
    extent: Option<NumericExtent>,
}

impl Field {
    /// Creates a categorical field.
    pub fn categorical(
        name: impl Into<Arc<str>>,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self {
            name: name.into(),
            summary: None,
            categories: Some(categories.into_iter().collect::<Vec<_>>().into()),
            extent: None,
        }
    }

    /// Creates a numeric (or date) field.
    pub fn numeric(name: impl Into<Arc<str>>, extent: NumericExtent) -> Self {
        Self {
            name: name.into(),
            summary: None,
            categories: None,
            extent: Some(extent),
        }
    }

    /// Sets the summary the field was produced with.
    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Sets the field's distinct values.
    ///
    /// Numeric fields only use these when their extent prefers categorical display.
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = Some(categories.into_iter().collect::<Vec<_>>().into());
        self
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Summary, if the field is an aggregate.
    pub fn summary(&self) -> Option<Summary> {
        self.summary
    }

    /// Distinct values, if known.
    pub fn categories(&self) -> Option<&Arc<[Category]>> {
        self.categories.as_ref()
    }

    /// Numeric extent, for numeric and date fields.
    pub fn extent(&self) -> Option<&NumericExtent> {
        self.extent.as_ref()
    }

    /// Whether the field holds numbers (dates included).
    pub fn is_numeric(&self) -> bool {
        self.extent.is_some()
    }

    /// Whether the field holds dates.
    pub fn is_date(&self) -> bool {
        self.extent.is_some_and(|e| e.is_date())
    }

    /// Whether the field prefers categorical display.
    pub fn prefer_categorical(&self) -> bool {
        self.extent.is_some_and(|e| e.prefer_categorical())
    }

    /// Whether an axis showing this field should start at zero.
    ///
    /// Counts and sums read misleadingly on a floating axis.
    pub fn needs_zero(&self) -> bool {
        &*self.name == COUNT_FIELD_NAME
            || matches!(self.summary, Some(Summary::Count | Summary::Sum))
    }
}
