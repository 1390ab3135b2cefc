// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One field's contribution to an axis domain, and how contributions combine.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;

use autoaxis_scale::{DateUnit, ExtentError, NumericExtent, Transform};
use hashbrown::HashSet;

use crate::{Category, Field};

/// Category count at which a categorical span is considered full size.
const FULL_SIZE_CATEGORIES: usize = 8;

/// The numeric part of a [`DomainSpan`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanExtent {
    low: f64,
    high: f64,
    date_unit: Option<DateUnit>,
    include_zero_desired: bool,
    granularity: Option<f64>,
    prefer_categorical: bool,
    transform: Transform,
}

impl SpanExtent {
    /// Creates a span extent.
    ///
    /// The bounds come from a validated [`NumericExtent`], so they are finite and ordered.
    pub fn new(
        low: f64,
        high: f64,
        date_unit: Option<DateUnit>,
        include_zero_desired: bool,
    ) -> Self {
        debug_assert!(low <= high, "inverted span extent [{low}, {high}]");
        Self {
            low,
            high,
            date_unit,
            include_zero_desired,
            granularity: None,
            prefer_categorical: false,
            transform: Transform::Linear,
        }
    }

    /// Builds the span extent for a field's statistics, keeping its inference hints.
    pub fn from_extent(extent: &NumericExtent, include_zero_desired: bool) -> Self {
        Self {
            granularity: extent.granularity(),
            prefer_categorical: extent.prefer_categorical(),
            transform: extent.transform(),
            ..Self::new(
                extent.low(),
                extent.high(),
                extent.date_unit(),
                include_zero_desired,
            )
        }
    }

    /// Lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// `high - low`.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Date unit, for date spans.
    pub fn date_unit(&self) -> Option<DateUnit> {
        self.date_unit
    }

    /// Whether this span holds dates.
    pub fn is_date(&self) -> bool {
        self.date_unit.is_some()
    }

    /// Whether the axis should include zero for this span.
    pub fn include_zero_desired(&self) -> bool {
        self.include_zero_desired
    }

    /// Discrete step of the data, if every merged field has one.
    pub fn granularity(&self) -> Option<f64> {
        self.granularity
    }

    /// Whether every merged field prefers categorical display.
    pub fn prefer_categorical(&self) -> bool {
        self.prefer_categorical
    }

    /// Value transform; log only when every merged field asks for it.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Widens both extents into one.
    ///
    /// Returns `None` when `other` is absent or exactly one side is a date. The merged date
    /// unit is the finer of the two and the merged granularity the coarser; a hint only one
    /// side carries is dropped.
    pub fn merge(&self, other: Option<&Self>) -> Option<Self> {
        let other = other?;
        if self.is_date() != other.is_date() {
            return None;
        }
        Some(Self {
            low: self.low.min(other.low),
            high: self.high.max(other.high),
            date_unit: match (self.date_unit, other.date_unit) {
                (Some(a), Some(b)) => Some(a.min(b)),
                _ => None,
            },
            include_zero_desired: self.include_zero_desired || other.include_zero_desired,
            granularity: match (self.granularity, other.granularity) {
                (Some(a), Some(b)) => Some(a.max(b)),
                _ => None,
            },
            prefer_categorical: self.prefer_categorical && other.prefer_categorical,
            transform: if self.transform == other.transform {
                self.transform
            } else {
                Transform::Linear
            },
        })
    }

    /// Converts back to a [`NumericExtent`] for scale inference.
    pub fn to_numeric_extent(&self) -> Result<NumericExtent, ExtentError> {
        let extent = match self.date_unit {
            Some(unit) => NumericExtent::dates(self.low, self.high, unit)?,
            None => NumericExtent::new(self.low, self.high)?,
        }
        .with_prefer_categorical(self.prefer_categorical)
        .with_transform(self.transform);
        match self.granularity {
            Some(granularity) => extent.with_granularity(granularity),
            None => Ok(extent),
        }
    }
}

/// What a span shows on its axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpanContent<'a> {
    /// Discrete categories, in display order.
    Categories(&'a [Category]),
    /// A continuous `(low, high)` range.
    Range(f64, f64),
}

/// One field's candidate contribution to a shared axis domain.
///
/// A span carries categories, a numeric extent, or both (a numeric field that prefers
/// categorical display). Spans are immutable; [`DomainSpan::merge`] builds a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainSpan {
    order_index: usize,
    prefer_continuous: bool,
    categories: Option<Arc<[Category]>>,
    numeric: Option<SpanExtent>,
}

impl DomainSpan {
    /// Builds the span for `field`, declared at position `index`.
    pub fn make(field: &Field, index: usize, prefer_continuous: bool) -> Self {
        match field.extent() {
            Some(extent) => Self {
                order_index: index,
                prefer_continuous,
                categories: if extent.prefer_categorical() {
                    Some(field.categories().cloned().unwrap_or_else(|| Arc::from([])))
                } else {
                    None
                },
                numeric: Some(SpanExtent::from_extent(extent, field.needs_zero())),
            },
            None => Self {
                order_index: index,
                prefer_continuous,
                categories: Some(field.categories().cloned().unwrap_or_else(|| Arc::from([]))),
                numeric: None,
            },
        }
    }

    /// Declaration position of the earliest field in this span.
    pub fn order_index(&self) -> usize {
        self.order_index
    }

    /// Whether the axis prefers a continuous display when numbers are available.
    pub fn prefer_continuous(&self) -> bool {
        self.prefer_continuous
    }

    /// Categories, if the span has a categorical part.
    pub fn categories(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }

    /// Numeric part, if any.
    pub fn numeric(&self) -> Option<&SpanExtent> {
        self.numeric.as_ref()
    }

    /// Whether the span's numeric part holds dates.
    pub fn is_date(&self) -> bool {
        self.numeric.is_some_and(|n| n.is_date())
    }

    /// Whether the span asks for zero to be on the axis.
    pub fn desires_zero(&self) -> bool {
        self.numeric.is_some_and(|n| n.include_zero_desired)
    }

    fn type_score(&self) -> u8 {
        let Some(numeric) = &self.numeric else {
            return 5;
        };
        let base = if numeric.is_date() { 1 } else { 3 };
        base + u8::from(self.categories.is_some())
    }

    /// Total order used to decide which span leads an axis.
    ///
    /// Dates sort before plain numbers, which sort before categories. Ties between continuous
    /// spans go to the lower extent; ties between spans with categories go to declaration order.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.type_score()
            .cmp(&other.type_score())
            .then_with(|| match (self.categories.is_none(), &self.numeric, &other.numeric) {
                (true, Some(a), Some(b)) => a.low.total_cmp(&b.low),
                _ => self.order_index.cmp(&other.order_index),
            })
    }

    /// Merges two spans.
    ///
    /// Each part merges independently; a part present on only one side is dropped. Returns
    /// `None` when neither part merges.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        let categories = match (&self.categories, &other.categories) {
            (Some(a), Some(b)) => Some(union(a, b)),
            _ => None,
        };
        let numeric = self
            .numeric
            .as_ref()
            .and_then(|n| n.merge(other.numeric.as_ref()));
        if categories.is_none() && numeric.is_none() {
            return None;
        }
        Some(Self {
            order_index: self.order_index.min(other.order_index),
            prefer_continuous: self.prefer_continuous && other.prefer_continuous,
            categories,
            numeric,
        })
    }

    /// What the span displays.
    pub fn content(&self) -> SpanContent<'_> {
        match (&self.categories, &self.numeric) {
            (Some(c), Some(n)) if c.is_empty() || self.prefer_continuous => {
                SpanContent::Range(n.low, n.high)
            }
            (Some(c), _) => SpanContent::Categories(c),
            (None, Some(n)) => SpanContent::Range(n.low, n.high),
            (None, None) => SpanContent::Categories(&[]),
        }
    }

    /// Share of the axis this span would like, in `(0, 1]`.
    ///
    /// Continuous spans always want the full axis; categorical ones scale with their count.
    pub fn relative_size(&self) -> f64 {
        match &self.categories {
            None => 1.0,
            Some(c) => {
                // Bounded by FULL_SIZE_CATEGORIES, so the conversion is exact.
                let n = c.len().min(FULL_SIZE_CATEGORIES) as f64;
                n / FULL_SIZE_CATEGORIES as f64
            }
        }
    }
}

/// `a` in order, then the members of `b` not already seen.
fn union(a: &Arc<[Category]>, b: &Arc<[Category]>) -> Arc<[Category]> {
    let mut seen: HashSet<&Category> = a.iter().collect();
    let extra: Vec<&Category> = b.iter().filter(|c| seen.insert(*c)).collect();
    if extra.is_empty() {
        return a.clone();
    }
    a.iter().chain(extra).cloned().collect()
}
