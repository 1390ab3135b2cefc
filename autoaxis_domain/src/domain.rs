// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembling one axis from the fields plotted on it.

extern crate alloc;

use alloc::vec::Vec;

use autoaxis_scale::{
    NumericExtent, Scale, ScaleError, ScaleOptions, Transform, date_scale, linear_scale,
    log_scale,
};
use tracing::debug;

use crate::{DomainSpan, Field, SpanContent};

/// The fields that share one axis, in declaration order.
///
/// ```
/// use autoaxis_domain::{AxisDomain, Field, Summary};
/// use autoaxis_scale::{NumericExtent, ScaleOptions, Transform};
///
/// let mut axis = AxisDomain::new(true);
/// axis.add_field(&Field::numeric("low", NumericExtent::new(12.0, 40.0).unwrap()));
/// axis.add_field(
///     &Field::numeric("total", NumericExtent::new(30.0, 85.0).unwrap()).with_summary(Summary::Sum),
/// );
///
/// let scale = axis
///     .infer_scale(&ScaleOptions::new(), Transform::Linear)
///     .unwrap()
///     .unwrap();
/// assert_eq!(scale.domain(), (0.0, 100.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AxisDomain {
    prefer_continuous: bool,
    spans: Vec<DomainSpan>,
}

impl AxisDomain {
    /// Creates an empty axis domain.
    pub fn new(prefer_continuous: bool) -> Self {
        Self {
            prefer_continuous,
            spans: Vec::new(),
        }
    }

    /// Adds a field; its order index is the number of fields added before it.
    pub fn add_field(&mut self, field: &Field) -> &mut Self {
        let span = DomainSpan::make(field, self.spans.len(), self.prefer_continuous);
        self.spans.push(span);
        self
    }

    /// The unmerged spans, in declaration order.
    pub fn spans(&self) -> &[DomainSpan] {
        &self.spans
    }

    /// Spans sorted by rank, with each run of mergeable spans combined.
    pub fn merged(&self) -> Vec<DomainSpan> {
        let mut sorted = self.spans.clone();
        sorted.sort_by(DomainSpan::cmp_rank);

        let mut out: Vec<DomainSpan> = Vec::with_capacity(sorted.len());
        for span in sorted {
            if let Some(current) = out.last_mut()
                && let Some(merged) = current.merge(&span)
            {
                *current = merged;
                continue;
            }
            out.push(span);
        }
        debug!(
            fields = self.spans.len(),
            groups = out.len(),
            "merged axis domain"
        );
        out
    }

    /// Whether any field on the axis wants zero included.
    pub fn desires_zero(&self) -> bool {
        self.spans.iter().any(DomainSpan::desires_zero)
    }

    /// Whether the leading merged span holds dates.
    pub fn is_date(&self) -> bool {
        self.merged().first().is_some_and(DomainSpan::is_date)
    }

    /// The leading merged span's numeric extent, if it has one.
    pub fn numeric_extent(&self) -> Option<NumericExtent> {
        let merged = self.merged();
        let numeric = merged.first()?.numeric()?;
        numeric.to_numeric_extent().ok()
    }

    /// Infers the scale for the leading merged span.
    ///
    /// Returns `None` when the axis is empty or displays categories. When any field wants
    /// zero, the zero-inclusion tolerance is raised so zero is always on the axis. A log scale
    /// is used when `transform` asks for one or every field on the leading span does. The
    /// span's granularity and categorical preference reach linear inference unchanged.
    pub fn infer_scale(
        &self,
        options: &ScaleOptions,
        transform: Transform,
    ) -> Option<Result<Scale, ScaleError>> {
        let merged = self.merged();
        let lead = merged.first()?;
        let SpanContent::Range(..) = lead.content() else {
            debug!("leading span is categorical, no numeric scale");
            return None;
        };
        let numeric = lead.numeric()?;
        let extent = numeric.to_numeric_extent().ok()?;

        let mut options = *options;
        if self.desires_zero() {
            options.include_zero_tolerance = 1.0;
        }

        Some(if extent.is_date() {
            date_scale(&extent, &options)
        } else if transform == Transform::Log || extent.transform() == Transform::Log {
            log_scale(&extent, &options)
        } else {
            Ok(linear_scale(Some(&extent), &options))
        })
    }
}
