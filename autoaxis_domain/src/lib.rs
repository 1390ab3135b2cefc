// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis domain assembly for charts.
//!
//! Every field plotted on an axis contributes a [`DomainSpan`]: its categories, its numeric
//! extent, or both. [`AxisDomain`] ranks the spans (dates, then numbers, then categories),
//! merges the ones that can share an axis, and hands the leading numeric span to
//! [`autoaxis_scale`] for tick inference.
//!
//! ```
//! use autoaxis_domain::{AxisDomain, Category, Field, SpanContent};
//!
//! let mut axis = AxisDomain::new(false);
//! axis.add_field(&Field::categorical("q1", ["north", "east"].map(Category::from)));
//! axis.add_field(&Field::categorical("q2", ["east", "west"].map(Category::from)));
//!
//! let merged = axis.merged();
//! assert_eq!(merged.len(), 1);
//! let SpanContent::Categories(values) = merged[0].content() else {
//!     unreachable!()
//! };
//! assert_eq!(values.len(), 3);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod domain;
mod field;
mod span;

pub use domain::AxisDomain;
pub use field::{COUNT_FIELD_NAME, Category, Field, Summary};
pub use span::{DomainSpan, SpanContent, SpanExtent};
