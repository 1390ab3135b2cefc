// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Automatic scale inference for chart axes.
//!
//! Given a field's numeric extent and a few caller-supplied options, this crate decides the
//! final domain of an axis and the ticks to draw on it:
//! - **Linear** scales pick a step from the `1, 2, 5 x 10^k` family, optionally snap to zero,
//!   and fall back to one tick per discrete value for granular data.
//! - **Log** scales tick on decades, adding half-decades or skipping decades depending on how
//!   many the domain spans.
//! - **Date** scales pick a calendar unit and multiple, then step on the calendar.
//!
//! Inference never fails on degenerate data (single points, empty ranges); it widens them.
//! Input-contract violations such as NaN bounds are rejected when the [`NumericExtent`] is
//! built.
//!
//! ```
//! use autoaxis_scale::{NumericExtent, ScaleOptions, linear_scale};
//!
//! let extent = NumericExtent::new(0.0, 95.0).unwrap();
//! let scale = linear_scale(Some(&extent), &ScaleOptions::new().with_tick_count(6));
//! assert_eq!(scale.domain(), (0.0, 100.0));
//! assert_eq!(scale.ticks(), [0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod date_unit;
mod extent;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod linear;
mod log;
mod scale;
mod time;

pub use date_unit::DateUnit;
pub use extent::{ExtentError, NumericExtent, Transform};
pub use format::format_tick_with_step;
pub use linear::linear_scale;
pub use log::log_scale;
pub use scale::{Scale, ScaleError, ScaleKind, ScaleOptions, infer_scale};
pub use time::date_scale;
