// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `libm` fallbacks for the rounding and decade math used by tick inference.
//!
//! Without `std`, `f64` has no `floor`, `log10` or `powf`; importing this trait supplies them
//! under the same names so the inference code reads the same in both builds.

/// The `f64` methods tick inference needs beyond `core`.
pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn log10(self) -> Self;
    fn powf(self, n: Self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn round(self) -> Self {
        libm::round(self)
    }

    fn log10(self) -> Self {
        libm::log10(self)
    }

    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("autoaxis_scale requires either the `std` or `libm` feature");
