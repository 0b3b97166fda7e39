// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::log10`, `f64::floor` and friends live in `std`, not `core`. Tick
//! generation needs them, so without the `std` feature they dispatch to `libm`.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn log10(self) -> Self;
    fn powi(self, n: i32) -> Self;
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

    fn powi(self, n: i32) -> Self {
        // Only used for decimal scales, where exponents stay small.
        let mut acc = 1.0;
        for _ in 0..n.unsigned_abs() {
            acc *= self;
        }
        if n < 0 { 1.0 / acc } else { acc }
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("pixchart requires either the `std` or `libm` feature");
