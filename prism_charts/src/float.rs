// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::round` lives in `std`, not `core`, at the MSRV; this shim routes it through
//! `libm`. Newer toolchains provide it in `core` and the inherent method wins.

/// Float math helpers for `f64` in `no_std` mode.
#[allow(
    dead_code,
    reason = "shadowed by the inherent `core` method on newer toolchains"
)]
pub(crate) trait FloatExt {
    fn round(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn round(self) -> Self {
        libm::round(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("prism_charts requires either the `std` or `libm` feature");
