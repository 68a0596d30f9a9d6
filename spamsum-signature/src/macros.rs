// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors

//! Internal macros.

/// Implements [`Error`](std::error::Error) trait either in `std` or `core`.
///
/// This macro is used to implement appropriate [`Error`](std::error::Error)
/// trait, either in `core` or `std`, depending on the configuration.
#[doc(alias = "impl_error")]
macro_rules! impl_error_impl {
    ($type:ty { $($tokens:tt)* }) => {
        #[cfg(feature = "std")]
        #[cfg_attr(feature = "unstable", doc(cfg(all())))]
        impl std::error::Error for $type {
            $($tokens)*
        }
        #[cfg(all(not(feature = "std"), spamsum_error_in_core = "stable"))]
        #[allow(clippy::incompatible_msrv)]
        impl core::error::Error for $type {
            $($tokens)*
        }
    }
}
pub(crate) use impl_error_impl as impl_error;
