// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors

//! An immutable value type for spamsum / ssdeep fuzzy hash signatures.
//!
//! A fuzzy hash (or a *Context Triggered Piecewise Hash*) signature is
//! represented as a string in the form `blocksize:hash1:hash2`:
//!
//! ```text
//! 3:abc:xyz
//! ```
//!
//! This crate parses such strings into [`Signature`] values, compares them
//! for exact equality and renders them back.  Generating signatures and
//! comparing them for similarity are out of the scope of this crate.
//!
//! # Example
//!
//! ```
//! use spamsum::Signature;
//!
//! let sig: Signature = str::parse("3:abc:xyz").unwrap();
//! assert_eq!(sig.block_size(), 3);
//! assert_eq!(sig.hash_part_1(), b"abc");
//! assert_eq!(sig.hash_part_2(), b"xyz");
//! assert_eq!(sig.to_string(), "3:abc:xyz");
//! assert_eq!(sig, Signature::new(3, "abc", "xyz"));
//! ```
//!
//! # Crate Features
//!
//! *   `std` (default)
//!     Implements [`std::error::Error`] for error types.
//!     Without this feature, this crate is `no_std` (but still requires
//!     `alloc`) and implements `core::error::Error` if the compiler
//!     supports it.
//! *   `unstable`
//!     Enables Nightly-only documentation features.
//! *   `maint-code`, `maint-lints`
//!     Maintenance modes (denying warnings and checking lint names).

// no_std
#![cfg_attr(not(any(test, doc, feature = "std")), no_std)]
// Regular nightly features
#![cfg_attr(feature = "unstable", feature(doc_cfg))]
// In the code maintenance mode, disallow all warnings.
#![cfg_attr(feature = "maint-code", deny(warnings))]
#![forbid(unsafe_code)]
// Non-test code requires documents
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]
// Unless in the maintenance mode, allow unknown lints.
#![cfg_attr(not(feature = "maint-lints"), allow(unknown_lints))]
// Unless in the maintenance mode, allow old lint names.
#![cfg_attr(not(feature = "maint-lints"), allow(renamed_and_removed_lints))]

// Owned hash parts always require an allocator.
extern crate alloc;

mod macros;
mod signature;
mod test_utils;
mod utils;

pub use signature::parser_state::{ParseError, ParseErrorInfo, ParseErrorKind, ParseErrorOrigin};
pub use signature::{Signature, SignatureOperationError};

/// Constant assertions related to the base requirements.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::{assert_impl_all, const_assert, const_assert_eq};

    // Block sizes are printed into a buffer indexed by usize.
    const_assert!(usize::BITS >= 16);

    // MAX_BLOCK_SIZE_LEN_IN_CHARS is the length of u32::MAX.
    const_assert_eq!(Signature::MAX_BLOCK_SIZE_LEN_IN_CHARS, "4294967295".len());

    // Signatures are plain values shared freely between threads.
    assert_impl_all!(Signature: Send, Sync, Clone, Eq, core::hash::Hash, core::str::FromStr);
    assert_impl_all!(ParseError: Send, Sync, Copy, Eq);
    assert_impl_all!(SignatureOperationError: Send, Sync, Copy, Eq);
}

mod tests;
