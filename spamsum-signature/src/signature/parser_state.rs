// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors

use crate::macros::impl_error;


/// An enumeration representing a cause of
/// a [signature](crate::Signature) parse error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Any: the input is empty.
    EmptyInput,
    /// Any: fewer than two delimiters (`':'`) are found.
    MalformedSignature,
    /// Block size: is empty, not a decimal number or does not fit in [`u32`].
    InvalidBlockSize,
}

impl core::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ParseErrorKind::EmptyInput         => "signature string is empty",
            ParseErrorKind::MalformedSignature => "signature is not valid (two ':' delimiters are expected)",
            ParseErrorKind::InvalidBlockSize   => "block size is not a valid 32-bit unsigned decimal number",
        })
    }
}


/// A part which (possibly) caused a
/// [signature](crate::Signature) parse error.
///
/// This is the part the parser was reading when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorOrigin {
    /// Block size.
    BlockSize,
    /// Hash part 1.
    HashPart1,
    /// Hash part 2.
    HashPart2,
}

impl core::fmt::Display for ParseErrorOrigin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ParseErrorOrigin::BlockSize => "block size",
            ParseErrorOrigin::HashPart1 => "hash part 1",
            ParseErrorOrigin::HashPart2 => "hash part 2",
        })
    }
}


/// The error type for parse operations of [`Signature`](crate::Signature).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError(
    pub(crate) ParseErrorKind,
    pub(crate) ParseErrorOrigin,
    pub(crate) usize,
);

/// The trait implementing a [`Signature`](crate::Signature) parse error.
pub trait ParseErrorInfo {
    /// Returns the cause of the error.
    fn kind(&self) -> ParseErrorKind;
    /// Returns the part which (possibly) caused the error.
    fn origin(&self) -> ParseErrorOrigin;
    /// Returns the byte offset at which the error is detected.
    fn offset(&self) -> usize;
}

impl ParseErrorInfo for ParseError {
    fn kind(&self) -> ParseErrorKind { self.0 }
    fn origin(&self) -> ParseErrorOrigin { self.1 }
    fn offset(&self) -> usize { self.2 }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "error occurred while parsing a signature ({1}, at byte offset {2}): {0}",
            self.kind(),
            self.origin(),
            self.offset()
        )
    }
}

impl_error! { ParseError {} }
