// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors

//! Signature value type.

use core::fmt::Write;

use alloc::string::String;
use alloc::vec::Vec;

use crate::macros::impl_error;
use crate::signature::algorithms::{
    decode_single_byte, encode_single_byte, find_delimiters,
    parse_block_size_from_bytes, DELIMITER,
};
use crate::signature::parser_state::ParseError;
use crate::utils::u32_decimal_len;

pub(crate) mod algorithms;
pub mod parser_state;

/// An immutable fuzzy hash (spamsum / ssdeep) signature.
///
/// # Signature Internals
///
/// A signature consists of three parts:
///
/// 1.  Block size
///
///     The chunk size the originating hash algorithm used to compute
///     both hash parts.  It is carried as a [`u32`] and not validated
///     any further (a real spamsum block size is always `3 * 2^n` but
///     this type does not require that).
///
/// 2.  Hash part 1
///
///     The first hash fragment, computed with the block size above.
///
/// 3.  Hash part 2
///
///     The second hash fragment, computed with the doubled block size.
///
/// Both hash parts are opaque byte sequences.  They usually consist of
/// Base64 alphabets but no alphabet is enforced and both of them may be
/// empty.
///
/// The string representation is `"{block_size}:{hash_part_1}:{hash_part_2}"`
/// like this:
///
/// ```text
/// 6:3ll7QzDkmJmMHkQoO/llSZEnEuLszmbMAWn:VqDk5QtLbW
/// ```
///
/// # Parsing
///
/// The parser locates the first `':'` and then the next `':'` after that.
/// The block size is the text before the first one and must be a decimal
/// number that fits in [`u32`] (without a sign; leading zeroes are
/// accepted but not preserved).  Everything between the delimiters is the
/// hash part 1 and *everything* after the second one, including any extra
/// `':'` characters, is the hash part 2.
///
/// ```
/// # use spamsum::Signature;
/// let sig: Signature = str::parse("6:ab:cd:ef").unwrap();
/// assert_eq!(sig.block_size(), 6);
/// assert_eq!(sig.hash_part_1(), b"ab");
/// assert_eq!(sig.hash_part_2(), b"cd:ef");
/// ```
///
/// Hash parts are not checked at all.  This means that the hash part 2
/// may contain `':'` while the hash part 1 cannot (because the delimiter
/// search would have split it away).
///
/// # Character Encoding
///
/// Each byte of a hash part corresponds to exactly one character
/// (`U+0000..=U+00FF`) in the string representation.  ASCII hash parts
/// (which is what hash generators produce) are reproduced exactly.
/// When a [`str`] is parsed, characters not representable in a single
/// byte are replaced with `'?'`.  Use [`from_bytes()`](Self::from_bytes())
/// to keep arbitrary bytes verbatim.
///
/// # Equality
///
/// Two signatures are equal if and only if their block sizes are equal and
/// both hash parts are byte-for-byte equal (including the length).
/// No normalization of any kind is performed.
///
/// ```
/// # use spamsum::Signature;
/// let a: Signature = str::parse("3:abc:xyz").unwrap();
/// let b = Signature::new(3, "abc", "xyz");
/// let c = Signature::new(3, "abc", "xy");
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Clone)]
pub struct Signature {
    /// Block size.
    block_size: u32,

    /// Hash part 1.
    hash_part_1: Vec<u8>,

    /// Hash part 2.
    hash_part_2: Vec<u8>,
}

/// An enumeration representing a cause of a generic signature error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureOperationError {
    /// When converting a signature to a string, a buffer overflow would occur.
    StringizationOverflow,
}

impl core::fmt::Display for SignatureOperationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            SignatureOperationError::StringizationOverflow => {
                "overflow will occur while converting to the string representation"
            }
        })
    }
}

impl_error! { SignatureOperationError {} }

impl Signature {
    /// The maximum length of the block size in the string representation.
    ///
    /// This is the length of [`u32::MAX`] in decimal.
    pub const MAX_BLOCK_SIZE_LEN_IN_CHARS: usize = 10;

    /// Creates a new signature from its parts.
    ///
    /// This constructor performs no validation and never fails.
    ///
    /// ```
    /// # use spamsum::Signature;
    /// let sig = Signature::new(3, "abc", b"xyz".to_vec());
    /// assert_eq!(sig.to_string(), "3:abc:xyz");
    /// ```
    pub fn new(
        block_size: u32,
        hash_part_1: impl Into<Vec<u8>>,
        hash_part_2: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            block_size,
            hash_part_1: hash_part_1.into(),
            hash_part_2: hash_part_2.into(),
        }
    }

    /// Creates an empty signature (`"0::"`).
    pub fn empty() -> Self {
        Self::new(0, Vec::new(), Vec::new())
    }

    /// The block size of the signature.
    #[inline]
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// A reference to the hash part 1.
    #[inline]
    pub fn hash_part_1(&self) -> &[u8] {
        &self.hash_part_1
    }

    /// A reference to the hash part 2.
    #[inline]
    pub fn hash_part_2(&self) -> &[u8] {
        &self.hash_part_2
    }

    /// Decomposes the signature into its parts:
    /// the block size, the hash part 1 and the hash part 2.
    pub fn into_parts(self) -> (u32, Vec<u8>, Vec<u8>) {
        (self.block_size, self.hash_part_1, self.hash_part_2)
    }

    /// The length of this signature in the string representation.
    ///
    /// This is the exact size (in bytes) required to store the result of
    /// [`store_into_bytes()`](Self::store_into_bytes()).  It equals to the
    /// length in characters of the [`Display`](core::fmt::Display) output.
    #[inline]
    pub fn len_in_str(&self) -> usize {
        u32_decimal_len(self.block_size)
            + self.hash_part_1.len()
            + self.hash_part_2.len()
            + 2
    }

    /// Store the string representation of the signature into the bytes.
    ///
    /// If this method succeeds, it returns [`Ok(n)`](Ok) where `n` is
    /// the number of bytes written to `buffer`.
    ///
    /// The only case this function will fail (returns an [`Err`]) is,
    /// when `buffer` does not have enough size to store string representation
    /// of the signature.  In this case, `buffer` is not overwritten.
    ///
    /// Required size of the `buffer` is [`len_in_str()`](Self::len_in_str()) bytes.
    pub fn store_into_bytes(&self, buffer: &mut [u8]) -> Result<usize, SignatureOperationError> {
        let len_in_str = self.len_in_str();
        if buffer.len() < len_in_str {
            return Err(SignatureOperationError::StringizationOverflow);
        }
        self.store_into_bytes_internal(&mut buffer[..len_in_str]);
        Ok(len_in_str)
    }

    /// Stores the string representation into the buffer of the exact size.
    fn store_into_bytes_internal(&self, buffer: &mut [u8]) {
        debug_assert_eq!(buffer.len(), self.len_in_str());
        let len_block_size = u32_decimal_len(self.block_size);
        let mut value = self.block_size;
        for slot in buffer[..len_block_size].iter_mut().rev() {
            *slot = b'0' + (value % 10) as u8;
            value /= 10;
        }
        let mut i = len_block_size;
        buffer[i] = DELIMITER;
        i += 1;
        buffer[i..i + self.hash_part_1.len()].copy_from_slice(&self.hash_part_1);
        i += self.hash_part_1.len();
        buffer[i] = DELIMITER;
        i += 1;
        buffer[i..].copy_from_slice(&self.hash_part_2);
    }

    /// Converts the signature to the bytes of its string representation.
    ///
    /// Unlike [`to_string()`](alloc::string::ToString::to_string()),
    /// bytes in hash parts are copied verbatim.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut vec = alloc::vec![0u8; self.len_in_str()];
        self.store_into_bytes_internal(vec.as_mut_slice());
        vec
    }

    /// Parse a signature from given bytes (a slice of [`u8`])
    /// of a string representation.
    ///
    /// Both hash parts are copied verbatim.
    ///
    /// ```
    /// # use spamsum::{ParseErrorInfo, ParseErrorKind, Signature};
    /// let sig = Signature::from_bytes(b"3:abc:xyz").unwrap();
    /// assert_eq!(sig, Signature::new(3, "abc", "xyz"));
    /// let err = Signature::from_bytes(b"x:abc:xyz").unwrap_err();
    /// assert_eq!(err.kind(), ParseErrorKind::InvalidBlockSize);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let (i1, i2) = find_delimiters(bytes)?;
        let block_size = parse_block_size_from_bytes(&bytes[..i1])?;
        Ok(Self::new(
            block_size,
            &bytes[i1 + 1..i2],
            &bytes[i2 + 1..],
        ))
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Signature {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        self.block_size == other.block_size
            && self.hash_part_1 == other.hash_part_1
            && self.hash_part_2 == other.hash_part_2
    }
}

impl Eq for Signature {}

impl core::hash::Hash for Signature {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        // Lengths go first so that moving a byte between hash parts
        // changes the input to the hasher.
        state.write_u32(self.block_size);
        state.write_usize(self.hash_part_1.len());
        state.write_usize(self.hash_part_2.len());
        state.write(&self.hash_part_1);
        state.write(&self.hash_part_2);
    }
}

impl core::convert::From<(u32, Vec<u8>, Vec<u8>)> for Signature {
    fn from(value: (u32, Vec<u8>, Vec<u8>)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl core::convert::From<Signature> for String {
    fn from(value: Signature) -> Self {
        alloc::string::ToString::to_string(&value)
    }
}

/// Writes a hash part, one character per byte.
fn write_hash_part(f: &mut core::fmt::Formatter<'_>, part: &[u8]) -> core::fmt::Result {
    if part.is_ascii() {
        if let Ok(s) = core::str::from_utf8(part) {
            return f.write_str(s);
        }
    }
    for &ch in part {
        f.write_char(decode_single_byte(ch))?;
    }
    Ok(())
}

impl core::fmt::Display for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:", self.block_size)?;
        write_hash_part(f, &self.hash_part_1)?;
        f.write_char(':')?;
        write_hash_part(f, &self.hash_part_2)
    }
}

/// Byte string wrapper for [`Debug`](core::fmt::Debug) output.
struct EscapedBytes<'a>(&'a [u8]);

impl core::fmt::Debug for EscapedBytes<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_char('"')?;
        for &ch in self.0 {
            write!(f, "{}", core::ascii::escape_default(ch))?;
        }
        f.write_char('"')
    }
}

impl core::fmt::Debug for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signature")
            .field("block_size", &self.block_size)
            .field("hash_part_1", &EscapedBytes(&self.hash_part_1))
            .field("hash_part_2", &EscapedBytes(&self.hash_part_2))
            .finish()
    }
}

impl core::str::FromStr for Signature {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (i1, i2) = find_delimiters(s.as_bytes())?;
        let block_size = parse_block_size_from_bytes(&s.as_bytes()[..i1])?;
        // Delimiters are ASCII and always on character boundaries.
        Ok(Self::new(
            block_size,
            encode_single_byte(&s[i1 + 1..i2]),
            encode_single_byte(&s[i2 + 1..]),
        ))
    }
}

/// Parses a signature from a string.
///
/// This is the same as [`str::parse()`] and reports the same errors.
impl core::convert::TryFrom<&str> for Signature {
    type Error = ParseError;
    #[inline(always)]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        str::parse(value)
    }
}
