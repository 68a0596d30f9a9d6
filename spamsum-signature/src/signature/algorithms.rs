// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors

use alloc::vec::Vec;

use crate::signature::parser_state::{ParseError, ParseErrorKind, ParseErrorOrigin};


#[cfg(test)]
mod tests;


/// The delimiter between the block size and two hash parts.
pub(crate) const DELIMITER: u8 = b':';

/// The replacement byte for characters not representable in a single byte.
pub(crate) const REPLACEMENT: u8 = b'?';

/// Locates two delimiters of the signature from given bytes.
///
/// If success, [`Ok`] containing a tuple `(i1, i2)` is returned where `i1`
/// is the index of the first delimiter and `i2` is the index of the first
/// delimiter strictly after `i1`.  Any delimiters after `i2` are left to
/// the hash part 2.
pub(crate) fn find_delimiters(bytes: &[u8]) -> Result<(usize, usize), ParseError> {
    if bytes.is_empty() {
        return Err(ParseError(
            ParseErrorKind::EmptyInput,
            ParseErrorOrigin::BlockSize, 0
        ));
    }
    let i1 = match bytes.iter().position(|&ch| ch == DELIMITER) {
        Some(i1) => i1,
        None => {
            return Err(ParseError(
                ParseErrorKind::MalformedSignature,
                ParseErrorOrigin::BlockSize, bytes.len()
            ));
        }
    };
    let i2 = match bytes[i1 + 1..].iter().position(|&ch| ch == DELIMITER) {
        Some(pos) => i1 + 1 + pos,
        None => {
            return Err(ParseError(
                ParseErrorKind::MalformedSignature,
                ParseErrorOrigin::HashPart1, bytes.len()
            ));
        }
    };
    Ok((i1, i2))
}

/// Parse block size part of the signature from given bytes.
///
/// `bytes` must contain the block size part only (without the delimiter).
/// It must be a non-empty sequence of ASCII decimal digits
/// (leading zeroes are permitted) representing a value in [`u32`].
pub(crate) fn parse_block_size_from_bytes(bytes: &[u8]) -> Result<u32, ParseError> {
    if bytes.is_empty() {
        return Err(ParseError(
            ParseErrorKind::InvalidBlockSize,
            ParseErrorOrigin::BlockSize, 0
        ));
    }
    let mut block_size = 0u32;
    let mut is_block_size_in_range = true;
    for (j, ch) in bytes.iter().enumerate() {
        match *ch {
            b'0'..=b'9' => {
                // Keep scanning after an overflow so that a later non-digit
                // still reports its own offset.
                if is_block_size_in_range {
                    match block_size
                        .checked_mul(10)
                        .and_then(|x| x.checked_add((*ch - b'0') as u32))
                    {
                        Some(bs) => { block_size = bs; }
                        None => { is_block_size_in_range = false; }
                    }
                }
            }
            _ => {
                return Err(ParseError(
                    ParseErrorKind::InvalidBlockSize,
                    ParseErrorOrigin::BlockSize, j
                ));
            }
        }
    }
    if !is_block_size_in_range {
        return Err(ParseError(
            ParseErrorKind::InvalidBlockSize,
            ParseErrorOrigin::BlockSize, 0
        ));
    }
    Ok(block_size)
}

/// Encodes a string into single-byte characters.
///
/// Characters `U+0000..=U+00FF` are mapped to the byte of the same value
/// and other characters are replaced with [`REPLACEMENT`].
pub(crate) fn encode_single_byte(s: &str) -> Vec<u8> {
    s.chars()
        .map(|ch| {
            let code = ch as u32;
            if code <= 0xff { code as u8 } else { REPLACEMENT }
        })
        .collect()
}

/// Decodes a byte as a single-byte character (`U+0000..=U+00FF`).
#[inline(always)]
pub(crate) fn decode_single_byte(ch: u8) -> char {
    char::from(ch)
}
