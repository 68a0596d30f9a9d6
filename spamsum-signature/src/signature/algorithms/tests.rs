// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors

#![cfg(test)]

use crate::signature::algorithms::{
    decode_single_byte, encode_single_byte, find_delimiters,
    parse_block_size_from_bytes, REPLACEMENT
};
use crate::signature::parser_state::{
    ParseError, ParseErrorKind, ParseErrorOrigin
};


#[test]
fn find_delimiters_valid() {
    assert_eq!(find_delimiters(b"3:abc:xyz"), Ok((1, 5)));
    assert_eq!(find_delimiters(b"6:abcdefgh:ijkl"), Ok((1, 10)));
    assert_eq!(find_delimiters(b"::"), Ok((0, 1)));
    assert_eq!(find_delimiters(b"3::"), Ok((1, 2)));
    assert_eq!(find_delimiters(b"12:a:"), Ok((2, 4)));
    // Delimiters after the second one belong to the hash part 2.
    assert_eq!(find_delimiters(b"6:ab:cd:ef"), Ok((1, 4)));
    assert_eq!(find_delimiters(b"6:ab:::"), Ok((1, 4)));
}

#[test]
fn find_delimiters_invalid() {
    assert_eq!(
        find_delimiters(b""),
        Err(ParseError(ParseErrorKind::EmptyInput, ParseErrorOrigin::BlockSize, 0))
    );
    assert_eq!(
        find_delimiters(b"novaluehere"),
        Err(ParseError(ParseErrorKind::MalformedSignature, ParseErrorOrigin::BlockSize, 11))
    );
    assert_eq!(
        find_delimiters(b"6:ab"),
        Err(ParseError(ParseErrorKind::MalformedSignature, ParseErrorOrigin::HashPart1, 4))
    );
    assert_eq!(
        find_delimiters(b":"),
        Err(ParseError(ParseErrorKind::MalformedSignature, ParseErrorOrigin::HashPart1, 1))
    );
}

#[test]
fn parse_block_size_valid() {
    assert_eq!(parse_block_size_from_bytes(b"0"), Ok(0));
    assert_eq!(parse_block_size_from_bytes(b"3"), Ok(3));
    assert_eq!(parse_block_size_from_bytes(b"1536"), Ok(1536));
    // Leading zeroes are accepted (and lost).
    assert_eq!(parse_block_size_from_bytes(b"0006"), Ok(6));
    assert_eq!(parse_block_size_from_bytes(b"00000000000000000003"), Ok(3));
    assert_eq!(parse_block_size_from_bytes(b"4294967295"), Ok(u32::MAX));
}

#[test]
fn parse_block_size_invalid() {
    const CASES: &[(&[u8], usize)] = &[
        (b"",            0),
        (b"x",           0),
        (b"12a",         2),
        (b"+3",          0),
        (b"-3",          0),
        (b" 3",          0),
        (b"3 ",          1),
        (b"1,536",       1),
        (b"4294967296",  0),
        (b"99999999999", 0),
        // A non-digit after an overflow is reported by its offset.
        (b"99999999999x", 11),
    ];
    for &(bytes, offset) in CASES {
        assert_eq!(
            parse_block_size_from_bytes(bytes),
            Err(ParseError(ParseErrorKind::InvalidBlockSize, ParseErrorOrigin::BlockSize, offset)),
            "failed on bytes={:?}", bytes
        );
    }
}

#[test]
fn single_byte_encoding() {
    assert_eq!(encode_single_byte(""), b"");
    assert_eq!(encode_single_byte("abc+/XYZ"), b"abc+/XYZ");
    assert_eq!(encode_single_byte("caf\u{e9}"), b"caf\xe9");
    assert_eq!(encode_single_byte("\u{ff}\u{100}"), [0xffu8, REPLACEMENT]);
    assert_eq!(encode_single_byte("a\u{1f600}b"), [b'a', REPLACEMENT, b'b']);
}

#[test]
fn single_byte_decoding_is_inverse() {
    for ch in 0u8..=0xff {
        let mut buf = [0u8; 4];
        let s = decode_single_byte(ch).encode_utf8(&mut buf);
        assert_eq!(encode_single_byte(s), [ch], "failed on ch={}", ch);
    }
}
