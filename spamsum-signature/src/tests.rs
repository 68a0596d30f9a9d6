// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors

//! Tests: [`crate`].

#![cfg(test)]

use crate::{ParseErrorInfo, ParseErrorKind, ParseErrorOrigin, Signature};


#[test]
fn parse_and_render_through_crate_root() {
    let sig: Signature = str::parse("3:abc:xyz").unwrap();
    assert_eq!(sig.block_size(), 3);
    assert_eq!(sig.hash_part_1(), b"abc");
    assert_eq!(sig.hash_part_2(), b"xyz");
    assert_eq!(sig.to_string(), "3:abc:xyz");
}

#[test]
fn parse_errors_through_crate_root() {
    let err = str::parse::<Signature>("6:ab").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::MalformedSignature);
    assert_eq!(err.origin(), ParseErrorOrigin::HashPart1);
    assert_eq!(err.offset(), 4);
}

#[test]
fn signature_is_usable_across_threads() {
    let sig: Signature = str::parse("6:abcdefgh:ijkl").unwrap();
    let shared = std::sync::Arc::new(sig.clone());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || shared.to_string())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "6:abcdefgh:ijkl");
    }
    assert_eq!(*shared, sig);
}
