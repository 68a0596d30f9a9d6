// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors

extern crate version_check as rustc;

fn main() {
    // Avoid unnecessary rebuilding.
    println!("cargo:rerun-if-changed=build.rs");

    // Declare custom cfgs (checked since Rust 1.80).
    if rustc::is_min_version("1.80.0").unwrap_or(false) {
        println!("cargo:rustc-check-cfg=cfg(spamsum_ilog10, values(\"stable\", \"fallback\"))");
        println!("cargo:rustc-check-cfg=cfg(spamsum_error_in_core, values(\"stable\"))");
    }

    // Method: {Integer}::ilog10
    // ilog10: 1.67- (stable)
    // Unstable variants (int_log) are not supported.
    if rustc::is_min_version("1.67.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=spamsum_ilog10=\"stable\"");
    } else {
        println!("cargo:rustc-cfg=spamsum_ilog10=\"fallback\"");
    }

    // Trait: core::error::Error
    // error_in_core: 1.81- (stable)
    if rustc::is_min_version("1.81.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=spamsum_error_in_core=\"stable\"");
    }
}
