// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors

#![cfg(test)]


mod tests;


/// Testing function for [`Eq`] + [`Clone`].
///
/// It also requires [`core::fmt::Debug`] for assertion.
pub(crate) fn test_auto_clone<T: Clone + Eq + core::fmt::Debug>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    assert_eq!(*orig_value, cloned);
    cloned.clone_from(orig_value);
    assert_eq!(*orig_value, cloned);
}


/// Testing function for [`Debug`](core::fmt::Debug) (for coverage).
pub(crate) fn cover_auto_debug<T: core::fmt::Debug>(value: &T) {
    let _ = format!("{:?}", value);
}


/// Test that the [`Debug`](core::fmt::Debug) output of each (unit) variant
/// of an enum matches the auto-generated one (its name).
#[doc(alias = "test_auto_debug_for_enum")]
macro_rules! test_auto_debug_for_enum_impl {
    ($ty: ident, []) => {};
    ($ty: ident, [$($variant: ident),+ $(,)?]) => {
        $(
            assert_eq!(format!("{:?}", $ty::$variant), stringify!($variant));
        )+
    };
}

pub(crate) use test_auto_debug_for_enum_impl as test_auto_debug_for_enum;
