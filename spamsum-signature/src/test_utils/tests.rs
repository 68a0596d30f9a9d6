// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors

#![cfg(test)]

use crate::test_utils::{cover_auto_debug, test_auto_clone, test_auto_debug_for_enum};

#[test]
fn auto_clone_valid() {
    #[derive(PartialEq, Eq, Clone, Debug)]
    struct Example(u8);
    test_auto_clone(&Example(1));
    cover_auto_debug(&Example(2));
}

#[test]
#[should_panic]
fn auto_clone_counterexample() {
    #[derive(PartialEq, Eq, Debug)]
    struct Counterexample(u8);
    impl Clone for Counterexample {
        // BROKEN: returns fixed value rather than itself.
        fn clone(&self) -> Self { Self(0) }
    }
    test_auto_clone(&Counterexample(1));
}


mod test_auto_debug_for_enum {
    use super::*;

    #[derive(Debug)]
    enum AutoEnumExample {
        OK1,
        OK2,
    }
    enum DebugImplEnumExample {
        OK1,
        Broken,
    }
    impl core::fmt::Debug for DebugImplEnumExample {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            match self {
                Self::OK1 => write!(f, "OK1"),
                // BROKEN: it does not match.
                Self::Broken => write!(f, "I_SAID_BROKEN"),
            }
        }
    }
    #[test]
    fn valid_examples() {
        test_auto_debug_for_enum!(AutoEnumExample, []);
        test_auto_debug_for_enum!(AutoEnumExample, [ OK1 ]);
        test_auto_debug_for_enum!(AutoEnumExample, [ OK1, ]);
        test_auto_debug_for_enum!(AutoEnumExample, [ OK1, OK2 ]);
        test_auto_debug_for_enum!(DebugImplEnumExample, [ OK1, ]);
    }
    #[test]
    #[should_panic]
    fn counterexample_01() {
        test_auto_debug_for_enum!(DebugImplEnumExample, [ Broken ]);
    }
    #[test]
    #[should_panic]
    fn counterexample_02() {
        test_auto_debug_for_enum!(DebugImplEnumExample, [ OK1, Broken, ]);
    }
}
