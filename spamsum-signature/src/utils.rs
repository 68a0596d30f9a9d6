// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 spamsum-signature contributors


/// Computes the number of decimal digits required to print an [`u32`] value.
///
/// This is the wrapper with fallbacks for stable [`u32::ilog10`].
///
/// # Development Notes
///
/// Consider removing the fallback once MSRV of 1.67 is acceptable.
#[inline]
#[allow(clippy::incompatible_msrv)]
pub(crate) fn u32_decimal_len(value: u32) -> usize {
    cfg_if::cfg_if! {
        if #[cfg(spamsum_ilog10 = "stable")] {
            u32::checked_ilog10(value).map_or(1, |x| x as usize + 1)
        }
        else {
            {
                let mut value = value;
                let mut len = 1usize;
                while value >= 10 {
                    value /= 10;
                    len += 1;
                }
                len
            }
        }
    }
}
