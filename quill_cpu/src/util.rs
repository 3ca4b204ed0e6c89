// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

pub(crate) mod scalar {
    /// Perform an approximate division by 255.
    ///
    /// Divisions are slower than shifting and adding, and the compiler does
    /// not replace divisions by 255 with an equivalent on its own. The
    /// rounding differs slightly from a true division: the result is the
    /// ceiling of `val / 256`, which is exact for multiples of 255 and
    /// otherwise at most one higher than `val / 255`. `val` must stay below
    /// `65280` for these properties to hold.
    #[inline(always)]
    pub(crate) const fn div_255(val: u32) -> u32 {
        debug_assert!(
            val < 65280,
            "the properties of `div_255` do not hold for values of `65280` or greater"
        );
        (val + 255) >> 8
    }

}
