// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar and fixed-point helpers.

/// The number of fractional bits of the rasterizer's fixed-point coordinates.
pub const FIXED_SHIFT: i32 = 8;

/// One pixel in fixed-point coordinates.
pub const FIXED_ONE: i32 = 1 << FIXED_SHIFT;

/// Convert a scalar coordinate to 24.8 fixed point.
///
/// Out-of-range values saturate, they do not wrap.
#[inline(always)]
pub fn to_fixed(v: f32) -> i32 {
    (v * FIXED_ONE as f32).round() as i32
}

// From <https://github.com/linebender/tiny-skia/blob/68b198a7210a6bbf752b43d6bc4db62445730313/path/src/scalar.rs#L12>
const SCALAR_NEARLY_ZERO: f32 = 1.0 / (1 << 12) as f32;

/// A number of useful methods for f32 numbers.
pub trait FloatExt: Sized {
    /// Whether the number is approximately 0.
    fn is_nearly_zero(&self) -> bool {
        self.is_nearly_zero_within_tolerance(SCALAR_NEARLY_ZERO)
    }

    /// Whether the number is approximately 0, with a given tolerance.
    fn is_nearly_zero_within_tolerance(&self, tolerance: f32) -> bool;
}

impl FloatExt for f32 {
    fn is_nearly_zero_within_tolerance(&self, tolerance: f32) -> bool {
        debug_assert!(tolerance >= 0.0, "tolerance must be positive");

        self.abs() <= tolerance
    }
}
