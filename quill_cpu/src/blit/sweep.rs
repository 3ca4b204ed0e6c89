// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The angular (sweep) gradient paint source.
//!
//! The gradient parameter is the angle around the center, measured in the
//! basis of the two axis vectors and expressed in turns. The angle comes
//! from a cubic polynomial approximation of `atan2` over the octant folding
//! `g = (|x| - |y|) / (|x| + |y|)`, so the per-pixel cost is a handful of
//! multiplies and no transcendentals.

use core::marker::PhantomData;

use quill_common::gradient::Gradient;
use quill_common::path::Point;

use super::{ExtendMode, GradientLut, PaintSource};

const DEGENERATE_DET: f32 = 1.0e-9;

// Guards the octant fold against 0/0 at the center.
const FOLD_EPSILON: f32 = 1.0e-12;

// p(g) = C0 - C1*g + C3*g³ approximates atan2 in turns over one quadrant:
// for x, y >= 0 the true angle is 1/8 - atan(g)/2π, with
// atan(g) ≈ 0.9724*g - 0.1919*g³ on [-1, 1].
const C0: f32 = 0.125;
const C1: f32 = 0.154_753;
const C3: f32 = 0.030_546;

/// Sweeps the gradient around `center`, `repeats` cycles per revolution.
pub(crate) struct SweepSource<'a, E> {
    lut: GradientLut<'a>,
    center: Point,
    // Row-major inverse of the axis matrix [radius_x radius_y].
    inv: [f32; 4],
    // Table indices per turn.
    scale: f32,
    _extend: PhantomData<E>,
}

impl<'a, E: ExtendMode> SweepSource<'a, E> {
    pub(crate) fn new(
        center: Point,
        radius_x: Point,
        radius_y: Point,
        repeats: f32,
        gradient: &'a Gradient,
    ) -> Self {
        let lut = GradientLut::new(gradient);
        let mut det = radius_x.x * radius_y.y - radius_y.x * radius_x.y;
        if det.abs() < DEGENERATE_DET {
            det = if det < 0.0 { -DEGENERATE_DET } else { DEGENERATE_DET };
        }
        let inv = [
            radius_y.y / det,
            -radius_y.x / det,
            -radius_x.y / det,
            radius_x.x / det,
        ];
        let scale = lut.len_f32() * repeats;
        Self {
            lut,
            center,
            inv,
            scale,
            _extend: PhantomData,
        }
    }

    // The angle at `(dx, dy)` in turns, in `-0.25..0.75`.
    #[inline(always)]
    fn turns(&self, dx: f32, dy: f32) -> f32 {
        let a = self.inv[0] * dx + self.inv[1] * dy;
        let b = self.inv[2] * dx + self.inv[3] * dy;
        let g = (a.abs() - b.abs()) / (a.abs() + b.abs()).max(FOLD_EPSILON);
        let mut p = C0 - C1 * g + C3 * g * g * g;
        // Quadrant fix: mirror for odd quadrants, shift the left half-plane.
        if (a < 0.0) != (b < 0.0) {
            p = -p;
        }
        if a < 0.0 {
            p += 0.5;
        }
        p
    }
}

impl<E: ExtendMode> PaintSource for SweepSource<'_, E> {
    #[inline(always)]
    fn is_opaque(&self) -> bool {
        self.lut.is_opaque()
    }

    #[inline(always)]
    fn color_at(&self, x: i32, y: i32) -> u32 {
        let dx = x as f32 + 0.5 - self.center.x;
        let dy = y as f32 + 0.5 - self.center.y;
        let idx = (self.turns(dx, dy) * self.scale).floor() as i32;
        self.lut.fetch::<E>(idx)
    }
}
