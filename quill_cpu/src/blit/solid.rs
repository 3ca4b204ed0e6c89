// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The solid-color paint source.

use super::PaintSource;
use crate::util::scalar::div_255;

pub(crate) struct SolidSource {
    color: u32,
    opaque: bool,
}

impl SolidSource {
    pub(crate) fn new(color: u32) -> Self {
        Self {
            color,
            opaque: quill_common::color::is_opaque(color),
        }
    }
}

impl PaintSource for SolidSource {
    #[inline(always)]
    fn is_opaque(&self) -> bool {
        self.opaque
    }

    #[inline(always)]
    fn color_at(&self, _x: i32, _y: i32) -> u32 {
        self.color
    }

    #[inline(always)]
    fn colors4(&self, _x: i32, _y: i32) -> [u32; 4] {
        [self.color; 4]
    }

    #[inline(always)]
    fn write_span(&self, span: &mut [u32], _x: i32, _y: i32) {
        span.fill(self.color);
    }

    fn blend_span(&self, span: &mut [u32], _x: i32, _y: i32, cov: u16) {
        let src = self.color;
        let af = (((src >> 24) * cov as u32) + 0x8000) >> 16;
        if af == 0 {
            return;
        }
        if af == 255 {
            span.fill(src);
            return;
        }
        // Premultiply the source by the effective alpha once for the whole
        // span.
        let inv = 255 - af;
        let pa = af;
        let pr = div_255(((src >> 16) & 0xFF) * af);
        let pg = div_255(((src >> 8) & 0xFF) * af);
        let pb = div_255((src & 0xFF) * af);
        for px in span.iter_mut() {
            let d = *px;
            let a = pa + div_255((d >> 24) * inv);
            let r = pr + div_255(((d >> 16) & 0xFF) * inv);
            let g = pg + div_255(((d >> 8) & 0xFF) * inv);
            let b = pb + div_255((d & 0xFF) * inv);
            *px = (a << 24) | (r << 16) | (g << 8) | b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blit::src_over;

    #[test]
    fn constant_span_blend_matches_the_per_pixel_path() {
        let src = SolidSource::new(0x80FF_4020);
        let mut span = [0xFF10_2030_u32; 7];
        let expect: Vec<u32> = span.iter().map(|&d| src_over(d, 0x80FF_4020, 0x7000)).collect();
        src.blend_span(&mut span, 0, 0, 0x7000);
        assert_eq!(&span[..], &expect[..]);
    }
}
