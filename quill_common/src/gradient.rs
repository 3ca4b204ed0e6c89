// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gradient stop list and its color lookup table.

use core::cell::OnceCell;

use smallvec::SmallVec;

use crate::color;

/// The smallest permitted lookup table length.
pub const MIN_LUT_LEN: usize = 2;

/// The largest permitted lookup table length.
pub const MAX_LUT_LEN: usize = 8192;

// Used in place of a zero-width stop span so the interpolation factor stays
// finite.
const SPAN_NUDGE: f32 = 1.0e-6;

/// A single gradient stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// The position of the stop along the gradient axis, in `0..=1`.
    pub offset: f32,
    /// The packed ARGB32 color of the stop.
    pub color: u32,
}

/// An ordered list of color stops with a power-of-two lookup table.
///
/// The table is rebuilt lazily: mutating the stops or the table length clears
/// it, and the next [`lut`](Self::lut) call rebuilds. Degenerate stop lists
/// degrade instead of erroring: no stops behave as transparent black, a
/// single stop as a solid fill.
#[derive(Debug, Clone)]
pub struct Gradient {
    stops: SmallVec<[GradientStop; 4]>,
    lut_len: usize,
    lut: OnceCell<Vec<u32>>,
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(256)
    }
}

impl Gradient {
    /// Create a gradient with no stops and the given lookup table length.
    ///
    /// The length is rounded up to a power of two and clamped to
    /// `[MIN_LUT_LEN, MAX_LUT_LEN]`.
    pub fn new(lut_len: usize) -> Self {
        Self {
            stops: SmallVec::new(),
            lut_len: round_lut_len(lut_len),
            lut: OnceCell::new(),
        }
    }

    /// Append a stop, clamping its offset into `0..=1`.
    pub fn push_stop(&mut self, offset: f32, color: u32) -> &mut Self {
        let offset = if offset.is_nan() {
            log::warn!("gradient stop offset is NaN, clamping to 0");
            0.0
        } else {
            offset.clamp(0.0, 1.0)
        };
        self.stops.push(GradientStop { offset, color });
        self.lut.take();
        self
    }

    /// Remove all stops, keeping the table length.
    pub fn clear_stops(&mut self) -> &mut Self {
        self.stops.clear();
        self.lut.take();
        self
    }

    /// Set the lookup table length, rounded up to a power of two and clamped
    /// to `[MIN_LUT_LEN, MAX_LUT_LEN]`.
    pub fn set_lookup_length(&mut self, len: usize) -> &mut Self {
        let len = round_lut_len(len);
        if len != self.lut_len {
            self.lut_len = len;
            self.lut.take();
        }
        self
    }

    /// The stops in append order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// The lookup table length; always a power of two.
    pub fn lookup_length(&self) -> usize {
        self.lut_len
    }

    /// Whether every stop is fully opaque.
    ///
    /// A gradient without stops renders as transparent black and is not
    /// opaque.
    pub fn is_opaque(&self) -> bool {
        !self.stops.is_empty() && self.stops.iter().all(|s| color::is_opaque(s.color))
    }

    /// The color lookup table, rebuilding it first if a stop or the length
    /// changed since the last call.
    pub fn lut(&self) -> &[u32] {
        self.lut
            .get_or_init(|| build_lut(&self.stops, self.lut_len))
    }
}

fn round_lut_len(len: usize) -> usize {
    len.clamp(MIN_LUT_LEN, MAX_LUT_LEN).next_power_of_two()
}

fn build_lut(stops: &[GradientStop], len: usize) -> Vec<u32> {
    let mut lut = vec![0_u32; len];
    if stops.is_empty() {
        return lut;
    }

    // Stable sort, so stops sharing an offset keep their append order and
    // the later one wins on the far side of the transition.
    let mut sorted: SmallVec<[GradientStop; 4]> = SmallVec::from_slice(stops);
    sorted.sort_by(|a, b| a.offset.total_cmp(&b.offset));

    let last = (len - 1) as f32;
    let mut seg = 0;
    for (i, entry) in lut.iter_mut().enumerate() {
        let pos = i as f32 / last;
        while seg + 1 < sorted.len() && pos > sorted[seg + 1].offset {
            seg += 1;
        }
        *entry = if pos <= sorted[0].offset {
            // Flat fill before the first stop.
            sorted[0].color
        } else if seg + 1 == sorted.len() {
            // Flat fill after the last stop.
            sorted[seg].color
        } else {
            let s0 = sorted[seg];
            let s1 = sorted[seg + 1];
            let span = (s1.offset - s0.offset).max(SPAN_NUDGE);
            let t = ((pos - s0.offset) / span).clamp(0.0, 1.0);
            color::lerp(s0.color, s1.color, (t * 65536.0) as u32)
        };
    }
    lut
}
