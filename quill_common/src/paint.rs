// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint descriptors.
//!
//! A [`Paint`] describes what to put inside a filled path: a solid color or
//! one of the four gradient kinds. Gradient variants borrow their
//! [`Gradient`], whose stop list and lookup table stay owned by the caller,
//! so there is no retained paint state and no global cache. All coordinates
//! are canvas-space; the canvas applies its view offset to the path, not to
//! the paint.

use peniko::Extend;

use crate::gradient::Gradient;
use crate::path::Point;

/// What to fill a path with.
#[derive(Debug, Clone)]
pub enum Paint<'a> {
    /// A solid packed ARGB32 color.
    Solid(u32),
    /// A linear gradient along the axis `p0..p1`.
    Linear {
        /// The point mapping to the start of the gradient.
        p0: Point,
        /// The point mapping to the end of the gradient.
        p1: Point,
        /// The gradient colors.
        gradient: &'a Gradient,
        /// How positions outside the axis map into the table.
        extend: Extend,
    },
    /// A radial (elliptical) gradient.
    ///
    /// `radius_x` and `radius_y` are vectors from the center to the ellipse,
    /// so the ellipse may be rotated or sheared.
    Radial {
        /// The center of the ellipse.
        center: Point,
        /// The first radius vector.
        radius_x: Point,
        /// The second radius vector.
        radius_y: Point,
        /// The gradient colors.
        gradient: &'a Gradient,
        /// How positions beyond the ellipse map into the table.
        extend: Extend,
    },
    /// An angular (sweep) gradient around a center.
    Sweep {
        /// The center of the sweep.
        center: Point,
        /// The first axis vector; angles are measured in the axis basis.
        radius_x: Point,
        /// The second axis vector.
        radius_y: Point,
        /// How many gradient cycles one revolution covers.
        repeats: f32,
        /// The gradient colors.
        gradient: &'a Gradient,
        /// How the angular position maps into the table.
        extend: Extend,
    },
    /// A biradial gradient interpolating between two circles.
    Biradial {
        /// The center of the start circle.
        c0: Point,
        /// The radius of the start circle.
        r0: f32,
        /// The center of the end circle.
        c1: Point,
        /// The radius of the end circle.
        r1: f32,
        /// The gradient colors.
        gradient: &'a Gradient,
        /// How positions outside the circle pair map into the table.
        extend: Extend,
    },
}

impl Paint<'_> {
    /// Whether the paint writes only fully opaque colors.
    pub fn is_opaque(&self) -> bool {
        match self {
            Self::Solid(c) => crate::color::is_opaque(*c),
            Self::Linear { gradient, .. }
            | Self::Radial { gradient, .. }
            | Self::Sweep { gradient, .. }
            | Self::Biradial { gradient, .. } => gradient.is_opaque(),
        }
    }
}

impl<'a> From<u32> for Paint<'a> {
    fn from(color: u32) -> Self {
        Self::Solid(color)
    }
}

impl<'a> From<peniko::color::AlphaColor<peniko::color::Srgb>> for Paint<'a> {
    fn from(color: peniko::color::AlphaColor<peniko::color::Srgb>) -> Self {
        Self::Solid(crate::color::from_alpha_color(color))
    }
}
