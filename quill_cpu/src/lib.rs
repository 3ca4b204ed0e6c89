// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill is a software scanline rasterizer for filled 2D vector paths.
//!
//! It fills paths built from line, quadratic and cubic segments into a
//! 32-bpp ARGB pixel buffer, with solid colors and linear, radial, angular
//! and biradial gradients, each in pad, repeat and mirror modes, under the
//! non-zero or even-odd winding rule.
//!
//! ## Usage
//!
//! - Create a [`Canvas`], a fixed-size drawing target.
//! - Build a [`Path`] with the chainable `move_to … close` API.
//! - Fill it with a [`Paint`] under a [`Fill`][peniko::Fill] rule.
//!
//! ```rust
//! use quill_cpu::peniko::Fill;
//! use quill_cpu::{Canvas, Paint, Path};
//!
//! let mut canvas = Canvas::new(10, 5);
//! let mut path = Path::new();
//! path.move_to(3., 1.).line_to(7., 1.).line_to(7., 4.).line_to(3., 4.).close();
//! canvas.fill(&path, &Paint::Solid(0xFFFF_00FF), Fill::NonZero);
//!
//! assert_eq!(canvas.pixmap().pixel(4, 2), 0xFFFF_00FF);
//! assert_eq!(canvas.pixmap().pixel(0, 0), 0);
//! ```
//!
//! ## Features
//!
//! - `png`: Allow loading and storing [`Pixmap`]s as PNG images.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blit;
mod canvas;
mod util;

pub use canvas::Canvas;
pub use quill_common::color;
pub use quill_common::gradient::{Gradient, GradientStop};
pub use quill_common::paint::Paint;
pub use quill_common::path::{Path, PathEl, Point, Verb};
pub use quill_common::pixmap::Pixmap;
pub use quill_common::raster::{Rasterizer, Row};
pub use quill_common::rect::IntRect;
pub use quill_common::view::PathOps;
pub use quill_common::{fearless_simd, peniko};
