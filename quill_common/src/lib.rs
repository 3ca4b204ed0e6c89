// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate holds the shared building blocks of the Quill renderer: the
//! path store with its lazy adaptor views, the curve flattener, the scanline
//! rasterizer core, the winding-to-coverage evaluation, the gradient table,
//! paint descriptors, and the aligned pixel buffer.
//!
//! # Usage
//!
//! This crate should not be used on its own; you probably want `quill_cpu`,
//! which adds the blit pipeline and the [`Canvas`] façade on top of these
//! primitives.
//!
//! # Features
//!
//! - `png`: Allow loading and storing [`Pixmap`][crate::pixmap::Pixmap]s as
//!   PNG images.
//!
//! [`Canvas`]: https://crates.io/crates/quill_cpu

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![expect(
    clippy::cast_possible_truncation,
    reason = "coordinate and channel casts are range-checked by construction"
)]

pub mod color;
pub mod coverage;
pub mod flatten;
pub mod gradient;
pub mod math;
pub mod paint;
pub mod path;
pub mod pixmap;
pub mod raster;
pub mod rect;
pub mod view;

pub use fearless_simd;
pub use peniko;
