// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owned, aligned ARGB32 pixel buffer.

/// A pixmap of packed `0xAARRGGBB` pixels.
///
/// The stride is the width rounded up to a multiple of 4 pixels, and the
/// first pixel is 16-byte aligned, so every row starts a fresh 4-pixel group
/// for the blit loops. Alignment is established by over-allocating a few
/// elements and offsetting into the buffer, which keeps the crate free of
/// `unsafe`.
#[derive(Debug)]
pub struct Pixmap {
    width: u16,
    height: u16,
    stride: usize,
    buf: Vec<u32>,
    start: usize,
}

// 16 bytes, in pixels.
const ALIGN_PIXELS: usize = 4;

fn aligned_storage(len: usize) -> (Vec<u32>, usize) {
    let buf = vec![0_u32; len + ALIGN_PIXELS - 1];
    let start = buf.as_ptr().align_offset(ALIGN_PIXELS * 4);
    debug_assert!(start < ALIGN_PIXELS, "u32 storage must be 4-byte aligned");
    (buf, start)
}

impl Pixmap {
    /// Create a new pixmap with the given size in pixels.
    ///
    /// All pixels are initialized to transparent black.
    pub fn new(width: u16, height: u16) -> Self {
        let stride = (width as usize).div_ceil(ALIGN_PIXELS) * ALIGN_PIXELS;
        let (buf, start) = aligned_storage(stride * height as usize);
        Self {
            width,
            height,
            stride,
            buf,
            start,
        }
    }

    /// The width of the pixmap in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// The height of the pixmap in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The row stride in pixels; always a multiple of 4.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The pixel data, row-major with [`stride`](Self::stride) pixels per
    /// row. Pixel `(x, y)` lives at `data()[y * stride + x]`.
    pub fn data(&self) -> &[u32] {
        let len = self.stride * self.height as usize;
        &self.buf[self.start..self.start + len]
    }

    /// The pixel data, mutably.
    pub fn data_mut(&mut self) -> &mut [u32] {
        let len = self.stride * self.height as usize;
        &mut self.buf[self.start..self.start + len]
    }

    /// One row of pixels, stride wide.
    #[inline]
    pub fn row(&self, y: i32) -> &[u32] {
        debug_assert!(y >= 0 && (y as usize) < self.height as usize);
        let off = self.start + y as usize * self.stride;
        &self.buf[off..off + self.stride]
    }

    /// One row of pixels, mutably.
    #[inline]
    pub fn row_mut(&mut self, y: i32) -> &mut [u32] {
        debug_assert!(y >= 0 && (y as usize) < self.height as usize);
        let off = self.start + y as usize * self.stride;
        &mut self.buf[off..off + self.stride]
    }

    /// The pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> u32 {
        debug_assert!(x >= 0 && (x as usize) < self.width as usize);
        self.row(y)[x as usize]
    }

    /// Set the pixel at `(x, y)`.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        debug_assert!(x >= 0 && (x as usize) < self.width as usize);
        self.row_mut(y)[x as usize] = color;
    }

    /// Fill every pixel, including the padding columns, with one color.
    pub fn fill(&mut self, color: u32) {
        self.data_mut().fill(color);
    }

    /// Resize the pixmap, dropping the previous contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self::new(width, height);
    }

    /// Create a pixmap from a PNG image with straight alpha.
    #[cfg(feature = "png")]
    pub fn from_png(data: impl std::io::Read) -> Result<Self, png::DecodingError> {
        let mut decoder = png::Decoder::new(data);
        decoder.set_transformations(
            png::Transformations::normalize_to_color8() | png::Transformations::ALPHA,
        );

        let mut reader = decoder.read_info()?;
        let width: u16 = reader
            .info()
            .width
            .try_into()
            .map_err(|_| png::DecodingError::LimitsExceeded)?;
        let height: u16 = reader
            .info()
            .height
            .try_into()
            .map_err(|_| png::DecodingError::LimitsExceeded)?;

        let mut buf = vec![0_u8; reader.output_buffer_size()];
        reader.next_frame(&mut buf)?;

        let mut pixmap = Self::new(width, height);
        let w = width as usize;
        match reader.output_color_type().0 {
            png::ColorType::Rgba => {
                for y in 0..height as usize {
                    let row = pixmap.row_mut(y as i32);
                    let src = &buf[y * w * 4..][..w * 4];
                    for (px, c) in row[..w].iter_mut().zip(src.chunks_exact(4)) {
                        *px = crate::color::argb(c[3], c[0], c[1], c[2]);
                    }
                }
            }
            png::ColorType::GrayscaleAlpha => {
                for y in 0..height as usize {
                    let row = pixmap.row_mut(y as i32);
                    let src = &buf[y * w * 2..][..w * 2];
                    for (px, c) in row[..w].iter_mut().zip(src.chunks_exact(2)) {
                        *px = crate::color::argb(c[1], c[0], c[0], c[0]);
                    }
                }
            }
            // The transformations normalize every other layout away.
            _ => unreachable!("normalize_to_color8 plus ALPHA yields an alpha format"),
        }
        Ok(pixmap)
    }

    /// The pixel data as raw bytes in the platform's native `u32` byte
    /// order, padding columns included.
    pub fn data_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.data())
    }

    /// Encode the pixmap as a PNG image.
    #[cfg(feature = "png")]
    pub fn into_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut rgba = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for y in 0..self.height as i32 {
            for &px in &self.row(y)[..self.width as usize] {
                let [a, r, g, b] = crate::color::channels(px);
                rgba.extend_from_slice(&[r as u8, g as u8, b as u8, a as u8]);
            }
        }

        let mut data = Vec::new();
        let mut encoder = png::Encoder::new(&mut data, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgba)?;
        writer.finish().map(|_| data)
    }
}
