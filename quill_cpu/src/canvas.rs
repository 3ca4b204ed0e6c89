// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas façade: view and clip state plus fill dispatch.

use fearless_simd::Level;
use peniko::{Extend, Fill};
use quill_common::paint::Paint;
use quill_common::path::Path;
use quill_common::pixmap::Pixmap;
use quill_common::raster::Rasterizer;
use quill_common::rect::IntRect;
use quill_common::view::PathOps;

use crate::blit::{
    self, biradial::BiradialSource, linear::LinearSource, radial::RadialSource,
    solid::SolidSource, sweep::SweepSource, PaintSource, WindingRule,
};

// One entry of the view/clip stack.
#[derive(Clone, Copy, Debug)]
struct ViewState {
    view: IntRect,
    clip: IntRect,
}

/// A drawing target owning its pixel buffer, rasterizer and view state.
///
/// Paths are given in view coordinates; [`fill`](Self::fill) offsets them by
/// the view origin through a lazy view, feeds them through the rasterizer
/// under the current clip, and composites with the blit matching the paint,
/// winding rule and repeat mode. The clip is always the intersection of the
/// view with every previously applied clip; an empty clip turns draws into
/// no-ops.
#[derive(Debug)]
pub struct Canvas {
    pixmap: Pixmap,
    raster: Rasterizer,
    view: IntRect,
    clip: IntRect,
    stack: Vec<ViewState>,
    scratch: Path,
}

impl Canvas {
    /// Create a canvas with the given size in pixels, detecting the SIMD
    /// level.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_level(width, height, Level::try_detect().unwrap_or(Level::baseline()))
    }

    /// Create a canvas with an explicit SIMD level.
    pub fn with_level(width: u16, height: u16, level: Level) -> Self {
        let device = IntRect::from_wh(width as i32, height as i32);
        Self {
            pixmap: Pixmap::new(width, height),
            raster: Rasterizer::new(level),
            view: device,
            clip: device,
            stack: Vec::new(),
            scratch: Path::new(),
        }
    }

    /// The width of the canvas in pixels.
    pub fn width(&self) -> u16 {
        self.pixmap.width()
    }

    /// The height of the canvas in pixels.
    pub fn height(&self) -> u16 {
        self.pixmap.height()
    }

    /// The pixel buffer.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// The pixel buffer, mutably.
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// The current view rectangle, in device coordinates.
    pub fn view(&self) -> IntRect {
        self.view
    }

    /// The current clip rectangle, in device coordinates.
    pub fn clip(&self) -> IntRect {
        self.clip
    }

    /// Overwrite every pixel with one color, ignoring view and clip.
    pub fn clear(&mut self, color: u32) {
        self.pixmap.fill(color);
    }

    /// Push the current view and clip onto the state stack.
    pub fn save(&mut self) {
        self.stack.push(ViewState {
            view: self.view,
            clip: self.clip,
        });
    }

    /// Restore the most recently saved view and clip.
    ///
    /// Restoring with an empty stack resets to the whole device.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.view = state.view;
            self.clip = state.clip;
        } else {
            let device = IntRect::from_wh(self.width() as i32, self.height() as i32);
            self.view = device;
            self.clip = device;
        }
    }

    /// Make `rect` the view; the clip becomes its intersection with the
    /// prior clip.
    pub fn set_view(&mut self, rect: IntRect) {
        self.view = rect;
        self.clip = self.clip.intersect(&rect);
    }

    /// Intersect the clip with `rect`, given in device coordinates.
    pub fn set_clip(&mut self, rect: IntRect) {
        self.clip = self.clip.intersect(&rect);
    }

    /// Fill a path with a paint under a winding rule.
    pub fn fill(&mut self, path: &impl PathOps, paint: &Paint<'_>, rule: Fill) {
        if self.clip.is_empty() {
            return;
        }
        self.raster.begin(self.clip);
        let (vx, vy) = (self.view.x0 as f32, self.view.y0 as f32);
        self.raster.add_path(&path.offset(vx, vy));

        let raster = &mut self.raster;
        let pixmap = &mut self.pixmap;
        match paint {
            Paint::Solid(color) => run(raster, pixmap, rule, SolidSource::new(*color)),
            Paint::Linear {
                p0,
                p1,
                gradient,
                extend,
            } => match extend {
                Extend::Pad => run(
                    raster,
                    pixmap,
                    rule,
                    LinearSource::<blit::Pad>::new(*p0, *p1, gradient),
                ),
                Extend::Repeat => run(
                    raster,
                    pixmap,
                    rule,
                    LinearSource::<blit::Repeat>::new(*p0, *p1, gradient),
                ),
                Extend::Reflect => run(
                    raster,
                    pixmap,
                    rule,
                    LinearSource::<blit::Reflect>::new(*p0, *p1, gradient),
                ),
            },
            Paint::Radial {
                center,
                radius_x,
                radius_y,
                gradient,
                extend,
            } => match extend {
                Extend::Pad => run(
                    raster,
                    pixmap,
                    rule,
                    RadialSource::<blit::Pad>::new(*center, *radius_x, *radius_y, gradient),
                ),
                Extend::Repeat => run(
                    raster,
                    pixmap,
                    rule,
                    RadialSource::<blit::Repeat>::new(*center, *radius_x, *radius_y, gradient),
                ),
                Extend::Reflect => run(
                    raster,
                    pixmap,
                    rule,
                    RadialSource::<blit::Reflect>::new(*center, *radius_x, *radius_y, gradient),
                ),
            },
            Paint::Sweep {
                center,
                radius_x,
                radius_y,
                repeats,
                gradient,
                extend,
            } => match extend {
                Extend::Pad => run(
                    raster,
                    pixmap,
                    rule,
                    SweepSource::<blit::Pad>::new(*center, *radius_x, *radius_y, *repeats, gradient),
                ),
                Extend::Repeat => run(
                    raster,
                    pixmap,
                    rule,
                    SweepSource::<blit::Repeat>::new(
                        *center, *radius_x, *radius_y, *repeats, gradient,
                    ),
                ),
                Extend::Reflect => run(
                    raster,
                    pixmap,
                    rule,
                    SweepSource::<blit::Reflect>::new(
                        *center, *radius_x, *radius_y, *repeats, gradient,
                    ),
                ),
            },
            Paint::Biradial {
                c0,
                r0,
                c1,
                r1,
                gradient,
                extend,
            } => match extend {
                Extend::Pad => run(
                    raster,
                    pixmap,
                    rule,
                    BiradialSource::<blit::Pad>::new(*c0, *r0, *c1, *r1, gradient),
                ),
                Extend::Repeat => run(
                    raster,
                    pixmap,
                    rule,
                    BiradialSource::<blit::Repeat>::new(*c0, *r0, *c1, *r1, gradient),
                ),
                Extend::Reflect => run(
                    raster,
                    pixmap,
                    rule,
                    BiradialSource::<blit::Reflect>::new(*c0, *r0, *c1, *r1, gradient),
                ),
            },
        }
    }

    /// Fill an axis-aligned rectangle, given in view coordinates.
    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint<'_>, rule: Fill) {
        let mut rect = core::mem::take(&mut self.scratch);
        rect.reset()
            .move_to(x0, y0)
            .line_to(x1, y0)
            .line_to(x1, y1)
            .line_to(x0, y1)
            .close();
        self.fill(&rect, paint, rule);
        self.scratch = rect;
    }
}

fn run<P: PaintSource>(raster: &mut Rasterizer, pixmap: &mut Pixmap, rule: Fill, source: P) {
    match rule {
        Fill::NonZero => run_rule::<blit::NonZero, P>(raster, pixmap, source),
        Fill::EvenOdd => run_rule::<blit::EvenOdd, P>(raster, pixmap, source),
    }
}

fn run_rule<W: WindingRule, P: PaintSource>(
    raster: &mut Rasterizer,
    pixmap: &mut Pixmap,
    source: P,
) {
    raster.rasterize(|row| {
        let (x0, x1, y) = (row.x0, row.x1, row.y);
        let pixels = &mut pixmap.row_mut(y)[x0 as usize..x1 as usize];
        blit::fill_row::<W, P>(row, &source, pixels);
    });
}
