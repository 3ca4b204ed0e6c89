// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end pixel tests for the canvas, rasterizer and blit pipeline.

use quill_cpu::peniko::{Extend, Fill};
use quill_cpu::{Canvas, Gradient, Paint, Path, Point};

const RED: u32 = 0xFFFF_0000;
const GREEN: u32 = 0xFF00_FF00;
const BLACK: u32 = 0xFF00_0000;
const WHITE: u32 = 0xFFFF_FFFF;

fn rect_path(x0: f32, y0: f32, x1: f32, y1: f32) -> Path {
    let mut p = Path::new();
    p.move_to(x0, y0)
        .line_to(x1, y0)
        .line_to(x1, y1)
        .line_to(x0, y1)
        .close();
    p
}

// The same rectangle wound the other way.
fn rect_path_ccw(x0: f32, y0: f32, x1: f32, y1: f32) -> Path {
    let mut p = Path::new();
    p.move_to(x0, y0)
        .line_to(x0, y1)
        .line_to(x1, y1)
        .line_to(x1, y0)
        .close();
    p
}

#[test]
fn solid_square() {
    let mut canvas = Canvas::new(32, 32);
    let path = rect_path(8., 8., 24., 24.);
    canvas.fill(&path, &Paint::Solid(RED), Fill::NonZero);

    for y in 0..32 {
        for x in 0..32 {
            let expected = if (8..24).contains(&x) && (8..24).contains(&y) {
                RED
            } else {
                0
            };
            assert_eq!(canvas.pixmap().pixel(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn even_odd_donut() {
    let mut canvas = Canvas::new(64, 64);
    let mut path = rect_path(8., 8., 56., 56.);
    path.extend_ops(&rect_path(20., 20., 44., 44.));
    canvas.fill(&path, &Paint::Solid(GREEN), Fill::EvenOdd);

    assert_eq!(canvas.pixmap().pixel(32, 32), 0);
    assert_eq!(canvas.pixmap().pixel(12, 32), GREEN);
    assert_eq!(canvas.pixmap().pixel(32, 12), GREEN);
    assert_eq!(canvas.pixmap().pixel(2, 32), 0);
}

#[test]
fn winding_rules_discriminate_nested_squares() {
    // Both squares wound the same way: the inner region stays inside under
    // non-zero and empties under even-odd.
    let mut nested = rect_path(8., 8., 56., 56.);
    nested.extend_ops(&rect_path(20., 20., 44., 44.));

    let mut canvas = Canvas::new(64, 64);
    canvas.fill(&nested, &Paint::Solid(GREEN), Fill::NonZero);
    assert_eq!(canvas.pixmap().pixel(32, 32), GREEN);

    let mut canvas = Canvas::new(64, 64);
    canvas.fill(&nested, &Paint::Solid(GREEN), Fill::EvenOdd);
    assert_eq!(canvas.pixmap().pixel(32, 32), 0);
    assert_eq!(canvas.pixmap().pixel(12, 32), GREEN);

    // Opposite windings cancel: non-zero also empties the inner region.
    let mut cancelling = rect_path(8., 8., 56., 56.);
    cancelling.extend_ops(&rect_path_ccw(20., 20., 44., 44.));

    let mut canvas = Canvas::new(64, 64);
    canvas.fill(&cancelling, &Paint::Solid(GREEN), Fill::NonZero);
    assert_eq!(canvas.pixmap().pixel(32, 32), 0);
    assert_eq!(canvas.pixmap().pixel(12, 32), GREEN);

    let mut canvas = Canvas::new(64, 64);
    canvas.fill(&cancelling, &Paint::Solid(GREEN), Fill::EvenOdd);
    assert_eq!(canvas.pixmap().pixel(32, 32), 0);
}

#[test]
fn linear_gradient_span() {
    let mut gradient = Gradient::new(256);
    gradient.push_stop(0.0, BLACK).push_stop(1.0, WHITE);

    let mut canvas = Canvas::new(256, 1);
    let paint = Paint::Linear {
        p0: Point::new(0., 0.),
        p1: Point::new(256., 0.),
        gradient: &gradient,
        extend: Extend::Pad,
    };
    canvas.fill(&rect_path(0., 0., 256., 1.), &paint, Fill::NonZero);

    assert_eq!(canvas.pixmap().pixel(0, 0), BLACK);
    assert_eq!(canvas.pixmap().pixel(255, 0), WHITE);
    let mut prev = 0;
    for x in 0..256 {
        let px = canvas.pixmap().pixel(x, 0);
        assert_eq!(px >> 24, 0xFF);
        let r = (px >> 16) & 0xFF;
        assert!(r >= prev, "red channel dipped at x={x}");
        prev = r;
    }
}

#[test]
fn radial_repeat_has_period() {
    // A coarse four-entry table makes the period exactly observable.
    let mut gradient = Gradient::new(4);
    gradient
        .push_stop(0.0, RED)
        .push_stop(0.34, 0xFFFF_FF00)
        .push_stop(0.67, GREEN)
        .push_stop(1.0, 0xFF00_00FF);

    let mut canvas = Canvas::new(128, 128);
    let paint = Paint::Radial {
        center: Point::new(64., 64.),
        radius_x: Point::new(16., 0.),
        radius_y: Point::new(0., 16.),
        gradient: &gradient,
        extend: Extend::Repeat,
    };
    canvas.fill(&rect_path(0., 0., 128., 128.), &paint, Fill::NonZero);

    let center = canvas.pixmap().pixel(64, 64);
    assert_eq!(center, RED);
    for r in [16, 32, 48] {
        assert_eq!(canvas.pixmap().pixel(64 + r, 64), RED, "radius {r}");
    }
}

#[test]
fn angular_mirror_is_symmetric() {
    let mut gradient = Gradient::new(256);
    gradient.push_stop(0.0, BLACK).push_stop(1.0, WHITE);

    let mut canvas = Canvas::new(128, 128);
    let paint = Paint::Sweep {
        center: Point::new(64., 64.),
        radius_x: Point::new(32., 0.),
        radius_y: Point::new(0., 32.),
        repeats: 1.0,
        gradient: &gradient,
        extend: Extend::Reflect,
    };
    canvas.fill(&rect_path(0., 0., 128., 128.), &paint, Fill::NonZero);

    let px = |x, y| canvas.pixmap().pixel(x, y);
    // The rows straddling the positive-x axis fold onto the same entry.
    assert_eq!(px(100, 63), px(100, 64));
    assert_eq!(px(100, 63), BLACK);
    // Pixel pairs mirrored across the axis in the right half-plane agree.
    for (x, d) in [(96, 8), (80, 20), (110, 30)] {
        assert_eq!(px(x, 63 - d + 1), px(x, 64 + d - 1), "x={x} d={d}");
    }
}

#[test]
fn biradial_focus_and_undefined_region() {
    let mut gradient = Gradient::new(256);
    gradient.push_stop(0.0, RED).push_stop(1.0, 0xFF00_00FF);

    let mut canvas = Canvas::new(96, 64);
    let paint = Paint::Biradial {
        c0: Point::new(40., 32.),
        r0: 2.0,
        c1: Point::new(56., 32.),
        r1: 16.0,
        gradient: &gradient,
        extend: Extend::Pad,
    };
    canvas.fill(&rect_path(0., 0., 96., 64.), &paint, Fill::NonZero);

    // Inside the focus circle the parameter is near zero.
    assert_eq!(canvas.pixmap().pixel(40, 32), RED);
    // The cone opens to the right; far behind the apex on the left there is
    // no interpolated circle and the last entry wins.
    assert_eq!(canvas.pixmap().pixel(2, 32), 0xFF00_00FF);
}

#[test]
fn clip_short_circuit_preserves_the_buffer() {
    let mut canvas = Canvas::new(32, 32);
    canvas.clear(0xFFAB_CDEF);

    canvas.set_view(quill_cpu::IntRect::new(10, 10, 20, 20));
    canvas.set_clip(quill_cpu::IntRect::new(100, 100, 110, 110));
    canvas.fill(&rect_path(-50., -50., 500., 500.), &Paint::Solid(RED), Fill::NonZero);

    for y in 0..32 {
        for x in 0..32 {
            assert_eq!(canvas.pixmap().pixel(x, y), 0xFFAB_CDEF);
        }
    }
}

#[test]
fn view_offsets_path_coordinates() {
    let mut canvas = Canvas::new(32, 32);
    canvas.set_view(quill_cpu::IntRect::new(10, 12, 32, 32));
    canvas.fill(&rect_path(0., 0., 4., 4.), &Paint::Solid(RED), Fill::NonZero);

    assert_eq!(canvas.pixmap().pixel(10, 12), RED);
    assert_eq!(canvas.pixmap().pixel(13, 15), RED);
    assert_eq!(canvas.pixmap().pixel(9, 12), 0);
    assert_eq!(canvas.pixmap().pixel(10, 11), 0);
    assert_eq!(canvas.pixmap().pixel(14, 12), 0);
}

#[test]
fn clip_cuts_fills() {
    let mut canvas = Canvas::new(16, 16);
    canvas.set_clip(quill_cpu::IntRect::new(4, 4, 8, 8));
    canvas.fill(&rect_path(0., 0., 16., 16.), &Paint::Solid(RED), Fill::NonZero);

    for y in 0..16 {
        for x in 0..16 {
            let expected = if (4..8).contains(&x) && (4..8).contains(&y) {
                RED
            } else {
                0
            };
            assert_eq!(canvas.pixmap().pixel(x, y), expected);
        }
    }
}

#[test]
fn fractional_edges_antialias() {
    let mut canvas = Canvas::new(8, 8);
    // A rectangle covering the right half of column 0.
    canvas.fill(&rect_path(0.5, 0., 1.5, 1.), &Paint::Solid(RED), Fill::NonZero);

    // Half coverage of an opaque color: alpha and red are exactly 128.
    assert_eq!(canvas.pixmap().pixel(0, 0), 0x8080_0000);
    assert_eq!(canvas.pixmap().pixel(1, 0), 0x8080_0000);
    assert_eq!(canvas.pixmap().pixel(2, 0), 0);
}

#[test]
fn translucent_fills_composite_source_over() {
    let mut canvas = Canvas::new(4, 4);
    canvas.clear(0xFF00_00FF);
    // A half-transparent red wash over opaque blue.
    canvas.fill(&rect_path(0., 0., 4., 4.), &Paint::Solid(0x80FF_0000), Fill::NonZero);

    let px = canvas.pixmap().pixel(1, 1);
    let [a, r, _, b] = quill_cpu::color::channels(px);
    assert_eq!(a, 0xFF);
    assert!((0x7F..=0x81).contains(&r));
    assert!((0x7E..=0x80).contains(&b));
}

#[test]
fn curves_render_inside_their_bounds() {
    let mut canvas = Canvas::new(32, 32);
    let mut path = Path::new();
    // A filled drop shape from two curves.
    path.move_to(4., 16.)
        .quad_to(16., -8., 28., 16.)
        .cubic_to(24., 28., 8., 28., 4., 16.)
        .close();
    canvas.fill(&path, &Paint::Solid(GREEN), Fill::NonZero);

    // The centroid is solidly inside.
    assert_eq!(canvas.pixmap().pixel(16, 14), GREEN);
    // The far corners stay empty.
    assert_eq!(canvas.pixmap().pixel(0, 0), 0);
    assert_eq!(canvas.pixmap().pixel(31, 0), 0);
    assert_eq!(canvas.pixmap().pixel(0, 31), 0);
    assert_eq!(canvas.pixmap().pixel(31, 31), 0);
}
