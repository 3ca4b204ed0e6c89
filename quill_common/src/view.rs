// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy path adaptor views.
//!
//! A view implements [`PathOps`]: indexed access to path records plus two
//! markers used for alias analysis, [`in_place`](PathOps::in_place) (whether
//! record `i` of the view depends only on record `i` of the source) and
//! [`source_id`](PathOps::source_id) (the identity of the root store). Views
//! borrow their source and compose freely; none of them copies the path.
//!
//! Point-wise views (`offset`, `scale`, `rotate`, `slice`) preserve record
//! order and could be written back over their source index-by-index; their
//! owning counterparts live directly on [`Path`]. Order-changing views
//! (`retro`, `concat`) alias their source under write-back and therefore
//! materialize through [`to_path`](PathOps::to_path), which builds into a
//! fresh store.

use crate::path::{Path, PathEl, Point};

/// Read-only, indexed access to a sequence of path records.
pub trait PathOps {
    /// The number of records of the view.
    fn op_count(&self) -> usize;

    /// The record at index `i`.
    fn op(&self, i: usize) -> PathEl;

    /// Whether record `i` of the view depends only on record `i` of the
    /// source, making an index-wise in-place write-back well defined.
    fn in_place(&self) -> bool;

    /// An opaque identity of the root path store, for alias detection.
    fn source_id(&self) -> usize;

    /// Iterate over the records of the view.
    fn ops(&self) -> Ops<'_, Self> {
        Ops { view: self, i: 0 }
    }

    /// Materialize the view into a freshly built path.
    fn to_path(&self) -> Path {
        let mut path = Path::new();
        path.extend_ops(self);
        path
    }

    /// A view of this view with every point translated by `(dx, dy)`.
    fn offset(&self, dx: f32, dy: f32) -> Offset<&Self> {
        Offset {
            inner: self,
            d: Point::new(dx, dy),
        }
    }

    /// A view of this view with every point scaled by `(sx, sy)`.
    fn scale(&self, sx: f32, sy: f32) -> Scale<&Self> {
        Scale {
            inner: self,
            sx,
            sy,
        }
    }

    /// A view of this view with every point rotated around the origin.
    fn rotate(&self, radians: f32) -> Rotate<&Self> {
        let (sin, cos) = radians.sin_cos();
        Rotate {
            inner: self,
            sin,
            cos,
        }
    }

    /// A view of this view with subpaths reversed, back to front.
    fn retro(&self) -> Retro<&Self> {
        Retro { inner: self }
    }

    /// A view of the records `range` of this view.
    ///
    /// A slice that does not begin at a `Move` is ill-formed path input and
    /// is diagnosed when materialized in debug builds.
    fn slice(&self, range: core::ops::Range<usize>) -> Slice<&Self> {
        debug_assert!(range.start <= range.end && range.end <= self.op_count());
        Slice {
            inner: self,
            start: range.start,
            len: range.end - range.start,
        }
    }

    /// A view chaining this view's records with `other`'s.
    fn concat<'a, O: PathOps + ?Sized>(&'a self, other: &'a O) -> Concat<&'a Self, &'a O> {
        Concat { a: self, b: other }
    }
}

impl<V: PathOps + ?Sized> PathOps for &V {
    fn op_count(&self) -> usize {
        (**self).op_count()
    }

    fn op(&self, i: usize) -> PathEl {
        (**self).op(i)
    }

    fn in_place(&self) -> bool {
        (**self).in_place()
    }

    fn source_id(&self) -> usize {
        (**self).source_id()
    }
}

/// An iterator over the records of a view.
pub struct Ops<'a, V: ?Sized> {
    view: &'a V,
    i: usize,
}

impl<V: PathOps + ?Sized> Iterator for Ops<'_, V> {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        if self.i < self.view.op_count() {
            let el = self.view.op(self.i);
            self.i += 1;
            Some(el)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.view.op_count() - self.i;
        (n, Some(n))
    }
}

/// A translated view; see [`PathOps::offset`].
#[derive(Clone, Copy, Debug)]
pub struct Offset<V> {
    inner: V,
    d: Point,
}

impl<V: PathOps> PathOps for Offset<V> {
    fn op_count(&self) -> usize {
        self.inner.op_count()
    }

    fn op(&self, i: usize) -> PathEl {
        let d = self.d;
        self.inner.op(i).map(|p| p + d)
    }

    fn in_place(&self) -> bool {
        self.inner.in_place()
    }

    fn source_id(&self) -> usize {
        self.inner.source_id()
    }
}

/// A scaled view; see [`PathOps::scale`].
#[derive(Clone, Copy, Debug)]
pub struct Scale<V> {
    inner: V,
    sx: f32,
    sy: f32,
}

impl<V: PathOps> PathOps for Scale<V> {
    fn op_count(&self) -> usize {
        self.inner.op_count()
    }

    fn op(&self, i: usize) -> PathEl {
        let (sx, sy) = (self.sx, self.sy);
        self.inner.op(i).map(|p| Point::new(p.x * sx, p.y * sy))
    }

    fn in_place(&self) -> bool {
        self.inner.in_place()
    }

    fn source_id(&self) -> usize {
        self.inner.source_id()
    }
}

/// A rotated view; see [`PathOps::rotate`].
#[derive(Clone, Copy, Debug)]
pub struct Rotate<V> {
    inner: V,
    sin: f32,
    cos: f32,
}

impl<V: PathOps> PathOps for Rotate<V> {
    fn op_count(&self) -> usize {
        self.inner.op_count()
    }

    fn op(&self, i: usize) -> PathEl {
        let (sin, cos) = (self.sin, self.cos);
        self.inner
            .op(i)
            .map(|p| Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
    }

    fn in_place(&self) -> bool {
        self.inner.in_place()
    }

    fn source_id(&self) -> usize {
        self.inner.source_id()
    }
}

/// A reversed view; see [`PathOps::retro`].
///
/// Record `j` is derived from the source records `n - 1 - j` and `n - j`:
/// subpath boundaries flip from `Move` records to the records following
/// them, and curve control points swap order. Applying `retro` twice is the
/// identity, structurally.
#[derive(Clone, Copy, Debug)]
pub struct Retro<V> {
    inner: V,
}

impl<V: PathOps> PathOps for Retro<V> {
    fn op_count(&self) -> usize {
        self.inner.op_count()
    }

    fn op(&self, j: usize) -> PathEl {
        let n = self.inner.op_count();
        let g = n - 1 - j;
        let end = self.inner.op(g).end();
        if g + 1 == n || self.inner.op(g + 1).is_move() {
            return PathEl::Move(end);
        }
        match self.inner.op(g + 1) {
            PathEl::Line(_) => PathEl::Line(end),
            PathEl::Quad(c, _) => PathEl::Quad(c, end),
            PathEl::Cubic(c0, c1, _) => PathEl::Cubic(c1, c0, end),
            PathEl::Move(_) => unreachable!(),
        }
    }

    fn in_place(&self) -> bool {
        false
    }

    fn source_id(&self) -> usize {
        self.inner.source_id()
    }
}

/// A sub-range view; see [`PathOps::slice`].
#[derive(Clone, Copy, Debug)]
pub struct Slice<V> {
    inner: V,
    start: usize,
    len: usize,
}

impl<V: PathOps> PathOps for Slice<V> {
    fn op_count(&self) -> usize {
        self.len
    }

    fn op(&self, i: usize) -> PathEl {
        debug_assert!(i < self.len);
        self.inner.op(self.start + i)
    }

    fn in_place(&self) -> bool {
        self.inner.in_place()
    }

    fn source_id(&self) -> usize {
        self.inner.source_id()
    }
}

/// A chaining view; see [`PathOps::concat`].
#[derive(Clone, Copy, Debug)]
pub struct Concat<A, B> {
    a: A,
    b: B,
}

impl<A: PathOps, B: PathOps> PathOps for Concat<A, B> {
    fn op_count(&self) -> usize {
        self.a.op_count() + self.b.op_count()
    }

    fn op(&self, i: usize) -> PathEl {
        let na = self.a.op_count();
        if i < na {
            self.a.op(i)
        } else {
            self.b.op(i - na)
        }
    }

    fn in_place(&self) -> bool {
        false
    }

    fn source_id(&self) -> usize {
        self.a.source_id()
    }
}
