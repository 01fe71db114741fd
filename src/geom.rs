// Copyright 2025 Lars Brubaker
// License: MIT
//
// Pure geometric primitives in pixel-sample space.
//
// Everything here is f64 and allocation-free so the classifier can call it
// once per edge per sample without overhead.

use serde::{Deserialize, Serialize};

pub type Real = f64;

/// A sample-space position. Compared by value only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn dist(self, other: Point) -> Real {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(Real, Real)> for Point {
    #[inline]
    fn from((x, y): (Real, Real)) -> Self {
        Point { x, y }
    }
}

/// Cross product of `(b - a)` and `(p - a)`.
/// Positive when `p` is to the left of the directed edge `a -> b`.
#[inline]
pub fn cross(a: Point, b: Point, p: Point) -> Real {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Distance from `p` to the closed segment `ab`.
///
/// When the projection of `p` onto the line lands inside the segment (end
/// points included) this is the perpendicular distance; otherwise it is the
/// distance to the nearer end point. A zero-length segment is treated as a
/// single point.
pub fn segment_distance(a: Point, b: Point, p: Point) -> Real {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.dist(a);
    }

    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    if t <= 0.0 {
        p.dist(a)
    } else if t >= 1.0 {
        p.dist(b)
    } else {
        cross(a, b, p).abs() / len_sq.sqrt()
    }
}

/// Largest absolute coordinate over `points`, or 0 for an empty iterator.
pub fn max_abs_coord<I: IntoIterator<Item = Point>>(points: I) -> Real {
    points
        .into_iter()
        .fold(0.0, |m: Real, p| m.max(p.x.abs()).max(p.y.abs()))
}
