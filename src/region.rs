// Copyright 2025 Lars Brubaker
// License: MIT
//
// Closed outlines in pixel-sample space.

use log::debug;

use crate::error::ClassifyError;
use crate::geom::{Point, Real};

/// Minimum vertex count for a closed outline.
pub const MIN_VERTICES: usize = 3;

/// One closed outline. The last vertex implicitly joins the first.
///
/// Duplicate vertices, zero-length edges, self-intersections and either
/// orientation are all accepted; only the vertex count and finiteness are
/// checked here. Tolerance-dependent checks happen at classification time.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonRegion {
    vertices: Vec<Point>,
}

impl PolygonRegion {
    pub fn new(vertices: Vec<Point>) -> Result<Self, ClassifyError> {
        if vertices.len() < MIN_VERTICES {
            debug!("rejecting region with {} vertices", vertices.len());
            return Err(ClassifyError::region(format!(
                "expected at least {} vertices, got {}",
                MIN_VERTICES,
                vertices.len()
            )));
        }
        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            debug!("rejecting region: vertex {} is not finite", i);
            return Err(ClassifyError::input(format!(
                "vertex {} ({}, {}) is not finite",
                i, vertices[i].x, vertices[i].y
            )));
        }
        Ok(PolygonRegion { vertices })
    }

    /// Build from `(x, y)` pairs as handed over by the coordinate mapper.
    pub fn from_coords(coords: &[(Real, Real)]) -> Result<Self, ClassifyError> {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Cyclic edges as `(index, start, end)`; edge `i` runs from vertex `i`
    /// to vertex `(i + 1) % n`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (i, self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area. Positive for counter-clockwise order with y pointing up
    /// (clockwise on a y-down canvas).
    pub fn signed_area(&self) -> Real {
        let twice: Real = self
            .edges()
            .map(|(_, a, b)| a.x * b.y - b.x * a.y)
            .sum();
        twice * 0.5
    }

    /// Same outline traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        PolygonRegion { vertices }
    }

    /// Same outline starting at vertex `k % n`.
    pub fn rotated(&self, k: usize) -> Self {
        let mut vertices = self.vertices.clone();
        let n = vertices.len();
        vertices.rotate_left(k % n);
        PolygonRegion { vertices }
    }

    /// Snap every vertex onto the preceding distinct vertex when it lies
    /// within `epsilon` of it. Returns `None` if the whole outline collapses
    /// to a single point.
    ///
    /// The snapped loop is still closed, so an edge whose snapped end points
    /// coincide can be dropped without losing a scanline crossing.
    pub(crate) fn snapped(&self, epsilon: Real) -> Option<Vec<Point>> {
        let mut reps = Vec::with_capacity(self.vertices.len());
        let mut anchor = self.vertices[0];
        for &v in &self.vertices {
            if v.dist(anchor) > epsilon {
                anchor = v;
            }
            reps.push(anchor);
        }

        // A trailing run within epsilon of the first vertex wraps into it.
        let first = reps[0];
        let last = reps[reps.len() - 1];
        if last != first && last.dist(first) <= epsilon {
            for r in reps.iter_mut().rev() {
                if *r != last {
                    break;
                }
                *r = first;
            }
        }

        if reps.iter().all(|&r| r == first) {
            None
        } else {
            Some(reps)
        }
    }
}
