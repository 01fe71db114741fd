// Copyright 2025 Lars Brubaker
// Shared test utilities for pixel-winding tests.

#![allow(dead_code)]

use pixel_winding::{classify, Point, PolygonRegion, Verdict};

pub const EPS: f64 = 1e-6;

pub fn region(coords: &[(f64, f64)]) -> PolygonRegion {
    PolygonRegion::from_coords(coords).expect("valid test region")
}

/// Axis-aligned square with corners `(x, y)` and `(x + size, y + size)`,
/// counter-clockwise in a y-up frame.
pub fn square(x: f64, y: f64, size: f64) -> PolygonRegion {
    region(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}

/// Unit staircase with `steps` steps in source units:
/// (0,0) -> (1,0) -> (1,1) -> (2,1) -> ... -> (steps,steps) -> (0,steps).
///
/// Row `k` (k <= y < k + 1) is filled for 0 < x < k + 1.
pub fn staircase_coords(steps: usize) -> Vec<(f64, f64)> {
    let mut coords = vec![(0.0, 0.0)];
    for k in 0..steps {
        let k = k as f64;
        coords.push((k + 1.0, k));
        coords.push((k + 1.0, k + 1.0));
    }
    coords.push((0.0, steps as f64));
    coords
}

/// Exact membership for the open interior of `staircase_coords(steps)`.
pub fn staircase_contains(steps: usize, u: f64, v: f64) -> bool {
    u > 0.0 && v > 0.0 && v < steps as f64 && u < v.floor() + 1.0
}

/// Source-to-canvas mapping as done by the coordinate mapper.
#[derive(Copy, Clone, Debug)]
pub struct Mapping {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Mapping {
    pub fn to_canvas(&self, (u, v): (f64, f64)) -> (f64, f64) {
        (u * self.scale_x + self.offset_x, v * self.scale_y + self.offset_y)
    }

    pub fn to_source(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.offset_x) / self.scale_x, (y - self.offset_y) / self.scale_y)
    }

    pub fn map_region(&self, coords: &[(f64, f64)]) -> PolygonRegion {
        let mapped: Vec<_> = coords.iter().map(|&c| self.to_canvas(c)).collect();
        region(&mapped)
    }
}

/// Polygon from the CamoHat black-path debugging session, in canvas
/// coordinates: a staircase section closed off by an arbitrary return path.
pub fn camo_hat_staircase() -> Vec<(f64, f64)> {
    vec![
        (0.05, 39.52),
        (1.93, 39.52),
        (1.93, 41.40),
        (3.81, 41.40),
        (3.81, 43.28),
        (3.81, 30.0),
        (0.05, 30.0),
    ]
}

/// Pixel centers of a `width` x `height` canvas, row-major.
pub fn pixel_centers(width: usize, height: usize) -> Vec<Point> {
    let mut pts = Vec::with_capacity(width * height);
    for py in 0..height {
        for px in 0..width {
            pts.push(Point::new(px as f64 + 0.5, py as f64 + 0.5));
        }
    }
    pts
}

/// Render the verdicts for every pixel center as rows of `#` (inside),
/// `.` (outside) and `+` (on boundary).
pub fn render_mask(region: &PolygonRegion, width: usize, height: usize) -> Vec<String> {
    (0..height)
        .map(|py| {
            (0..width)
                .map(|px| {
                    let p = Point::new(px as f64 + 0.5, py as f64 + 0.5);
                    match classify(region, p, EPS).expect("classify").verdict {
                        Verdict::Inside => '#',
                        Verdict::Outside => '.',
                        Verdict::OnBoundary => '+',
                    }
                })
                .collect()
        })
        .collect()
}

/// Reference even-odd test: parity of edge crossings to the right of `p`.
pub fn even_odd_inside(coords: &[(f64, f64)], p: (f64, f64)) -> bool {
    let n = coords.len();
    let mut inside = false;
    for i in 0..n {
        let (xi, yi) = coords[i];
        let (xj, yj) = coords[(i + 1) % n];
        if (yi <= p.1) != (yj <= p.1) {
            let x = xi + (p.1 - yi) / (yj - yi) * (xj - xi);
            if p.0 < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Grid of query points with spacing `step` over `[x0, x1] x [y0, y1]`.
pub fn grid(x0: f64, x1: f64, y0: f64, y1: f64, step: f64) -> Vec<Point> {
    let mut pts = Vec::new();
    let mut y = y0;
    while y <= y1 {
        let mut x = x0;
        while x <= x1 {
            pts.push(Point::new(x, y));
            x += step;
        }
        y += step;
    }
    pts
}
