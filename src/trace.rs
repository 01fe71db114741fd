// Copyright 2025 Lars Brubaker
// License: MIT
//
// Per-edge diagnostics for a single classification.
//
// A trace records, for every edge, how it relates to the sample's scanline
// and the running winding total after it.

use core::cmp::Ordering;
use core::fmt;

use serde::Serialize;

use crate::geom::{Point, Real};

/// Which way a crossing candidate passes the scanline `y = query.y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `start.y <= query.y < end.y`
    Upward,
    /// `end.y <= query.y < start.y`
    Downward,
}

/// What one edge did to the winding number.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EdgeOutcome {
    /// Zero length once near-duplicate vertices are merged.
    Skipped,
    /// Does not straddle the scanline.
    NoCrossing,
    /// Straddles the scanline; `delta` is -1, 0 or +1.
    Crossing {
        direction: Direction,
        cross: Real,
        delta: i32,
    },
    /// Straddles the scanline with the query on the edge itself; handed to
    /// boundary detection instead of being counted.
    Deferred { direction: Direction, cross: Real },
}

/// One entry of a [`Trace`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct EdgeContribution {
    /// Index of the edge in the region (`vertex[edge] -> vertex[edge + 1]`).
    pub edge: usize,
    /// End points as used for crossing analysis, after merging.
    pub start: Point,
    pub end: Point,
    pub outcome: EdgeOutcome,
    /// The query lies within tolerance of this edge.
    pub on_boundary: bool,
    /// Running winding number after this edge.
    pub winding: i32,
}

impl EdgeContribution {
    pub fn direction(&self) -> Option<Direction> {
        match self.outcome {
            EdgeOutcome::Crossing { direction, .. } | EdgeOutcome::Deferred { direction, .. } => {
                Some(direction)
            }
            EdgeOutcome::Skipped | EdgeOutcome::NoCrossing => None,
        }
    }

    /// Sign of the cross product for crossing candidates.
    pub fn cross_sign(&self) -> Option<Ordering> {
        match self.outcome {
            EdgeOutcome::Crossing { cross, .. } | EdgeOutcome::Deferred { cross, .. } => {
                cross.partial_cmp(&0.0)
            }
            EdgeOutcome::Skipped | EdgeOutcome::NoCrossing => None,
        }
    }

    /// Change applied to the winding number by this edge.
    pub fn delta(&self) -> i32 {
        match self.outcome {
            EdgeOutcome::Crossing { delta, .. } => delta,
            _ => 0,
        }
    }
}

/// Ordered per-edge contributions for one query point.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Trace {
    pub query: Point,
    pub epsilon: Real,
    pub edges: Vec<EdgeContribution>,
}

impl Trace {
    pub(crate) fn new(query: Point, epsilon: Real, capacity: usize) -> Self {
        Trace {
            query,
            epsilon,
            edges: Vec::with_capacity(capacity),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeContribution> {
        self.edges.iter()
    }

    /// Edges that changed the winding number.
    pub fn counted(&self) -> impl Iterator<Item = &EdgeContribution> {
        self.edges.iter().filter(|c| c.delta() != 0)
    }

    /// Edges the query lies on.
    pub fn boundary_edges(&self) -> impl Iterator<Item = &EdgeContribution> {
        self.edges.iter().filter(|c| c.on_boundary)
    }

    /// Final winding total, or 0 for an empty trace.
    pub fn winding(&self) -> i32 {
        self.edges.last().map_or(0, |c| c.winding)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Upward => f.write_str("upward"),
            Direction::Downward => f.write_str("downward"),
        }
    }
}

impl fmt::Display for EdgeContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "edge {}: ({:.2},{:.2}) -> ({:.2},{:.2})",
            self.edge, self.start.x, self.start.y, self.end.x, self.end.y
        )?;
        match self.outcome {
            EdgeOutcome::Skipped => write!(f, "  zero length, skipped")?,
            EdgeOutcome::NoCrossing => {}
            EdgeOutcome::Crossing {
                direction,
                cross,
                delta,
            } => {
                write!(f, "  {} crossing candidate, cross {:.3}", direction, cross)?;
                if delta != 0 {
                    write!(f, "  -> winding {:+} (total {})", delta, self.winding)?;
                }
            }
            EdgeOutcome::Deferred { direction, cross } => {
                write!(
                    f,
                    "  {} crossing candidate, cross {:.3}, collinear: deferred to boundary",
                    direction, cross
                )?;
            }
        }
        if self.on_boundary {
            write!(f, "  [on boundary]")?;
        }
        Ok(())
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "query ({}, {}), epsilon {:e}",
            self.query.x, self.query.y, self.epsilon
        )?;
        for c in &self.edges {
            writeln!(f, "{}", c)?;
        }
        write!(f, "final winding number: {}", self.winding())
    }
}
