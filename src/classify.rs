// Copyright 2025 Lars Brubaker
// License: MIT
//
// Nonzero-winding point classification.
//
// Each query walks the region's edges once. Crossings of the horizontal line
// through the query use the half-open rule (lower end point inclusive, upper
// exclusive) so a vertex sitting exactly on the scanline is owned by exactly
// one of its two edges. Staircase outlines put lots of vertices on sample
// scanlines, which is where naive crossing tests double count.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;
use crate::geom::{cross, max_abs_coord, segment_distance, Point, Real};
use crate::region::PolygonRegion;
use crate::trace::{Direction, EdgeContribution, EdgeOutcome, Trace};

/// Absolute tolerance used when nothing else is configured. Sample-space
/// coordinates are pixel units, O(1) to O(1000).
pub const DEFAULT_EPSILON: Real = 1e-6;

/// Fill verdict for one sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Inside,
    Outside,
    OnBoundary,
}

impl Verdict {
    /// True only for `Inside`. Whether boundary samples are painted is the
    /// rasterizer's call.
    #[inline]
    pub fn is_filled(self) -> bool {
        self == Verdict::Inside
    }
}

/// Outcome of classifying one point against one region.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Classification {
    pub verdict: Verdict,
    pub winding_number: i32,
    pub trace: Option<Trace>,
}

/// How the boundary tolerance is derived.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    /// Fixed distance in sample-space units.
    Absolute(Real),
    /// Fraction of the largest absolute coordinate involved (never scaled
    /// below 1).
    Relative(Real),
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(DEFAULT_EPSILON)
    }
}

impl Tolerance {
    /// Resolve to an absolute epsilon for `region` and `query`.
    pub fn resolve(self, region: &PolygonRegion, query: Point) -> Real {
        match self {
            Tolerance::Absolute(eps) => eps,
            Tolerance::Relative(r) => {
                let scale = max_abs_coord(region.vertices().iter().copied().chain([query]));
                r * scale.max(1.0)
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub tolerance: Tolerance,
    /// Record a per-edge [`Trace`] in every result.
    pub trace: bool,
}

/// Configured entry point for a rasterization pass.
///
/// Holds no per-call state; a single instance can be shared across worker
/// threads.
#[derive(Copy, Clone, Debug, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Classifier { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(
        &self,
        region: &PolygonRegion,
        query: Point,
    ) -> Result<Classification, ClassifyError> {
        let epsilon = self.config.tolerance.resolve(region, query);
        classify_with(region, query, epsilon, self.config.trace)
    }

    /// Classify every point against one region. Results keep the input order
    /// and a failure for one point does not affect the others.
    pub fn classify_many<I>(
        &self,
        region: &PolygonRegion,
        points: I,
    ) -> Vec<Result<Classification, ClassifyError>>
    where
        I: IntoIterator<Item = Point>,
    {
        points
            .into_iter()
            .map(|p| self.classify(region, p))
            .collect()
    }
}

/// Classify `query` against `region` with an absolute tolerance.
pub fn classify(
    region: &PolygonRegion,
    query: Point,
    epsilon: Real,
) -> Result<Classification, ClassifyError> {
    classify_with(region, query, epsilon, false)
}

/// As [`classify`], with the per-edge trace filled in.
pub fn classify_traced(
    region: &PolygonRegion,
    query: Point,
    epsilon: Real,
) -> Result<Classification, ClassifyError> {
    classify_with(region, query, epsilon, true)
}

/// Raw winding accumulation shared by single regions and multi-contour shapes.
pub(crate) struct Winding {
    pub number: i32,
    pub on_boundary: bool,
}

pub(crate) fn validate_query(query: Point, epsilon: Real) -> Result<(), ClassifyError> {
    if !query.is_finite() {
        debug!("rejecting non-finite query ({}, {})", query.x, query.y);
        return Err(ClassifyError::input(format!(
            "query ({}, {}) is not finite",
            query.x, query.y
        )));
    }
    if !epsilon.is_finite() || epsilon < 0.0 {
        debug!("rejecting tolerance {}", epsilon);
        return Err(ClassifyError::input(format!(
            "epsilon {} must be finite and non-negative",
            epsilon
        )));
    }
    Ok(())
}

pub(crate) fn winding(
    region: &PolygonRegion,
    query: Point,
    epsilon: Real,
    mut trace: Option<&mut Trace>,
) -> Result<Winding, ClassifyError> {
    let Some(snapped) = region.snapped(epsilon) else {
        debug!(
            "rejecting region: all {} vertices within {} of each other",
            region.len(),
            epsilon
        );
        return Err(ClassifyError::region(format!(
            "all {} vertices coincide within {}",
            region.len(),
            epsilon
        )));
    };

    let verts = region.vertices();
    let n = verts.len();
    let mut number = 0i32;
    let mut on_boundary = false;

    for i in 0..n {
        let j = (i + 1) % n;
        // Boundary detection uses the edge as given and never short-circuits.
        let hit = segment_distance(verts[i], verts[j], query) <= epsilon;
        on_boundary |= hit;

        let (pi, pj) = (snapped[i], snapped[j]);
        let outcome = if pi == pj {
            EdgeOutcome::Skipped
        } else {
            let direction = if pi.y <= query.y && query.y < pj.y {
                Some(Direction::Upward)
            } else if pj.y <= query.y && query.y < pi.y {
                Some(Direction::Downward)
            } else {
                None
            };
            match direction {
                None => EdgeOutcome::NoCrossing,
                Some(direction) => {
                    let c = cross(pi, pj, query);
                    // Only defer when the query is on the edge as given; a
                    // snapped end point can pull the line up to epsilon closer.
                    if hit && c.abs() <= epsilon * pi.dist(pj) {
                        EdgeOutcome::Deferred { direction, cross: c }
                    } else {
                        let delta = match direction {
                            Direction::Upward if c > 0.0 => 1,
                            Direction::Downward if c < 0.0 => -1,
                            _ => 0,
                        };
                        number += delta;
                        EdgeOutcome::Crossing {
                            direction,
                            cross: c,
                            delta,
                        }
                    }
                }
            }
        };

        if let Some(t) = trace.as_deref_mut() {
            t.edges.push(EdgeContribution {
                edge: i,
                start: pi,
                end: pj,
                outcome,
                on_boundary: hit,
                winding: number,
            });
        }
    }

    Ok(Winding {
        number,
        on_boundary,
    })
}

pub(crate) fn verdict_for(number: i32, on_boundary: bool) -> Verdict {
    if on_boundary {
        Verdict::OnBoundary
    } else if number != 0 {
        Verdict::Inside
    } else {
        Verdict::Outside
    }
}

fn classify_with(
    region: &PolygonRegion,
    query: Point,
    epsilon: Real,
    traced: bool,
) -> Result<Classification, ClassifyError> {
    validate_query(query, epsilon)?;

    let mut trace = traced.then(|| Trace::new(query, epsilon, region.len()));
    let w = winding(region, query, epsilon, trace.as_mut())?;
    let verdict = verdict_for(w.number, w.on_boundary);
    trace!(
        "({}, {}) -> {:?}, winding {}",
        query.x,
        query.y,
        verdict,
        w.number
    );

    Ok(Classification {
        verdict,
        winding_number: w.number,
        trace,
    })
}
