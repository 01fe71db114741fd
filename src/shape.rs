// Copyright 2025 Lars Brubaker
// License: MIT
//
// A sprite region drawn from one vector path may hold several closed
// sub-paths. Their winding numbers add, so overlapping sub-paths wound the
// same way reinforce and opposite ones cancel.

use log::trace;

use crate::classify::{validate_query, verdict_for, winding, Classification};
use crate::error::ClassifyError;
use crate::geom::{Point, Real};
use crate::region::PolygonRegion;
use crate::trace::Trace;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    contours: Vec<PolygonRegion>,
}

impl Shape {
    pub fn new(contours: Vec<PolygonRegion>) -> Self {
        Shape { contours }
    }

    pub fn push(&mut self, contour: PolygonRegion) {
        self.contours.push(contour);
    }

    pub fn contours(&self) -> &[PolygonRegion] {
        &self.contours
    }

    /// Sum the winding numbers of all contours and apply the nonzero rule.
    pub fn classify(&self, query: Point, epsilon: Real) -> Result<Classification, ClassifyError> {
        self.classify_inner(query, epsilon, false)
    }

    /// As [`Shape::classify`], with one trace per contour concatenated. Edge
    /// indices restart at 0 for every contour; the running total carries over.
    pub fn classify_traced(
        &self,
        query: Point,
        epsilon: Real,
    ) -> Result<Classification, ClassifyError> {
        self.classify_inner(query, epsilon, true)
    }

    fn classify_inner(
        &self,
        query: Point,
        epsilon: Real,
        traced: bool,
    ) -> Result<Classification, ClassifyError> {
        if self.contours.is_empty() {
            return Err(ClassifyError::region("shape has no contours"));
        }
        validate_query(query, epsilon)?;

        let mut total = 0i32;
        let mut on_boundary = false;
        let mut combined = traced.then(|| Trace::new(query, epsilon, 0));

        for (k, contour) in self.contours.iter().enumerate() {
            let mut local = traced.then(|| Trace::new(query, epsilon, contour.len()));
            let w = winding(contour, query, epsilon, local.as_mut())?;
            trace!("contour {}: winding {}", k, w.number);

            if let (Some(all), Some(local)) = (combined.as_mut(), local) {
                all.edges.extend(local.edges.into_iter().map(|mut c| {
                    c.winding += total;
                    c
                }));
            }
            total += w.number;
            on_boundary |= w.on_boundary;
        }

        Ok(Classification {
            verdict: verdict_for(total, on_boundary),
            winding_number: total,
            trace: combined,
        })
    }
}

impl From<PolygonRegion> for Shape {
    fn from(region: PolygonRegion) -> Self {
        Shape::new(vec![region])
    }
}

impl FromIterator<PolygonRegion> for Shape {
    fn from_iter<I: IntoIterator<Item = PolygonRegion>>(iter: I) -> Self {
        Shape::new(iter.into_iter().collect())
    }
}
