// pixel-winding: nonzero-winding point classification for pixel-art outlines
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod classify;
pub mod error;
pub mod geom;
pub mod region;
pub mod shape;
pub mod trace;

pub use classify::{
    classify, classify_traced, Classification, Classifier, ClassifierConfig, Tolerance, Verdict,
    DEFAULT_EPSILON,
};
pub use error::ClassifyError;
pub use geom::Point;
pub use region::PolygonRegion;
pub use shape::Shape;
pub use trace::{Direction, EdgeContribution, EdgeOutcome, Trace};
