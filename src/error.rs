// Copyright 2025 Lars Brubaker
// License: MIT

use thiserror::Error;

/// Reasons a region or query cannot be classified. Malformed input never
/// produces a verdict.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("invalid region: {reason}")]
    InvalidRegion { reason: String },
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl ClassifyError {
    pub(crate) fn region(reason: impl Into<String>) -> Self {
        ClassifyError::InvalidRegion {
            reason: reason.into(),
        }
    }

    pub(crate) fn input(reason: impl Into<String>) -> Self {
        ClassifyError::InvalidInput {
            reason: reason.into(),
        }
    }
}
