use std::fmt;

use thiserror::Error;

/// Stage of the occultation refinement that failed to find a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinementStage {
    /// Minute-resolution scan over interpolated samples
    Medium,
    /// Sub-minute scan over re-sampled positions
    Fine,
}

impl fmt::Display for RefinementStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefinementStage::Medium => write!(f, "medium"),
            RefinementStage::Fine => write!(f, "fine"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AlmanacError {
    #[error("Invalid body name: {0}")]
    InvalidBodyName(String),

    #[error("Invalid observer location: {0}")]
    InvalidLocation(String),

    #[error("Invalid star catalog line {line}: {reason}")]
    InvalidCatalogLine { line: usize, reason: String },

    #[error("Occultation refinement could not find a {0} pass minimum")]
    RefinementFailed(RefinementStage),

    #[error("Too many events: the buffer holds at most {0}")]
    EventBufferFull(usize),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for AlmanacError {
    fn eq(&self, other: &Self) -> bool {
        use AlmanacError::*;
        match (self, other) {
            (InvalidBodyName(a), InvalidBodyName(b)) => a == b,
            (InvalidLocation(a), InvalidLocation(b)) => a == b,
            (
                InvalidCatalogLine { line: la, reason: ra },
                InvalidCatalogLine { line: lb, reason: rb },
            ) => la == lb && ra == rb,
            (RefinementFailed(a), RefinementFailed(b)) => a == b,
            (EventBufferFull(a), EventBufferFull(b)) => a == b,
            (InvalidParameter(a), InvalidParameter(b)) => a == b,

            // io::Error is not comparable: same variant means equal
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
