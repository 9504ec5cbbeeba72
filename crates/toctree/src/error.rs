//! Error types for outline acquisition and annotation

use thiserror::Error;

/// Errors from acquiring the outline root from its host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcquireError {
    /// The root never appeared within the polling budget.
    #[error("outline root not found after {attempts} polling attempts")]
    MissingRoot {
        /// How many attempts were made before giving up.
        attempts: usize,
    },

    /// The readiness signal did not fire within the deadline.
    #[error("readiness signal timed out after {waited_ms}ms")]
    SignalTimeout {
        /// How long was waited, in milliseconds.
        waited_ms: u64,
    },

    /// The producing pipeline dropped its sender without ever signalling.
    #[error("readiness signal dropped before the outline was produced")]
    SignalDropped,
}

/// Errors from the annotation pass itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    /// Outline nesting reached the recursion budget. Template-generated
    /// outlines never get this deep; the budget exists so a malformed or
    /// cyclic input cannot run away.
    #[error("outline nesting depth {depth} exceeds the budget of {max}")]
    DepthExceeded {
        /// Depth at which the walk stopped.
        depth: usize,
        /// The configured budget.
        max: usize,
    },
}

/// Umbrella error for fallible entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TocTreeError {
    /// Acquisition failed.
    #[error(transparent)]
    Acquire(#[from] AcquireError),

    /// Annotation failed.
    #[error(transparent)]
    Annotate(#[from] AnnotateError),
}

/// Result type alias for toctree operations.
pub type Result<T> = std::result::Result<T, TocTreeError>;
