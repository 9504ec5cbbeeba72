//! # toctree
//!
//! ASCII tree annotation for nested table-of-contents outlines.
//!
//! A host page's templating pipeline produces a nested outline of linked
//! entries; this crate rewrites each entry's link into a branch-prefixed
//! line (`├── `, `└── `, `│   `) so a stylesheet can render the outline
//! as an ASCII tree. A companion pass assigns dotted section numbers to
//! the document's headings and mirrors them into the outline.
//!
//! ## Architecture
//!
//! - **Acquisition**: the root arrives late; poll it once per frame or
//!   await an explicit readiness signal from the pipeline
//! - **Annotation core**: recursive depth-marker walk rewriting links
//! - **Autonumbering**: hierarchical section counters over the headings
//!
//! The outline tree stays owned by the host; the annotator only rewrites
//! link presentation, exactly once per root (a sentinel class guards
//! against re-runs). Nothing here may break the page: every failure path
//! degrades to leaving the outline unstyled.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod acquire;
pub mod annotator;
pub mod context;
pub mod error;
pub mod node;
pub mod number;
pub mod prefix;
pub mod render;

// Re-export main types
pub use acquire::{FrameClock, OutlineHost, MAX_ATTEMPTS};
pub use annotator::TreeAnnotator;
pub use context::{AnnotateContext, DEFAULT_MAX_DEPTH};
pub use error::{AcquireError, AnnotateError, Result, TocTreeError};
pub use node::{Item, Link, LinkContent, List, Node};
pub use number::{autonumber, Heading, SectionCounters};
pub use prefix::{DepthMarkers, MarkerGuard};
pub use render::{annotate, Outcome, ANNOTATED_CLASS, LINE_CLASS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_errors_convert_into_umbrella() {
        let acquire: TocTreeError = AcquireError::SignalDropped.into();
        assert!(matches!(acquire, TocTreeError::Acquire(_)));

        let annotate: TocTreeError = AnnotateError::DepthExceeded { depth: 64, max: 64 }.into();
        assert!(matches!(annotate, TocTreeError::Annotate(_)));
    }
}
