//! Annotation pass configuration

/// Default recursion budget for the render walk.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for an annotation pass.
///
/// Passed through all render calls; currently only bounds recursion.
#[derive(Debug, Clone)]
pub struct AnnotateContext {
    /// Maximum nesting depth the walk will descend into.
    pub max_depth: usize,
}

impl Default for AnnotateContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AnnotateContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom recursion budget.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
