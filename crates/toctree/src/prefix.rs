//! ASCII connectors and the per-ancestor depth marker stack

/// Connector for an entry that has siblings after it.
pub const TEE: &str = "├── ";

/// Connector for the last sibling at its level.
pub const ELBOW: &str = "└── ";

/// Continuation segment under an ancestor that was not last.
pub const PIPE: &str = "│   ";

/// Continuation segment under an ancestor that was last.
pub const BLANK: &str = "    ";

/// The per-ancestor marker stack driving prefix construction.
///
/// One boolean per ancestor level, `true` when that ancestor was the last
/// sibling at its level. Rebuilt for every render pass and never stored
/// beyond it.
///
/// # Example
///
/// ```
/// use toctree::DepthMarkers;
///
/// let mut markers = DepthMarkers::new();
/// assert_eq!(markers.prefix(false), "├── ");
///
/// {
///     let scoped = markers.descend(true);
///     assert_eq!(scoped.prefix(true), "    └── ");
/// }
/// // Guard dropped, back at the root level.
/// assert_eq!(markers.depth(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DepthMarkers {
    markers: Vec<bool>,
}

impl DepthMarkers {
    /// Create an empty marker stack (root level).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth (number of ancestor levels).
    pub fn depth(&self) -> usize {
        self.markers.len()
    }

    /// Build the full prefix for an entry at the current depth.
    ///
    /// Per ancestor: four blanks if that ancestor was last, otherwise a
    /// vertical bar and three blanks. Then the branch connector for the
    /// entry itself.
    pub fn prefix(&self, is_last: bool) -> String {
        let mut out = String::with_capacity((self.markers.len() + 1) * PIPE.len());
        for &ancestor_last in &self.markers {
            out.push_str(if ancestor_last { BLANK } else { PIPE });
        }
        out.push_str(if is_last { ELBOW } else { TEE });
        out
    }

    /// Push a marker for one level of descent, popped when the returned
    /// guard drops.
    pub fn descend(&mut self, ancestor_last: bool) -> MarkerGuard<'_> {
        self.markers.push(ancestor_last);
        MarkerGuard { markers: self }
    }
}

/// RAII guard that pops one depth marker when dropped.
pub struct MarkerGuard<'a> {
    markers: &'a mut DepthMarkers,
}

impl Drop for MarkerGuard<'_> {
    fn drop(&mut self) {
        self.markers.markers.pop();
    }
}

impl std::ops::Deref for MarkerGuard<'_> {
    type Target = DepthMarkers;

    fn deref(&self) -> &Self::Target {
        self.markers
    }
}

impl std::ops::DerefMut for MarkerGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.markers
    }
}
