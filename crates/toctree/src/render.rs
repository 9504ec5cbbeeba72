//! The recursive annotation pass
//!
//! Walks the outline in document order and rewrites every directly-linked
//! entry into a branch-prefixed line. Structure is read-only; only link
//! presentation changes.

use crate::context::AnnotateContext;
use crate::error::AnnotateError;
use crate::node::{Link, LinkContent, List};
use crate::prefix::DepthMarkers;

/// Sentinel class set on the root after the first successful pass.
pub const ANNOTATED_CLASS: &str = "ascii-toc";

/// Class carried by every rebuilt link, consumed by the stylesheet.
pub const LINE_CLASS: &str = "ascii-line";

/// Result of an annotation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The outline was annotated by this call.
    Annotated {
        /// Number of entries visited (linked or not).
        entries: usize,
    },

    /// The root already carried the sentinel; nothing was touched.
    AlreadyAnnotated,

    /// The root never became available or the pass aborted; the outline
    /// is left unstyled.
    Abandoned,
}

/// Annotate an outline tree in place.
///
/// Idempotent: the first successful call marks the root with
/// [`ANNOTATED_CLASS`], and any later call is a no-op.
///
/// # Example
///
/// ```
/// use toctree::{annotate, AnnotateContext, Item, List, Outcome};
///
/// let mut toc = List::new();
/// toc.push_item(Item::leaf("Intro", "#intro"));
/// toc.push_item(Item::leaf("Usage", "#usage"));
///
/// let outcome = annotate(&mut toc, &AnnotateContext::default()).unwrap();
/// assert_eq!(outcome, Outcome::Annotated { entries: 2 });
/// assert_eq!(toc.to_string(), "├── Intro\n└── Usage\n");
/// ```
pub fn annotate(root: &mut List, ctx: &AnnotateContext) -> Result<Outcome, AnnotateError> {
    if root.has_class(ANNOTATED_CLASS) {
        return Ok(Outcome::AlreadyAnnotated);
    }
    root.add_class(ANNOTATED_CLASS);

    let mut markers = DepthMarkers::new();
    let entries = render_list(root, &mut markers, ctx)?;
    Ok(Outcome::Annotated { entries })
}

fn render_list(
    list: &mut List,
    markers: &mut DepthMarkers,
    ctx: &AnnotateContext,
) -> Result<usize, AnnotateError> {
    if markers.depth() >= ctx.max_depth {
        return Err(AnnotateError::DepthExceeded {
            depth: markers.depth(),
            max: ctx.max_depth,
        });
    }

    let last = list.item_count().checked_sub(1);
    let mut entries = 0;

    for (i, item) in list.items_mut().enumerate() {
        let is_last = Some(i) == last;
        entries += 1;

        // An entry without a direct link keeps its structure but gets no
        // label rewrite; its children are still processed.
        if let Some(link) = item.link.take() {
            item.link = Some(rebuild(link, markers.prefix(is_last)));
        }

        if let Some(sublist) = item.sublist.as_mut() {
            let mut scoped = markers.descend(is_last);
            entries += render_list(sublist, &mut scoped, ctx)?;
        }
    }

    Ok(entries)
}

/// Build the replacement link: same target, fresh classes, prefix span
/// plus trimmed label span. A new value rather than in-place mutation, so
/// nothing of the old link's state survives.
fn rebuild(old: Link, prefix: String) -> Link {
    let label = old.content.label().trim().to_string();
    Link {
        href: old.href,
        classes: vec![LINE_CLASS.to_string()],
        content: LinkContent::Annotated { prefix, label },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Item;

    #[test]
    fn test_empty_outline_marks_root_only() {
        let mut root = List::new();
        let outcome = annotate(&mut root, &AnnotateContext::default()).unwrap();
        assert_eq!(outcome, Outcome::Annotated { entries: 0 });
        assert!(root.has_class(ANNOTATED_CLASS));
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_label_is_trimmed() {
        let mut root = List::new();
        root.push_item(Item::leaf("  Intro  ", "#intro"));
        annotate(&mut root, &AnnotateContext::default()).unwrap();

        let link = root.items().next().unwrap().link.as_ref().unwrap();
        assert_eq!(link.content.label(), "Intro");
    }

    #[test]
    fn test_depth_budget_stops_runaway_nesting() {
        fn nested(depth: usize) -> List {
            let mut list = List::new();
            if depth == 0 {
                list.push_item(Item::leaf("leaf", "#leaf"));
            } else {
                list.push_item(Item::section("node", "#node", nested(depth - 1)));
            }
            list
        }

        let mut root = nested(8);
        let err = annotate(&mut root, &AnnotateContext::with_max_depth(4)).unwrap_err();
        assert_eq!(err, AnnotateError::DepthExceeded { depth: 4, max: 4 });
    }
}
