//! Hierarchical heading autonumbering
//!
//! Assigns dotted section numbers ("1", "1.1", "1.2", "2") to headings in
//! document order and mirrors each number into the matching outline link.
//! Runs before the annotation pass, so the numbers become part of the
//! label text the annotator later wraps.

use serde::{Deserialize, Serialize};

use crate::node::{Link, List, Node};

/// Shallowest heading level that receives a number.
pub const MIN_LEVEL: u8 = 2;

/// Deepest heading level that receives a number.
pub const MAX_LEVEL: u8 = 6;

const LEVELS: usize = (MAX_LEVEL - MIN_LEVEL + 1) as usize;

/// A document heading as exposed by the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 2 through 6. Level-1 headings are page titles and
    /// are never numbered.
    pub level: u8,

    /// Anchor id tying the heading to its outline entry, if any.
    #[serde(default)]
    pub id: Option<String>,

    /// Visible heading text.
    pub text: String,
}

impl Heading {
    /// A heading without an anchor id.
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            id: None,
            text: text.into(),
        }
    }

    /// A heading carrying an anchor id.
    pub fn with_id(level: u8, id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level,
            id: Some(id.into()),
            text: text.into(),
        }
    }
}

/// Per-level counters producing dotted section numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCounters {
    counts: [u32; LEVELS],
}

impl SectionCounters {
    /// Create counters with every level at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter for `level` and return its dotted label.
    ///
    /// All deeper counters reset. Zero counters from skipped levels are
    /// omitted, so an h4 directly under an h2 numbers as "1.1". Levels
    /// outside 2..=6 return `None`.
    pub fn advance(&mut self, level: u8) -> Option<String> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return None;
        }
        let idx = usize::from(level - MIN_LEVEL);

        for count in &mut self.counts[idx + 1..] {
            *count = 0;
        }
        self.counts[idx] += 1;

        let label = self.counts[..=idx]
            .iter()
            .filter(|&&n| n > 0)
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".");
        Some(label)
    }
}

/// Number every heading in document order and mirror each number into the
/// outline link whose `href` targets the heading's anchor.
///
/// Headings without an id (or without a matching outline entry) still get
/// their text numbered; only the outline update is skipped.
pub fn autonumber(headings: &mut [Heading], mut toc: Option<&mut List>) {
    let mut counters = SectionCounters::new();

    for heading in headings {
        let Some(nums) = counters.advance(heading.level) else {
            continue;
        };
        heading.text = format!("{nums} {}", heading.text);

        let Some(id) = heading.id.as_deref() else {
            continue;
        };
        if let Some(list) = toc.as_deref_mut() {
            let target = format!("#{id}");
            if let Some(link) = find_link_mut(list, &target) {
                link.content.prepend(&nums);
            }
        }
    }
}

fn find_link_mut<'a>(list: &'a mut List, href: &str) -> Option<&'a mut Link> {
    for node in &mut list.children {
        let Node::Item(item) = node else { continue };
        if item.link.as_ref().is_some_and(|link| link.href == href) {
            return item.link.as_mut();
        }
        if let Some(sublist) = item.sublist.as_mut() {
            if let Some(found) = find_link_mut(sublist, href) {
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_basic_sequence() {
        let mut counters = SectionCounters::new();
        assert_eq!(counters.advance(2).as_deref(), Some("1"));
        assert_eq!(counters.advance(3).as_deref(), Some("1.1"));
        assert_eq!(counters.advance(3).as_deref(), Some("1.2"));
        assert_eq!(counters.advance(2).as_deref(), Some("2"));
        assert_eq!(counters.advance(3).as_deref(), Some("2.1"));
    }

    #[test]
    fn test_counters_reset_deeper_levels() {
        let mut counters = SectionCounters::new();
        counters.advance(2);
        counters.advance(3);
        counters.advance(4);
        assert_eq!(counters.advance(3).as_deref(), Some("1.2"));
        assert_eq!(counters.advance(4).as_deref(), Some("1.2.1"));
    }

    #[test]
    fn test_counters_skipped_level_omits_zero() {
        let mut counters = SectionCounters::new();
        assert_eq!(counters.advance(2).as_deref(), Some("1"));
        assert_eq!(counters.advance(4).as_deref(), Some("1.1"));
    }

    #[test]
    fn test_counters_reject_out_of_range_levels() {
        let mut counters = SectionCounters::new();
        assert_eq!(counters.advance(1), None);
        assert_eq!(counters.advance(7), None);
    }
}
