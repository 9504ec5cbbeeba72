//! The outline tree model
//!
//! Mirrors the nested list-of-items-with-links structure emitted by the
//! host's templating pipeline. The host owns the tree structurally; this
//! crate only rewrites the presentation of its links.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A list container holding outline entries in document order.
///
/// The root list additionally carries the idempotence sentinel class once
/// it has been annotated (see [`crate::render::ANNOTATED_CLASS`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Class markers consumed by the accompanying stylesheet.
    #[serde(default)]
    pub classes: Vec<String>,

    /// Child nodes in document order. May interleave non-item nodes,
    /// which entry enumeration skips.
    #[serde(default)]
    pub children: Vec<Node>,
}

/// One child node of a [`List`].
///
/// Templating output routinely interleaves whitespace text between items;
/// only `Item` nodes count as outline entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A true outline entry.
    Item(Item),

    /// Raw text (typically whitespace), ignored by entry enumeration.
    Text(String),
}

/// A single outline entry: an optional direct link plus an optional
/// nested sub-list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The entry's direct link, if the template produced one.
    #[serde(default)]
    pub link: Option<Link>,

    /// The nested child list, if this entry has sub-entries.
    #[serde(default)]
    pub sublist: Option<List>,
}

/// A hyperlink inside an outline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link target. Opaque to this crate.
    pub href: String,

    /// Class markers consumed by the accompanying stylesheet.
    #[serde(default)]
    pub classes: Vec<String>,

    /// The link's visible content.
    pub content: LinkContent,
}

/// Visible content of a [`Link`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkContent {
    /// Raw label text as produced by the templating pipeline.
    Plain(String),

    /// The two logically distinct spans written by the annotator: the
    /// branch prefix and the trimmed label.
    Annotated {
        /// Connector prefix (one segment per ancestor level plus the
        /// branch connector for this entry).
        prefix: String,
        /// Trimmed label text.
        label: String,
    },
}

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outline entry.
    pub fn push_item(&mut self, item: Item) {
        self.children.push(Node::Item(item));
    }

    /// Append a raw text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Whether this list carries the given class marker.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class marker if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Iterate over true outline entries, skipping text nodes.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.children.iter().filter_map(|node| match node {
            Node::Item(item) => Some(item),
            Node::Text(_) => None,
        })
    }

    /// Mutable variant of [`List::items`].
    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Item(item) => Some(item),
            Node::Text(_) => None,
        })
    }

    /// Number of true outline entries (text nodes excluded).
    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    /// Whether the list holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

impl Item {
    /// An entry with a link and no sub-entries.
    pub fn leaf(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            link: Some(Link::new(label, href)),
            sublist: None,
        }
    }

    /// An entry with a link and a nested child list.
    pub fn section(label: impl Into<String>, href: impl Into<String>, sublist: List) -> Self {
        Self {
            link: Some(Link::new(label, href)),
            sublist: Some(sublist),
        }
    }

    /// An entry without a direct link.
    pub fn bare() -> Self {
        Self::default()
    }

    /// Attach a nested child list.
    pub fn with_sublist(mut self, sublist: List) -> Self {
        self.sublist = Some(sublist);
        self
    }
}

impl Link {
    /// Create a plain link as the templating pipeline would emit it.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            classes: Vec::new(),
            content: LinkContent::Plain(label.into()),
        }
    }
}

impl LinkContent {
    /// The visible label text, regardless of annotation state.
    pub fn label(&self) -> &str {
        match self {
            LinkContent::Plain(label) => label,
            LinkContent::Annotated { label, .. } => label,
        }
    }

    /// Prepend a section number to the visible label.
    pub fn prepend(&mut self, nums: &str) {
        let label = match self {
            LinkContent::Plain(label) => label,
            LinkContent::Annotated { label, .. } => label,
        };
        let numbered = format!("{nums} {label}");
        *label = numbered;
    }
}

impl fmt::Display for List {
    /// Render the outline as plain text, one line per linked entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items() {
            if let Some(link) = &item.link {
                match &link.content {
                    LinkContent::Plain(label) => writeln!(f, "{label}")?,
                    LinkContent::Annotated { prefix, label } => writeln!(f, "{prefix}{label}")?,
                }
            }
            if let Some(sublist) = &item.sublist {
                fmt::Display::fmt(sublist, f)?;
            }
        }
        Ok(())
    }
}
