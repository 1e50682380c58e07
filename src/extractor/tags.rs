//! Tag catalogs and element categories.
//!
//! Every element is assigned one [`ElementKind`] when the text tree is built,
//! so layout dispatch is a single `match` instead of repeated tag-name
//! comparisons.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Structural wrappers that contribute only their children's text.
pub static WRAPPER_TAGS: [&str; 3] = ["html", "body", "head"];

/// Block tags: followed by a blank line in the output.
pub static BLOCK_TAGS: [&str; 11] = [
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "section", "article",
];

/// Preformatted tags: text content is emitted literally.
pub static PREFORMATTED_TAGS: [&str; 2] = ["pre", "code"];

/// Table cell tags: th, td
pub static CELL_TAGS: [&str; 2] = ["td", "th"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `WRAPPER_TAGS` as a `HashSet`
pub static WRAPPER_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    WRAPPER_TAGS.into_iter().collect()
});

/// `BLOCK_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    BLOCK_TAGS.into_iter().collect()
});

/// `PREFORMATTED_TAGS` as a `HashSet`
pub static PREFORMATTED_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    PREFORMATTED_TAGS.into_iter().collect()
});

/// Layout category of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `html`, `body`, `head`: transparent.
    Wrapper,
    /// `ul`: direct `li` children become bulleted lines.
    UnorderedList,
    /// `ol`: direct `li` children become numbered lines.
    OrderedList,
    /// `li`: inline unless rendered by its parent list.
    ListItem,
    /// `table`: each row becomes one ` | `-joined line.
    Table,
    /// `tr`
    TableRow,
    /// `td`, `th`
    TableCell,
    /// `pre`, `code`: literal text content.
    Preformatted,
    /// `br`: single newline.
    LineBreak,
    /// Paragraph-like elements: blank line after.
    Block,
    /// Everything else.
    Inline,
}

impl ElementKind {
    /// Categorizes a lowercase tag name.
    #[must_use]
    pub fn classify(tag: &str) -> Self {
        match tag {
            "ul" => Self::UnorderedList,
            "ol" => Self::OrderedList,
            "li" => Self::ListItem,
            "table" => Self::Table,
            "tr" => Self::TableRow,
            "br" => Self::LineBreak,
            t if is_cell_tag(t) => Self::TableCell,
            t if WRAPPER_TAG_SET.contains(t) => Self::Wrapper,
            t if PREFORMATTED_TAG_SET.contains(t) => Self::Preformatted,
            t if BLOCK_TAG_SET.contains(t) => Self::Block,
            _ => Self::Inline,
        }
    }

    /// Text appended after the element's own content.
    #[must_use]
    pub fn trailing(self) -> &'static str {
        match self {
            Self::Block => "\n\n",
            Self::LineBreak => "\n",
            _ => "",
        }
    }

    /// Whether the element renders a list of items.
    #[inline]
    #[must_use]
    pub fn is_list(self) -> bool {
        matches!(self, Self::UnorderedList | Self::OrderedList)
    }
}

/// Check if tag is a table cell
#[inline]
#[must_use]
pub fn is_cell_tag(tag: &str) -> bool {
    CELL_TAGS.contains(&tag)
}
