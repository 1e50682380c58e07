//! HTML to text extraction.
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs and the [`ElementKind`] categories
//! - `filter`: Pruning of scripts, landmarks and navigation/ad subtrees
//! - `tree`: Typed arena copy of the pruned document
//! - `layout`: Iterative text layout producing [`Fragment`]s
//!
//! # Usage
//!
//! ```rust
//! use webarchive_text::extractor::{extract_fragments, layout::concat};
//! use webarchive_text::Options;
//!
//! let fragments = extract_fragments("<ul><li>A</li><li>B</li></ul>", &Options::default());
//! assert_eq!(concat(&fragments), "• A\n• B\n");
//! ```

pub mod filter;
pub mod layout;
pub mod tags;
pub mod tree;

pub use filter::ContentFilter;
pub use layout::{layout, Fragment};
pub use tags::ElementKind;
pub use tree::{NodeId, TextNode, TextTree};

use crate::dom;
use crate::Options;

/// Parses, prunes and lays out an HTML document.
///
/// Never fails: malformed markup is repaired by the parser.
#[must_use]
pub fn extract_fragments(html: &str, options: &Options) -> Vec<Fragment> {
    let doc = dom::parse(html);
    ContentFilter::new(options).prune(&doc);

    let tree = TextTree::from_document(&doc);
    drop(doc);

    let fragments = layout(&tree, options.preserve_preformatted);
    tracing::debug!(
        nodes = tree.len(),
        fragments = fragments.len(),
        "laid out text tree"
    );
    fragments
}
