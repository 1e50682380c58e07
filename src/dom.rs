//! DOM operations adapter.
//!
//! Thin layer over the `dom_query` crate. Parsing follows the HTML5 tree
//! construction algorithm (via html5ever), so it never fails: unclosed tags
//! are closed, misnested tags are repaired and fragments get implicit
//! `<html>`/`<head>`/`<body>` wrappers.

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_document, ParseOpts};

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Parsed with the scripting flag on, as a browser would: `<noscript>`
/// content stays raw text inside the element (even in `<head>`) instead of
/// leaking into `<body>`, so removing the element removes its content.
#[must_use]
pub fn parse(html: &str) -> Document {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: true,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(Document::default(), opts).one(html)
}

/// The `<html>` element of a parsed document.
///
/// Always present: the parser synthesizes it when the input lacks one.
#[must_use]
pub fn document_element(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("html").nodes().first().cloned()
}

// === Node Information ===

/// Lowercase tag name of an element node, `None` for other node types.
#[inline]
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<StrTendril> {
    if node.is_element() {
        node.node_name()
    } else {
        None
    }
}

/// Attribute value of an element node.
#[inline]
#[must_use]
pub fn node_attr(node: &NodeRef, name: &str) -> Option<StrTendril> {
    Selection::from(node.clone()).attr(name)
}

/// Get all text content of a node and its descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

// === Tree Manipulation ===

/// Detach a node and its whole subtree from the document.
#[inline]
pub fn remove(node: &NodeRef) {
    Selection::from(node.clone()).remove();
}
