//! Content filter.
//!
//! Prunes non-content subtrees from the parsed document before text
//! extraction: fixed tags (scripts, styles, landmarks) and elements whose
//! `class` or `id` names them as navigation or advertising.

use std::collections::HashSet;

use regex::Regex;

use crate::dom::{self, Document, NodeRef};
use crate::patterns::noise_pattern;
use crate::Options;

/// Removal rules compiled from [`Options`].
#[derive(Debug, Clone)]
pub struct ContentFilter {
    removal_tags: HashSet<String>,
    noise: Option<Regex>,
}

impl ContentFilter {
    /// Compiles the removal tag set and noise pattern.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            removal_tags: options
                .removal_tags
                .iter()
                .map(|t| t.trim().to_ascii_lowercase())
                .collect(),
            noise: noise_pattern(&options.noise_tokens),
        }
    }

    /// Whether an element and its subtree must be removed.
    ///
    /// Applies to every element, `html` and `body` included: a page-level
    /// `class="has-sidebar"` removes the whole page.
    #[must_use]
    pub fn matches(&self, node: &NodeRef) -> bool {
        let Some(tag) = dom::node_tag(node) else {
            return false;
        };
        if self.removal_tags.contains(tag.as_ref()) {
            return true;
        }

        let Some(noise) = &self.noise else {
            return false;
        };
        ["class", "id"]
            .into_iter()
            .filter_map(|name| dom::node_attr(node, name))
            .any(|value| noise.is_match(&value))
    }

    /// Removes every matching subtree from the document.
    ///
    /// Depth-first with an explicit stack; a matched node is not descended
    /// into since its descendants leave with it. Returns the number of
    /// subtrees removed.
    pub fn prune(&self, doc: &Document) -> usize {
        let Some(root) = dom::document_element(doc) else {
            return 0;
        };

        let mut doomed = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if !node.is_element() {
                continue;
            }
            if self.matches(&node) {
                doomed.push(node);
                continue;
            }
            stack.extend(node.children());
        }

        for node in &doomed {
            dom::remove(node);
        }

        tracing::debug!(removed = doomed.len(), "pruned non-content subtrees");
        doomed.len()
    }
}
