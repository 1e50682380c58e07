//! Typed text tree.
//!
//! The pruned `dom_query` document is copied once into a flat arena of
//! [`TextNode`]s carrying an [`ElementKind`] per element. Layout then works
//! on plain indices: no tag-name strings, no borrowed DOM handles, and no
//! recursion.

use crate::dom::{self, Document, NodeRef};

use super::tags::ElementKind;

/// Index of a node in a [`TextTree`].
pub type NodeId = usize;

/// A node of the text tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextNode {
    /// An element with its categorized kind and ordered children.
    Element {
        /// Layout category.
        kind: ElementKind,
        /// Children in document order.
        children: Vec<NodeId>,
    },
    /// Literal character data.
    Text(String),
    /// The full text content of a `pre`/`code` subtree, taken verbatim.
    Preformatted(String),
}

/// Arena holding the document's text-bearing nodes.
///
/// Comments, doctypes and processing instructions are not copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTree {
    nodes: Vec<TextNode>,
}

impl TextTree {
    /// Id of the synthetic document root.
    pub const ROOT: NodeId = 0;

    /// Copies a parsed (and usually pruned) document into a text tree.
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        let mut tree = Self {
            nodes: vec![TextNode::Element {
                kind: ElementKind::Wrapper,
                children: Vec::new(),
            }],
        };

        let mut stack: Vec<(NodeRef, NodeId)> = Vec::new();
        if let Some(html) = dom::document_element(doc) {
            stack.push((html, Self::ROOT));
        }

        // Pre-order walk: nodes are popped in document order, so appending to
        // the parent's child list keeps sibling order.
        while let Some((node, parent)) = stack.pop() {
            let built = if node.is_text() {
                TextNode::Text(dom::text_content(&node).to_string())
            } else if let Some(tag) = dom::node_tag(&node) {
                match ElementKind::classify(&tag) {
                    ElementKind::Preformatted => {
                        TextNode::Preformatted(dom::text_content(&node).to_string())
                    }
                    kind => TextNode::Element {
                        kind,
                        children: Vec::new(),
                    },
                }
            } else {
                continue;
            };

            let descend = matches!(built, TextNode::Element { .. });
            let id = tree.push(parent, built);
            if descend {
                stack.extend(node.children().into_iter().rev().map(|child| (child, id)));
            }
        }

        tree
    }

    fn push(&mut self, parent: NodeId, node: TextNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        if let Some(TextNode::Element { children, .. }) = self.nodes.get_mut(parent) {
            children.push(id);
        }
        id
    }

    /// Number of nodes, including the synthetic root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&TextNode> {
        self.nodes.get(id)
    }

    /// Element kind of a node, `None` for text.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<ElementKind> {
        match self.nodes.get(id) {
            Some(TextNode::Element { kind, .. }) => Some(*kind),
            Some(TextNode::Preformatted(_)) => Some(ElementKind::Preformatted),
            _ => None,
        }
    }

    /// Children of a node (empty for text).
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id) {
            Some(TextNode::Element { children, .. }) => children,
            _ => &[],
        }
    }

    /// Direct `li` children of a list.
    #[must_use]
    pub fn list_items(&self, list: NodeId) -> Vec<NodeId> {
        self.children(list)
            .iter()
            .copied()
            .filter(|&c| self.kind(c) == Some(ElementKind::ListItem))
            .collect()
    }

    /// Rows of a table, each as its list of cells, in document order.
    ///
    /// Rows and cells are found at any depth below the table (through
    /// `thead`/`tbody`/`tfoot` or stray wrappers) but never inside a nested
    /// table, which renders its own rows.
    #[must_use]
    pub fn table_rows(&self, table: NodeId) -> Vec<Vec<NodeId>> {
        self.descendants_of_kind(table, ElementKind::TableRow)
            .into_iter()
            .map(|row| self.descendants_of_kind(row, ElementKind::TableCell))
            .collect()
    }

    /// Pre-order search below `id` for nodes of `wanted` kind, not entering
    /// matches or nested tables.
    fn descendants_of_kind(&self, id: NodeId, wanted: ElementKind) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            match self.kind(node) {
                Some(kind) if kind == wanted => found.push(node),
                Some(ElementKind::Table) | None => {}
                Some(_) => stack.extend(self.children(node).iter().rev()),
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(html: &str) -> TextTree {
        TextTree::from_document(&dom::parse(html))
    }

    fn first_of_kind(tree: &TextTree, kind: ElementKind) -> NodeId {
        (0..tree.len())
            .find(|&id| tree.kind(id) == Some(kind))
            .expect("node of kind")
    }

    #[test]
    fn root_wraps_html_element() {
        let tree = build("<p>x</p>");
        assert_eq!(tree.kind(TextTree::ROOT), Some(ElementKind::Wrapper));
        let html = tree.children(TextTree::ROOT)[0];
        assert_eq!(tree.kind(html), Some(ElementKind::Wrapper));
    }

    #[test]
    fn children_keep_document_order() {
        let tree = build("<p>a<b>b</b>c</p>");
        let p = first_of_kind(&tree, ElementKind::Block);
        let texts: Vec<_> = tree
            .children(p)
            .iter()
            .map(|&c| tree.get(c).cloned())
            .collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0], Some(TextNode::Text("a".to_string())));
        assert_eq!(texts[2], Some(TextNode::Text("c".to_string())));
    }

    #[test]
    fn comments_and_doctype_are_dropped() {
        let tree = build("<!DOCTYPE html><html><body><!-- note --><p>x</p></body></html>");
        let has_comment = (0..tree.len())
            .any(|id| matches!(tree.get(id), Some(TextNode::Text(t)) if t.contains("note")));
        assert!(!has_comment);
    }

    #[test]
    fn preformatted_subtree_is_flattened() {
        let tree = build("<pre>a  <b>b</b>\n  c</pre>");
        let pre = first_of_kind(&tree, ElementKind::Preformatted);
        assert_eq!(tree.get(pre), Some(&TextNode::Preformatted("a  b\n  c".to_string())));
        assert!(tree.children(pre).is_empty());
    }

    #[test]
    fn list_items_are_direct_children_only() {
        let tree = build("<ul><li>a<ul><li>inner</li></ul></li><li>b</li></ul>");
        let ul = first_of_kind(&tree, ElementKind::UnorderedList);
        assert_eq!(tree.list_items(ul).len(), 2);
    }

    #[test]
    fn table_rows_skip_nested_tables() {
        let tree = build(
            "<table><thead><tr><th>h1</th><th>h2</th></tr></thead>\
             <tbody><tr><td>a</td><td><table><tr><td>x</td><td>y</td><td>z</td></tr></table></td></tr>\
             <tr></tr></tbody></table>",
        );
        let table = first_of_kind(&tree, ElementKind::Table);
        let rows = tree.table_rows(table);
        let widths: Vec<usize> = rows.iter().map(Vec::len).collect();
        assert_eq!(widths, vec![2, 2, 0]);
    }
}
