//! Text layout.
//!
//! Converts a [`TextTree`] into an ordered list of text [`Fragment`]s with
//! list markers, table row joins and block spacing applied. The walk uses an
//! explicit task stack, so arbitrarily deep markup cannot exhaust the call
//! stack.
//!
//! Per element kind:
//!
//! | Kind            | Output                                                   |
//! |-----------------|----------------------------------------------------------|
//! | Wrapper, Inline | children, nothing added                                   |
//! | Block           | children, then `"\n\n"`                                   |
//! | LineBreak       | `"\n"`                                                    |
//! | UnorderedList   | per direct `li`: indent, `"• "`, trimmed item, `"\n"`     |
//! | OrderedList     | per direct `li`: indent, `"N. "`, trimmed item, `"\n"`    |
//! | Table           | per row with cells: trimmed cells joined by `" \| "`, `"\n"`; then `"\n"` |
//! | Preformatted    | literal text content                                      |

use super::tags::ElementKind;
use super::tree::{NodeId, TextNode, TextTree};

/// Bullet for unordered list items.
pub const BULLET: &str = "• ";

/// Separator between table cells.
pub const CELL_SEPARATOR: &str = " | ";

/// Indentation per list nesting level.
pub const INDENT: &str = "  ";

/// A run of extracted text.
///
/// Literal fragments (preformatted content, list indentation) are exempt
/// from whitespace collapsing during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The text.
    pub text: String,
    /// Whether whitespace inside must be kept as is.
    pub literal: bool,
}

impl Fragment {
    /// A fragment subject to normal whitespace collapsing.
    #[must_use]
    pub fn flow(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            literal: false,
        }
    }

    /// A fragment whose whitespace is preserved.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            literal: true,
        }
    }
}

/// Concatenates fragment texts.
#[must_use]
pub fn concat(fragments: &[Fragment]) -> String {
    fragments.iter().map(|f| f.text.as_str()).collect()
}

enum Task {
    Visit { node: NodeId, depth: usize },
    Emit(&'static str),
    /// Start collecting output into a fresh buffer.
    Capture,
    /// Close a capture as one list item line.
    Item { depth: usize, marker: String },
    /// Close a capture as one table cell.
    Cell { first: bool },
}

/// Lays out a text tree.
///
/// `preserve_preformatted` marks `pre`/`code` text as literal.
#[must_use]
pub fn layout(tree: &TextTree, preserve_preformatted: bool) -> Vec<Fragment> {
    let mut buffers: Vec<Vec<Fragment>> = vec![Vec::new()];
    let mut tasks = vec![Task::Visit {
        node: TextTree::ROOT,
        depth: 0,
    }];

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit { node, depth } => {
                visit(tree, node, depth, preserve_preformatted, &mut tasks, &mut buffers);
            }
            Task::Emit(text) => push(top(&mut buffers), text, false),
            Task::Capture => buffers.push(Vec::new()),
            Task::Item { depth, marker } => {
                let item = close_capture(&mut buffers);
                let out = top(&mut buffers);
                push(out, &INDENT.repeat(depth), true);
                push(out, &marker, false);
                append(out, item);
                push(out, "\n", false);
            }
            Task::Cell { first } => {
                let cell = close_capture(&mut buffers);
                let out = top(&mut buffers);
                if !first {
                    push(out, CELL_SEPARATOR, false);
                }
                append(out, cell);
            }
        }
    }

    // Every Capture is closed by its Item/Cell, leaving the root buffer.
    buffers.pop().unwrap_or_default()
}

fn visit(
    tree: &TextTree,
    node: NodeId,
    depth: usize,
    preserve_preformatted: bool,
    tasks: &mut Vec<Task>,
    buffers: &mut Vec<Vec<Fragment>>,
) {
    let kind = match tree.get(node) {
        Some(TextNode::Text(text)) => {
            push(top(buffers), text, false);
            return;
        }
        Some(TextNode::Preformatted(text)) => {
            push(top(buffers), text, preserve_preformatted);
            return;
        }
        Some(TextNode::Element { kind, .. }) => *kind,
        None => return,
    };

    // Tasks run LIFO: push closing work first, then children in reverse.
    match kind {
        kind if kind.is_list() => {
            // A list nested in an item starts on its own line.
            if depth > 0 && !ends_line(top(buffers)) {
                push(top(buffers), "\n", false);
            }
            let items = tree.list_items(node);
            for (i, &item) in items.iter().enumerate().rev() {
                let marker = if kind == ElementKind::OrderedList {
                    format!("{}. ", i + 1)
                } else {
                    BULLET.to_string()
                };
                tasks.push(Task::Item { depth, marker });
                tasks.push(Task::Visit {
                    node: item,
                    depth: depth + 1,
                });
                tasks.push(Task::Capture);
            }
        }
        ElementKind::Table => {
            tasks.push(Task::Emit("\n"));
            for cells in tree.table_rows(node).iter().rev() {
                if cells.is_empty() {
                    continue;
                }
                tasks.push(Task::Emit("\n"));
                for (j, &cell) in cells.iter().enumerate().rev() {
                    tasks.push(Task::Cell { first: j == 0 });
                    tasks.push(Task::Visit { node: cell, depth });
                    tasks.push(Task::Capture);
                }
            }
        }
        _ => {
            let trailing = kind.trailing();
            if !trailing.is_empty() {
                tasks.push(Task::Emit(trailing));
            }
            tasks.extend(
                tree.children(node)
                    .iter()
                    .rev()
                    .map(|&child| Task::Visit { node: child, depth }),
            );
        }
    }
}

fn top(buffers: &mut Vec<Vec<Fragment>>) -> &mut Vec<Fragment> {
    if buffers.is_empty() {
        buffers.push(Vec::new());
    }
    let last = buffers.len() - 1;
    &mut buffers[last]
}

fn close_capture(buffers: &mut Vec<Vec<Fragment>>) -> Vec<Fragment> {
    let mut captured = if buffers.len() > 1 {
        buffers.pop().unwrap_or_default()
    } else {
        Vec::new()
    };
    trim_fragments(&mut captured);
    captured
}

/// Appends text, merging with the previous fragment of the same kind.
fn push(out: &mut Vec<Fragment>, text: &str, literal: bool) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(last) if last.literal == literal => last.text.push_str(text),
        _ => out.push(Fragment {
            text: text.to_string(),
            literal,
        }),
    }
}

fn append(out: &mut Vec<Fragment>, fragments: Vec<Fragment>) {
    for fragment in fragments {
        push(out, &fragment.text, fragment.literal);
    }
}

fn ends_line(out: &[Fragment]) -> bool {
    out.last().is_none_or(|f| f.text.ends_with('\n'))
}

/// Strips leading and trailing whitespace across fragment boundaries.
pub(crate) fn trim_fragments(fragments: &mut Vec<Fragment>) {
    while let Some(first) = fragments.first_mut() {
        let trimmed = first.text.trim_start();
        if trimmed.is_empty() {
            fragments.remove(0);
        } else {
            first.text = trimmed.to_string();
            break;
        }
    }
    while let Some(last) = fragments.last_mut() {
        let trimmed_len = last.text.trim_end().len();
        if trimmed_len == 0 {
            fragments.pop();
        } else {
            last.text.truncate(trimmed_len);
            break;
        }
    }
}
