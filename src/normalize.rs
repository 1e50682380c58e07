//! Whitespace normalization of extracted text.
//!
//! Passes, in order:
//!
//! 1. Remove zero-width spaces and byte-order marks.
//! 2. Replace non-ASCII space separators with an ASCII space.
//! 3. Split into lines and strip trailing whitespace from each.
//! 4. Collapse runs of two or more spaces inside a line to one space.
//! 5. Reduce every run of blank lines to a single blank line.
//! 6. Strip trailing whitespace from the text and end it with exactly one
//!    newline.
//!
//! Passes 4 and 5 skip literal fragments (preformatted text, list
//! indentation); every other pass applies to all text.

use std::borrow::Cow;

use crate::extractor::Fragment;
use crate::patterns::{INVISIBLE_CHARS, SPACE_RUN, UNICODE_SPACES};

/// Normalizes plain text.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
///
/// # Example
///
/// ```rust
/// use webarchive_text::normalize;
///
/// let text = normalize("Hello \u{00A0} world  \n\n\n\nBye\u{200B}\n\n");
/// assert_eq!(text, "Hello world\n\nBye\n");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    normalize_fragments(&[Fragment::flow(text)])
}

/// Normalizes extracted fragments, keeping literal whitespace intact.
#[must_use]
pub fn normalize_fragments(fragments: &[Fragment]) -> String {
    let lines = split_lines(fragments);

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut blank_run = 0usize;
    for (i, line) in lines.iter().enumerate() {
        let text = render_line(line);
        if !text.is_empty() {
            out.push(text);
            blank_run = 0;
            continue;
        }
        // A blank line opened and closed inside one literal fragment is part
        // of preformatted content.
        let protected = line.opened_in_literal
            && lines.get(i + 1).is_some_and(|next| next.opened_in_literal);
        if protected || blank_run == 0 {
            out.push(text);
        }
        blank_run += 1;
    }

    let mut text = out.join("\n");
    text.truncate(text.trim_end().len());
    text.push('\n');
    text
}

#[derive(Debug, Default)]
struct Line {
    pieces: Vec<(String, bool)>,
    opened_in_literal: bool,
}

/// Applies the character passes and splits fragments into lines.
fn split_lines(fragments: &[Fragment]) -> Vec<Line> {
    let mut lines = vec![Line::default()];

    for fragment in fragments {
        let cleaned = clean_chars(&fragment.text);
        for (n, part) in cleaned.split('\n').enumerate() {
            if n > 0 {
                lines.push(Line {
                    pieces: Vec::new(),
                    opened_in_literal: fragment.literal,
                });
            }
            if !part.is_empty() {
                if let Some(line) = lines.last_mut() {
                    line.pieces.push((part.to_string(), fragment.literal));
                }
            }
        }
    }

    lines
}

fn clean_chars(text: &str) -> Cow<'_, str> {
    match INVISIBLE_CHARS.replace_all(text, "") {
        Cow::Borrowed(_) => UNICODE_SPACES.replace_all(text, " "),
        Cow::Owned(s) => Cow::Owned(UNICODE_SPACES.replace_all(&s, " ").into_owned()),
    }
}

/// Joins a line's pieces, collapsing whitespace in flow pieces only.
fn render_line(line: &Line) -> String {
    let mut out = String::new();
    for (text, literal) in &line.pieces {
        if *literal {
            out.push_str(text);
            continue;
        }
        let collapsed = SPACE_RUN.replace_all(text, " ");
        // A space run split by a literal boundary still collapses to one.
        match collapsed.strip_prefix(' ') {
            Some(rest) if out.ends_with(' ') => out.push_str(rest),
            _ => out.push_str(&collapsed),
        }
    }
    out.truncate(out.trim_end().len());
    out
}
