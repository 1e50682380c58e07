//! Compiled regex patterns used by the content filter and normalizer.
//!
//! Static patterns are compiled once using `LazyLock`. The noise pattern is
//! built from `Options::noise_tokens` so it can be tuned without touching
//! extraction code.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

// =============================================================================
// Content Filter Patterns
// =============================================================================

/// Builds the case-insensitive substring pattern for navigation/advertising
/// class and id values.
///
/// Tokens are escaped, so `ad` matches `"header-ad"` and also `"shadow"`;
/// substring matching is intentionally coarse. Returns `None` when no
/// non-empty token is configured, which disables attribute-based pruning.
#[must_use]
pub fn noise_pattern(tokens: &[String]) -> Option<Regex> {
    let alternation = tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    if alternation.is_empty() {
        return None;
    }

    RegexBuilder::new(&format!("(?:{alternation})"))
        .case_insensitive(true)
        .build()
        .ok()
}

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Characters with no visual meaning: zero-width space and byte-order mark.
pub static INVISIBLE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[\u{200B}\u{FEFF}]").expect("INVISIBLE_CHARS regex")
});

/// Non-ASCII space separators that render as a plain space.
pub static UNICODE_SPACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[\u{00A0}\u{1680}\u{2000}-\u{200A}\u{202F}\u{205F}\u{3000}]")
        .expect("UNICODE_SPACES regex")
});

/// Runs of two or more ASCII spaces inside a line.
pub static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" {2,}").expect("SPACE_RUN regex")
});
