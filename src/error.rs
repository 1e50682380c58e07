//! Error types for webarchive-text.
//!
//! Conversion fails in exactly two ways: the input is not a readable
//! archive (`Format`), or it is readable but has no main document to
//! convert (`ContentMissing`). Malformed HTML and bad byte sequences are
//! repaired, never reported.

/// Error type for conversion operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The container could not be parsed, or its declared text encoding is
    /// not supported.
    #[error("Invalid .webarchive format: {0}")]
    Format(String),

    /// The container parsed but holds no usable main-document payload.
    #[error("Webarchive missing main content: {0}")]
    ContentMissing(String),
}

impl Error {
    /// Message safe to show to an end user.
    ///
    /// Both variants collapse to a fixed string so that diagnostic detail
    /// (plist parser output, key names) does not leak past the boundary.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Format(_) => "Invalid .webarchive format",
            Self::ContentMissing(_) => "Webarchive missing main content",
        }
    }

    /// Returns `true` for parse-time corruption or an unsupported encoding.
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Returns `true` for a structurally valid archive without content.
    #[must_use]
    pub fn is_content_missing(&self) -> bool {
        matches!(self, Self::ContentMissing(_))
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
