//! Result types for conversion output.

use serde::Serialize;

/// Result of converting one webarchive.
///
/// Carries the final text along with what was learned about the main
/// resource while decoding it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Normalized plain text, ending in exactly one newline.
    pub text: String,

    /// Name of the encoding used to decode the main resource.
    pub encoding: String,

    /// Whether invalid byte sequences were replaced during decoding.
    pub lossy: bool,

    /// URL the page was captured from (`WebResourceURL`).
    pub url: Option<String>,

    /// MIME type of the main resource (`WebResourceMIMEType`).
    pub mime_type: Option<String>,

    /// Container key the main resource was found under.
    pub source_key: String,
}
