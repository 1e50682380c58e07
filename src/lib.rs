//! # webarchive-text
//!
//! Converts Safari `.webarchive` files into clean, human-readable plain text.
//!
//! A webarchive is a property list holding the captured page's HTML plus its
//! subresources. Conversion runs in two stages: the main document is pulled
//! out of the container and decoded, then its HTML tree is pruned of
//! boilerplate and laid out as text (paragraph spacing, list bullets and
//! numbers, table rows, preformatted blocks) before whitespace
//! normalization.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use webarchive_text::convert;
//!
//! let bytes = std::fs::read("page.webarchive").unwrap();
//! let text = convert(&bytes)?;
//! print!("{text}");
//! # Ok::<(), webarchive_text::Error>(())
//! ```
//!
//! Already-decoded HTML can skip the container stage:
//!
//! ```rust
//! use webarchive_text::html_to_text;
//!
//! let text = html_to_text("<p>Hello  world</p><ul><li>A</li><li>B</li></ul>");
//! assert_eq!(text, "Hello world\n\n• A\n• B\n");
//! ```
//!
//! ## Pipeline
//!
//! container bytes → [`archive`] → [`encoding`] → [`dom`] →
//! [`extractor::filter`] → [`extractor::layout`] → [`normalize()`]
//!
//! Every stage is a pure function of its input; independent archives can be
//! converted in parallel (see [`batch`]).

mod error;
mod options;
mod patterns;
mod result;

/// Webarchive property-list container decoding.
pub mod archive;

/// Batch conversion with per-item results.
pub mod batch;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character decoding of the main resource.
pub mod encoding;

/// HTML pruning and text layout.
pub mod extractor;

/// Whitespace normalization.
pub mod normalize;

// Public API - re-exports
pub use error::{Error, Result};
pub use normalize::normalize;
pub use options::{Options, DEFAULT_MAX_INPUT_SIZE};
pub use result::Conversion;

/// Converts a webarchive to plain text using default options.
///
/// # Errors
///
/// - [`Error::Format`] if `bytes` is not a property list or the declared
///   text encoding is unknown.
/// - [`Error::ContentMissing`] if the archive has no main document payload.
pub fn convert(bytes: &[u8]) -> Result<String> {
    convert_with_options(bytes, &Options::default())
}

/// Converts a webarchive to plain text with custom options.
///
/// # Errors
///
/// See [`convert`].
pub fn convert_with_options(bytes: &[u8], options: &Options) -> Result<String> {
    convert_detailed(bytes, options).map(|c| c.text)
}

/// Converts a webarchive and reports details about the main resource.
///
/// # Errors
///
/// See [`convert`].
///
/// # Example
///
/// ```rust
/// use plist::{Dictionary, Value};
/// use webarchive_text::{convert_detailed, Options};
///
/// let mut main = Dictionary::new();
/// main.insert("WebResourceData".into(), Value::Data(b"<h1>Caf\xE9</h1>".to_vec()));
/// main.insert("WebResourceTextEncodingName".into(), Value::String("ISO-8859-1".into()));
/// let mut root = Dictionary::new();
/// root.insert("WebMainResource".into(), Value::Dictionary(main));
///
/// let mut bytes = Vec::new();
/// Value::Dictionary(root).to_writer_binary(&mut bytes).unwrap();
///
/// let conversion = convert_detailed(&bytes, &Options::default())?;
/// assert_eq!(conversion.text, "Café\n");
/// assert_eq!(conversion.encoding, "windows-1252");
/// # Ok::<(), webarchive_text::Error>(())
/// ```
pub fn convert_detailed(bytes: &[u8], options: &Options) -> Result<Conversion> {
    let main = archive::read_main_resource(bytes)?;
    tracing::debug!(
        key = main.source_key,
        bytes = main.data.len(),
        declared_encoding = main.text_encoding.as_deref(),
        "found main resource"
    );

    let decoded = encoding::decode_document(
        &main.data,
        main.text_encoding.as_deref(),
        &options.default_encoding,
    )?;
    drop(main.data);

    Ok(Conversion {
        text: html_to_text_with_options(&decoded.text, options),
        encoding: decoded.encoding.name().to_string(),
        lossy: decoded.lossy,
        url: main.url,
        mime_type: main.mime_type,
        source_key: main.source_key.to_string(),
    })
}

/// Converts an HTML string to normalized plain text using default options.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    html_to_text_with_options(html, &Options::default())
}

/// Converts an HTML string to normalized plain text.
///
/// Never fails: malformed markup is repaired, and an empty document yields
/// `"\n"`.
#[must_use]
pub fn html_to_text_with_options(html: &str, options: &Options) -> String {
    let fragments = extractor::extract_fragments(html, options);
    normalize::normalize_fragments(&fragments)
}
