//! Character decoding of the main document payload.
//!
//! The archive declares the payload's encoding by label (`"UTF-8"`,
//! `"ISO-8859-1"`, `"x-mac-roman"`, ...). Labels are resolved with the
//! WHATWG label table, which is case-insensitive and accepts the common
//! aliases. Unknown labels are an error; invalid byte sequences are not.

use encoding_rs::{Encoding, REPLACEMENT};

use crate::error::{Error, Result};

/// A decoded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    /// The document as UTF-8.
    pub text: String,

    /// Encoding used: the declared one, or the fallback when none was
    /// declared.
    pub encoding: &'static Encoding,

    /// Whether malformed sequences were replaced with U+FFFD.
    pub lossy: bool,
}

/// Resolves an encoding label.
///
/// Leading and trailing whitespace is ignored and matching is
/// case-insensitive.
///
/// # Errors
///
/// Returns [`Error::Format`] for labels that are unknown, or that map to the
/// WHATWG "replacement" encoding (e.g. `iso-2022-kr`), which cannot decode
/// anything.
///
/// # Examples
///
/// ```
/// use webarchive_text::encoding::resolve_encoding;
///
/// assert_eq!(resolve_encoding("UTF-8")?.name(), "UTF-8");
/// assert_eq!(resolve_encoding("latin1")?.name(), "windows-1252");
/// assert!(resolve_encoding("klingon-8").is_err());
/// # Ok::<(), webarchive_text::Error>(())
/// ```
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    match Encoding::for_label(label.trim().as_bytes()) {
        Some(encoding) if encoding != REPLACEMENT => Ok(encoding),
        Some(_) => Err(Error::Format(format!("unsupported text encoding: {label}"))),
        None => Err(Error::Format(format!("unknown text encoding: {label}"))),
    }
}

/// Decodes a document payload.
///
/// `declared` is the label from the archive; `fallback` is used when the
/// archive declares none. A single pass decodes with replacement and reports
/// whether any replacement happened, so a corrupt fragment only degrades the
/// affected characters.
///
/// A byte-order mark is stripped only when it belongs to the resolved
/// encoding; it never switches the document to another encoding.
///
/// # Errors
///
/// Returns [`Error::Format`] if the effective label cannot be resolved.
pub fn decode_document(bytes: &[u8], declared: Option<&str>, fallback: &str) -> Result<DecodedDocument> {
    let label = declared.unwrap_or(fallback);
    let encoding = resolve_encoding(label)?;

    let (text, lossy) = encoding.decode_with_bom_removal(bytes);
    if lossy {
        tracing::warn!(
            encoding = encoding.name(),
            bytes = bytes.len(),
            "malformed byte sequences replaced during decoding"
        );
    } else {
        tracing::debug!(encoding = encoding.name(), bytes = bytes.len(), "decoded main resource");
    }

    Ok(DecodedDocument {
        text: text.into_owned(),
        encoding,
        lossy,
    })
}
