//! Batch conversion.
//!
//! The boundary between callers that hold uploaded files and the
//! conversion core: it enforces the input size ceiling, maps errors to
//! user-facing messages, names the output files and converts independent
//! items in parallel. A failing item never affects its siblings.

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use serde::Serialize;

use crate::{convert_with_options, Options};

/// Extension stripped from input names.
pub const ARCHIVE_EXTENSION: &str = ".webarchive";

/// Extension appended to output names.
pub const TEXT_EXTENSION: &str = ".txt";

/// Name used when an upload carries no usable filename.
pub const DEFAULT_OUTPUT_NAME: &str = "converted.txt";

/// Message for failures that are not archive errors.
pub const PROCESSING_ERROR: &str = "Server processing error";

/// One uploaded archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    /// Original filename, if the upload had one.
    pub filename: Option<String>,
    /// Raw archive bytes.
    pub bytes: Vec<u8>,
}

impl BatchItem {
    /// Creates an item from a filename and its bytes.
    #[must_use]
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: Some(filename.into()),
            bytes,
        }
    }
}

/// Outcome of converting one batch item.
///
/// Serializes as `{"filename": ..., "text": ...}` or
/// `{"filename": ..., "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    /// Conversion succeeded.
    Converted {
        /// Output filename.
        filename: String,
        /// Converted text.
        text: String,
    },
    /// Conversion failed; `error` is safe to show to end users.
    Failed {
        /// Output filename.
        filename: String,
        /// User-facing error message.
        error: String,
    },
}

impl BatchEntry {
    /// Output filename of the entry.
    #[must_use]
    pub fn filename(&self) -> &str {
        match self {
            Self::Converted { filename, .. } | Self::Failed { filename, .. } => filename,
        }
    }

    /// Whether the conversion succeeded.
    #[must_use]
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// Derives the output filename for an upload.
///
/// Directory components are dropped, a trailing `.webarchive` (any case) is
/// stripped and `.txt` appended.
///
/// # Examples
///
/// ```
/// use webarchive_text::batch::output_filename;
///
/// assert_eq!(output_filename(Some("Article.WebArchive")), "Article.txt");
/// assert_eq!(output_filename(Some("dir/notes.html")), "notes.html.txt");
/// assert_eq!(output_filename(None), "converted.txt");
/// ```
#[must_use]
pub fn output_filename(filename: Option<&str>) -> String {
    let base = filename
        .map(|name| name.rsplit(['/', '\\']).next().unwrap_or(name).trim())
        .unwrap_or_default();

    let stem = if base.len() >= ARCHIVE_EXTENSION.len()
        && base.is_char_boundary(base.len() - ARCHIVE_EXTENSION.len())
        && base[base.len() - ARCHIVE_EXTENSION.len()..].eq_ignore_ascii_case(ARCHIVE_EXTENSION)
    {
        &base[..base.len() - ARCHIVE_EXTENSION.len()]
    } else {
        base
    };

    if stem.is_empty() {
        DEFAULT_OUTPUT_NAME.to_string()
    } else {
        format!("{stem}{TEXT_EXTENSION}")
    }
}

/// User-facing message for an input above the size ceiling.
#[must_use]
pub fn too_large_message(options: &Options) -> String {
    let mib = options.max_input_size / (1024 * 1024);
    if mib > 0 {
        format!("File too large (>{mib}MB)")
    } else {
        format!("File too large (>{} bytes)", options.max_input_size)
    }
}

/// Converts a single item into a batch entry.
///
/// Oversized input is rejected before conversion. Archive errors become
/// their user message; a panic inside conversion becomes
/// [`PROCESSING_ERROR`].
#[must_use]
pub fn convert_item(item: &BatchItem, options: &Options) -> BatchEntry {
    let filename = output_filename(item.filename.as_deref());

    if item.bytes.len() > options.max_input_size {
        tracing::warn!(%filename, size = item.bytes.len(), "rejected oversized archive");
        return BatchEntry::Failed {
            filename,
            error: too_large_message(options),
        };
    }

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| convert_with_options(&item.bytes, options)));
    match outcome {
        Ok(Ok(text)) => BatchEntry::Converted { filename, text },
        Ok(Err(err)) => {
            tracing::warn!(%filename, error = %err, "conversion failed");
            BatchEntry::Failed {
                filename,
                error: err.user_message().to_string(),
            }
        }
        Err(_) => {
            tracing::error!(%filename, "conversion panicked");
            BatchEntry::Failed {
                filename,
                error: PROCESSING_ERROR.to_string(),
            }
        }
    }
}

/// Converts all items in parallel, returning entries in input order.
#[must_use]
pub fn convert_batch(items: &[BatchItem], options: &Options) -> Vec<BatchEntry> {
    items.par_iter().map(|item| convert_item(item, options)).collect()
}
