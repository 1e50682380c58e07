//! Webarchive container decoding.
//!
//! A `.webarchive` is a property list (binary or XML) whose root dictionary
//! holds the main resource record plus subresources and subframes. Only the
//! main resource is read here; everything else is dropped with the parsed
//! container.

use std::io::Cursor;

use plist::{Dictionary, Value};

use crate::error::{Error, Result};

/// Accepted keys for the main resource record, tried in order.
///
/// Archives written by different Safari/WebKit generations use one or the
/// other name for the same record.
pub const MAIN_RESOURCE_KEYS: [&str; 2] = ["MainResource", "WebMainResource"];

/// Key of the raw document bytes inside the main resource.
pub const RESOURCE_DATA_KEY: &str = "WebResourceData";

/// Key of the declared text encoding inside the main resource.
pub const TEXT_ENCODING_KEY: &str = "WebResourceTextEncodingName";

/// Key of the document URL inside the main resource.
pub const URL_KEY: &str = "WebResourceURL";

/// Key of the document MIME type inside the main resource.
pub const MIME_TYPE_KEY: &str = "WebResourceMIMEType";

/// The main document record, moved out of the parsed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainResource {
    /// Raw document bytes, still in the declared encoding.
    pub data: Vec<u8>,

    /// Declared text encoding label, if any (e.g. `"UTF-8"`, `"x-mac-roman"`).
    pub text_encoding: Option<String>,

    /// Source URL of the captured page.
    pub url: Option<String>,

    /// MIME type of the captured page (normally `text/html`).
    pub mime_type: Option<String>,

    /// Container key the record was found under.
    pub source_key: &'static str,
}

/// Parses a webarchive buffer and returns its main resource.
///
/// The property list format (binary `bplist00` or XML) is detected by the
/// `plist` crate.
///
/// # Errors
///
/// - [`Error::Format`] if the buffer is not a property list or its root is
///   not a dictionary.
/// - [`Error::ContentMissing`] if no main resource dictionary is present, or
///   it carries no non-empty `WebResourceData` blob.
pub fn read_main_resource(bytes: &[u8]) -> Result<MainResource> {
    let root = Value::from_reader(Cursor::new(bytes))
        .map_err(|e| Error::Format(format!("not a property list: {e}")))?;

    let Value::Dictionary(mut root) = root else {
        return Err(Error::Format("property list root is not a dictionary".to_string()));
    };

    let (source_key, mut record) = take_main_record(&mut root)?;

    let data = match record.remove(RESOURCE_DATA_KEY) {
        Some(Value::Data(data)) if !data.is_empty() => data,
        Some(Value::Data(_)) => {
            return Err(Error::ContentMissing(format!("{source_key}.{RESOURCE_DATA_KEY} is empty")));
        }
        Some(_) => {
            return Err(Error::ContentMissing(format!(
                "{source_key}.{RESOURCE_DATA_KEY} is not a data blob"
            )));
        }
        None => {
            return Err(Error::ContentMissing(format!("{source_key}.{RESOURCE_DATA_KEY} is absent")));
        }
    };

    Ok(MainResource {
        data,
        text_encoding: take_string(&mut record, TEXT_ENCODING_KEY),
        url: take_string(&mut record, URL_KEY),
        mime_type: take_string(&mut record, MIME_TYPE_KEY),
        source_key,
    })
}

/// Removes the first non-empty main resource dictionary from the root.
fn take_main_record(root: &mut Dictionary) -> Result<(&'static str, Dictionary)> {
    for key in MAIN_RESOURCE_KEYS {
        if let Some(Value::Dictionary(record)) = root.remove(key) {
            if !record.is_empty() {
                return Ok((key, record));
            }
        }
    }

    Err(Error::ContentMissing(format!(
        "none of {} holds a resource dictionary",
        MAIN_RESOURCE_KEYS.join(", ")
    )))
}

/// Takes a non-blank string field out of a record.
fn take_string(record: &mut Dictionary, key: &str) -> Option<String> {
    match record.remove(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}
