//! Shared helpers for building webarchive fixtures.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use plist::{Dictionary, Value};

/// Main resource record with the given payload and optional encoding.
pub fn main_resource(html: &[u8], encoding: Option<&str>) -> Value {
    let mut record = Dictionary::new();
    record.insert("WebResourceData".to_string(), Value::Data(html.to_vec()));
    record.insert("WebResourceMIMEType".to_string(), Value::String("text/html".to_string()));
    record.insert(
        "WebResourceURL".to_string(),
        Value::String("https://example.com/article".to_string()),
    );
    if let Some(encoding) = encoding {
        record.insert(
            "WebResourceTextEncodingName".to_string(),
            Value::String(encoding.to_string()),
        );
    }
    Value::Dictionary(record)
}

/// Root dictionary with the record under `key` and an empty subresource list.
pub fn root_with(key: &str, record: Value) -> Dictionary {
    let mut root = Dictionary::new();
    root.insert(key.to_string(), record);
    root.insert("WebSubresources".to_string(), Value::Array(Vec::new()));
    root
}

/// Binary-plist webarchive as written by current Safari.
pub fn binary_archive(html: &[u8], encoding: Option<&str>) -> Vec<u8> {
    to_binary(root_with("WebMainResource", main_resource(html, encoding)))
}

/// XML-plist webarchive using the older `MainResource` key.
pub fn xml_archive(html: &[u8], encoding: Option<&str>) -> Vec<u8> {
    to_xml(root_with("MainResource", main_resource(html, encoding)))
}

pub fn to_binary(root: Dictionary) -> Vec<u8> {
    let mut out = Vec::new();
    Value::Dictionary(root)
        .to_writer_binary(&mut out)
        .expect("write binary plist");
    out
}

pub fn to_xml(root: Dictionary) -> Vec<u8> {
    let mut out = Vec::new();
    Value::Dictionary(root)
        .to_writer_xml(&mut out)
        .expect("write xml plist");
    out
}
