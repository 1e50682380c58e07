#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{binary_archive, main_resource, root_with, to_binary, to_xml, xml_archive};
use plist::{Dictionary, Value};
use webarchive_text::{convert, convert_detailed, convert_with_options, Error, Options};

const SAMPLE: &str = "<p>Hello  world</p><ul><li>A</li><li>B</li></ul>";

#[test]
fn binary_archive_converts_end_to_end() {
    let text = convert(&binary_archive(SAMPLE.as_bytes(), Some("UTF-8"))).expect("convert");
    assert_eq!(text, "Hello world\n\n• A\n• B\n");
}

#[test]
fn xml_archive_with_legacy_key_converts() {
    let text = convert(&xml_archive(SAMPLE.as_bytes(), None)).expect("convert");
    assert_eq!(text, "Hello world\n\n• A\n• B\n");
}

#[test]
fn detailed_conversion_reports_resource_metadata() {
    let bytes = binary_archive(SAMPLE.as_bytes(), Some("utf-8"));
    let conversion = convert_detailed(&bytes, &Options::default()).expect("convert");
    assert_eq!(conversion.encoding, "UTF-8");
    assert!(!conversion.lossy);
    assert_eq!(conversion.url.as_deref(), Some("https://example.com/article"));
    assert_eq!(conversion.mime_type.as_deref(), Some("text/html"));
    assert_eq!(conversion.source_key, "WebMainResource");
}

#[test]
fn missing_main_resource_is_content_missing() {
    let mut root = Dictionary::new();
    root.insert("WebSubresources".to_string(), Value::Array(Vec::new()));
    for bytes in [to_binary(root.clone()), to_xml(root)] {
        match convert(&bytes) {
            Err(Error::ContentMissing(_)) => {}
            other => panic!("expected ContentMissing, got {other:?}"),
        }
    }
}

#[test]
fn record_without_payload_is_content_missing() {
    let mut record = Dictionary::new();
    record.insert("WebResourceMIMEType".to_string(), Value::String("text/html".to_string()));
    let bytes = to_binary(root_with("WebMainResource", Value::Dictionary(record)));
    assert!(matches!(convert(&bytes), Err(Error::ContentMissing(_))));
}

#[test]
fn non_plist_bytes_are_format_error() {
    for bytes in [
        &b""[..],
        b"<html><body>not an archive</body></html>",
        b"bplist00\x00\x01garbage",
        b"\x00\xFF\x10\x80",
    ] {
        match convert(bytes) {
            Err(Error::Format(_)) => {}
            other => panic!("expected Format for {bytes:?}, got {other:?}"),
        }
    }
}

#[test]
fn unknown_encoding_is_format_error() {
    let bytes = binary_archive(b"<p>x</p>", Some("x-no-such-encoding"));
    let err = convert(&bytes).unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.user_message(), "Invalid .webarchive format");
}

#[test]
fn declared_legacy_encoding_is_honored() {
    let bytes = binary_archive(b"<p>Caf\xE9 \x93quoted\x94</p>", Some("windows-1252"));
    let text = convert(&bytes).expect("convert");
    assert_eq!(text, "Café \u{201C}quoted\u{201D}\n");
}

#[test]
fn mac_roman_archive_decodes() {
    // 0x8E is é in Mac OS Roman
    let bytes = xml_archive(b"<p>Caf\x8E</p>", Some("x-mac-roman"));
    assert_eq!(convert(&bytes).expect("convert"), "Café\n");
}

#[test]
fn invalid_bytes_fall_back_to_replacement() {
    let bytes = binary_archive(b"<p>Good \xFF\xFE text</p>", Some("UTF-8"));
    let conversion = convert_detailed(&bytes, &Options::default()).expect("convert");
    assert!(conversion.lossy);
    assert!(conversion.text.starts_with("Good "));
    assert!(conversion.text.ends_with(" text\n"));
    assert!(conversion.text.contains('\u{FFFD}'));
}

#[test]
fn wrong_but_valid_encoding_never_fails() {
    let html = "<p>Ünïcödé façade – naïve</p>".as_bytes();
    for label in ["US-ASCII", "ISO-8859-5", "Shift_JIS", "EUC-KR", "UTF-16LE", "GBK"] {
        let result = convert(&binary_archive(html, Some(label)));
        assert!(result.is_ok(), "{label}: {result:?}");
    }
}

#[test]
fn byte_order_mark_is_not_emitted() {
    let mut html = vec![0xEF, 0xBB, 0xBF];
    html.extend_from_slice(b"<p>after bom</p>");
    let text = convert(&binary_archive(&html, Some("UTF-8"))).expect("convert");
    assert_eq!(text, "after bom\n");
}

#[test]
fn default_encoding_is_configurable() {
    let options = Options {
        default_encoding: "iso-8859-1".to_string(),
        ..Options::default()
    };
    let bytes = binary_archive(b"<p>\xE9t\xE9</p>", None);
    assert_eq!(convert_with_options(&bytes, &options).expect("convert"), "été\n");
}

#[test]
fn realistic_page_converts_cleanly() {
    let html = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Trail Guide</title>
    <style>body { font-family: serif; }</style>
    <script>window.analytics = {};</script>
</head>
<body>
    <header><a href="/">Outdoors Weekly</a></header>
    <nav class="site-nav"><ul><li>Home</li><li>Trails</li></ul></nav>
    <article>
        <h1>Ridge   Loop</h1>
        <p>A&nbsp;moderate hike with <strong>great</strong> views.</p>
        <div class="sidebar-widget">Popular posts</div>
        <h2>What to bring</h2>
        <ol>
            <li>Water</li>
            <li>Map</li>
        </ol>
        <table>
            <tr><th>Segment</th><th>Miles</th></tr>
            <tr><td>Climb</td><td>2.1</td></tr>
        </table>
        <div class="advertisement">Buy boots now!</div>
    </article>
    <footer>© 2024</footer>
</body>
</html>"#;

    let text = convert(&binary_archive(html.as_bytes(), Some("UTF-8"))).expect("convert");
    // Source indentation survives as a single leading space.
    let lines: Vec<&str> = text.lines().map(str::trim_start).collect();

    for expected in [
        "Trail Guide",
        "Ridge Loop",
        "A moderate hike with great views.",
        "What to bring",
        "1. Water",
        "2. Map",
        "Segment | Miles",
        "Climb | 2.1",
    ] {
        assert!(lines.contains(&expected), "missing {expected:?} in {text:?}");
    }
    for removed in ["analytics", "font-family", "Outdoors Weekly", "Trails", "Popular posts", "Buy boots", "2024"] {
        assert!(!text.contains(removed), "{removed:?} leaked into {text:?}");
    }

    let position = |line: &str| lines.iter().position(|l| *l == line).expect("line present");
    assert!(position("Ridge Loop") < position("What to bring"));
    assert!(position("1. Water") + 1 == position("2. Map"));
    assert!(position("Segment | Miles") + 1 == position("Climb | 2.1"));
    assert!(!text.contains("\n\n\n"));
    assert!(text.ends_with("Climb | 2.1\n"));
}

#[test]
fn head_title_runs_into_body_text() {
    let bytes = binary_archive(b"<html><head><title>T</title></head><body><p>x</p></body></html>", None);
    assert_eq!(convert(&bytes).expect("convert"), "Tx\n");
}

#[test]
fn advertisement_body_yields_empty_text() {
    let bytes = binary_archive(br#"<body class="advertisement"><p>Buy boots</p></body>"#, None);
    assert_eq!(convert(&bytes).expect("convert"), "\n");
}

#[test]
fn foreign_byte_order_mark_does_not_change_encoding() {
    let bytes = binary_archive(b"\xEF\xBB\xBF<p>Caf\xE9</p>", Some("windows-1252"));
    let conversion = convert_detailed(&bytes, &Options::default()).expect("convert");
    assert_eq!(conversion.encoding, "windows-1252");
    assert!(conversion.text.ends_with("Café\n"));
}

#[test]
fn archive_missing_both_keys_even_with_other_content() {
    let mut root = Dictionary::new();
    root.insert("SomethingElse".to_string(), main_resource(b"<p>x</p>", None));
    let err = convert(&to_xml(root)).unwrap_err();
    assert!(err.is_content_missing());
    assert_eq!(err.user_message(), "Webarchive missing main content");
}
