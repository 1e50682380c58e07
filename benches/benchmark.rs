//! Performance benchmarks for webarchive-text.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - HTML layout and normalization on a small article
//! - Full archive conversion (binary and XML property lists)
//! - Synthetic documents of growing size for throughput
//! - Batch conversion across threads

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plist::{Dictionary, Value};
use webarchive_text::batch::{convert_batch, BatchItem};
use webarchive_text::{convert, html_to_text, normalize, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <script>window.dataLayer = [];</script>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that should survive conversion.</p>
        <ol>
            <li>First step</li>
            <li>Second step<ul><li>detail</li></ul></li>
        </ol>
        <table>
            <tr><th>Key</th><th>Value</th></tr>
            <tr><td>alpha</td><td>1</td></tr>
        </table>
        <pre>fn main() {
    println!("hello");
}</pre>
    </article>
    <div class="sidebar">
        <h3>Related Articles</h3>
    </div>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn archive(html: &[u8], binary: bool) -> Vec<u8> {
    let mut main = Dictionary::new();
    main.insert("WebResourceData".to_string(), Value::Data(html.to_vec()));
    main.insert("WebResourceTextEncodingName".to_string(), Value::String("UTF-8".to_string()));
    let mut root = Dictionary::new();
    root.insert("WebMainResource".to_string(), Value::Dictionary(main));

    let mut out = Vec::new();
    let written = if binary {
        Value::Dictionary(root).to_writer_binary(&mut out)
    } else {
        Value::Dictionary(root).to_writer_xml(&mut out)
    };
    assert!(written.is_ok(), "failed to build benchmark archive");
    out
}

fn synthetic_html(paragraphs: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p>Paragraph {i} with <b>inline</b> markup and  extra   spacing.</p><ul><li>item {i}</li></ul>"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_html_to_text(c: &mut Criterion) {
    c.bench_function("html_to_text", |b| {
        b.iter(|| html_to_text(black_box(SAMPLE_HTML)));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let raw = "  Hello \u{00A0} world \t\n\n\n\n\u{200B}Next   line  \n".repeat(200);
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&raw)));
    });
}

fn bench_convert(c: &mut Criterion) {
    let binary = archive(SAMPLE_HTML.as_bytes(), true);
    let xml = archive(SAMPLE_HTML.as_bytes(), false);

    let mut group = c.benchmark_group("convert");
    group.bench_function("binary_plist", |b| b.iter(|| convert(black_box(&binary))));
    group.bench_function("xml_plist", |b| b.iter(|| convert(black_box(&xml))));
    group.finish();
}

/// Throughput on documents of growing size
fn bench_document_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_size");

    for paragraphs in [10, 100, 1_000] {
        let bytes = archive(synthetic_html(paragraphs).as_bytes(), true);
        let size_kb = bytes.len() / 1024;
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("convert", format!("{paragraphs} paragraphs ({size_kb}KB)")),
            &bytes,
            |b, bytes| {
                b.iter(|| convert(black_box(bytes)));
            },
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let items: Vec<BatchItem> = (0..32)
        .map(|i| BatchItem::new(format!("page{i}.webarchive"), archive(SAMPLE_HTML.as_bytes(), true)))
        .collect();
    let options = Options::default();

    c.bench_function("convert_batch_32", |b| {
        b.iter(|| convert_batch(black_box(&items), black_box(&options)));
    });
}

criterion_group!(
    benches,
    bench_html_to_text,
    bench_normalize,
    bench_convert,
    bench_document_size,
    bench_batch
);
criterion_main!(benches);
