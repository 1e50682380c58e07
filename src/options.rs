//! Configuration options for conversion.
//!
//! The `Options` struct controls which subtrees are pruned before text
//! extraction and how the decoded text is laid out.

/// Default upper bound on a single archive, in bytes (50 MiB).
pub const DEFAULT_MAX_INPUT_SIZE: usize = 50 * 1024 * 1024;

/// Configuration options for conversion.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use webarchive_text::Options;
///
/// // Also drop <aside> and anything named "promo".
/// let mut options = Options::default();
/// options.removal_tags.push("aside".to_string());
/// options.noise_tokens.push("promo".to_string());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Elements removed with their whole subtree before extraction.
    ///
    /// Default: `script`, `style`, `noscript`, `nav`, `header`, `footer`
    pub removal_tags: Vec<String>,

    /// Tokens that mark an element as navigation or advertising when they
    /// occur anywhere (case-insensitive) in its `class` or `id` value.
    ///
    /// Default: `nav`, `menu`, `sidebar`, `ad`, `advertisement`
    pub noise_tokens: Vec<String>,

    /// Encoding label used when the main resource declares none.
    ///
    /// Default: `"utf-8"`
    pub default_encoding: String,

    /// Keep the whitespace inside `<pre>` and `<code>` verbatim.
    ///
    /// When enabled, runs of spaces, leading indentation and blank lines
    /// inside preformatted content survive normalization. Trailing spaces
    /// are still stripped. When disabled, preformatted text is normalized
    /// like everything else.
    ///
    /// Default: `true`
    pub preserve_preformatted: bool,

    /// Largest archive accepted by the batch and CLI layers, in bytes.
    ///
    /// The core conversion functions never check this.
    ///
    /// Default: `52428800` (50 MiB)
    pub max_input_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            removal_tags: ["script", "style", "noscript", "nav", "header", "footer"]
                .into_iter()
                .map(String::from)
                .collect(),
            noise_tokens: ["nav", "menu", "sidebar", "ad", "advertisement"]
                .into_iter()
                .map(String::from)
                .collect(),
            default_encoding: "utf-8".to_string(),
            preserve_preformatted: true,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}
