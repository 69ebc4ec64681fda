//! Configuration options for output formatting.
//!
//! The `Options` struct holds the thresholds and selectors an
//! `OutputFormatter` is built from.

use crate::patterns::{DEFAULT_NODES_TO_KEEP, DEFAULT_SCORE_ATTRIBUTE, DEFAULT_UNLIKELY_PATTERN};

/// Default minimum paragraph length in chars.
pub const MIN_PARAGRAPH_TEXT: usize = 50;

/// Default length above which assembled text skips the fallback.
pub const MIN_FORMATTED_LEN: usize = 100;

/// Configuration options for output formatting.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_article_text::Options;
///
/// let options = Options {
///     min_paragraph_text: 30,
///     nodes_to_keep_selector: "p, blockquote".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.min_formatted_len, 100);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum length (chars) of a paragraph, and of the full text of a
    /// scored node, for it to be kept.
    ///
    /// Default: `50`
    pub min_paragraph_text: usize,

    /// CSS selector for nodes whose text makes up the article body.
    ///
    /// For instance `"p:not(:has(em))"` keeps paragraphs without emphasis.
    ///
    /// Default: `"p"`
    pub nodes_to_keep_selector: String,

    /// Attribute holding the upstream gravity score (case-insensitive).
    ///
    /// Default: `"gravityScore"`
    pub score_attribute: String,

    /// Assembled text longer than this (chars) is returned without fallback.
    ///
    /// Default: `100`
    pub min_formatted_len: usize,

    /// Regular expression for hidden nodes, matched against `style` and
    /// `class`.
    ///
    /// Default: `display\s*:\s*none|visibility\s*:\s*hidden`
    pub unlikely_pattern: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_paragraph_text: MIN_PARAGRAPH_TEXT,
            nodes_to_keep_selector: DEFAULT_NODES_TO_KEEP.to_string(),
            score_attribute: DEFAULT_SCORE_ATTRIBUTE.to_string(),
            min_formatted_len: MIN_FORMATTED_LEN,
            unlikely_pattern: DEFAULT_UNLIKELY_PATTERN.to_string(),
        }
    }
}
