//! # rs-article-text
//!
//! Output formatting stage of an article extraction pipeline.
//!
//! Given the top node an upstream scorer picked as the main content region,
//! this library strips hidden, decorative and low-density fragments and
//! produces clean plain text with one blank line between paragraphs.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_article_text::{dom, OutputFormatter};
//!
//! let html = r#"<div id="main">
//!     <p>The first paragraph is long enough to survive the paragraph length filter.</p>
//!     <p style="display:none">Hidden text never makes it into the output at all, however long.</p>
//!     <p>The second paragraph is also long enough to be kept in the formatted text.</p>
//! </div>"#;
//!
//! let doc = dom::parse(html);
//! let text = OutputFormatter::new().get_formatted_text(&doc.select("#main"))?;
//! assert!(text.contains("first paragraph"));
//! assert!(!text.contains("Hidden"));
//! assert!(text.contains("\n\n"));
//! # Ok::<(), rs_article_text::Error>(())
//! ```
//!
//! ## Stages
//!
//! 1. **Density filter**: scored nodes with a negative score or too little
//!    text are removed.
//! 2. **Candidate collection**: selector matches inside a hidden or caption
//!    ancestor are dropped.
//! 3. **Assembly**: each candidate is flattened block-aware, filtered by
//!    length and letter density, and joined with blank lines.
//! 4. **Fallback**: short results fall back to the top node's full text.

mod error;
mod options;
mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Whitespace trimming and letter counting.
pub mod text;

/// Hidden/caption node classification.
pub mod classifier;

/// Removal of negative or low-density scored nodes.
pub mod density;

/// Block-aware subtree flattening.
pub mod flatten;

/// Candidate selection with the ancestor guard.
pub mod candidates;

/// Paragraph filtering and joining.
pub mod assemble;

/// Final fallback to the top node's full text.
pub mod fallback;

/// The `OutputFormatter` entry point.
pub mod formatter;

// Public API - re-exports
pub use error::{Error, Result};
pub use formatter::OutputFormatter;
pub use options::{Options, MIN_FORMATTED_LEN, MIN_PARAGRAPH_TEXT};
pub use patterns::DEFAULT_UNLIKELY_PATTERN;

/// Parses an HTML document, picks the first match of `top_selector` as the
/// top node and formats it.
///
/// Returns an empty string when `top_selector` matches nothing.
///
/// # Errors
///
/// Returns an error if the options carry an invalid selector or pattern, if
/// `top_selector` does not compile, or if a score attribute is malformed.
///
/// # Example
///
/// ```rust
/// use rs_article_text::{format_html, Options};
///
/// let html = "<html><body><div id=\"story\">A short story without paragraphs.</div></body></html>";
/// let text = format_html(html, "#story", &Options::default())?;
/// assert_eq!(text, "A short story without paragraphs.");
/// # Ok::<(), rs_article_text::Error>(())
/// ```
pub fn format_html(html: &str, top_selector: &str, options: &Options) -> Result<String> {
    let formatter = OutputFormatter::with_options(options)?;
    let top_matcher = dom::compile_selector(top_selector)?;

    let doc = dom::parse(html);
    let top = doc.select_matcher(&top_matcher).first();
    formatter.get_formatted_text(&top)
}

/// Parses an HTML document and lists the text of every selector match under
/// the first match of `top_selector`, unfiltered.
///
/// # Errors
///
/// Returns an error if the options carry an invalid selector or pattern, or
/// if `top_selector` does not compile.
pub fn text_list_html(html: &str, top_selector: &str, options: &Options) -> Result<Vec<String>> {
    let formatter = OutputFormatter::with_options(options)?;
    let top_matcher = dom::compile_selector(top_selector)?;

    let doc = dom::parse(html);
    let top = doc.select_matcher(&top_matcher).first();
    Ok(formatter.get_text_list(&top))
}
