//! Output Formatter
//!
//! Entry point tying the stages together: density filter, candidate
//! collection, paragraph assembly and fallback resolution.

use std::fmt;

use crate::assemble::assemble;
use crate::candidates::collect_candidates;
use crate::classifier::UnlikelyClassifier;
use crate::density::prune_low_density;
use crate::dom::{self, Matcher, Selection};
use crate::error::Result;
use crate::fallback::resolve;
use crate::options::{Options, MIN_FORMATTED_LEN, MIN_PARAGRAPH_TEXT};
use crate::patterns::{DEFAULT_NODES_TO_KEEP, DEFAULT_SCORE_ATTRIBUTE};

/// Turns a scored top node into clean article text.
///
/// A formatter owns its configuration; reconfiguring one never affects
/// another. Formatting mutates the document (low-density nodes are removed),
/// so a top node should be formatted once.
///
/// # Example
///
/// ```rust
/// use rs_article_text::{dom, OutputFormatter};
///
/// let body = "Rust formatting keeps whole paragraphs and drops the short noise around them.";
/// let html = format!(r#"<div id="top"><p>{body}</p><p>Share this</p></div>"#);
/// let doc = dom::parse(&html);
///
/// let formatter = OutputFormatter::new();
/// let text = formatter.get_formatted_text(&doc.select("#top"))?;
/// assert_eq!(text, body);
/// # Ok::<(), rs_article_text::Error>(())
/// ```
#[derive(Clone)]
pub struct OutputFormatter {
    min_paragraph_text: usize,
    min_formatted_len: usize,
    score_attribute: String,
    nodes_to_keep_selector: String,
    nodes_to_keep: Matcher,
    classifier: UnlikelyClassifier,
}

impl OutputFormatter {
    /// Formatter with default settings (minimum paragraph length 50,
    /// selector `"p"`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_min_paragraph_text(MIN_PARAGRAPH_TEXT)
    }

    /// Formatter with a custom minimum paragraph length.
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn with_min_paragraph_text(min_paragraph_text: usize) -> Self {
        Self {
            min_paragraph_text,
            min_formatted_len: MIN_FORMATTED_LEN,
            score_attribute: DEFAULT_SCORE_ATTRIBUTE.to_string(),
            nodes_to_keep_selector: DEFAULT_NODES_TO_KEEP.to_string(),
            nodes_to_keep: dom::compile_selector(DEFAULT_NODES_TO_KEEP)
                .expect("default selector compiles"),
            classifier: UnlikelyClassifier::default(),
        }
    }

    /// Formatter built from `Options`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSelector` or `Error::InvalidPattern` if the
    /// selector or the unlikely pattern does not compile.
    pub fn with_options(options: &Options) -> Result<Self> {
        Ok(Self {
            min_paragraph_text: options.min_paragraph_text,
            min_formatted_len: options.min_formatted_len,
            score_attribute: options.score_attribute.clone(),
            nodes_to_keep_selector: options.nodes_to_keep_selector.clone(),
            nodes_to_keep: dom::compile_selector(&options.nodes_to_keep_selector)?,
            classifier: UnlikelyClassifier::new(&options.unlikely_pattern)?,
        })
    }

    /// Minimum paragraph length in chars.
    #[must_use]
    pub fn min_paragraph_text(&self) -> usize {
        self.min_paragraph_text
    }

    /// Current nodes-to-keep selector.
    #[must_use]
    pub fn nodes_to_keep_selector(&self) -> &str {
        &self.nodes_to_keep_selector
    }

    /// Current unlikely pattern source.
    #[must_use]
    pub fn unlikely_pattern(&self) -> &str {
        self.classifier.pattern()
    }

    /// Classifier used for hidden/caption checks.
    #[must_use]
    pub fn classifier(&self) -> &UnlikelyClassifier {
        &self.classifier
    }

    /// Replace the selector for nodes whose text is kept, e.g.
    /// `"p:not(:has(em))"`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSelector` if `selector` does not compile; the
    /// previous selector stays in place.
    pub fn set_nodes_to_keep_selector(&mut self, selector: &str) -> Result<&mut Self> {
        self.nodes_to_keep = dom::compile_selector(selector)?;
        self.nodes_to_keep_selector = selector.to_string();
        Ok(self)
    }

    /// Replace the unlikely pattern.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` if `pattern` does not compile.
    pub fn set_unlikely_pattern(&mut self, pattern: &str) -> Result<&mut Self> {
        self.classifier.set_pattern(pattern)?;
        Ok(self)
    }

    /// OR a sub-pattern onto the unlikely pattern.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` if the combined pattern does not compile.
    pub fn append_unlikely_pattern(&mut self, pattern: &str) -> Result<&mut Self> {
        self.classifier.append_pattern(pattern)?;
        Ok(self)
    }

    /// Format the text under `top`, paragraphs separated by blank lines.
    ///
    /// Scored descendants that are negative or too short are removed from the
    /// document first. An empty selection yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedScore` if a score attribute is not an integer.
    pub fn get_formatted_text(&self, top: &Selection) -> Result<String> {
        let Some(top_node) = top.nodes().first() else {
            return Ok(String::new());
        };

        prune_low_density(top_node, &self.score_attribute, self.min_paragraph_text)?;

        let candidates = collect_candidates(top_node, &self.nodes_to_keep, &self.classifier);
        let assembled = assemble(&candidates, &self.classifier, self.min_paragraph_text);

        Ok(resolve(top_node, assembled, self.min_formatted_len))
    }

    /// Text of every node matching the selector under `top`, without any
    /// filtering besides skipping empty ones.
    ///
    /// Like [`get_formatted_text`](Self::get_formatted_text), only the first
    /// node of `top` is used.
    #[must_use]
    pub fn get_text_list(&self, top: &Selection) -> Vec<String> {
        let Some(top_node) = top.nodes().first() else {
            return Vec::new();
        };

        let matches = dom::select_all(&Selection::from(*top_node), &self.nodes_to_keep);
        matches
            .nodes()
            .iter()
            .map(dom::full_text)
            .filter(|text| !text.is_empty())
            .collect()
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OutputFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputFormatter")
            .field("min_paragraph_text", &self.min_paragraph_text)
            .field("min_formatted_len", &self.min_formatted_len)
            .field("score_attribute", &self.score_attribute)
            .field("nodes_to_keep_selector", &self.nodes_to_keep_selector)
            .field("unlikely_pattern", &self.classifier.pattern())
            .finish()
    }
}
