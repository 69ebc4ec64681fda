//! Visibility / Unlikelihood Classification
//!
//! Decides whether a single element is hidden or decorative and therefore
//! contributes nothing to the article text. The check looks at the `class`
//! and `style` attributes only; it never inspects children.

use regex::Regex;

use crate::dom::{self, NodeRef};
use crate::error::Result;
use crate::patterns::{CAPTION_CLASS, DEFAULT_UNLIKELY_PATTERN};

/// Classifier for hidden (`display:none`, `visibility:hidden`) and
/// caption-like nodes.
///
/// The pattern is owned per instance, so two formatters configured
/// differently never affect each other.
#[derive(Debug, Clone)]
pub struct UnlikelyClassifier {
    pattern: Regex,
}

impl UnlikelyClassifier {
    /// Build a classifier from a regular expression source.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` if `pattern` does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self { pattern: Regex::new(pattern)? })
    }

    /// Source text of the current pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Replace the pattern wholesale.
    ///
    /// On error the previous pattern stays in place.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` if `pattern` does not compile.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<()> {
        self.pattern = Regex::new(pattern)?;
        Ok(())
    }

    /// OR another sub-pattern onto the current one.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` if the combined pattern does not compile.
    pub fn append_pattern(&mut self, pattern: &str) -> Result<()> {
        let combined = format!("{}|{pattern}", self.pattern.as_str());
        self.set_pattern(&combined)
    }

    /// Check whether a node is hidden or decorative.
    ///
    /// Text nodes and nodes without `class`/`style` are never unlikely.
    #[must_use]
    pub fn is_unlikely(&self, node: &NodeRef) -> bool {
        if !node.is_element() {
            return false;
        }

        let class = dom::attr_or_empty(node, "class");
        if class.to_lowercase().contains(CAPTION_CLASS) {
            return true;
        }

        let style = dom::attr_or_empty(node, "style");
        self.pattern.is_match(&style) || self.pattern.is_match(&class)
    }
}

impl Default for UnlikelyClassifier {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self::new(DEFAULT_UNLIKELY_PATTERN).expect("default unlikely pattern compiles")
    }
}
