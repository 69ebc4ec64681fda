//! Paragraph Assembly
//!
//! Flattens each candidate, drops the ones that are empty, too short or
//! mostly punctuation, and joins the survivors with blank lines.

use crate::classifier::UnlikelyClassifier;
use crate::dom::NodeRef;
use crate::flatten::flatten;
use crate::text::{char_len, count_letters, inner_trim};

/// Check the per-paragraph quality filters.
///
/// A paragraph is kept when it is non-empty, at least `min_paragraph_text`
/// chars long, and at least half of its chars are letters. The letter check
/// rejects link lists, pagination controls and similar fragments.
#[must_use]
pub fn is_quality_paragraph(text: &str, min_paragraph_text: usize) -> bool {
    if text.is_empty() {
        return false;
    }
    let len = char_len(text);
    len >= min_paragraph_text && len <= count_letters(text) * 2
}

/// Assemble the article body from already-guarded candidates.
///
/// Each kept paragraph is followed by a blank line before the whole buffer is
/// passed through [`inner_trim`], so the result has no trailing separator.
#[must_use]
pub fn assemble(
    candidates: &[NodeRef],
    classifier: &UnlikelyClassifier,
    min_paragraph_text: usize,
) -> String {
    let mut out = String::new();
    let mut kept = 0usize;

    for candidate in candidates {
        let text = flatten(candidate, classifier);
        if !is_quality_paragraph(&text, min_paragraph_text) {
            continue;
        }
        out.push_str(&text);
        out.push_str("\n\n");
        kept += 1;
    }

    tracing::debug!(candidates = candidates.len(), kept, "paragraphs assembled");
    inner_trim(&out)
}
