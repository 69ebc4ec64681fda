//! Density Filter
//!
//! Removes scored sub-nodes that the upstream scorer marked as junk
//! (negative score) or that are too short to be worth keeping.

use crate::dom::{self, NodeRef};
use crate::error::{Error, Result};
use crate::text::char_len;

/// Parse a score attribute value.
///
/// # Errors
///
/// Returns `Error::MalformedScore` if the value is not an integer.
pub fn parse_score(value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|source| Error::MalformedScore {
        value: value.to_string(),
        source,
    })
}

/// Delete every descendant of `top` carrying `score_attribute` whose score is
/// negative or whose full text is shorter than `min_paragraph_text` chars.
///
/// Matching elements are collected before the first deletion; nodes already
/// visited are not re-evaluated after later deletions. Elements without the
/// attribute are left alone. Returns the number of removed elements.
///
/// # Errors
///
/// Returns `Error::MalformedScore` on the first non-integer score. Deletions
/// made before that point are not undone.
pub fn prune_low_density(
    top: &NodeRef,
    score_attribute: &str,
    min_paragraph_text: usize,
) -> Result<usize> {
    let scored = dom::descendants_with_attribute(top, score_attribute);
    let mut removed = 0;

    for node in &scored {
        let raw = dom::attr_or_empty(node, score_attribute);
        let score = parse_score(&raw)?;
        let text_len = char_len(&dom::full_text(node));

        if score < 0 || text_len < min_paragraph_text {
            tracing::trace!(score, text_len, "pruning low density node");
            dom::remove(node);
            removed += 1;
        }
    }

    tracing::debug!(scored = scored.len(), removed, "density filter done");
    Ok(removed)
}
