//! Fallback Resolution
//!
//! Finalizes the assembled text. Long results pass through untouched; short
//! or empty ones may be replaced by the top node's full text, which is then
//! re-parsed on its own so markup-looking substrings don't leak into the
//! output.

use crate::dom::{self, NodeRef};
use crate::text::char_len;

/// Decide the final text for `top` given the assembled paragraphs.
///
/// * `assembled` longer than `min_formatted_len` chars is returned as is.
/// * Otherwise, if `assembled` is empty, or the top node has text and
///   `assembled` is no longer than the top node's own text, the top node's
///   full text replaces it.
/// * The result of the previous step is re-parsed as a standalone fragment
///   and its plain text returned. It may still be short or empty.
#[must_use]
pub fn resolve(top: &NodeRef, assembled: String, min_formatted_len: usize) -> String {
    let assembled_len = char_len(&assembled);
    if assembled_len > min_formatted_len {
        return assembled;
    }

    let full = dom::full_text(top);
    let use_full_text = assembled.is_empty()
        || (!full.is_empty() && assembled_len <= char_len(&dom::own_text(top)));

    let text = if use_full_text {
        tracing::debug!(assembled_len, full_len = char_len(&full), "falling back to full text");
        full
    } else {
        assembled
    };

    dom::fragment_text(&text)
}
