//! Text Utilities
//!
//! Whitespace trimming and letter counting used by the density filter, the
//! paragraph assembler and the fallback resolver. Lengths are measured in
//! chars, never bytes, so non-ASCII text is not penalised.

use crate::patterns::{ANY_WHITESPACE, PARAGRAPH_BREAK};

/// Length of `text` in chars.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Count alphabetic characters.
///
/// # Example
///
/// ```rust
/// use rs_article_text::text::count_letters;
///
/// assert_eq!(count_letters("ab 12, cd!"), 4);
/// ```
#[must_use]
pub fn count_letters(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

/// Collapse every whitespace run to a single space and trim both ends.
///
/// This is the normalization applied to "full text" and "own text".
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    ANY_WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Collapse redundant whitespace while keeping line structure.
///
/// A whitespace run holding two or more newlines becomes a blank line
/// (`\n\n`); every other run becomes one space, so soft wraps inside a
/// paragraph disappear. Leading and trailing whitespace is removed.
///
/// # Example
///
/// ```rust
/// use rs_article_text::text::inner_trim;
///
/// assert_eq!(inner_trim("  one \t two\n\n\n three \n"), "one two\n\nthree");
/// ```
#[must_use]
pub fn inner_trim(text: &str) -> String {
    PARAGRAPH_BREAK
        .split(text)
        .map(normalize_whitespace)
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
