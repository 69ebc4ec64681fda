//! Default patterns and compiled whitespace regexes.
//!
//! Whitespace regexes are compiled once using `LazyLock`. The unlikely
//! pattern is only stored here as source text: every formatter compiles its
//! own copy so reconfiguring one never leaks into another.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Default pattern for hidden elements, checked against `style` and `class`.
///
/// Tolerates whitespace around the colon (`display : none`).
pub const DEFAULT_UNLIKELY_PATTERN: &str = r"display\s*:\s*none|visibility\s*:\s*hidden";

/// Class substring marking decorative caption blocks (compared lowercase).
pub const CAPTION_CLASS: &str = "caption";

/// Default selector for nodes whose text makes up the article body.
pub const DEFAULT_NODES_TO_KEEP: &str = "p";

/// Default attribute holding the upstream gravity score.
pub const DEFAULT_SCORE_ATTRIBUTE: &str = "gravityScore";

/// Whitespace runs that contain at least two newlines.
pub static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*\n\s*").expect("PARAGRAPH_BREAK regex"));

/// Any whitespace run.
pub static ANY_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("ANY_WHITESPACE regex"));
