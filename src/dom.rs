//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: attribute access that treats
//! missing attributes as empty, own/full text extraction, block-tag tables
//! and the throwaway fragment parse used by the fallback resolver.

pub use dom_query::{Document, Matcher, NodeRef, Selection};

use crate::error::{Error, Result};
use crate::flatten::block_text;
use crate::text::normalize_whitespace;

/// Tags rendered as blocks. A text run entering one of these gets separated
/// from whatever came before it.
const BLOCK_TAGS: &[&str] = &[
    "address", "applet", "article", "aside", "audio", "blockquote", "body", "canvas", "caption",
    "center", "col", "colgroup", "dd", "del", "details", "dir", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4", "h5",
    "h6", "head", "header", "hgroup", "hr", "html", "iframe", "ins", "li", "link", "listing",
    "main", "marquee", "math", "menu", "meta", "nav", "noframes", "noscript", "ol", "p",
    "plaintext", "pre", "script", "section", "style", "summary", "svg", "table", "tbody", "td",
    "template", "tfoot", "th", "thead", "title", "tr", "ul", "video",
];

// === Tag Information ===

/// Get tag name (lowercase) of a node, `None` for text and document nodes
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check if a tag is rendered as a block
#[inline]
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

/// Check if a tag holds script or style data rather than text
#[inline]
#[must_use]
pub fn is_data_tag(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

/// Check if a tag is a line break
#[inline]
#[must_use]
pub fn is_line_break(tag: &str) -> bool {
    tag == "br"
}

// === Attribute Operations ===

/// Get an attribute value, matching the name case-insensitively.
///
/// HTML parsing lowercases attribute names, so `gravityScore` in the source
/// markup is stored as `gravityscore`.
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attrs()
        .iter()
        .find(|attr| {
            let local: &str = &attr.name.local;
            local.eq_ignore_ascii_case(name)
        })
        .map(|attr| attr.value.to_string())
}

/// Get an attribute value, or an empty string when it is missing
#[inline]
#[must_use]
pub fn attr_or_empty(node: &NodeRef, name: &str) -> String {
    get_attribute(node, name).unwrap_or_default()
}

/// Check if attribute exists (case-insensitive name)
#[inline]
#[must_use]
pub fn has_attribute(node: &NodeRef, name: &str) -> bool {
    get_attribute(node, name).is_some()
}

// === Text Content ===

/// Text of the node and all descendants, whitespace-normalized.
///
/// Block and `<br>` boundaries are separated by a space; script and style
/// bodies are left out.
#[must_use]
pub fn full_text(node: &NodeRef) -> String {
    normalize_whitespace(&block_text(node))
}

/// Text held directly by the node's text children, whitespace-normalized
#[must_use]
pub fn own_text(node: &NodeRef) -> String {
    let mut raw = String::new();
    for child in node.children() {
        if child.is_text() {
            raw.push_str(&child.text());
        }
    }
    normalize_whitespace(&raw)
}

// === Querying ===

/// Compile a CSS selector, failing with `InvalidSelector` on bad syntax
///
/// # Errors
///
/// Returns `Error::InvalidSelector` if `css` does not parse.
pub fn compile_selector(css: &str) -> Result<Matcher> {
    Matcher::new(css).map_err(|_| Error::InvalidSelector(css.to_string()))
}

/// Descendants of `sel` matching a compiled selector, in document order
#[inline]
#[must_use]
pub fn select_all<'a>(sel: &Selection<'a>, matcher: &Matcher) -> Selection<'a> {
    sel.select_matcher(matcher)
}

/// Element descendants of `node` carrying `attribute`, in document order.
///
/// The result is a snapshot: removing any of the returned nodes does not
/// disturb the others.
#[must_use]
pub fn descendants_with_attribute<'a>(node: &NodeRef<'a>, attribute: &str) -> Vec<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .filter(|n| n.id != node.id && n.is_element() && has_attribute(n, attribute))
        .collect()
}

// === Tree Manipulation ===

/// Detach a node and its subtree from the document
#[inline]
pub fn remove(node: &NodeRef) {
    Selection::from(*node).remove();
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse `text` as a standalone document and return its plain text.
///
/// Anything that looks like markup is consumed by the parser, so a string
/// such as `"a <b>bold</b> move"` comes back as `"a bold move"`. Parsing
/// never fails: malformed markup degrades to its text.
#[must_use]
pub fn fragment_text(text: &str) -> String {
    let doc = parse(text);
    match doc.select("html").nodes().first() {
        Some(html) => full_text(html),
        None => String::new(),
    }
}
