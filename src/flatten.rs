//! Block-Aware Text Flattening
//!
//! Renders a subtree into one string. Text runs are copied verbatim; block
//! boundaries and `<br>` become a single space so adjacent blocks don't run
//! together; hidden or caption subtrees are skipped whole. Script and style
//! bodies never count as text.
//!
//! Traversal uses an explicit stack, so deeply nested documents cannot
//! overflow the call stack.

use crate::classifier::UnlikelyClassifier;
use crate::dom::{self, NodeRef};

/// Flatten the children of `node` into plain text.
///
/// # Example
///
/// ```rust
/// use rs_article_text::classifier::UnlikelyClassifier;
/// use rs_article_text::dom;
/// use rs_article_text::flatten::flatten;
///
/// let doc = dom::parse(r#"<div id="top"><div>A</div><div>B</div></div>"#);
/// let top = doc.select("#top");
/// let node = top.nodes().first().copied();
/// let text = node.map(|n| flatten(&n, &UnlikelyClassifier::default()));
/// assert_eq!(text.as_deref(), Some("A B"));
/// ```
#[must_use]
pub fn flatten(node: &NodeRef, classifier: &UnlikelyClassifier) -> String {
    walk(node, Some(classifier), false)
}

/// Text of all descendants of `node`, hidden ones included, with the same
/// block and line-break separators as [`flatten`].
///
/// Text following a closed block is separated from it as well, so
/// `<div>A</div>B` reads `"A B"`.
#[must_use]
pub fn block_text(node: &NodeRef) -> String {
    walk(node, None, true)
}

enum Step<'a> {
    Enter(NodeRef<'a>),
    Leave(NodeRef<'a>),
}

fn walk(node: &NodeRef, classifier: Option<&UnlikelyClassifier>, block_tails: bool) -> String {
    let mut out = String::with_capacity(200);
    let mut stack: Vec<Step> = node.children().into_iter().rev().map(Step::Enter).collect();

    while let Some(step) = stack.pop() {
        let current = match step {
            Step::Enter(current) => current,
            Step::Leave(block) => {
                let text_follows = block.next_sibling().is_some_and(|n| n.is_text());
                if text_follows && !out.is_empty() && !last_char_is_whitespace(&out) {
                    out.push(' ');
                }
                continue;
            }
        };

        if current.is_text() {
            out.push_str(&current.text());
            continue;
        }
        if !current.is_element() || classifier.is_some_and(|c| c.is_unlikely(&current)) {
            continue;
        }

        let tag = dom::node_tag(&current).unwrap_or_default();
        if dom::is_data_tag(&tag) {
            continue;
        }
        let is_block = dom::is_block_tag(&tag);
        if !out.is_empty() && is_block && !last_char_is_whitespace(&out) {
            out.push(' ');
        } else if dom::is_line_break(&tag) {
            out.push(' ');
        }

        if block_tails && is_block {
            stack.push(Step::Leave(current));
        }
        stack.extend(current.children().into_iter().rev().map(Step::Enter));
    }

    out
}

fn last_char_is_whitespace(text: &str) -> bool {
    text.chars().next_back().is_some_and(char::is_whitespace)
}
