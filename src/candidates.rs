//! Candidate Collection and Ancestor Guard
//!
//! Collects selector matches under the top node and drops every match that
//! sits inside a hidden or caption container, or is one itself.

use crate::classifier::UnlikelyClassifier;
use crate::dom::{self, Matcher, NodeRef, Selection};

/// Check whether `node` or any ancestor below `top` is unlikely.
///
/// The walk starts at `node` itself and stops before `top`, or at the
/// document root if `top` is never reached.
#[must_use]
pub fn has_unlikely_ancestor(node: &NodeRef, top: &NodeRef, classifier: &UnlikelyClassifier) -> bool {
    let mut current = Some(*node);
    while let Some(anc) = current {
        if anc.id == top.id {
            return false;
        }
        if classifier.is_unlikely(&anc) {
            return true;
        }
        current = anc.parent();
    }
    false
}

/// Select candidates under `top` and keep those passing the ancestor guard.
///
/// Candidates are returned in document order.
#[must_use]
pub fn collect_candidates<'a>(
    top: &NodeRef<'a>,
    matcher: &Matcher,
    classifier: &UnlikelyClassifier,
) -> Vec<NodeRef<'a>> {
    let matches = dom::select_all(&Selection::from(*top), matcher);
    let mut kept = Vec::with_capacity(matches.length());

    for node in matches.nodes() {
        if has_unlikely_ancestor(node, top, classifier) {
            tracing::trace!("candidate vetoed by unlikely ancestor");
            continue;
        }
        kept.push(*node);
    }

    tracing::debug!(matched = matches.length(), kept = kept.len(), "candidates collected");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{compile_selector, full_text, parse, Document};

    fn top(doc: &Document) -> NodeRef<'_> {
        match doc.select("#top").nodes().first() {
            Some(node) => *node,
            None => panic!("missing #top"),
        }
    }

    fn texts(nodes: &[NodeRef]) -> Vec<String> {
        nodes.iter().map(full_text).collect()
    }

    #[test]
    fn test_collects_in_document_order() {
        let doc = parse(r#"<div id="top"><p>one</p><div><p>two</p></div><p>three</p></div>"#);
        let matcher = compile_selector("p").expect("valid selector");

        let found = collect_candidates(&top(&doc), &matcher, &UnlikelyClassifier::default());

        assert_eq!(texts(&found), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_hidden_ancestor_vetoes_candidate() {
        let doc = parse(
            r#"<div id="top"><div style="display:none"><section><p>hidden</p></section></div><p>shown</p></div>"#,
        );
        let matcher = compile_selector("p").expect("valid selector");

        let found = collect_candidates(&top(&doc), &matcher, &UnlikelyClassifier::default());

        assert_eq!(texts(&found), vec!["shown"]);
    }

    #[test]
    fn test_candidate_itself_is_checked() {
        let doc = parse(r#"<div id="top"><p class="caption">cap</p><p>body</p></div>"#);
        let matcher = compile_selector("p").expect("valid selector");

        let found = collect_candidates(&top(&doc), &matcher, &UnlikelyClassifier::default());

        assert_eq!(texts(&found), vec!["body"]);
    }

    #[test]
    fn test_walk_stops_at_top_node() {
        let doc = parse(r#"<div class="caption"><div id="top"><p>inside</p></div></div>"#);
        let matcher = compile_selector("p").expect("valid selector");

        let found = collect_candidates(&top(&doc), &matcher, &UnlikelyClassifier::default());

        assert_eq!(texts(&found), vec!["inside"]);
    }

    #[test]
    fn test_custom_selector() {
        let doc = parse(r#"<div id="top"><p>plain</p><p><em>styled</em></p></div>"#);
        let matcher = compile_selector("p:not(:has(em))").expect("valid selector");

        let found = collect_candidates(&top(&doc), &matcher, &UnlikelyClassifier::default());

        assert_eq!(texts(&found), vec!["plain"]);
    }

    #[test]
    fn test_has_unlikely_ancestor_without_top_in_chain() {
        let doc = parse(r#"<div id="top"></div><div style="display:none"><p id="x">x</p></div>"#);
        let p = match doc.select("#x").nodes().first() {
            Some(node) => *node,
            None => panic!("missing #x"),
        };

        assert!(has_unlikely_ancestor(&p, &top(&doc), &UnlikelyClassifier::default()));
    }
}
