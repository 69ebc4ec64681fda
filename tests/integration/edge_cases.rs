//! Edge case tests: malformed markup, empty inputs and configuration errors.

use rs_article_text::{format_html, text_list_html, Error, Options};

#[test]
fn test_missing_top_node_formats_to_empty() {
    let result = format_html("<p>text</p>", "#absent", &Options::default());
    match result {
        Ok(text) => assert!(text.is_empty()),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_empty_document() {
    let result = format_html("", "body", &Options::default());
    match result {
        Ok(text) => assert!(text.is_empty()),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_unclosed_tags_do_not_panic() {
    let result = format_html("<div id=\"top\">text<div>more", "#top", &Options::default());
    match result {
        Ok(text) => {
            assert!(text.contains("text"));
            assert!(text.contains("more"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_escaped_markup_in_fallback_is_stripped() {
    let html = r#"<div id="top">Careful &lt;script&gt;with&lt;/script&gt; escaped text</div>"#;
    let result = format_html(html, "#top", &Options::default());
    match result {
        Ok(text) => {
            assert!(!text.contains('<'));
            assert!(text.starts_with("Careful"));
            assert!(text.ends_with("escaped text"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_invalid_top_selector() {
    let result = format_html("<p>x</p>", "div[[", &Options::default());
    assert!(matches!(result, Err(Error::InvalidSelector(_))));
}

#[test]
fn test_invalid_keep_selector() {
    let options = Options {
        nodes_to_keep_selector: ":::".to_string(),
        ..Options::default()
    };
    let result = text_list_html("<p>x</p>", "body", &options);
    assert!(matches!(result, Err(Error::InvalidSelector(_))));
}

#[test]
fn test_invalid_unlikely_pattern() {
    let options = Options {
        unlikely_pattern: "display:(none".to_string(),
        ..Options::default()
    };
    let result = format_html("<p>x</p>", "body", &options);
    assert!(matches!(result, Err(Error::InvalidPattern(_))));
}

#[test]
fn test_non_ascii_lengths_counted_in_chars() {
    let para = "Überraschend schöne Grüße aus München, geschrieben ganz ohne Eile.";
    let options = Options {
        min_paragraph_text: para.chars().count(),
        ..Options::default()
    };
    let html = format!("<body><p>{para}</p></body>");
    let result = format_html(&html, "body", &options);
    match result {
        Ok(text) => assert_eq!(text, para),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
