//! Article-shaped documents run through the whole pipeline.

use rs_article_text::{format_html, text_list_html, Options};

const NEWS_ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head><title>City council approves new bike lanes</title></head>
<body>
  <nav><a href="/">Home</a> | <a href="/local">Local</a></nav>
  <div id="story" gravityScore="120">
    <h1>City council approves new bike lanes</h1>
    <div class="byline">By Staff Reporter</div>
    <div class="wp-caption"><img src="lanes.jpg">
      <p class="wp-caption-text">A cyclist rides along the waterfront during the morning commute.</p>
    </div>
    <p>The city council voted on Tuesday to approve a network of protected bike lanes
       connecting the downtown core with the eastern neighbourhoods.</p>
    <p>Supporters said the lanes would cut commute times and reduce traffic on the
       main avenues, while opponents raised concerns about parking.</p>
    <div class="share" gravityScore="-20"><p>Share this story on every social network you can think of today.</p></div>
    <p>1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 | 16 | 17 | 18 | 19 | 20</p>
    <p style="display: none">Subscriber-only teaser text that should never be visible to readers.</p>
    <p>Construction is expected to begin next spring and finish within two years,
       according to the transportation department.</p>
  </div>
</body>
</html>"#;

#[test]
fn test_news_article_body() {
    let result = format_html(NEWS_ARTICLE, "#story", &Options::default());
    match result {
        Ok(text) => {
            let paragraphs: Vec<&str> = text.split("\n\n").collect();
            assert_eq!(paragraphs.len(), 3, "unexpected paragraphs: {paragraphs:?}");
            assert!(paragraphs[0].starts_with("The city council voted on Tuesday"));
            assert!(paragraphs[1].starts_with("Supporters said"));
            assert!(paragraphs[2].starts_with("Construction is expected"));

            assert!(!text.contains("cyclist"));
            assert!(!text.contains("Share this story"));
            assert!(!text.contains("Subscriber-only"));
            assert!(!text.contains("| 2 |"));
            assert!(!text.contains("Home"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_news_article_paragraphs_are_whitespace_normalized() {
    let result = format_html(NEWS_ARTICLE, "#story", &Options::default());
    match result {
        Ok(text) => {
            assert!(!text.contains("  "));
            assert!(text.contains("bike lanes connecting the downtown core"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_news_article_text_list_is_unfiltered() {
    let result = text_list_html(NEWS_ARTICLE, "#story", &Options::default());
    match result {
        Ok(texts) => {
            assert_eq!(texts.len(), 7);
            assert!(texts[0].starts_with("A cyclist rides"));
            assert!(texts.iter().any(|t| t.starts_with("Share this story")));
            assert!(texts.iter().any(|t| t.starts_with("Subscriber-only")));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_custom_selector_with_blockquotes() {
    let html = r#"<article id="post">
        <p>An opening paragraph that easily clears the fifty character minimum.</p>
        <blockquote>A quoted passage that is long enough to be kept as its own paragraph.</blockquote>
    </article>"#;
    let options = Options {
        nodes_to_keep_selector: "p, blockquote".to_string(),
        ..Options::default()
    };

    let result = format_html(html, "#post", &options);
    match result {
        Ok(text) => {
            assert!(text.starts_with("An opening paragraph"));
            assert!(text.ends_with("its own paragraph."));
            assert!(text.contains("\n\n"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_emphasis_free_selector() {
    let html = r#"<article id="post">
        <p>An opening paragraph that easily clears the fifty character minimum.</p>
        <p>An <em>emphasised</em> paragraph that would also clear the fifty character minimum.</p>
        <p>A closing paragraph that again easily clears the fifty character minimum.</p>
    </article>"#;
    let options = Options {
        nodes_to_keep_selector: "p:not(:has(em))".to_string(),
        ..Options::default()
    };

    let result = format_html(html, "#post", &options);
    match result {
        Ok(text) => {
            assert!(!text.contains("emphasised"));
            assert!(text.contains("opening"));
            assert!(text.contains("closing"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
