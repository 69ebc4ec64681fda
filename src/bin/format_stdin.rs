//! Simple CLI that reads HTML from stdin and prints the formatted text as JSON.
//!
//! Usage: `format_stdin [TOP_SELECTOR]` (default `body`). Set `RUST_LOG=debug`
//! to see pipeline diagnostics on stderr.

use rs_article_text::{format_html, text_list_html, Options};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    text: String,
    paragraphs: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let top_selector = std::env::args().nth(1).unwrap_or_else(|| "body".to_string());

    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let options = Options::default();

    // The formatter prunes the tree it works on, so the listing gets its own parse.
    let paragraphs = match text_list_html(&html, &top_selector, &options) {
        Ok(paragraphs) => paragraphs,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    let text = match format_html(&html, &top_selector, &options) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let output = Output { text, paragraphs };
    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
