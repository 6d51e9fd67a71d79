//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! Uses comrak with the GFM extensions (tables, strikethrough, autolinks,
//! task lists) plus footnotes. Output is not sanitized; whether raw HTML in
//! the source reaches the page is decided by `allow_raw_html`.

use comrak::{markdown_to_html, Options};

#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    allow_raw_html: bool,
}

impl MarkdownRenderer {
    pub fn new(allow_raw_html: bool) -> Self {
        Self { allow_raw_html }
    }

    pub fn render(&self, markdown: &str) -> String {
        let mut options = Options::default();
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.render.unsafe_ = self.allow_raw_html;

        markdown_to_html(markdown, &options)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
