//! Image and heading collection
//!
//! Both collectors scan the full original document rather than the
//! noise-stripped copy: legitimate images and headings often live inside
//! wrappers the stripper removes (a `<header>` around the post's h1, say).

use scraper::{Html, Selector};

use super::ArticleExtractor;

impl ArticleExtractor {
    /// Every image reference in encounter order. Inline `data:` URIs are
    /// excluded (not externally hostable); duplicates are kept so the caller
    /// can see image reuse.
    pub(super) fn extract_images(&self, document: &Html) -> Vec<String> {
        let mut images = Vec::new();
        if let Ok(selector) = Selector::parse("img") {
            for img in document.select(&selector) {
                if let Some(src) = img.value().attr("src") {
                    if !src.is_empty() && !src.starts_with("data:") {
                        images.push(src.to_string());
                    }
                }
            }
        }
        images
    }

    /// Trimmed text of every h1-h6 in document order, empties dropped.
    pub(super) fn extract_headings(&self, document: &Html) -> Vec<String> {
        let mut headings = Vec::new();
        if let Ok(selector) = Selector::parse("h1, h2, h3, h4, h5, h6") {
            for heading in document.select(&selector) {
                let text = heading.text().collect::<String>().trim().to_string();
                if !text.is_empty() {
                    headings.push(text);
                }
            }
        }
        headings
    }
}
