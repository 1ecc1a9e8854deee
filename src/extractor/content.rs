//! Content location and markup cleanup

use regex_lite::{Captures, Regex};
use scraper::Html;
use std::sync::OnceLock;

use super::ArticleExtractor;

static RE_COMMENT: OnceLock<Regex> = OnceLock::new();
static RE_EMPTY_TAG: OnceLock<Regex> = OnceLock::new();
static RE_WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();
static RE_TAG_GAP: OnceLock<Regex> = OnceLock::new();

fn re_comment() -> &'static Regex {
    RE_COMMENT.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("static pattern"))
}

fn re_empty_tag() -> &'static Regex {
    RE_EMPTY_TAG.get_or_init(|| {
        Regex::new(r"<([a-zA-Z][a-zA-Z0-9]*)(?:[^>]*)>\s*</([a-zA-Z][a-zA-Z0-9]*)\s*>")
            .expect("static pattern")
    })
}

fn re_whitespace_run() -> &'static Regex {
    RE_WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

fn re_tag_gap() -> &'static Regex {
    RE_TAG_GAP.get_or_init(|| Regex::new(r">\s+<").expect("static pattern"))
}

impl ArticleExtractor {
    /// Locate the article body in the noise-stripped tree.
    ///
    /// The first candidate container present wins; the last candidate is
    /// `body`, which the lenient parser always synthesizes, so this only
    /// returns an empty string for pathological input.
    pub(super) fn extract_content(&self, document: &Html) -> String {
        for selector in &self.content_selectors {
            if let Some(element) = document.select(selector).next() {
                return clean_markup(&element.inner_html());
            }
        }
        String::new()
    }
}

/// Textual cleanup of a markup fragment: drop HTML comments, collapse empty
/// paired tags, collapse whitespace runs, and drop whitespace between
/// adjacent tags. Purely textual; meaningful text is left untouched.
fn clean_markup(html: &str) -> String {
    let html = re_comment().replace_all(html, "");
    // No backreferences in regex-lite: capture both tag names and compare.
    let html = re_empty_tag().replace_all(&html, |caps: &Captures| {
        if caps[1].eq_ignore_ascii_case(&caps[2]) {
            String::new()
        } else {
            caps[0].to_string()
        }
    });
    let html = re_whitespace_run().replace_all(&html, " ");
    let html = re_tag_gap().replace_all(&html, "><");
    html.trim().to_string()
}
