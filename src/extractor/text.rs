//! Plain-text conversion, excerpt generation, and word statistics

use regex_lite::Regex;
use std::sync::OnceLock;

use super::ArticleExtractor;

static RE_TAG: OnceLock<Regex> = OnceLock::new();
static RE_WHITESPACE: OnceLock<Regex> = OnceLock::new();
static RE_WORD: OnceLock<Regex> = OnceLock::new();

fn re_tag() -> &'static Regex {
    RE_TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("static pattern"))
}

fn re_whitespace() -> &'static Regex {
    RE_WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

fn re_word() -> &'static Regex {
    RE_WORD.get_or_init(|| Regex::new(r"\b\w+\b").expect("static pattern"))
}

/// Collapse whitespace runs (including newlines) to single spaces and trim.
pub(super) fn collapse_whitespace(text: &str) -> String {
    re_whitespace().replace_all(text, " ").trim().to_string()
}

/// Strip markup and collapse whitespace, yielding trimmed plain text.
pub(super) fn plain_text(html: &str) -> String {
    let stripped = re_tag().replace_all(html, " ");
    re_whitespace().replace_all(&stripped, " ").trim().to_string()
}

/// Count word-like tokens (alphanumeric runs) in a markup fragment.
/// Punctuation-only fragments contribute nothing.
pub(super) fn count_words(html: &str) -> usize {
    let stripped = re_tag().replace_all(html, " ");
    re_word().find_iter(&stripped).count()
}

impl ArticleExtractor {
    /// Derive a bounded plain-text excerpt from the located content.
    ///
    /// Prefers ending on a complete sentence: if the last `.`/`?`/`!` inside
    /// the budget sits past `sentence_break_fraction` of it, the excerpt cuts
    /// there (punctuation included, no ellipsis). Otherwise it cuts at the
    /// last whitespace boundary before the budget and appends `"..."`, so a
    /// word is never cut mid-way when a space is available.
    pub(super) fn generate_excerpt(&self, content: &str) -> String {
        let max = self.config.excerpt_max_chars;
        let text = plain_text(content);

        if text.chars().count() <= max {
            return text;
        }

        let prefix_end = text
            .char_indices()
            .nth(max)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let prefix = &text[..prefix_end];

        if let Some(pos) = prefix.rfind(['.', '?', '!']) {
            let punct_index = prefix[..pos].chars().count();
            if punct_index as f32 > max as f32 * self.config.sentence_break_fraction {
                return text[..=pos].to_string();
            }
        }

        match prefix.rfind(' ') {
            Some(pos) => format!("{}...", &text[..pos]),
            // A single unbroken token longer than the budget; hard cut.
            None => format!("{}...", prefix),
        }
    }
}
