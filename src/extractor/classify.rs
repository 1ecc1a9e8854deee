//! Keyword scoring over fixed taxonomies

use regex_lite::Regex;

/// How keyword occurrences are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchMode {
    /// Keyword must be delimited by word boundaries on both sides
    WholeWord,
    /// Keyword matches as a leading substring at a word boundary, so
    /// "invest" also counts "investing" and "investment"
    Prefix,
}

struct ScoredEntry {
    slug: &'static str,
    patterns: Vec<Regex>,
}

/// Counts keyword-phrase occurrences per taxonomy entry over lowercased text.
///
/// Patterns are compiled once at construction; the tables are static and
/// `regex_lite::escape` makes any phrase a valid pattern, so compilation
/// failures are skipped the same way the content selectors are.
pub(crate) struct KeywordScorer {
    entries: Vec<ScoredEntry>,
}

impl KeywordScorer {
    pub(crate) fn new(table: &[(&'static str, &[&str])], mode: MatchMode) -> Self {
        let entries = table
            .iter()
            .map(|(slug, keywords)| ScoredEntry {
                slug,
                patterns: keywords
                    .iter()
                    .filter_map(|kw| {
                        let escaped = regex_lite::escape(kw);
                        let pattern = match mode {
                            MatchMode::WholeWord => format!(r"\b{}\b", escaped),
                            MatchMode::Prefix => format!(r"\b{}", escaped),
                        };
                        Regex::new(&pattern).ok()
                    })
                    .collect(),
            })
            .collect();

        Self { entries }
    }

    fn score(entry: &ScoredEntry, text: &str) -> usize {
        entry
            .patterns
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }

    /// Pick the single highest-scoring slug.
    ///
    /// The running maximum only advances on strictly greater scores, so ties
    /// keep the earlier winner and an all-zero text keeps `default`. This
    /// mirrors the behavior editors already rely on; do not switch to a
    /// stable sort without re-validating suggested-category expectations.
    pub(crate) fn best_match(&self, text: &str, default: &str) -> String {
        let mut best = default.to_string();
        let mut best_score = 0usize;

        for entry in &self.entries {
            let score = Self::score(entry, text);
            if score > best_score {
                best_score = score;
                best = entry.slug.to_string();
            }
        }

        best
    }

    /// Every slug with a nonzero score, in table order, truncated to `limit`.
    ///
    /// No sort by score: the first `limit` qualifying entries win even if a
    /// later entry scored higher. Simplicity over precision, by the original
    /// contract.
    pub(crate) fn all_matches(&self, text: &str, limit: usize) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| Self::score(entry, text) > 0)
            .take(limit)
            .map(|entry| entry.slug.to_string())
            .collect()
    }
}
