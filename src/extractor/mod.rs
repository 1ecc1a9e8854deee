//! HTML-to-article extraction engine
//!
//! One stateless engine runs ordered, individually fail-soft stages over a
//! single document:
//! - Lenient parse into a traversable tree (malformed input still yields one)
//! - Noise stripping on a working copy (nav, ads, comments, chrome)
//! - Title resolution and metadata lookups via fallback chains
//! - Content location over a priority list of container candidates
//! - Image/heading collection from the original, unstripped tree
//! - Excerpt, word count, read time
//! - Keyword classification into suggested category and tags

mod classify;
mod collect;
mod content;
mod metadata;
mod noise;
pub mod taxonomy;
mod text;

use scraper::{Html, Selector};
use std::collections::HashMap;

use crate::config::ExtractorConfig;
use crate::types::ParsedArticle;
use classify::{KeywordScorer, MatchMode};

/// Subtrees that are never article content, by tag or class hint
const NOISE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "nav",
    "header",
    "footer",
    "aside",
    ".sidebar",
    ".advertisement",
    ".ad",
    ".social-share",
    ".comments",
    ".related-posts",
];

/// Candidate content containers, in priority order; `body` is the last resort
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    ".content",
    ".post-content",
    ".article-content",
    ".entry-content",
    "#content",
    "body",
];

/// Meta names resolved through `meta[name=..]` / `meta[property=..]` pairs
const META_NAMES: &[&str] = &[
    "og:title",
    "twitter:title",
    "author",
    "description",
    "og:description",
    "article:published_time",
];

/// The extraction engine. Construction pre-compiles all selectors and
/// taxonomy patterns; `parse` is then a pure function over one document.
pub struct ArticleExtractor {
    pub(crate) config: ExtractorConfig,
    noise_selectors: Vec<Selector>,
    content_selectors: Vec<Selector>,
    /// Pre-compiled meta selectors: maps meta name to (name, property) pair
    meta_selectors: HashMap<String, (Option<Selector>, Option<Selector>)>,
    category_scorer: KeywordScorer,
    tag_scorer: KeywordScorer,
}

impl ArticleExtractor {
    /// Create a new extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        let noise_selectors = NOISE_SELECTORS
            .iter()
            .filter_map(|s| Selector::parse(s).ok())
            .collect();

        let content_selectors = CONTENT_SELECTORS
            .iter()
            .filter_map(|s| Selector::parse(s).ok())
            .collect();

        let mut meta_selectors = HashMap::with_capacity(META_NAMES.len());
        for name in META_NAMES {
            let name_sel = Selector::parse(&format!("meta[name='{}']", name)).ok();
            let prop_sel = Selector::parse(&format!("meta[property='{}']", name)).ok();
            meta_selectors.insert(name.to_string(), (name_sel, prop_sel));
        }

        Self {
            config,
            noise_selectors,
            content_selectors,
            meta_selectors,
            category_scorer: KeywordScorer::new(taxonomy::CATEGORY_KEYWORDS, MatchMode::WholeWord),
            tag_scorer: KeywordScorer::new(taxonomy::TAG_KEYWORDS, MatchMode::Prefix),
        }
    }

    /// Extract a structured article record from raw HTML.
    ///
    /// Deterministic for identical input and infallible: the lenient parser
    /// always yields some tree, and every stage degrades to a documented
    /// default when its source material is missing.
    pub fn parse(&self, html: &str) -> ParsedArticle {
        let document = Html::parse_document(html);

        // Noise removal works on a second parse of the same input; title,
        // metadata, images and headings still read the original tree.
        let mut working = Html::parse_document(html);
        self.strip_noise(&mut working);

        let title = self.extract_title(&document);
        let content = self.extract_content(&working);
        let metadata = self.extract_metadata(&document);
        let excerpt = self.generate_excerpt(&content);
        let images = self.extract_images(&document);
        let headings = self.extract_headings(&document);

        let word_count = text::count_words(&content);
        let estimated_read_time = (word_count as f32 / self.config.words_per_minute as f32)
            .ceil()
            .max(1.0) as u32;

        // Title + headings + content in one lowercased blob. Content still
        // carries markup here; keyword matching is word-boundary based, so
        // tag soup rarely collides with taxonomy phrases.
        let scoring_text = format!("{} {} {}", title, headings.join(" "), content).to_lowercase();
        let suggested_category = self
            .category_scorer
            .best_match(&scoring_text, &self.config.default_category);
        let suggested_tags = self
            .tag_scorer
            .all_matches(&scoring_text, self.config.max_suggested_tags);

        tracing::debug!(
            word_count,
            read_time = estimated_read_time,
            category = %suggested_category,
            "extracted article '{}'",
            title
        );

        ParsedArticle {
            title,
            content,
            excerpt,
            suggested_category,
            suggested_tags,
            estimated_read_time,
            word_count,
            images,
            headings,
            metadata,
        }
    }
}

impl Default for ArticleExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document() {
        let extractor = ArticleExtractor::default();
        let article = extractor
            .parse("<html><head><title>T</title></head><body><p>Hello world.</p></body></html>");

        assert_eq!(article.title, "T");
        assert!(article.content.contains("Hello world."));
        assert_eq!(article.word_count, 2);
        assert_eq!(article.estimated_read_time, 1);
    }

    #[test]
    fn empty_input_still_yields_full_record() {
        let extractor = ArticleExtractor::default();
        let article = extractor.parse("");

        assert_eq!(article.title, "Untitled Article");
        assert_eq!(article.word_count, 0);
        assert_eq!(article.estimated_read_time, 1);
        assert!(article.images.is_empty());
        assert!(article.headings.is_empty());
        assert!(article.suggested_tags.len() <= 5);
    }

    #[test]
    fn severely_malformed_markup_does_not_panic() {
        let extractor = ArticleExtractor::default();
        let article = extractor.parse("<div><p>unclosed <b>nested <i>deep</div></p>< <<>>");
        assert!(!article.title.is_empty());
    }

    #[test]
    fn read_time_scales_with_word_count() {
        let extractor = ArticleExtractor::default();
        let body: String = (0..450).map(|i| format!("w{} ", i)).collect();
        let article = extractor.parse(&format!("<body><article>{}</article></body>", body));
        assert_eq!(article.word_count, 450);
        assert_eq!(article.estimated_read_time, 3);
    }
}
