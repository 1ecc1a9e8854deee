//! Title resolution and document metadata lookups

use scraper::{Html, Selector};

use super::text::collapse_whitespace;
use super::ArticleExtractor;
use crate::types::ArticleMetadata;

/// Title used when every candidate source is empty or missing
pub(super) const FALLBACK_TITLE: &str = "Untitled Article";

impl ArticleExtractor {
    /// Resolve the article title through the fallback chain: first h1 text,
    /// `<title>`, og:title, twitter:title, then title-ish class hints. The
    /// first non-empty candidate wins, whitespace collapsed.
    pub(super) fn extract_title(&self, document: &Html) -> String {
        self.select_text(document, "h1")
            .or_else(|| self.select_text(document, "title"))
            .or_else(|| self.meta_content(document, "og:title"))
            .or_else(|| self.meta_content(document, "twitter:title"))
            .or_else(|| self.select_text(document, ".title, .post-title, .article-title"))
            .unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }

    /// Three independent best-effort lookups, each with its own short
    /// fallback chain. Absent metadata stays `None`; export quality varies.
    pub(super) fn extract_metadata(&self, document: &Html) -> ArticleMetadata {
        let author = self
            .meta_content(document, "author")
            .or_else(|| self.select_text(document, "[rel='author']"));

        let publish_date = self
            .meta_content(document, "article:published_time")
            .or_else(|| self.select_attr(document, "time", "datetime"));

        let description = self
            .meta_content(document, "description")
            .or_else(|| self.meta_content(document, "og:description"));

        ArticleMetadata {
            author,
            publish_date,
            description,
        }
    }

    /// Collapsed text of the first element matching `selector`, if non-empty.
    fn select_text(&self, document: &Html, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        let element = document.select(&selector).next()?;
        let text = collapse_whitespace(&element.text().collect::<String>());
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Trimmed value of `attr` on the first element matching `selector`.
    /// Only that one element is consulted; if it lacks the attribute the
    /// lookup yields `None` rather than scanning later matches.
    fn select_attr(&self, document: &Html, selector: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        let element = document.select(&selector).next()?;
        let trimmed = element.value().attr(attr)?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Get meta content by name or property, using the pre-compiled selector
    /// pairs built at construction.
    pub(super) fn meta_content(&self, document: &Html, name: &str) -> Option<String> {
        let (name_sel, prop_sel) = self.meta_selectors.get(name)?;

        for selector in [name_sel, prop_sel].into_iter().flatten() {
            if let Some(element) = document.select(selector).next() {
                if let Some(content) = element.value().attr("content") {
                    let trimmed = content.trim();
                    if !trimmed.is_empty() {
                        return Some(trimmed.to_string());
                    }
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorConfig;

    fn extractor() -> ArticleExtractor {
        ArticleExtractor::new(ExtractorConfig::default())
    }

    fn title_of(html: &str) -> String {
        extractor().extract_title(&Html::parse_document(html))
    }

    fn metadata_of(html: &str) -> ArticleMetadata {
        extractor().extract_metadata(&Html::parse_document(html))
    }

    // ========================================================================
    // Title fallback chain
    // ========================================================================

    #[test]
    fn h1_outranks_title_tag() {
        let html = "<head><title>Doc Title</title></head><body><h1>Heading</h1></body>";
        assert_eq!(title_of(html), "Heading");
    }

    #[test]
    fn title_tag_outranks_og_title() {
        let html = r#"<head><title>Doc Title</title>
            <meta property="og:title" content="OG Title"></head>"#;
        assert_eq!(title_of(html), "Doc Title");
    }

    #[test]
    fn og_title_outranks_twitter_title() {
        let html = r#"<head>
            <meta property="og:title" content="OG Title">
            <meta name="twitter:title" content="TW Title"></head>"#;
        assert_eq!(title_of(html), "OG Title");
    }

    #[test]
    fn class_hint_is_last_real_candidate() {
        let html = r#"<body><div class="post-title">Hinted Title</div></body>"#;
        assert_eq!(title_of(html), "Hinted Title");
    }

    #[test]
    fn empty_h1_falls_through() {
        let html = "<head><title>Doc Title</title></head><body><h1>   </h1></body>";
        assert_eq!(title_of(html), "Doc Title");
    }

    #[test]
    fn missing_everything_yields_placeholder() {
        assert_eq!(title_of("<body><p>no title here</p></body>"), FALLBACK_TITLE);
    }

    #[test]
    fn title_whitespace_is_collapsed() {
        let html = "<body><h1>  Spaced \n  Out  </h1></body>";
        assert_eq!(title_of(html), "Spaced Out");
    }

    // ========================================================================
    // Metadata chains
    // ========================================================================

    #[test]
    fn author_meta_outranks_rel_author() {
        let html = r#"<head><meta name="author" content="Meta Author"></head>
            <body><a rel="author">Link Author</a></body>"#;
        assert_eq!(metadata_of(html).author.as_deref(), Some("Meta Author"));
    }

    #[test]
    fn rel_author_is_the_fallback() {
        let html = r#"<body><a rel="author">Link Author</a></body>"#;
        assert_eq!(metadata_of(html).author.as_deref(), Some("Link Author"));
    }

    #[test]
    fn publish_date_prefers_article_meta() {
        let html = r#"<head>
            <meta property="article:published_time" content="2024-01-15T10:00:00Z"></head>
            <body><time datetime="2020-01-01">old</time></body>"#;
        assert_eq!(
            metadata_of(html).publish_date.as_deref(),
            Some("2024-01-15T10:00:00Z")
        );
    }

    #[test]
    fn publish_date_falls_back_to_time_element() {
        let html = r#"<body><time datetime="2023-06-01">June 1</time></body>"#;
        assert_eq!(metadata_of(html).publish_date.as_deref(), Some("2023-06-01"));
    }

    #[test]
    fn publish_date_reads_only_the_first_time_element() {
        // Later <time> elements are never consulted, even when the first
        // one carries no datetime attribute.
        let html = r#"<body>
            <time>yesterday</time>
            <time datetime="2023-06-01">June 1</time>
        </body>"#;
        assert_eq!(metadata_of(html).publish_date, None);
    }

    #[test]
    fn description_falls_back_to_og() {
        let html = r#"<head><meta property="og:description" content="OG Desc"></head>"#;
        assert_eq!(metadata_of(html).description.as_deref(), Some("OG Desc"));
    }

    #[test]
    fn absent_metadata_is_none() {
        let meta = metadata_of("<body><p>bare</p></body>");
        assert_eq!(meta, ArticleMetadata::default());
    }
}
