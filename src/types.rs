//! Core types for the extraction engine

use serde::{Deserialize, Serialize};

/// A structured article record produced from one HTML document.
///
/// Every field is populated in a single extraction pass; required fields fall
/// back to documented defaults rather than being absent. Serializes with
/// camelCase keys to match the editorial UI's record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedArticle {
    /// Resolved title; `"Untitled Article"` when no candidate exists
    pub title: String,
    /// Cleaned markup fragment for the article body
    pub content: String,
    /// Plain-text summary, bounded by the configured maximum length
    pub excerpt: String,
    /// Exactly one slug from the category taxonomy
    pub suggested_category: String,
    /// Up to `max_suggested_tags` slugs, in taxonomy order, no duplicates
    pub suggested_tags: Vec<String>,
    /// Estimated reading time in minutes, always >= 1
    pub estimated_read_time: u32,
    /// Count of word-like tokens in the plain-text content
    pub word_count: usize,
    /// Image references in document order; duplicates kept, data: URIs excluded
    pub images: Vec<String>,
    /// Trimmed h1-h6 text in document order; empty headings dropped
    pub headings: Vec<String>,
    /// Optional document metadata, first match wins per field
    pub metadata: ArticleMetadata,
}

/// Best-effort document metadata. Export quality varies wildly, so every
/// field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetadata {
    /// Author name from the author meta tag or a `rel="author"` element
    pub author: Option<String>,
    /// Publish date as found in the source; not parsed or normalized
    pub publish_date: Option<String>,
    /// Description from the description or og:description meta tag
    pub description: Option<String>,
}
