//! article-extract: HTML-to-article extraction and classification
//!
//! Turns arbitrary, messy HTML (exported blog posts, scraped pages, CMS
//! exports) into a clean, structured article record for editorial review:
//! - Boilerplate removal (navigation, ads, comments, related-posts chrome)
//! - Title and metadata resolution via ordered fallback chains
//! - Main content location with a textual cleanup pass
//! - Image and heading collection in document order
//! - Sentence-aware excerpt generation
//! - Word count and estimated read time
//! - Keyword-based category and tag suggestions over fixed taxonomies
//!
//! The engine is a pure function: document text in, [`ParsedArticle`] out,
//! deterministic for identical input. It performs no I/O and holds no state
//! between calls.

pub mod config;
pub mod extractor;
pub mod types;

pub use config::ExtractorConfig;
pub use extractor::ArticleExtractor;
pub use types::{ArticleMetadata, ParsedArticle};
