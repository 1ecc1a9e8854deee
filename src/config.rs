//! Configuration for the extraction engine

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::extractor::taxonomy;

fn default_excerpt_max_chars() -> usize {
    200
}

fn default_sentence_break_fraction() -> f32 {
    0.6
}

fn default_words_per_minute() -> usize {
    200
}

fn default_max_suggested_tags() -> usize {
    5
}

fn default_category() -> String {
    taxonomy::DEFAULT_CATEGORY.to_string()
}

/// Tunables for article extraction.
///
/// Every field has a sensible default, so an empty TOML file (or
/// `ExtractorConfig::default()`) yields a working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum excerpt length in characters (before the ellipsis marker)
    #[serde(default = "default_excerpt_max_chars")]
    pub excerpt_max_chars: usize,
    /// Fraction of the excerpt budget past which a sentence-terminal cut is
    /// preferred over a word-boundary cut (0.0-1.0 exclusive)
    #[serde(default = "default_sentence_break_fraction")]
    pub sentence_break_fraction: f32,
    /// Average words per minute for the read-time estimate
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: usize,
    /// Maximum number of suggested tags
    #[serde(default = "default_max_suggested_tags")]
    pub max_suggested_tags: usize,
    /// Category slug returned when no keyword scores, and the running default
    /// on ties; must name a built-in category
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            excerpt_max_chars: default_excerpt_max_chars(),
            sentence_break_fraction: default_sentence_break_fraction(),
            words_per_minute: default_words_per_minute(),
            max_suggested_tags: default_max_suggested_tags(),
            default_category: default_category(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: ExtractorConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together so the user
    /// can fix everything in one pass rather than playing whack-a-mole.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.excerpt_max_chars == 0 {
            errors.push("excerpt_max_chars must be positive".to_string());
        }
        if self.sentence_break_fraction <= 0.0 || self.sentence_break_fraction >= 1.0 {
            errors.push(
                "sentence_break_fraction must be between 0.0 and 1.0 (exclusive)".to_string(),
            );
        }
        if self.words_per_minute == 0 {
            errors.push("words_per_minute must be positive".to_string());
        }
        if self.max_suggested_tags == 0 {
            errors.push("max_suggested_tags must be positive".to_string());
        }
        if !taxonomy::is_category_slug(&self.default_category) {
            errors.push(format!(
                "default_category '{}' is not a known category slug",
                self.default_category
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }
    }
}
