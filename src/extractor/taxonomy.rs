//! Fixed keyword taxonomies for category and tag suggestion
//!
//! Both tables are static configuration, not runtime state. Iteration order
//! is definition order and the classifier depends on it: the category scorer
//! keeps the first entry to reach the running maximum, and tag suggestions
//! are emitted in table order.

/// Category returned when no keyword matches (and the running default on ties)
pub const DEFAULT_CATEGORY: &str = "technology";

/// Mutually exclusive category slugs with their keyword phrases.
/// Scored with whole-word matching.
pub static CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "business",
        &["business", "entrepreneur", "company", "corporate", "strategy", "management", "leadership"],
    ),
    (
        "finance",
        &["finance", "money", "investment", "stock", "trading", "crypto", "banking", "economy"],
    ),
    (
        "saas",
        &["saas", "software", "cloud", "subscription", "platform", "api", "integration"],
    ),
    (
        "startups",
        &["startup", "founder", "funding", "venture", "seed", "pitch", "mvp", "launch"],
    ),
    (
        "ai",
        &["ai", "artificial intelligence", "machine learning", "neural", "chatgpt", "gpt", "llm", "automation"],
    ),
    (
        "reviews",
        &["review", "comparison", "vs", "best", "top", "rating", "pros", "cons"],
    ),
    (
        "technology",
        &["tech", "technology", "digital", "innovation", "gadget", "device", "hardware"],
    ),
    (
        "marketing",
        &["marketing", "seo", "content", "social media", "advertising", "campaign", "brand"],
    ),
    (
        "productivity",
        &["productivity", "efficiency", "workflow", "time management", "tools", "tips"],
    ),
    (
        "leadership",
        &["leadership", "management", "team", "culture", "motivation", "coaching"],
    ),
];

/// Non-exclusive tag slugs with their keyword phrases.
/// Scored with prefix-at-word-boundary matching, so "invest" also counts
/// "investing" and "investment".
pub static TAG_KEYWORDS: &[(&str, &[&str])] = &[
    ("javascript", &["javascript", "js", "node", "react", "vue", "angular"]),
    ("react", &["react", "jsx", "hooks", "component"]),
    ("typescript", &["typescript", "ts", "type"]),
    ("python", &["python", "django", "flask"]),
    ("web-development", &["web dev", "frontend", "backend", "fullstack"]),
    ("mobile-apps", &["mobile", "ios", "android", "app"]),
    ("cloud-computing", &["cloud", "aws", "azure", "gcp"]),
    ("entrepreneurship", &["entrepreneur", "startup", "founder"]),
    ("strategy", &["strategy", "strategic", "planning"]),
    ("growth", &["growth", "scale", "scaling"]),
    ("innovation", &["innovation", "innovative", "disrupt"]),
    ("investing", &["invest", "portfolio", "stock"]),
    ("cryptocurrency", &["crypto", "bitcoin", "ethereum", "blockchain"]),
    ("machine-learning", &["machine learning", "ml", "model", "training"]),
    ("chatgpt", &["chatgpt", "gpt", "openai"]),
    ("automation", &["automat", "workflow", "bot"]),
    ("data-science", &["data science", "analytics", "big data"]),
    ("seo", &["seo", "search engine", "ranking"]),
    ("content-marketing", &["content marketing", "blog", "article"]),
    ("social-media", &["social media", "facebook", "twitter", "linkedin"]),
    ("tutorial", &["tutorial", "how to", "guide", "step by step"]),
    ("guide", &["guide", "handbook", "manual"]),
    ("tips", &["tips", "tricks", "hack"]),
    ("trends", &["trend", "future", "prediction"]),
];

/// Whether `slug` names a built-in category.
pub fn is_category_slug(slug: &str) -> bool {
    CATEGORY_KEYWORDS.iter().any(|(s, _)| *s == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_slugs_are_unique() {
        let slugs: HashSet<_> = CATEGORY_KEYWORDS.iter().map(|(s, _)| *s).collect();
        assert_eq!(slugs.len(), CATEGORY_KEYWORDS.len());
    }

    #[test]
    fn tag_slugs_are_unique() {
        let slugs: HashSet<_> = TAG_KEYWORDS.iter().map(|(s, _)| *s).collect();
        assert_eq!(slugs.len(), TAG_KEYWORDS.len());
    }

    #[test]
    fn default_category_is_a_known_slug() {
        assert!(is_category_slug(DEFAULT_CATEGORY));
    }

    #[test]
    fn keywords_are_lowercase() {
        // Scoring text is lowercased once; keywords must already match it.
        for (_, keywords) in CATEGORY_KEYWORDS.iter().chain(TAG_KEYWORDS.iter()) {
            for kw in *keywords {
                assert_eq!(*kw, kw.to_lowercase(), "keyword not lowercase: {}", kw);
            }
        }
    }

    #[test]
    fn every_entry_has_keywords() {
        for (slug, keywords) in CATEGORY_KEYWORDS.iter().chain(TAG_KEYWORDS.iter()) {
            assert!(!keywords.is_empty(), "entry '{}' has no keywords", slug);
        }
    }
}
