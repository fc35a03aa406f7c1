//! Static domain vocabulary for query analysis and enhancement.
//!
//! Everything here is data, not control flow: the processor scans these
//! tables and never hardcodes a category or synonym decision. Table order
//! is significant where noted.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::query::analysis::Category;

/// Synonym expansions for common review vocabulary.
///
/// Scanned in order during enhancement; only the first two synonyms of a
/// matched key are appended.
pub const SYNONYMS: &[(&str, &[&str])] = &[
    ("delicious", &["tasty", "flavorful", "amazing", "excellent"]),
    ("terrible", &["horrible", "awful", "disgusting", "bad"]),
    ("good", &["great", "nice", "decent", "solid"]),
    ("fast", &["quick", "speedy", "prompt"]),
    ("slow", &["sluggish", "delayed", "lengthy"]),
    ("expensive", &["costly", "pricey", "overpriced"]),
    ("cheap", &["affordable", "inexpensive", "budget"]),
    ("fresh", &["crisp", "new", "vibrant"]),
    ("spicy", &["hot", "fiery", "zesty"]),
    ("friendly", &["nice", "kind", "helpful", "polite"]),
    ("rude", &["impolite", "unfriendly", "hostile"]),
];

/// Category vocabulary.
///
/// Definition order doubles as the tie-break order when two categories
/// score equally.
pub const CATEGORY_TERMS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &["taste", "flavor", "delicious", "fresh", "cooking", "meal"],
    ),
    (
        Category::Service,
        &["staff", "waiter", "waitress", "server", "friendly"],
    ),
    (
        Category::Atmosphere,
        &["ambiance", "mood", "decor", "music", "lighting"],
    ),
    (
        Category::Price,
        &["cost", "expensive", "cheap", "value", "money"],
    ),
    (Category::Location, &["parking", "convenient", "accessible"]),
    (Category::Timing, &["fast", "slow", "quick", "wait", "time"]),
];

/// Positive sentiment markers.
pub const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "excellent",
    "wonderful",
    "great",
    "fantastic",
    "perfect",
    "love",
    "best",
    "awesome",
    "incredible",
];

/// Negative sentiment markers.
pub const NEGATIVE_WORDS: &[&str] = &[
    "terrible",
    "horrible",
    "awful",
    "worst",
    "hate",
    "disgusting",
    "disappointing",
    "poor",
    "bad",
];

/// Words carrying no search value, removed during keyword extraction.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "of", "on", "that", "the", "to", "was", "will", "with", "i", "me", "my", "we",
];

/// Literal abbreviation expansions, applied in order during cleaning.
///
/// The replace is a plain substring substitution, so a key occurring
/// inside a longer word is expanded too. That imprecision is part of the
/// cleaning contract.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("w/", "with"),
    ("w/o", "without"),
    ("gt", "great"),
    ("thru", "through"),
];

/// Completion templates offered for partial queries, in display order.
pub const SUGGESTION_PATTERNS: &[&str] = &[
    "delicious food",
    "excellent service",
    "reasonable prices",
    "romantic atmosphere",
    "family friendly",
    "quick service",
    "good value",
    "fresh ingredients",
];

/// Stop words as a set for per-token lookups.
pub static STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| STOP_WORDS.iter().map(|s| s.to_string()).collect());

/// Positive markers as a set.
pub static POSITIVE_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().map(|s| s.to_string()).collect());

/// Negative markers as a set.
pub static NEGATIVE_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().map(|s| s.to_string()).collect());

/// Synonym lookup keyed by trigger word.
pub static SYNONYM_MAP: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| SYNONYMS.iter().copied().collect());

/// Terms for one category, if it is in the table.
pub fn category_terms(category: Category) -> Option<&'static [&'static str]> {
    CATEGORY_TERMS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, terms)| *terms)
}
