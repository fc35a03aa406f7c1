//! Query cleaning, analysis, keyword extraction and enhancement.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::query::analysis::{Category, CategoryScore, Intent, QueryAnalysis, Sentiment};
use crate::query::lexicon;

/// Synonyms appended per matched trigger word.
const SYNONYMS_PER_WORD: usize = 2;
/// Category terms considered for enhancement.
const CATEGORY_TERMS_FOR_ENHANCEMENT: usize = 2;
/// Keywords shorter than this are dropped.
const MIN_KEYWORD_CHARS: usize = 2;
/// Cap on returned query suggestions.
const MAX_SUGGESTIONS: usize = 5;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^\w\s\-'"]+"#).expect("whitelist pattern"));

/// A fully processed query, ready for the search engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedQuery {
    /// The query exactly as the caller supplied it.
    pub original: String,
    /// Lowercased, stripped, abbreviation-expanded text.
    pub cleaned: String,
    /// Semantic-search variant with synonyms and category vocabulary.
    pub enhanced: String,
    /// Keyword-search variant with sentiment boost terms.
    pub keyword_query: String,
    /// Deduplicated content words in first-occurrence order.
    pub keywords: Vec<String>,
    /// Category, sentiment and intent analysis.
    pub analysis: QueryAnalysis,
}

/// Processes raw queries against the static domain lexicon.
///
/// Every operation is total: any string, including the empty one, yields
/// a result rather than an error.
///
/// # Examples
///
/// ```
/// use xyston::query::QueryProcessor;
///
/// let processor = QueryProcessor::new();
/// let processed = processor.process("delicious food great service");
///
/// assert_eq!(processed.cleaned, "delicious food great service");
/// assert!(processed.enhanced.contains("tasty"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryProcessor;

impl QueryProcessor {
    /// Create a new query processor.
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline with enhancement enabled.
    pub fn process(&self, query: &str) -> ProcessedQuery {
        self.process_with_enhancement(query, true)
    }

    /// Run the full pipeline.
    ///
    /// With enhancement off, both search variants fall back to the
    /// cleaned text; analysis and keywords are produced either way.
    pub fn process_with_enhancement(&self, query: &str, enhance: bool) -> ProcessedQuery {
        let cleaned = self.clean(query);
        let analysis = self.analyze(&cleaned);
        let keywords = self.extract_keywords(&cleaned);

        let (enhanced, keyword_query) = if enhance {
            (
                self.enhance(&cleaned, &analysis),
                self.build_keyword_query(&keywords, &analysis),
            )
        } else {
            (cleaned.clone(), cleaned.clone())
        };

        debug!(
            original = query,
            category = analysis.main_category_label(),
            keywords = keywords.len(),
            "processed query"
        );

        ProcessedQuery {
            original: query.to_string(),
            cleaned,
            enhanced,
            keyword_query,
            keywords,
            analysis,
        }
    }

    /// Normalize a raw query.
    ///
    /// Lowercases, collapses whitespace, strips characters outside the
    /// query whitelist, then applies the abbreviation table as literal
    /// substring replacements in table order.
    pub fn clean(&self, query: &str) -> String {
        let cleaned = query.to_lowercase();
        let cleaned = WHITESPACE.replace_all(cleaned.trim(), " ");
        let cleaned = DISALLOWED.replace_all(&cleaned, " ");

        let mut cleaned = cleaned.into_owned();
        for (abbreviation, expansion) in lexicon::ABBREVIATIONS {
            cleaned = cleaned.replace(abbreviation, expansion);
        }

        cleaned.trim().to_string()
    }

    /// Analyze a cleaned query for category, sentiment and intent.
    pub fn analyze(&self, cleaned: &str) -> QueryAnalysis {
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        let mut category_scores = Vec::new();
        for (category, terms) in lexicon::CATEGORY_TERMS {
            let score = words.iter().filter(|word| terms.contains(word)).count() as u32;
            if score > 0 {
                category_scores.push(CategoryScore {
                    category: *category,
                    score,
                });
            }
        }

        // Strictly-greater comparison keeps the first-listed category on
        // ties, matching the lexicon's definition order.
        let mut main_category: Option<Category> = None;
        let mut best_score = 0u32;
        for entry in &category_scores {
            if entry.score > best_score {
                best_score = entry.score;
                main_category = Some(entry.category);
            }
        }

        let positive = words
            .iter()
            .filter(|word| lexicon::POSITIVE_WORDS_SET.contains(**word))
            .count();
        let negative = words
            .iter()
            .filter(|word| lexicon::NEGATIVE_WORDS_SET.contains(**word))
            .count();
        let sentiment = if positive > negative {
            Sentiment::Positive
        } else if negative > positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        let intent = if words.iter().any(|w| *w == "recommend" || *w == "best") {
            Intent::SeekingRecommendation
        } else if words.iter().any(|w| *w == "avoid" || *w == "worst") {
            Intent::SeekingWarnings
        } else {
            Intent::GeneralSearch
        };

        QueryAnalysis {
            main_category,
            sentiment,
            intent,
            category_scores,
        }
    }

    /// Extract content keywords from a cleaned query.
    ///
    /// Drops stop words and very short tokens, then deduplicates while
    /// preserving first-occurrence order.
    pub fn extract_keywords(&self, cleaned: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for word in cleaned.split_whitespace() {
            if lexicon::STOP_WORDS_SET.contains(word) || word.chars().count() <= MIN_KEYWORD_CHARS {
                continue;
            }
            if seen.insert(word.to_string()) {
                keywords.push(word.to_string());
            }
        }

        keywords
    }

    /// Expand a cleaned query for semantic search.
    ///
    /// Appends the first two synonyms of every matched trigger word, then
    /// the detected category's first two terms where they do not already
    /// occur as substrings of the cleaned query.
    pub fn enhance(&self, cleaned: &str, analysis: &QueryAnalysis) -> String {
        let words: Vec<&str> = cleaned.split_whitespace().collect();
        let mut enhanced: Vec<&str> = words.clone();

        for word in &words {
            if let Some(synonyms) = lexicon::SYNONYM_MAP.get(word) {
                enhanced.extend(synonyms.iter().take(SYNONYMS_PER_WORD));
            }
        }

        if let Some(category) = analysis.main_category
            && let Some(terms) = lexicon::category_terms(category)
        {
            for term in terms.iter().take(CATEGORY_TERMS_FOR_ENHANCEMENT) {
                if !cleaned.contains(term) {
                    enhanced.push(term);
                }
            }
        }

        enhanced.join(" ")
    }

    /// Build the keyword-search variant of the query.
    pub fn build_keyword_query(&self, keywords: &[String], analysis: &QueryAnalysis) -> String {
        let mut parts: Vec<&str> = keywords.iter().map(|k| k.as_str()).collect();

        match analysis.sentiment {
            Sentiment::Positive => parts.extend(["excellent", "great"]),
            Sentiment::Negative => parts.extend(["terrible", "bad"]),
            Sentiment::Neutral => {}
        }

        parts.join(" ")
    }

    /// Offer completion suggestions for a partial query.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        let partial = partial.to_lowercase();

        lexicon::SUGGESTION_PATTERNS
            .iter()
            .filter(|pattern| pattern.starts_with(&partial) || pattern.contains(&partial))
            .take(MAX_SUGGESTIONS)
            .map(|pattern| pattern.to_string())
            .collect()
    }
}
