//! Request and response types for hybrid search.

use serde::{Deserialize, Serialize};

use crate::query::ProcessedQuery;
use crate::store::types::{
    DEFAULT_HYBRID_THRESHOLD, DEFAULT_KEYWORD_WEIGHT, DEFAULT_MATCH_COUNT, DEFAULT_SEMANTIC_WEIGHT,
};
use crate::store::HybridMatch;

/// Tunable knobs for a single search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Weight of the semantic similarity signal.
    pub semantic_weight: f32,
    /// Weight of the keyword rank signal.
    pub keyword_weight: f32,
    /// Minimum semantic similarity for a row to qualify on that signal.
    pub match_threshold: f32,
    /// Maximum number of results to return.
    pub match_count: usize,
    /// Whether to enhance the query with synonyms and category terms.
    pub enhance: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            semantic_weight: DEFAULT_SEMANTIC_WEIGHT,
            keyword_weight: DEFAULT_KEYWORD_WEIGHT,
            match_threshold: DEFAULT_HYBRID_THRESHOLD,
            match_count: DEFAULT_MATCH_COUNT,
            enhance: true,
        }
    }
}

impl SearchOptions {
    /// Set both scoring weights.
    pub fn with_weights(mut self, semantic_weight: f32, keyword_weight: f32) -> Self {
        self.semantic_weight = semantic_weight;
        self.keyword_weight = keyword_weight;
        self
    }

    /// Set the semantic match threshold.
    pub fn with_threshold(mut self, match_threshold: f32) -> Self {
        self.match_threshold = match_threshold;
        self
    }

    /// Set the result cap.
    pub fn with_count(mut self, match_count: usize) -> Self {
        self.match_count = match_count;
        self
    }

    /// Enable or disable query enhancement.
    pub fn with_enhancement(mut self, enhance: bool) -> Self {
        self.enhance = enhance;
        self
    }
}

/// How the raw query was interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryInfo {
    /// The query exactly as the caller supplied it.
    pub original: String,
    /// Cleaning, analysis and enhancement output.
    pub processed: ProcessedQuery,
    /// Dimension of the query embedding that was sent to the store.
    pub embedding_dimension: usize,
}

/// The numeric settings a search actually ran with.
///
/// Mode-forcing helpers rewrite the weights, so this echo is the
/// authoritative record of what reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub semantic_weight: f32,
    pub keyword_weight: f32,
    pub match_threshold: f32,
    pub match_count: usize,
}

impl From<&SearchOptions> for SearchSettings {
    fn from(options: &SearchOptions) -> Self {
        Self {
            semantic_weight: options.semantic_weight,
            keyword_weight: options.keyword_weight,
            match_threshold: options.match_threshold,
            match_count: options.match_count,
        }
    }
}

/// Timing and signal summary for one search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTiming {
    /// Number of results returned.
    pub total_results: usize,
    /// Milliseconds spent embedding the query, rounded to 2 decimals.
    pub embedding_ms: f64,
    /// Milliseconds spent in the store, rounded to 2 decimals.
    pub search_ms: f64,
    /// End-to-end milliseconds, rounded to 2 decimals.
    pub total_ms: f64,
    /// True when any result cleared the semantic threshold.
    pub has_semantic: bool,
    /// True when any result had a keyword hit.
    pub has_keywords: bool,
    /// True only for empty responses synthesized after a transient
    /// failure by the permissive search path.
    pub degraded: bool,
}

/// Full response for one search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Query interpretation details.
    pub query: QueryInfo,
    /// The settings the search ran with.
    pub settings: SearchSettings,
    /// Matches sorted by blended score, best first.
    pub results: Vec<HybridMatch>,
    /// Timing and signal summary.
    pub timing: SearchTiming,
}

impl SearchResponse {
    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when no row matched.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The best-scoring match, if any.
    pub fn best(&self) -> Option<&HybridMatch> {
        self.results.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_options_default() {
        let options = SearchOptions::default();
        assert_eq!(options.semantic_weight, 0.6);
        assert_eq!(options.keyword_weight, 0.4);
        assert_eq!(options.match_threshold, 0.1);
        assert_eq!(options.match_count, 10);
        assert!(options.enhance);
    }

    #[test]
    fn test_search_options_builder() {
        let options = SearchOptions::default()
            .with_weights(0.8, 0.2)
            .with_threshold(0.3)
            .with_count(5)
            .with_enhancement(false);

        assert_eq!(options.semantic_weight, 0.8);
        assert_eq!(options.keyword_weight, 0.2);
        assert_eq!(options.match_threshold, 0.3);
        assert_eq!(options.match_count, 5);
        assert!(!options.enhance);
    }

    #[test]
    fn test_settings_echo_options() {
        let options = SearchOptions::default().with_weights(1.0, 0.0);
        let settings = SearchSettings::from(&options);
        assert_eq!(settings.semantic_weight, 1.0);
        assert_eq!(settings.keyword_weight, 0.0);
        assert_eq!(settings.match_threshold, options.match_threshold);
        assert_eq!(settings.match_count, options.match_count);
    }
}
