//! The search engine tying query processing, embedding and storage together.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::embedding::EmbeddingProvider;
use crate::error::{Result, XystonError};
use crate::query::QueryProcessor;
use crate::search::types::{QueryInfo, SearchOptions, SearchResponse, SearchSettings, SearchTiming};
use crate::store::{HybridSearchParams, SimilarityStore};

/// Allowed drift of `semantic_weight + keyword_weight` from 1.0.
const WEIGHT_SUM_TOLERANCE: f32 = 1e-3;

/// Hybrid search engine over an embedding provider and a similarity store.
///
/// Both collaborators are injected behind [`Arc`], so one provider and
/// one store can serve many engines and callers concurrently.
pub struct HybridSearchEngine<P, S> {
    /// Converts query text to vectors.
    provider: Arc<P>,
    /// Holds the chunks and does the blended scoring.
    store: Arc<S>,
    /// Cleans, analyzes and enhances raw queries.
    processor: QueryProcessor,
}

impl<P: EmbeddingProvider, S: SimilarityStore> HybridSearchEngine<P, S> {
    /// Create an engine over the given provider and store.
    pub fn new(provider: Arc<P>, store: Arc<S>) -> Self {
        Self {
            provider,
            store,
            processor: QueryProcessor::new(),
        }
    }

    /// The embedding provider behind this engine.
    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    /// The similarity store behind this engine.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Run a hybrid search.
    ///
    /// The weights must sum to 1.0 (within a small tolerance); the check
    /// runs before the provider or store is touched, so a bad
    /// combination costs nothing but the call.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResponse> {
        check_weights(options.semantic_weight, options.keyword_weight)?;
        self.run(query, options).await
    }

    /// Hybrid search that degrades instead of failing on transient errors.
    ///
    /// Validation errors still propagate; a provider or store outage is
    /// logged and converted into an empty response flagged `degraded`.
    pub async fn search_degraded(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse> {
        match self.search(query, options).await {
            Ok(response) => Ok(response),
            Err(err) if err.is_transient() => {
                warn!(query = %query, error = %err, "degrading to an empty response");
                Ok(self.empty_response(query, options))
            }
            Err(err) => Err(err),
        }
    }

    /// Search on the semantic signal alone (weights forced to 1.0/0.0).
    pub async fn semantic_only(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse> {
        let forced = SearchOptions {
            semantic_weight: 1.0,
            keyword_weight: 0.0,
            ..options.clone()
        };
        self.search(query, &forced).await
    }

    /// Search on the keyword signal alone (weights forced to 0.0/1.0).
    pub async fn keyword_only(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse> {
        let forced = SearchOptions {
            semantic_weight: 0.0,
            keyword_weight: 1.0,
            ..options.clone()
        };
        self.search(query, &forced).await
    }

    async fn run(&self, query: &str, options: &SearchOptions) -> Result<SearchResponse> {
        let started = Instant::now();
        let processed = self
            .processor
            .process_with_enhancement(query, options.enhance);

        let embed_started = Instant::now();
        let embedding = self.provider.embed(&processed.enhanced).await?;
        let embedding_ms = round_ms(elapsed_ms(embed_started));
        let embedding_dimension = embedding.dimension();

        let params = HybridSearchParams::new(embedding, processed.keyword_query.clone())
            .with_weights(options.semantic_weight, options.keyword_weight)
            .with_threshold(options.match_threshold)
            .with_count(options.match_count);

        let search_started = Instant::now();
        let results = self.store.hybrid_search(params).await?;
        let search_ms = round_ms(elapsed_ms(search_started));

        let total_results = results.len();
        let has_semantic = results
            .iter()
            .any(|m| m.semantic_similarity > options.match_threshold);
        let has_keywords = results.iter().any(|m| m.keyword_rank > 0.0);

        debug!(
            query = %query,
            results = total_results,
            has_semantic,
            has_keywords,
            "search complete"
        );

        Ok(SearchResponse {
            query: QueryInfo {
                original: query.to_string(),
                processed,
                embedding_dimension,
            },
            settings: SearchSettings::from(options),
            results,
            timing: SearchTiming {
                total_results,
                embedding_ms,
                search_ms,
                total_ms: round_ms(elapsed_ms(started)),
                has_semantic,
                has_keywords,
                degraded: false,
            },
        })
    }

    fn empty_response(&self, query: &str, options: &SearchOptions) -> SearchResponse {
        let processed = self
            .processor
            .process_with_enhancement(query, options.enhance);
        SearchResponse {
            query: QueryInfo {
                original: query.to_string(),
                processed,
                embedding_dimension: self.provider.dimension(),
            },
            settings: SearchSettings::from(options),
            results: Vec::new(),
            timing: SearchTiming {
                total_results: 0,
                embedding_ms: 0.0,
                search_ms: 0.0,
                total_ms: 0.0,
                has_semantic: false,
                has_keywords: false,
                degraded: true,
            },
        }
    }
}

/// Reject weight pairs that do not sum to 1.0.
pub(crate) fn check_weights(semantic_weight: f32, keyword_weight: f32) -> Result<()> {
    let sum = semantic_weight + keyword_weight;
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(XystonError::validation(format!(
            "semantic_weight + keyword_weight must equal 1.0, got {sum:.3}"
        )));
    }
    Ok(())
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

/// Round milliseconds to two decimals for reporting.
fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}
