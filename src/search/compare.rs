//! Side-by-side comparison of the three search modes.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embedding::EmbeddingProvider;
use crate::error::Result;
use crate::search::engine::HybridSearchEngine;
use crate::search::types::{SearchOptions, SearchResponse};
use crate::store::SimilarityStore;

/// How many results each mode returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCounts {
    pub hybrid: usize,
    pub semantic: usize,
    pub keyword: usize,
}

/// Result-id overlap between the modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapCounts {
    /// Ids returned by both hybrid and semantic-only.
    pub hybrid_semantic: usize,
    /// Ids returned by both hybrid and keyword-only.
    pub hybrid_keyword: usize,
    /// Ids returned by both semantic-only and keyword-only.
    pub semantic_keyword: usize,
    /// Ids returned by all three modes.
    pub all_three: usize,
}

/// One query run through hybrid, semantic-only and keyword-only search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodComparison {
    /// The query all three runs shared.
    pub query: String,
    pub hybrid: SearchResponse,
    pub semantic: SearchResponse,
    pub keyword: SearchResponse,
    pub result_counts: ResultCounts,
    pub overlap: OverlapCounts,
}

impl<P: EmbeddingProvider, S: SimilarityStore> HybridSearchEngine<P, S> {
    /// Run the same query in all three modes and measure how much the
    /// result sets agree.
    ///
    /// The runs are sequential, so the three responses are directly
    /// comparable snapshots of the same store.
    pub async fn compare_methods(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<MethodComparison> {
        let hybrid = self.search(query, options).await?;
        let semantic = self.semantic_only(query, options).await?;
        let keyword = self.keyword_only(query, options).await?;

        let hybrid_ids: AHashSet<u64> = hybrid.results.iter().map(|m| m.id).collect();
        let semantic_ids: AHashSet<u64> = semantic.results.iter().map(|m| m.id).collect();
        let keyword_ids: AHashSet<u64> = keyword.results.iter().map(|m| m.id).collect();

        let overlap = OverlapCounts {
            hybrid_semantic: hybrid_ids.intersection(&semantic_ids).count(),
            hybrid_keyword: hybrid_ids.intersection(&keyword_ids).count(),
            semantic_keyword: semantic_ids.intersection(&keyword_ids).count(),
            all_three: hybrid_ids
                .iter()
                .filter(|id| semantic_ids.contains(id) && keyword_ids.contains(id))
                .count(),
        };
        let result_counts = ResultCounts {
            hybrid: hybrid.len(),
            semantic: semantic.len(),
            keyword: keyword.len(),
        };

        debug!(query = %query, ?result_counts, "method comparison complete");

        Ok(MethodComparison {
            query: query.to_string(),
            hybrid,
            semantic,
            keyword,
            result_counts,
            overlap,
        })
    }
}
