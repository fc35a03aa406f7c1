//! Store row, parameter and result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// Default similarity cutoff for pure vector search.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.7;
/// Default similarity cutoff for hybrid search.
pub const DEFAULT_HYBRID_THRESHOLD: f32 = 0.1;
/// Default result cap.
pub const DEFAULT_MATCH_COUNT: usize = 10;
/// Default semantic weight for hybrid search.
pub const DEFAULT_SEMANTIC_WEIGHT: f32 = 0.6;
/// Default keyword weight for hybrid search.
pub const DEFAULT_KEYWORD_WEIGHT: f32 = 0.4;

/// A chunk as persisted by a store, with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredChunk {
    pub id: u64,
    pub review_id: String,
    pub chunk_text: String,
    pub chunk_index: usize,
    pub stars: u8,
    pub embedding: Vector,
}

/// Parameters for a pure vector similarity search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilaritySearchParams {
    pub query_embedding: Vector,
    pub match_threshold: f32,
    pub match_count: usize,
}

impl SimilaritySearchParams {
    /// Create parameters with the default threshold and count.
    pub fn new(query_embedding: Vector) -> Self {
        Self {
            query_embedding,
            match_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            match_count: DEFAULT_MATCH_COUNT,
        }
    }

    /// Set the similarity cutoff.
    pub fn with_threshold(mut self, match_threshold: f32) -> Self {
        self.match_threshold = match_threshold;
        self
    }

    /// Set the result cap.
    pub fn with_count(mut self, match_count: usize) -> Self {
        self.match_count = match_count;
        self
    }
}

/// Parameters for a hybrid search call.
///
/// The store blends the two signals itself: the weights travel with the
/// call rather than being applied client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridSearchParams {
    pub query_embedding: Vector,
    pub query_text: String,
    pub semantic_weight: f32,
    pub keyword_weight: f32,
    pub match_threshold: f32,
    pub match_count: usize,
}

impl HybridSearchParams {
    /// Create parameters with default weights, threshold and count.
    pub fn new<T: Into<String>>(query_embedding: Vector, query_text: T) -> Self {
        Self {
            query_embedding,
            query_text: query_text.into(),
            semantic_weight: DEFAULT_SEMANTIC_WEIGHT,
            keyword_weight: DEFAULT_KEYWORD_WEIGHT,
            match_threshold: DEFAULT_HYBRID_THRESHOLD,
            match_count: DEFAULT_MATCH_COUNT,
        }
    }

    /// Set both blend weights.
    pub fn with_weights(mut self, semantic_weight: f32, keyword_weight: f32) -> Self {
        self.semantic_weight = semantic_weight;
        self.keyword_weight = keyword_weight;
        self
    }

    /// Set the semantic similarity cutoff.
    pub fn with_threshold(mut self, match_threshold: f32) -> Self {
        self.match_threshold = match_threshold;
        self
    }

    /// Set the result cap.
    pub fn with_count(mut self, match_count: usize) -> Self {
        self.match_count = match_count;
        self
    }
}

/// One row returned by a vector similarity search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarMatch {
    pub review_id: String,
    pub chunk_text: String,
    pub stars: u8,
    pub similarity: f32,
}

/// One row returned by a hybrid search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridMatch {
    pub id: u64,
    pub review_id: String,
    pub chunk_text: String,
    pub stars: u8,
    pub semantic_similarity: f32,
    pub keyword_rank: f32,
    pub hybrid_score: f32,
}

/// Aggregate statistics over the stored chunks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_chunks: usize,
    pub unique_reviews: usize,
    /// Chunk counts keyed by star rating.
    pub star_distribution: BTreeMap<u8, usize>,
    pub avg_chunks_per_review: f64,
    /// Chunks with text available to the keyword signal.
    pub keyword_indexed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_params_defaults() {
        let params = SimilaritySearchParams::new(Vector::new(vec![1.0, 0.0]));
        assert_eq!(params.match_threshold, DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(params.match_count, DEFAULT_MATCH_COUNT);

        let params = params.with_threshold(0.25).with_count(3);
        assert_eq!(params.match_threshold, 0.25);
        assert_eq!(params.match_count, 3);
    }

    #[test]
    fn test_hybrid_params_builder() {
        let params = HybridSearchParams::new(Vector::new(vec![1.0, 0.0]), "fresh bread")
            .with_weights(1.0, 0.0)
            .with_threshold(0.2)
            .with_count(5);

        assert_eq!(params.query_text, "fresh bread");
        assert_eq!(params.semantic_weight, 1.0);
        assert_eq!(params.keyword_weight, 0.0);
        assert_eq!(params.match_threshold, 0.2);
        assert_eq!(params.match_count, 5);
    }

    #[test]
    fn test_hybrid_params_serialize() {
        let params = HybridSearchParams::new(Vector::new(vec![0.5]), "tacos");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["query_text"], "tacos");
        assert_eq!(json["semantic_weight"], 0.6f32);
    }
}
