//! In-memory similarity store for demos and tests.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};
use async_trait::async_trait;
use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::chunk::ChunkRecord;
use crate::error::{Result, XystonError};
use crate::store::SimilarityStore;
use crate::store::types::{
    HybridMatch, HybridSearchParams, SimilarMatch, SimilaritySearchParams, StoreStats, StoredChunk,
};
use crate::vector::Vector;

/// Row scans at or above this size fan out across threads.
const PARALLEL_SCAN_THRESHOLD: usize = 100;

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<StoredChunk>,
    next_id: u64,
    /// Fixed by the first insert; later inserts and queries must agree.
    dimension: Option<usize>,
}

impl Inner {
    fn insert(&mut self, record: &ChunkRecord, embedding: &Vector) -> Result<u64> {
        if !(1..=5).contains(&record.stars) {
            return Err(XystonError::validation(format!(
                "stars must be between 1 and 5, got {}",
                record.stars
            )));
        }
        if !embedding.is_valid() {
            return Err(XystonError::validation(
                "embedding contains non-finite values",
            ));
        }
        match self.dimension {
            Some(dimension) => embedding.validate_dimension(dimension)?,
            None => self.dimension = Some(embedding.dimension()),
        }

        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(StoredChunk {
            id,
            review_id: record.review_id.clone(),
            chunk_text: record.chunk_text.clone(),
            chunk_index: record.chunk_index,
            stars: record.stars,
            embedding: embedding.clone(),
        });
        Ok(id)
    }
}

/// Process-local [`SimilarityStore`] backed by a row vector under a lock.
///
/// Hybrid scoring happens here, on the store side of the seam: a row
/// qualifies when its cosine similarity clears the threshold or any
/// query keyword appears in its text, and the blended score is
/// `semantic_weight * similarity + keyword_weight * min(rank, 1)`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SimilarityStore for MemoryStore {
    async fn insert_chunk(&self, record: &ChunkRecord, embedding: &Vector) -> Result<u64> {
        self.inner.write().insert(record, embedding)
    }

    async fn insert_chunks(&self, records: &[ChunkRecord], embeddings: &[Vector]) -> Result<usize> {
        if records.len() != embeddings.len() {
            return Err(XystonError::validation(format!(
                "{} records paired with {} embeddings",
                records.len(),
                embeddings.len()
            )));
        }

        let mut inner = self.inner.write();
        for (record, embedding) in records.iter().zip(embeddings.iter()) {
            inner.insert(record, embedding)?;
        }
        debug!(inserted = records.len(), total = inner.rows.len(), "stored chunk batch");
        Ok(records.len())
    }

    async fn similarity_search(&self, params: SimilaritySearchParams) -> Result<Vec<SimilarMatch>> {
        let inner = self.inner.read();
        if let Some(dimension) = inner.dimension {
            params.query_embedding.validate_dimension(dimension)?;
        }

        let score = |row: &StoredChunk| -> Result<Option<SimilarMatch>> {
            let similarity = params.query_embedding.cosine_similarity(&row.embedding)?;
            if similarity <= params.match_threshold {
                return Ok(None);
            }
            Ok(Some(SimilarMatch {
                review_id: row.review_id.clone(),
                chunk_text: row.chunk_text.clone(),
                stars: row.stars,
                similarity,
            }))
        };

        let scored: Vec<Option<SimilarMatch>> = if inner.rows.len() < PARALLEL_SCAN_THRESHOLD {
            inner.rows.iter().map(score).collect::<Result<Vec<_>>>()?
        } else {
            inner.rows.par_iter().map(score).collect::<Result<Vec<_>>>()?
        };

        let mut matches: Vec<SimilarMatch> = scored.into_iter().flatten().collect();
        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        matches.truncate(params.match_count);
        Ok(matches)
    }

    async fn hybrid_search(&self, params: HybridSearchParams) -> Result<Vec<HybridMatch>> {
        let inner = self.inner.read();
        if let Some(dimension) = inner.dimension {
            params.query_embedding.validate_dimension(dimension)?;
        }

        let query_tokens = distinct_tokens(&params.query_text);

        let score = |row: &StoredChunk| -> Result<Option<HybridMatch>> {
            let semantic = params.query_embedding.cosine_similarity(&row.embedding)?;
            let rank = keyword_rank(&query_tokens, &row.chunk_text);
            if semantic <= params.match_threshold && rank <= 0.0 {
                return Ok(None);
            }
            let hybrid_score =
                params.semantic_weight * semantic + params.keyword_weight * rank.min(1.0);
            Ok(Some(HybridMatch {
                id: row.id,
                review_id: row.review_id.clone(),
                chunk_text: row.chunk_text.clone(),
                stars: row.stars,
                semantic_similarity: semantic,
                keyword_rank: rank,
                hybrid_score,
            }))
        };

        let scored: Vec<Option<HybridMatch>> = if inner.rows.len() < PARALLEL_SCAN_THRESHOLD {
            inner.rows.iter().map(score).collect::<Result<Vec<_>>>()?
        } else {
            inner.rows.par_iter().map(score).collect::<Result<Vec<_>>>()?
        };

        let mut matches: Vec<HybridMatch> = scored.into_iter().flatten().collect();
        matches.sort_by(|a, b| {
            b.hybrid_score
                .partial_cmp(&a.hybrid_score)
                .unwrap_or(Ordering::Equal)
        });
        matches.truncate(params.match_count);

        debug!(
            scanned = inner.rows.len(),
            matched = matches.len(),
            "hybrid scan complete"
        );
        Ok(matches)
    }

    async fn chunk_count(&self) -> Result<usize> {
        Ok(self.inner.read().rows.len())
    }

    async fn chunks_by_review(&self, review_id: &str) -> Result<Vec<StoredChunk>> {
        let inner = self.inner.read();
        let mut chunks: Vec<StoredChunk> = inner
            .rows
            .iter()
            .filter(|row| row.review_id == review_id)
            .cloned()
            .collect();
        chunks.sort_by_key(|chunk| chunk.chunk_index);
        Ok(chunks)
    }

    async fn sample_chunks(&self, limit: usize) -> Result<Vec<StoredChunk>> {
        Ok(self.inner.read().rows.iter().take(limit).cloned().collect())
    }

    async fn delete_all(&self) -> Result<usize> {
        let mut inner = self.inner.write();
        let removed = inner.rows.len();
        // Ids keep counting up after a wipe, like a database sequence.
        inner.rows.clear();
        Ok(removed)
    }

    async fn stats(&self) -> Result<StoreStats> {
        let inner = self.inner.read();

        let mut star_distribution = BTreeMap::new();
        let mut reviews: AHashSet<&str> = AHashSet::new();
        let mut keyword_indexed = 0;
        for row in &inner.rows {
            *star_distribution.entry(row.stars).or_insert(0) += 1;
            reviews.insert(row.review_id.as_str());
            if !row.chunk_text.trim().is_empty() {
                keyword_indexed += 1;
            }
        }

        let unique_reviews = reviews.len();
        let avg_chunks_per_review = if unique_reviews > 0 {
            inner.rows.len() as f64 / unique_reviews as f64
        } else {
            0.0
        };

        Ok(StoreStats {
            total_chunks: inner.rows.len(),
            unique_reviews,
            star_distribution,
            avg_chunks_per_review,
            keyword_indexed,
        })
    }
}

/// Lowercased word tokens of a text.
fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

/// Unique query tokens in first-occurrence order.
fn distinct_tokens(text: &str) -> Vec<String> {
    let mut seen = AHashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Term-frequency rank of a row against the query tokens.
///
/// Sum over distinct query tokens of their frequency within the row's
/// tokens. Zero when either side has no tokens.
fn keyword_rank(query_tokens: &[String], row_text: &str) -> f32 {
    if query_tokens.is_empty() {
        return 0.0;
    }
    let row_tokens = tokenize(row_text);
    if row_tokens.is_empty() {
        return 0.0;
    }

    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    for token in &row_tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let total = row_tokens.len() as f32;
    query_tokens
        .iter()
        .map(|token| counts.get(token.as_str()).copied().unwrap_or(0) as f32 / total)
        .sum()
}
