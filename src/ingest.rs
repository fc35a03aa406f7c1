//! Batched ingestion of reviews into a similarity store.
//!
//! [`IngestPipeline`] chunks a set of reviews, embeds each batch of
//! chunks through an [`EmbeddingProvider`] and inserts the pairs into a
//! [`SimilarityStore`], pausing briefly between batches to stay polite
//! toward rate-limited providers. Ingestion is strict: the first
//! failure aborts the run and propagates.
//!
//! [`EmbeddingProvider`]: crate::embedding::EmbeddingProvider
//! [`SimilarityStore`]: crate::store::SimilarityStore

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chunk::{ChunkStats, TextChunker};
use crate::embedding::EmbeddingProvider;
use crate::error::{Result, XystonError};
use crate::review::Review;
use crate::store::SimilarityStore;

/// Default number of chunks embedded and stored per batch.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Default pause between consecutive batches.
pub const DEFAULT_BATCH_PAUSE: Duration = Duration::from_millis(250);

/// Batching knobs for ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Chunks per embed/store batch.
    pub batch_size: usize,
    /// Pause between batches; never applied after the last one.
    pub pause: Duration,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            pause: DEFAULT_BATCH_PAUSE,
        }
    }
}

impl IngestConfig {
    /// Set the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the inter-batch pause.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}

/// What one ingestion run accomplished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Reviews that went in.
    pub reviews_in: usize,
    /// Chunks the chunker produced.
    pub chunks_created: usize,
    /// Chunks the store accepted.
    pub chunks_stored: usize,
    /// Batches processed.
    pub batches: usize,
    /// Length distribution of the produced chunks.
    pub chunk_stats: ChunkStats,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Wall-clock milliseconds, rounded to 2 decimals.
    pub elapsed_ms: f64,
}

/// Chunk-embed-store pipeline over a provider and a store.
pub struct IngestPipeline<P, S> {
    provider: Arc<P>,
    store: Arc<S>,
    chunker: TextChunker,
    config: IngestConfig,
}

impl<P: EmbeddingProvider, S: SimilarityStore> IngestPipeline<P, S> {
    /// Create a pipeline with the default chunker and batching.
    pub fn new(provider: Arc<P>, store: Arc<S>) -> Self {
        Self {
            provider,
            store,
            chunker: TextChunker::default(),
            config: IngestConfig::default(),
        }
    }

    /// Replace the chunker.
    pub fn with_chunker(mut self, chunker: TextChunker) -> Self {
        self.chunker = chunker;
        self
    }

    /// Replace the batching configuration.
    pub fn with_config(mut self, config: IngestConfig) -> Self {
        self.config = config;
        self
    }

    /// Chunk, embed and store the given reviews.
    ///
    /// Batches run strictly one after another; any provider or store
    /// failure aborts the run with that error.
    pub async fn ingest(&self, reviews: &[Review]) -> Result<IngestReport> {
        if self.config.batch_size == 0 {
            return Err(XystonError::validation("batch_size must be at least 1"));
        }

        let started_at = Utc::now();
        let started = Instant::now();

        let chunks = self.chunker.chunk_reviews(reviews);
        let chunk_stats = ChunkStats::from_chunks(&chunks);
        info!(
            reviews = reviews.len(),
            chunks = chunks.len(),
            batch_size = self.config.batch_size,
            "starting ingest"
        );

        let total_batches = chunks.len().div_ceil(self.config.batch_size);
        let mut chunks_stored = 0;
        let mut batches = 0;
        for (index, batch) in chunks.chunks(self.config.batch_size).enumerate() {
            let texts: Vec<&str> = batch.iter().map(|c| c.chunk_text.as_str()).collect();
            let embeddings = self.provider.embed_batch(&texts).await?;
            chunks_stored += self.store.insert_chunks(batch, &embeddings).await?;
            batches += 1;
            debug!(batch = index + 1, total = total_batches, "batch stored");

            if index + 1 < total_batches && !self.config.pause.is_zero() {
                tokio::time::sleep(self.config.pause).await;
            }
        }

        let elapsed_ms = (started.elapsed().as_secs_f64() * 1000.0 * 100.0).round() / 100.0;
        info!(chunks_stored, batches, elapsed_ms, "ingest complete");

        Ok(IngestReport {
            reviews_in: reviews.len(),
            chunks_created: chunks.len(),
            chunks_stored,
            batches,
            chunk_stats,
            started_at,
            finished_at: Utc::now(),
            elapsed_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use crate::embedding::HashingEmbedder;
    use crate::store::MemoryStore;
    use crate::store::SimilarityStore;
    use crate::vector::Vector;

    fn review(id: &str, stars: u8) -> Review {
        Review::new(
            id,
            "The pasta was cooked perfectly and the sauce was rich. \
             Our server checked on us twice and kept the water topped up. \
             We will definitely come back for the tiramisu alone.",
            stars,
        )
    }

    #[tokio::test]
    async fn test_ingest_end_to_end() {
        let provider = Arc::new(HashingEmbedder::new());
        let store = Arc::new(MemoryStore::new());
        let pipeline = IngestPipeline::new(provider, Arc::clone(&store));

        let reviews = vec![review("r1", 5), review("r2", 3)];
        let report = pipeline.ingest(&reviews).await.unwrap();

        assert_eq!(report.reviews_in, 2);
        assert!(report.chunks_created >= 2);
        assert_eq!(report.chunks_stored, report.chunks_created);
        assert_eq!(report.batches, 1);
        assert_eq!(report.chunk_stats.total_chunks, report.chunks_created);
        assert!(report.finished_at >= report.started_at);
        assert!(report.elapsed_ms >= 0.0);

        assert_eq!(store.chunk_count().await.unwrap(), report.chunks_stored);
        assert_eq!(store.chunks_by_review("r1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ingest_batches_by_configured_size() {
        struct RecordingProvider {
            batch_sizes: Mutex<Vec<usize>>,
        }

        #[async_trait]
        impl EmbeddingProvider for RecordingProvider {
            async fn embed(&self, _text: &str) -> crate::error::Result<Vector> {
                Ok(Vector::new(vec![1.0, 0.0]))
            }

            async fn embed_batch(&self, texts: &[&str]) -> crate::error::Result<Vec<Vector>> {
                self.batch_sizes.lock().push(texts.len());
                Ok(texts.iter().map(|_| Vector::new(vec![1.0, 0.0])).collect())
            }

            fn dimension(&self) -> usize {
                2
            }
        }

        let provider = Arc::new(RecordingProvider {
            batch_sizes: Mutex::new(Vec::new()),
        });
        let store = Arc::new(MemoryStore::new());
        let pipeline = IngestPipeline::new(Arc::clone(&provider), store).with_config(
            IngestConfig::default()
                .with_batch_size(2)
                .with_pause(Duration::ZERO),
        );

        let reviews = vec![review("r1", 5), review("r2", 4), review("r3", 3)];
        let report = pipeline.ingest(&reviews).await.unwrap();

        assert_eq!(report.chunks_created, 3);
        assert_eq!(report.batches, 2);
        assert_eq!(*provider.batch_sizes.lock(), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_ingest_rejects_zero_batch_size() {
        let pipeline = IngestPipeline::new(
            Arc::new(HashingEmbedder::new()),
            Arc::new(MemoryStore::new()),
        )
        .with_config(IngestConfig::default().with_batch_size(0));

        let result = pipeline.ingest(&[review("r1", 5)]).await;
        assert!(matches!(result, Err(XystonError::Validation(_))));
    }

    #[tokio::test]
    async fn test_ingest_propagates_provider_failure() {
        struct FailingProvider;

        #[async_trait]
        impl EmbeddingProvider for FailingProvider {
            async fn embed(&self, _text: &str) -> crate::error::Result<Vector> {
                Err(XystonError::embedding("provider offline"))
            }

            fn dimension(&self) -> usize {
                2
            }
        }

        let store = Arc::new(MemoryStore::new());
        let pipeline = IngestPipeline::new(Arc::new(FailingProvider), Arc::clone(&store));

        let result = pipeline.ingest(&[review("r1", 5)]).await;
        assert!(matches!(result, Err(XystonError::Embedding(_))));
        assert_eq!(store.chunk_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ingest_empty_input() {
        let pipeline = IngestPipeline::new(
            Arc::new(HashingEmbedder::new()),
            Arc::new(MemoryStore::new()),
        );

        let report = pipeline.ingest(&[]).await.unwrap();
        assert_eq!(report.reviews_in, 0);
        assert_eq!(report.chunks_created, 0);
        assert_eq!(report.chunks_stored, 0);
        assert_eq!(report.batches, 0);
        assert_eq!(report.chunk_stats, ChunkStats::default());
    }

    #[test]
    fn test_ingest_config_defaults() {
        let config = IngestConfig::default();
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.pause, Duration::from_millis(250));
    }
}
