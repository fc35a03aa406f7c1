//! Similarity store seam.
//!
//! The store holds embedded chunks and answers two retrieval calls: a
//! pure vector similarity search and a hybrid search whose blended
//! semantic/keyword score is computed store-side. Real deployments put a
//! remote vector database behind [`SimilarityStore`]; the bundled
//! [`MemoryStore`] implements the same contract in process for demos and
//! tests.
//!
//! # Module Structure
//!
//! - `types`: Rows, search parameters and result types
//! - `memory`: Process-local in-memory implementation

pub mod memory;
pub mod types;

use async_trait::async_trait;

use crate::chunk::ChunkRecord;
use crate::error::Result;
use crate::vector::Vector;

pub use self::memory::MemoryStore;
pub use self::types::{
    HybridMatch, HybridSearchParams, SimilarMatch, SimilaritySearchParams, StoreStats, StoredChunk,
};

/// Storage and retrieval for embedded review chunks.
///
/// Both search calls return rows sorted by their score, best first, and
/// capped at the requested count. Implementations report failures as
/// errors; an empty result set always means "nothing qualified".
#[async_trait]
pub trait SimilarityStore: Send + Sync {
    /// Insert a single chunk, returning the store-assigned row id.
    async fn insert_chunk(&self, record: &ChunkRecord, embedding: &Vector) -> Result<u64>;

    /// Insert a batch of chunks with their embeddings.
    ///
    /// The two slices must pair up one to one. Returns the number of rows
    /// inserted.
    async fn insert_chunks(&self, records: &[ChunkRecord], embeddings: &[Vector]) -> Result<usize>;

    /// Vector similarity search over all stored chunks.
    async fn similarity_search(&self, params: SimilaritySearchParams) -> Result<Vec<SimilarMatch>>;

    /// Hybrid search blending vector similarity and keyword match rank.
    async fn hybrid_search(&self, params: HybridSearchParams) -> Result<Vec<HybridMatch>>;

    /// Total number of stored chunks.
    async fn chunk_count(&self) -> Result<usize>;

    /// All chunks of one review, in chunk index order.
    async fn chunks_by_review(&self, review_id: &str) -> Result<Vec<StoredChunk>>;

    /// A few stored chunks for inspection.
    async fn sample_chunks(&self, limit: usize) -> Result<Vec<StoredChunk>>;

    /// Remove every stored chunk, returning how many were removed.
    async fn delete_all(&self) -> Result<usize>;

    /// Aggregate statistics over the stored data.
    async fn stats(&self) -> Result<StoreStats>;
}
