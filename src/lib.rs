//! # Xyston
//!
//! A hybrid search harness for text reviews: semantic vector similarity
//! blended with keyword occurrence ranking over chunked review text.
//!
//! ## Features
//!
//! - Sentence-aware text chunking with overlap
//! - Query cleaning, enhancement and lightweight analysis
//! - Pluggable embedding providers and similarity stores
//! - Store-side hybrid scoring with tunable weights
//! - Method comparison and weight sweep diagnostics
//! - In-process memory store for demos and tests

pub mod chunk;
pub mod cli;
pub mod dataset;
pub mod embedding;
pub mod error;
pub mod ingest;
pub mod query;
pub mod review;
pub mod search;
pub mod store;
pub mod vector;

pub mod prelude {
    pub use crate::chunk::{ChunkRecord, TextChunker};
    pub use crate::embedding::{EmbeddingProvider, HashingEmbedder};
    pub use crate::error::{Result, XystonError};
    pub use crate::ingest::IngestPipeline;
    pub use crate::query::QueryProcessor;
    pub use crate::review::Review;
    pub use crate::search::{HybridSearchEngine, SearchOptions, SearchResponse};
    pub use crate::store::{MemoryStore, SimilarityStore};
    pub use crate::vector::Vector;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
