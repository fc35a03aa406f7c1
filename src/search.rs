//! Hybrid search orchestration.
//!
//! [`HybridSearchEngine`] ties the crate together: it processes a raw
//! query, embeds the enhanced text through an [`EmbeddingProvider`],
//! and hands the blended-scoring work to a [`SimilarityStore`]. On top
//! of the core search it offers mode forcing (semantic-only,
//! keyword-only), side-by-side method comparison, and a weight sweep
//! for tuning the semantic/keyword balance.
//!
//! [`EmbeddingProvider`]: crate::embedding::EmbeddingProvider
//! [`SimilarityStore`]: crate::store::SimilarityStore

pub mod compare;
pub mod engine;
pub mod types;
pub mod weights;

pub use compare::{MethodComparison, OverlapCounts, ResultCounts};
pub use engine::HybridSearchEngine;
pub use types::{QueryInfo, SearchOptions, SearchResponse, SearchSettings, SearchTiming};
pub use weights::{WeightPoint, WeightSweep};
