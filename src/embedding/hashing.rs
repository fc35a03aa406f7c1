//! Deterministic feature-hashing embedder.
//!
//! A bag-of-words embedder that hashes each token into a fixed number of
//! signed buckets and L2-normalizes the result. It carries no semantic
//! model; overlapping vocabularies simply land in overlapping buckets,
//! which is enough structure for the demo binary and for tests that need
//! a real [`EmbeddingProvider`] without network or model weights.

use ahash::RandomState;
use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

use crate::embedding::provider::EmbeddingProvider;
use crate::error::{Result, XystonError};
use crate::vector::Vector;

/// Default output dimension, matching common sentence-embedding models.
pub const DEFAULT_DIMENSION: usize = 384;

// Fixed seeds keep the hash, and therefore every embedding, stable
// across processes.
const HASH_SEEDS: (u64, u64, u64, u64) = (
    0x00c0_ffee_0000_0001,
    0x00c0_ffee_0000_0002,
    0x00c0_ffee_0000_0003,
    0x00c0_ffee_0000_0004,
);

/// Feature-hashing bag-of-words embedder.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
    hasher: RandomState,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            hasher: RandomState::with_seeds(HASH_SEEDS.0, HASH_SEEDS.1, HASH_SEEDS.2, HASH_SEEDS.3),
        }
    }
}

impl HashingEmbedder {
    /// Create an embedder with the default dimension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an embedder with a custom dimension.
    pub fn with_dimension(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(XystonError::configuration(
                "embedding dimension must be greater than zero",
            ));
        }
        Ok(Self {
            dimension,
            ..Self::default()
        })
    }

    fn embed_tokens(&self, text: &str) -> Vector {
        let mut data = vec![0.0f32; self.dimension];

        for token in text.unicode_words() {
            let token = token.to_lowercase();
            let hash = self.hasher.hash_one(token.as_str());
            let bucket = (hash % self.dimension as u64) as usize;
            let sign = if hash & (1 << 63) == 0 { 1.0 } else { -1.0 };
            data[bucket] += sign;
        }

        let mut vector = Vector::new(data);
        vector.normalize();
        vector
    }
}

#[async_trait]
impl EmbeddingProvider for HashingEmbedder {
    /// Embed one text.
    ///
    /// Token-free input (empty or punctuation-only text) embeds to the
    /// zero vector; that is its true representation here, not a failure
    /// sentinel.
    async fn embed(&self, text: &str) -> Result<Vector> {
        Ok(self.embed_tokens(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "hashing-bow"
    }
}
