//! Embedding provider trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::vector::Vector;

/// Converts text into fixed-dimension embedding vectors.
///
/// Implementations must report failures as errors; a zero vector is never
/// a failure sentinel. Every returned vector has exactly [`dimension`]
/// components.
///
/// [`dimension`]: EmbeddingProvider::dimension
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text.
    async fn embed(&self, text: &str) -> Result<Vector>;

    /// Embed a batch of texts.
    ///
    /// The default implementation embeds sequentially; providers with a
    /// native batch endpoint should override it.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vector>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }

    /// Output dimension, fixed for the lifetime of the provider.
    fn dimension(&self) -> usize;

    /// Provider name for logs and reports.
    fn name(&self) -> &str {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEmbedder {
        dimension: usize,
    }

    #[async_trait]
    impl EmbeddingProvider for FixedEmbedder {
        async fn embed(&self, text: &str) -> Result<Vector> {
            let value = text.len() as f32;
            Ok(Vector::new(vec![value; self.dimension]))
        }

        fn dimension(&self) -> usize {
            self.dimension
        }
    }

    #[test]
    fn test_default_batch_embeds_sequentially() {
        let embedder = FixedEmbedder { dimension: 3 };
        let vectors = tokio_test::block_on(embedder.embed_batch(&["a", "bb"])).unwrap();

        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].data, vec![1.0, 1.0, 1.0]);
        assert_eq!(vectors[1].data, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_default_name() {
        let embedder = FixedEmbedder { dimension: 3 };
        assert_eq!(embedder.name(), "unknown");
    }
}
