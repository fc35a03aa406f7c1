//! Text embedding support.
//!
//! This module provides a trait-based seam for converting text to vector
//! embeddings. The crate does not bundle a neural model: real deployments
//! plug in their provider of choice behind [`EmbeddingProvider`], while
//! the bundled [`HashingEmbedder`] gives demos and tests a deterministic,
//! dependency-free stand-in with the same contract.
//!
//! # Custom Implementation
//!
//! ```
//! use async_trait::async_trait;
//! use xyston::embedding::EmbeddingProvider;
//! use xyston::error::Result;
//! use xyston::vector::Vector;
//!
//! struct MyEmbedder {
//!     dimension: usize,
//! }
//!
//! #[async_trait]
//! impl EmbeddingProvider for MyEmbedder {
//!     async fn embed(&self, text: &str) -> Result<Vector> {
//!         // Your custom implementation
//!         Ok(Vector::new(vec![0.0; self.dimension]))
//!     }
//!
//!     fn dimension(&self) -> usize {
//!         self.dimension
//!     }
//! }
//! ```

pub mod hashing;
pub mod provider;

pub use self::hashing::HashingEmbedder;
pub use self::provider::EmbeddingProvider;
