//! Dense vector type and cosine similarity.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, XystonError};

/// A dense embedding vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// The vector components as floating point values.
    pub data: Vec<f32>,
}

impl Vector {
    /// Create a new vector with the given components.
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Create a zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            data: vec![0.0; dimension],
        }
    }

    /// Get the dimensionality of this vector.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Calculate the L2 norm (magnitude) of this vector.
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Normalize this vector to unit length. Zero vectors stay zero.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for value in &mut self.data {
                *value /= norm;
            }
        }
    }

    /// Get a normalized copy of this vector.
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        normalized.normalize();
        normalized
    }

    /// Validate that this vector has the expected dimension.
    pub fn validate_dimension(&self, expected_dim: usize) -> Result<()> {
        if self.data.len() != expected_dim {
            return Err(XystonError::validation(format!(
                "vector dimension mismatch: expected {}, got {}",
                expected_dim,
                self.data.len()
            )));
        }
        Ok(())
    }

    /// Check if this vector contains any NaN or infinite values.
    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }

    /// Cosine similarity to another vector, clamped to [0, 1].
    ///
    /// Zero vectors have no direction and score 0.0 against everything.
    pub fn cosine_similarity(&self, other: &Vector) -> Result<f32> {
        if self.data.len() != other.data.len() {
            return Err(XystonError::validation(format!(
                "vector dimensions must match: {} vs {}",
                self.data.len(),
                other.data.len()
            )));
        }

        let dot_product: f32 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(x, y)| x * y)
            .sum();
        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(0.0);
        }

        Ok((dot_product / (norm_a * norm_b)).clamp(0.0, 1.0))
    }

    /// Cosine similarities between a query and many vectors.
    ///
    /// Small inputs stay sequential; larger scans fan out across threads.
    pub fn batch_cosine_similarity(query: &Vector, vectors: &[&Vector]) -> Result<Vec<f32>> {
        if vectors.is_empty() {
            return Ok(Vec::new());
        }

        if vectors.len() < 100 {
            return vectors
                .iter()
                .map(|v| query.cosine_similarity(v))
                .collect::<Result<Vec<_>>>();
        }

        vectors
            .par_iter()
            .map(|v| query.cosine_similarity(v))
            .collect::<Result<Vec<_>>>()
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}
