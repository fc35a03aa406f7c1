//! Aggregate statistics over a set of chunk records.

use serde::{Deserialize, Serialize};

use crate::chunk::record::ChunkRecord;

/// Length statistics for a chunked dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkStats {
    pub total_chunks: usize,
    pub avg_chunk_length: f64,
    pub min_chunk_length: usize,
    pub max_chunk_length: usize,
    pub total_characters: usize,
}

impl ChunkStats {
    /// Compute stats over chunk records. Empty input yields all zeros.
    pub fn from_chunks(chunks: &[ChunkRecord]) -> Self {
        Self::from_lengths(chunks.iter().map(|c| c.char_len()).collect())
    }

    /// Compute stats over bare chunk texts.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Self::from_lengths(texts.iter().map(|t| t.as_ref().chars().count()).collect())
    }

    fn from_lengths(lengths: Vec<usize>) -> Self {
        if lengths.is_empty() {
            return Self::default();
        }

        let total_characters: usize = lengths.iter().sum();
        Self {
            total_chunks: lengths.len(),
            avg_chunk_length: total_characters as f64 / lengths.len() as f64,
            min_chunk_length: lengths.iter().copied().min().unwrap_or(0),
            max_chunk_length: lengths.iter().copied().max().unwrap_or(0),
            total_characters,
        }
    }
}
