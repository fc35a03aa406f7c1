//! Typed chunk records.

use serde::{Deserialize, Serialize};

/// One chunk of a review, ready for embedding and insertion.
///
/// `chunk_index` is zero-based and contiguous within a review. `stars`
/// carries the parent review's rating so result rows can surface it
/// without a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Identifier of the parent review.
    pub review_id: String,
    /// The chunk text itself.
    pub chunk_text: String,
    /// Position of this chunk within its review, starting at 0.
    pub chunk_index: usize,
    /// Star rating of the parent review, 1-5.
    pub stars: u8,
}

impl ChunkRecord {
    /// Create a new chunk record.
    pub fn new<I: Into<String>, T: Into<String>>(
        review_id: I,
        chunk_text: T,
        chunk_index: usize,
        stars: u8,
    ) -> Self {
        Self {
            review_id: review_id.into(),
            chunk_text: chunk_text.into(),
            chunk_index,
            stars,
        }
    }

    /// Character length of the chunk text.
    pub fn char_len(&self) -> usize {
        self.chunk_text.chars().count()
    }
}
