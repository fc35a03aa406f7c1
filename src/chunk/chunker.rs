//! Sentence-boundary chunking with overlap.
//!
//! The chunker cleans raw review text, splits it on sentence punctuation,
//! then greedily packs sentences into buffers bounded by a character
//! budget. Consecutive chunks share a short word-level overlap so that a
//! sentence fragment near a boundary stays searchable from either side.
//!
//! # Examples
//!
//! ```
//! use xyston::chunk::TextChunker;
//!
//! let chunker = TextChunker::new();
//! let chunks = chunker.chunk_text("Short review text.");
//! assert_eq!(chunks.len(), 1);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::chunk::record::ChunkRecord;
use crate::review::Review;

/// Default character budget per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 500;
/// Default overlap parameter; any value above zero enables overlap seeding.
pub const DEFAULT_OVERLAP: usize = 100;

/// Chunks with a trimmed length at or below this are dropped as noise.
const MIN_CHUNK_CHARS: usize = 50;
/// Sentence units at or below this length are discarded after splitting.
const MIN_SENTENCE_CHARS: usize = 10;
/// Trailing words of an emitted buffer carried into the next one.
const OVERLAP_WORD_COUNT: usize = 10;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^\w\s.,!?;:()\-'"]+"#).expect("whitelist pattern"));
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s+").expect("sentence pattern"));

/// Splits review text into overlapping, sentence-aligned chunks.
#[derive(Debug, Clone)]
pub struct TextChunker {
    /// Maximum character length of a chunk buffer.
    chunk_size: usize,
    /// Overlap switch: zero disables seeding entirely.
    overlap: usize,
}

impl Default for TextChunker {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl TextChunker {
    /// Create a chunker with the default budget and overlap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk character budget.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the overlap parameter (0 disables overlap seeding).
    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// The configured chunk character budget.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The configured overlap parameter.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Split text into chunks.
    ///
    /// Whitespace-only input yields no chunks. Text that fits the budget
    /// after cleaning comes back as a single chunk, even below the
    /// minimum-length floor that multi-chunk output enforces.
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let cleaned = self.clean_text(text);
        if cleaned.chars().count() <= self.chunk_size {
            return vec![cleaned];
        }

        let sentences = self.split_sentences(&cleaned);
        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_len = 0usize;

        for sentence in &sentences {
            let sentence_len = sentence.chars().count();

            if buffer_len + sentence_len > self.chunk_size && !buffer.is_empty() {
                let trimmed = buffer.trim();
                if trimmed.chars().count() > MIN_CHUNK_CHARS {
                    chunks.push(trimmed.to_string());
                }

                if !chunks.is_empty() && self.overlap > 0 {
                    // Seed the next buffer with the tail of the previous one
                    // so boundary phrases remain searchable in both chunks.
                    let words: Vec<&str> = buffer.split_whitespace().collect();
                    let seed_start = words.len().saturating_sub(OVERLAP_WORD_COUNT);
                    let seed = words[seed_start..].join(" ");
                    buffer = format!("{seed} {sentence}");
                } else {
                    buffer = sentence.clone();
                }
                buffer_len = buffer.chars().count();
            } else if buffer.is_empty() {
                buffer = sentence.clone();
                buffer_len = sentence_len;
            } else {
                buffer.push(' ');
                buffer.push_str(sentence);
                buffer_len += sentence_len + 1;
            }
        }

        let trimmed = buffer.trim();
        if trimmed.chars().count() > MIN_CHUNK_CHARS {
            chunks.push(trimmed.to_string());
        }

        chunks
    }

    /// Chunk one review into typed records.
    ///
    /// Reviews without an id get a deterministic fallback derived from a
    /// CRC-32 of the text, so re-ingesting the same data maps to the same
    /// review identity.
    pub fn chunk_review(&self, review: &Review) -> Vec<ChunkRecord> {
        let review_id = match &review.review_id {
            Some(id) => id.clone(),
            None => fallback_review_id(&review.text),
        };

        self.chunk_text(&review.text)
            .into_iter()
            .enumerate()
            .map(|(index, chunk_text)| {
                ChunkRecord::new(review_id.clone(), chunk_text, index, review.stars)
            })
            .collect()
    }

    /// Chunk a whole slice of reviews, logging progress periodically.
    pub fn chunk_reviews(&self, reviews: &[Review]) -> Vec<ChunkRecord> {
        let mut records = Vec::new();
        for (i, review) in reviews.iter().enumerate() {
            if i % 100 == 0 {
                debug!(review = i, total = reviews.len(), "chunking reviews");
            }
            records.extend(self.chunk_review(review));
        }
        records
    }

    /// Normalize raw text for chunking.
    ///
    /// Curly quotes are straightened first; the character whitelist would
    /// otherwise discard them. Disallowed runs collapse to a single space
    /// and whitespace is normalized in one final pass.
    fn clean_text(&self, text: &str) -> String {
        let text = text
            .replace(['\u{2018}', '\u{2019}'], "'")
            .replace(['\u{201C}', '\u{201D}'], "\"");
        let text = DISALLOWED.replace_all(&text, " ");
        let text = WHITESPACE.replace_all(&text, " ");
        text.trim().to_string()
    }

    /// Split cleaned text into sentence units, discarding short noise.
    fn split_sentences(&self, text: &str) -> Vec<String> {
        SENTENCE_BOUNDARY
            .split(text)
            .map(str::trim)
            .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
            .map(|s| s.to_string())
            .collect()
    }
}

/// Deterministic id for reviews that arrive without one.
fn fallback_review_id(text: &str) -> String {
    format!("review_{:08x}", crc32fast::hash(text.as_bytes()))
}
