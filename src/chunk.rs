//! Review chunking.
//!
//! Splits raw review text into overlapping, sentence-aligned segments
//! bounded by a maximum character length, ready for embedding and storage.
//!
//! # Module Structure
//!
//! - `chunker`: The splitting algorithm
//! - `record`: Typed chunk records
//! - `stats`: Aggregate statistics over a chunk set

pub mod chunker;
pub mod record;
pub mod stats;

pub use self::chunker::TextChunker;
pub use self::record::ChunkRecord;
pub use self::stats::ChunkStats;
