//! Query processing.
//!
//! Turns a raw user query into the structured form the search engine
//! consumes: cleaned text, a semantic-search variant enhanced with
//! synonyms and category vocabulary, an extracted keyword list, and a
//! lightweight analysis (category, sentiment, intent).
//!
//! # Module Structure
//!
//! - `lexicon`: Static domain vocabulary tables
//! - `analysis`: Analysis result types
//! - `processor`: The processing pipeline

pub mod analysis;
pub mod lexicon;
pub mod processor;

pub use self::analysis::{Category, Intent, QueryAnalysis, Sentiment};
pub use self::processor::{ProcessedQuery, QueryProcessor};
