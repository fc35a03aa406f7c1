//! Command line argument parsing for the xyston CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::chunk::chunker::{DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
use crate::search::SearchOptions;
use crate::store::types::{
    DEFAULT_HYBRID_THRESHOLD, DEFAULT_KEYWORD_WEIGHT, DEFAULT_MATCH_COUNT, DEFAULT_SEMANTIC_WEIGHT,
};

/// Xyston - hybrid semantic and keyword search over text reviews
#[derive(Parser, Debug, Clone)]
#[command(name = "xyston")]
#[command(about = "Hybrid semantic and keyword search over text reviews")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct XystonArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl XystonArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Ingest the bundled sample reviews and run a demo search
    Demo(DemoArgs),

    /// Search reviews with the hybrid engine
    Search(SearchArgs),

    /// Compare hybrid, semantic-only and keyword-only results
    Compare(CompareArgs),

    /// Sweep the semantic/keyword weight balance for a query
    Sweep(SweepArgs),

    /// Show how a query is cleaned, analyzed and enhanced
    Analyze(AnalyzeArgs),

    /// Chunk a text file and show the pieces
    Chunk(ChunkArgs),

    /// Ingest reviews and show store statistics
    Stats(StatsArgs),
}

/// Arguments for the demo run
#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {
    /// Query to run against the sample reviews
    #[arg(long, default_value = "delicious food with great service")]
    pub query: String,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Reviews file (JSONL), defaults to the bundled samples
    #[arg(long, value_name = "FILE", env = "XYSTON_DATA")]
    pub data: Option<PathBuf>,

    /// Weight of the semantic similarity signal
    #[arg(long, default_value_t = DEFAULT_SEMANTIC_WEIGHT)]
    pub semantic_weight: f32,

    /// Weight of the keyword rank signal
    #[arg(long, default_value_t = DEFAULT_KEYWORD_WEIGHT)]
    pub keyword_weight: f32,

    /// Minimum semantic similarity for that signal to count
    #[arg(long, default_value_t = DEFAULT_HYBRID_THRESHOLD)]
    pub threshold: f32,

    /// Maximum number of results to return
    #[arg(short, long, default_value_t = DEFAULT_MATCH_COUNT)]
    pub count: usize,

    /// Skip synonym and category enhancement
    #[arg(long)]
    pub no_enhance: bool,

    /// Search mode
    #[arg(short = 'm', long, default_value = "hybrid")]
    pub mode: SearchMode,
}

impl SearchArgs {
    /// Search options assembled from the flags.
    pub fn options(&self) -> SearchOptions {
        SearchOptions::default()
            .with_weights(self.semantic_weight, self.keyword_weight)
            .with_threshold(self.threshold)
            .with_count(self.count)
            .with_enhancement(!self.no_enhance)
    }
}

/// Search modes available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Blend the semantic and keyword signals
    Hybrid,
    /// Semantic similarity only
    Semantic,
    /// Keyword rank only
    Keyword,
}

/// Arguments for method comparison
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Reviews file (JSONL), defaults to the bundled samples
    #[arg(long, value_name = "FILE", env = "XYSTON_DATA")]
    pub data: Option<PathBuf>,
}

/// Arguments for the weight sweep
#[derive(Parser, Debug, Clone)]
pub struct SweepArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Reviews file (JSONL), defaults to the bundled samples
    #[arg(long, value_name = "FILE", env = "XYSTON_DATA")]
    pub data: Option<PathBuf>,

    /// Number of sweep steps between fully-keyword and fully-semantic
    #[arg(long, default_value = "10")]
    pub steps: usize,
}

/// Arguments for query analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for chunking a text file
#[derive(Parser, Debug, Clone)]
pub struct ChunkArgs {
    /// Text file to chunk
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum chunk size in characters
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Overlap carried between consecutive chunks
    #[arg(long, default_value_t = DEFAULT_OVERLAP)]
    pub overlap: usize,
}

/// Arguments for store statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Reviews file (JSONL), defaults to the bundled samples
    #[arg(long, value_name = "FILE", env = "XYSTON_DATA")]
    pub data: Option<PathBuf>,
}

/// Output formats for the CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
