//! Command execution logic.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::chunk::{ChunkStats, TextChunker};
use crate::cli::args::{
    AnalyzeArgs, ChunkArgs, Command, CompareArgs, DemoArgs, SearchArgs, SearchMode, StatsArgs,
    SweepArgs, XystonArgs,
};
use crate::cli::output::{ChunkingResult, DemoResult, StoreStatsResult, output_result};
use crate::dataset;
use crate::embedding::HashingEmbedder;
use crate::error::Result;
use crate::ingest::{IngestConfig, IngestPipeline, IngestReport};
use crate::query::QueryProcessor;
use crate::review::Review;
use crate::search::{HybridSearchEngine, SearchOptions};
use crate::store::{MemoryStore, SimilarityStore};

/// Engine over the bundled in-process embedder and store.
type DemoEngine = HybridSearchEngine<HashingEmbedder, MemoryStore>;

/// Execute the given command.
pub async fn execute_command(args: XystonArgs) -> Result<()> {
    match args.command.clone() {
        Command::Demo(demo_args) => execute_demo(demo_args, &args).await,
        Command::Search(search_args) => execute_search(search_args, &args).await,
        Command::Compare(compare_args) => execute_compare(compare_args, &args).await,
        Command::Sweep(sweep_args) => execute_sweep(sweep_args, &args).await,
        Command::Analyze(analyze_args) => execute_analyze(analyze_args, &args),
        Command::Chunk(chunk_args) => execute_chunk(chunk_args, &args),
        Command::Stats(stats_args) => execute_stats(stats_args, &args).await,
    }
}

/// Load the review corpus for a command.
fn load_reviews(data: Option<&Path>, args: &XystonArgs) -> Result<Vec<Review>> {
    match data {
        Some(path) => {
            if args.verbosity() > 0 {
                println!("Loading reviews from {}", path.display());
            }
            dataset::load_jsonl(path)
        }
        None => Ok(dataset::sample_reviews()),
    }
}

/// Build a fresh engine and ingest the corpus into it.
///
/// Every invocation works against its own in-process store, so the
/// corpus is ingested on each run. The bundled embedder runs locally,
/// so the batch pause is dropped.
async fn prepare_engine(
    data: Option<&Path>,
    args: &XystonArgs,
) -> Result<(DemoEngine, IngestReport)> {
    let reviews = load_reviews(data, args)?;

    let provider = Arc::new(HashingEmbedder::new());
    let store = Arc::new(MemoryStore::new());

    let pipeline = IngestPipeline::new(provider.clone(), store.clone())
        .with_config(IngestConfig::default().with_pause(Duration::ZERO));
    let report = pipeline.ingest(&reviews).await?;

    if args.verbosity() > 1 {
        println!(
            "Ingested {} chunks from {} reviews",
            report.chunks_stored, report.reviews_in
        );
    }

    Ok((HybridSearchEngine::new(provider, store), report))
}

/// Execute the demo command.
async fn execute_demo(demo_args: DemoArgs, args: &XystonArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("Running hybrid search demo");
    }

    let (engine, report) = prepare_engine(None, args).await?;
    let response = engine
        .search(&demo_args.query, &SearchOptions::default())
        .await?;

    let result = DemoResult { report, response };
    output_result("Demo complete", &result, args)
}

/// Execute the search command.
async fn execute_search(search_args: SearchArgs, args: &XystonArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("Searching for: {}", search_args.query);
    }

    let (engine, _report) = prepare_engine(search_args.data.as_deref(), args).await?;
    let options = search_args.options();
    let response = match search_args.mode {
        SearchMode::Hybrid => engine.search(&search_args.query, &options).await?,
        SearchMode::Semantic => engine.semantic_only(&search_args.query, &options).await?,
        SearchMode::Keyword => engine.keyword_only(&search_args.query, &options).await?,
    };

    output_result("Search complete", &response, args)
}

/// Execute the compare command.
async fn execute_compare(compare_args: CompareArgs, args: &XystonArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("Comparing search methods for: {}", compare_args.query);
    }

    let (engine, _report) = prepare_engine(compare_args.data.as_deref(), args).await?;
    let comparison = engine
        .compare_methods(&compare_args.query, &SearchOptions::default())
        .await?;

    output_result("Comparison complete", &comparison, args)
}

/// Execute the sweep command.
async fn execute_sweep(sweep_args: SweepArgs, args: &XystonArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!(
            "Sweeping weight combinations for: {} ({} steps)",
            sweep_args.query, sweep_args.steps
        );
    }

    let (engine, _report) = prepare_engine(sweep_args.data.as_deref(), args).await?;
    let sweep = engine
        .find_optimal_weights(&sweep_args.query, sweep_args.steps)
        .await?;

    output_result("Sweep complete", &sweep, args)
}

/// Execute the analyze command.
fn execute_analyze(analyze_args: AnalyzeArgs, args: &XystonArgs) -> Result<()> {
    let processed = QueryProcessor::new().process(&analyze_args.query);
    output_result("Query analysis complete", &processed, args)
}

/// Execute the chunk command.
fn execute_chunk(chunk_args: ChunkArgs, args: &XystonArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("Chunking {}", chunk_args.file.display());
    }

    let text = std::fs::read_to_string(&chunk_args.file)?;
    let chunker = TextChunker::new()
        .with_chunk_size(chunk_args.chunk_size)
        .with_overlap(chunk_args.overlap);
    let chunks = chunker.chunk_text(&text);
    let stats = ChunkStats::from_texts(&chunks);

    let result = ChunkingResult { chunks, stats };
    output_result("Chunking complete", &result, args)
}

/// Execute the stats command.
async fn execute_stats(stats_args: StatsArgs, args: &XystonArgs) -> Result<()> {
    let (engine, report) = prepare_engine(stats_args.data.as_deref(), args).await?;
    let stats = engine.store().stats().await?;

    let result = StoreStatsResult { report, stats };
    output_result("Store statistics", &result, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> XystonArgs {
        XystonArgs::try_parse_from(argv).unwrap()
    }

    #[tokio::test]
    async fn test_demo_command_runs() {
        let args = parse(&["xyston", "-q", "-f", "json", "demo"]);
        let result = execute_command(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_search_command_runs() {
        let args = parse(&["xyston", "-q", "-f", "json", "search", "fresh pasta"]);
        let result = execute_command(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_search_command_keyword_mode() {
        let args = parse(&[
            "xyston", "-q", "-f", "json", "search", "pasta", "--mode", "keyword",
        ]);
        let result = execute_command(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_search_command_rejects_bad_weights() {
        let args = parse(&[
            "xyston",
            "-q",
            "search",
            "pasta",
            "--semantic-weight",
            "0.9",
            "--keyword-weight",
            "0.9",
        ]);
        let result = execute_command(args).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_compare_command_runs() {
        let args = parse(&["xyston", "-q", "-f", "json", "compare", "great service"]);
        let result = execute_command(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_sweep_command_runs() {
        let args = parse(&[
            "xyston", "-q", "-f", "json", "sweep", "good food", "--steps", "2",
        ]);
        let result = execute_command(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_sweep_command_rejects_zero_steps() {
        let args = parse(&["xyston", "-q", "sweep", "good food", "--steps", "0"]);
        let result = execute_command(args).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_analyze_command_runs() {
        let args = parse(&["xyston", "-q", "-f", "json", "analyze", "best pizza"]);
        let result = execute_command(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_chunk_command_missing_file() {
        let args = parse(&["xyston", "-q", "chunk", "/does/not/exist.txt"]);
        let result = execute_command(args).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_stats_command_runs() {
        let args = parse(&["xyston", "-q", "-f", "json", "stats"]);
        let result = execute_command(args).await;
        assert!(result.is_ok());
    }
}
