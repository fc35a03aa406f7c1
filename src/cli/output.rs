//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::chunk::ChunkStats;
use crate::cli::args::{OutputFormat, XystonArgs};
use crate::error::Result;
use crate::ingest::IngestReport;
use crate::search::SearchResponse;
use crate::store::StoreStats;

/// Combined result for the demo command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoResult {
    pub report: IngestReport,
    pub response: SearchResponse,
}

/// Result structure for the chunk command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkingResult {
    pub chunks: Vec<String>,
    pub stats: ChunkStats,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreStatsResult {
    pub report: IngestReport,
    pub stats: StoreStats,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &XystonArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &XystonArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("DemoResult") => output_demo_human(&value),
        _ if std::any::type_name::<T>().contains("SearchResponse") => {
            output_search_response_human(&value)
        }
        _ if std::any::type_name::<T>().contains("MethodComparison") => {
            output_comparison_human(&value)
        }
        _ if std::any::type_name::<T>().contains("WeightSweep") => output_sweep_human(&value),
        _ if std::any::type_name::<T>().contains("ProcessedQuery") => {
            output_query_analysis_human(&value)
        }
        _ if std::any::type_name::<T>().contains("ChunkingResult") => {
            output_chunking_human(&value)
        }
        _ if std::any::type_name::<T>().contains("StoreStatsResult") => {
            output_store_stats_human(&value)
        }
        _ => {
            // Generic output for other types
            output_generic_human(&value)
        }
    }
}

/// Output the demo run in human format.
fn output_demo_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(report) = obj.get("report") {
            output_ingest_report_human(report);
        }
        if let Some(response) = obj.get("response") {
            println!();
            output_search_response_human(response)?;
        }
    }
    Ok(())
}

/// Output a search response in human format.
fn output_search_response_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(query) = obj.get("query").and_then(|q| q.as_object())
            && let Some(original) = query.get("original").and_then(|o| o.as_str())
        {
            println!("Query: {original}");
        }

        if let Some(results) = obj.get("results").and_then(|r| r.as_array()) {
            println!();
            println!("Search Results:");
            println!("═══════════════");

            for (i, hit) in results.iter().enumerate() {
                println!();
                println!(
                    "Result {}: (Score: {:.3})",
                    i + 1,
                    hit.get("hybrid_score")
                        .and_then(|s| s.as_f64())
                        .unwrap_or(0.0)
                );
                println!("─────────────");

                if let Some(review_id) = hit.get("review_id").and_then(|r| r.as_str()) {
                    let stars = hit.get("stars").and_then(|s| s.as_u64()).unwrap_or(0);
                    println!("Review {review_id} ({stars} stars)");
                }
                if let Some(text) = hit.get("chunk_text").and_then(|t| t.as_str()) {
                    println!("{text}");
                }

                let semantic = hit
                    .get("semantic_similarity")
                    .and_then(|s| s.as_f64())
                    .unwrap_or(0.0);
                let keyword = hit
                    .get("keyword_rank")
                    .and_then(|k| k.as_f64())
                    .unwrap_or(0.0);
                println!("Semantic: {semantic:.3}  Keyword: {keyword:.3}");
            }
        }

        if let Some(timing) = obj.get("timing").and_then(|t| t.as_object()) {
            println!();
            if let Some(total) = timing.get("total_results").and_then(|t| t.as_u64()) {
                println!("Total results: {total}");
            }
            if let Some(ms) = timing.get("embedding_ms").and_then(|m| m.as_f64()) {
                println!("Embedding time: {ms}ms");
            }
            if let Some(ms) = timing.get("search_ms").and_then(|m| m.as_f64()) {
                println!("Search time: {ms}ms");
            }
            if let Some(ms) = timing.get("total_ms").and_then(|m| m.as_f64()) {
                println!("Total time: {ms}ms");
            }
            let semantic = timing
                .get("has_semantic")
                .and_then(|s| s.as_bool())
                .unwrap_or(false);
            let keywords = timing
                .get("has_keywords")
                .and_then(|k| k.as_bool())
                .unwrap_or(false);
            let signals = match (semantic, keywords) {
                (true, true) => "semantic + keyword",
                (true, false) => "semantic only",
                (false, true) => "keyword only",
                (false, false) => "none",
            };
            println!("Signals: {signals}");
            if timing
                .get("degraded")
                .and_then(|d| d.as_bool())
                .unwrap_or(false)
            {
                println!("Degraded: the search backend was unavailable, results are empty");
            }
        }
    }
    Ok(())
}

/// Output a method comparison in human format.
fn output_comparison_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(query) = obj.get("query").and_then(|q| q.as_str()) {
            println!("Query: {query}");
            println!();
        }

        println!("Method Comparison:");
        println!("══════════════════");

        if let Some(counts) = obj.get("result_counts").and_then(|c| c.as_object()) {
            for method in ["hybrid", "semantic", "keyword"] {
                if let Some(count) = counts.get(method).and_then(|c| c.as_u64()) {
                    println!("{method}: {count} results");
                }
            }
        }

        if let Some(overlap) = obj.get("overlap").and_then(|o| o.as_object()) {
            println!();
            println!("Result overlap:");
            println!("───────────────");
            let labels = [
                ("hybrid_semantic", "hybrid and semantic"),
                ("hybrid_keyword", "hybrid and keyword"),
                ("semantic_keyword", "semantic and keyword"),
                ("all_three", "all three"),
            ];
            for (key, label) in labels {
                if let Some(count) = overlap.get(key).and_then(|c| c.as_u64()) {
                    println!("{label}: {count}");
                }
            }
        }

        if let Some(hybrid) = obj.get("hybrid") {
            println!();
            println!("Hybrid results:");
            output_search_response_human(hybrid)?;
        }
    }
    Ok(())
}

/// Output a weight sweep in human format.
fn output_sweep_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(query) = obj.get("query").and_then(|q| q.as_str()) {
            println!("Query: {query}");
            println!();
        }

        println!("Weight Sweep:");
        println!("═════════════");

        if let Some(combinations) = obj.get("combinations").and_then(|c| c.as_array()) {
            for point in combinations {
                let semantic = point
                    .get("semantic_weight")
                    .and_then(|s| s.as_f64())
                    .unwrap_or(0.0);
                let keyword = point
                    .get("keyword_weight")
                    .and_then(|k| k.as_f64())
                    .unwrap_or(0.0);

                if let Some(error) = point.get("error").and_then(|e| e.as_str()) {
                    println!("semantic={semantic:.2} keyword={keyword:.2}  failed: {error}");
                    continue;
                }

                let results = point
                    .get("result_count")
                    .and_then(|r| r.as_u64())
                    .unwrap_or(0);
                let avg = point
                    .get("avg_score")
                    .and_then(|a| a.as_f64())
                    .unwrap_or(0.0);
                let both = point
                    .get("has_both_signals")
                    .and_then(|b| b.as_bool())
                    .unwrap_or(false);
                let marker = if both { " (both signals)" } else { "" };
                println!(
                    "semantic={semantic:.2} keyword={keyword:.2}  results={results} avg={avg:.3}{marker}"
                );
            }
        }

        if let Some(optimal) = obj.get("optimal").and_then(|o| o.as_array())
            && optimal.len() == 2
        {
            let semantic = optimal[0].as_f64().unwrap_or(0.0);
            let keyword = optimal[1].as_f64().unwrap_or(0.0);
            println!();
            println!("Optimal: semantic={semantic:.2} keyword={keyword:.2}");
        }
        if let Some(recommendation) = obj.get("recommendation").and_then(|r| r.as_str()) {
            println!("{recommendation}");
        }
    }
    Ok(())
}

/// Output a processed query in human format.
fn output_query_analysis_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Query Analysis:");
        println!("═══════════════");

        let fields = [
            ("original", "Original"),
            ("cleaned", "Cleaned"),
            ("enhanced", "Enhanced"),
            ("keyword_query", "Keyword query"),
        ];
        for (key, label) in fields {
            if let Some(text) = obj.get(key).and_then(|t| t.as_str()) {
                println!("{label}: {text}");
            }
        }

        if let Some(keywords) = obj.get("keywords").and_then(|k| k.as_array()) {
            let joined = keywords
                .iter()
                .filter_map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            println!("Keywords: {joined}");
        }

        if let Some(analysis) = obj.get("analysis").and_then(|a| a.as_object()) {
            println!();
            println!("Analysis:");
            println!("─────────");

            let category = analysis
                .get("main_category")
                .and_then(|c| c.as_str())
                .unwrap_or("general");
            println!("Category: {category}");

            if let Some(sentiment) = analysis.get("sentiment").and_then(|s| s.as_str()) {
                println!("Sentiment: {sentiment}");
            }
            if let Some(intent) = analysis.get("intent").and_then(|i| i.as_str()) {
                println!("Intent: {intent}");
            }

            if let Some(scores) = analysis.get("category_scores").and_then(|s| s.as_array())
                && !scores.is_empty()
            {
                println!("Category scores:");
                for entry in scores {
                    if let Some(category) = entry.get("category").and_then(|c| c.as_str())
                        && let Some(score) = entry.get("score").and_then(|s| s.as_u64())
                    {
                        println!("  {category}: {score}");
                    }
                }
            }
        }
    }
    Ok(())
}

/// Output chunking results in human format.
fn output_chunking_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(chunks) = obj.get("chunks").and_then(|c| c.as_array()) {
            println!("Chunks:");
            println!("═══════");
            for (i, chunk) in chunks.iter().enumerate() {
                if let Some(text) = chunk.as_str() {
                    println!();
                    println!("Chunk {} ({} chars):", i, text.chars().count());
                    println!("{text}");
                }
            }
        }

        if let Some(stats) = obj.get("stats").and_then(|s| s.as_object()) {
            println!();
            println!("Chunk Statistics:");
            println!("─────────────────");
            if let Some(total) = stats.get("total_chunks").and_then(|t| t.as_u64()) {
                println!("Total chunks: {total}");
            }
            if let Some(avg) = stats.get("avg_chunk_length").and_then(|a| a.as_f64()) {
                println!("Average length: {avg:.1}");
            }
            if let Some(min) = stats.get("min_chunk_length").and_then(|m| m.as_u64())
                && let Some(max) = stats.get("max_chunk_length").and_then(|m| m.as_u64())
            {
                println!("Min/Max length: {min}/{max}");
            }
            if let Some(total) = stats.get("total_characters").and_then(|t| t.as_u64()) {
                println!("Total characters: {total}");
            }
        }
    }
    Ok(())
}

/// Output store statistics in human format.
fn output_store_stats_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(report) = obj.get("report") {
            output_ingest_report_human(report);
            println!();
        }

        if let Some(stats) = obj.get("stats").and_then(|s| s.as_object()) {
            println!("Store Statistics:");
            println!("═════════════════");
            if let Some(total) = stats.get("total_chunks").and_then(|t| t.as_u64()) {
                println!("Total chunks: {total}");
            }
            if let Some(reviews) = stats.get("unique_reviews").and_then(|r| r.as_u64()) {
                println!("Unique reviews: {reviews}");
            }
            if let Some(avg) = stats.get("avg_chunks_per_review").and_then(|a| a.as_f64()) {
                println!("Chunks per review: {avg:.1}");
            }
            if let Some(indexed) = stats.get("keyword_indexed").and_then(|k| k.as_u64()) {
                println!("Keyword indexed: {indexed}");
            }

            if let Some(distribution) = stats.get("star_distribution").and_then(|d| d.as_object())
                && !distribution.is_empty()
            {
                println!("Star distribution:");
                for (stars, count) in distribution {
                    let count = count.as_u64().unwrap_or(0);
                    println!("  {stars} stars: {count}");
                }
            }
        }
    }
    Ok(())
}

/// Output an ingest report summary.
fn output_ingest_report_human(value: &serde_json::Value) {
    if let Some(obj) = value.as_object() {
        let reviews = obj.get("reviews_in").and_then(|r| r.as_u64()).unwrap_or(0);
        let chunks = obj
            .get("chunks_stored")
            .and_then(|c| c.as_u64())
            .unwrap_or(0);
        let batches = obj.get("batches").and_then(|b| b.as_u64()).unwrap_or(0);
        let elapsed = obj.get("elapsed_ms").and_then(|e| e.as_f64()).unwrap_or(0.0);
        println!(
            "Ingested {chunks} chunks from {reviews} reviews in {batches} batches ({elapsed}ms)"
        );
    }
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &XystonArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
