use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tempfile::NamedTempFile;
use xyston::dataset;
use xyston::embedding::HashingEmbedder;
use xyston::ingest::{IngestConfig, IngestPipeline};
use xyston::search::{HybridSearchEngine, SearchOptions};
use xyston::store::MemoryStore;

#[tokio::test]
async fn test_jsonl_corpus_is_searchable() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Write a small JSONL corpus
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"{{"review_id":"jsonl_a","text":"The espresso was rich and the croissant flaky. A fine quiet corner cafe.","stars":5}}"#
    )?;
    writeln!(
        file,
        r#"{{"review_id":"jsonl_b","text":"The ramen broth was deep and savory with perfect noodles. Worth the queue.","stars":4}}"#
    )?;

    // 2. Load and ingest it
    let reviews = dataset::load_jsonl(file.path())?;
    assert_eq!(reviews.len(), 2);

    let provider = Arc::new(HashingEmbedder::new());
    let store = Arc::new(MemoryStore::new());
    let pipeline = IngestPipeline::new(provider.clone(), store.clone())
        .with_config(IngestConfig::default().with_pause(Duration::ZERO));
    let report = pipeline.ingest(&reviews).await?;
    assert_eq!(report.reviews_in, 2);

    // 3. A word unique to the second review wins a keyword-only search
    let engine = HybridSearchEngine::new(provider, store);
    let options = SearchOptions::default().with_enhancement(false);
    let response = engine.keyword_only("ramen", &options).await?;

    let best = response.best().ok_or("no results")?;
    assert_eq!(best.review_id, "jsonl_b");
    assert_eq!(best.stars, 4);
    assert!(best.keyword_rank > 0.0);

    Ok(())
}

#[tokio::test]
async fn test_jsonl_load_failures_surface() {
    // A missing file is an error, not an empty corpus.
    let result = dataset::load_jsonl("/does/not/exist.jsonl");
    assert!(result.is_err());
}
