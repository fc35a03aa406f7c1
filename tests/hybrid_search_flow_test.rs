use std::sync::Arc;
use std::time::Duration;

use xyston::dataset;
use xyston::embedding::HashingEmbedder;
use xyston::ingest::{IngestConfig, IngestPipeline};
use xyston::search::{HybridSearchEngine, SearchOptions};
use xyston::store::MemoryStore;

type TestEngine = HybridSearchEngine<HashingEmbedder, MemoryStore>;

async fn engine_over_samples() -> Result<TestEngine, Box<dyn std::error::Error>> {
    // 1. Setup provider and store
    let provider = Arc::new(HashingEmbedder::new());
    let store = Arc::new(MemoryStore::new());

    // 2. Ingest the bundled sample corpus
    let pipeline = IngestPipeline::new(provider.clone(), store.clone())
        .with_config(IngestConfig::default().with_pause(Duration::ZERO));
    let report = pipeline.ingest(&dataset::sample_reviews()).await?;
    assert_eq!(report.reviews_in, 5);
    assert_eq!(report.chunks_stored, report.chunks_created);

    Ok(HybridSearchEngine::new(provider, store))
}

#[tokio::test]
async fn test_hybrid_search_over_sample_corpus() -> Result<(), Box<dyn std::error::Error>> {
    let engine = engine_over_samples().await?;

    // "delicious pasta" appears verbatim in the corpus, so the keyword
    // signal qualifies at least one row no matter what the embedding does.
    let response = engine
        .search("delicious pasta", &SearchOptions::default())
        .await?;

    assert!(!response.is_empty());
    assert!(response.timing.has_keywords);
    assert!(!response.timing.degraded);

    // Results come back best first.
    for pair in response.results.windows(2) {
        assert!(pair[0].hybrid_score >= pair[1].hybrid_score);
    }
    assert_eq!(
        response.best().map(|hit| hit.id),
        response.results.first().map(|hit| hit.id)
    );

    // The response echoes what was asked.
    assert_eq!(response.query.original, "delicious pasta");
    assert_eq!(response.settings.semantic_weight, 0.6);
    assert_eq!(response.settings.keyword_weight, 0.4);

    Ok(())
}

#[tokio::test]
async fn test_keyword_only_finds_the_literal_match() -> Result<(), Box<dyn std::error::Error>> {
    let engine = engine_over_samples().await?;

    // With enhancement off the keyword query is exactly "pasta", which
    // occurs in sample_001 alone.
    let options = SearchOptions::default().with_enhancement(false);
    let response = engine.keyword_only("pasta", &options).await?;

    assert_eq!(response.settings.semantic_weight, 0.0);
    assert_eq!(response.settings.keyword_weight, 1.0);

    let best = response.best().ok_or("no results")?;
    assert_eq!(best.review_id, "sample_001");
    assert!(best.keyword_rank > 0.0);
    assert!(best.hybrid_score > 0.0);

    // Rows that qualified on similarity alone score zero at these weights.
    for hit in &response.results {
        if hit.keyword_rank == 0.0 {
            assert_eq!(hit.hybrid_score, 0.0);
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_compare_methods_counts_are_consistent() -> Result<(), Box<dyn std::error::Error>> {
    let engine = engine_over_samples().await?;

    let comparison = engine
        .compare_methods("great service", &SearchOptions::default())
        .await?;

    // Counts mirror the embedded responses.
    assert_eq!(comparison.result_counts.hybrid, comparison.hybrid.len());
    assert_eq!(comparison.result_counts.semantic, comparison.semantic.len());
    assert_eq!(comparison.result_counts.keyword, comparison.keyword.len());

    // Overlaps can never exceed the smaller member.
    let counts = &comparison.result_counts;
    let overlap = &comparison.overlap;
    assert!(overlap.hybrid_semantic <= counts.hybrid.min(counts.semantic));
    assert!(overlap.hybrid_keyword <= counts.hybrid.min(counts.keyword));
    assert!(overlap.semantic_keyword <= counts.semantic.min(counts.keyword));
    assert!(overlap.all_three <= overlap.hybrid_semantic);
    assert!(overlap.all_three <= overlap.hybrid_keyword);
    assert!(overlap.all_three <= overlap.semantic_keyword);

    Ok(())
}

#[tokio::test]
async fn test_weight_sweep_over_live_store() -> Result<(), Box<dyn std::error::Error>> {
    let engine = engine_over_samples().await?;

    let sweep = engine.find_optimal_weights("friendly service", 4).await?;

    // steps = 4 gives five combinations from all-keyword to all-semantic.
    assert_eq!(sweep.combinations.len(), 5);
    assert!(sweep.combinations.iter().all(|point| point.error.is_none()));

    let (semantic, keyword) = sweep.optimal;
    assert!((semantic + keyword - 1.0).abs() < 1e-3);
    assert!(!sweep.recommendation.is_empty());

    Ok(())
}
