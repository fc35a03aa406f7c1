use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use xyston::chunk::TextChunker;
use xyston::embedding::{EmbeddingProvider, HashingEmbedder};
use xyston::ingest::{IngestConfig, IngestPipeline};
use xyston::review::Review;
use xyston::store::{HybridSearchParams, MemoryStore, SimilarityStore};

fn long_review_text() -> String {
    [
        "The service started strong with a warm greeting at the door and menus arriving quickly.",
        "Our main courses showed the same careful service, each plate described before it landed.",
        "Half way through the meal the service dipped while the room filled with a large party.",
        "The manager noticed and the service recovered with refills and an apology for the wait.",
        "Dessert service was the highlight, a shared plate arranged beautifully for the table.",
        "Overall the service earned the tip even with the slow stretch in the middle.",
    ]
    .join(" ")
}

#[tokio::test]
async fn test_long_review_spans_multiple_chunks() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Setup with a chunk size the review cannot fit into
    let provider = Arc::new(HashingEmbedder::new());
    let store = Arc::new(MemoryStore::new());
    let pipeline = IngestPipeline::new(provider.clone(), store.clone())
        .with_chunker(TextChunker::new().with_chunk_size(200).with_overlap(50))
        .with_config(IngestConfig::default().with_pause(Duration::ZERO));

    // 2. Ingest one long review
    let review = Review::new("rev_long", long_review_text(), 4);
    let report = pipeline.ingest(&[review]).await?;
    assert!(report.chunks_created > 1);
    assert_eq!(report.chunks_stored, report.chunks_created);

    // 3. Every sentence mentions "service", so a keyword query hits every chunk
    let embedding = provider.embed("service").await?;
    let params = HybridSearchParams::new(embedding, "service").with_count(50);
    let matches = store.hybrid_search(params).await?;
    assert_eq!(matches.len(), report.chunks_stored);

    // 4. Review metadata is carried onto every chunk row
    for hit in &matches {
        assert_eq!(hit.review_id, "rev_long");
        assert_eq!(hit.stars, 4);
        assert!(hit.keyword_rank > 0.0);
    }

    // 5. The rows hold distinct pieces of the original text
    let distinct: HashSet<&str> = matches.iter().map(|hit| hit.chunk_text.as_str()).collect();
    assert_eq!(distinct.len(), matches.len());

    let stats = store.stats().await?;
    assert_eq!(stats.unique_reviews, 1);
    assert_eq!(stats.total_chunks, report.chunks_stored);

    Ok(())
}

#[tokio::test]
async fn test_short_reviews_stay_whole() -> Result<(), Box<dyn std::error::Error>> {
    // A review below the chunk size must come through as a single row
    // with its text intact.
    let provider = Arc::new(HashingEmbedder::new());
    let store = Arc::new(MemoryStore::new());
    let pipeline = IngestPipeline::new(provider.clone(), store.clone())
        .with_config(IngestConfig::default().with_pause(Duration::ZERO));

    let text = "Quick lunch stop with a solid falafel wrap and fast friendly counter staff.";
    let report = pipeline.ingest(&[Review::new("rev_short", text, 5)]).await?;
    assert_eq!(report.chunks_created, 1);
    assert_eq!(report.chunks_stored, 1);

    let embedding = provider.embed("falafel").await?;
    let params = HybridSearchParams::new(embedding, "falafel");
    let matches = store.hybrid_search(params).await?;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].chunk_text, text);
    assert_eq!(matches[0].review_id, "rev_short");

    Ok(())
}
