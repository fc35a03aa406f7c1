//! Criterion benchmarks for the xyston search harness.
//!
//! Covers the hot synchronous paths:
//! - Sentence-aware text chunking
//! - Query cleaning, enhancement and analysis
//! - Cosine similarity over embedding vectors

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use xyston::chunk::TextChunker;
use xyston::query::QueryProcessor;
use xyston::vector::Vector;

/// Generate a review-like text of roughly `sentences` sentences.
fn generate_test_review(sentences: usize) -> String {
    let fragments = [
        "The food arrived quickly and tasted wonderfully fresh.",
        "Our server was attentive and explained every dish on the menu.",
        "The atmosphere felt warm with soft lighting over every table.",
        "Prices were fair for the portions and the quality on the plate.",
        "Parking nearby was easy to find even on a busy weekend evening.",
        "Dessert was the highlight and worth saving room for.",
    ];

    let mut text = String::new();
    for i in 0..sentences {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(fragments[i % fragments.len()]);
    }
    text
}

/// Generate deterministic pseudo-random vectors.
fn generate_test_vectors(count: usize, dimension: usize) -> Vec<Vector> {
    let mut vectors = Vec::with_capacity(count);
    for i in 0..count {
        let mut data = Vec::with_capacity(dimension);
        for j in 0..dimension {
            let value = ((i as f32 * 0.1 + j as f32 * 0.01).sin() * 0.5 + 0.5) * 2.0 - 1.0;
            data.push(value);
        }
        vectors.push(Vector::new(data));
    }
    vectors
}

fn bench_chunking(c: &mut Criterion) {
    let text = generate_test_review(40);
    let mut group = c.benchmark_group("chunking");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for chunk_size in [200, 500] {
        let chunker = TextChunker::new().with_chunk_size(chunk_size);
        group.bench_function(format!("chunk_size_{chunk_size}"), |b| {
            b.iter(|| black_box(chunker.chunk_text(black_box(&text))))
        });
    }

    group.finish();
}

fn bench_query_processing(c: &mut Criterion) {
    let processor = QueryProcessor::new();
    let queries = [
        "best cheap pizza downtown",
        "terrible slow service never again",
        "cozy romantic atmosphere for a date",
    ];

    let mut group = c.benchmark_group("query_processing");

    group.bench_function("process", |b| {
        b.iter(|| {
            for query in &queries {
                let _ = black_box(processor.process(black_box(query)));
            }
        })
    });
    group.bench_function("process_plain", |b| {
        b.iter(|| {
            for query in &queries {
                let _ = black_box(processor.process_with_enhancement(black_box(query), false));
            }
        })
    });

    group.finish();
}

fn bench_cosine_similarity(c: &mut Criterion) {
    let dimension = 384;
    let vectors = generate_test_vectors(101, dimension);
    let query = &vectors[0];
    let targets = &vectors[1..101];

    let mut group = c.benchmark_group("cosine_similarity");
    group.throughput(Throughput::Elements(targets.len() as u64));

    group.bench_function("pairwise", |b| {
        b.iter(|| {
            for target in targets {
                let _ = black_box(query.cosine_similarity(black_box(target)).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_chunking,
    bench_query_processing,
    bench_cosine_similarity
);
criterion_main!(benches);
