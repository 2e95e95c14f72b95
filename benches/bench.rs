//! Criterion benchmarks for the Sentira sentiment pipeline.
//!
//! Covers the two hot paths of the core:
//! - Text normalization (char filtering, tokenization, token filtering)
//! - End-to-end classification including session recording

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sentira::analysis::analyzer::Analyzer;
use sentira::analysis::analyzer::standard::StandardAnalyzer;
use sentira::engine::SentimentEngine;

/// Generate review-like test texts for benchmarking.
fn generate_texts(count: usize) -> Vec<String> {
    let fragments = [
        "I absolutely love this product",
        "the quality is really great",
        "it is not bad at all",
        "what a terrible experience",
        "the shipping was very slow",
        "nothing special about it",
        "would highly recommend to anyone",
        "completely disappointed with the purchase",
        "it works and does the job",
        "the worst service I have ever seen",
    ];

    (0..count)
        .map(|i| {
            let mut text = String::new();
            for j in 0..(3 + i % 5) {
                if j > 0 {
                    text.push_str(", ");
                }
                text.push_str(fragments[(i + j) % fragments.len()]);
            }
            text
        })
        .collect()
}

fn bench_normalization(c: &mut Criterion) {
    let analyzer = StandardAnalyzer::new().unwrap();
    let texts = generate_texts(100);
    let total_bytes: usize = texts.iter().map(|t| t.len()).sum();

    let mut group = c.benchmark_group("normalization");
    group.throughput(Throughput::Bytes(total_bytes as u64));
    group.bench_function("standard_analyzer_100_texts", |b| {
        b.iter(|| {
            for text in &texts {
                let tokens: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
                black_box(tokens);
            }
        })
    });
    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let engine = SentimentEngine::new().unwrap();
    let texts = generate_texts(100);

    let mut group = c.benchmark_group("classification");
    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("classify_text_100_texts", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(engine.classify_text(black_box(text)).unwrap());
            }
        })
    });
    group.bench_function("record_and_snapshot_100_texts", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(engine.record_and_snapshot(black_box(text)).unwrap());
            }
            engine.reset_session();
        })
    });
    group.finish();
}

criterion_group!(benches, bench_normalization, bench_classification);
criterion_main!(benches);
