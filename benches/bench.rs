//! Criterion benchmarks for Lexiphrase.
//!
//! Covers the three hot paths:
//! - Text analysis without a dictionary
//! - Word set compilation
//! - Streaming phrase matching in both emission modes

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexiphrase::analysis::analyzer::Analyzer;
use lexiphrase::analysis::analyzer::standard::StandardAnalyzer;
use lexiphrase::analysis::token_filter::dictionary_words::{
    DictionaryWordsConfig, DictionaryWordsFilter,
};
use lexiphrase::dictionary::word_set::{WordSet, WordSetBuilder};

const WORDS: &[&str] = &[
    "new", "york", "city", "state", "island", "usb", "drive", "u", "盘", "是", "个", "好", "东",
    "西", "search", "engine", "machine", "learning", "data", "structure", "open", "source",
];

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % WORDS.len(); // Pseudo-random distribution
            doc_words.push(WORDS[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

/// Generate dictionary phrases of one to three words.
fn generate_phrases(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let len = 1 + i % 3;
            (0..len)
                .map(|j| WORDS[(i * 5 + j * 11) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn build_word_set(phrases: &[String]) -> WordSet {
    let analyzer = StandardAnalyzer::new();
    let mut builder = WordSetBuilder::new();
    for phrase in phrases {
        let _ = builder.add_phrase(&analyzer, phrase);
    }
    builder.build().unwrap()
}

/// Benchmark text analysis without a dictionary.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StandardAnalyzer::new();
    let texts = generate_test_documents(100);

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in &texts {
                let count = analyzer.analyze(black_box(text)).unwrap().count();
                black_box(count);
            }
        })
    });

    group.finish();
}

/// Benchmark word set compilation.
fn bench_word_set_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_set");
    let phrases = generate_phrases(1000);

    group.throughput(Throughput::Elements(phrases.len() as u64));
    group.bench_function("build_1000_phrases", |b| {
        b.iter(|| black_box(build_word_set(black_box(&phrases))))
    });

    group.finish();
}

/// Benchmark phrase matching.
fn bench_dictionary_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary_words");

    let word_set = Arc::new(build_word_set(&generate_phrases(1000)));
    let texts = generate_test_documents(100);

    for emit_all in [false, true] {
        let config = DictionaryWordsConfig::new(word_set.clone()).with_emit_all_matches(emit_all);
        let analyzer = StandardAnalyzer::with_filter(Arc::new(DictionaryWordsFilter::new(config)));
        let name = if emit_all {
            "match_emit_all"
        } else {
            "match_longest_only"
        };

        group.throughput(Throughput::Elements(texts.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                for text in &texts {
                    let count = analyzer.analyze(black_box(text)).unwrap().count();
                    black_box(count);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_word_set_build,
    bench_dictionary_words
);

criterion_main!(benches);
