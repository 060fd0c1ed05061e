//! Criterion benchmarks for Rustem.
//!
//! Covers the stages of the Russian analysis chain on their own and the
//! full analyzer, single-threaded and with rayon.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rayon::prelude::*;

use rustem::analysis::analyzer::Analyzer;
use rustem::analysis::analyzer::language::russian::RussianAnalyzer;
use rustem::analysis::token_filter::stem::Stemmer;
use rustem::analysis::token_filter::stem::snowball::SnowballStemmer;
use rustem::analysis::tokenizer::Tokenizer;
use rustem::analysis::tokenizer::letter::LetterTokenizer;
use rustem::analysis::tokenizer::standard::StandardTokenizer;
use rustem::analysis::version::Version;
use rustem::analysis::word_set::WordSet;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "И", "кошка", "сидела", "на", "окне", "собаки", "бегали", "по", "двору",
        "Москва", "красивый", "город", "в", "котором", "живут", "люди", "они",
        "читали", "интересные", "книги", "о", "войне", "и", "мире", "2024",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }
        documents.push(doc_words.join(" ") + ".");
    }
    documents
}

/// Benchmark the token sources.
fn bench_tokenizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizers");
    let texts = generate_test_documents(100);
    let standard = StandardTokenizer::new();
    let letter = LetterTokenizer::new();

    group.throughput(Throughput::Elements(100));
    group.bench_function("standard", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(standard.tokenize(black_box(text)).unwrap().count());
            }
        })
    });
    group.bench_function("letter", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(letter.tokenize(black_box(text)).unwrap().count());
            }
        })
    });

    group.finish();
}

/// Benchmark the Snowball stemmer on its own.
fn bench_stemmer(c: &mut Criterion) {
    let stemmer = SnowballStemmer::russian();
    let words = ["кошка", "сидела", "окне", "бегали", "интересные", "котором"];

    c.bench_function("snowball_russian_stem", |b| {
        b.iter(|| {
            for word in &words {
                black_box(stemmer.stem(black_box(word)));
            }
        })
    });
}

/// Benchmark text analysis with the full Russian chain.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let analyzer = RussianAnalyzer::new();
    let excluding = RussianAnalyzer::with_stem_exclusion(
        Version::CURRENT,
        RussianAnalyzer::default_stop_set(),
        Arc::new(WordSet::new(["кошка", "москва"], true)),
    );
    let texts = generate_test_documents(1000);

    // Single document analysis
    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&texts[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    // Batch document analysis
    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let tokens: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
                black_box(tokens);
            }
        })
    });

    group.bench_function("analyze_batch_with_stem_exclusion", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let tokens: Vec<_> = excluding.analyze(black_box(text)).unwrap().collect();
                black_box(tokens);
            }
        })
    });

    group.finish();
}

/// Benchmark one shared analyzer used from many threads.
fn bench_parallel_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_analysis");
    let analyzer = RussianAnalyzer::new();
    let texts = generate_test_documents(500);

    group.throughput(Throughput::Elements(500));
    group.bench_function("parallel", |b| {
        b.iter(|| {
            let counts: Vec<usize> = texts
                .par_iter()
                .map(|text| analyzer.analyze(text).unwrap().count())
                .collect();
            black_box(counts);
        })
    });

    // Sequential analysis for comparison
    group.bench_function("sequential", |b| {
        b.iter(|| {
            let counts: Vec<usize> = texts
                .iter()
                .map(|text| analyzer.analyze(text).unwrap().count())
                .collect();
            black_box(counts);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenizers,
    bench_stemmer,
    bench_text_analysis,
    bench_parallel_analysis
);

criterion_main!(benches);
