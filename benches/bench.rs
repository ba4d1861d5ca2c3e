//! Criterion benchmarks for Lexiclean.
//!
//! Covers the per-record analysis pipeline, whole-batch normalization with and
//! without vocabulary trimming, and the individual char filters that dominate
//! the cost of a record.

use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use lexiclean::analysis::char_filter::CharFilter;
use lexiclean::analysis::char_filter::mapping::MappingCharFilter;
use lexiclean::analysis::char_filter::url::UrlCharFilter;
use lexiclean::normalize::{NormalizeMode, Normalizer, NormalizerConfig};

/// Generate review-like records for benchmarking.
fn generate_test_reviews(count: usize) -> Vec<String> {
    let words = [
        "the", "movie", "was", "great", "I", "didn't", "like", "plot", "acting", "Café",
        "it's", "10/10", "would", "watch", "again!", "boring", "soundtrack", "we'll",
        "https://example.com/review", "cast", "ending", "can't", "wait", "sequel", "(spoilers)",
        "www.imdb.com/title", "naïve", "script", "2023", "director", "brilliant", "a",
    ];

    let mut reviews = Vec::with_capacity(count);
    for i in 0..count {
        let review_length = 20 + (i % 60);
        let mut review_words = Vec::with_capacity(review_length);
        for j in 0..review_length {
            let word_idx = (i * 7 + j * 13) % words.len();
            review_words.push(words[word_idx]);
        }
        reviews.push(review_words.join(" "));
    }

    reviews
}

/// Benchmark single-record and batch normalization.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let reviews = generate_test_reviews(1000);

    let normalizer = Normalizer::new(NormalizerConfig::default()).unwrap();

    group.bench_function("normalize_one", |b| {
        b.iter(|| black_box(normalizer.normalize_one(black_box(&reviews[0])).unwrap()))
    });

    group.throughput(Throughput::Elements(reviews.len() as u64));
    group.bench_function("apply_only_batch", |b| {
        b.iter(|| {
            black_box(
                normalizer
                    .normalize(black_box(&reviews), NormalizeMode::ApplyOnly)
                    .unwrap(),
            )
        })
    });

    let config = NormalizerConfig::new()
        .with_top_fraction(0.05)
        .with_bottom_fraction(0.05);
    group.bench_function("fit_and_apply_batch", |b| {
        b.iter_batched(
            || Normalizer::new(config.clone()).unwrap(),
            |normalizer| {
                black_box(
                    normalizer
                        .normalize(&reviews, NormalizeMode::FitAndApply)
                        .unwrap(),
                )
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark the heaviest char filters on their own.
fn bench_char_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("char_filters");
    let text = generate_test_reviews(1).remove(0).to_lowercase();

    let contractions = MappingCharFilter::english_contractions();
    group.bench_function("contractions", |b| {
        b.iter(|| black_box(contractions.filter(black_box(&text))))
    });

    let punctuation = MappingCharFilter::punctuation();
    group.bench_function("punctuation", |b| {
        b.iter(|| black_box(punctuation.filter(black_box(&text))))
    });

    let url = UrlCharFilter::new().unwrap();
    group.bench_function("url", |b| b.iter(|| black_box(url.filter(black_box(&text)))));

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_char_filters);
criterion_main!(benches);
