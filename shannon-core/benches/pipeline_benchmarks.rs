use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shannon_core::{count_ngrams, normalize, stats, tokenize};
use std::hint::black_box;

fn sample_text(paragraphs: usize) -> String {
    let paragraph = "It was the best of times, it was the worst of times; it was the age \
                     of wisdom, it was the age of foolishness. \u{201C}Really?\u{201D} she asked \u{2014} \
                     nobody answered!\n\n";
    paragraph.repeat(paragraphs)
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for size in [10, 100, 1000] {
        let text = sample_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| normalize::normalize(black_box(text), true))
        });
    }
    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let text = normalize::normalize(&sample_text(1000), true);
    c.bench_function("statistics/1000", |b| {
        b.iter(|| stats::compute(black_box(&text)))
    });
}

fn bench_ngrams(c: &mut Criterion) {
    let text = normalize::normalize(&sample_text(1000), true);
    let words = tokenize::words(&text);
    let chars = tokenize::character_tokens(&text, true);

    let mut group = c.benchmark_group("count_ngrams");
    for n in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::new("words", n), &n, |b, &n| {
            b.iter(|| count_ngrams(black_box(&words), n))
        });
        group.bench_with_input(BenchmarkId::new("chars", n), &n, |b, &n| {
            b.iter(|| count_ngrams(black_box(&chars), n))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_statistics, bench_ngrams);
criterion_main!(benches);
