//! Segmenter throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordbank_core::{pack, PackConfig};

fn synthetic_words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("word{i:05}")).collect()
}

fn bench_pack(c: &mut Criterion) {
    let words = synthetic_words(10_000);

    let default_config = PackConfig::new();
    c.bench_function("pack_10k_default_capacity", |b| {
        b.iter(|| pack(black_box(words.iter().map(String::as_str)), &default_config).unwrap())
    });

    // Tight capacity forces a rollover every few records
    let tight_config = PackConfig::new().capacity(64);
    c.bench_function("pack_10k_capacity_64", |b| {
        b.iter(|| pack(black_box(words.iter().map(String::as_str)), &tight_config).unwrap())
    });
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
