use cipherscope::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::hint::black_box;

/// English-ish filler so the letter statistics exercise their hot path.
fn prose(len: usize) -> Vec<u8> {
    b"It was a bright cold day in April, and the clocks were striking thirteen. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random::<u8>()).collect()
}

fn bench_analysis(c: &mut Criterion) {
    let sizes = [1usize << 10, 1 << 16, 1 << 20];

    let mut group = c.benchmark_group("analysis");
    for size in sizes {
        let text = prose(size);
        let noise = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("letter_distribution", size), &text, |b, i| {
            b.iter(|| letter_distribution(black_box(i)))
        });
        group.bench_with_input(BenchmarkId::new("index_of_coincidence", size), &text, |b, i| {
            b.iter(|| index_of_coincidence(black_box(i)))
        });
        group.bench_with_input(BenchmarkId::new("shannon_entropy", size), &noise, |b, i| {
            b.iter(|| shannon_entropy(black_box(i)))
        });
        group.bench_with_input(BenchmarkId::new("profile", size), &text, |b, i| {
            b.iter(|| TextProfile::analyze(black_box(i)))
        });
    }
    group.finish();
}

fn bench_cipher(c: &mut Criterion) {
    let sizes = [1usize << 10, 1 << 16];

    let mut group = c.benchmark_group("cipher");
    for size in sizes {
        let text = prose(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("caesar_shift", size), &text, |b, i| {
            b.iter(|| caesar_shift(black_box(i), 13))
        });
        group.bench_with_input(BenchmarkId::new("caesar_shift_keyed", size), &text, |b, i| {
            b.iter(|| caesar_shift_keyed(black_box(i), &[3, 11, 251, 7]))
        });
        group.bench_with_input(BenchmarkId::new("a1z26_parse", size), &text, |b, i| {
            b.iter(|| a1z26_parse(black_box(i)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analysis, bench_cipher);
criterion_main!(benches);
