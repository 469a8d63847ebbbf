use basex::{Alphabet, AlphabetRegistry, decode, encode};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn get_alphabet(name: &str) -> Alphabet {
    AlphabetRegistry::load_default()
        .unwrap()
        .build_alphabet(name)
        .unwrap()
}

// Repeated carry is quadratic, so sizes stay small.
const SIZES: [usize; 4] = [16, 64, 256, 1024];

fn bench_encode(c: &mut Criterion, name: &str) {
    let alphabet = get_alphabet(name);
    let mut group = c.benchmark_group(format!("encode_{}", name));

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data), black_box(&alphabet)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion, name: &str) {
    let alphabet = get_alphabet(name);
    let mut group = c.benchmark_group(format!("decode_{}", name));

    for size in SIZES.iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();
        let encoded = encode(&data, &alphabet);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded), black_box(&alphabet)).unwrap());
        });
    }
    group.finish();
}

fn bench_encode_base58(c: &mut Criterion) {
    bench_encode(c, "base58");
}

fn bench_decode_base58(c: &mut Criterion) {
    bench_decode(c, "base58");
}

fn bench_encode_bech32(c: &mut Criterion) {
    bench_encode(c, "bech32");
}

fn bench_decode_bech32(c: &mut Criterion) {
    bench_decode(c, "bech32");
}

fn bench_encode_base1024(c: &mut Criterion) {
    bench_encode(c, "base1024");
}

criterion_group!(
    benches,
    bench_encode_base58,
    bench_decode_base58,
    bench_encode_bech32,
    bench_decode_bech32,
    bench_encode_base1024
);
criterion_main!(benches);
