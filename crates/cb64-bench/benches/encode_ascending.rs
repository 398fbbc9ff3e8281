//! Encodes an ascending sequence of little-endian u32s into a fixed
//! 8-byte buffer (4 input bytes span 2 triplets, so 8 output bytes).

use cb64_bench::alt_encode;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BATCH: u32 = 1 << 16;

fn benchmark_encode_ascending(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode-ascending");
    group.sample_size(20);

    group.bench_function("cb64", |b| {
        b.iter(|| {
            let mut accum = 0u64;
            let mut encoded = [0u8; 8];
            for i in 0..BATCH {
                let input = i.to_le_bytes();
                let encoded_bytes = cb64::encode(&input, &mut encoded).unwrap();
                accum += encoded_bytes as u64;
                accum += encoded.iter().map(|&b| b as u64).sum::<u64>();
            }
            black_box(accum);
        });
    });

    group.bench_function("base64-crate", |b| {
        b.iter(|| {
            let mut accum = 0u64;
            let mut encoded = [0u8; 8];
            for i in 0..BATCH {
                let input = i.to_le_bytes();
                let encoded_bytes = alt_encode(&input, &mut encoded);
                accum += encoded_bytes as u64;
                accum += encoded.iter().map(|&b| b as u64).sum::<u64>();
            }
            black_box(accum);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_encode_ascending);
criterion_main!(benches);
