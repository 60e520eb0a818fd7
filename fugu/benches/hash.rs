use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fugu::Sha1;

pub fn digest_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha1");

    for size in [64usize, 1024, 64 * 1024] {
        let data = vec![0xa5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("digest_{size}"), |b| {
            b.iter(|| Sha1::digest_of(black_box(&data)))
        });
    }

    group.finish();
}

pub fn streaming_benchmark(c: &mut Criterion) {
    const CHUNK: usize = 4096;

    let mut group = c.benchmark_group("sha1_streaming");
    group.throughput(Throughput::Bytes(CHUNK as u64));

    group.bench_function("update_4k_chunks", |b| {
        let data = vec![0x5au8; CHUNK];
        let mut engine = Sha1::new();
        b.iter(|| engine.update(black_box(&data)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, digest_benchmark, streaming_benchmark);
criterion_main!(benches);
