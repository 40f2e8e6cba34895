use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use transpose::{transpose, transpose_blocked};

fn bench_naive_vs_tiled(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    for n in [256usize, 512, 1000, 2048] {
        group.throughput(Throughput::Bytes((n * n * 8) as u64));

        let input: Vec<f64> = (0..n * n).map(|v| v as f64).collect();
        let mut output = vec![0.0; n * n];

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, &n| {
            b.iter(|| transpose(black_box(&input), black_box(&mut output), n))
        });

        group.bench_with_input(BenchmarkId::new("tiled_64", n), &n, |b, &n| {
            b.iter(|| transpose_blocked(black_box(&input), black_box(&mut output), n, 64))
        });
    }

    group.finish();
}

fn bench_block_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_size");
    let n = 1000;
    let input: Vec<f64> = (0..n * n).map(|v| v as f64).collect();
    let mut output = vec![0.0; n * n];

    for block in [4usize, 8, 16, 32, 64, 128, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(block), &block, |b, &block| {
            b.iter(|| transpose_blocked(black_box(&input), black_box(&mut output), n, block))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_naive_vs_tiled, bench_block_sizes);
criterion_main!(benches);
