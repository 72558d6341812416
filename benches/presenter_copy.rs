use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mandelbrot_pipeline::adapters::pixel_format::copy_argb_to_rgba;

fn bench_copy_argb_to_rgba(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_argb_to_rgba");

    for (width, height) in [(800usize, 600usize), (1920, 1080), (3840, 2160)] {
        let pixel_count = width * height;
        let src: Vec<u32> = (0..pixel_count as u32).map(|i| 0xff00_0000 | i).collect();
        let mut dst = vec![0u8; pixel_count * 4];

        group.throughput(Throughput::Elements(pixel_count as u64));
        group.bench_function(BenchmarkId::from_parameter(format!("{width}x{height}")), |b| {
            b.iter(|| copy_argb_to_rgba(black_box(&src), black_box(&mut dst)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_copy_argb_to_rgba);
criterion_main!(benches);
