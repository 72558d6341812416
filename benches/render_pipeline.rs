use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_pipeline::{
    CameraState, ClassicColourMap, FractalKernel, NativeKernel, PixelSize, RenderSettings,
    SoftwareKernel, WorldPoint,
};

const SIZES: [(i32, i32); 3] = [(320, 240), (800, 600), (1920, 1080)];

fn bench_kernels(c: &mut Criterion) {
    let software = SoftwareKernel::new(ClassicColourMap::default());
    let native = match NativeKernel::bundled() {
        Ok(kernel) => Some(kernel),
        Err(err) => {
            eprintln!("skipping native kernel: {err}");
            None
        }
    };
    let settings = RenderSettings::default();

    let mut group = c.benchmark_group("render_frame");
    group.sample_size(20);

    for (width, height) in SIZES {
        let camera = CameraState::new(
            WorldPoint::new(-0.5, 0.0),
            (width / 3) as u64,
            PixelSize::new(width, height),
        );
        let mut dst = vec![0u32; (width * height) as usize];
        let label = format!("{width}x{height}");

        group.bench_with_input(BenchmarkId::new("software", &label), &camera, |b, camera| {
            b.iter(|| software.render(black_box(camera), &settings, width, height, &mut dst));
        });

        if let Some(native) = &native {
            group.bench_with_input(BenchmarkId::new("native", &label), &camera, |b, camera| {
                b.iter(|| native.render(black_box(camera), &settings, width, height, &mut dst));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
