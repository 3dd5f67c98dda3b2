//! Benchmarks for the conversion routines.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lutkit::{Lut, PixelPacking, RectI, TransferCurve};

/// Benchmark the planar scalar routines.
fn bench_planar(c: &mut Criterion) {
    let mut group = c.benchmark_group("planar");

    for size in [1_000, 100_000].iter() {
        let src: Vec<f32> = (0..*size).map(|i| i as f32 / *size as f32).collect();
        let bytes: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.throughput(Throughput::Elements(*size as u64));

        for curve in [TransferCurve::Linear, TransferCurve::SRgb, TransferCurve::Cineon] {
            let lut = Lut::new(curve);
            lut.to_byte_fast(0.5); // fill outside the timed loop

            group.bench_with_input(
                BenchmarkId::new(format!("to_byte/{curve}"), size),
                &src,
                |b, v| {
                    let mut dst = vec![0_u8; v.len()];
                    b.iter(|| lut.to_byte(black_box(&mut dst), black_box(v), v.len(), 1))
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("from_byte/{curve}"), size),
                &bytes,
                |b, v| {
                    let mut dst = vec![0.0_f32; v.len()];
                    b.iter(|| lut.from_byte(black_box(&mut dst), black_box(v), v.len(), 1))
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the packed-rect routines on an HD frame.
fn bench_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect");

    let rod = RectI::from_size(1920, 1080);
    let n = rod.area() as usize * 4;
    let src: Vec<f32> = (0..n).map(|i| (i % 1000) as f32 / 1000.0).collect();
    let lut = Lut::new(TransferCurve::SRgb);
    lut.to_byte_fast(0.5);

    group.throughput(Throughput::Elements(rod.area()));

    group.bench_function("to_byte_rect/srgb/1080p", |b| {
        let mut dst = vec![0_u8; n];
        b.iter(|| {
            lut.to_byte_rect(
                black_box(&mut dst),
                black_box(&src),
                rod,
                rod,
                false,
                false,
                PixelPacking::Bgra,
            )
            .unwrap()
        })
    });

    let bytes: Vec<u8> = (0..n).map(|i| (i % 256) as u8).collect();
    group.bench_function("from_byte_rect/srgb/1080p", |b| {
        let mut dst = vec![0.0_f32; n];
        b.iter(|| {
            lut.from_byte_rect(
                black_box(&mut dst),
                black_box(&bytes),
                rod,
                rod,
                false,
                false,
                PixelPacking::Bgra,
            )
            .unwrap()
        })
    });

    group.bench_function("to_short_rect/srgb/1080p/10bit", |b| {
        let mut dst = vec![0_u16; n];
        b.iter(|| {
            lut.to_short_rect(
                black_box(&mut dst),
                black_box(&src),
                rod,
                rod,
                false,
                false,
                10,
                PixelPacking::Rgba,
            )
            .unwrap()
        })
    });

    group.finish();
}

/// Benchmark first-use table fill.
fn bench_table_fill(c: &mut Criterion) {
    c.bench_function("table_fill/cineon", |b| {
        b.iter(|| {
            let lut = Lut::new(TransferCurve::Cineon);
            black_box(lut.to_byte_fast(0.5))
        })
    });
}

criterion_group!(benches, bench_planar, bench_rect, bench_table_fill);
criterion_main!(benches);
