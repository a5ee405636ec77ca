//! Benchmarks for complete blocks through the processor.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ts808_dsp::{EngineConfig, ParamSnapshot, Processor};

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_processor(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/processor");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);
        let mut left = vec![0.0f64; size];
        let mut right = vec![0.0f64; size];

        // === CLEAN BOOST ===
        let mut clean = Processor::new(EngineConfig::default()).unwrap();
        let params = ParamSnapshot::new(0.0, 0.5, 0.5);
        group.bench_with_input(BenchmarkId::new("clean", size), &size, |b, _| {
            b.iter(|| {
                clean.process_block(params, black_box(&input[..]), &mut [&mut left[..], &mut right[..]])
            })
        });

        // === FULL DRIVE ===
        let mut driven = Processor::new(EngineConfig::default()).unwrap();
        let params = ParamSnapshot::new(1.0, 0.7, 0.5);
        group.bench_with_input(BenchmarkId::new("full_drive", size), &size, |b, _| {
            b.iter(|| {
                driven.process_block(params, black_box(&input[..]), &mut [&mut left[..], &mut right[..]])
            })
        });

        // === f32 HOST BUFFERS ===
        let input32: Vec<f32> = input.iter().map(|&x| x as f32).collect();
        let mut out32 = vec![0.0f32; size];
        let mut mono = Processor::new(EngineConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("f32_mono", size), &size, |b, _| {
            b.iter(|| mono.process_block(params, black_box(&input32[..]), &mut [&mut out32[..]]))
        });
    }

    group.finish();
}
