//! Benchmarks for the overdrive primitives and the full processor.
//!
//! Run with: cargo bench
//!
//! Every block must finish well inside its real-time deadline at 48kHz:
//!   - 32 samples   = 0.67ms deadline
//!   - 64 samples   = 1.33ms deadline
//!   - 256 samples  = 5.33ms deadline
//!   - 1024 samples = 21.33ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Upsampler, clipping stage, tone filter, decimators
//!   - scenarios/*  Whole processor at different drive settings

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Block sizes the processor accepts.
pub const BLOCK_SIZES: &[usize] = &[32, 64, 128, 256, 512, 1024];

/// Test signal: a guitar-ish mix of fundamental and a couple of partials.
pub fn test_signal(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64 / 48_000.0;
            0.3 * (std::f64::consts::TAU * 196.0 * t).sin()
                + 0.1 * (std::f64::consts::TAU * 392.0 * t).sin()
                + 0.05 * (std::f64::consts::TAU * 1_176.0 * t).sin()
        })
        .collect()
}

criterion_group!(
    benches,
    // Primitives
    dsp::bench_upsample,
    dsp::bench_clipper,
    dsp::bench_filter,
    dsp::bench_decimate,
    // Whole chain
    scenarios::bench_processor,
);
criterion_main!(benches);
