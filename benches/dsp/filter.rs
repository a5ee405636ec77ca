//! Benchmarks for the tone biquad, including coefficient lookup.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ts808_dsp::dsp::filter::{ToneCoefficients, ToneFilter};

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let input = test_signal(size * 4);

        let mut filter = ToneFilter::new(0.5);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("tone", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });

        // Knob moving every block: lookup + render
        let mut filter = ToneFilter::new(0.5);
        let mut buffer = input.clone();
        let mut knob = 0.0;
        group.bench_with_input(BenchmarkId::new("tone_sweep", size), &size, |b, _| {
            b.iter(|| {
                knob = (knob + 0.013) % 1.0;
                filter.set_tone(black_box(knob));
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });
    }

    group.bench_function("coefficient_lookup", |b| {
        b.iter(|| ToneCoefficients::from_tone(black_box(0.37)))
    });

    group.finish();
}
