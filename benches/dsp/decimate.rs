//! Polyphase decimator against the direct stride-4 form.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ts808_dsp::dsp::decimate::{Decimator, FirDecimator};
use ts808_dsp::MAX_BLOCK_SIZE;

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_decimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/decimate");

    for &size in BLOCK_SIZES {
        let input = test_signal(size * 4);
        let mut out = vec![0.0; size];

        let mut poly = Decimator::new(MAX_BLOCK_SIZE);
        group.bench_with_input(BenchmarkId::new("polyphase", size), &size, |b, _| {
            b.iter(|| poly.process(black_box(&input), black_box(&mut out)))
        });

        let mut direct = FirDecimator::new(MAX_BLOCK_SIZE);
        group.bench_with_input(BenchmarkId::new("direct", size), &size, |b, _| {
            b.iter(|| direct.process(black_box(&input), black_box(&mut out)))
        });
    }

    group.finish();
}
