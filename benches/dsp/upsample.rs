//! Benchmarks for the 4× derivative-carrying upsampler.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ts808_dsp::dsp::upsample::{Oversampled, Upsampler};
use ts808_dsp::MAX_BLOCK_SIZE;

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_upsample(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/upsample");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);
        let mut up = Upsampler::new(MAX_BLOCK_SIZE);
        let mut out = vec![Oversampled::default(); size * 4];

        group.bench_with_input(BenchmarkId::new("render", size), &size, |b, _| {
            b.iter(|| {
                up.input_mut(size).copy_from_slice(black_box(&input));
                up.render(black_box(&mut out));
            })
        });
    }

    group.finish();
}
