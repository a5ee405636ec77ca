//! Benchmarks for the diode clipping stage.
//!
//! Cost is dominated by the binary search per oversampled sample, so the
//! low and high drive cases should be close.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ts808_dsp::dsp::clipper::{CircuitComponents, ClippingStage};
use ts808_dsp::tables::diode::{sparse_antiparallel, DEFAULT_SPARSE_ERROR};

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_clipper(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/clipper");

    for &size in BLOCK_SIZES {
        // Oversampled block: 4 samples per input sample, volts.
        let input: Vec<f64> = test_signal(size * 4).iter().map(|x| x * 3.88).collect();

        for (name, gain) in [("low_drive", 0.1), ("high_drive", 1.0)] {
            let table = sparse_antiparallel(DEFAULT_SPARSE_ERROR).unwrap();
            let mut stage = ClippingStage::new(table, CircuitComponents::default()).unwrap();
            stage.set_gain(gain);

            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for pair in input.windows(2) {
                        acc += stage.next_sample(black_box(pair[1]), (pair[1] - pair[0]) * 192_000.0);
                    }
                    black_box(acc)
                })
            });
        }
    }

    group.finish();
}
