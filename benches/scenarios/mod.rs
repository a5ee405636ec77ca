//! Whole-processor benchmarks.

mod processor;

pub use processor::bench_processor;
