//! Benchmarks for low-level DSP primitives.

mod clipper;
mod decimate;
mod filter;
mod upsample;

pub use clipper::bench_clipper;
pub use decimate::bench_decimate;
pub use filter::bench_filter;
pub use upsample::bench_upsample;
