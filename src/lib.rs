pub mod dsp; // Allocation-free signal-chain primitives
pub mod engine; // Block orchestration and configuration
pub mod error;
pub mod io;
pub mod params; // Control-thread handoff and sample-accurate parameters
pub mod tables; // Fixed circuit data: diode curve, tone rows, decimation taps

pub use engine::{BlockOutcome, EngineConfig, OverdriveEngine, Processor};
pub use error::{Error, Result};
pub use params::ParamSnapshot;

/// Largest block the processor accepts; every scratch buffer is sized from it.
pub const MAX_BLOCK_SIZE: usize = 1024;
/// Block sizes the processor renders. Anything else is a silent no-op.
pub const SUPPORTED_BLOCK_SIZES: [usize; 6] = [32, 64, 128, 256, 512, 1024];

/// The only host sample rate the circuit model is tuned for.
pub const BASE_SAMPLE_RATE: f64 = 48_000.0;
pub const OVERSAMPLING: usize = 4;
pub const OVERSAMPLED_RATE: f64 = BASE_SAMPLE_RATE * OVERSAMPLING as f64;

/// Time step at the base rate (seconds).
pub(crate) const H48: f64 = 1.0 / BASE_SAMPLE_RATE;
/// Time step at the oversampled rate (seconds).
pub(crate) const H192: f64 = 1.0 / OVERSAMPLED_RATE;

#[inline]
pub fn is_supported_block_size(n: usize) -> bool {
    SUPPORTED_BLOCK_SIZES.contains(&n)
}
