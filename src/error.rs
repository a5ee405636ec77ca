//! Construction-time errors.
//!
//! Nothing on the audio thread returns these. The processing path reports
//! degraded blocks through [`crate::BlockOutcome`] and degraded solver steps
//! through [`crate::dsp::clipper::ClipResult`] instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("lookup table needs at least {min} points, got {len}")]
    TooFewPoints { len: usize, min: usize },
    #[error("lookup table voltages must be strictly increasing (index {index})")]
    NotIncreasing { index: usize },
    #[error("lookup table has no point at or above 0 V")]
    NoPositiveHalf,
    #[error("relative error bound must lie in (0, 1), got {0}")]
    InvalidErrorBound(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unsupported sample rate {0} Hz (only 48000 Hz is modelled)")]
    UnsupportedSampleRate(f64),
    #[error("unsupported block size {0} (expected a power of two from 32 to 1024)")]
    UnsupportedBlockSize(usize),
    #[error("circuit component `{name}` must be positive and finite, got {value}")]
    InvalidComponent { name: &'static str, value: f64 },
    #[error("full-scale voltage must be positive and finite, got {0}")]
    InvalidFullScale(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("parameter state needs {expected} bytes, got {len}")]
    Truncated { len: usize, expected: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    State(#[from] StateError),
}

pub type Result<T> = std::result::Result<T, Error>;
