//! Low-level DSP primitives used by the overdrive processor.
//!
//! Everything here allocates only in `new` and is realtime-safe afterwards.
//! The components stay focused on the signal-processing math; block
//! orchestration, parameter handling and sample conversion live in
//! [`crate::engine`].

/// Block-continuity history buffers.
pub mod carryover;
/// Diode clipping solver and clipping stage.
pub mod clipper;
/// Polyphase and direct-form decimators.
pub mod decimate;
/// Tone biquad and ground-leg high-pass.
pub mod filter;
/// Generic strided FIR pass.
pub mod fir;
/// Diode IV curves.
pub mod iv_curve;
pub mod math;
/// Greedy curve thinning.
pub mod sparse;
/// 4× upsampler with derivative estimation.
pub mod upsample;

pub use clipper::{ClipResult, ClippingSolver, ClippingStage};
pub use iv_curve::{IvCurve, Measurement};
pub use upsample::Oversampled;
