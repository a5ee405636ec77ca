//! Fixed data describing the modelled circuit.

/// Diode curve generation and sparse antiparallel table
pub mod diode;
/// Polyphase anti-aliasing kernel
pub mod decimation;
/// Tone-control pole/zero rows
pub mod tone;

/// Feedback resistor in series with the drive pot (Ω).
pub const R_FEEDBACK: f64 = 51_000.0;
/// Feedback capacitor across the diodes (F).
pub const C_FEEDBACK: f64 = 51e-12;
/// Resistor in the ground leg of the clipping stage (Ω).
pub const R_GROUND: f64 = 4_700.0;
/// Full travel of the drive pot (Ω).
pub const R_DRIVE: f64 = 500_000.0;

/// Input is multiplied by this to get volts; output is divided by it.
pub const FULL_SCALE_VOLTAGE: f64 = 3.88;

/// First-order ground-leg high-pass, discretised at 192 kHz:
/// `y[n] = HIGH_PASS_B * (x[n] - x[n-1]) - HIGH_PASS_A * y[n-1]`.
pub const HIGH_PASS_A: f64 = -0.976696930369159;
pub const HIGH_PASS_B: f64 = 0.988348465184579;
