//! Block-level orchestration.
//!
//! [`Processor`] owns the signal chain and renders one block at a time.
//! [`OverdriveEngine`] wraps it with the control-thread parameter handoff
//! and per-block automation.

pub mod config;
pub mod overdrive;
pub mod processor;

pub use config::EngineConfig;
pub use overdrive::OverdriveEngine;
pub use processor::{BlockOutcome, Processor};
