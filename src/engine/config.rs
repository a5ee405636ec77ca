#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::clipper::CircuitComponents;
use crate::error::{ConfigError, Error, TableError};
use crate::params::ParamSnapshot;
use crate::tables::{diode::DEFAULT_SPARSE_ERROR, FULL_SCALE_VOLTAGE};
use crate::{is_supported_block_size, BASE_SAMPLE_RATE, MAX_BLOCK_SIZE};

/// Everything fixed at construction time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Host rate. Blocks are only rendered at 48 kHz.
    pub sample_rate: f64,
    /// Largest block the host will send; sizes the scratch buffers.
    pub max_block_size: usize,
    /// Volts corresponding to a full-scale sample.
    pub full_scale_voltage: f64,
    pub components: CircuitComponents,
    /// Relative error allowed when thinning the diode table.
    pub sparse_error_bound: f64,
    pub initial_params: ParamSnapshot,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: BASE_SAMPLE_RATE,
            max_block_size: MAX_BLOCK_SIZE,
            full_scale_voltage: FULL_SCALE_VOLTAGE,
            components: CircuitComponents::default(),
            sparse_error_bound: DEFAULT_SPARSE_ERROR,
            initial_params: ParamSnapshot::default(),
        }
    }
}

impl EngineConfig {
    /// Checks values that would make the processor unbuildable.
    ///
    /// The sample rate is not checked here: a processor built at another
    /// rate still exists, it just renders silence until prepared at 48 kHz.
    pub fn validate(&self) -> Result<(), Error> {
        if !is_supported_block_size(self.max_block_size) {
            return Err(ConfigError::UnsupportedBlockSize(self.max_block_size).into());
        }
        if !(self.full_scale_voltage.is_finite() && self.full_scale_voltage > 0.0) {
            return Err(ConfigError::InvalidFullScale(self.full_scale_voltage).into());
        }
        self.components.validate()?;
        if !(self.sparse_error_bound > 0.0 && self.sparse_error_bound < 1.0) {
            return Err(TableError::InvalidErrorBound(self.sparse_error_bound).into());
        }
        Ok(())
    }
}

pub fn check_sample_rate(sample_rate: f64) -> Result<(), ConfigError> {
    if sample_rate == BASE_SAMPLE_RATE {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedSampleRate(sample_rate))
    }
}
