/*
 * ONE BLOCK
 * =========
 *
 *   Idle ──► LoadHistory ──► Upsample ──► ClipAndFilter ×4N ──► Decimate ──► StoreHistory ──► Idle
 *    │
 *    └── unsupported rate / block size / short output ──► silence, state untouched
 *
 *   LoadHistory    input × full-scale → volts, written after 6 samples of carried input
 *   Upsample       7-point derivative, quarter-point kernels: N → 4N (sample, derivative)
 *   ClipAndFilter  ground-leg HPF → demand → inverse lookup → tone biquad, per oversampled sample
 *   Decimate       4 polyphase branches, 27 samples of carried history each
 *   StoreHistory   every carryover buffer keeps its tail for the next block
 *
 * Parameters are taken once per block. Gain rebuilds the solver keys and
 * tone swaps the biquad coefficients, both only when the value changed.
 */

use crate::dsp::clipper::ClippingStage;
use crate::dsp::decimate::Decimator;
use crate::dsp::filter::ToneFilter;
use crate::dsp::upsample::{Oversampled, Upsampler};
use crate::engine::config::{check_sample_rate, EngineConfig};
use crate::error::{ConfigError, Error};
use crate::io::converter::{samples_to_volts, silence, volts_to_outputs};
use crate::io::Sample;
use crate::params::ParamSnapshot;
use crate::tables::diode::sparse_antiparallel;
use crate::{is_supported_block_size, OVERSAMPLING};

/// What happened to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOutcome {
    /// Audio was rendered. `clamped` counts oversampled steps where the
    /// clipping demand fell outside the diode table.
    Rendered { clamped: usize },
    UnsupportedSampleRate,
    UnsupportedBlockSize,
    /// An output channel was shorter than the input block.
    OutputTooShort,
}

impl BlockOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, BlockOutcome::Rendered { .. })
    }
}

/// Mono TS808 overdrive at 48 kHz, oversampled 4× internally.
///
/// One instance per channel; all state is owned here.
pub struct Processor {
    config: EngineConfig,
    sample_rate: f64,

    upsampler: Upsampler,
    clipper: ClippingStage,
    tone: ToneFilter,
    decimator: Decimator,

    oversampled: Vec<Oversampled>,
    processed: Vec<f64>,
    decimated: Vec<f64>,
}

impl Processor {
    pub fn new(config: EngineConfig) -> Result<Self, Error> {
        config.validate()?;

        let table = sparse_antiparallel(config.sparse_error_bound)?;
        let table_len = table.len();
        let mut clipper = ClippingStage::new(table, config.components)?;
        clipper.set_gain(config.initial_params.gain);

        let max = config.max_block_size;
        log::debug!(
            "processor ready: max block {}, {} point diode table, full scale {} V",
            max,
            table_len,
            config.full_scale_voltage
        );
        if let Err(e) = check_sample_rate(config.sample_rate) {
            log::warn!("{e}; blocks will be silent until prepared at 48000 Hz");
        }

        Ok(Self {
            config,
            sample_rate: config.sample_rate,
            upsampler: Upsampler::new(max),
            clipper,
            tone: ToneFilter::new(config.initial_params.tone),
            decimator: Decimator::new(max),
            oversampled: vec![Oversampled::default(); max * OVERSAMPLING],
            processed: vec![0.0; max * OVERSAMPLING],
            decimated: vec![0.0; max],
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Called by the host before streaming. The rate is stored either way;
    /// an unsupported one makes every block a silent no-op.
    pub fn prepare(&mut self, sample_rate: f64, max_block_size: usize) -> Result<(), ConfigError> {
        self.sample_rate = sample_rate;
        if let Err(e) = check_sample_rate(sample_rate) {
            log::warn!("{e}");
            return Err(e);
        }
        if max_block_size > self.config.max_block_size || !is_supported_block_size(max_block_size) {
            log::warn!(
                "host block size {} not supported (processor max {})",
                max_block_size,
                self.config.max_block_size
            );
            return Err(ConfigError::UnsupportedBlockSize(max_block_size));
        }
        log::info!("prepared at {} Hz, blocks up to {}", sample_rate, max_block_size);
        Ok(())
    }

    /// Render one block. The result goes to every channel in `outputs`.
    pub fn process_block<S: Sample>(
        &mut self,
        params: ParamSnapshot,
        input: &[S],
        outputs: &mut [&mut [S]],
    ) -> BlockOutcome {
        let n = input.len();
        if self.sample_rate != crate::BASE_SAMPLE_RATE {
            silence(outputs);
            return BlockOutcome::UnsupportedSampleRate;
        }
        if !is_supported_block_size(n) || n > self.config.max_block_size {
            silence(outputs);
            return BlockOutcome::UnsupportedBlockSize;
        }
        if outputs.iter().any(|channel| channel.len() < n) {
            silence(outputs);
            return BlockOutcome::OutputTooShort;
        }

        self.tone.set_tone(params.tone);
        self.clipper.set_gain(params.gain);

        let full_scale = self.config.full_scale_voltage;
        samples_to_volts(input, full_scale, self.upsampler.input_mut(n));

        let m = n * OVERSAMPLING;
        let oversampled = &mut self.oversampled[..m];
        self.upsampler.render(oversampled);

        for (o, y) in oversampled.iter().zip(self.processed[..m].iter_mut()) {
            let clipped = self.clipper.next_sample(o.sample, o.derivative);
            *y = self.tone.next_sample(clipped);
        }

        self.decimator.process(&self.processed[..m], &mut self.decimated[..n]);
        volts_to_outputs(&self.decimated[..n], full_scale, params.level, outputs);

        BlockOutcome::Rendered {
            clamped: self.clipper.take_clamped_count(),
        }
    }

    /// Back to silence: all carried history and filter memory cleared.
    /// Parameters and the built tables are kept.
    pub fn reset(&mut self) {
        self.upsampler.reset();
        self.clipper.reset();
        self.tone.reset();
        self.decimator.reset();
    }
}
