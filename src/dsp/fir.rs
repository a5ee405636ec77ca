use crate::dsp::carryover::CarryoverBuffer;
use crate::dsp::math::dot;

/// Whether a FIR pass replaces or adds to what is already in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Overwrite,
    Accumulate,
}

/// Static description of a FIR pass: taps, decimation stride, output mode.
///
/// Output `n` is `dot(taps, window[n * stride..n * stride + taps.len()])`,
/// where the window is `history()` samples of carried input followed by the
/// current block.
#[derive(Debug, Clone, Copy)]
pub struct FirConfig {
    pub taps: &'static [f64],
    pub stride: usize,
    pub mode: OutputMode,
}

impl FirConfig {
    pub const fn new(taps: &'static [f64], stride: usize, mode: OutputMode) -> Self {
        Self { taps, stride, mode }
    }

    /// Input samples carried between blocks. A multiple of the stride so the
    /// output phase is the same in every block.
    pub const fn history(&self) -> usize {
        (self.taps.len() - 1) / self.stride * self.stride
    }

    pub const fn outputs_for(&self, block_len: usize) -> usize {
        block_len / self.stride
    }

    /// Run the pass over `window` (history + block) into `out`.
    ///
    /// `out` may be shorter than `outputs_for(block)`; extra outputs are not
    /// computed.
    #[inline]
    pub fn apply(&self, window: &[f64], out: &mut [f64]) {
        let taps = self.taps.len();
        for (n, y) in out.iter_mut().enumerate() {
            let start = n * self.stride;
            let Some(segment) = window.get(start..start + taps) else {
                break;
            };
            let v = dot(self.taps, segment);
            match self.mode {
                OutputMode::Overwrite => *y = v,
                OutputMode::Accumulate => *y += v,
            }
        }
    }
}

/// A `FirConfig` together with the input history it needs across blocks.
pub struct PolyphaseFir {
    config: FirConfig,
    input: CarryoverBuffer,
}

impl PolyphaseFir {
    pub fn new(config: FirConfig, max_block: usize) -> Self {
        Self {
            input: CarryoverBuffer::new(config.history(), max_block),
            config,
        }
    }

    pub fn config(&self) -> &FirConfig {
        &self.config
    }

    /// Slot for the next block of input.
    pub fn input_mut(&mut self, len: usize) -> &mut [f64] {
        self.input.block_mut(len)
    }

    pub fn load(&mut self, block: &[f64]) {
        self.input.load(block);
    }

    /// History followed by the current block.
    pub fn window(&self) -> &[f64] {
        self.input.window()
    }

    pub fn apply(&self, out: &mut [f64]) {
        self.config.apply(self.input.window(), out);
    }

    /// Finish the block: keep the input tail as history.
    pub fn carry(&mut self) {
        self.input.carry();
    }

    pub fn reset(&mut self) {
        self.input.reset();
    }
}
