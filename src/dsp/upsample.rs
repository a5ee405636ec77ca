//! 4× upsampling that carries the signal's time derivative along with it.

/*
 * HERMITE-STYLE UPSAMPLING
 * ========================
 *
 * The clipping solver needs dV/dt at 192 kHz (it drives the feedback
 * capacitor's current). Rather than differentiate after upsampling, the
 * derivative is estimated once at 48 kHz with a 7-point central difference
 *
 *     v'[n] ≈ (-v[n-3] + 9v[n-2] - 45v[n-1] + 45v[n+1] - 9v[n+2] + v[n+3]) / 60h
 *
 * and then both value and derivative are interpolated to the quarter points
 * using four samples and their four derivatives:
 *
 *     base:   w0      w1      w2      w3
 *              ●───────●───┬───┬───┬───●───────●
 *                          A   B   C   w2 (itself)
 *
 * A, B and C sit at 1/4, 2/4 and 3/4 of the way from w1 to w2. Each has a
 * fixed kernel for the value and one for the derivative. The fourth output
 * of every group is w2 with its own derivative.
 *
 * The kernels reproduce constants and straight lines exactly, so a DC input
 * comes out as DC with zero derivative, and a ramp comes out as a ramp with
 * the right slope.
 */

use crate::dsp::carryover::CarryoverBuffer;
use crate::dsp::fir::{FirConfig, OutputMode, PolyphaseFir};
use crate::dsp::math::dot;
use crate::{H48, OVERSAMPLING};

/// A 192 kHz sample and its time derivative (V and V/s).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oversampled {
    pub sample: f64,
    pub derivative: f64,
}

const STENCIL_SCALE: f64 = 1.0 / (H48 * 60.0);

static DERIVATIVE_STENCIL: [f64; 7] = [
    -1.0 * STENCIL_SCALE,
    9.0 * STENCIL_SCALE,
    -45.0 * STENCIL_SCALE,
    0.0,
    45.0 * STENCIL_SCALE,
    -9.0 * STENCIL_SCALE,
    1.0 * STENCIL_SCALE,
];

/// Raw-input samples kept between blocks.
pub const INPUT_HISTORY: usize = 6;
/// Derivative samples kept between blocks.
pub const DERIVATIVE_HISTORY: usize = 3;

const KERNEL_WIDTH: usize = 4;

struct QuarterPointKernel {
    value: [f64; KERNEL_WIDTH],
    value_slope: [f64; KERNEL_WIDTH],
    value_norm: f64,
    rate: [f64; KERNEL_WIDTH],
    rate_slope: [f64; KERNEL_WIDTH],
    rate_norm: f64,
}

impl QuarterPointKernel {
    #[inline]
    fn evaluate(&self, w: &[f64], dw: &[f64]) -> Oversampled {
        let mut sample = dot(&self.value, w);
        sample = sample + dot(&self.value_slope, dw);
        sample = sample / self.value_norm;

        let mut derivative = dot(&self.rate, w);
        derivative = derivative + dot(&self.rate_slope, dw);
        derivative = derivative / self.rate_norm;

        Oversampled { sample, derivative }
    }
}

const H: f64 = H48;

#[rustfmt::skip]
static KERNELS: [QuarterPointKernel; 3] = [
    QuarterPointKernel {
        value: [3283.0, 165375.0, 25725.0, 2225.0],
        value_slope: [735.0 * H, 33075.0 * H, -11025.0 * H, -525.0 * H],
        value_norm: 196608.0,
        rate: [11935.0, -174825.0, 152145.0, 10745.0],
        rate_slope: [2751.0 * H, 44415.0 * H, -58905.0 * H, -2505.0 * H],
        rate_norm: 147456.0 * H,
    },
    QuarterPointKernel {
        value: [13.0, 243.0, 243.0, 13.0],
        value_slope: [3.0 * H, 81.0 * H, -81.0 * H, -3.0 * H],
        value_norm: 512.0,
        rate: [-5.0, -405.0, 405.0, 5.0],
        rate_slope: [-1.0 * H, -81.0 * H, -81.0 * H, -1.0 * H],
        rate_norm: 256.0 * H,
    },
    QuarterPointKernel {
        value: [2225.0, 25725.0, 165375.0, 3283.0],
        value_slope: [525.0 * H, 11025.0 * H, -33075.0 * H, -735.0 * H],
        value_norm: 196608.0,
        rate: [-10745.0, -152145.0, 174825.0, -11935.0],
        rate_slope: [-2505.0 * H, -58905.0 * H, 44415.0 * H, 2751.0 * H],
        rate_norm: 147456.0 * H,
    },
];

pub struct Upsampler {
    input: PolyphaseFir,
    derivative: CarryoverBuffer,
    block_len: usize,
}

impl Upsampler {
    pub fn new(max_block: usize) -> Self {
        let stencil = FirConfig::new(&DERIVATIVE_STENCIL, 1, OutputMode::Overwrite);
        debug_assert_eq!(stencil.history(), INPUT_HISTORY);
        Self {
            input: PolyphaseFir::new(stencil, max_block),
            derivative: CarryoverBuffer::new(DERIVATIVE_HISTORY, max_block),
            block_len: 0,
        }
    }

    /// Slot for the next block of base-rate input, in volts.
    pub fn input_mut(&mut self, len: usize) -> &mut [f64] {
        let slot = self.input.input_mut(len);
        self.block_len = slot.len();
        slot
    }

    /// Upsample the loaded block into `out` (`4 * len` entries) and carry
    /// history forward.
    pub fn render(&mut self, out: &mut [Oversampled]) {
        let n = self.block_len;

        let din = self.derivative.block_mut(n);
        self.input.apply(din);

        let w_in = self.input.window();
        let w_der = self.derivative.window();
        for (i, group) in out.chunks_exact_mut(OVERSAMPLING).take(n).enumerate() {
            let w = &w_in[i..i + KERNEL_WIDTH];
            let dw = &w_der[i..i + KERNEL_WIDTH];
            for (slot, kernel) in group.iter_mut().zip(KERNELS.iter()) {
                *slot = kernel.evaluate(w, dw);
            }
            group[3] = Oversampled {
                sample: w_in[i + 2],
                derivative: w_der[i + 2],
            };
        }

        self.input.carry();
        self.derivative.carry();
        self.block_len = 0;
    }

    pub fn reset(&mut self) {
        self.input.reset();
        self.derivative.reset();
        self.block_len = 0;
    }
}
