use crate::dsp::math::lerp;
use crate::tables::tone::{ToneRow, TONE_TABLE};
use crate::tables::{HIGH_PASS_A, HIGH_PASS_B};

/*
| filter          | runs at  | order | coefficients                         |
| --------------- | -------- | ----- | ------------------------------------ |
| ground-leg HPF  | 192 kHz  | 1     | fixed                                |
| tone stack      | 192 kHz  | 2     | interpolated from the tone-knob rows |
*/

/// Direct-form-I biquad coefficients, `a0` normalised to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneCoefficients {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl ToneCoefficients {
    /// Expand a factored row: `g (1 - z1/z)(1 - z2/z) / ((1 - p1/z)(1 - p2/z))`.
    pub fn from_row(row: &ToneRow) -> Self {
        let g = row.gain;
        Self {
            b0: g,
            b1: -g * (row.z1 + row.z2),
            b2: g * row.z1 * row.z2,
            a1: -(row.p1 + row.p2),
            a2: row.p1 * row.p2,
        }
    }

    /// Coefficients for a tone-knob position in [0, 1].
    ///
    /// Poles, zeros and gain are interpolated between the two bracketing
    /// rows before expansion, which keeps every intermediate setting stable.
    pub fn from_tone(tone: f64) -> Self {
        let tone = if tone.is_nan() {
            0.0
        } else {
            tone.clamp(0.0, 1.0)
        };
        let last = TONE_TABLE.len() - 1;
        if tone == 0.0 {
            return Self::from_row(&TONE_TABLE[0]);
        }
        if tone == 1.0 {
            return Self::from_row(&TONE_TABLE[last]);
        }

        let upper = TONE_TABLE.partition_point(|row| row.position < tone).max(1);
        let (lo, hi) = (&TONE_TABLE[upper - 1], &TONE_TABLE[upper]);
        let t = (tone - lo.position) / (hi.position - lo.position);
        Self::from_row(&ToneRow::new(
            lerp(lo.p1, hi.p1, t),
            lerp(lo.p2, hi.p2, t),
            lerp(lo.z1, hi.z1, t),
            lerp(lo.z2, hi.z2, t),
            lerp(lo.gain, hi.gain, t),
            tone,
        ))
    }
}

/// Tone stack plus output buffer, as one biquad.
pub struct ToneFilter {
    coeffs: ToneCoefficients,
    tone: f64,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl ToneFilter {
    pub const DEFAULT_TONE: f64 = 0.5;

    pub fn new(tone: f64) -> Self {
        Self {
            coeffs: ToneCoefficients::from_tone(tone),
            tone,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    #[inline]
    pub fn next_sample(&mut self, x: f64) -> f64 {
        let c = &self.coeffs;
        let y = c.b0 * x + c.b1 * self.x1 + c.b2 * self.x2 - c.a1 * self.y1 - c.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }

    pub fn render(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }

    /// Recomputes coefficients only when the knob actually moved.
    /// Filter memory is kept either way.
    pub fn set_tone(&mut self, tone: f64) {
        if tone != self.tone {
            self.coeffs = ToneCoefficients::from_tone(tone);
            self.tone = tone;
        }
    }

    pub fn tone(&self) -> f64 {
        self.tone
    }

    pub fn coefficients(&self) -> &ToneCoefficients {
        &self.coeffs
    }

    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

impl Default for ToneFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TONE)
    }
}

/// First-order high-pass in the clipping stage's ground leg.
#[derive(Default)]
pub struct GroundLegHighPass {
    prev_scaled: f64,
    prev_out: f64,
}

impl GroundLegHighPass {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn next_sample(&mut self, x: f64) -> f64 {
        let scaled = HIGH_PASS_B * x;
        let y = scaled - self.prev_scaled - HIGH_PASS_A * self.prev_out;
        self.prev_scaled = scaled;
        self.prev_out = y;
        y
    }

    pub fn reset(&mut self) {
        self.prev_scaled = 0.0;
        self.prev_out = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::tone::TONE_ROW_COUNT;

    #[test]
    fn test_lookup_hits_rows_exactly() {
        assert_eq!(
            ToneCoefficients::from_tone(0.0),
            ToneCoefficients::from_row(&TONE_TABLE[0])
        );
        assert_eq!(
            ToneCoefficients::from_tone(0.5),
            ToneCoefficients::from_row(&TONE_TABLE[10])
        );
        assert_eq!(
            ToneCoefficients::from_tone(1.0),
            ToneCoefficients::from_row(&TONE_TABLE[TONE_ROW_COUNT - 1])
        );
    }

    #[test]
    fn test_lookup_clamps_out_of_range() {
        assert_eq!(ToneCoefficients::from_tone(-3.0), ToneCoefficients::from_tone(0.0));
        assert_eq!(ToneCoefficients::from_tone(7.0), ToneCoefficients::from_tone(1.0));
        assert_eq!(ToneCoefficients::from_tone(f64::NAN), ToneCoefficients::from_tone(0.0));
    }

    #[test]
    fn test_interpolated_settings_stay_stable() {
        for i in 0..=200 {
            let c = ToneCoefficients::from_tone(i as f64 / 200.0);
            // Jury conditions for z^2 + a1 z + a2.
            assert!(c.a2.abs() < 1.0, "a2 {}", c.a2);
            assert!(c.a1.abs() < 1.0 + c.a2, "a1 {} a2 {}", c.a1, c.a2);
        }
    }

    fn largest_jump(a: &ToneCoefficients, b: &ToneCoefficients) -> f64 {
        [
            a.b0 - b.b0,
            a.b1 - b.b1,
            a.b2 - b.b2,
            a.a1 - b.a1,
            a.a2 - b.a2,
        ]
        .iter()
        .fold(0.0f64, |m, d| m.max(d.abs()))
    }

    #[test]
    fn test_small_knob_moves_give_small_coefficient_moves() {
        let step = 1e-4;
        let mut prev = ToneCoefficients::from_tone(0.0);
        for i in 1..=10_000 {
            let tone = i as f64 * step;
            let next = ToneCoefficients::from_tone(tone);
            let jump = largest_jump(&prev, &next);
            assert!(jump <= 4.0 * step, "jump {} at tone {}", jump, tone);
            prev = next;
        }

        // Straddling row positions.
        for (a, b) in [(0.1, 0.14), (0.0999, 0.1001), (0.98, 1.0), (0.9799, 0.9801)] {
            let jump = largest_jump(&ToneCoefficients::from_tone(a), &ToneCoefficients::from_tone(b));
            assert!(jump <= 4.0 * (b - a), "jump {} between {} and {}", jump, a, b);
        }
    }

    #[test]
    fn test_impulse_response_decays() {
        let mut f = ToneFilter::default();
        let mut buf = vec![0.0; 192_000];
        buf[0] = 1.0;
        f.render(&mut buf);
        let tail = buf[150_000..].iter().fold(0.0f64, |m, x| m.max(x.abs()));
        assert!(tail < 1e-9, "tail {}", tail);
    }

    #[test]
    fn test_set_tone_keeps_state_and_skips_unchanged() {
        let mut f = ToneFilter::new(0.3);
        let before = *f.coefficients();
        f.set_tone(0.3);
        assert_eq!(*f.coefficients(), before);

        f.next_sample(1.0);
        f.set_tone(0.8);
        assert_eq!(f.tone(), 0.8);
        assert_ne!(*f.coefficients(), before);
        // Memory survives a coefficient change.
        assert_ne!(f.next_sample(0.0), 0.0);
    }

    #[test]
    fn test_high_pass_blocks_dc() {
        let mut hp = GroundLegHighPass::new();
        let mut y = 0.0;
        for _ in 0..100_000 {
            y = hp.next_sample(1.0);
        }
        assert!(y.abs() < 1e-9, "residual {}", y);
        hp.reset();
        assert!((hp.next_sample(1.0) - HIGH_PASS_B).abs() < 1e-15);
    }
}
