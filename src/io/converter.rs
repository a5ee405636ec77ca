use crate::io::sample::Sample;

/// Host samples → circuit volts. Non-finite samples are read as silence so
/// they never reach filter memory.
pub fn samples_to_volts<S: Sample>(input: &[S], full_scale: f64, dst: &mut [f64]) {
    for (v, s) in dst.iter_mut().zip(input) {
        let x = s.to_f64();
        *v = if x.is_finite() { x * full_scale } else { 0.0 };
    }
}

/// Circuit volts → host samples, with the output level applied.
///
/// The factor of two puts the level knob's midpoint at unity gain. The same
/// signal goes to every channel.
pub fn volts_to_outputs<S: Sample>(
    volts: &[f64],
    full_scale: f64,
    level: f64,
    outputs: &mut [&mut [S]],
) {
    for channel in outputs.iter_mut() {
        for (o, v) in channel.iter_mut().zip(volts) {
            *o = S::from_f64(v / full_scale * 2.0 * level);
        }
    }
}

pub fn silence<S: Sample>(outputs: &mut [&mut [S]]) {
    for channel in outputs.iter_mut() {
        channel.fill(S::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unity_at_half_level() {
        let mut volts = [0.0; 3];
        samples_to_volts(&[0.25f32, -0.5, 1.0], 3.88, &mut volts);
        assert!((volts[2] - 3.88).abs() < 1e-12);

        let mut left = [0.0f32; 3];
        let mut right = [0.0f32; 3];
        volts_to_outputs(&volts, 3.88, 0.5, &mut [&mut left[..], &mut right[..]]);
        assert_eq!(left, [0.25, -0.5, 1.0]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_non_finite_samples_become_silence() {
        let mut volts = [1.0; 4];
        samples_to_volts(&[f32::NAN, f32::INFINITY, 0.5, f32::NEG_INFINITY], 3.88, &mut volts);
        assert_eq!(volts, [0.0, 0.0, 0.5 * 3.88, 0.0]);
    }

    #[test]
    fn test_silence_zeroes_every_channel() {
        let mut a = [1.0f64; 4];
        let mut b = [2.0f64; 4];
        silence(&mut [&mut a[..], &mut b[..]]);
        assert_eq!(a, [0.0; 4]);
        assert_eq!(b, [0.0; 4]);
    }
}
