//! Greedy thinning of a dense curve into a piecewise-linear one.

/*
 * SPARSIFICATION
 * ==============
 *
 * The solver does a binary search per oversampled sample, so a 10k point
 * table costs ~14 probes where a 100 point one costs ~7. The dense curve is
 * therefore thinned before use.
 *
 * Starting from the first kept point S, grow a segment S..E one point at a
 * time while every dense point strictly between S and E is reproduced by the
 * chord S-E to within a relative error bound:
 *
 *     current
 *        │                          E
 *        │                      ___/
 *        │                 ___/ ·
 *        │            ___/ ·          · dense points, all within
 *        │       ___/ ·                 (1 ± bound) of the chord
 *        │  ___/ ·
 *        │ S
 *        └──────────────────────────────── voltage
 *
 * When growing fails, the last good E is kept and becomes the next S. The
 * final dense point is always kept so the table spans the full range.
 */

use crate::dsp::iv_curve::{validate_points, Measurement};
use crate::dsp::math::lerp;
use crate::error::TableError;

/// Thin `dense` so that linear interpolation between the kept points stays
/// within `error_bound` (relative) of every dropped point.
///
/// `dense` must be strictly increasing in voltage. The first and last points
/// are always kept.
pub fn sparsify(dense: &[Measurement], error_bound: f64) -> Result<Vec<Measurement>, TableError> {
    if !(error_bound > 0.0 && error_bound < 1.0) {
        return Err(TableError::InvalidErrorBound(error_bound));
    }
    validate_points(dense)?;

    let n = dense.len();
    let mut kept = vec![0];
    let mut start = 0;
    let mut end = start + 2;

    while end < n {
        while end < n && chord_fits(dense, start, end, error_bound) {
            end += 1;
        }
        end -= 1;
        kept.push(end);
        start = end;
        end = start + 2;
    }
    if kept.last() != Some(&(n - 1)) {
        kept.push(n - 1);
    }

    Ok(kept.into_iter().map(|i| dense[i]).collect())
}

fn chord_fits(dense: &[Measurement], start: usize, end: usize, error_bound: f64) -> bool {
    let (s, e) = (dense[start], dense[end]);
    dense[start + 1..end].iter().all(|p| {
        let v = chord_at(s, e, p.voltage);
        (1.0 - error_bound) * p.current <= v && v <= (1.0 + error_bound) * p.current
    })
}

/// Chord value, interpolated from whichever end is nearer.
fn chord_at(s: Measurement, e: Measurement, voltage: f64) -> f64 {
    let from_start = voltage - s.voltage;
    let from_end = e.voltage - voltage;
    let span = e.voltage - s.voltage;
    if from_start > from_end {
        lerp(s.current, e.current, from_start / span)
    } else {
        lerp(e.current, s.current, from_end / span)
    }
}
