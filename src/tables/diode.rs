//! 1N4148 clipping-diode model.
//!
//! The dense curve is a Shockley fit sampled on [-1 V, 1 V]. The fit is pinned
//! so that its slope at +1 V equals the slope used to extrapolate past the
//! table, which keeps the curve C1-continuous at the edge.

use crate::dsp::iv_curve::{IvCurve, Measurement};
use crate::dsp::sparse::sparsify;
use crate::error::TableError;

/// Samples in the dense table, including both endpoints.
pub const DENSE_POINTS: usize = 10_001;
/// Dense table spans [-DENSE_V_MAX, DENSE_V_MAX] volts.
pub const DENSE_V_MAX: f64 = 1.0;
/// Ideality factor times thermal voltage (V).
pub const EMISSION_THERMAL_VOLTAGE: f64 = 1.92 * 0.02677;
/// dI/dV used above the last table point (A/V).
pub const EXTRAPOLATION_SLOPE: f64 = 1.7408961998;
/// Relative error allowed when thinning the antiparallel curve.
pub const DEFAULT_SPARSE_ERROR: f64 = 0.005;

/// Saturation current that makes dI/dV at `DENSE_V_MAX` equal the
/// extrapolation slope.
pub fn saturation_current() -> f64 {
    EXTRAPOLATION_SLOPE * EMISSION_THERMAL_VOLTAGE / (DENSE_V_MAX / EMISSION_THERMAL_VOLTAGE).exp()
}

/// Diode current at `v` volts.
#[inline]
pub fn shockley_current(v: f64) -> f64 {
    saturation_current() * (v / EMISSION_THERMAL_VOLTAGE).exp_m1()
}

/// Dense single-diode table: `DENSE_POINTS` evenly spaced samples.
pub fn dense_measurements() -> Vec<Measurement> {
    (0..DENSE_POINTS)
        .map(|i| {
            let voltage = -DENSE_V_MAX + 2.0 * DENSE_V_MAX * i as f64 / (DENSE_POINTS - 1) as f64;
            Measurement::new(voltage, shockley_current(voltage))
        })
        .collect()
}

pub fn diode_1n4148() -> Result<IvCurve, TableError> {
    IvCurve::new(dense_measurements(), EXTRAPOLATION_SLOPE)
}

/// Positive half of the antiparallel pair, thinned to `error_bound`.
///
/// The result starts at the origin, ends at the last dense point and is what
/// the clipping solver searches.
pub fn sparse_antiparallel(error_bound: f64) -> Result<Vec<Measurement>, TableError> {
    let pair = diode_1n4148()?.antiparallel();
    let points = pair.points();
    let start = points
        .iter()
        .position(|m| m.voltage >= 0.0)
        .ok_or(TableError::NoPositiveHalf)?;
    let sparse = sparsify(&points[start..], error_bound)?;
    log::debug!(
        "antiparallel diode table thinned from {} to {} points (bound {})",
        points.len() - start,
        sparse.len(),
        error_bound
    );
    Ok(sparse)
}
