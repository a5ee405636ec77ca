use crate::dsp::math::lerp;
use crate::error::TableError;

/// Anything closer than this to a table edge is treated as on the edge.
const EDGE_EPSILON: f64 = 1e-12;

/// One (voltage, current) sample of a diode curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    pub voltage: f64,
    pub current: f64,
}

impl Measurement {
    pub const fn new(voltage: f64, current: f64) -> Self {
        Self { voltage, current }
    }
}

/// Current as a function of voltage, linearly interpolated between samples.
///
/// Below the first sample the curve is flat at the first current. Above the
/// last sample it continues as a straight line with `extrapolation_slope`.
#[derive(Debug, Clone)]
pub struct IvCurve {
    points: Vec<Measurement>,
    extrapolation_slope: f64,
}

impl IvCurve {
    pub fn new(points: Vec<Measurement>, extrapolation_slope: f64) -> Result<Self, TableError> {
        validate_points(&points)?;
        Ok(Self {
            points,
            extrapolation_slope,
        })
    }

    pub fn points(&self) -> &[Measurement] {
        &self.points
    }

    pub fn extrapolation_slope(&self) -> f64 {
        self.extrapolation_slope
    }

    pub fn evaluate(&self, voltage: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];

        if voltage < first.voltage + EDGE_EPSILON {
            return first.current;
        }
        if last.voltage - EDGE_EPSILON < voltage {
            return last.current + self.extrapolation_slope * (voltage - last.voltage);
        }

        let upper = self.points.partition_point(|m| m.voltage <= voltage);
        interpolate_clamped(self.points[upper - 1], self.points[upper], voltage)
    }

    /// Current through two of these diodes wired antiparallel.
    pub fn antiparallel_evaluate(&self, voltage: f64) -> f64 {
        self.evaluate(voltage) - self.evaluate(-voltage)
    }

    /// Tabulated antiparallel pair.
    ///
    /// Pairs each sample with its mirror image in the table, so the voltage
    /// grid must be symmetric about zero for the result to be exact.
    pub fn antiparallel(&self) -> IvCurve {
        let n = self.points.len();
        let points = (0..n)
            .map(|i| {
                Measurement::new(
                    self.points[i].voltage,
                    self.points[i].current - self.points[n - 1 - i].current,
                )
            })
            .collect();
        IvCurve {
            points,
            extrapolation_slope: 2.0 * self.extrapolation_slope,
        }
    }
}

/// Straight line through `lower` and `upper`, with `voltage` clamped to the segment.
pub fn interpolate_clamped(lower: Measurement, upper: Measurement, voltage: f64) -> f64 {
    let v = voltage.clamp(lower.voltage, upper.voltage);
    lerp(
        lower.current,
        upper.current,
        (v - lower.voltage) / (upper.voltage - lower.voltage),
    )
}

pub(crate) fn validate_points(points: &[Measurement]) -> Result<(), TableError> {
    if points.len() < 2 {
        return Err(TableError::TooFewPoints {
            len: points.len(),
            min: 2,
        });
    }
    match points
        .windows(2)
        .position(|pair| !(pair[0].voltage < pair[1].voltage))
    {
        Some(i) => Err(TableError::NotIncreasing { index: i + 1 }),
        None => Ok(()),
    }
}
