//! Op-amp clipping stage with antiparallel diodes in the feedback loop.

/*
 * SOLVING THE FEEDBACK LOOP
 * =========================
 *
 *                 ┌──────┤◄├──────┐
 *                 ├──────┤►├──────┤   diode pair  I_d(Δ)
 *                 ├──────┤├───────┤   C_f
 *                 └──[R_f + g·R_d]┘
 *        x ──(+)──────────────────┴─── out = x + Δ
 *             │
 *         R_g + HPF to ground
 *
 * With x the input and Δ the voltage across the feedback network, the
 * current demanded by the ground leg must flow through the feedback network:
 *
 *     demand = hp(x)/R_g + (C_f/h)(prev_out - x) + C_f·x'
 *            = A·Δ + I_d(Δ),   A = C_f/h + 1/(R_f + g·R_d)
 *
 * The right-hand side is monotonic in Δ, so instead of iterating we store
 * keys k_i = A·v_i + I_d(v_i) over the sparse diode table and invert by
 * binary search plus linear interpolation. The diode pair is odd, so only
 * the positive half is stored and the sign is restored at the end.
 *
 * A only depends on the drive knob, so keys are rebuilt at most once per
 * block. When |demand| reaches past the last key the step reports
 * `ClipResult::Clamped` and Δ is taken as zero.
 */

use crate::dsp::filter::GroundLegHighPass;
use crate::dsp::iv_curve::{validate_points, Measurement};
use crate::dsp::math::lerp;
use crate::error::{ConfigError, TableError};
use crate::tables;
use crate::H192;

/// Outcome of one inverse lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipResult {
    /// Voltage across the feedback network.
    Solved(f64),
    /// Demand outside the table; the caller should fall back to zero.
    Clamped,
}

impl ClipResult {
    #[inline]
    pub fn delta(self) -> f64 {
        match self {
            ClipResult::Solved(v) => v,
            ClipResult::Clamped => 0.0,
        }
    }

    pub fn is_clamped(self) -> bool {
        matches!(self, ClipResult::Clamped)
    }
}

/// Inverse lookup of `A·Δ + I_d(Δ) = demand` over a sparse diode table.
pub struct ClippingSolver {
    table: Vec<Measurement>,
    keys: Vec<f64>,
    linear_slope: f64,
}

impl ClippingSolver {
    /// `table` is the positive half of the antiparallel pair, starting at the
    /// origin and increasing in both voltage and current.
    pub fn new(table: Vec<Measurement>) -> Result<Self, TableError> {
        validate_points(&table)?;
        let keys = table.iter().map(|m| m.current).collect();
        Ok(Self {
            table,
            keys,
            linear_slope: 0.0,
        })
    }

    pub fn table(&self) -> &[Measurement] {
        &self.table
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    pub fn linear_slope(&self) -> f64 {
        self.linear_slope
    }

    /// Rebuild keys for a new `A`. No-op when `A` is unchanged.
    pub fn set_linear_slope(&mut self, slope: f64) {
        if slope == self.linear_slope {
            return;
        }
        self.linear_slope = slope;
        for (key, m) in self.keys.iter_mut().zip(self.table.iter()) {
            *key = slope * m.voltage + m.current;
        }
    }

    #[inline]
    pub fn solve(&self, demand: f64) -> ClipResult {
        let target = demand.abs();
        let upper = self.keys.partition_point(|&k| !(target < k));
        if upper == 0 || upper == self.keys.len() {
            return ClipResult::Clamped;
        }
        let lower = upper - 1;

        let (k_lo, k_up) = (self.keys[lower], self.keys[upper]);
        let (v_lo, v_up) = (self.table[lower].voltage, self.table[upper].voltage);
        let d_lo = target - k_lo;
        let d_up = k_up - target;
        let range = k_up - k_lo;

        let v = if d_lo < d_up {
            lerp(v_up, v_lo, d_up / range)
        } else {
            lerp(v_lo, v_up, d_lo / range)
        };
        ClipResult::Solved(v.copysign(demand))
    }
}

/// Component values of the clipping stage.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitComponents {
    pub r_feedback: f64,
    pub c_feedback: f64,
    pub r_ground: f64,
    pub r_drive: f64,
}

impl Default for CircuitComponents {
    fn default() -> Self {
        Self {
            r_feedback: tables::R_FEEDBACK,
            c_feedback: tables::C_FEEDBACK,
            r_ground: tables::R_GROUND,
            r_drive: tables::R_DRIVE,
        }
    }
}

impl CircuitComponents {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("r_feedback", self.r_feedback),
            ("c_feedback", self.c_feedback),
            ("r_ground", self.r_ground),
            ("r_drive", self.r_drive),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidComponent { name, value });
            }
        }
        Ok(())
    }
}

/// Per-sample clipping stage: ground-leg high-pass, demand, solve, output.
pub struct ClippingStage {
    solver: ClippingSolver,
    high_pass: GroundLegHighPass,
    components: CircuitComponents,
    cf_over_h: f64,
    prev_output: f64,
    clamped: usize,
}

impl ClippingStage {
    pub fn new(table: Vec<Measurement>, components: CircuitComponents) -> Result<Self, TableError> {
        let mut stage = Self {
            solver: ClippingSolver::new(table)?,
            high_pass: GroundLegHighPass::new(),
            cf_over_h: components.c_feedback / H192,
            components,
            prev_output: 0.0,
            clamped: 0,
        };
        stage.set_gain(0.0);
        Ok(stage)
    }

    /// Drive knob position in [0, 1].
    pub fn set_gain(&mut self, gain: f64) {
        let c = &self.components;
        let slope = self.cf_over_h + 1.0 / (c.r_feedback + gain * c.r_drive);
        self.solver.set_linear_slope(slope);
    }

    /// Clip one oversampled sample given its time derivative.
    #[inline]
    pub fn next_sample(&mut self, x: f64, dx: f64) -> f64 {
        let hp = self.high_pass.next_sample(x);
        let c = &self.components;
        let demand = hp / c.r_ground + self.cf_over_h * (self.prev_output - x) + c.c_feedback * dx;

        let result = self.solver.solve(demand);
        if result.is_clamped() {
            self.clamped += 1;
        }
        let out = x + result.delta();
        self.prev_output = out;
        out
    }

    pub fn solver(&self) -> &ClippingSolver {
        &self.solver
    }

    /// Number of clamped solver steps since the last call.
    pub fn take_clamped_count(&mut self) -> usize {
        std::mem::take(&mut self.clamped)
    }

    pub fn reset(&mut self) {
        self.high_pass.reset();
        self.prev_output = 0.0;
        self.clamped = 0;
    }
}
