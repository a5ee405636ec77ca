use crate::dsp::math::lerp;

/// Change points a single block can carry per parameter.
pub const MAX_CHANGE_POINTS: usize = 16;

/// A parameter value the host wants reached at `offset` samples into the block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChangePoint {
    pub offset: usize,
    pub value: f64,
}

impl ChangePoint {
    pub const fn new(offset: usize, value: f64) -> Self {
        Self { offset, value }
    }
}

/// A parameter driven by in-block automation.
///
/// Between change points the value ramps linearly, starting from the value
/// the parameter had when the block began. `advance` walks forward through
/// the block and reports where the ramp has got to; `end_changes` snaps to
/// the last point so the next block starts from it.
#[derive(Debug, Clone)]
pub struct SampleAccurateParam {
    value: f64,
    points: [ChangePoint; MAX_CHANGE_POINTS],
    len: usize,
    cursor: usize,
    position: usize,
    anchor: ChangePoint,
}

impl SampleAccurateParam {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            points: [ChangePoint::default(); MAX_CHANGE_POINTS],
            len: 0,
            cursor: 0,
            position: 0,
            anchor: ChangePoint::new(0, value),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Jump to `value`, discarding any pending automation.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.clear();
    }

    pub fn has_changes(&self) -> bool {
        self.len > 0
    }

    /// Queue this block's change points. Points must be in offset order;
    /// out-of-order points and anything past capacity are dropped.
    pub fn begin_changes(&mut self, points: &[ChangePoint]) {
        self.clear();
        for point in points {
            if self.len == MAX_CHANGE_POINTS {
                break;
            }
            if self.len > 0 && point.offset <= self.points[self.len - 1].offset {
                continue;
            }
            self.points[self.len] = *point;
            self.len += 1;
        }
    }

    /// Move `num_samples` forward and return the value reached.
    pub fn advance(&mut self, num_samples: usize) -> f64 {
        if self.len == 0 {
            return self.value;
        }
        let end = self.position + num_samples;
        while self.cursor < self.len && self.points[self.cursor].offset <= end {
            self.anchor = self.points[self.cursor];
            self.cursor += 1;
        }

        self.value = match self.points[..self.len].get(self.cursor) {
            Some(next) => {
                let t = (end - self.anchor.offset) as f64 / (next.offset - self.anchor.offset) as f64;
                lerp(self.anchor.value, next.value, t)
            }
            None => self.anchor.value,
        };
        self.position = end;
        self.value
    }

    /// Finish the block: settle on the last queued value.
    pub fn end_changes(&mut self) {
        if self.len > 0 {
            self.value = self.points[self.len - 1].value;
        }
        self.clear();
    }

    fn clear(&mut self) {
        self.len = 0;
        self.cursor = 0;
        self.position = 0;
        self.anchor = ChangePoint::new(0, self.value);
    }
}
