#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Serialized size of a snapshot: three little-endian `f64`s.
pub const STATE_BYTES: usize = 24;

/// The three knobs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    Gain,
    Tone,
    Level,
}

impl ParamId {
    pub const ALL: [ParamId; 3] = [ParamId::Gain, ParamId::Tone, ParamId::Level];

    pub fn index(self) -> usize {
        match self {
            ParamId::Gain => 0,
            ParamId::Tone => 1,
            ParamId::Level => 2,
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            ParamId::Gain => 0.0,
            ParamId::Tone => 0.5,
            ParamId::Level => 0.5,
        }
    }
}

/// Normalised knob positions, each in [0, 1].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSnapshot {
    pub gain: f64,
    pub tone: f64,
    pub level: f64,
}

impl Default for ParamSnapshot {
    fn default() -> Self {
        Self {
            gain: ParamId::Gain.default_value(),
            tone: ParamId::Tone.default_value(),
            level: ParamId::Level.default_value(),
        }
    }
}

impl ParamSnapshot {
    /// Clamps each value into [0, 1]; NaN falls back to the knob's default.
    pub fn new(gain: f64, tone: f64, level: f64) -> Self {
        Self {
            gain: normalise(gain, ParamId::Gain),
            tone: normalise(tone, ParamId::Tone),
            level: normalise(level, ParamId::Level),
        }
    }

    pub fn get(&self, id: ParamId) -> f64 {
        match id {
            ParamId::Gain => self.gain,
            ParamId::Tone => self.tone,
            ParamId::Level => self.level,
        }
    }

    pub fn set(&mut self, id: ParamId, value: f64) {
        let value = normalise(value, id);
        match id {
            ParamId::Gain => self.gain = value,
            ParamId::Tone => self.tone = value,
            ParamId::Level => self.level = value,
        }
    }

    /// Gain, tone, level as consecutive little-endian `f64`s.
    pub fn to_le_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0u8; STATE_BYTES];
        for (chunk, id) in out.chunks_exact_mut(8).zip(ParamId::ALL) {
            chunk.copy_from_slice(&self.get(id).to_le_bytes());
        }
        out
    }

    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        if bytes.len() < STATE_BYTES {
            return Err(StateError::Truncated {
                len: bytes.len(),
                expected: STATE_BYTES,
            });
        }
        let mut snapshot = Self::default();
        for (chunk, id) in bytes[..STATE_BYTES].chunks_exact(8).zip(ParamId::ALL) {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            snapshot.set(id, f64::from_le_bytes(raw));
        }
        Ok(snapshot)
    }
}

fn normalise(value: f64, id: ParamId) -> f64 {
    if value.is_nan() {
        id.default_value()
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = ParamSnapshot::default();
        assert_eq!((p.gain, p.tone, p.level), (0.0, 0.5, 0.5));
    }

    #[test]
    fn test_new_clamps_and_replaces_nan() {
        let p = ParamSnapshot::new(1.5, f64::NAN, -0.2);
        assert_eq!((p.gain, p.tone, p.level), (1.0, 0.5, 0.0));
    }

    #[test]
    fn test_byte_layout_is_gain_tone_level() {
        let p = ParamSnapshot::new(0.25, 0.75, 1.0);
        let bytes = p.to_le_bytes();
        assert_eq!(&bytes[0..8], &0.25f64.to_le_bytes());
        assert_eq!(&bytes[8..16], &0.75f64.to_le_bytes());
        assert_eq!(&bytes[16..24], &1.0f64.to_le_bytes());
        assert_eq!(ParamSnapshot::from_le_bytes(&bytes).unwrap(), p);
    }

    #[test]
    fn test_short_state_is_rejected() {
        assert_eq!(
            ParamSnapshot::from_le_bytes(&[0u8; 20]),
            Err(StateError::Truncated {
                len: 20,
                expected: 24
            })
        );
    }
}
