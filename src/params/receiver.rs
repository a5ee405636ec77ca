#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};

use crate::params::snapshot::ParamSnapshot;

/// Audio-side end of the parameter handoff. Must never block or allocate.
pub trait ParamReceiver {
    fn pop(&mut self) -> Option<ParamSnapshot>;

    /// Drain everything pending and keep only the newest snapshot.
    fn latest(&mut self) -> Option<ParamSnapshot> {
        let mut newest = None;
        while let Some(snapshot) = self.pop() {
            newest = Some(snapshot);
        }
        newest
    }
}

#[cfg(feature = "rtrb")]
impl ParamReceiver for Consumer<ParamSnapshot> {
    fn pop(&mut self) -> Option<ParamSnapshot> {
        Consumer::pop(self).ok()
    }
}

/// Receiver for hosts that set parameters directly on the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoParams;

impl ParamReceiver for NoParams {
    fn pop(&mut self) -> Option<ParamSnapshot> {
        None
    }
}

/// Bounded SPSC channel for snapshots. A full ring rejects the push on the
/// control side; the audio side only ever sees complete snapshots.
#[cfg(feature = "rtrb")]
pub fn param_channel(capacity: usize) -> (Producer<ParamSnapshot>, Consumer<ParamSnapshot>) {
    RingBuffer::new(capacity.max(1))
}
