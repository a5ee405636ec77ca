//! Parameter plumbing between the control thread and the audio thread.
//!
//! The control side publishes whole [`ParamSnapshot`]s over a lock-free SPSC
//! ring; the audio side drains it at the top of each block and keeps only
//! the newest. Hosts that deliver per-block automation can additionally feed
//! [`SampleAccurateParam`] change points.

pub mod receiver;
pub mod sample_accurate;
pub mod snapshot;

pub use receiver::{NoParams, ParamReceiver};
#[cfg(feature = "rtrb")]
pub use receiver::param_channel;
pub use sample_accurate::{ChangePoint, SampleAccurateParam, MAX_CHANGE_POINTS};
pub use snapshot::{ParamId, ParamSnapshot, STATE_BYTES};
