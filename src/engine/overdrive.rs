use crate::engine::config::EngineConfig;
use crate::engine::processor::{BlockOutcome, Processor};
use crate::error::{ConfigError, Error};
use crate::io::Sample;
use crate::params::{ChangePoint, NoParams, ParamId, ParamReceiver, ParamSnapshot, SampleAccurateParam};

/// A [`Processor`] fed by a parameter receiver.
///
/// At the top of each block the receiver is drained and the newest snapshot
/// becomes the target for any knob without queued automation. Automation
/// queued with [`automate`](Self::automate) is advanced across the block and
/// the value reached at its end drives the block.
pub struct OverdriveEngine<R: ParamReceiver = NoParams> {
    processor: Processor,
    receiver: R,
    params: [SampleAccurateParam; 3],
}

impl<R: ParamReceiver> OverdriveEngine<R> {
    pub fn new(config: EngineConfig, receiver: R) -> Result<Self, Error> {
        let initial = config.initial_params;
        let processor = Processor::new(config)?;
        Ok(Self {
            processor,
            receiver,
            params: ParamId::ALL.map(|id| SampleAccurateParam::new(initial.get(id))),
        })
    }

    pub fn prepare(&mut self, sample_rate: f64, max_block_size: usize) -> Result<(), ConfigError> {
        self.processor.prepare(sample_rate, max_block_size)
    }

    /// Current knob values.
    pub fn params(&self) -> ParamSnapshot {
        ParamSnapshot::new(
            self.params[ParamId::Gain.index()].value(),
            self.params[ParamId::Tone.index()].value(),
            self.params[ParamId::Level.index()].value(),
        )
    }

    /// Set all three knobs immediately, dropping queued automation.
    pub fn set_params(&mut self, snapshot: ParamSnapshot) {
        for id in ParamId::ALL {
            self.params[id.index()].set_value(snapshot.get(id));
        }
    }

    /// Queue change points for the next block. Values are clamped to [0, 1]
    /// when they reach the processor.
    pub fn automate(&mut self, id: ParamId, points: &[ChangePoint]) {
        self.params[id.index()].begin_changes(points);
    }

    pub fn process_block<S: Sample>(&mut self, input: &[S], outputs: &mut [&mut [S]]) -> BlockOutcome {
        if let Some(snapshot) = self.receiver.latest() {
            for id in ParamId::ALL {
                let param = &mut self.params[id.index()];
                if !param.has_changes() {
                    param.set_value(snapshot.get(id));
                }
            }
        }

        let n = input.len();
        let [gain, tone, level] = &mut self.params;
        let block_params = ParamSnapshot::new(gain.advance(n), tone.advance(n), level.advance(n));

        let outcome = self.processor.process_block(block_params, input, outputs);

        for param in self.params.iter_mut() {
            param.end_changes();
        }
        outcome
    }

    pub fn reset(&mut self) {
        self.processor.reset();
    }

    pub fn processor(&self) -> &Processor {
        &self.processor
    }

    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.receiver
    }
}
