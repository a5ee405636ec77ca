/// Block-continuity buffer for filters that look back past the block start.
///
/// Layout is `[history | block]`. Each block is written after the history,
/// processed as one contiguous window, and then `carry` moves the tail of the
/// window to the front so the next block sees it as history.
///
/// Storage is sized once at construction for the largest block.
pub struct CarryoverBuffer {
    buffer: Vec<f64>,
    history: usize,
    len: usize,
}

impl CarryoverBuffer {
    pub fn new(history: usize, max_block: usize) -> Self {
        Self {
            buffer: vec![0.0; history + max_block],
            history,
            len: 0,
        }
    }

    pub fn history(&self) -> usize {
        self.history
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len() - self.history
    }

    /// Slot for the next `len` new samples, clamped to capacity.
    pub fn block_mut(&mut self, len: usize) -> &mut [f64] {
        self.len = len.min(self.capacity());
        &mut self.buffer[self.history..self.history + self.len]
    }

    /// Copy `block` in as the new samples.
    pub fn load(&mut self, block: &[f64]) {
        let slot = self.block_mut(block.len());
        let n = slot.len();
        slot.copy_from_slice(&block[..n]);
    }

    /// History followed by the current block.
    pub fn window(&self) -> &[f64] {
        &self.buffer[..self.history + self.len]
    }

    /// Keep the last `history` samples of the window for the next block.
    pub fn carry(&mut self) {
        let len = self.len;
        self.buffer.copy_within(len..len + self.history, 0);
        self.len = 0;
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.len = 0;
    }
}
