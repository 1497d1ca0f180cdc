use sha2::{Digest, Sha256};

use super::DigestResult;

/// Incremental SHA-256 state.
///
/// `finalize` takes `self`, so an accumulator cannot absorb after it has
/// produced a digest.
#[derive(Clone, Default)]
pub struct HashAccumulator {
    hasher: Sha256,
    bytes_absorbed: u64,
}

impl HashAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, block: &[u8]) {
        self.hasher.update(block);
        self.bytes_absorbed += block.len() as u64;
    }

    pub fn bytes_absorbed(&self) -> u64 {
        self.bytes_absorbed
    }

    pub fn finalize(self) -> DigestResult {
        DigestResult::from_bytes(self.hasher.finalize().into())
    }
}
