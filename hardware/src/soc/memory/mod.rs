//! Array-backed memories.
//!
//! Default implementations of the two core ports: a word-addressed
//! instruction store and a byte-addressed data store with a single-entry
//! write buffer committed at the clock edge.

use crate::soc::traits::{DataPort, InstructionPort};

/// Size of one instruction word in bytes.
pub const WORD_BYTES: u64 = 4;

/// Size of one data access in bytes.
pub const DOUBLE_BYTES: u64 = 8;

/// Word-addressed instruction store.
#[derive(Clone, Debug, Default)]
pub struct InstructionMemory {
    words: Vec<u32>,
}

impl InstructionMemory {
    /// Creates a zero-filled store of `size_bytes` bytes, rounded down to whole words.
    pub fn new(size_bytes: usize) -> Self {
        Self {
            words: vec![0; size_bytes / WORD_BYTES as usize],
        }
    }

    /// Creates a store holding exactly `words`.
    pub fn from_words(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Capacity in words.
    pub fn len_words(&self) -> usize {
        self.words.len()
    }

    /// Copies `words` into the store starting at word index `start`.
    ///
    /// Returns the number of words that did not fit.
    pub fn load_words(&mut self, start: usize, words: &[u32]) -> usize {
        let mut dropped = 0;
        for (i, word) in words.iter().enumerate() {
            match self.words.get_mut(start + i) {
                Some(slot) => *slot = *word,
                None => dropped += 1,
            }
        }
        dropped
    }
}

impl InstructionPort for InstructionMemory {
    fn fetch(&self, addr: u64) -> u32 {
        usize::try_from(addr / WORD_BYTES)
            .ok()
            .and_then(|idx| self.words.get(idx))
            .copied()
            .unwrap_or(0)
    }
}

/// Byte-addressed data store.
#[derive(Clone, Debug, Default)]
pub struct DataMemory {
    bytes: Vec<u8>,
    pending: Option<(usize, u64)>,
}

impl DataMemory {
    /// Creates a zero-filled store of `size_bytes` bytes.
    pub fn new(size_bytes: usize) -> Self {
        Self {
            bytes: vec![0; size_bytes],
            pending: None,
        }
    }

    /// Capacity in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-sized store.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the start offset if all eight bytes at `addr` are in range.
    fn span(&self, addr: u64) -> Option<usize> {
        let start = usize::try_from(addr).ok()?;
        let end = start.checked_add(DOUBLE_BYTES as usize)?;
        (end <= self.bytes.len()).then_some(start)
    }

    /// Writes a doubleword immediately, bypassing the write buffer.
    ///
    /// Host-side access for seeding data before the first tick.
    pub fn poke(&mut self, addr: u64, val: u64) {
        if let Some(start) = self.span(addr) {
            self.bytes[start..start + DOUBLE_BYTES as usize].copy_from_slice(&val.to_le_bytes());
        }
    }

    /// Returns `true` while a write is waiting for the clock edge.
    pub fn has_pending_write(&self) -> bool {
        self.pending.is_some()
    }
}

impl DataPort for DataMemory {
    fn read(&self, addr: u64) -> u64 {
        match self.span(addr) {
            Some(start) => {
                let mut buf = [0u8; DOUBLE_BYTES as usize];
                buf.copy_from_slice(&self.bytes[start..start + DOUBLE_BYTES as usize]);
                u64::from_le_bytes(buf)
            }
            None => 0,
        }
    }

    fn write(&mut self, addr: u64, val: u64) {
        self.pending = self.span(addr).map(|start| (start, val));
    }

    fn clock(&mut self) {
        if let Some((start, val)) = self.pending.take() {
            self.bytes[start..start + DOUBLE_BYTES as usize].copy_from_slice(&val.to_le_bytes());
        }
    }
}
