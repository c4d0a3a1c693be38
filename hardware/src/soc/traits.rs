//! System-on-Chip Traits.
//!
//! This module defines the only two boundaries between the core and the
//! outside world: the instruction-fetch port and the data-memory port.
//! Neither port can fault. Out-of-range accesses read as zero and
//! out-of-range writes are dropped.

/// Instruction-fetch port.
pub trait InstructionPort {
    /// Returns the instruction word at a byte address.
    ///
    /// Bits 0-1 of `addr` are ignored. Addresses beyond the store return 0,
    /// which the control unit decodes as a bubble.
    fn fetch(&self, addr: u64) -> u32;
}

/// Data-memory port.
///
/// Reads are combinational. Writes are synchronous: a write issued during a
/// cycle becomes visible once [`DataPort::clock`] is called at the end of
/// that cycle.
pub trait DataPort {
    /// Returns the little-endian doubleword at `addr`, or 0 if any of the
    /// eight bytes lies outside the store.
    fn read(&self, addr: u64) -> u64;

    /// Schedules a doubleword write at `addr`.
    ///
    /// A write with any byte out of range is dropped in its entirety.
    fn write(&mut self, addr: u64, val: u64);

    /// Commits the pending write at the tick boundary.
    fn clock(&mut self) {}
}
