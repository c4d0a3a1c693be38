//! Pipeline latch interface.
//!
//! Defines the common behavior of the latches between stages so that flush
//! and bubble handling is uniform across IF/ID, ID/EX, EX/MEM and MEM/WB.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of instructions as they move between stages.
/// They must support flushing (replacing the contents with a bubble on a
/// taken branch or jump) and checking for a bubble.
pub trait PipelineLatch {
    /// Replaces the latch contents with the bubble value.
    fn flush(&mut self);

    /// Checks if the latch holds a bubble.
    ///
    /// # Returns
    ///
    /// `true` if no instruction occupies the latch, `false` otherwise.
    fn is_bubble(&self) -> bool;
}
