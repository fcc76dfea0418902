//! Time source trait
//!
//! The engines need a monotonic millisecond clock for the dwell timer and
//! a blocking delay for the fixed game-over/lock-open holds. Keeping both
//! behind one trait lets the tests drive time explicitly.

/// Monotonic millisecond time source with a blocking delay
pub trait Clock {
    /// Milliseconds since an arbitrary epoch. Never goes backwards.
    fn now_ms(&self) -> u64;

    /// Busy-wait for `ms` milliseconds.
    ///
    /// This intentionally blocks the whole control loop; the cabinet is
    /// unresponsive during the failure hold.
    fn delay_ms(&mut self, ms: u32);
}
