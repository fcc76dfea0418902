//! Solenoid lock trait

/// Errors that can occur bringing up the lock hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockError {
    /// Output stage could not be driven
    Output,
}

/// Trait for the safe's solenoid lock
///
/// The lock is normally closed; opening it energizes the coil for a
/// bounded time and blocks until the coil is released again.
pub trait LockDriver {
    /// Bring the lock up in the closed state.
    fn initialize(&mut self) -> Result<(), LockError> {
        Ok(())
    }

    /// Hold the lock open for `duration_ms`.
    ///
    /// Implementations clamp the duration to their own safe range; a coil
    /// left energized indefinitely would overheat.
    fn hold_open(&mut self, duration_ms: u32);
}
