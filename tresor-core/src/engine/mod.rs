//! Game engines
//!
//! Two cooperative state machines drive the cabinet. The host loop calls
//! the active engine's `run()` at a rate well above human gesture speed;
//! each call reads the angle sensor once, advances the machine, and drives
//! the lock and the display.
//!
//! Both engines use the same enter-once dispatch: `goto()` changes state
//! and arms an `entering` flag, which the next `run()` consumes so that
//! entry actions fire exactly once per state activation.

pub mod accuracy;
pub mod code_entry;

pub use accuracy::AccuracyEngine;
pub use code_entry::CodeEntryEngine;

use crate::config::ConfigError;
use crate::traits::{AngleError, LockError};

/// Errors surfaced by the engines to the host loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// Invalid configuration, caught at `initialize()`
    Config(ConfigError),
    /// Angle sensor read failed; engine state is unchanged for this tick
    Sensor(AngleError),
    /// Lock hardware failed to initialize
    Lock(LockError),
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        EngineError::Config(e)
    }
}

impl From<AngleError> for EngineError {
    fn from(e: AngleError) -> Self {
        EngineError::Sensor(e)
    }
}

impl From<LockError> for EngineError {
    fn from(e: LockError) -> Self {
        EngineError::Lock(e)
    }
}
