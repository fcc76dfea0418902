//! Angle sensor trait

/// Errors that can occur when reading the rotary encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AngleError {
    /// No (complete) response within the bounded retry window
    Timeout,
    /// Response framing or checksum error
    Frame,
    /// Decoded value outside the representable angle range
    OutOfRange,
}

/// Trait for absolute angle sensors
///
/// Implementations own the zero-offset capture: `angle_deg` reports the
/// angle relative to the offset captured by the most recent
/// `set_zero_offset` call, normalized into `[0, 360)`.
pub trait AngleSource {
    /// Bring the sensor up. Called once from engine initialization.
    fn initialize(&mut self) -> Result<(), AngleError> {
        Ok(())
    }

    /// Read the current angle in degrees, offset-corrected and normalized.
    ///
    /// Takes `&mut self` because a read is a bus transaction.
    fn angle_deg(&mut self) -> Result<f32, AngleError>;

    /// Capture the current raw angle as the new zero reference.
    fn set_zero_offset(&mut self) -> Result<(), AngleError>;
}
