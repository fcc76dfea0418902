//! Solenoid lock driver
//!
//! The clamp solenoid is driven through a MOSFET on a GPIO pin. The coil
//! is not rated for continuous duty, so the hold time is clamped to a
//! safe window and the pin is always released before returning.

use embedded_hal::delay::DelayNs;

use tresor_core::traits::{LockDriver, LockError};

/// Shortest useful hold; the door needs time to be pulled open
pub const MIN_OPEN_MS: u32 = 1_000;

/// Longest allowed hold, bounded by coil heating
pub const MAX_OPEN_MS: u32 = 10_000;

/// Trait for the lock output pin
pub trait LockPin {
    /// Energize the solenoid
    fn set_high(&mut self);

    /// Release the solenoid
    fn set_low(&mut self);
}

/// Solenoid lock on a GPIO pin
pub struct Solenoid<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Solenoid<P, D>
where
    P: LockPin,
    D: DelayNs,
{
    /// Create a new solenoid driver
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }
}

impl<P, D> LockDriver for Solenoid<P, D>
where
    P: LockPin,
    D: DelayNs,
{
    fn initialize(&mut self) -> Result<(), LockError> {
        self.pin.set_low();
        Ok(())
    }

    fn hold_open(&mut self, duration_ms: u32) {
        let clamped = duration_ms.clamp(MIN_OPEN_MS, MAX_OPEN_MS);
        self.pin.set_high();
        self.delay.delay_ms(clamped);
        self.pin.set_low();
    }
}
