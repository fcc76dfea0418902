//! HA40+ absolute rotary encoder driver
//!
//! The encoder sits on an RS485 bus and only answers after its trigger
//! line is pulsed. A read is therefore a small transaction: pulse the
//! trigger, send a `ReadAngle` request frame, then poll the UART for the
//! response with a bounded number of short waits.

use embedded_hal::delay::DelayNs;
use embedded_io::{Read, ReadReady, Write};

use tresor_core::angle::normalize_deg;
use tresor_core::traits::{AngleError, AngleSource};
use tresor_protocol::{EncoderRequest, EncoderResponse, FrameParser, RawAngle};

/// Trigger pulse width
const TRIGGER_PULSE_MS: u32 = 1;

/// Wait between response polls
const POLL_DELAY_MS: u32 = 1;

/// Polls before a read is declared dead
const MAX_POLL_ATTEMPTS: u32 = 50;

/// Trait for the encoder trigger line
pub trait TriggerPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);
}

/// HA40+ encoder over a half-duplex serial link
///
/// Raw positions are converted to degrees and reported relative to the
/// zero offset captured by [`AngleSource::set_zero_offset`].
pub struct Ha40p<U, T, D> {
    uart: U,
    trigger: T,
    delay: D,
    parser: FrameParser,
    /// Degrees subtracted from every reading
    zero_offset_deg: f32,
}

impl<U, T, D> Ha40p<U, T, D>
where
    U: Read + Write + ReadReady,
    T: TriggerPin,
    D: DelayNs,
{
    /// Create a new encoder driver
    pub fn new(uart: U, trigger: T, delay: D) -> Self {
        Self {
            uart,
            trigger,
            delay,
            parser: FrameParser::new(),
            zero_offset_deg: 0.0,
        }
    }

    /// Perform one complete read transaction, returning the raw position
    pub fn read_raw(&mut self) -> Result<RawAngle, AngleError> {
        self.trigger.set_high();
        self.delay.delay_ms(TRIGGER_PULSE_MS);
        self.trigger.set_low();

        let request = EncoderRequest::ReadAngle
            .to_frame()
            .encode_to_vec()
            .map_err(|_| AngleError::Frame)?;
        self.uart
            .write_all(&request)
            .map_err(|_| AngleError::Timeout)?;
        self.uart.flush().map_err(|_| AngleError::Timeout)?;

        self.parser.reset();
        self.await_angle()
    }

    /// Poll the UART until an angle frame arrives or the attempt budget
    /// runs out
    fn await_angle(&mut self) -> Result<RawAngle, AngleError> {
        let mut attempts = MAX_POLL_ATTEMPTS;
        loop {
            while self.uart.read_ready().map_err(|_| AngleError::Timeout)? {
                let mut byte = [0u8; 1];
                let n = self
                    .uart
                    .read(&mut byte)
                    .map_err(|_| AngleError::Timeout)?;
                if n == 0 {
                    break;
                }
                match self.parser.feed(byte[0]) {
                    Ok(Some(frame)) => {
                        return match EncoderResponse::from_frame(&frame) {
                            Ok(EncoderResponse::Angle(raw)) => Ok(raw),
                            _ => Err(AngleError::Frame),
                        };
                    }
                    Ok(None) => {}
                    Err(_) => return Err(AngleError::Frame),
                }
            }

            if attempts == 0 {
                return Err(AngleError::Timeout);
            }
            attempts -= 1;
            self.delay.delay_ms(POLL_DELAY_MS);
        }
    }

    /// Drop any stale bytes left in the receive path
    fn drain_rx(&mut self) -> Result<(), AngleError> {
        while self.uart.read_ready().map_err(|_| AngleError::Timeout)? {
            let mut byte = [0u8; 1];
            if self
                .uart
                .read(&mut byte)
                .map_err(|_| AngleError::Timeout)?
                == 0
            {
                break;
            }
        }
        self.parser.reset();
        Ok(())
    }
}

impl<U, T, D> AngleSource for Ha40p<U, T, D>
where
    U: Read + Write + ReadReady,
    T: TriggerPin,
    D: DelayNs,
{
    fn initialize(&mut self) -> Result<(), AngleError> {
        self.trigger.set_low();
        self.drain_rx()
    }

    fn angle_deg(&mut self) -> Result<f32, AngleError> {
        let raw = self.read_raw()?;
        Ok(normalize_deg(raw.to_degrees() - self.zero_offset_deg))
    }

    fn set_zero_offset(&mut self) -> Result<(), AngleError> {
        self.zero_offset_deg = self.read_raw()?.to_degrees();
        Ok(())
    }
}
