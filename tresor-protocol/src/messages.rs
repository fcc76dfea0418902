//! Message types for the HA40+ encoder link
//!
//! Message types are divided into two categories:
//! - Controller → Encoder: read requests
//! - Encoder → Controller: angle and status responses

use crate::frame::{Frame, FrameError};

// Message type IDs: Controller → Encoder
pub const MSG_READ_ANGLE: u8 = 0x10;
pub const MSG_READ_STATUS: u8 = 0x11;

// Message type IDs: Encoder → Controller
pub const MSG_ANGLE: u8 = 0x90;
pub const MSG_STATUS: u8 = 0x91;

/// Raw absolute position as reported by the encoder
///
/// The encoder expresses a full mechanical turn as the whole `u32`
/// range; angle units are derived by scaling that fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawAngle(pub u32);

impl RawAngle {
    /// Position in degrees, in `[0, 360)`
    pub fn to_degrees(self) -> f32 {
        (self.0 as f64 / 4_294_967_296.0 * 360.0) as f32
    }

    /// Position in gon (400 per full turn), in `[0, 400)`
    pub fn to_gon(self) -> f32 {
        (self.0 as f64 / 4_294_967_296.0 * 400.0) as f32
    }
}

/// Requests from the controller to the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderRequest {
    /// Read the current absolute position
    ReadAngle,
    /// Read the encoder status byte
    ReadStatus,
}

impl EncoderRequest {
    /// Encode this request into a frame
    pub fn to_frame(&self) -> Frame {
        match self {
            EncoderRequest::ReadAngle => Frame::empty(MSG_READ_ANGLE),
            EncoderRequest::ReadStatus => Frame::empty(MSG_READ_STATUS),
        }
    }

    /// Parse a request from a frame (for testing or simulation)
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_READ_ANGLE => Ok(EncoderRequest::ReadAngle),
            MSG_READ_STATUS => Ok(EncoderRequest::ReadStatus),
            _ => Err(FrameError::InvalidCommand),
        }
    }
}

/// Responses from the encoder to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderResponse {
    /// Absolute position reading
    Angle(RawAngle),
    /// Encoder status byte
    Status(u8),
}

impl EncoderResponse {
    /// Parse a response from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_ANGLE => {
                let bytes: [u8; 4] = frame
                    .payload
                    .as_slice()
                    .try_into()
                    .map_err(|_| FrameError::Incomplete)?;
                Ok(EncoderResponse::Angle(RawAngle(u32::from_be_bytes(bytes))))
            }
            MSG_STATUS => {
                if frame.payload.is_empty() {
                    return Err(FrameError::Incomplete);
                }
                Ok(EncoderResponse::Status(frame.payload[0]))
            }
            _ => Err(FrameError::InvalidCommand),
        }
    }

    /// Encode this response into a frame (for testing or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            EncoderResponse::Angle(raw) => Frame::new(MSG_ANGLE, &raw.0.to_be_bytes()),
            EncoderResponse::Status(status) => Frame::new(MSG_STATUS, &[*status]),
        }
    }
}
