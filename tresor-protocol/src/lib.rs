//! HA40+ Encoder Communication Protocol
//!
//! This crate defines the UART/RS485 protocol between the safe controller
//! and the HA40+ absolute rotary encoder. The controller is the bus
//! master: it pulses the encoder's trigger line, sends a request frame,
//! and waits for the matching response.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CRC8 │
//! │ 1B    │ 1B     │ 1B   │ 0–8B        │ 1B   │
//! └───────┴────────┴──────┴─────────────┴──────┘
//! ```
//!
//! The CRC-8 (polynomial 0x07) covers LENGTH, TYPE and PAYLOAD. Angle
//! values travel as the encoder's raw 32-bit fraction of a full turn and
//! are converted to degrees or gon on the controller side.

#![no_std]
#![deny(unsafe_code)]

pub mod crc;
pub mod frame;
pub mod messages;

pub use crc::{crc8, crc8_add};
pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use messages::{EncoderRequest, EncoderResponse, RawAngle};
