//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tresor-core for the safe's hardware:
//!
//! - HA40+ absolute rotary encoder (RS485/UART, trigger line)
//! - Solenoid lock (GPIO with bounded hold time)
//! - Debounced push-button

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod encoder;
pub mod lock;
