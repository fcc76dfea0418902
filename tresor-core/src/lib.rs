//! Board-agnostic core logic for the Tresor safe puzzle firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (angle sensor, lock, annunciator, clock)
//! - Angle utilities (normalization, sector mapping, DMS decomposition)
//! - Configuration type definitions with init-time validation
//! - The two game engines (gesture code entry, target accuracy)

#![no_std]
#![deny(unsafe_code)]

pub mod angle;
pub mod config;
pub mod engine;
pub mod traits;
