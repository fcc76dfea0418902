//! Hardware abstraction traits
//!
//! These traits define the interface between the game engines and
//! hardware-specific implementations.

pub mod angle;
pub mod annunciator;
pub mod lock;
pub mod time;

pub use angle::{AngleError, AngleSource};
pub use annunciator::Annunciator;
pub use lock::{LockDriver, LockError};
pub use time::Clock;
