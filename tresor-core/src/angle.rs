//! Shared angle utilities
//!
//! All engine logic works on angles in decimal degrees, normalized to the
//! half-open interval `[0, 360)`. The helpers here keep that invariant in
//! one place: wrapping, the mirror transform used for alternating gesture
//! directions, the code-disk sector mapping, and the cosmetic
//! degree/minute/second decomposition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of elements on the physical code disk, 0 ... 9
pub const DISK_ELEMENTS: u8 = 10;

/// Angular width of one code-disk sector in degrees
pub const SECTOR_STEP_DEG: f32 = 360.0 / DISK_ELEMENTS as f32;

/// Wrap an angle into `[0, 360)`.
///
/// Values below zero (raw reading minus zero offset) are wrapped by adding
/// 360; values at or above 360 by subtracting. One wrap in each direction
/// is enough for every value the sensor path can produce.
pub fn normalize_deg(angle: f32) -> f32 {
    let mut a = angle;
    if a < 0.0 {
        a += 360.0;
    }
    if a >= 360.0 {
        a -= 360.0;
    }
    a
}

/// Mirror an angle for the reversed rotation orientation.
///
/// `360 - angle` lets the same per-digit sector logic work for alternating
/// physical rotation directions without a mirrored table. The result is
/// normalized so that 0 maps to 0 (and not to the out-of-range 360).
pub fn mirror_deg(angle: f32) -> f32 {
    normalize_deg(360.0 - angle)
}

/// Truncating degree/minute/second decomposition of an angle
///
/// Display-side only; tolerance comparisons always operate in decimal
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dms {
    /// Integer degree part
    pub degrees: u16,
    /// Whole minutes of the fractional degree remainder
    pub minutes: u16,
    /// Whole seconds of the remainder after removing minutes
    pub seconds: u16,
}

/// Decompose a decimal-degree angle into degrees, minutes and seconds.
pub fn to_dms(angle: f32) -> Dms {
    let degrees = angle as u16;
    let frac = angle - degrees as f32;
    let minutes = (frac * 60.0) as u16;
    let seconds = ((frac * 60.0 - minutes as f32) * 60.0) as u16;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Tolerance band half-width, composed from separate degree/minute/second
/// settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hysteresis {
    /// Degree part of the setting
    pub deg: f32,
    /// Minute part of the setting
    pub min: f32,
    /// Second part of the setting
    pub sec: f32,
}

impl Hysteresis {
    /// Compose a new hysteresis setting
    pub const fn new(deg: f32, min: f32, sec: f32) -> Self {
        Self { deg, min, sec }
    }

    /// Sum the settings into one decimal-degree value
    pub fn to_degrees(self) -> f32 {
        self.deg + self.min / 60.0 + self.sec / 3600.0
    }
}

/// The physical code disk: N equally spaced sectors with a tolerance
/// window around each sector center.
///
/// The window half-width is 90% of the half sector width, which leaves a
/// dead band between adjacent sectors to debounce boundary jitter. An
/// angle inside a dead band maps to no sector at all.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SectorDisk {
    elements: u8,
    step_deg: f32,
    tolerance_deg: f32,
}

impl Default for SectorDisk {
    fn default() -> Self {
        Self::new(DISK_ELEMENTS)
    }
}

impl SectorDisk {
    /// Create a disk with `elements` equally spaced sectors.
    pub fn new(elements: u8) -> Self {
        let step_deg = 360.0 / elements as f32;
        Self {
            elements,
            step_deg,
            // 10% margin off the half sector width
            tolerance_deg: step_deg / 2.0 * 0.9,
        }
    }

    /// Number of sectors on the disk
    pub fn elements(&self) -> u8 {
        self.elements
    }

    /// Index of the highest sector
    pub fn last_sector(&self) -> u8 {
        self.elements - 1
    }

    /// Sector window half-width in degrees
    pub fn tolerance_deg(&self) -> f32 {
        self.tolerance_deg
    }

    /// Map an angle to the sector whose window contains it.
    ///
    /// Returns `None` when the angle falls in a dead band between sectors;
    /// callers treat that as "no update this tick", not as an error.
    pub fn sector_for(&self, angle: f32) -> Option<u8> {
        for sector in 0..self.elements {
            let center = self.step_deg * sector as f32;
            if angle > center - self.tolerance_deg && angle < center + self.tolerance_deg {
                return Some(sector);
            }
        }
        None
    }
}
