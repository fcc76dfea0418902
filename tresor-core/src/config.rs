//! Configuration type definitions
//!
//! Tunables are explicit structs handed to the engine constructors.
//! Validation runs once at engine `initialize()` - a bad configuration is
//! a fatal init error, never a runtime condition.

use crate::angle::Hysteresis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of digits in the combination
pub const CODE_LEN: usize = 4;

/// How long the solenoid holds the safe open after a win (ms)
pub const SAFE_OPEN_TIME_MS: u32 = 5000;

/// Hold time on the failure screen before restarting (ms)
pub const GAME_OVER_HOLD_MS: u32 = 2000;

/// Configuration errors caught at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A secret-code digit is outside the code disk range
    DigitOutOfRange,
    /// A target angle is outside [0, 360)
    TargetOutOfRange,
    /// A tolerance band is empty or negative
    ToleranceNotPositive,
    /// The two tier tolerance bands overlap
    TierBandsOverlap,
}

/// Secret combination for the code-entry game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodeConfig {
    /// The secret code, one disk sector index per digit
    pub secret: [u8; CODE_LEN],
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            secret: [1, 9, 5, 8],
        }
    }
}

impl CodeConfig {
    /// Check that every digit names an existing disk sector.
    pub fn validate(&self, disk_elements: u8) -> Result<(), ConfigError> {
        if self.secret.iter().any(|&d| d >= disk_elements) {
            return Err(ConfigError::DigitOutOfRange);
        }
        Ok(())
    }
}

/// One difficulty tier of the accuracy game
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TierConfig {
    /// Target angle in degrees
    pub target_deg: f32,
    /// Tolerance band half-width as deg/min/sec settings
    pub hysteresis: Hysteresis,
    /// Bar-graph resolution in degrees per segment (feedback scaling only)
    pub bar_resolution_deg: f32,
}

/// Number of bar-graph segments on the pixel matrix (matrix width)
pub const BAR_SEGMENTS: f32 = 32.0;

impl TierConfig {
    /// Tolerance band half-width in decimal degrees
    pub fn tolerance_deg(&self) -> f32 {
        self.hysteresis.to_degrees()
    }

    /// Strictly inside the tolerance band around the target
    pub fn in_band(&self, angle: f32) -> bool {
        let tol = self.tolerance_deg();
        angle > self.target_deg - tol && angle < self.target_deg + tol
    }

    /// Strictly outside the tolerance band around the target
    pub fn departed(&self, angle: f32) -> bool {
        let tol = self.tolerance_deg();
        angle < self.target_deg - tol || angle > self.target_deg + tol
    }

    /// Proportional progress toward the target, in `[0, 1]`.
    ///
    /// Full bar on target, empty bar once the distance exceeds one full
    /// bar span at this tier's resolution.
    pub fn progress(&self, angle: f32) -> f32 {
        let mut diff = angle - self.target_deg;
        if diff < 0.0 {
            diff = -diff;
        }
        let span = self.bar_resolution_deg * BAR_SEGMENTS;
        let p = 1.0 - diff / span;
        p.clamp(0.0, 1.0)
    }
}

/// Accuracy game configuration: two preset tiers plus the shared timing
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccuracyConfig {
    /// Hard tier: tight tolerance, fine bar graph
    pub master: TierConfig,
    /// Easy tier: wider tolerance, coarse bar graph
    pub kids: TierConfig,
    /// Raw angles above this threshold select the kids tier (degrees)
    pub tier_switch_deg: f32,
    /// Steady-state duration the angle must stay in tolerance (ms)
    pub dwell_ms: u32,
}

impl Default for AccuracyConfig {
    fn default() -> Self {
        Self {
            master: TierConfig {
                target_deg: 100.0,
                hysteresis: Hysteresis::new(1.0, 2.0, 0.0),
                bar_resolution_deg: 1.0,
            },
            kids: TierConfig {
                target_deg: 300.0,
                hysteresis: Hysteresis::new(1.0, 1.0, 0.0),
                bar_resolution_deg: 5.0,
            },
            tier_switch_deg: 200.0,
            dwell_ms: 5000,
        }
    }
}

impl AccuracyConfig {
    /// Select the difficulty tier for a raw angle reading.
    pub fn tier_for(&self, angle_deg: f32) -> &TierConfig {
        if angle_deg > self.tier_switch_deg {
            &self.kids
        } else {
            &self.master
        }
    }

    /// Check targets, tolerances and band separation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for tier in [&self.master, &self.kids] {
            if !(0.0..360.0).contains(&tier.target_deg) {
                return Err(ConfigError::TargetOutOfRange);
            }
            if tier.tolerance_deg() <= 0.0 {
                return Err(ConfigError::ToleranceNotPositive);
            }
        }

        // The CheckValue state tests both bands every tick; they must not
        // overlap or the tier transition would be ambiguous.
        let mut gap = self.master.target_deg - self.kids.target_deg;
        if gap < 0.0 {
            gap = -gap;
        }
        if gap <= self.master.tolerance_deg() + self.kids.tolerance_deg() {
            return Err(ConfigError::TierBandsOverlap);
        }
        Ok(())
    }
}
