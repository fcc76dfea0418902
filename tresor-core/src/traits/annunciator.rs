//! Visual feedback trait
//!
//! One seam for everything the player sees: the digit readout, the
//! angle/progress screen of the accuracy game, and the win/lose icons.
//! The pixel-matrix drawing primitives behind it are not part of the
//! core; the engines only decide *what* to show.

use crate::angle::Dms;

/// Trait for the safe's visual output
pub trait Annunciator {
    /// Blank the display.
    fn clear(&mut self);

    /// Show the combination entered so far. `None` slots render as the
    /// not-yet-entered placeholder.
    fn display_digits(&mut self, digits: &[Option<u8>]);

    /// Show the live angle readout plus a proportional progress bar.
    ///
    /// `progress` is in `[0, 1]`; 1.0 means on target.
    fn display_angle_readout(&mut self, angle: Dms, progress: f32);

    /// Show the success icon (a green smiley on the cabinet matrix).
    fn show_success(&mut self);

    /// Show the failure icon.
    fn show_failure(&mut self);
}
