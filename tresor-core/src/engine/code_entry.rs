//! Gesture-driven code entry
//!
//! The player dials the combination on the code disk: rotate to a digit,
//! reverse direction to commit it, dial the next digit in the opposite
//! physical direction, and so on. After the last reversal the entered
//! code is checked against the secret and the lock opens or the failure
//! screen shows.
//!
//! Rotation direction alternates per digit. Instead of a mirrored sector
//! table, the engine flips the angle with `360 - angle` on odd positions,
//! so the same "sector index grows while dialing forward" logic serves
//! both directions.

use crate::angle::{mirror_deg, SectorDisk};
use crate::config::{CodeConfig, CODE_LEN, GAME_OVER_HOLD_MS, SAFE_OPEN_TIME_MS};
use crate::engine::EngineError;
use crate::traits::{AngleSource, Annunciator, Clock, LockDriver};

/// Code-entry engine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Reset buffer and orientation, recapture the zero offset
    Init,
    /// Collect all digits; the running digit index lives inside the state
    Digit,
    /// Compare the entered code against the secret
    CheckCode,
    /// Code matched: open the safe
    CorrectCode,
    /// Code did not match: failure screen, then restart
    WrongCode,
}

/// Gesture code-entry engine
pub struct CodeEntryEngine<A, L, D, C> {
    angle: A,
    lock: L,
    panel: D,
    clock: C,
    config: CodeConfig,
    disk: SectorDisk,

    state: State,
    entering: bool,

    /// Digits entered so far, `None` until a position is filled
    buffer: [Option<u8>; CODE_LEN],
    /// Position currently being dialed, 0..CODE_LEN
    digit_index: usize,
    /// Apply the `360 - angle` transform (alternates per digit; the first
    /// digit expects decreasing physical angle)
    mirrored: bool,
    /// Most recent sector the angle mapped to
    current_sector: u8,
    /// Reference sector the next reading is compared against
    baseline_sector: u8,
    /// Snapshot the first mapped sector of this digit position as baseline
    fresh_baseline: bool,
}

impl<A, L, D, C> CodeEntryEngine<A, L, D, C>
where
    A: AngleSource,
    L: LockDriver,
    D: Annunciator,
    C: Clock,
{
    /// Create the engine around its collaborators.
    pub fn new(config: CodeConfig, angle: A, lock: L, panel: D, clock: C) -> Self {
        Self {
            angle,
            lock,
            panel,
            clock,
            config,
            disk: SectorDisk::default(),
            state: State::Init,
            entering: true,
            buffer: [None; CODE_LEN],
            digit_index: 0,
            mirrored: true,
            current_sector: 0,
            baseline_sector: 0,
            fresh_baseline: true,
        }
    }

    /// Validate the configuration and bring up the collaborators.
    ///
    /// A secret digit outside the code disk is a fatal init error.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        self.config.validate(self.disk.elements())?;
        self.angle.initialize()?;
        self.lock.initialize()?;
        self.angle.set_zero_offset()?;
        self.state = State::Init;
        self.entering = true;
        Ok(())
    }

    /// Force the engine back to `Init`; the next `run()` performs the
    /// init entry actions exactly once.
    pub fn reset(&mut self) {
        self.panel.clear();
        self.goto(State::Init);
    }

    /// Current state, for the host loop and diagnostics
    pub fn state(&self) -> State {
        self.state
    }

    /// Digits entered so far
    pub fn entered_code(&self) -> &[Option<u8>; CODE_LEN] {
        &self.buffer
    }

    /// Advance the state machine by one tick.
    ///
    /// A sensor error leaves all engine state untouched for this tick and
    /// is surfaced to the host; an unrecognized angle (dead band between
    /// sectors) is not an error and simply stalls digit progress.
    pub fn run(&mut self) -> Result<(), EngineError> {
        let entering = self.entering;
        self.entering = false;

        match self.state {
            State::Init => {
                self.buffer = [None; CODE_LEN];
                self.digit_index = 0;
                self.mirrored = true;
                self.angle.set_zero_offset()?;
                self.panel.display_digits(&self.buffer);
                self.goto(State::Digit);
            }
            State::Digit => self.tick_digit(entering)?,
            State::CheckCode => {
                let valid = self
                    .buffer
                    .iter()
                    .zip(self.config.secret.iter())
                    .all(|(entered, secret)| *entered == Some(*secret));
                self.goto(if valid {
                    State::CorrectCode
                } else {
                    State::WrongCode
                });
            }
            State::CorrectCode => {
                self.panel.show_success();
                self.lock.hold_open(SAFE_OPEN_TIME_MS);
                self.goto(State::Init);
            }
            State::WrongCode => {
                self.panel.show_failure();
                self.clock.delay_ms(GAME_OVER_HOLD_MS);
                self.goto(State::Init);
            }
        }
        Ok(())
    }

    fn goto(&mut self, next: State) {
        self.state = next;
        self.entering = true;
    }

    /// One tick of digit collection.
    fn tick_digit(&mut self, entering: bool) -> Result<(), EngineError> {
        if entering {
            self.digit_index = 0;
            self.start_digit_position();
        }

        let mut angle = self.angle.angle_deg()?;
        if self.mirrored {
            angle = mirror_deg(angle);
        }

        // Dead-band readings keep the previous sector; no update this tick.
        if let Some(sector) = self.disk.sector_for(angle) {
            self.current_sector = sector;
        }

        if self.fresh_baseline {
            self.baseline_sector = self.current_sector;
            self.fresh_baseline = false;
        }

        let wrapped =
            self.current_sector == 0 && self.baseline_sector == self.disk.last_sector();

        if self.current_sector > self.baseline_sector || wrapped {
            // Disk advancing forward through its sectors: record the digit.
            self.baseline_sector = self.current_sector;
            self.buffer[self.digit_index] = Some(self.current_sector);
            self.panel.display_digits(&self.buffer);
        } else if self.current_sector < self.baseline_sector {
            // Direction reversal: the digit at this position is committed.
            self.baseline_sector = self.current_sector;
            if self.digit_index + 1 >= CODE_LEN {
                self.digit_index = 0;
                self.goto(State::CheckCode);
            } else {
                self.mirrored = !self.mirrored;
                self.angle.set_zero_offset()?;
                self.digit_index += 1;
                self.start_digit_position();
            }
        }
        Ok(())
    }

    /// Arm the per-position baseline snapshot for a fresh digit.
    fn start_digit_position(&mut self) {
        self.current_sector = 0;
        self.baseline_sector = 0;
        self.fresh_baseline = true;
    }
}
