//! Target-accuracy game
//!
//! The player rotates the encoder toward a target angle and must hold it
//! inside the tolerance band for the full dwell time. Two preset tiers
//! share one screen: rotating past the switch threshold puts the player
//! on the easier kids target with a wider band and a coarser bar graph.
//!
//! The dwell timer is armed once, when the band is first entered from
//! `CheckValue`; staying inside does not refresh it. Dwell is therefore
//! measured from first entry, which is deliberate (the game punishes
//! drifting out and back in by restarting the whole attempt via `Over`).

use crate::angle::to_dms;
use crate::config::{AccuracyConfig, GAME_OVER_HOLD_MS, SAFE_OPEN_TIME_MS, TierConfig};
use crate::engine::EngineError;
use crate::traits::{AngleSource, Annunciator, Clock, LockDriver};

/// Accuracy game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Recapture the zero offset
    Init,
    /// Track the angle until it enters one of the tier bands
    CheckValue,
    /// Inside the master band, dwell timer running
    InTolerance,
    /// Inside the kids band, dwell timer running
    InToleranceKids,
    /// Held steady long enough: open the safe
    Win,
    /// Left the band before the dwell elapsed
    Over,
}

/// Target-accuracy engine
pub struct AccuracyEngine<A, L, D, C> {
    angle: A,
    lock: L,
    panel: D,
    clock: C,
    config: AccuracyConfig,

    state: State,
    entering: bool,

    /// Armed when a tolerance band is entered from `CheckValue`
    dwell_start_ms: u64,
}

impl<A, L, D, C> AccuracyEngine<A, L, D, C>
where
    A: AngleSource,
    L: LockDriver,
    D: Annunciator,
    C: Clock,
{
    /// Create the engine around its collaborators.
    pub fn new(config: AccuracyConfig, angle: A, lock: L, panel: D, clock: C) -> Self {
        Self {
            angle,
            lock,
            panel,
            clock,
            config,
            state: State::Init,
            entering: true,
            dwell_start_ms: 0,
        }
    }

    /// Validate the configuration and bring up the collaborators.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        self.config.validate()?;
        self.angle.initialize()?;
        self.lock.initialize()?;
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

    /// Advance the state machine by one tick.
    pub fn run(&mut self) -> Result<(), EngineError> {
        // Consumed for symmetry with the code-entry engine; no state of
        // this machine has per-activation entry work beyond what the
        // tick itself does.
        let _entering = self.entering;
        self.entering = false;

        match self.state {
            State::Init => {
                self.angle.set_zero_offset()?;
                self.goto(State::CheckValue);
            }
            State::CheckValue => {
                let angle = self.angle.angle_deg()?;
                let tier = *self.config.tier_for(angle);
                self.show(&tier, angle);

                // Both bands are tested every tick; they are disjoint
                // under a valid config, so at most one can match. The
                // kids check runs second and wins if both ever did.
                if self.config.master.in_band(angle) {
                    self.dwell_start_ms = self.clock.now_ms();
                    self.goto(State::InTolerance);
                }
                if self.config.kids.in_band(angle) {
                    self.dwell_start_ms = self.clock.now_ms();
                    self.goto(State::InToleranceKids);
                }
            }
            State::InTolerance => self.tick_in_tolerance(self.config.master)?,
            State::InToleranceKids => self.tick_in_tolerance(self.config.kids)?,
            State::Win => {
                self.panel.show_success();
                self.lock.hold_open(SAFE_OPEN_TIME_MS);
                self.goto(State::Init);
            }
            State::Over => {
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

    /// One tick inside a tolerance band.
    ///
    /// Departure is checked first, but a satisfied dwell overrides it:
    /// once the hold time is complete the win stands.
    fn tick_in_tolerance(&mut self, tier: TierConfig) -> Result<(), EngineError> {
        let angle = self.angle.angle_deg()?;
        self.show(&tier, angle);

        if tier.departed(angle) {
            self.goto(State::Over);
        }
        if self.clock.now_ms() - self.dwell_start_ms >= self.config.dwell_ms as u64 {
            self.goto(State::Win);
        }
        Ok(())
    }

    fn show(&mut self, tier: &TierConfig, angle: f32) {
        self.panel
            .display_angle_readout(to_dms(angle), tier.progress(angle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mock::{MockClock, MockLock, MockPanel, ScriptedAngle};

    type Engine = AccuracyEngine<ScriptedAngle, MockLock, MockPanel, MockClock>;

    fn engine_with(script: &'static [f32]) -> Engine {
        let mut engine = AccuracyEngine::new(
            AccuracyConfig::default(),
            ScriptedAngle::new(script),
            MockLock::default(),
            MockPanel::default(),
            MockClock::default(),
        );
        engine.initialize().unwrap();
        engine
    }

    #[test]
    fn init_recaptures_offset_then_tracks() {
        let mut engine = engine_with(&[50.0]);
        engine.run().unwrap();
        assert_eq!(engine.angle.zero_captures, 1);
        assert_eq!(engine.state(), State::CheckValue);
    }

    #[test]
    fn master_band_entry_arms_dwell_timer() {
        let mut engine = engine_with(&[50.0, 100.0]);
        engine.run().unwrap(); // Init
        engine.clock.now = 1234;

        engine.run().unwrap(); // 50.0: tracking, master tier display
        assert_eq!(engine.state(), State::CheckValue);

        engine.run().unwrap(); // 100.0: inside the master band
        assert_eq!(engine.state(), State::InTolerance);
        assert_eq!(engine.dwell_start_ms, 1234);
    }

    #[test]
    fn kids_band_entry_selects_kids_state() {
        let mut engine = engine_with(&[250.0, 300.0]);
        engine.run().unwrap(); // Init

        engine.run().unwrap(); // 250.0: kids tier display, not in band
        assert_eq!(engine.state(), State::CheckValue);
        // Kids bar resolution is 5°/segment: 50° off shows a partial bar
        assert!((engine.panel.last_progress - (1.0 - 50.0 / 160.0)).abs() < 1e-4);

        engine.run().unwrap(); // 300.0: inside the kids band
        assert_eq!(engine.state(), State::InToleranceKids);
    }

    #[test]
    fn win_at_exactly_the_dwell_time() {
        let mut engine = engine_with(&[100.0]);
        engine.run().unwrap(); // Init
        engine.run().unwrap(); // enters master band at t=0
        assert_eq!(engine.state(), State::InTolerance);

        engine.clock.now = 4999;
        engine.run().unwrap();
        assert_eq!(engine.state(), State::InTolerance);

        engine.clock.now = 5000;
        engine.run().unwrap();
        assert_eq!(engine.state(), State::Win);

        engine.run().unwrap();
        assert_eq!(engine.panel.successes, 1);
        assert_eq!(engine.lock.opens, 1);
        assert_eq!(engine.lock.last_open_ms, SAFE_OPEN_TIME_MS);
        assert_eq!(engine.state(), State::Init);
    }

    #[test]
    fn departure_before_dwell_is_game_over() {
        let mut engine = engine_with(&[100.0, 100.5, 110.0]);
        engine.run().unwrap(); // Init
        engine.run().unwrap(); // 100.0: enters master band at t=0
        assert_eq!(engine.state(), State::InTolerance);

        engine.clock.now = 3000;
        engine.run().unwrap(); // 100.5: still inside
        assert_eq!(engine.state(), State::InTolerance);

        engine.clock.now = 4999;
        engine.run().unwrap(); // 110.0: left the band one tick short
        assert_eq!(engine.state(), State::Over);

        engine.run().unwrap();
        assert_eq!(engine.panel.failures, 1);
        assert_eq!(engine.clock.last_delay_ms, GAME_OVER_HOLD_MS);
        assert_eq!(engine.lock.opens, 0);
        assert_eq!(engine.state(), State::Init);
    }

    #[test]
    fn dwell_is_measured_from_first_entry() {
        // Staying inside the band must not refresh the timer.
        let mut engine = engine_with(&[100.0]);
        engine.run().unwrap(); // Init
        engine.clock.now = 1000;
        engine.run().unwrap(); // band entered at t=1000

        for t in [2000, 3000, 4000, 5999] {
            engine.clock.now = t;
            engine.run().unwrap();
            assert_eq!(engine.state(), State::InTolerance);
        }

        engine.clock.now = 6000;
        engine.run().unwrap();
        // 6000 - 1000 >= 5000: dwell complete
        assert_eq!(engine.state(), State::Win);
    }

    #[test]
    fn readout_decomposes_angle_and_scales_bar() {
        let mut engine = engine_with(&[100.5]);
        engine.run().unwrap(); // Init
        engine.run().unwrap();

        let dms = engine.panel.last_dms.unwrap();
        assert_eq!(dms.degrees, 100);
        assert_eq!(dms.minutes, 30);
        // 0.5° off at 1°/segment over 32 segments
        assert!((engine.panel.last_progress - (1.0 - 0.5 / 32.0)).abs() < 1e-4);
    }

    #[test]
    fn reset_returns_to_init_from_any_state() {
        let mut engine = engine_with(&[100.0]);
        engine.run().unwrap();
        engine.run().unwrap();
        assert_eq!(engine.state(), State::InTolerance);

        engine.reset();
        assert_eq!(engine.panel.clears, 1);
        assert_eq!(engine.state(), State::Init);

        let captures = engine.angle.zero_captures;
        engine.run().unwrap();
        assert_eq!(engine.angle.zero_captures, captures + 1);
        assert_eq!(engine.state(), State::CheckValue);
    }

    #[test]
    fn overlapping_tier_config_is_fatal() {
        let mut config = AccuracyConfig::default();
        config.kids.target_deg = config.master.target_deg;
        let mut engine = AccuracyEngine::new(
            config,
            ScriptedAngle::new(&[0.0]),
            MockLock::default(),
            MockPanel::default(),
            MockClock::default(),
        );
        assert!(matches!(
            engine.initialize(),
            Err(EngineError::Config(_))
        ));
    }
}
