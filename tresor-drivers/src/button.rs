//! Debounced push-button
//!
//! The reset button is wired active-low with a pull-up. Contact bounce
//! is filtered with a fixed stability window; a press is latched until
//! the host loop consumes it, so a short press between polls is never
//! lost.

use tresor_core::traits::Clock;

/// Raw level must hold this long before it counts
pub const DEBOUNCE_MS: u32 = 50;

/// Trait for the button input pin
pub trait InputPin {
    /// Read the pin level; low means pressed
    fn is_low(&self) -> bool;
}

/// Debounced button on a GPIO pin
pub struct Button<P, C> {
    pin: P,
    clock: C,
    /// Last raw sample (true = pressed)
    last_raw: bool,
    /// Debounced state (true = pressed)
    stable: bool,
    last_change_ms: u64,
    pressed_latch: bool,
}

impl<P, C> Button<P, C>
where
    P: InputPin,
    C: Clock,
{
    /// Create a new button around its pin and clock
    pub fn new(pin: P, clock: C) -> Self {
        Self {
            pin,
            clock,
            last_raw: false,
            stable: false,
            last_change_ms: 0,
            pressed_latch: false,
        }
    }

    /// Sample the pin once; call from the host loop every tick
    pub fn update(&mut self) {
        let raw = self.pin.is_low();
        let now = self.clock.now_ms();

        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_change_ms = now;
        } else if raw != self.stable && now - self.last_change_ms >= DEBOUNCE_MS as u64 {
            self.stable = raw;
            if raw {
                self.pressed_latch = true;
            }
        }
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Consume a latched press, if any
    pub fn take_press(&mut self) -> bool {
        core::mem::take(&mut self.pressed_latch)
    }

    /// Discard any latched press
    pub fn clear(&mut self) {
        self.pressed_latch = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockPin {
        low: Cell<bool>,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                low: Cell::new(false),
            }
        }
    }

    impl InputPin for &MockPin {
        fn is_low(&self) -> bool {
            self.low.get()
        }
    }

    struct MockClock {
        now: Cell<u64>,
    }

    impl MockClock {
        fn new() -> Self {
            Self { now: Cell::new(0) }
        }
    }

    impl Clock for &MockClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }

        fn delay_ms(&mut self, ms: u32) {
            self.now.set(self.now.get() + ms as u64);
        }
    }

    #[test]
    fn press_registers_after_debounce_window() {
        let pin = MockPin::new();
        let clock = MockClock::new();
        let mut button = Button::new(&pin, &clock);

        pin.low.set(true);
        clock.now.set(0);
        button.update(); // edge seen, window starts
        assert!(!button.take_press());

        clock.now.set(DEBOUNCE_MS as u64 - 1);
        button.update();
        assert!(!button.take_press());

        clock.now.set(DEBOUNCE_MS as u64);
        button.update();
        assert!(button.is_pressed());
        assert!(button.take_press());
        // Latch is consumed, not re-armed while held
        assert!(!button.take_press());
    }

    #[test]
    fn bounce_shorter_than_the_window_is_ignored() {
        let pin = MockPin::new();
        let clock = MockClock::new();
        let mut button = Button::new(&pin, &clock);

        for t in [0u64, 10, 20, 30, 40] {
            clock.now.set(t);
            pin.low.set(t % 20 == 0);
            button.update();
        }

        assert!(!button.is_pressed());
        assert!(!button.take_press());
    }

    #[test]
    fn release_and_second_press_latch_again() {
        let pin = MockPin::new();
        let clock = MockClock::new();
        let mut button = Button::new(&pin, &clock);

        pin.low.set(true);
        button.update();
        clock.now.set(60);
        button.update();
        assert!(button.take_press());

        pin.low.set(false);
        clock.now.set(100);
        button.update();
        clock.now.set(160);
        button.update();
        assert!(!button.is_pressed());

        pin.low.set(true);
        clock.now.set(200);
        button.update();
        clock.now.set(260);
        button.update();
        assert!(button.take_press());
    }

    #[test]
    fn clear_discards_a_pending_press() {
        let pin = MockPin::new();
        let clock = MockClock::new();
        let mut button = Button::new(&pin, &clock);

        pin.low.set(true);
        button.update();
        clock.now.set(60);
        button.update();

        button.clear();
        assert!(!button.take_press());
    }
}
