//! Built-in countdown timer
//!
//! Each machine embeds exactly one timer. While armed it writes into the
//! pending-event register on every tick, before the active handler runs:
//! `TIMER_RUNNING` while counting, the configured event on expiry.

use crate::config::TimerConfig;
use crate::event::Event;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timer behaviour on expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimerKind {
    /// Fire once, then disarm
    #[default]
    Single,
    /// Fire, then restart with the same period and event
    Repeat,
}

/// Single countdown timer measured in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timer {
    kind: TimerKind,
    armed: bool,
    /// Ticks until expiry
    target: u16,
    /// Ticks counted since the last (re)start
    elapsed: u16,
    /// Event written to the register on expiry
    event: Event,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a disarmed single-shot timer with a zero period
    pub const fn new() -> Self {
        Self {
            kind: TimerKind::Single,
            armed: false,
            target: 0,
            elapsed: 0,
            event: Event::INVALID,
        }
    }

    /// Arm the timer, replacing any previous configuration
    pub fn start(&mut self, kind: TimerKind, ticks: u16, event: Event) {
        self.kind = kind;
        self.target = ticks;
        self.elapsed = 0;
        self.event = event;
        self.armed = true;
    }

    /// Arm the timer from a stored configuration
    pub fn start_with(&mut self, config: TimerConfig, event: Event) {
        self.start(config.kind, config.ticks, event);
    }

    /// Disarm the timer; nothing is emitted
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Advance by one tick
    ///
    /// Returns the event to write into the pending register, or `None`
    /// when the timer is disarmed. The counter wraps, so a zero-tick
    /// target only expires after 65536 ticks.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.armed {
            return None;
        }

        self.elapsed = self.elapsed.wrapping_add(1);

        if self.elapsed == self.target {
            match self.kind {
                TimerKind::Repeat => self.start(self.kind, self.target, self.event),
                TimerKind::Single => self.cancel(),
            }
            Some(self.event)
        } else {
            Some(Event::TIMER_RUNNING)
        }
    }

    /// Check if the timer is counting
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Configured kind
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// Configured period in ticks
    pub fn target(&self) -> u16 {
        self.target
    }

    /// Ticks counted since the last (re)start
    pub fn elapsed(&self) -> u16 {
        self.elapsed
    }

    /// Ticks left before expiry, or `None` when disarmed
    pub fn remaining(&self) -> Option<u16> {
        self.armed.then(|| self.target.wrapping_sub(self.elapsed))
    }

    /// Event emitted on expiry
    pub fn event(&self) -> Event {
        self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPIRED: Event = Event::new(9);

    #[test]
    fn test_new_is_disarmed() {
        let mut timer = Timer::new();
        assert!(!timer.is_armed());
        assert_eq!(timer.kind(), TimerKind::Single);
        assert_eq!(timer.target(), 0);
        assert_eq!(timer.event(), Event::INVALID);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn test_single_shot_countdown() {
        let mut timer = Timer::new();
        timer.start(TimerKind::Single, 3, EXPIRED);

        assert_eq!(timer.tick(), Some(Event::TIMER_RUNNING));
        assert_eq!(timer.remaining(), Some(2));
        assert_eq!(timer.tick(), Some(Event::TIMER_RUNNING));
        assert_eq!(timer.tick(), Some(EXPIRED));
        assert!(!timer.is_armed());
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn test_repeat_rearms() {
        let mut timer = Timer::new();
        timer.start(TimerKind::Repeat, 2, EXPIRED);

        for _ in 0..3 {
            assert_eq!(timer.tick(), Some(Event::TIMER_RUNNING));
            assert_eq!(timer.tick(), Some(EXPIRED));
            assert!(timer.is_armed());
            assert_eq!(timer.elapsed(), 0);
        }
    }

    #[test]
    fn test_repeat_every_tick() {
        let mut timer = Timer::new();
        timer.start(TimerKind::Repeat, 1, EXPIRED);

        for _ in 0..5 {
            assert_eq!(timer.tick(), Some(EXPIRED));
        }
    }

    #[test]
    fn test_cancel_mid_countdown() {
        let mut timer = Timer::new();
        timer.start(TimerKind::Single, 5, EXPIRED);
        timer.tick();
        timer.cancel();

        assert!(!timer.is_armed());
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn test_restart_replaces_configuration() {
        let mut timer = Timer::new();
        timer.start(TimerKind::Repeat, 10, EXPIRED);
        timer.tick();
        timer.tick();

        timer.start(TimerKind::Single, 1, Event::new(42));
        assert_eq!(timer.elapsed(), 0);
        assert_eq!(timer.tick(), Some(Event::new(42)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_zero_ticks_runs_until_wrap() {
        let mut timer = Timer::new();
        timer.start(TimerKind::Single, 0, EXPIRED);
        assert_eq!(timer.tick(), Some(Event::TIMER_RUNNING));
        assert!(timer.is_armed());

        for _ in 1..u16::MAX {
            assert_eq!(timer.tick(), Some(Event::TIMER_RUNNING));
        }
        assert_eq!(timer.elapsed(), u16::MAX);

        // 65536th tick wraps the counter back to the target
        assert_eq!(timer.tick(), Some(EXPIRED));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_start_with_config() {
        let mut timer = Timer::new();
        timer.start_with(TimerConfig::repeat(4), EXPIRED);
        assert_eq!(timer.kind(), TimerKind::Repeat);
        assert_eq!(timer.target(), 4);
        assert_eq!(timer.event(), EXPIRED);
    }
}
