//! Configuration types
//!
//! Plain-data descriptions of engine settings that applications keep in
//! their own configuration files.

use crate::timer::TimerKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stored timer settings, applied with [`Machine::start_timer_with`]
///
/// The expiry event is not part of the configuration; it belongs to the
/// state that starts the timer.
///
/// [`Machine::start_timer_with`]: crate::Machine::start_timer_with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerConfig {
    /// Single-shot or repeating
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: TimerKind,
    /// Period in ticks
    pub ticks: u16,
}

impl TimerConfig {
    /// Single-shot timer expiring after `ticks`
    pub const fn single(ticks: u16) -> Self {
        Self {
            kind: TimerKind::Single,
            ticks,
        }
    }

    /// Repeating timer firing every `ticks`
    pub const fn repeat(ticks: u16) -> Self {
        Self {
            kind: TimerKind::Repeat,
            ticks,
        }
    }
}
