//! Event tags and the status byte
//!
//! Events are small unsigned tags. The first four values are reserved by
//! the engine; everything from [`Event::MAX`] upwards belongs to the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque status byte returned by handlers
///
/// The engine never interprets it.
pub type Status = u8;

/// Event tag delivered to the active handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Event(u8);

impl Event {
    /// No event; the timer's expiry event before any timer is started
    pub const INVALID: Event = Event(0);
    /// First dispatch to a newly active handler
    pub const ENTRY: Event = Event(1);
    /// Last dispatch to a handler about to be replaced
    pub const EXIT: Event = Event(2);
    /// Armed timer has not expired yet
    pub const TIMER_RUNNING: Event = Event(3);
    /// First value free for caller-defined events
    pub const MAX: Event = Event(4);

    /// Wrap a raw tag
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Raw tag value
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Event `n` places above this one
    ///
    /// Panics (at compile time in const contexts) if the result overflows.
    pub const fn offset(self, n: u8) -> Self {
        match self.0.checked_add(n) {
            Some(raw) => Self(raw),
            None => panic!("event tag overflow"),
        }
    }

    /// Check if this is one of the engine's reserved tags
    pub const fn is_reserved(self) -> bool {
        self.0 < Self::MAX.0
    }

    /// Check if this tag is in the caller-defined range
    pub const fn is_custom(self) -> bool {
        !self.is_reserved()
    }
}

impl core::fmt::Display for Event {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::INVALID => f.write_str("INVALID"),
            Self::ENTRY => f.write_str("ENTRY"),
            Self::EXIT => f.write_str("EXIT"),
            Self::TIMER_RUNNING => f.write_str("TIMER_RUNNING"),
            Self(raw) => write!(f, "#{}", raw),
        }
    }
}

impl From<u8> for Event {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<Event> for u8 {
    fn from(event: Event) -> Self {
        event.0
    }
}
