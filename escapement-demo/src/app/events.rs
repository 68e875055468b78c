//! Demo event sets
//!
//! The three Wi-Fi states share `WifiEvent` through their common parent and
//! each start their own range where `WifiEvent` ends. Sibling ranges overlap;
//! only one sibling is ever active.

use escapement_core::{event_set, Event};

event_set! {
    /// Startup state events
    pub enum StartupEvent: Event::MAX {
        /// Settle timer expired
        WaitTimeout,
    }
}

event_set! {
    /// Events handled by the shared Wi-Fi parent
    pub enum WifiEvent: Event::MAX {
        Disconnected,
        IpConfigured,
    }
}

event_set! {
    pub enum ConnectEvent: WifiEvent::END {
        CheckingNetwork,
    }
}

event_set! {
    pub enum AuthEvent: WifiEvent::END {
        Authenticating,
    }
}

event_set! {
    pub enum IpEvent: WifiEvent::END {
        /// Address poll timer fired
        WaitingForIpTimer,
    }
}

event_set! {
    /// Ready state events
    pub enum ReadyEvent: Event::MAX {
        WaitingForCard,
    }
}
