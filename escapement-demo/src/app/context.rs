//! Per-instance application data
//!
//! Scratch state that belongs to one state (the address poll counter) lives
//! here rather than in a global, so two machines never share it.

use escapement_core::Event;
use heapless::Deque;

use super::states::AppState;
use crate::config::DemoConfig;

/// Number of state entries kept in the journal
pub const JOURNAL_LEN: usize = 16;

/// Scratch data owned by `GettingWifiIp` between its ENTRY and EXIT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IpPoll {
    /// Poll timer expiries seen so far
    pub count: u8,
}

/// Context handed to every demo handler
#[derive(Debug, Clone)]
pub struct AppContext {
    config: DemoConfig,
    /// Present only while `GettingWifiIp` is active
    pub(crate) ip_poll: Option<IpPoll>,
    pub(crate) disconnects: u32,
    last: Option<(AppState, Event)>,
    entered: Deque<AppState, JOURNAL_LEN>,
    dispatches: u32,
}

impl AppContext {
    /// Create a context with no history
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            ip_poll: None,
            disconnects: 0,
            last: None,
            entered: Deque::new(),
            dispatches: 0,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Address poll scratch data, if `GettingWifiIp` is active
    pub fn ip_poll(&self) -> Option<IpPoll> {
        self.ip_poll
    }

    /// Disconnect events seen by the Wi-Fi states
    pub fn disconnects(&self) -> u32 {
        self.disconnects
    }

    /// Most recent dispatch
    pub fn last_dispatch(&self) -> Option<(AppState, Event)> {
        self.last
    }

    /// Total dispatches
    pub fn dispatches(&self) -> u32 {
        self.dispatches
    }

    /// States entered, oldest first; bounded to the latest `JOURNAL_LEN`
    pub fn journal(&self) -> impl Iterator<Item = &AppState> {
        self.entered.iter()
    }

    /// Note one dispatch
    pub(crate) fn record(&mut self, state: AppState, event: Event) {
        self.last = Some((state, event));
        self.dispatches = self.dispatches.wrapping_add(1);

        if event == Event::ENTRY {
            if self.entered.is_full() {
                self.entered.pop_front();
            }
            // Cannot fail after the pop above
            let _ = self.entered.push_back(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_empty() {
        let ctx = AppContext::new(DemoConfig::default());
        assert_eq!(ctx.ip_poll(), None);
        assert_eq!(ctx.last_dispatch(), None);
        assert_eq!(ctx.dispatches(), 0);
        assert_eq!(ctx.journal().count(), 0);
    }

    #[test]
    fn test_record_tracks_entries_only() {
        let mut ctx = AppContext::new(DemoConfig::default());
        ctx.record(AppState::Startup, Event::ENTRY);
        ctx.record(AppState::Startup, Event::TIMER_RUNNING);
        ctx.record(AppState::Startup, Event::EXIT);
        ctx.record(AppState::ConnectWifi, Event::ENTRY);

        assert_eq!(ctx.dispatches(), 4);
        assert_eq!(
            ctx.last_dispatch(),
            Some((AppState::ConnectWifi, Event::ENTRY))
        );
        let journal: Vec<_> = ctx.journal().copied().collect();
        assert_eq!(journal, vec![AppState::Startup, AppState::ConnectWifi]);
    }

    #[test]
    fn test_journal_drops_oldest() {
        let mut ctx = AppContext::new(DemoConfig::default());
        ctx.record(AppState::Startup, Event::ENTRY);
        for _ in 0..JOURNAL_LEN {
            ctx.record(AppState::Ready, Event::ENTRY);
        }

        assert_eq!(ctx.journal().count(), JOURNAL_LEN);
        assert!(ctx.journal().all(|s| *s == AppState::Ready));
    }
}
