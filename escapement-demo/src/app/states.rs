//! Wi-Fi provisioning states
//!
//! ```text
//! Startup -> ConnectWifi -> AuthenticatingWifi -> GettingWifiIp -> Ready
//!            \______________ wifi_base ______________/
//! ```
//!
//! The three Wi-Fi states fall through to [`wifi_base`], which moves to
//! `Ready` once an address is configured.

use escapement_core::{Event, Handler, Machine, Status};
use log::{debug, info, warn};

use super::context::{AppContext, IpPoll};
use super::events::{AuthEvent, ConnectEvent, IpEvent, ReadyEvent, StartupEvent, WifiEvent};

/// Status returned by every demo handler
pub const STATUS_OK: Status = 0;

/// Demo application states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppState {
    /// Settling after power-up
    Startup,
    /// Looking for the configured network
    ConnectWifi,
    /// Joining the network
    AuthenticatingWifi,
    /// Waiting for an address
    GettingWifiIp,
    /// Provisioned
    Ready,
}

impl AppState {
    /// Get state name for logging
    pub fn name(&self) -> &'static str {
        match self {
            AppState::Startup => "Startup",
            AppState::ConnectWifi => "ConnectWifi",
            AppState::AuthenticatingWifi => "AuthenticatingWifi",
            AppState::GettingWifiIp => "GettingWifiIp",
            AppState::Ready => "Ready",
        }
    }

    /// Check if this state falls through to the Wi-Fi parent
    pub fn is_wifi(&self) -> bool {
        matches!(
            self,
            AppState::ConnectWifi | AppState::AuthenticatingWifi | AppState::GettingWifiIp
        )
    }
}

impl Handler<AppContext> for AppState {
    fn handle(self, machine: &mut Machine<Self>, event: Event, ctx: &mut AppContext) -> Status {
        ctx.record(self, event);

        match self {
            AppState::Startup => startup(machine, event, ctx),
            AppState::ConnectWifi => connect_wifi(machine, event, ctx),
            AppState::AuthenticatingWifi => authenticating_wifi(machine, event, ctx),
            AppState::GettingWifiIp => getting_wifi_ip(machine, event, ctx),
            AppState::Ready => ready(machine, event, ctx),
        }
    }
}

fn startup(machine: &mut Machine<AppState>, event: Event, ctx: &mut AppContext) -> Status {
    match event {
        Event::ENTRY => {
            info!("Startup - ENTRY");
            machine.start_timer_with(ctx.config().startup.wait, StartupEvent::WaitTimeout);
        }
        Event::EXIT => debug!("Startup - EXIT"),
        Event::TIMER_RUNNING => debug!("Startup - waiting for timeout"),
        e if e == StartupEvent::WaitTimeout.event() => {
            info!("Startup - wait timeout");
            // A repeating wait would keep masking the EXIT
            machine.cancel_timer();
            machine.transition(AppState::ConnectWifi);
        }
        e => debug!("Startup - unhandled {}", e),
    }
    STATUS_OK
}

/// Parent of the Wi-Fi states
pub fn wifi_base(machine: &mut Machine<AppState>, event: Event, ctx: &mut AppContext) -> Status {
    match WifiEvent::from_event(event) {
        Some(WifiEvent::Disconnected) => {
            warn!("Wi-Fi disconnected from {}", ctx.config().wifi.ssid);
            ctx.disconnects = ctx.disconnects.saturating_add(1);
        }
        Some(WifiEvent::IpConfigured) => {
            info!("Wi-Fi address configured");
            machine.transition(AppState::Ready);
        }
        None => match event {
            Event::ENTRY => debug!("WifiBase - ENTRY"),
            Event::EXIT => debug!("WifiBase - EXIT"),
            e => debug!("WifiBase - unhandled {}", e),
        },
    }
    STATUS_OK
}

fn connect_wifi(machine: &mut Machine<AppState>, event: Event, ctx: &mut AppContext) -> Status {
    match event {
        Event::ENTRY => {
            info!("ConnectWifi - looking for {}", ctx.config().wifi.ssid);
            machine.emit_event(ConnectEvent::CheckingNetwork);
        }
        Event::EXIT => debug!("ConnectWifi - EXIT"),
        e if e == ConnectEvent::CheckingNetwork.event() => {
            debug!("ConnectWifi - network found");
            machine.transition(AppState::AuthenticatingWifi);
            return STATUS_OK;
        }
        e => debug!("ConnectWifi - unhandled {}", e),
    }
    wifi_base(machine, event, ctx)
}

fn authenticating_wifi(
    machine: &mut Machine<AppState>,
    event: Event,
    ctx: &mut AppContext,
) -> Status {
    match event {
        Event::ENTRY => {
            info!("AuthenticatingWifi - ENTRY");
            machine.emit_event(AuthEvent::Authenticating);
        }
        Event::EXIT => debug!("AuthenticatingWifi - EXIT"),
        e if e == AuthEvent::Authenticating.event() => {
            debug!("AuthenticatingWifi - authenticated");
            machine.transition(AppState::GettingWifiIp);
        }
        e => debug!("AuthenticatingWifi - unhandled {}", e),
    }
    wifi_base(machine, event, ctx)
}

fn getting_wifi_ip(machine: &mut Machine<AppState>, event: Event, ctx: &mut AppContext) -> Status {
    let poll = ctx.config().wifi.ip_poll;
    let limit = ctx.config().wifi.ip_poll_limit;

    match event {
        Event::ENTRY => {
            info!("GettingWifiIp - ENTRY");
            machine.start_timer_with(poll, IpEvent::WaitingForIpTimer);
            ctx.ip_poll = Some(IpPoll::default());
        }
        Event::EXIT => {
            debug!("GettingWifiIp - EXIT");
            ctx.ip_poll = None;
        }
        e if e == IpEvent::WaitingForIpTimer.event() => {
            if let Some(state) = ctx.ip_poll.as_mut() {
                state.count = state.count.saturating_add(1);
                debug!("GettingWifiIp - poll {}", state.count);

                if state.count > limit {
                    machine.cancel_timer();
                    machine.emit_event(WifiEvent::IpConfigured);
                } else if !machine.timer().is_armed() {
                    // Single-shot polls are re-armed by hand
                    machine.start_timer_with(poll, IpEvent::WaitingForIpTimer);
                }
            }
        }
        e if e == WifiEvent::IpConfigured.event() => debug!("GettingWifiIp - address configured"),
        e => debug!("GettingWifiIp - unhandled {}", e),
    }
    wifi_base(machine, event, ctx)
}

fn ready(machine: &mut Machine<AppState>, event: Event, _ctx: &mut AppContext) -> Status {
    match event {
        Event::ENTRY => {
            info!("Ready - ENTRY");
            machine.emit_event(ReadyEvent::WaitingForCard);
        }
        Event::EXIT => debug!("Ready - EXIT"),
        e if e == ReadyEvent::WaitingForCard.event() => debug!("Ready - waiting for card"),
        e => debug!("Ready - unhandled {}", e),
    }
    STATUS_OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use escapement_core::{StateMachine, TimerConfig};

    fn machine_with(config: DemoConfig) -> StateMachine<AppState, AppContext> {
        StateMachine::new(AppState::Startup, AppContext::new(config))
    }

    fn run_ticks(sm: &mut StateMachine<AppState, AppContext>, ticks: usize) {
        for _ in 0..ticks {
            sm.run();
        }
    }

    #[test]
    fn test_state_names() {
        assert_eq!(AppState::Startup.name(), "Startup");
        assert_eq!(AppState::GettingWifiIp.name(), "GettingWifiIp");
        assert!(AppState::ConnectWifi.is_wifi());
        assert!(!AppState::Ready.is_wifi());
    }

    #[test]
    fn test_startup_waits_for_timeout() {
        let mut sm = machine_with(DemoConfig::default());

        // ENTRY, then four TIMER_RUNNING ticks
        run_ticks(&mut sm, 5);
        assert_eq!(
            sm.context().last_dispatch(),
            Some((AppState::Startup, Event::TIMER_RUNNING))
        );

        // Tick 6 delivers the timeout, tick 7 the EXIT
        run_ticks(&mut sm, 1);
        assert_eq!(
            sm.context().last_dispatch(),
            Some((AppState::Startup, StartupEvent::WaitTimeout.event()))
        );
        assert!(sm.is_current_state(AppState::Startup));

        run_ticks(&mut sm, 1);
        assert!(sm.is_current_state(AppState::ConnectWifi));
    }

    #[test]
    fn test_default_sequence_timing() {
        let mut sm = machine_with(DemoConfig::default());

        run_ticks(&mut sm, 7);
        assert!(sm.is_current_state(AppState::ConnectWifi));
        run_ticks(&mut sm, 3);
        assert!(sm.is_current_state(AppState::AuthenticatingWifi));
        run_ticks(&mut sm, 3);
        assert!(sm.is_current_state(AppState::GettingWifiIp));

        // Entry at tick 14, then one poll per tick until the count passes 5
        run_ticks(&mut sm, 7);
        assert_eq!(sm.context().ip_poll(), Some(IpPoll { count: 6 }));
        assert!(!sm.machine().timer().is_armed());

        run_ticks(&mut sm, 1);
        assert!(sm.is_current_state(AppState::GettingWifiIp));
        run_ticks(&mut sm, 1);
        assert!(sm.is_current_state(AppState::Ready));
        assert_eq!(sm.context().ip_poll(), None);
    }

    #[test]
    fn test_ready_receives_waiting_for_card() {
        let mut sm = machine_with(DemoConfig::default());
        run_ticks(&mut sm, 23);
        assert_eq!(
            sm.context().last_dispatch(),
            Some((AppState::Ready, Event::ENTRY))
        );

        run_ticks(&mut sm, 3);
        assert_eq!(
            sm.context().last_dispatch(),
            Some((AppState::Ready, ReadyEvent::WaitingForCard.event()))
        );
        assert!(sm.is_current_state(AppState::Ready));
    }

    #[test]
    fn test_journal_lists_every_state() {
        let mut sm = machine_with(DemoConfig::default());
        run_ticks(&mut sm, 23);

        let journal: Vec<_> = sm.context().journal().copied().collect();
        assert_eq!(
            journal,
            vec![
                AppState::Startup,
                AppState::ConnectWifi,
                AppState::AuthenticatingWifi,
                AppState::GettingWifiIp,
                AppState::Ready,
            ]
        );
    }

    #[test]
    fn test_custom_timing() {
        let mut config = DemoConfig::default();
        config.startup.wait = TimerConfig::single(2);
        config.wifi.ip_poll = TimerConfig::repeat(3);
        config.wifi.ip_poll_limit = 1;
        let mut sm = machine_with(config);

        run_ticks(&mut sm, 18);
        assert!(sm.is_current_state(AppState::GettingWifiIp));
        run_ticks(&mut sm, 1);
        assert!(sm.is_current_state(AppState::Ready));
    }

    #[test]
    fn test_single_shot_poll_is_rearmed() {
        let mut config = DemoConfig::default();
        config.wifi.ip_poll = TimerConfig::single(1);
        let mut sm = machine_with(config);

        // Same cadence as a repeating poll of 1
        run_ticks(&mut sm, 21);
        assert!(sm.is_current_state(AppState::GettingWifiIp));
        run_ticks(&mut sm, 1);
        assert!(sm.is_current_state(AppState::Ready));
    }

    #[test]
    fn test_disconnect_is_handled_by_base() {
        let mut sm = machine_with(DemoConfig::default());
        run_ticks(&mut sm, 8);
        assert!(sm.is_current_state(AppState::ConnectWifi));

        // Replaces the pending CheckingNetwork
        sm.machine_mut().emit_event(WifiEvent::Disconnected);
        run_ticks(&mut sm, 3);

        assert!(sm.is_current_state(AppState::ConnectWifi));
        assert_eq!(sm.context().disconnects(), 3);
        assert_eq!(
            sm.context().last_dispatch(),
            Some((AppState::ConnectWifi, WifiEvent::Disconnected.event()))
        );
    }

    #[test]
    fn test_instances_do_not_share_poll_state() {
        let mut a = machine_with(DemoConfig::default());
        let mut b = machine_with(DemoConfig::default());

        run_ticks(&mut a, 16);
        run_ticks(&mut b, 14);

        assert_eq!(a.context().ip_poll(), Some(IpPoll { count: 2 }));
        assert_eq!(b.context().ip_poll(), Some(IpPoll { count: 0 }));
    }
}
