//! State dispatch core
//!
//! One call to [`StateMachine::run`] is one tick: the timer advances, the
//! active handler sees exactly one event, and a staged transition is
//! committed. Transitions take two ticks: the outgoing handler receives
//! `EXIT` on the tick after the request and the incoming handler receives
//! `ENTRY` on the tick after that.

use crate::config::TimerConfig;
use crate::event::{Event, Status};
use crate::timer::{Timer, TimerKind};

/// A state of a machine
///
/// Implementors are usually small `Copy` enums with one variant per state.
/// The machine compares handlers only through `PartialEq`. Hierarchical
/// states delegate by calling their parent's `handle` (or any plain
/// function) with the same event and context.
pub trait Handler<C>: Copy + PartialEq {
    /// Handle one event and return a status byte
    fn handle(self, machine: &mut Machine<Self>, event: Event, context: &mut C) -> Status;
}

/// What `run` delivers after the current dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum NextEvent {
    None,
    Entry,
}

/// Engine registers of one machine instance
///
/// Handlers receive this while they run and use it to request
/// transitions, emit events, and drive the timer.
#[derive(Debug, Clone)]
pub struct Machine<H> {
    /// Handler receiving events
    active: H,
    /// Transition target, committed after the outgoing `EXIT`
    staged: Option<H>,
    /// Last handler left
    previous: Option<H>,
    /// Single-slot event register
    pending: Event,
    next: NextEvent,
    status: Status,
    timer: Timer,
}

impl<H: Copy + PartialEq> Machine<H> {
    fn new(initial: H) -> Self {
        Self {
            active: initial,
            staged: None,
            previous: None,
            pending: Event::ENTRY,
            next: NextEvent::None,
            status: 0,
            timer: Timer::new(),
        }
    }

    /// Request a transition to `next`
    ///
    /// Only arms the exit/entry protocol; the current dispatch is not
    /// affected. Requesting again before the commit replaces the target
    /// and restarts the protocol.
    pub fn transition(&mut self, next: H) {
        self.staged = Some(next);
        self.pending = Event::EXIT;
        self.next = NextEvent::None;
    }

    /// Overwrite the pending event
    pub fn emit_event(&mut self, event: impl Into<Event>) {
        self.pending = event.into();
    }

    /// Set the status byte
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Status returned by the latest dispatch, or the last value set
    pub fn status(&self) -> Status {
        self.status
    }

    /// Check if `handler` is the active one
    pub fn is_current_state(&self, handler: H) -> bool {
        self.active == handler
    }

    /// Arm the built-in timer, replacing any previous configuration
    pub fn start_timer(&mut self, kind: TimerKind, ticks: u16, event: impl Into<Event>) {
        self.timer.start(kind, ticks, event.into());
    }

    /// Arm the built-in timer from stored settings
    pub fn start_timer_with(&mut self, config: TimerConfig, event: impl Into<Event>) {
        self.timer.start_with(config, event.into());
    }

    /// Disarm the built-in timer
    pub fn cancel_timer(&mut self) {
        self.timer.cancel();
    }

    /// Handler currently receiving events
    pub fn active_state(&self) -> H {
        self.active
    }

    /// Pending transition target
    pub fn staged_state(&self) -> Option<H> {
        self.staged
    }

    /// Handler active before the last commit
    pub fn previous_state(&self) -> Option<H> {
        self.previous
    }

    /// Event the next `run` will deliver, unless the timer overwrites it
    pub fn pending_event(&self) -> Event {
        self.pending
    }

    /// The built-in timer
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    fn process_timer_tick(&mut self) {
        if let Some(event) = self.timer.tick() {
            self.pending = event;
        }
    }

    /// Make the staged handler active and queue its `ENTRY`
    ///
    /// An `EXIT` that was emitted without a transition re-enters the
    /// active handler.
    fn commit(&mut self) {
        let next = self.staged.take().unwrap_or(self.active);
        self.previous = Some(self.active);
        self.active = next;
        self.pending = Event::ENTRY;
        self.next = NextEvent::None;
    }
}

/// A machine instance together with its caller-owned context
///
/// The context is handed to every handler call unchanged; per-instance
/// scratch data belongs there.
#[derive(Debug, Clone)]
pub struct StateMachine<H, C> {
    machine: Machine<H>,
    context: C,
}

impl<H, C> StateMachine<H, C>
where
    H: Handler<C>,
{
    /// Create a machine in `initial`; the first `run` delivers `ENTRY`
    pub fn new(initial: H, context: C) -> Self {
        Self {
            machine: Machine::new(initial),
            context,
        }
    }

    /// Process one tick and return the active handler's status
    pub fn run(&mut self) -> Status {
        let machine = &mut self.machine;

        machine.process_timer_tick();

        if machine.pending == Event::EXIT {
            machine.next = NextEvent::Entry;
        }

        let active = machine.active;
        let event = machine.pending;
        let status = active.handle(machine, event, &mut self.context);
        machine.status = status;

        if machine.next == NextEvent::Entry {
            machine.commit();
        }

        status
    }

    /// Check if `handler` is the active one
    pub fn is_current_state(&self, handler: H) -> bool {
        self.machine.is_current_state(handler)
    }

    /// Status of the latest dispatch
    pub fn status(&self) -> Status {
        self.machine.status()
    }

    /// Set the status byte from outside a dispatch
    pub fn set_status(&mut self, status: Status) {
        self.machine.set_status(status);
    }

    /// Engine registers
    pub fn machine(&self) -> &Machine<H> {
        &self.machine
    }

    /// Engine registers, for driving the machine from the host side
    pub fn machine_mut(&mut self) -> &mut Machine<H> {
        &mut self.machine
    }

    /// Caller context
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Caller context, mutable
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the machine and return its context
    pub fn into_context(self) -> C {
        self.context
    }
}
