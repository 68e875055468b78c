//! Tick-driven hierarchical state machine engine
//!
//! A host loop calls [`StateMachine::run`] once per tick. Each call:
//!
//! 1. advances the machine's built-in [`Timer`], which may overwrite the
//!    pending event
//! 2. turns a pending `EXIT` into an exit/entry sequence
//! 3. dispatches the pending event to the active [`Handler`]
//! 4. commits a staged transition
//!
//! The engine performs no allocation, I/O, or logging and has no notion of
//! wall-clock time; the meaning of a tick is set by the host cadence.
//!
//! # Example
//!
//! ```
//! use escapement_core::{event_set, Event, Handler, Machine, StateMachine, Status, TimerKind};
//!
//! event_set! {
//!     pub enum BlinkEvent: Event::MAX {
//!         Toggle,
//!     }
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Led {
//!     Dark,
//!     Lit,
//! }
//!
//! impl Handler<u32> for Led {
//!     fn handle(self, machine: &mut Machine<Self>, event: Event, toggles: &mut u32) -> Status {
//!         match event {
//!             Event::ENTRY => machine.start_timer(TimerKind::Single, 2, BlinkEvent::Toggle),
//!             e if e == BlinkEvent::Toggle.event() => {
//!                 *toggles += 1;
//!                 let next = if self == Led::Dark { Led::Lit } else { Led::Dark };
//!                 machine.transition(next);
//!             }
//!             _ => {}
//!         }
//!         0
//!     }
//! }
//!
//! let mut sm = StateMachine::new(Led::Dark, 0u32);
//! // ENTRY, TIMER_RUNNING, Toggle, EXIT (commit), then ENTRY to Lit
//! for _ in 0..5 {
//!     sm.run();
//! }
//! assert!(sm.is_current_state(Led::Lit));
//! assert_eq!(*sm.context(), 1);
//! ```

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod config;
pub mod event;
pub mod machine;
pub mod timer;

pub use config::TimerConfig;
pub use event::{Event, Status};
pub use machine::{Handler, Machine, StateMachine};
pub use timer::{Timer, TimerKind};
