//! Escapement demo application
//!
//! Wi-Fi provisioning sequence built on `escapement-core`: a settle timer,
//! three Wi-Fi states sharing a parent handler, and a ready state.
//! The binary drives it from an embassy ticker.

pub mod app;
pub mod config;

pub use app::{AppContext, AppState};
pub use config::DemoConfig;

use escapement_core::StateMachine;

/// The demo machine, starting in `Startup`
pub fn build_machine(config: DemoConfig) -> StateMachine<AppState, AppContext> {
    StateMachine::new(AppState::Startup, AppContext::new(config))
}
