//! Wi-Fi provisioning application
//!
//! Handlers, their events, and the per-instance context they share.

pub mod context;
pub mod events;
pub mod states;

pub use context::{AppContext, IpPoll, JOURNAL_LEN};
pub use events::*;
pub use states::{wifi_base, AppState, STATUS_OK};
