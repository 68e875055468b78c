//! Embassy async tasks
//!
//! The tick task sets the cadence; the machine task runs the engine once
//! per tick.

pub mod machine;
pub mod tick;

pub use machine::machine_task;
pub use tick::tick_task;
