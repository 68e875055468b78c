//! Machine task
//!
//! Owns the demo state machine and runs it once per tick signal.

use escapement_demo::{build_machine, DemoConfig};
use log::{info, warn};

use super::tick::TICK_SIGNAL;

/// Machine task - main dispatch loop
#[embassy_executor::task]
pub async fn machine_task(config: DemoConfig) {
    info!("Machine task started");

    let mut sm = build_machine(config);
    let mut last_tick: u32 = 0;
    let mut state = sm.machine().active_state();

    loop {
        let tick = TICK_SIGNAL.wait().await;

        // Signal keeps only the latest value
        let missed = tick.wrapping_sub(last_tick).wrapping_sub(1);
        if missed > 0 {
            warn!("Missed {} tick(s) before tick {}", missed, tick);
        }
        last_tick = tick;

        sm.run();

        let current = sm.machine().active_state();
        if current != state {
            info!("State: {} -> {}", state.name(), current.name());
            state = current;
        }
    }
}
