//! Tick task
//!
//! Defines the real-world length of one engine tick.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use log::info;

/// Signal to notify the machine task of a tick, carrying the tick number
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Tick task - sends a numbered tick every `interval_ms`
#[embassy_executor::task]
pub async fn tick_task(interval_ms: u32) {
    info!("Tick task started, {} ms per tick", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(interval_ms)));
    let mut tick: u32 = 0;

    loop {
        ticker.next().await;
        tick = tick.wrapping_add(1);
        TICK_SIGNAL.signal(tick);
    }
}
