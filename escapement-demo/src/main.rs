//! Escapement demo binary
//!
//! Loads the configuration, then spawns the tick and machine tasks on the
//! std embassy executor.

use embassy_executor::Spawner;
use log::info;

use escapement_demo::config;

mod tasks;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    info!("Escapement demo v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load();
    info!(
        "Network {}, {} ms per tick",
        config.wifi.ssid, config.engine.tick_interval_ms
    );

    spawner
        .spawn(tasks::tick_task(config.engine.tick_interval_ms))
        .unwrap();
    spawner.spawn(tasks::machine_task(config)).unwrap();

    info!("All tasks spawned");
}
