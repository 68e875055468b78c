//! Configuration loading and parsing
//!
//! Loads the demo configuration from an override file or the embedded
//! defaults compiled in from demo.toml.

pub mod loader;
pub mod types;

pub use loader::{load, load_file, load_from, parse_config, ConfigError, CONFIG_PATH_VAR};
pub use types::*;
