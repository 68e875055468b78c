//! Configuration loading
//!
//! Reads an override file named by `ESCAPEMENT_CONFIG` when present and
//! falls back to the demo.toml embedded at build time.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use super::types::DemoConfig;

/// Default configuration, validated by build.rs
pub const EMBEDDED_CONFIG: &str = include_str!("../../demo.toml");

/// Environment variable naming an override config file
pub const CONFIG_PATH_VAR: &str = "ESCAPEMENT_CONFIG";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Override file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML syntax or schema error
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// Value out of range
    #[error("{field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Parse and validate a configuration document
pub fn parse_config(content: &str) -> Result<DemoConfig, ConfigError> {
    let config: DemoConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a configuration file
pub fn load_file(path: &Path) -> Result<DemoConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Load the configuration, honouring `ESCAPEMENT_CONFIG`
pub fn load() -> DemoConfig {
    load_from(std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from))
}

/// Load from `path` if given, else from the embedded defaults
///
/// Never fails: a broken override falls back to the embedded file, and a
/// broken embedded file falls back to the compiled-in defaults.
pub fn load_from(path: Option<PathBuf>) -> DemoConfig {
    if let Some(path) = path {
        info!("Loading configuration from {}", path.display());
        match load_file(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                return config;
            }
            Err(e) => warn!("Config override rejected: {}", e),
        }
    }

    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            debug!("Using embedded configuration");
            config
        }
        Err(e) => {
            warn!("Embedded configuration rejected: {}, using defaults", e);
            DemoConfig::default()
        }
    }
}
