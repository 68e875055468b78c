//! Build script for escapement-demo
//!
//! Validates demo.toml at compile time so the embedded default
//! configuration is always loadable.

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=demo.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let config_path = Path::new("demo.toml");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Failed to read demo.toml                                 ║\n\
            ║                                                                  ║\n\
            ║  Error: {:<56} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            e
        ),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid TOML syntax in demo.toml                         ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        ),
    };

    let mut errors = Vec::new();
    validate_positive(&config, &["engine", "tick_interval_ms"], u32::MAX.into(), &mut errors);
    validate_timer(&config, &["startup", "wait"], &mut errors);
    validate_timer(&config, &["wifi", "ip_poll"], &mut errors);
    validate_positive(&config, &["wifi", "ip_poll_limit"], u8::MAX.into(), &mut errors);

    match lookup(&config, &["wifi", "ssid"]).and_then(|v| v.as_str()) {
        Some(ssid) if !ssid.is_empty() && ssid.len() <= 32 => {}
        _ => errors.push("wifi.ssid must be a string of 1 to 32 bytes".to_string()),
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: demo.toml validation failed                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&errors.join("\n"))
        );
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn lookup<'a>(config: &'a toml::Value, path: &[&str]) -> Option<&'a toml::Value> {
    path.iter().try_fold(config, |value, key| value.get(key))
}

/// Check an integer field lies in `1..=max`, the range of its Rust type
fn validate_positive(config: &toml::Value, path: &[&str], max: i64, errors: &mut Vec<String>) {
    match lookup(config, path).and_then(|v| v.as_integer()) {
        Some(n) if (1..=max).contains(&n) => {}
        _ => errors.push(format!("{} must be between 1 and {}", path.join("."), max)),
    }
}

fn validate_timer(config: &toml::Value, path: &[&str], errors: &mut Vec<String>) {
    let Some(timer) = lookup(config, path) else {
        errors.push(format!("{} is missing", path.join(".")));
        return;
    };

    if let Some(kind) = timer.get("kind") {
        if !matches!(kind.as_str(), Some("Single") | Some("Repeat")) {
            errors.push(format!("{}.kind must be \"Single\" or \"Repeat\"", path.join(".")));
        }
    }

    match timer.get("ticks").and_then(|v| v.as_integer()) {
        Some(n) if (1..=i64::from(u16::MAX)).contains(&n) => {}
        _ => errors.push(format!("{}.ticks must be between 1 and 65535", path.join("."))),
    }
}
