use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use glossa_config::Config;
use glossa_core::LookupOptions;
use serde_json::Value;

use crate::cli::Cli;

/// Read a JSON config profile as a partial document
fn read_profile(path: &Path) -> anyhow::Result<Value> {
    let file = File::open(path)
        .with_context(|| format!("failed to open config profile {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse config profile {}", path.display()))
}

/// Recursively overwrite `base` with the fields present in `overlay`
fn overlay(base: &mut Value, overlay_value: Value) {
    match (base, overlay_value) {
        (Value::Object(base), Value::Object(fields)) => {
            for (key, value) in fields {
                match base.get_mut(&key) {
                    Some(existing) => overlay(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, value) => *base = value,
    }
}

/// Layer a JSON profile over `config`; fields the profile leaves out keep
/// their current values
pub fn load_profile(path: &Path, config: Config) -> anyhow::Result<Config> {
    let profile = read_profile(path)?;
    let mut merged = serde_json::to_value(config)?;
    overlay(&mut merged, profile);
    serde_json::from_value(merged)
        .with_context(|| format!("invalid settings in config profile {}", path.display()))
}

/// `GLOSSA_*` environment variables, then the profile file when given
pub fn load_config(profile: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::new();
    match profile {
        Some(path) => load_profile(path, config),
        None => Ok(config),
    }
}

/// Environment, profile and command line flags, in increasing precedence.
/// Lookup settings are checked here so bad values fail before any query.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);
    LookupOptions::from(&config.lookup)
        .validate()
        .context("invalid lookup settings")?;
    Ok(config)
}
