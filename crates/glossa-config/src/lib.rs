use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::LogConfig;
use self::lookup::LookupConfig;

pub mod dictionary;
pub mod log;
pub mod lookup;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub lookup: LookupConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build config from `GLOSSA_*` environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            lookup: LookupConfig::new(),
            log: LogConfig::new(),
        }
    }
}

/// Parse an env var, ignoring it when unset or unparsable
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
