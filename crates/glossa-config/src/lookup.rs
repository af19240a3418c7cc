use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_max_suggestions() -> usize {
    3
}

fn default_cutoff() -> f64 {
    0.6
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// How many close matches the similarity search keeps
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Minimum similarity ratio for a key to count as a close match
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,
    /// Apply NFKC folding to queries before lowercasing
    #[serde(default)]
    pub normalize_unicode: bool,
}

impl LookupConfig {
    pub fn new() -> Self {
        Self {
            max_suggestions: env_parse("GLOSSA_MAX_SUGGESTIONS")
                .unwrap_or_else(default_max_suggestions),
            cutoff: env_parse("GLOSSA_CUTOFF").unwrap_or_else(default_cutoff),
            normalize_unicode: env_parse("GLOSSA_NORMALIZE_UNICODE").unwrap_or(false),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            cutoff: default_cutoff(),
            normalize_unicode: false,
        }
    }
}
