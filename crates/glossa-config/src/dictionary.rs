use std::env;

use serde::{Deserialize, Serialize};

fn default_paths() -> Vec<String> {
    vec!["dictionary.json".to_string()]
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary files, merged in order (later files override earlier keys)
    #[serde(default = "default_paths")]
    pub paths: Vec<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        // Comma separated list, e.g. GLOSSA_DICT_PATH=base.json,extra.json
        let paths = env::var("GLOSSA_DICT_PATH")
            .ok()
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|paths| !paths.is_empty())
            .unwrap_or_else(default_paths);

        Self { paths }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
        }
    }
}
