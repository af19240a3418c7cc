use std::io::ErrorKind;
use std::path::Path;

use glossa_core::dictionary::{Dictionary, DictionaryLoader, LoadError};
use serde_json::Value;

/// Joins list-valued definitions into one string
const DEFINITION_SEPARATOR: &str = "; ";

/// Flat JSON dictionaries: `{ "word": "definition", ... }`.
///
/// A definition may also be a list of strings, which is joined with `"; "`.
/// Words are lowercased; when two words collide after lowercasing only one
/// definition is kept and a warning is logged.
pub struct JsonLoader;

impl JsonLoader {
    /// Parse a dictionary from a JSON string
    pub fn from_json(json: &str) -> Result<Dictionary, LoadError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

        let Value::Object(map) = value else {
            return Err(LoadError::InvalidFormat(
                "expected a JSON object mapping words to definitions".to_string(),
            ));
        };

        let mut dict = Dictionary::new();
        for (word, raw) in map {
            let definition = definition_text(&word, raw)?;
            if dict.insert(&word, definition).is_some() {
                tracing::warn!("Duplicate word '{}' after lowercasing, definition replaced", word);
            }
        }

        Ok(dict)
    }
}

fn definition_text(word: &str, raw: Value) -> Result<String, LoadError> {
    match raw {
        Value::String(text) => Ok(text),
        Value::Array(items) => {
            let parts = items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => Ok(text),
                    _ => Err(invalid_definition(word)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(DEFINITION_SEPARATOR))
        }
        _ => Err(invalid_definition(word)),
    }
}

fn invalid_definition(word: &str) -> LoadError {
    LoadError::InvalidFormat(format!(
        "definition of '{word}' must be a string or a list of strings"
    ))
}

impl DictionaryLoader for JsonLoader {
    fn load_from_file(&self, path: &Path) -> Result<Dictionary, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
            _ => LoadError::IoError(e),
        })?;
        let dict = Self::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.len());
        Ok(dict)
    }

    fn supported_formats(&self) -> Vec<String> {
        vec!["json".to_string()]
    }
}
