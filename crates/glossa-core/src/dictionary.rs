use std::collections::HashMap;
use std::path::Path;

/// Word → definition mapping with lowercase keys.
///
/// Read-only once loaded; lookups only ever borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, lowercasing the word. Returns the definition it replaced.
    pub fn insert(&mut self, word: &str, definition: impl Into<String>) -> Option<String> {
        self.entries.insert(word.to_lowercase(), definition.into())
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another dictionary into this one.
    /// Words present in both take the definition from `other`.
    pub fn merge(mut self, other: Dictionary) -> Self {
        let mut overridden = 0usize;
        for (word, definition) in other.entries {
            if self.entries.insert(word, definition).is_some() {
                overridden += 1;
            }
        }
        if overridden > 0 {
            tracing::debug!("Merge overrode {} existing definitions", overridden);
        }
        self
    }
}

impl<W, D> FromIterator<(W, D)> for Dictionary
where
    W: AsRef<str>,
    D: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (W, D)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        for (word, definition) in iter {
            dict.insert(word.as_ref(), definition);
        }
        dict
    }
}

impl From<HashMap<String, String>> for Dictionary {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// Load dictionaries from files
pub trait DictionaryLoader {
    /// Load dictionary from file path
    fn load_from_file(&self, path: &Path) -> Result<Dictionary, LoadError>;

    /// Supported file extensions
    fn supported_formats(&self) -> Vec<String>;

    /// Whether `path` has one of the supported extensions (case-insensitive)
    fn supports(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.supported_formats()
                    .iter()
                    .any(|format| format.eq_ignore_ascii_case(ext))
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
