use glossa_config::lookup::LookupConfig;
use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::error::LookupError;
use crate::preprocess::preprocessor;
use crate::similarity::{CloseMatch, close_matches};

/// Outcome of a single lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupResult {
    /// The query is a dictionary word
    Found { definition: String },
    /// The query is not a word, but `word` is close to it
    Suggested { word: String, definition: String },
    /// Nothing is close enough to suggest
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookupOptions {
    /// How many close matches to keep
    pub max_suggestions: usize,
    /// Minimum similarity ratio for a close match
    pub cutoff: f64,
    pub normalize_unicode: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            max_suggestions: 3,
            cutoff: 0.6,
            normalize_unicode: false,
        }
    }
}

impl LookupOptions {
    pub fn validate(&self) -> Result<(), LookupError> {
        if self.max_suggestions == 0 {
            return Err(LookupError::InvalidInput(
                "max_suggestions must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(LookupError::InvalidInput(format!(
                "cutoff must be in [0.0, 1.0], got {}",
                self.cutoff
            )));
        }
        Ok(())
    }
}

impl From<&LookupConfig> for LookupOptions {
    fn from(config: &LookupConfig) -> Self {
        Self {
            max_suggestions: config.max_suggestions,
            cutoff: config.cutoff,
            normalize_unicode: config.normalize_unicode,
        }
    }
}

/// Look up `word` with the default options (3 suggestions, cutoff 0.6)
pub fn lookup(word: &str, dictionary: &Dictionary) -> LookupResult {
    resolve(word, dictionary, &LookupOptions::default())
}

/// Look up `word`: exact match first, then the most similar key, then nothing
pub fn lookup_with(
    word: &str,
    dictionary: &Dictionary,
    options: &LookupOptions,
) -> Result<LookupResult, LookupError> {
    options.validate()?;
    Ok(resolve(word, dictionary, options))
}

/// All close matches for `word`, most similar first
pub fn suggestions<'a>(
    word: &str,
    dictionary: &'a Dictionary,
    options: &LookupOptions,
) -> Result<Vec<CloseMatch<'a>>, LookupError> {
    options.validate()?;
    let query = preprocessor(options.normalize_unicode).process(word);
    Ok(rank(&query, dictionary, options))
}

fn rank<'a>(
    query: &str,
    dictionary: &'a Dictionary,
    options: &LookupOptions,
) -> Vec<CloseMatch<'a>> {
    close_matches(
        query,
        dictionary.keys(),
        options.max_suggestions,
        options.cutoff,
    )
}

fn resolve(word: &str, dictionary: &Dictionary, options: &LookupOptions) -> LookupResult {
    let query = preprocessor(options.normalize_unicode).process(word);

    if let Some(definition) = dictionary.get(&query) {
        tracing::debug!("Exact match for '{}'", query);
        return LookupResult::Found {
            definition: definition.to_string(),
        };
    }

    let best = rank(&query, dictionary, options).into_iter().next();
    match best.and_then(|m| dictionary.get(m.candidate).map(|d| (m, d))) {
        Some((m, definition)) => {
            tracing::debug!(
                "No exact match for '{}', suggesting '{}' (ratio {:.3})",
                query,
                m.candidate,
                m.ratio
            );
            LookupResult::Suggested {
                word: m.candidate.to_string(),
                definition: definition.to_string(),
            }
        }
        None => {
            tracing::debug!("No match for '{}'", query);
            LookupResult::NotFound
        }
    }
}
