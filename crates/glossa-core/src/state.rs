use std::sync::Arc;

use glossa_config::Config;
use tokio::sync::RwLock;

use crate::dictionary::Dictionary;
use crate::error::LookupError;
use crate::lookup::{LookupOptions, LookupResult, lookup_with, suggestions};

#[derive(Default)]
pub struct AppState {
    pub config: RwLock<Config>,
    dictionary: RwLock<Option<Arc<Dictionary>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            dictionary: RwLock::new(None),
        }
    }

    /// Replace the loaded dictionary
    pub async fn set_dictionary(&self, dictionary: Dictionary) {
        tracing::info!("Dictionary ready with {} entries", dictionary.len());
        *self.dictionary.write().await = Some(Arc::new(dictionary));
    }

    pub async fn dictionary(&self) -> Option<Arc<Dictionary>> {
        self.dictionary.read().await.clone()
    }

    async fn options(&self) -> LookupOptions {
        LookupOptions::from(&self.config.read().await.lookup)
    }

    async fn loaded(&self) -> Result<Arc<Dictionary>, LookupError> {
        self.dictionary()
            .await
            .ok_or_else(|| LookupError::InvalidInput("no dictionary loaded".to_string()))
    }

    /// Look up `word` in the loaded dictionary with the configured options
    pub async fn lookup(&self, word: &str) -> Result<LookupResult, LookupError> {
        let dictionary = self.loaded().await?;
        let options = self.options().await;
        lookup_with(word, &dictionary, &options)
    }

    /// Ranked close matches as `(word, ratio)` pairs
    pub async fn suggestions(&self, word: &str) -> Result<Vec<(String, f64)>, LookupError> {
        let dictionary = self.loaded().await?;
        let options = self.options().await;
        let found = suggestions(word, &dictionary, &options)?;
        Ok(found
            .into_iter()
            .map(|m| (m.candidate.to_string(), m.ratio))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        [("cat", "feline"), ("cap", "a hat")].into_iter().collect()
    }

    #[tokio::test]
    async fn test_lookup_without_dictionary_is_invalid_input() {
        let state = AppState::new(Config::default());
        assert!(matches!(
            state.lookup("cat").await,
            Err(LookupError::InvalidInput(_))
        ));
        assert!(state.suggestions("cat").await.is_err());
    }

    #[tokio::test]
    async fn test_lookup_uses_loaded_dictionary() {
        let state = AppState::new(Config::default());
        state.set_dictionary(sample()).await;

        assert_eq!(
            state.lookup("CAT").await,
            Ok(LookupResult::Found {
                definition: "feline".to_string()
            })
        );
        assert_eq!(state.dictionary().await.map(|d| d.len()), Some(2));
    }

    #[tokio::test]
    async fn test_lookup_follows_config_changes() {
        let state = AppState::new(Config::default());
        state.set_dictionary(sample()).await;
        assert!(matches!(
            state.lookup("cot").await,
            Ok(LookupResult::Suggested { .. })
        ));

        state.config.write().await.lookup.cutoff = 0.95;
        assert_eq!(state.lookup("cot").await, Ok(LookupResult::NotFound));

        state.config.write().await.lookup.max_suggestions = 0;
        assert!(state.lookup("cot").await.is_err());
    }

    #[tokio::test]
    async fn test_suggestions_pairs() {
        let state = AppState::new(Config::default());
        state.set_dictionary(sample()).await;

        let found = state.suggestions("ca").await.unwrap();
        let words: Vec<&str> = found.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["cat", "cap"]);
        assert!(found.iter().all(|(_, r)| *r >= 0.6));
    }
}
