use std::path::{Path, PathBuf};
use tokio::fs;
use crate::words::{Dictionary, StartWords};
use crate::utils::{GameError, GameResult};
use tracing::{info, warn};

/// Reads the word list files: one word per line, blank lines and `#` comments skipped.
pub struct WordLoader {
    start_words_path: PathBuf,
    dictionary_path: PathBuf,
}

impl WordLoader {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(start_words_path: P, dictionary_path: Q) -> Self {
        Self {
            start_words_path: start_words_path.as_ref().to_path_buf(),
            dictionary_path: dictionary_path.as_ref().to_path_buf(),
        }
    }

    /// Loads the root word list. A missing or unreadable file leaves the list
    /// empty so rounds fall back to the default root word.
    pub async fn load_start_words(&self, seed: Option<u64>) -> StartWords {
        let words = match self.read_words(&self.start_words_path).await {
            Ok(words) => {
                info!("Loaded {} start words from {:?}", words.len(), self.start_words_path);
                words
            }
            Err(e) => {
                warn!("Could not load start words from {:?}: {}", self.start_words_path, e);
                Vec::new()
            }
        };

        match seed {
            Some(seed) => StartWords::with_seed(words, seed),
            None => StartWords::new(words),
        }
    }

    pub async fn load_dictionary(&self, language: &str) -> GameResult<Dictionary> {
        let words = self.read_words(&self.dictionary_path).await.map_err(|e| {
            GameError::dictionary(format!("Failed to load {:?}: {}", self.dictionary_path, e))
        })?;

        let dictionary = Dictionary::from_words(language, words);
        if dictionary.is_empty() {
            return Err(GameError::dictionary(format!(
                "Dictionary {:?} contains no words",
                self.dictionary_path
            )));
        }

        info!("Loaded {} '{}' words into dictionary", dictionary.len(), language);
        Ok(dictionary)
    }

    async fn read_words(&self, path: &Path) -> GameResult<Vec<String>> {
        if !path.exists() {
            return Err(GameError::word_list(format!("File not found: {:?}", path)));
        }

        let content = fs::read_to_string(path).await?;
        Ok(parse_word_list(&content))
    }
}

pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_lowercase())
        .collect()
}
