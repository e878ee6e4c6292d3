use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use crate::core::rules::{self, RejectionReason, Rules};
use crate::words::{SpellChecker, WordListProvider};

/// One round of play: the root word plus everything accepted so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub id: Uuid,
    pub root_word: String,
    /// Most recent first.
    pub used_words: Vec<String>,
    pub score: u32,
    pub started_at: DateTime<Utc>,
}

impl RoundState {
    pub fn new<S: AsRef<str>>(root_word: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            root_word: rules::normalize(root_word.as_ref()),
            used_words: Vec::new(),
            score: 0,
            started_at: Utc::now(),
        }
    }

    pub fn has_used(&self, word: &str) -> bool {
        !rules::is_original(word, &self.used_words)
    }

    pub fn word_count(&self) -> usize {
        self.used_words.len()
    }

    /// Records a validated word and returns the points it earned.
    pub(crate) fn accept(&mut self, word: String) -> u32 {
        let points = word.chars().count() as u32;
        self.used_words.insert(0, word);
        self.score += points;
        points
    }

    pub fn get_statistics(&self) -> RoundStatistics {
        let longest_word = self
            .used_words
            .iter()
            .max_by_key(|word| word.chars().count())
            .cloned();

        RoundStatistics {
            root_word: self.root_word.clone(),
            words_found: self.used_words.len(),
            score: self.score,
            longest_word,
            elapsed_seconds: Utc::now().signed_duration_since(self.started_at).num_seconds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundStatistics {
    pub root_word: String,
    pub words_found: usize,
    pub score: u32,
    pub longest_word: Option<String>,
    pub elapsed_seconds: i64,
}

impl RoundStatistics {
    pub fn get_elapsed_formatted(&self) -> String {
        let minutes = self.elapsed_seconds / 60;
        let seconds = self.elapsed_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

/// Begins a fresh round with a root word from `words`, or the fallback word
/// when the provider is empty or hands back a blank entry.
pub fn start_round(words: &mut dyn WordListProvider, rules: &Rules) -> RoundState {
    let root_word = words
        .random_word()
        .map(|word| rules::normalize(&word))
        .filter(|word| !word.is_empty())
        .unwrap_or_else(|| rules::normalize(&rules.fallback_root_word));

    RoundState::new(root_word)
}

/// Validates `candidate` against `state` and returns the state that results.
///
/// A candidate that is empty after normalization is ignored and the state
/// comes back unchanged.
pub fn submit(
    candidate: &str,
    state: &RoundState,
    checker: &dyn SpellChecker,
    rules: &Rules,
) -> Result<RoundState, RejectionReason> {
    let word = rules::normalize(candidate);
    if word.is_empty() {
        return Ok(state.clone());
    }

    rules::validate(&word, state, checker, rules)?;

    let mut next = state.clone();
    next.accept(word);
    Ok(next)
}
