//! Validation rules for candidate words.
//!
//! Each rule is a small predicate over the normalized candidate and the
//! current round. [`validate`] runs them in a fixed order and stops at the
//! first failure; that order is part of the game's observable behavior (a
//! two-letter nonsense word is reported as unrecognized, not as too short).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::RoundState;
use crate::words::SpellChecker;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Why a candidate word was turned down. Every variant is recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionReason {
    #[error("Be more original")]
    DuplicateWord,

    #[error("You can't spell that word from '{root_word}'!")]
    NotComposable { root_word: String },

    #[error("You can't just make them up, you know!")]
    NotARealWord,

    #[error("Your word needs to contain at least {min_length} characters")]
    TooShort { min_length: usize },

    #[error("Come up with your own word")]
    IsStartWord,
}

impl RejectionReason {
    pub fn title(&self) -> &'static str {
        match self {
            Self::DuplicateWord => "Word used already",
            Self::NotComposable { .. } => "Word not possible",
            Self::NotARealWord => "Word not recognized",
            Self::TooShort { .. } => "Word is too short",
            Self::IsStartWord => "Word is start word",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Stable identifier used in logs and the event history.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateWord => "duplicate_word",
            Self::NotComposable { .. } => "not_composable",
            Self::NotARealWord => "not_a_real_word",
            Self::TooShort { .. } => "too_short",
            Self::IsStartWord => "is_start_word",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub language: String,
    pub min_word_length: usize,
    pub fallback_root_word: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            fallback_root_word: DEFAULT_ROOT_WORD.to_string(),
        }
    }
}

pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used.to_lowercase() == word.to_lowercase())
}

/// True when every letter of `word` can be matched to a distinct letter of `root_word`.
pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut available: Vec<char> = root_word.chars().collect();

    for letter in word.chars() {
        match available.iter().position(|&c| c == letter) {
            Some(pos) => {
                available.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}

pub fn is_real(word: &str, checker: &dyn SpellChecker, language: &str) -> bool {
    checker.is_known_word(word, language)
}

pub fn is_long_enough(word: &str, min_length: usize) -> bool {
    word.chars().count() >= min_length
}

pub fn is_not_start_word(word: &str, root_word: &str) -> bool {
    word != root_word
}

/// Runs every rule against an already-normalized, non-empty word.
pub fn validate(
    word: &str,
    state: &RoundState,
    checker: &dyn SpellChecker,
    rules: &Rules,
) -> Result<(), RejectionReason> {
    if !is_original(word, &state.used_words) {
        return Err(RejectionReason::DuplicateWord);
    }

    if !is_possible(word, &state.root_word) {
        return Err(RejectionReason::NotComposable {
            root_word: state.root_word.clone(),
        });
    }

    if !is_real(word, checker, &rules.language) {
        return Err(RejectionReason::NotARealWord);
    }

    if !is_long_enough(word, rules.min_word_length) {
        return Err(RejectionReason::TooShort {
            min_length: rules.min_word_length,
        });
    }

    if !is_not_start_word(word, &state.root_word) {
        return Err(RejectionReason::IsStartWord);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Dictionary;

    fn dictionary() -> Dictionary {
        Dictionary::from_words("en", ["silk", "worm", "milk", "silkworm", "ok", "or"])
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Silk  "), "silk");
        assert_eq!(normalize("\tWORM\n"), "worm");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_is_possible() {
        assert!(is_possible("silk", "silkworm"));
        assert!(is_possible("worm", "silkworm"));
        assert!(is_possible("silkworm", "silkworm"));
        assert!(!is_possible("silks", "silkworm"));
        assert!(!is_possible("milky", "silkworm"));
    }

    #[test]
    fn test_is_possible_consumes_letters() {
        assert!(is_possible("ball", "ballpark"));
        assert!(!is_possible("balll", "ballpark"));
        assert!(is_possible("", "ballpark"));
    }

    #[test]
    fn test_is_original_ignores_case() {
        let used = vec!["silk".to_string()];
        assert!(!is_original("silk", &used));
        assert!(!is_original("SILK", &used));
        assert!(is_original("worm", &used));
    }

    #[test]
    fn test_is_long_enough_counts_characters() {
        assert!(is_long_enough("ink", 3));
        assert!(!is_long_enough("ok", 3));
        assert!(is_long_enough("née", 3));
    }

    #[test]
    fn test_rule_order() {
        let state = RoundState::new("silkworm");
        let rules = Rules::default();
        let dictionary = dictionary();

        // Not composable wins over unknown
        assert_eq!(
            validate("xyz", &state, &dictionary, &rules),
            Err(RejectionReason::NotComposable { root_word: "silkworm".to_string() })
        );
        // Recognition runs before length
        assert_eq!(
            validate("sk", &state, &dictionary, &rules),
            Err(RejectionReason::NotARealWord)
        );
        assert_eq!(
            validate("or", &state, &dictionary, &rules),
            Err(RejectionReason::TooShort { min_length: 3 })
        );
        assert_eq!(
            validate("silkworm", &state, &dictionary, &rules),
            Err(RejectionReason::IsStartWord)
        );
        assert_eq!(validate("silk", &state, &dictionary, &rules), Ok(()));
    }

    #[test]
    fn test_rejection_text() {
        let reason = RejectionReason::NotComposable { root_word: "silkworm".to_string() };
        assert_eq!(reason.title(), "Word not possible");
        assert_eq!(reason.message(), "You can't spell that word from 'silkworm'!");
        assert_eq!(reason.kind(), "not_composable");

        let reason = RejectionReason::TooShort { min_length: 3 };
        assert_eq!(reason.message(), "Your word needs to contain at least 3 characters");
        assert_eq!(RejectionReason::DuplicateWord.title(), "Word used already");
        assert_eq!(RejectionReason::IsStartWord.message(), "Come up with your own word");
    }
}
