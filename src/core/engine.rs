use crate::core::round_state::{self, RoundState};
use crate::core::{GameEvent, GameEventHandler, EventLogger, RejectionReason, Rules};
use crate::words::{SpellChecker, WordListProvider};
use crate::utils::GameResult;
use tracing::{info, debug};

/// What happened to a submission that was not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted { word: String, points: u32 },
    /// Blank input: nothing to check, nothing changed.
    Ignored,
}

/// Owns the live round and the collaborators needed to play it.
pub struct GameEngine {
    words: Box<dyn WordListProvider>,
    checker: Box<dyn SpellChecker>,
    rules: Rules,
    state: RoundState,
    event_logger: EventLogger,
}

impl GameEngine {
    /// Builds the engine and starts its first round.
    pub fn new(
        mut words: Box<dyn WordListProvider>,
        checker: Box<dyn SpellChecker>,
        rules: Rules,
    ) -> Self {
        let state = round_state::start_round(words.as_mut(), &rules);
        let mut engine = Self {
            words,
            checker,
            rules,
            state,
            event_logger: EventLogger::default(),
        };
        engine.record_round_start();
        engine
    }

    pub fn new_round(&mut self) -> &RoundState {
        self.state = round_state::start_round(self.words.as_mut(), &self.rules);
        self.record_round_start();
        &self.state
    }

    pub fn submit(&mut self, candidate: &str) -> Result<Submission, RejectionReason> {
        let word = crate::core::rules::normalize(candidate);
        if word.is_empty() {
            debug!("Ignoring blank submission");
            return Ok(Submission::Ignored);
        }

        match round_state::submit(&word, &self.state, self.checker.as_ref(), &self.rules) {
            Ok(next) => {
                self.state = next;
                let points = word.chars().count() as u32;
                info!("Accepted '{}' for {} points (score {})", word, points, self.state.score);
                self.event_logger
                    .handle_event(&GameEvent::word_accepted(&word, points, self.state.score));
                Ok(Submission::Accepted { word, points })
            }
            Err(reason) => {
                debug!("Rejected '{}': {}", word, reason.kind());
                self.event_logger.handle_event(&GameEvent::word_rejected(&word, &reason));
                Err(reason)
            }
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn event_history(&self) -> &[GameEvent] {
        self.event_logger.get_events()
    }

    pub fn recent_events(&self, count: usize) -> Vec<GameEvent> {
        self.event_logger
            .get_recent_events(count)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn export_history(&self) -> GameResult<String> {
        Ok(self.event_logger.export_events()?)
    }

    fn record_round_start(&mut self) {
        info!("Starting round with root word '{}'", self.state.root_word);
        self.event_logger.handle_event(&GameEvent::round_started(&self.state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameEventType;
    use crate::words::{Dictionary, StartWords};

    fn engine_with_root(root_word: &str) -> GameEngine {
        let words = StartWords::with_seed(vec![root_word.to_string()], 1);
        let dictionary = Dictionary::from_words("en", ["silk", "worm", "milk", "silkworm", "or"]);
        GameEngine::new(Box::new(words), Box::new(dictionary), Rules::default())
    }

    #[test]
    fn test_engine_starts_a_round() {
        let engine = engine_with_root("silkworm");
        assert_eq!(engine.state().root_word, "silkworm");
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.event_history().len(), 1);
    }

    #[test]
    fn test_submit_accepts_word() {
        let mut engine = engine_with_root("silkworm");

        let outcome = engine.submit("  Silk ").unwrap();
        assert_eq!(outcome, Submission::Accepted { word: "silk".to_string(), points: 4 });
        assert_eq!(engine.state().used_words, vec!["silk"]);
        assert_eq!(engine.state().score, 4);
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut engine = engine_with_root("silkworm");

        assert_eq!(engine.submit("   "), Ok(Submission::Ignored));
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.event_history().len(), 1);
    }

    #[test]
    fn test_rejections_are_recorded() {
        let mut engine = engine_with_root("silkworm");

        assert_eq!(engine.submit("silkworm"), Err(RejectionReason::IsStartWord));
        assert_eq!(engine.submit("or"), Err(RejectionReason::TooShort { min_length: 3 }));

        let recent = engine.recent_events(2);
        assert!(recent.iter().all(|e| matches!(e.event_type, GameEventType::WordRejected)));
        assert_eq!(recent[0].data["reason"], "too_short");

        let exported = engine.export_history().unwrap();
        assert!(exported.contains("is_start_word"));
    }

    #[test]
    fn test_new_round_resets_state() {
        let mut engine = engine_with_root("silkworm");
        engine.submit("silk").unwrap();
        engine.submit("worm").unwrap();
        assert_eq!(engine.state().score, 8);

        let state = engine.new_round();
        assert_eq!(state.score, 0);
        assert!(state.used_words.is_empty());
        assert_eq!(state.root_word, "silkworm");

        // The same word is fine again in a new round
        assert!(engine.submit("silk").is_ok());
    }
}
