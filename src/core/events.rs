use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use crate::core::{RejectionReason, RoundState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: Uuid,
    pub event_type: GameEventType,
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEventType {
    RoundStarted,
    WordAccepted,
    WordRejected,
}

impl GameEvent {
    pub fn new(event_type: GameEventType, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            data,
        }
    }

    pub fn round_started(state: &RoundState) -> Self {
        let data = serde_json::json!({
            "round_id": state.id,
            "root_word": state.root_word
        });
        Self::new(GameEventType::RoundStarted, data)
    }

    pub fn word_accepted(word: &str, points: u32, score: u32) -> Self {
        let data = serde_json::json!({
            "word": word,
            "points": points,
            "score": score
        });
        Self::new(GameEventType::WordAccepted, data)
    }

    pub fn word_rejected(candidate: &str, reason: &RejectionReason) -> Self {
        let data = serde_json::json!({
            "word": candidate,
            "reason": reason.kind(),
            "title": reason.title(),
            "message": reason.message()
        });
        Self::new(GameEventType::WordRejected, data)
    }

    /// One-line summary for the attempt history screen.
    pub fn describe(&self) -> String {
        let word = self.data["word"].as_str().unwrap_or_default();
        match &self.event_type {
            GameEventType::RoundStarted => format!(
                "New round: {}",
                self.data["root_word"].as_str().unwrap_or_default()
            ),
            GameEventType::WordAccepted => format!(
                "{} (+{})",
                word,
                self.data["points"].as_u64().unwrap_or(0)
            ),
            GameEventType::WordRejected => format!(
                "{} ({})",
                word,
                self.data["title"].as_str().unwrap_or_default()
            ),
        }
    }
}

pub trait GameEventHandler {
    fn handle_event(&mut self, event: &GameEvent);
}

pub struct EventLogger {
    events: Vec<GameEvent>,
    max_events: usize,
}

impl EventLogger {
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    pub fn get_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn get_events_by_type(&self, event_type: &GameEventType) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|event| std::mem::discriminant(&event.event_type) == std::mem::discriminant(event_type))
            .collect()
    }

    pub fn get_recent_events(&self, count: usize) -> Vec<&GameEvent> {
        self.events
            .iter()
            .rev()
            .take(count)
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn export_events(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.events)
    }

    pub fn get_event_count(&self) -> usize {
        self.events.len()
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(500)
    }
}

impl GameEventHandler for EventLogger {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());

        if self.events.len() > self.max_events {
            self.events.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_started_event() {
        let state = RoundState::new("silkworm");
        let event = GameEvent::round_started(&state);

        assert!(matches!(event.event_type, GameEventType::RoundStarted));
        assert_eq!(event.data["root_word"], "silkworm");
        assert_eq!(event.describe(), "New round: silkworm");
    }

    #[test]
    fn test_word_rejected_event() {
        let reason = RejectionReason::NotComposable { root_word: "silkworm".to_string() };
        let event = GameEvent::word_rejected("silks", &reason);

        assert!(matches!(event.event_type, GameEventType::WordRejected));
        assert_eq!(event.data["reason"], "not_composable");
        assert_eq!(event.describe(), "silks (Word not possible)");
    }

    #[test]
    fn test_word_accepted_event() {
        let event = GameEvent::word_accepted("silk", 4, 12);
        assert_eq!(event.data["score"], 12);
        assert_eq!(event.describe(), "silk (+4)");
    }

    #[test]
    fn test_event_logger_capacity() {
        let mut logger = EventLogger::new(2);

        logger.handle_event(&GameEvent::word_accepted("silk", 4, 4));
        logger.handle_event(&GameEvent::word_accepted("worm", 4, 8));
        logger.handle_event(&GameEvent::word_accepted("milk", 4, 12));

        assert_eq!(logger.get_event_count(), 2);
        assert_eq!(logger.get_events()[0].data["word"], "worm");
        assert_eq!(logger.get_recent_events(1)[0].data["word"], "milk");
    }

    #[test]
    fn test_event_filtering() {
        let mut logger = EventLogger::default();

        logger.handle_event(&GameEvent::round_started(&RoundState::new("silkworm")));
        logger.handle_event(&GameEvent::word_rejected("silks", &RejectionReason::DuplicateWord));
        logger.handle_event(&GameEvent::word_rejected("sk", &RejectionReason::NotARealWord));

        assert_eq!(logger.get_events_by_type(&GameEventType::WordRejected).len(), 2);
        assert_eq!(logger.get_events_by_type(&GameEventType::RoundStarted).len(), 1);

        let exported = logger.export_events().unwrap();
        assert!(exported.contains("not_a_real_word"));

        logger.clear();
        assert_eq!(logger.get_event_count(), 0);
    }
}
