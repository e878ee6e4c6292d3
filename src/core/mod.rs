pub mod engine;
pub mod events;
pub mod round_state;
pub mod rules;

pub use engine::{GameEngine, Submission};
pub use events::{EventLogger, GameEvent, GameEventHandler, GameEventType};
pub use round_state::{start_round, submit, RoundState, RoundStatistics};
pub use rules::{RejectionReason, Rules};
