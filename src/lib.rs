pub mod core;
pub mod words;
pub mod ui;
pub mod config;
pub mod utils;

pub use crate::core::{GameEngine, RejectionReason, RoundState, Rules, Submission};
pub use crate::words::{Dictionary, SpellChecker, StartWords, WordListProvider};
pub use crate::ui::GameInterface;
pub use crate::config::Config;

// Re-export commonly used types
pub type Result<T> = anyhow::Result<T>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
