pub mod loader;
pub mod provider;
pub mod spell;

pub use loader::{parse_word_list, WordLoader};
pub use provider::{StartWords, WordListProvider};
pub use spell::{Dictionary, SpellChecker};
