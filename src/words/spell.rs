use std::collections::HashSet;

/// Answers whether a word is spelled correctly in a given language.
///
/// The engine only ever asks yes/no questions, so a bundled word list, a
/// system spell checker or a fake in tests all fit behind this trait.
pub trait SpellChecker {
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

/// A word list for a single language.
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: String,
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new<S: Into<String>>(language: S) -> Self {
        Self {
            language: language.into(),
            words: HashSet::new(),
        }
    }

    pub fn from_words<S, I, W>(language: S, words: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut dictionary = Self::new(language);
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for Dictionary {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let dictionary = Dictionary::new("en");
        assert!(dictionary.is_empty());
        assert!(!dictionary.is_known_word("silk", "en"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dictionary = Dictionary::from_words("en", ["Silk", "WORM", " milk "]);

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.is_known_word("silk", "en"));
        assert!(dictionary.is_known_word("Worm", "EN"));
        assert!(dictionary.is_known_word("milk", "en"));
    }

    #[test]
    fn test_other_language_is_unknown() {
        let dictionary = Dictionary::from_words("en", ["silk"]);
        assert!(!dictionary.is_known_word("silk", "fr"));
    }

    #[test]
    fn test_blank_words_are_skipped() {
        let mut dictionary = Dictionary::new("en");
        assert!(!dictionary.insert("   "));
        assert!(dictionary.insert("silk"));
        assert!(!dictionary.insert("SILK"));
        assert_eq!(dictionary.len(), 1);
    }
}
