use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Source of root words for new rounds.
pub trait WordListProvider {
    /// Picks a word, or `None` when the provider has nothing to offer.
    fn random_word(&mut self) -> Option<String>;
}

/// Root words held in memory, picked with a seedable RNG.
#[derive(Debug, Clone)]
pub struct StartWords {
    words: Vec<String>,
    rng: StdRng,
}

impl StartWords {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed and list give the same sequence of root words.
    pub fn with_seed(words: Vec<String>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordListProvider for StartWords {
    fn random_word(&mut self) -> Option<String> {
        self.words.choose(&mut self.rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<String> {
        ["silkworm", "hardware", "keyboard", "notebook"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    #[test]
    fn test_empty_provider_yields_nothing() {
        let mut words = StartWords::empty();
        assert!(words.is_empty());
        assert_eq!(words.random_word(), None);
    }

    #[test]
    fn test_random_word_comes_from_list() {
        let mut words = StartWords::new(sample());
        for _ in 0..20 {
            let word = words.random_word().unwrap();
            assert!(sample().contains(&word));
        }
    }

    #[test]
    fn test_seeded_provider_is_deterministic() {
        let mut first = StartWords::with_seed(sample(), 7);
        let mut second = StartWords::with_seed(sample(), 7);

        let a: Vec<_> = (0..10).map(|_| first.random_word()).collect();
        let b: Vec<_> = (0..10).map(|_| second.random_word()).collect();
        assert_eq!(a, b);
    }
}
