use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::{
    error::Result,
    language::{difficulty, WordSource, WordStore},
};

/// Builds practice word lists whose difficulty follows the player's level.
///
/// The minimum word length grows with the level, faster the more characters
/// the player has unlocked, and the number of words grows toward a fixed cap.
/// Words are drawn from the [`WordStore`] without duplicates using the
/// generator's own random source.
pub struct TrainingWordGenerator<S, R = StdRng> {
    store: WordStore<S>,
    rng: R,
}

impl<S: WordSource> TrainingWordGenerator<S, StdRng> {
    pub fn with_entropy(store: WordStore<S>) -> Self {
        Self::new(store, StdRng::from_entropy())
    }

    pub fn with_seed(store: WordStore<S>, seed: u64) -> Self {
        Self::new(store, StdRng::seed_from_u64(seed))
    }
}

impl<S: WordSource, R: Rng> TrainingWordGenerator<S, R> {
    pub fn new(store: WordStore<S>, rng: R) -> Self {
        Self { store, rng }
    }

    pub fn store(&self) -> &WordStore<S> {
        &self.store
    }

    /// Words for `level` in `lang`, built only from `allowed_chars`.
    ///
    /// Fails with `InvalidArgument` for a non-positive level, 52 or more
    /// allowed characters, or malformed allowed characters. Returns an empty
    /// list when no word matches or the language has no word list.
    pub fn generate<T: AsRef<str>>(
        &mut self,
        level: i32,
        lang: &str,
        allowed_chars: &[T],
    ) -> Result<Vec<String>> {
        difficulty::validate_level(level)?;

        let min_length = difficulty::min_word_length(level, allowed_chars.len())?;
        let pool = self.store.filtered_words(min_length, lang, allowed_chars)?;
        if pool.is_empty() {
            debug!(level, lang, min_length, "no words match, nothing to practice");
            return Ok(Vec::new());
        }

        let amount = difficulty::word_count(level)?;
        debug!(level, lang, min_length, amount, pool = pool.len(), "sampling training words");

        Ok(self.pick_random(pool, amount))
    }

    /// [`generate`](Self::generate) joined into a single space separated
    /// practice sentence.
    pub fn generate_sentence<T: AsRef<str>>(
        &mut self,
        level: i32,
        lang: &str,
        allowed_chars: &[T],
    ) -> Result<String> {
        Ok(self.generate(level, lang, allowed_chars)?.join(" "))
    }

    /// Shuffled pool truncated to `count`; the whole pool when it has no
    /// more than `count` words.
    fn pick_random(&mut self, mut pool: Vec<String>, count: usize) -> Vec<String> {
        pool.shuffle(&mut self.rng);
        pool.truncate(count);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::language::MemoryWordSource;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    const SEED: u64 = 0x5EED;

    fn create_test_generator(words: &[&str]) -> TrainingWordGenerator<MemoryWordSource> {
        let source = MemoryWordSource::new().with_language("en", words.iter().copied());
        TrainingWordGenerator::with_seed(WordStore::new(source), SEED)
    }

    /// 40 six-character words over the letters w, o, r, d and the digits.
    fn numbered_words() -> Vec<String> {
        (0..40).map(|i| format!("word{i:02}")).collect()
    }

    fn numbered_allowed() -> Vec<String> {
        "word0123456789".chars().map(String::from).collect()
    }

    #[test]
    fn test_invalid_level() {
        let mut generator = create_test_generator(&["cat"]);

        for level in [0, -5] {
            assert_matches!(
                generator.generate(level, "en", &["c", "a", "t"]),
                Err(Error::InvalidArgument(msg)) if msg.contains("level")
            );
        }
    }

    #[test]
    fn test_allowed_chars_safety_bound() {
        let mut generator = create_test_generator(&["cat"]);
        let alphabet: Vec<String> = ('a'..='z')
            .chain('A'..='Z')
            .map(String::from)
            .collect();

        assert_eq!(alphabet.len(), 52);
        assert_matches!(
            generator.generate(1, "en", &alphabet),
            Err(Error::InvalidArgument(_))
        );
        assert!(generator.generate(1, "en", &alphabet[..51]).is_ok());
    }

    #[test]
    fn test_character_filter() {
        let mut generator = create_test_generator(&["cat", "dog", "ab"]);
        let words = generator.generate(1, "en", &["a", "b", "c", "t"]).unwrap();

        let got: HashSet<_> = words.iter().map(String::as_str).collect();
        assert_eq!(got, HashSet::from(["cat", "ab"]));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_pool_exhaustion_returns_every_word_once() {
        let pool = ["tea", "ten", "net", "ant"];
        let mut generator = create_test_generator(&pool);

        // level 5 asks for exactly 4 words and still allows 3-letter words
        let words = generator.generate(5, "en", &["t", "e", "a", "n"]).unwrap();

        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["ant", "net", "tea", "ten"]);
    }

    #[test]
    fn test_sample_is_distinct_and_sized() {
        let words = numbered_words();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut generator = create_test_generator(&refs);

        let picked = generator.generate(200, "en", &numbered_allowed()).unwrap();

        assert_eq!(picked.len(), 19);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), picked.len());
        assert!(picked.iter().all(|w| words.contains(w)));
    }

    #[test]
    fn test_same_seed_same_words() {
        let words = numbered_words();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();

        let mut first = create_test_generator(&refs);
        let mut second = create_test_generator(&refs);

        assert_eq!(
            first.generate(50, "en", &numbered_allowed()).unwrap(),
            second.generate(50, "en", &numbered_allowed()).unwrap()
        );
    }

    #[test]
    fn test_empty_pool() {
        let mut generator = create_test_generator(&["dog"]);
        let words = generator.generate(1, "en", &["c", "a", "t"]).unwrap();

        assert!(words.is_empty());
    }

    #[test]
    fn test_missing_language() {
        let mut generator = create_test_generator(&["cat"]);
        let words = generator.generate(1, "xx", &["c", "a", "t"]).unwrap();

        assert!(words.is_empty());
    }

    #[test]
    fn test_empty_allowed_chars() {
        let mut generator = create_test_generator(&["cat"]);
        let allowed: Vec<String> = Vec::new();

        assert_matches!(
            generator.generate(1, "en", &allowed),
            Err(Error::InvalidArgument(_))
        );
    }

    #[test]
    fn test_generate_sentence() {
        let mut generator = create_test_generator(&["tea", "ten", "net"]);
        let sentence = generator
            .generate_sentence(1, "en", &["t", "e", "a", "n"])
            .unwrap();

        let mut words: Vec<&str> = sentence.split(' ').collect();
        words.sort();
        assert_eq!(words, vec!["net", "tea", "ten"]);
    }

    #[test]
    fn test_generate_sentence_empty() {
        let mut generator = create_test_generator(&["dog"]);
        let sentence = generator.generate_sentence(1, "en", &["c"]).unwrap();

        assert_eq!(sentence, "");
    }

    #[test]
    fn test_custom_rng() {
        let source = MemoryWordSource::new().with_language("en", ["tea", "ten"]);
        let mut generator =
            TrainingWordGenerator::new(WordStore::new(source), rand::rngs::mock::StepRng::new(0, 1));

        let words = generator.generate(1, "en", &["t", "e", "a", "n"]).unwrap();
        assert_eq!(words.len(), 2);
    }
}
