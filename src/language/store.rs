use std::collections::HashSet;
use tracing::{debug, warn};

use super::core::{word_list_path, EmbeddedWordSource, WordSource};
use crate::error::{Error, Result};

/// Loads a language's word list and filters it down to the words a player
/// can currently practice.
#[derive(Debug, Clone, Default)]
pub struct WordStore<S> {
    source: S,
}

impl WordStore<EmbeddedWordSource> {
    /// Store backed by the word lists bundled with the crate
    pub fn embedded() -> Self {
        Self::new(EmbeddedWordSource)
    }
}

impl<S: WordSource> WordStore<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Words of `lang` that are at least `min_length` characters long and
    /// consist only of `allowed_chars` (case-insensitive).
    ///
    /// Entries are lower-cased and deduplicated. A language without a word
    /// list yields an empty pool rather than an error. The order of the
    /// returned words is unspecified.
    pub fn filtered_words<T: AsRef<str>>(
        &self,
        min_length: i32,
        lang: &str,
        allowed_chars: &[T],
    ) -> Result<Vec<String>> {
        validate_min_length(min_length)?;
        let allowed = allowed_char_set(allowed_chars)?;

        let path = word_list_path(lang);
        let words = match self.source.read_words(&path) {
            Ok(words) => words,
            Err(Error::ResourceUnavailable(missing)) => {
                warn!(lang, path = %missing, "word list not found, serving no words");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let total = words.len();
        let filtered = filter_words(words, min_length as usize, &allowed);
        debug!(lang, min_length, total, pool = filtered.len(), "filtered word pool");

        Ok(filtered)
    }
}

fn validate_min_length(min_length: i32) -> Result<()> {
    if min_length <= 0 {
        return Err(Error::InvalidArgument(format!(
            "minLength must be > 0 (was {min_length})"
        )));
    }
    Ok(())
}

/// Lower-cased set of the allowed characters. Every entry must be exactly
/// one code point.
fn allowed_char_set<T: AsRef<str>>(allowed_chars: &[T]) -> Result<HashSet<char>> {
    if allowed_chars.is_empty() {
        return Err(Error::InvalidArgument(
            "allowedChars must not be empty".to_string(),
        ));
    }

    let multi_char_tokens: Vec<&str> = allowed_chars
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| token.chars().count() != 1)
        .collect();
    if !multi_char_tokens.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "allowedChars contains multi-character entries: {multi_char_tokens:?}"
        )));
    }

    Ok(allowed_chars
        .iter()
        .flat_map(|token| token.as_ref().chars().flat_map(char::to_lowercase))
        .collect())
}

fn filter_words(words: Vec<String>, min_length: usize, allowed: &HashSet<char>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|word| word.to_lowercase())
        .filter(|word| word.chars().count() >= min_length)
        .filter(|word| word.chars().all(|ch| allowed.contains(&ch)))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
