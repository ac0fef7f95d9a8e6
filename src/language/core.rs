use include_dir::{include_dir, Dir};
use serde_json::from_str;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};

static LANG_DIR: Dir = include_dir!("src/lang");

/// Key of the word list for a language code, e.g. `words-en.json`.
pub fn word_list_path(lang: &str) -> String {
    format!("words-{lang}.json")
}

/// Read-only provider of raw word lists.
///
/// A source returns [`Error::ResourceUnavailable`] when it has no list under
/// the requested key; any other error means the list exists but is broken.
pub trait WordSource {
    fn read_words(&self, path: &str) -> Result<Vec<String>>;
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn read_words(&self, path: &str) -> Result<Vec<String>> {
        (**self).read_words(path)
    }
}

impl<T: WordSource + ?Sized> WordSource for Arc<T> {
    fn read_words(&self, path: &str) -> Result<Vec<String>> {
        (**self).read_words(path)
    }
}

/// Word lists bundled into the binary from `src/lang`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn read_words(&self, path: &str) -> Result<Vec<String>> {
        let file = LANG_DIR
            .get_file(path)
            .ok_or_else(|| Error::ResourceUnavailable(path.to_string()))?;

        let file_as_str = file.contents_utf8().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{path} is not valid UTF-8"),
            )
        })?;

        Ok(from_str(file_as_str)?)
    }
}

/// Word lists read from `<root>/words-<lang>.json` on disk.
#[derive(Debug, Clone)]
pub struct DirWordSource {
    root: PathBuf,
}

impl DirWordSource {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            root: p.as_ref().to_path_buf(),
        }
    }
}

impl WordSource for DirWordSource {
    fn read_words(&self, path: &str) -> Result<Vec<String>> {
        let full_path = self.root.join(path);
        let file = match File::open(&full_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ResourceUnavailable(full_path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// In-memory word lists keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct MemoryWordSource {
    lists: HashMap<String, Vec<String>>,
}

impl MemoryWordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language<I, W>(mut self, lang: &str, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.lists
            .insert(word_list_path(lang), words.into_iter().map(Into::into).collect());
        self
    }
}

impl WordSource for MemoryWordSource {
    fn read_words(&self, path: &str) -> Result<Vec<String>> {
        self.lists
            .get(path)
            .cloned()
            .ok_or_else(|| Error::ResourceUnavailable(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_word_list_path() {
        assert_eq!(word_list_path("en"), "words-en.json");
        assert_eq!(word_list_path("de"), "words-de.json");
    }

    #[test]
    fn test_embedded_english() {
        let words = EmbeddedWordSource.read_words("words-en.json").unwrap();
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_embedded_german() {
        let words = EmbeddedWordSource.read_words("words-de.json").unwrap();
        assert!(!words.is_empty());
    }

    #[test]
    fn test_embedded_missing_language() {
        let result = EmbeddedWordSource.read_words("words-xx.json");
        assert_matches!(result, Err(Error::ResourceUnavailable(path)) if path == "words-xx.json");
    }

    #[test]
    fn test_dir_source_reads_json_array() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("words-fr.json"), r#"["chat", "Chien", "eau"]"#).unwrap();

        let source = DirWordSource::with_path(dir.path());
        let words = source.read_words("words-fr.json").unwrap();

        assert_eq!(words, vec!["chat", "Chien", "eau"]);
    }

    #[test]
    fn test_dir_source_missing_file() {
        let dir = tempdir().unwrap();
        let source = DirWordSource::with_path(dir.path());

        assert_matches!(
            source.read_words("words-fr.json"),
            Err(Error::ResourceUnavailable(_))
        );
    }

    #[test]
    fn test_dir_source_malformed_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("words-fr.json"), r#"{"words": 3}"#).unwrap();

        let source = DirWordSource::with_path(dir.path());
        assert_matches!(source.read_words("words-fr.json"), Err(Error::Json(_)));
    }

    #[test]
    fn test_memory_source() {
        let source = MemoryWordSource::new().with_language("en", ["cat", "dog"]);

        assert_eq!(source.read_words("words-en.json").unwrap(), vec!["cat", "dog"]);
        assert_matches!(
            source.read_words("words-de.json"),
            Err(Error::ResourceUnavailable(_))
        );
    }

    #[test]
    fn test_source_through_arc() {
        let source = Arc::new(MemoryWordSource::new().with_language("en", ["cat"]));
        assert_eq!(source.read_words("words-en.json").unwrap(), vec!["cat"]);
    }
}
