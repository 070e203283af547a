//! Stopword sets.
//!
//! The built-in English list is NLTK's, bundled by the `stop-words` crate
//! (`nltk` feature). Custom lists can be loaded from a file with one word per
//! line.

use std::collections::HashSet;
use std::fs;
use std::panic;
use std::path::Path;

use stop_words::{LANGUAGE, get};

use crate::error::{ChatsumError, Result};

const DEPENDENCY: &str = "stopword list";

/// A set of lowercase words excluded from keyword ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Loads the built-in English stopword list (NLTK, 179 words).
    ///
    /// Fails with [`ChatsumError::DependencyInit`] if the bundled list cannot
    /// be loaded.
    pub fn english() -> Result<Self> {
        Self::builtin(&String::from(LANGUAGE::English))
    }

    /// Loads a bundled list by ISO code.
    ///
    /// `stop_words::get` panics on an unknown code or a corrupt list; the
    /// panic is caught and reported as `DependencyInit`.
    fn builtin(code: &str) -> Result<Self> {
        let words = panic::catch_unwind(|| get(code)).map_err(|_| {
            ChatsumError::dependency_init(
                DEPENDENCY,
                format!("the built-in '{}' list could not be loaded", code),
            )
        })?;
        let set = Self::from_words(words);
        tracing::debug!(language = %code, words = set.len(), "loaded built-in stopwords");
        Ok(set)
    }

    /// Creates an empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from any list of words. Words are lowercased and trimmed.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        set.extend(words);
        set
    }

    /// Loads a stopword file: one word per line, blank lines and `#` comments
    /// are ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChatsumError::dependency_init(
                DEPENDENCY,
                format!("cannot read {}: {}", path.display(), e),
            )
        })?;

        let set = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        tracing::debug!(path = %path.display(), words = set.len(), "loaded stopword file");
        Ok(set)
    }

    /// Adds words to the set.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// Checks whether a word is a stopword (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set filters nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_english_stopwords() {
        let set = StopwordSet::english().unwrap();
        assert!(!set.is_empty());
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.contains("is"));
        assert!(!set.contains("python"));
    }

    #[test]
    fn test_english_is_the_nltk_list() {
        let set = StopwordSet::english().unwrap();
        assert_eq!(set.len(), 179);
        assert!(set.contains("i"));
        assert!(set.contains("don't"));
        for word in ["web", "great", "good", "help", "need", "work", "new", "first", "small"] {
            assert!(!set.contains(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn test_unknown_builtin_list_is_dependency_error() {
        let err = StopwordSet::builtin("zz").unwrap_err();
        assert!(err.is_dependency_init());
        assert!(err.to_string().contains("'zz'"));
    }

    #[test]
    fn test_case_insensitive() {
        let set = StopwordSet::from_words(["The", "AND"]);
        assert!(set.contains("the"));
        assert!(set.contains("THE"));
        assert!(set.contains("and"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_extend_skips_blank() {
        let mut set = StopwordSet::empty();
        set.extend(["", "  ", "foo"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("foo"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "hello").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  World  ").unwrap();

        let set = StopwordSet::from_file(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("hello"));
        assert!(set.contains("world"));
        assert!(!set.contains("# custom list"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = StopwordSet::from_file(Path::new("no/such/stopwords.txt")).unwrap_err();
        assert!(err.is_dependency_init());
        assert!(err.to_string().contains("no/such/stopwords.txt"));
    }
}
