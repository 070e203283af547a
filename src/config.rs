//! Configuration types for keyword extraction and batch runs.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`KeywordConfig`] - keyword limit and stopword sources
//! - [`BatchConfig`] - directory scanning settings
//!
//! # Example
//!
//! ```rust
//! use chatsum::config::{BatchConfig, KeywordConfig};
//!
//! let keywords = KeywordConfig::new()
//!     .with_top_n(10)
//!     .with_extra_stopwords(["hello", "thanks"]);
//!
//! let config = BatchConfig::new()
//!     .with_keywords(keywords)
//!     .with_per_speaker(true);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::keywords::DEFAULT_TOP_N;
use crate::core::stopwords::StopwordSet;
use crate::error::Result;

/// Configuration for keyword extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Number of keywords per ranking (default: 5)
    pub top_n: usize,

    /// Stopword file replacing the built-in English list (default: none)
    #[serde(default)]
    pub stopwords_file: Option<PathBuf>,

    /// Words added on top of the stopword list (default: empty)
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            stopwords_file: None,
            extra_stopwords: Vec::new(),
        }
    }
}

impl KeywordConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of keywords per ranking.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Replaces the built-in stopword list with a file.
    #[must_use]
    pub fn with_stopwords_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords_file = Some(path.into());
        self
    }

    /// Adds words to the stopword list.
    #[must_use]
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builds the stopword set this configuration describes.
    ///
    /// Fails with `DependencyInit` when the list cannot be prepared.
    pub fn build_stopwords(&self) -> Result<StopwordSet> {
        let mut set = match &self.stopwords_file {
            Some(path) => StopwordSet::from_file(path)?,
            None => StopwordSet::english()?,
        };
        set.extend(&self.extra_stopwords);
        Ok(set)
    }
}

/// Configuration for directory batch runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Transcript file extension, without the dot (default: "txt")
    pub extension: String,

    /// Keyword settings applied to every file
    pub keywords: KeywordConfig,

    /// Also rank keywords per speaker (default: false)
    pub per_speaker: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            keywords: KeywordConfig::default(),
            per_speaker: false,
        }
    }
}

impl BatchConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transcript extension. A leading dot is ignored.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Sets the keyword configuration.
    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordConfig) -> Self {
        self.keywords = keywords;
        self
    }

    /// Enables or disables per-speaker rankings.
    #[must_use]
    pub fn with_per_speaker(mut self, enabled: bool) -> Self {
        self.per_speaker = enabled;
        self
    }

    /// Returns `true` if a file name ends with `.<extension>`.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    }
}
