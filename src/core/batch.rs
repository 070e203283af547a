//! Directory batch processing.
//!
//! [`BatchRunner`] runs the transcript parser and the keyword extractor over
//! every matching file in a directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatsum::config::BatchConfig;
//! use chatsum::core::batch::BatchRunner;
//!
//! let runner = BatchRunner::from_config(BatchConfig::new())?;
//! let result = runner.process_directory("data".as_ref());
//!
//! for summary in &result {
//!     println!("{}: {} messages", summary.file_name, summary.stats.total_messages);
//! }
//! # Ok::<(), chatsum::ChatsumError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::keywords::KeywordExtractor;
use super::models::{FileSummary, SpeakerKeywords};
use super::stats::MessageStats;
use crate::config::BatchConfig;
use crate::error::{ChatsumError, Result};
use crate::parser::TranscriptParser;
use crate::Speaker;

/// Per-file summaries of a directory, in directory listing order.
///
/// Listing order is whatever the platform returns; it is not sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchResult {
    entries: Vec<FileSummary>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a summary, replacing an earlier one with the same file name.
    pub fn push(&mut self, summary: FileSummary) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.file_name == summary.file_name)
        {
            Some(existing) => *existing = summary,
            None => self.entries.push(summary),
        }
    }

    /// Looks up a summary by file name.
    pub fn get(&self, file_name: &str) -> Option<&FileSummary> {
        self.entries.iter().find(|entry| entry.file_name == file_name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileSummary> {
        self.entries.iter()
    }

    /// File names in insertion order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.file_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a FileSummary;
    type IntoIter = std::slice::Iter<'a, FileSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for BatchResult {
    type Item = FileSummary;
    type IntoIter = std::vec::IntoIter<FileSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Composes parsing, keyword extraction and statistics over files.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    parser: TranscriptParser,
    extractor: KeywordExtractor,
    config: BatchConfig,
}

impl BatchRunner {
    /// Creates a runner with an existing extractor and default batch settings.
    pub fn new(extractor: KeywordExtractor) -> Self {
        Self {
            parser: TranscriptParser::new(),
            extractor,
            config: BatchConfig::default(),
        }
    }

    /// Creates a runner from a configuration, loading its stopwords.
    ///
    /// Fails with `DependencyInit` if the stopword list cannot be prepared.
    pub fn from_config(config: BatchConfig) -> Result<Self> {
        let extractor = KeywordExtractor::from_config(&config.keywords)?;
        Ok(Self {
            parser: TranscriptParser::new(),
            extractor,
            config,
        })
    }

    /// Replaces the batch settings, keeping the current extractor.
    #[must_use]
    pub fn with_config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    /// Summarizes one transcript.
    ///
    /// An unreadable file is reported and summarized as empty.
    pub fn summarize_file(&self, path: &Path) -> FileSummary {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let parsed = self.parser.parse(path);
        let summary = FileSummary::new(
            file_name,
            MessageStats::from_parse(&parsed),
            self.extractor.extract_all(&parsed),
        );

        if self.config.per_speaker {
            summary.with_speaker_keywords(SpeakerKeywords {
                user: self.extractor.extract_for(&parsed, Speaker::User),
                ai: self.extractor.extract_for(&parsed, Speaker::Ai),
            })
        } else {
            summary
        }
    }

    /// Summarizes every matching file in `dir`, failing if the directory
    /// cannot be listed.
    pub fn try_process_directory(&self, dir: &Path) -> Result<BatchResult> {
        let entries =
            fs::read_dir(dir).map_err(|e| ChatsumError::directory_unavailable(dir, e))?;

        let mut result = BatchResult::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), "skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::warn!(dir = %dir.display(), "skipping non UTF-8 file name {:?}", file_name);
                continue;
            };
            if !self.config.matches_extension(name) {
                continue;
            }

            let path = entry.path();
            if !path.is_file() {
                tracing::debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }

            result.push(self.summarize_file(&path));
        }

        tracing::info!(dir = %dir.display(), files = result.len(), "batch complete");
        Ok(result)
    }

    /// Summarizes every matching file in `dir`.
    ///
    /// If the directory is missing or cannot be listed, the failure is
    /// reported and an empty result is returned.
    pub fn process_directory(&self, dir: &Path) -> BatchResult {
        self.try_process_directory(dir).unwrap_or_else(|e| {
            tracing::error!("{}", e);
            BatchResult::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stopwords::StopwordSet;
    use std::fs;
    use tempfile::tempdir;

    const CHAT: &str = "User: Hello\nAI: Hi\nUser: How are you?\nAI: I'm good\n";

    fn runner() -> BatchRunner {
        BatchRunner::new(KeywordExtractor::new(StopwordSet::from_words(["are", "you"])))
    }

    #[test]
    fn test_process_directory_two_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.txt"), CHAT).unwrap();
        fs::write(dir.path().join("two.txt"), CHAT).unwrap();
        fs::write(dir.path().join("notes.md"), CHAT).unwrap();

        let result = runner().process_directory(dir.path());
        assert_eq!(result.len(), 2);
        for name in ["one.txt", "two.txt"] {
            let summary = result.get(name).unwrap();
            assert_eq!(summary.stats.total_messages, 4);
        }
        assert!(result.get("notes.md").is_none());
    }

    #[test]
    fn test_process_missing_directory() {
        let runner = runner();
        let path = Path::new("no/such/transcripts");
        assert!(runner.process_directory(path).is_empty());

        let err = runner.try_process_directory(path).unwrap_err();
        assert!(err.is_directory_unavailable());
    }

    #[test]
    fn test_process_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(runner().process_directory(dir.path()).is_empty());
    }

    #[test]
    fn test_skips_subdirectory_with_matching_name() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("archive.txt")).unwrap();
        fs::write(dir.path().join("real.txt"), CHAT).unwrap();

        let result = runner().process_directory(dir.path());
        assert_eq!(result.file_names().collect::<Vec<_>>(), vec!["real.txt"]);
    }

    #[test]
    fn test_summarize_missing_file() {
        let summary = runner().summarize_file(Path::new("gone/chat.txt"));
        assert_eq!(summary.file_name, "chat.txt");
        assert_eq!(summary, FileSummary::empty("chat.txt"));
    }

    #[test]
    fn test_summarize_per_speaker() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(&path, "User: rust rust\nAI: python\n").unwrap();

        let runner = runner().with_config(BatchConfig::new().with_per_speaker(true));
        let summary = runner.summarize_file(&path);
        let speakers = summary.speaker_keywords.unwrap();
        assert_eq!(speakers.user[0].word, "rust");
        assert_eq!(speakers.user[0].count, 2);
        assert_eq!(speakers.ai[0].word, "python");
    }

    #[test]
    fn test_batch_result_push_replaces_same_name() {
        let mut result = BatchResult::new();
        result.push(FileSummary::empty("a.txt"));
        result.push(FileSummary::new("a.txt", MessageStats::new(1, 1), vec![]));
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("a.txt").unwrap().stats.total_messages, 2);
    }
}
