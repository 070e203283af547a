//! Summary data models shared by the batch runner and the output writers.

use serde::{Deserialize, Serialize};

use super::batch::BatchResult;
use super::keywords::KeywordCount;
use super::stats::MessageStats;

/// Keyword rankings split by speaker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerKeywords {
    pub user: Vec<KeywordCount>,
    pub ai: Vec<KeywordCount>,
}

/// Statistics and keywords of one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    /// File name (without directory)
    pub file_name: String,
    /// Message counts
    pub stats: MessageStats,
    /// Keywords over both speakers combined
    pub keywords: Vec<KeywordCount>,
    /// Per-speaker keywords, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub speaker_keywords: Option<SpeakerKeywords>,
}

impl FileSummary {
    /// Creates a summary with no per-speaker rankings.
    pub fn new(
        file_name: impl Into<String>,
        stats: MessageStats,
        keywords: Vec<KeywordCount>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            stats,
            keywords,
            speaker_keywords: None,
        }
    }

    /// Summary of a file that could not be read: zero counts, no keywords.
    pub fn empty(file_name: impl Into<String>) -> Self {
        Self::new(file_name, MessageStats::default(), Vec::new())
    }

    /// Attaches per-speaker rankings.
    #[must_use]
    pub fn with_speaker_keywords(mut self, speaker_keywords: SpeakerKeywords) -> Self {
        self.speaker_keywords = Some(speaker_keywords);
        self
    }
}

/// Everything a single CLI run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Summary of the single transcript, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub summary: Option<FileSummary>,
    /// Directory batch results, if a batch run was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub batch: Option<BatchResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_summary(mut self, summary: FileSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    #[must_use]
    pub fn with_batch(mut self, batch: BatchResult) -> Self {
        self.batch = Some(batch);
        self
    }

    /// Iterates over every file summary: the single file first, then the batch.
    pub fn summaries(&self) -> impl Iterator<Item = &FileSummary> {
        self.summary
            .iter()
            .chain(self.batch.iter().flat_map(BatchResult::iter))
    }
}
