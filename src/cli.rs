//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! # Turning Arguments into Library Configuration
//!
//! ```rust
//! use chatsum::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatsum", "chat.txt", "--top", "3", "-s"]);
//! let config = args.batch_config();
//!
//! assert_eq!(config.keywords.top_n, 3);
//! assert!(config.per_speaker);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{BatchConfig, KeywordConfig};
use crate::core::keywords::DEFAULT_TOP_N;

/// Summarize User/AI chat transcripts: message counts and the most common
/// keywords, for one file and for every transcript in a directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsum")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsum
    chatsum session.txt --no-batch
    chatsum --no-single --dir transcripts --format csv
    chatsum chat.txt --top 10 --per-speaker --format json
    chatsum chat.txt --extra-stopword hello --extra-stopword thanks")]
pub struct Args {
    /// Transcript to summarize
    #[arg(default_value = "data/chat.txt")]
    pub file: PathBuf,

    /// Directory of transcripts for the batch section
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    pub dir: PathBuf,

    /// Skip the directory batch section
    #[arg(long)]
    pub no_batch: bool,

    /// Skip the single-file section
    #[arg(long)]
    pub no_single: bool,

    /// Number of keywords per summary
    #[arg(short = 'n', long = "top", value_name = "N", default_value_t = DEFAULT_TOP_N, value_parser = parse_top_n)]
    pub top_n: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also rank keywords per speaker
    #[arg(short = 's', long)]
    pub per_speaker: bool,

    /// Stopword file replacing the built-in English list (one word per line)
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Additional stopword (repeatable)
    #[arg(long = "extra-stopword", value_name = "WORD")]
    pub extra_stopwords: Vec<String>,

    /// Transcript file extension for the batch section
    #[arg(long, value_name = "EXT", default_value = "txt")]
    pub ext: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Keyword settings described by the arguments.
    pub fn keyword_config(&self) -> KeywordConfig {
        let config = KeywordConfig::new()
            .with_top_n(self.top_n)
            .with_extra_stopwords(self.extra_stopwords.iter().cloned());
        match &self.stopwords {
            Some(path) => config.with_stopwords_file(path),
            None => config,
        }
    }

    /// Batch settings described by the arguments.
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig::new()
            .with_extension(self.ext.as_str())
            .with_keywords(self.keyword_config())
            .with_per_speaker(self.per_speaker)
    }

    /// Default log filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Parses `--top`, rejecting zero.
fn parse_top_n(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a positive number"))?;
    if n == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(n)
}

/// Output format options.
///
/// - [`Text`](OutputFormat::Text) - console summary (default)
/// - [`Json`](OutputFormat::Json) - one JSON document
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per summary
/// - [`Csv`](OutputFormat::Csv) - one row per summary, for spreadsheets
///
/// # Example
///
/// ```rust
/// use chatsum::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// println!("Extension: {}", format.extension()); // "jsonl"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,

    /// JSON document with `summary` and `batch` sections
    Json,

    /// JSON Lines - one summary per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::format::OutputFormat::from(*self), f)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<crate::format::OutputFormat>()? {
            crate::format::OutputFormat::Text => Ok(OutputFormat::Text),
            crate::format::OutputFormat::Json => Ok(OutputFormat::Json),
            crate::format::OutputFormat::Jsonl => Ok(OutputFormat::Jsonl),
            crate::format::OutputFormat::Csv => Ok(OutputFormat::Csv),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
