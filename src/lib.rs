//! # Chatsum
//!
//! A Rust library for summarizing `User:`/`AI:` chat transcripts: message
//! counts per speaker and the most frequent keywords.
//!
//! ## Overview
//!
//! A transcript is a UTF-8 text file where each conversation line starts with
//! `User:` or `AI:`. Every other line is ignored. Chatsum:
//! - splits a transcript into user and AI messages
//! - counts them
//! - ranks the most common words after dropping stopwords, punctuation
//!   and numbers
//! - repeats this for every transcript in a directory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatsum::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parsed = TranscriptParser::new().try_parse("data/chat.txt".as_ref())?;
//!     let extractor = KeywordExtractor::english()?;
//!
//!     let stats = MessageStats::from_parse(&parsed);
//!     println!("{} messages", stats.total_messages);
//!
//!     for keyword in extractor.extract_all(&parsed) {
//!         println!("{keyword}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Batch Runs
//!
//! ```rust,no_run
//! use chatsum::prelude::*;
//!
//! let runner = BatchRunner::from_config(BatchConfig::new())?;
//! let report = Report::new().with_batch(runner.process_directory("data".as_ref()));
//! println!("{}", render(&report, OutputFormat::Text)?);
//! # Ok::<(), chatsum::ChatsumError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] - [`Speaker`] and [`Message`]
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and [`ParseResult`](parser::ParseResult)
//! - [`config`] - [`KeywordConfig`](config::KeywordConfig), [`BatchConfig`](config::BatchConfig)
//! - [`core`] - Tokenizer, stopwords, keyword ranking, statistics, batch runner, renderers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and [`render`](format::render)
//! - [`cli`] - CLI argument types (requires `cli` feature)
//! - [`error`] - Unified error types ([`ChatsumError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsumError, Result};
pub use message::{Message, Speaker};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatsum::prelude::*;
/// ```
pub mod prelude {
    // Messages
    pub use crate::{Message, Speaker};

    // Error types
    pub use crate::error::{ChatsumError, Result};

    // Parsing
    pub use crate::parser::{ParseResult, TranscriptParser};

    // Configuration
    pub use crate::config::{BatchConfig, KeywordConfig};

    // Keywords and statistics
    pub use crate::core::keywords::{KeywordCount, KeywordExtractor, extract_keywords};
    pub use crate::core::stats::MessageStats;
    pub use crate::core::stopwords::StopwordSet;

    // Batch runs and reports
    pub use crate::core::batch::{BatchResult, BatchRunner};
    pub use crate::core::models::{FileSummary, Report, SpeakerKeywords};

    // Rendering
    pub use crate::format::{OutputFormat, render};
}
