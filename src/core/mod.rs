//! Core processing logic for chatsum.
//!
//! This module contains:
//! - [`tokenizer`] - Word tokenization with contraction splitting
//! - [`stopwords`] - Stopword sets (built-in English or from a file)
//! - [`keywords`] - Keyword frequency ranking
//! - [`stats`] - Message statistics
//! - [`models`] - Summary and report data structures
//! - [`batch`] - Directory batch processing
//! - [`output`] - Report renderers (text, CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatsum::core::{KeywordExtractor, StopwordSet};
//!
//! let extractor = KeywordExtractor::new(StopwordSet::from_words(["the", "is"]));
//! let keywords = extractor.extract(&["the borrow checker is strict"]);
//! assert_eq!(keywords[0].word, "borrow");
//! ```

pub mod batch;
pub mod keywords;
pub mod models;
pub mod output;
pub mod stats;
pub mod stopwords;
pub mod tokenizer;

// Re-export main types for convenience
pub use batch::{BatchResult, BatchRunner};
pub use keywords::{DEFAULT_TOP_N, KeywordCount, KeywordExtractor, extract_keywords};
pub use models::{FileSummary, Report, SpeakerKeywords};
pub use stats::MessageStats;
pub use stopwords::StopwordSet;
pub use tokenizer::word_tokenize;

// Conditionally re-export output renderers
#[cfg(feature = "csv-output")]
pub use output::to_csv;
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl};
pub use output::to_text;
