//! Report renderers.
//!
//! Every renderer turns a [`Report`](crate::core::models::Report) into a
//! `String`; the caller decides where it goes (the CLI prints to stdout).
//!
//! - [`to_text`] - human-readable summary (always available)
//! - [`to_json`] - one pretty JSON document - requires `json-output` feature
//! - [`to_jsonl`] - one JSON object per file summary - requires `json-output` feature
//! - [`to_csv`] - one row per file summary, semicolon delimited - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust
//! use chatsum::core::models::{FileSummary, Report};
//! use chatsum::core::output::to_text;
//!
//! let report = Report::new().with_summary(FileSummary::empty("chat.txt"));
//! assert!(to_text(&report).contains("Total exchanges: 0"));
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::to_csv;
#[cfg(feature = "json-output")]
pub use json_writer::to_json;
#[cfg(feature = "json-output")]
pub use jsonl_writer::to_jsonl;
pub use text_writer::{summary_to_text, to_text};
