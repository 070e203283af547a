//! JSON output writer.

use crate::core::models::Report;
use crate::error::Result;

/// Renders the report as one pretty-printed JSON document.
///
/// # Format
/// ```json
/// {
///   "summary": {"file_name": "chat.txt", "stats": {...}, "keywords": [...]},
///   "batch": [{"file_name": "a.txt", ...}]
/// }
/// ```
/// Sections that were not requested are omitted.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
