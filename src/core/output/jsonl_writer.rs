//! JSON Lines (JSONL) output writer.
//!
//! One file summary per line, which keeps large batch runs easy to feed into
//! `jq` or a data pipeline.

use serde::Serialize;

use crate::core::models::{FileSummary, Report};
use crate::error::Result;

/// One JSONL record: a summary tagged with the report section it came from.
#[derive(Serialize)]
struct JsonlSummary<'a> {
    section: &'static str,
    #[serde(flatten)]
    summary: &'a FileSummary,
}

/// Renders the report as JSON Lines.
///
/// ```jsonl
/// {"section":"file","file_name":"chat.txt","stats":{...},"keywords":[...]}
/// {"section":"batch","file_name":"a.txt","stats":{...},"keywords":[...]}
/// ```
pub fn to_jsonl(report: &Report) -> Result<String> {
    let single = report.summary.iter().map(|summary| JsonlSummary {
        section: "file",
        summary,
    });
    let batch = report
        .batch
        .iter()
        .flat_map(|batch| batch.iter())
        .map(|summary| JsonlSummary {
            section: "batch",
            summary,
        });

    let mut out = String::new();
    for record in single.chain(batch) {
        out.push_str(&serde_json::to_string(&record)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::batch::BatchResult;
    use crate::core::stats::MessageStats;

    #[test]
    fn test_to_jsonl_lines() {
        let mut batch = BatchResult::new();
        batch.push(FileSummary::new("a.txt", MessageStats::new(2, 2), vec![]));
        batch.push(FileSummary::empty("b.txt"));
        let report = Report::new()
            .with_summary(FileSummary::empty("chat.txt"))
            .with_batch(batch);

        let jsonl = to_jsonl(&report).unwrap();
        let lines: Vec<serde_json::Value> = jsonl
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["section"], "file");
        assert_eq!(lines[0]["file_name"], "chat.txt");
        assert_eq!(lines[1]["section"], "batch");
        assert_eq!(lines[1]["stats"]["total_messages"], 4);
    }

    #[test]
    fn test_jsonl_no_array_brackets() {
        let report = Report::new().with_summary(FileSummary::empty("chat.txt"));
        let jsonl = to_jsonl(&report).unwrap();
        assert!(!jsonl.starts_with('['));
        assert_eq!(jsonl.lines().count(), 1);
    }
}
