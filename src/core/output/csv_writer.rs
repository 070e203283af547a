//! CSV output writer.

use crate::core::keywords::KeywordCount;
use crate::core::models::{FileSummary, Report};
use crate::error::Result;

/// Renders one row per file summary.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `File`, `Total`, `User`, `AI`, `Keywords`
/// - Keywords are `word:count` pairs joined with `,`
/// - With per-speaker rankings: extra `UserKeywords`, `AiKeywords` columns
pub fn to_csv(report: &Report) -> Result<String> {
    let per_speaker = report
        .summaries()
        .any(|summary| summary.speaker_keywords.is_some());

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(build_header(per_speaker))?;
    for summary in report.summaries() {
        writer.write_record(build_record(summary, per_speaker))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn build_header(per_speaker: bool) -> Vec<&'static str> {
    let mut header = vec!["File", "Total", "User", "AI", "Keywords"];
    if per_speaker {
        header.push("UserKeywords");
        header.push("AiKeywords");
    }
    header
}

fn build_record(summary: &FileSummary, per_speaker: bool) -> Vec<String> {
    let mut record = vec![
        summary.file_name.clone(),
        summary.stats.total_messages.to_string(),
        summary.stats.user_messages.to_string(),
        summary.stats.ai_messages.to_string(),
        join_keywords(&summary.keywords),
    ];
    if per_speaker {
        let (user, ai) = summary
            .speaker_keywords
            .as_ref()
            .map(|s| (join_keywords(&s.user), join_keywords(&s.ai)))
            .unwrap_or_default();
        record.push(user);
        record.push(ai);
    }
    record
}

fn join_keywords(keywords: &[KeywordCount]) -> String {
    keywords
        .iter()
        .map(|k| format!("{}:{}", k.word, k.count))
        .collect::<Vec<_>>()
        .join(",")
}
