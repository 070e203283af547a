//! Human-readable text output.

use crate::core::keywords::KeywordCount;
use crate::core::models::{FileSummary, Report};

/// Renders one file summary.
///
/// ```text
/// Chat Log Summary:
/// - Total exchanges: 4
/// - User messages: 2
/// - AI messages: 2
///
/// Most common keywords:
/// - python: 2 times
/// ```
pub fn summary_to_text(summary: &FileSummary) -> String {
    let mut out = String::new();
    out.push_str("Chat Log Summary:\n");
    out.push_str(&format!("- Total exchanges: {}\n", summary.stats.total_messages));
    out.push_str(&format!("- User messages: {}\n", summary.stats.user_messages));
    out.push_str(&format!("- AI messages: {}\n", summary.stats.ai_messages));

    push_keywords(&mut out, "Most common keywords:", &summary.keywords);
    if let Some(speakers) = &summary.speaker_keywords {
        push_keywords(&mut out, "User keywords:", &speakers.user);
        push_keywords(&mut out, "AI keywords:", &speakers.ai);
    }
    out
}

fn push_keywords(out: &mut String, title: &str, keywords: &[KeywordCount]) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    for keyword in keywords {
        out.push_str(&format!("- {keyword}\n"));
    }
}

/// Renders a whole report: the single file first, then each batch entry.
pub fn to_text(report: &Report) -> String {
    let mut out = String::new();

    if let Some(summary) = &report.summary {
        out.push_str(&format!("📄 {}\n", summary.file_name));
        out.push_str(&summary_to_text(summary));
    }

    if let Some(batch) = &report.batch {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("📂 Batch: {} file(s)\n", batch.len()));
        for summary in batch {
            out.push_str(&format!("\n📄 {}\n", summary.file_name));
            out.push_str(&summary_to_text(summary));
        }
    }

    out
}
