//! Message volume statistics.

use serde::{Deserialize, Serialize};

use crate::parser::ParseResult;

/// Message counts for one transcript.
///
/// `total_messages` always equals `user_messages + ai_messages`; build the
/// value through [`MessageStats::new`] or [`MessageStats::from_parse`] to keep
/// it that way.
///
/// # Example
///
/// ```rust
/// use chatsum::core::stats::MessageStats;
///
/// let stats = MessageStats::new(2, 2);
/// assert_eq!(stats.total_messages, 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStats {
    pub total_messages: usize,
    pub user_messages: usize,
    pub ai_messages: usize,
}

impl MessageStats {
    pub fn new(user_messages: usize, ai_messages: usize) -> Self {
        Self {
            total_messages: user_messages + ai_messages,
            user_messages,
            ai_messages,
        }
    }

    pub fn from_parse(parsed: &ParseResult) -> Self {
        Self::new(parsed.user.len(), parsed.ai.len())
    }
}

impl From<&ParseResult> for MessageStats {
    fn from(parsed: &ParseResult) -> Self {
        Self::from_parse(parsed)
    }
}
