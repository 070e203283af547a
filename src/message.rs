//! Speaker tags and the message type produced by the transcript parser.
//!
//! A transcript line such as `User: Hello` becomes a [`Message`] tagged with
//! [`Speaker::User`] and the trimmed body `"Hello"`.
//!
//! # Examples
//!
//! ```
//! use chatsum::{Message, Speaker};
//!
//! let msg = Message::new(Speaker::Ai, "Hi there");
//! assert_eq!(msg.speaker(), Speaker::Ai);
//! assert_eq!(msg.text(), "Hi there");
//! ```

use serde::{Deserialize, Serialize};

/// The role a transcript line is attributed to.
///
/// Each variant owns the literal line prefix that selects it. Matching is
/// exact and case-sensitive: `user:` or `Ai:` are not speaker lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Speaker {
    /// First speaker, lines prefixed with `User:`
    User,

    /// Second speaker, lines prefixed with `AI:`
    Ai,
}

impl Speaker {
    /// All speakers, in the order prefixes are tried.
    pub const ALL: [Speaker; 2] = [Speaker::User, Speaker::Ai];

    /// Returns the literal line prefix for this speaker, colon included.
    pub fn prefix(self) -> &'static str {
        match self {
            Speaker::User => "User:",
            Speaker::Ai => "AI:",
        }
    }

    /// Returns a human-readable label, used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Ai => "AI",
        }
    }

    /// Classifies an already-trimmed line.
    ///
    /// Returns the speaker and the trimmed remainder after the prefix, or
    /// `None` when the line carries no known prefix.
    ///
    /// ```
    /// use chatsum::Speaker;
    ///
    /// assert_eq!(Speaker::classify("User: Hello"), Some((Speaker::User, "Hello")));
    /// assert_eq!(Speaker::classify("AI:Hi"), Some((Speaker::Ai, "Hi")));
    /// assert_eq!(Speaker::classify("user: hello"), None);
    /// ```
    pub fn classify(line: &str) -> Option<(Speaker, &str)> {
        Speaker::ALL.into_iter().find_map(|speaker| {
            line.strip_prefix(speaker.prefix())
                .map(|rest| (speaker, rest.trim()))
        })
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single line of dialogue attributed to one speaker.
///
/// The text is stored trimmed. Fields are read through accessors so a parsed
/// message cannot be re-attributed after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    speaker: Speaker,
    text: String,
}

impl Message {
    /// Creates a new message, trimming the text.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        let text = if trimmed.len() == text.len() {
            text
        } else {
            trimmed.to_string()
        };
        Self { speaker, text }
    }

    /// Returns the speaker tag.
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the body is empty (e.g. a bare `User:` line).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prefixes() {
        assert_eq!(
            Speaker::classify("User: How are you?"),
            Some((Speaker::User, "How are you?"))
        );
        assert_eq!(Speaker::classify("AI: I'm good"), Some((Speaker::Ai, "I'm good")));
    }

    #[test]
    fn test_classify_without_space() {
        assert_eq!(Speaker::classify("User:Hello"), Some((Speaker::User, "Hello")));
        assert_eq!(Speaker::classify("AI:    spaced"), Some((Speaker::Ai, "spaced")));
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(Speaker::classify("USER: shout"), None);
        assert_eq!(Speaker::classify("ai: lower"), None);
        assert_eq!(Speaker::classify("Assistant: nope"), None);
        assert_eq!(Speaker::classify(""), None);
    }

    #[test]
    fn test_classify_empty_body() {
        assert_eq!(Speaker::classify("User:"), Some((Speaker::User, "")));
    }

    #[test]
    fn test_speaker_display() {
        assert_eq!(Speaker::User.to_string(), "User");
        assert_eq!(Speaker::Ai.to_string(), "AI");
    }

    #[test]
    fn test_message_trims_text() {
        let msg = Message::new(Speaker::User, "  Hello  ");
        assert_eq!(msg.text(), "Hello");
        assert!(!msg.is_empty());
        assert!(Message::new(Speaker::Ai, "   ").is_empty());
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(Speaker::Ai, "Hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"speaker":"ai","text":"Hi"}"#);

        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
