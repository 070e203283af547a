//! Line-oriented transcript parser.
//!
//! Transcripts are plain UTF-8 text, one message per line:
//!
//! ```text
//! User: Hello
//! AI: Hi
//! User: How are you?
//! AI: I'm good
//! ```
//!
//! `\n`, `\r\n` and a bare `\r` all end a line. Each line is trimmed and
//! classified by its prefix (see
//! [`Speaker::classify`]). Lines without a known prefix, including blank
//! lines, are dropped silently.
//!
//! # Example
//!
//! ```rust
//! use chatsum::parser::TranscriptParser;
//! use chatsum::Speaker;
//!
//! let parser = TranscriptParser::new();
//! let result = parser.parse_str("User: Hello\nAI: Hi\nnoise\n");
//!
//! assert_eq!(result.texts(Speaker::User), vec!["Hello"]);
//! assert_eq!(result.texts(Speaker::Ai), vec!["Hi"]);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::{ChatsumError, Result};
use crate::{Message, Speaker};

const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// Messages of a transcript, split by speaker.
///
/// Each sequence preserves source order. Both may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Messages from the first speaker (`User:` lines)
    pub user: Vec<Message>,
    /// Messages from the second speaker (`AI:` lines)
    pub ai: Vec<Message>,
}

impl ParseResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to its speaker's sequence.
    pub fn push(&mut self, message: Message) {
        match message.speaker() {
            Speaker::User => self.user.push(message),
            Speaker::Ai => self.ai.push(message),
        }
    }

    /// Returns the messages of one speaker.
    pub fn messages(&self, speaker: Speaker) -> &[Message] {
        match speaker {
            Speaker::User => &self.user,
            Speaker::Ai => &self.ai,
        }
    }

    /// Returns the message bodies of one speaker.
    pub fn texts(&self, speaker: Speaker) -> Vec<&str> {
        self.messages(speaker).iter().map(Message::text).collect()
    }

    /// Returns every message body: first speaker, then second speaker.
    pub fn all_texts(&self) -> Vec<&str> {
        Speaker::ALL
            .into_iter()
            .flat_map(|speaker| self.messages(speaker))
            .map(Message::text)
            .collect()
    }

    /// Total number of messages across both speakers.
    pub fn total(&self) -> usize {
        self.user.len() + self.ai.len()
    }

    /// Returns `true` if no speaker line was found.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Parser for `User:` / `AI:` transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatsum::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
///
/// // Missing files are reported and yield an empty result.
/// let result = parser.parse("data/chat.txt".as_ref());
///
/// // Or surface the error yourself.
/// let result = parser.try_parse("data/chat.txt".as_ref())?;
/// # Ok::<(), chatsum::ChatsumError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Classifies a single raw line.
    pub fn parse_line(&self, line: &str) -> Option<Message> {
        Speaker::classify(line.trim()).map(|(speaker, body)| Message::new(speaker, body))
    }

    /// Parses transcript content from a string.
    pub fn parse_str(&self, content: &str) -> ParseResult {
        let mut result = ParseResult::new();
        for message in content
            .split(LINE_BREAKS)
            .filter_map(|line| self.parse_line(line))
        {
            result.push(message);
        }
        result
    }

    /// Parses transcript content from a buffered reader, line by line.
    ///
    /// Read errors (including invalid UTF-8) abort the parse.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        let mut result = ParseResult::new();
        for line in reader.lines() {
            // `lines` only splits on `\n`; a bare `\r` can remain inside.
            for piece in line?.split('\r') {
                if let Some(message) = self.parse_line(piece) {
                    result.push(message);
                }
            }
        }
        Ok(result)
    }

    /// Parses a transcript file, returning an error if it cannot be read.
    pub fn try_parse(&self, path: &Path) -> Result<ParseResult> {
        let file = File::open(path).map_err(|e| ChatsumError::source_unavailable(path, e))?;
        let result = self
            .parse_reader(BufReader::new(file))
            .map_err(|e| match e {
                ChatsumError::Io(source) => ChatsumError::source_unavailable(path, source),
                other => other,
            })?;

        tracing::debug!(
            path = %path.display(),
            user = result.user.len(),
            ai = result.ai.len(),
            "parsed transcript"
        );
        Ok(result)
    }

    /// Parses a transcript file.
    ///
    /// If the file is missing or unreadable the failure is reported through
    /// `tracing` and an empty result is returned.
    pub fn parse(&self, path: &Path) -> ParseResult {
        self.try_parse(path).unwrap_or_else(|e| {
            tracing::error!("{}", e);
            ParseResult::new()
        })
    }
}
