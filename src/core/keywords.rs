//! Frequency-based keyword extraction.
//!
//! The pipeline is: join messages with a space, lowercase, tokenize, keep
//! alphabetic non-stopword tokens, count, rank.
//!
//! # Example
//!
//! ```rust
//! use chatsum::core::keywords::extract_keywords;
//! use chatsum::core::stopwords::StopwordSet;
//!
//! let stopwords = StopwordSet::from_words(["is", "i"]);
//! let keywords = extract_keywords(&["Python is great", "I love Python"], 2, &stopwords);
//!
//! assert_eq!(keywords[0].word, "python");
//! assert_eq!(keywords[0].count, 2);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::stopwords::StopwordSet;
use super::tokenizer::word_tokenize;
use crate::config::KeywordConfig;
use crate::error::Result;
use crate::parser::ParseResult;
use crate::Speaker;

/// Number of keywords returned when no limit is given.
pub const DEFAULT_TOP_N: usize = 5;

/// A ranked keyword and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordCount {
    /// Lowercase alphabetic word
    pub word: String,
    /// Number of occurrences (always positive)
    pub count: usize,
}

impl KeywordCount {
    /// Creates a new keyword count.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl std::fmt::Display for KeywordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} times", self.word, self.count)
    }
}

/// Returns `true` for tokens made only of alphabetic characters.
fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Extracts the `top_n` most frequent keywords from `messages`.
///
/// Ties keep the order in which words were first seen. Returns fewer than
/// `top_n` entries when fewer distinct keywords exist, and nothing when
/// `top_n` is zero.
pub fn extract_keywords<S: AsRef<str>>(
    messages: &[S],
    top_n: usize,
    stopwords: &StopwordSet,
) -> Vec<KeywordCount> {
    if top_n == 0 || messages.is_empty() {
        return Vec::new();
    }

    let text = messages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    // Counts live in first-seen order; the map only indexes into them.
    let mut counts: Vec<KeywordCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in word_tokenize(&text) {
        if !is_alphabetic(token) || stopwords.contains(token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(token, counts.len());
                counts.push(KeywordCount::new(token, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}

/// Keyword extractor bundling a stopword set and a default limit.
///
/// # Example
///
/// ```rust
/// use chatsum::core::keywords::KeywordExtractor;
/// use chatsum::parser::TranscriptParser;
/// use chatsum::Speaker;
///
/// let extractor = KeywordExtractor::english()?.with_top_n(3);
/// let parsed = TranscriptParser::new().parse_str("User: Rust rocks\nAI: Rust is fast\n");
///
/// let combined = extractor.extract_all(&parsed);
/// assert_eq!(combined[0].word, "rust");
///
/// let ai_only = extractor.extract_for(&parsed, Speaker::Ai);
/// assert_eq!(ai_only[0].count, 1);
/// # Ok::<(), chatsum::ChatsumError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stopwords: StopwordSet,
    top_n: usize,
}

impl KeywordExtractor {
    /// Creates an extractor with the given stopwords and the default limit.
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Creates an extractor with the built-in English stopwords.
    pub fn english() -> Result<Self> {
        Ok(Self::new(StopwordSet::english()?))
    }

    /// Creates an extractor from a keyword configuration.
    pub fn from_config(config: &KeywordConfig) -> Result<Self> {
        Ok(Self::new(config.build_stopwords()?).with_top_n(config.top_n))
    }

    /// Sets the default number of keywords returned.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Returns the default number of keywords returned.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Returns the stopword set in use.
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Ranks keywords in `messages` using the default limit.
    pub fn extract<S: AsRef<str>>(&self, messages: &[S]) -> Vec<KeywordCount> {
        self.extract_top(messages, self.top_n)
    }

    /// Ranks keywords in `messages` with an explicit limit.
    pub fn extract_top<S: AsRef<str>>(&self, messages: &[S], top_n: usize) -> Vec<KeywordCount> {
        extract_keywords(messages, top_n, &self.stopwords)
    }

    /// Ranks keywords across both speakers of a parsed transcript.
    pub fn extract_all(&self, parsed: &ParseResult) -> Vec<KeywordCount> {
        self.extract(parsed.all_texts().as_slice())
    }

    /// Ranks keywords of a single speaker.
    pub fn extract_for(&self, parsed: &ParseResult, speaker: Speaker) -> Vec<KeywordCount> {
        self.extract(parsed.messages(speaker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(words: &[&str]) -> StopwordSet {
        StopwordSet::from_words(words)
    }

    #[test]
    fn test_python_scenario() {
        let keywords = extract_keywords(&["Python is great", "I love Python"], 2, &stop(&["is"]));
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0], KeywordCount::new("python", 2));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let keywords = extract_keywords(&["zeta alpha mid", "mid alpha zeta"], 10, &stop(&[]));
        let words: Vec<_> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_ranking_by_count() {
        let keywords = extract_keywords(&["b a b c b a"], 3, &stop(&[]));
        assert_eq!(
            keywords,
            vec![
                KeywordCount::new("b", 3),
                KeywordCount::new("a", 2),
                KeywordCount::new("c", 1),
            ]
        );
    }

    #[test]
    fn test_filters_non_alphabetic() {
        let keywords = extract_keywords(&["route 66 is r2d2 home, ok?"], 10, &stop(&["is"]));
        let words: Vec<_> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["route", "home", "ok"]);
    }

    #[test]
    fn test_contractions_do_not_leak_clitics() {
        let keywords = extract_keywords(&["I'm good, don't worry"], 10, &stop(&[]));
        let words: Vec<_> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["i", "good", "do", "worry"]);
    }

    #[test]
    fn test_hyphenated_words_are_not_keywords() {
        let keywords = extract_keywords(&["A well-known well-known library"], 5, &stop(&["a"]));
        assert_eq!(keywords, vec![KeywordCount::new("library", 1)]);
    }

    #[test]
    fn test_lowercases() {
        let keywords = extract_keywords(&["Rust RUST rust"], 5, &stop(&[]));
        assert_eq!(keywords, vec![KeywordCount::new("rust", 3)]);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(extract_keywords(&empty, 5, &stop(&[])).is_empty());
        assert!(extract_keywords(&["hello"], 0, &stop(&[])).is_empty());
        assert!(extract_keywords(&["the and"], 5, &stop(&["the", "and"])).is_empty());
    }

    #[test]
    fn test_messages_join_with_space() {
        // Without the separator "foo" + "bar" would fuse into "foobar".
        let keywords = extract_keywords(&["foo", "bar"], 5, &stop(&[]));
        assert_eq!(keywords.len(), 2);
    }

    #[test]
    fn test_extractor_default_top_n() {
        let extractor = KeywordExtractor::new(stop(&[]));
        assert_eq!(extractor.top_n(), DEFAULT_TOP_N);
        let keywords = extractor.extract(&["a b c d e f g"]);
        assert_eq!(keywords.len(), 5);
    }

    #[test]
    fn test_extractor_per_speaker() {
        let parsed = crate::parser::TranscriptParser::new()
            .parse_str("User: apples apples\nAI: oranges\nUser: pears\n");
        let extractor = KeywordExtractor::new(stop(&[]));

        let user = extractor.extract_for(&parsed, Speaker::User);
        assert_eq!(user[0], KeywordCount::new("apples", 2));
        assert_eq!(user.len(), 2);

        let ai = extractor.extract_for(&parsed, Speaker::Ai);
        assert_eq!(ai, vec![KeywordCount::new("oranges", 1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(KeywordCount::new("python", 2).to_string(), "python: 2 times");
    }
}
