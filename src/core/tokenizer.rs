//! Word tokenization.
//!
//! Word boundaries follow Unicode UAX #29 (via `unicode-segmentation`), so
//! punctuation and whitespace never become tokens. Words joined by a single
//! hyphen (`well-known`, `e-mail`) are rejoined into one token. English clitics
//! are then split off the way Treebank-style tokenizers do:
//!
//! | input    | tokens          |
//! |----------|-----------------|
//! | `i'm`    | `i`, `'m`       |
//! | `don't`  | `do`, `n't`     |
//! | `ai's`   | `ai`, `'s`      |
//!
//! The clitic halves contain an apostrophe, so they never survive the
//! alphabetic filter in keyword extraction.

use unicode_segmentation::UnicodeSegmentation;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Splits text into word tokens.
///
/// Tokens borrow from the input; no case folding happens here.
///
/// ```
/// use chatsum::core::tokenizer::word_tokenize;
///
/// assert_eq!(word_tokenize("Hello, world!"), vec!["Hello", "world"]);
/// assert_eq!(word_tokenize("I'm fine"), vec!["I", "'m", "fine"]);
/// ```
pub fn word_tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for word in hyphenated_words(text) {
        split_clitic(word, &mut tokens);
    }
    tokens
}

/// UAX #29 words, with `word-word` runs merged into a single span.
fn hyphenated_words(text: &str) -> Vec<&str> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut after_hyphen = false;

    for (start, segment) in text.split_word_bound_indices() {
        let end = start + segment.len();
        if segment.chars().any(char::is_alphanumeric) {
            match spans.last_mut() {
                Some(last) if after_hyphen && last.1 + 1 == start => last.1 = end,
                _ => spans.push((start, end)),
            }
            after_hyphen = false;
        } else {
            after_hyphen = segment == "-" && spans.last().is_some_and(|last| last.1 == start);
        }
    }

    spans.into_iter().map(|(start, end)| &text[start..end]).collect()
}

/// Pushes `word`, or its stem and clitic, onto `out`.
fn split_clitic<'a>(word: &'a str, out: &mut Vec<&'a str>) {
    let Some(pos) = word.find(APOSTROPHES) else {
        out.push(word);
        return;
    };

    // "don't" -> "do" + "n't"
    let negation = pos > 1 && word[..pos].ends_with(['n', 'N']) && word[pos..].len() > 1;
    let negation = negation && word[pos + apostrophe_len(word, pos)..].eq_ignore_ascii_case("t");
    let split_at = if negation { pos - 1 } else { pos };

    if split_at == 0 {
        out.push(word);
        return;
    }
    out.push(&word[..split_at]);
    out.push(&word[split_at..]);
}

fn apostrophe_len(word: &str, pos: usize) -> usize {
    word[pos..].chars().next().map_or(1, char::len_utf8)
}
