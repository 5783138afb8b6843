//! Tokenizer
//!
//! Splits raw text into words, sentences and paragraphs. Each split is a
//! small explicit scan so the boundary rules can be read and tested in
//! isolation:
//!
//! - **words**: runs of letters/digits, with `'` or `’` kept only between
//!   two alphanumeric characters; lower-cased. Combining marks continue a
//!   word and words are stored NFC-composed, so `"e\u{301}cole"` and
//!   `"école"` are the same token.
//! - **sentences**: a run of `.`, `!` or `?` followed by whitespace or the
//!   end of input closes a sentence. Terminal punctuation stays attached.
//! - **paragraphs**: separated by one or more blank (whitespace-only) lines.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The three token streams derived from one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    /// Normalized words in order of appearance.
    pub words: Vec<String>,
    /// Trimmed sentences with original casing and punctuation.
    pub sentences: Vec<String>,
    /// Trimmed paragraphs with original casing and punctuation.
    pub paragraphs: Vec<String>,
}

impl Tokens {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.sentences.is_empty() && self.paragraphs.is_empty()
    }
}

/// Run all three scans over `text`.
pub fn tokenize(text: &str) -> Tokens {
    Tokens {
        words: extract_words(text),
        sentences: split_sentences(text),
        paragraphs: split_paragraphs(text),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordState {
    Outside,
    InWord,
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Extract lower-cased word tokens.
pub fn extract_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut state = WordState::Outside;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        state = match state {
            WordState::Outside if c.is_alphanumeric() => {
                current.extend(c.to_lowercase());
                WordState::InWord
            }
            WordState::Outside => WordState::Outside,
            WordState::InWord if c.is_alphanumeric() || is_combining_mark(c) => {
                current.extend(c.to_lowercase());
                WordState::InWord
            }
            WordState::InWord
                if is_apostrophe(c) && chars.peek().is_some_and(|n| n.is_alphanumeric()) =>
            {
                // Contractions are stored with a plain apostrophe.
                current.push('\'');
                WordState::InWord
            }
            WordState::InWord => {
                words.push(compose(std::mem::take(&mut current)));
                WordState::Outside
            }
        };
    }
    if state == WordState::InWord {
        words.push(compose(current));
    }
    words
}

fn compose(word: String) -> String {
    if word.is_ascii() {
        word
    } else {
        word.nfc().collect()
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into sentences on terminal punctuation followed by whitespace
/// or end of input.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((idx, c)) = iter.next() {
        if !is_terminal(c) {
            continue;
        }
        let mut end = idx + c.len_utf8();
        while let Some(&(next_idx, next)) = iter.peek() {
            if !is_terminal(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            iter.next();
        }
        let at_boundary = match iter.peek() {
            None => true,
            Some(&(_, next)) => next.is_whitespace(),
        };
        if at_boundary {
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_sentence(&mut sentences, &text[start..]);
    sentences
}

// A segment holding nothing but terminal punctuation is the tail of a
// collapsed boundary, not a sentence.
fn push_sentence(out: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if trimmed.chars().all(|c| is_terminal(c) || c.is_whitespace()) {
        return;
    }
    out.push(trimmed.to_string());
}

/// Split text into paragraphs on blank lines.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            push_trimmed(&mut paragraphs, &text[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    push_trimmed(&mut paragraphs, &text[start..]);
    paragraphs
}

fn push_trimmed(out: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_lowercase_words() {
        let words = extract_words("The cat sat. The cat ran!");
        assert_eq!(words, vec!["the", "cat", "sat", "the", "cat", "ran"]);
    }

    #[test]
    fn keeps_internal_apostrophes_only() {
        let words = extract_words("Don't stop 'quoted' the dogs' bones rock\u{2019}n\u{2019}roll");
        assert_eq!(
            words,
            vec!["don't", "stop", "quoted", "the", "dogs", "bones", "rock'n'roll"]
        );
    }

    #[test]
    fn digits_are_word_characters() {
        assert_eq!(extract_words("route 66, pi=3.14"), vec!["route", "66", "pi", "3", "14"]);
    }

    #[test]
    fn unicode_letters_are_lowercased() {
        assert_eq!(extract_words("ÉCOLE Straße"), vec!["école", "straße"]);
    }

    #[test]
    fn decomposed_accents_stay_in_the_word() {
        let words = extract_words("e\u{301}cole E\u{301}COLE \u{301}x");
        assert_eq!(words, vec!["école", "école", "x"]);
    }

    #[test]
    fn splits_sentences_on_terminal_punctuation() {
        let sentences = split_sentences("The cat sat. The cat ran! Did it?");
        assert_eq!(sentences, vec!["The cat sat.", "The cat ran!", "Did it?"]);
    }

    #[test]
    fn collapses_consecutive_terminals() {
        let sentences = split_sentences("Really?!  Yes... Fine");
        assert_eq!(sentences, vec!["Really?!", "Yes...", "Fine"]);
    }

    #[test]
    fn punctuation_without_whitespace_does_not_split() {
        let sentences = split_sentences("Pi is 3.14 today. Version v1.2.3 shipped");
        assert_eq!(sentences, vec!["Pi is 3.14 today.", "Version v1.2.3 shipped"]);
    }

    #[test]
    fn text_without_terminals_is_one_sentence() {
        assert_eq!(split_sentences("  no ending here  "), vec!["no ending here"]);
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn punctuation_only_segments_are_discarded() {
        assert!(split_sentences(". . . ?!").is_empty());
        assert_eq!(split_sentences("Wait!! !! Go."), vec!["Wait!!", "Go."]);
    }

    #[test]
    fn splits_paragraphs_on_blank_lines() {
        let text = "First line\nstill first.\n\n\nSecond.\r\n  \r\nThird";
        assert_eq!(
            split_paragraphs(text),
            vec!["First line\nstill first.", "Second.", "Third"]
        );
    }

    #[test]
    fn single_block_is_one_paragraph() {
        assert_eq!(split_paragraphs("one\ntwo"), vec!["one\ntwo"]);
        assert!(split_paragraphs("\n\n\n").is_empty());
    }

    #[test]
    fn empty_text_produces_nothing() {
        let tokens = tokenize("");
        assert!(tokens.is_empty());
        assert_eq!(tokens, Tokens::default());
    }
}
