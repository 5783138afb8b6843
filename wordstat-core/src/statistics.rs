//! Document statistics.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analyzers::config::validate_words_per_minute;
use crate::tokenizer::Tokens;
use crate::WordStatError;

/// Per-class character counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBreakdown {
    pub alphabetic: usize,
    pub numeric: usize,
    /// Every whitespace character, including newlines and tabs.
    pub whitespace: usize,
    /// Only `' '`.
    pub spaces: usize,
    /// Anything that is not alphanumeric or whitespace.
    pub punctuation: usize,
}

impl CharacterBreakdown {
    pub fn of(text: &str) -> Self {
        let mut breakdown = Self::default();
        for c in text.chars() {
            if c.is_alphabetic() {
                breakdown.alphabetic += 1;
            } else if c.is_numeric() {
                breakdown.numeric += 1;
            } else if c.is_whitespace() {
                breakdown.whitespace += 1;
                if c == ' ' {
                    breakdown.spaces += 1;
                }
            } else {
                breakdown.punctuation += 1;
            }
        }
        breakdown
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub word_count: usize,
    pub unique_word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Characters including whitespace.
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub characters: CharacterBreakdown,
    /// Mean characters per word.
    pub average_word_length: f64,
    /// Mean words per sentence.
    pub average_sentence_length: f64,
    pub reading_time_minutes: u64,
    pub words_per_minute: u32,
}

impl Statistics {
    /// Aggregate counts over already tokenized `text`.
    pub fn from_tokens(
        text: &str,
        tokens: &Tokens,
        words_per_minute: u32,
    ) -> Result<Self, WordStatError> {
        validate_words_per_minute(words_per_minute)?;
        Ok(Self::aggregate(text, tokens, words_per_minute))
    }

    // Callers must have validated `words_per_minute`.
    pub(crate) fn aggregate(text: &str, tokens: &Tokens, words_per_minute: u32) -> Self {
        let word_count = tokens.words.len();
        let sentence_count = tokens.sentences.len();
        let unique_word_count = tokens
            .words
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len();
        let characters = CharacterBreakdown::of(text);
        let character_count = text.chars().count();
        let letters_in_words: usize = tokens.words.iter().map(|w| w.chars().count()).sum();

        Self {
            word_count,
            unique_word_count,
            sentence_count,
            paragraph_count: tokens.paragraphs.len(),
            character_count,
            character_count_no_spaces: character_count - characters.whitespace,
            characters,
            average_word_length: ratio(letters_in_words, word_count),
            average_sentence_length: ratio(word_count, sentence_count),
            reading_time_minutes: reading_time_minutes(word_count, words_per_minute),
            words_per_minute,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Whole minutes needed to read `word_count` words, rounded up.
///
/// Any non-empty text takes at least one minute. `words_per_minute` must
/// be positive; a zero rate yields zero minutes.
pub fn reading_time_minutes(word_count: usize, words_per_minute: u32) -> u64 {
    if word_count == 0 || words_per_minute == 0 {
        return 0;
    }
    (word_count as u64).div_ceil(u64::from(words_per_minute))
}
