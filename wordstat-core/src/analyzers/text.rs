//! Text Analyzer
//!
//! Runs the tokenize → count → compare pipeline with one validated
//! configuration and one injected stop-word list.

use std::collections::BTreeSet;

use tracing::debug;

use super::config::{AnalyzerConfig, Language};
use super::stop_words::StopWords;
use crate::frequency::FrequencyTable;
use crate::report::{TextComparison, TextReport};
use crate::similarity::SimilarityResult;
use crate::statistics::Statistics;
use crate::tokenizer::{self, Tokens};
use crate::WordStatError;

/// Stateless analyzer; safe to share across threads.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    config: AnalyzerConfig,
    stop_words: StopWords,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            stop_words: StopWords::english(),
        }
    }
}

impl TextAnalyzer {
    /// Validate `config` and load its stop words, from
    /// `config.stop_words_file` when set or the built-in list otherwise.
    pub fn new(config: AnalyzerConfig) -> Result<Self, WordStatError> {
        config.validate()?;
        let stop_words = match &config.stop_words_file {
            Some(path) => StopWords::from_file(path)?,
            None => StopWords::for_language(config.language),
        };
        Ok(Self { config, stop_words })
    }

    /// Use `stop_words` instead of whatever `config` would load.
    pub fn with_stop_words(
        config: AnalyzerConfig,
        stop_words: StopWords,
    ) -> Result<Self, WordStatError> {
        config.validate()?;
        Ok(Self { config, stop_words })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn tokenize(&self, text: &str) -> Tokens {
        let tokens = tokenizer::tokenize(text);
        debug!(
            words = tokens.words.len(),
            sentences = tokens.sentences.len(),
            paragraphs = tokens.paragraphs.len(),
            "tokenized text"
        );
        tokens
    }

    pub fn statistics(&self, text: &str) -> Statistics {
        self.statistics_of(text, &self.tokenize(text))
    }

    fn statistics_of(&self, text: &str, tokens: &Tokens) -> Statistics {
        Statistics::aggregate(text, tokens, self.config.words_per_minute)
    }

    /// Ranked counts using the configured stop-word policy. `top_n == 0`
    /// returns every entry.
    pub fn frequency(&self, text: &str, top_n: usize) -> FrequencyTable {
        self.frequency_with(text, self.config.filter_stop_words, top_n)
    }

    pub fn frequency_with(
        &self,
        text: &str,
        filter_stop_words: bool,
        top_n: usize,
    ) -> FrequencyTable {
        let words = tokenizer::extract_words(text);
        FrequencyTable::from_words(&words, &self.stop_words, filter_stop_words).top(top_n)
    }

    /// Distinct words of `text` after stop-word filtering.
    pub fn vocabulary(&self, text: &str, filter_stop_words: bool) -> BTreeSet<String> {
        tokenizer::extract_words(text)
            .into_iter()
            .filter(|word| !(filter_stop_words && self.stop_words.contains(word)))
            .collect()
    }

    pub fn compare(&self, text_a: &str, text_b: &str) -> SimilarityResult {
        self.compare_with(text_a, text_b, self.config.filter_stop_words)
    }

    pub fn compare_with(
        &self,
        text_a: &str,
        text_b: &str,
        filter_stop_words: bool,
    ) -> SimilarityResult {
        let result = SimilarityResult::between(
            &self.vocabulary(text_a, filter_stop_words),
            &self.vocabulary(text_b, filter_stop_words),
        );
        debug!(
            score = result.score,
            shared = result.shared.len(),
            "compared texts"
        );
        result
    }

    /// Full report for one text: statistics, the complete frequency table
    /// and its top `config.top_n` entries.
    pub fn analyze(&self, text: &str) -> TextReport {
        let tokens = self.tokenize(text);
        let statistics = self.statistics_of(text, &tokens);
        let frequency = FrequencyTable::from_words(
            &tokens.words,
            &self.stop_words,
            self.config.filter_stop_words,
        );
        let most_common = frequency.most_common(self.config.top_n).to_vec();
        debug!(
            words = statistics.word_count,
            distinct = frequency.len(),
            "analyzed text"
        );
        TextReport {
            statistics,
            frequency,
            most_common,
            language: self.config.language,
            filter_stop_words: self.config.filter_stop_words,
        }
    }

    /// Statistics of both texts plus their similarity.
    pub fn compare_reports(&self, text_a: &str, text_b: &str) -> TextComparison {
        TextComparison {
            a: self.statistics(text_a),
            b: self.statistics(text_b),
            similarity: self.compare(text_a, text_b),
        }
    }
}
