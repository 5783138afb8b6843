//! # WordStat Core
//!
//! Text statistics engine: tokenization, word frequencies with stop-word
//! filtering, vocabulary similarity and reading-time estimates.
//!
//! Every analysis is a pure function of its input. The only failure is an
//! invalid configuration, reported before any work starts.
//!
//! ```rust
//! use wordstat_core::{compare_texts, word_frequency};
//!
//! let table = word_frequency("The cat sat. The cat ran!", true, 1);
//! assert_eq!(table.as_pairs(), vec![("cat", 2)]);
//!
//! let similarity = compare_texts("cat dog bird", "cat dog fish", false);
//! assert_eq!(similarity.score, 0.5);
//! ```

pub mod analyzers;
pub mod batch;
pub mod frequency;
pub mod report;
pub mod similarity;
pub mod statistics;
pub mod tokenizer;

pub use analyzers::{AnalyzerConfig, Language, StopWords, TextAnalyzer};
pub use batch::{analyze_batch, analyze_named};
pub use frequency::{FrequencyTable, WordCount};
pub use report::{TextComparison, TextReport};
pub use similarity::SimilarityResult;
pub use statistics::{CharacterBreakdown, Statistics};
pub use tokenizer::Tokens;

#[derive(Debug, thiserror::Error)]
pub enum WordStatError {
    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Split `text` into words, sentences and paragraphs.
pub fn tokenize(text: &str) -> Tokens {
    tokenizer::tokenize(text)
}

/// Counts, averages and reading time for `text`.
///
/// Fails only when `words_per_minute` is zero.
pub fn compute_statistics(text: &str, words_per_minute: u32) -> Result<Statistics, WordStatError> {
    Statistics::from_tokens(text, &tokenizer::tokenize(text), words_per_minute)
}

/// Ranked word counts using the built-in English stop words. `top_n == 0`
/// returns every entry.
pub fn word_frequency(text: &str, filter_stop_words: bool, top_n: usize) -> FrequencyTable {
    TextAnalyzer::default().frequency_with(text, filter_stop_words, top_n)
}

/// Jaccard similarity of the vocabularies of two texts, using the built-in
/// English stop words.
pub fn compare_texts(text_a: &str, text_b: &str, filter_stop_words: bool) -> SimilarityResult {
    TextAnalyzer::default().compare_with(text_a, text_b, filter_stop_words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_pipeline() {
        let tokens = tokenize("The cat sat. The cat ran!");
        assert_eq!(tokens.words, vec!["the", "cat", "sat", "the", "cat", "ran"]);
        assert_eq!(tokens.sentences.len(), 2);

        let stats = compute_statistics("The cat sat. The cat ran!", 200).unwrap();
        assert_eq!(stats.word_count, 6);

        let table = word_frequency("The cat sat. The cat ran!", true, 0);
        assert_eq!(table.as_pairs(), vec![("cat", 2), ("sat", 1), ("ran", 1)]);
    }

    #[test]
    fn test_invalid_words_per_minute() {
        let err = compute_statistics("hello", 0).unwrap_err();
        assert!(err.to_string().contains("words_per_minute"));
    }

    #[test]
    fn test_similarity_example() {
        let result = compare_texts("cat dog bird", "cat dog fish", false);
        assert_eq!(result.score, 0.5);
        assert_eq!(result.union_count(), 4);
    }
}
