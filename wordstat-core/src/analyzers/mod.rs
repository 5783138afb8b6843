//! Text Analyzers Module
//!
//! Configuration, stop-word lists and the analyzer that ties the
//! tokenizer, frequency, statistics and similarity stages together.

pub(crate) mod config;
mod stop_words;
mod text;

pub use config::{
    AnalyzerConfig, Language, CONFIG_ENV_VAR, DEFAULT_TOP_N, DEFAULT_WORDS_PER_MINUTE,
};
pub use stop_words::{StopWords, DEFAULT_ARABIC_STOP_WORDS, DEFAULT_ENGLISH_STOP_WORDS};
pub use text::TextAnalyzer;
