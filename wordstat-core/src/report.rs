use serde::{Deserialize, Serialize};

use crate::analyzers::Language;
use crate::frequency::{FrequencyTable, WordCount};
use crate::similarity::SimilarityResult;
use crate::statistics::Statistics;

/// Everything known about one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextReport {
    pub statistics: Statistics,
    /// Every counted word, ranked.
    pub frequency: FrequencyTable,
    /// The first `top_n` entries of `frequency`.
    pub most_common: Vec<WordCount>,
    pub language: Language,
    pub filter_stop_words: bool,
}

/// Two texts side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextComparison {
    pub a: Statistics,
    pub b: Statistics,
    pub similarity: SimilarityResult,
}
