//! Stop Words
//!
//! Built-in stop-word lists per language, plus lists loaded from files.
//! A `StopWords` value is immutable once handed to an analyzer.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use super::config::Language;

/// Default English stop words: articles, conjunctions, prepositions,
/// auxiliaries, modals, demonstratives and personal pronouns.
pub static DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "can", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them", "my", "your", "his", "its", "our", "their",
];

/// Default Arabic stop words.
pub static DEFAULT_ARABIC_STOP_WORDS: &[&str] = &[
    // Particles and prepositions
    "من", "في", "على", "إلى", "عن", "مع", "بين", "حتى", "منذ",
    // Conjunctions
    "و", "أو", "ثم", "لكن", "بل", "أم", "إما", "لو", "لولا",
    // Pronouns
    "هو", "هي", "هم", "هن", "أنا", "نحن", "أنت", "أنتم", "أنتن",
    // Demonstratives
    "هذا", "هذه", "ذلك", "تلك", "هؤلاء", "أولئك",
    // Relative pronouns
    "الذي", "التي", "الذين", "اللواتي", "اللاتي",
    // Question words
    "ما", "ماذا", "أين", "متى", "كيف", "لماذا", "كم", "أي",
    // Auxiliary verbs
    "كان", "يكون", "كانت", "كانوا", "ليس", "ليست",
    // Common particles
    "قد", "لقد", "سوف", "لن", "لم", "لا", "إن", "أن", "إذا", "إذ",
];

/// Case-insensitive stop-word collection.
///
/// Entries are stored lower-cased, so `contains("The")` and
/// `contains("the")` agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Create an empty collection. Filtering with it keeps every token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a slice of words
    pub fn from_slice(words: &[&str]) -> Self {
        let mut sw = Self::new();
        sw.add_words(words);
        sw
    }

    /// Built-in English stop words
    pub fn english() -> Self {
        Self::from_slice(DEFAULT_ENGLISH_STOP_WORDS)
    }

    /// Built-in Arabic stop words
    pub fn arabic() -> Self {
        Self::from_slice(DEFAULT_ARABIC_STOP_WORDS)
    }

    /// Built-in list for `language`. `Language::None` yields an empty list.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Arabic => Self::arabic(),
            Language::None => Self::new(),
        }
    }

    /// Load stop words from a file (one word per line, `#` starts a comment
    /// line).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut sw = Self::new();
        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            sw.add(line);
        }
        info!(path = %path.display(), count = sw.len(), "loaded stop words");
        Ok(sw)
    }

    /// Add a stop word (stored lower-cased)
    pub fn add(&mut self, word: impl AsRef<str>) {
        self.words.insert(word.as_ref().to_lowercase());
    }

    /// Add multiple stop words
    pub fn add_words(&mut self, words: &[&str]) {
        for word in words {
            self.add(word);
        }
    }

    /// Remove a stop word, ignoring case
    pub fn remove(&mut self, word: &str) {
        self.words.remove(&word.to_lowercase());
    }

    /// Check if a word is a stop word
    pub fn contains(&self, word: &str) -> bool {
        // Tokens arrive already lower-cased; skip the allocation for them.
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }

    /// Number of stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored (lower-cased) stop words
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    /// Merge another stop word list into this one
    pub fn merge(&mut self, other: &StopWords) {
        self.words.extend(other.words.iter().cloned());
    }
}
