//! Word frequency tables.
//!
//! Counts are ranked by descending count; ties keep the order in which the
//! words first appeared, so identical input always ranks identically.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analyzers::StopWords;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Ranked word counts for one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
}

impl FrequencyTable {
    /// Count `words`, skipping stop words when `filter_stop_words` is set.
    pub fn from_words<S: AsRef<str>>(
        words: &[S],
        stop_words: &StopWords,
        filter_stop_words: bool,
    ) -> Self {
        // word -> position in `entries`, which is kept in first-seen order.
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<WordCount> = Vec::new();

        for word in words.iter().map(|w| w.as_ref()) {
            if filter_stop_words && stop_words.contains(word) {
                continue;
            }
            match index.get(word) {
                Some(&pos) => entries[pos].count += 1,
                None => {
                    index.insert(word, entries.len());
                    entries.push(WordCount {
                        word: word.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // Stable sort keeps first-appearance order among equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Keep at most `top_n` entries; `0` keeps everything.
    pub fn top(mut self, top_n: usize) -> Self {
        if top_n > 0 {
            self.entries.truncate(top_n);
        }
        self
    }

    pub fn most_common(&self, top_n: usize) -> &[WordCount] {
        if top_n == 0 {
            &self.entries
        } else {
            &self.entries[..top_n.min(self.entries.len())]
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.word.as_str())
    }

    pub fn as_pairs(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|entry| (entry.word.as_str(), entry.count))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
