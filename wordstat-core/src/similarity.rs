//! Vocabulary similarity between two texts.
//!
//! The score is the Jaccard index over the sets of distinct words:
//! `|A ∩ B| / |A ∪ B|`. How often a word occurs does not matter, only
//! whether it occurs. Two empty vocabularies score `0.0`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Jaccard index in `[0.0, 1.0]`.
    pub score: f64,
    pub shared: BTreeSet<String>,
    pub unique_to_a: BTreeSet<String>,
    pub unique_to_b: BTreeSet<String>,
}

impl SimilarityResult {
    /// Compare two vocabularies.
    pub fn between(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Self {
        let shared: BTreeSet<String> = a.intersection(b).cloned().collect();
        let unique_to_a: BTreeSet<String> = a.difference(b).cloned().collect();
        let unique_to_b: BTreeSet<String> = b.difference(a).cloned().collect();

        let union = shared.len() + unique_to_a.len() + unique_to_b.len();
        let score = if union == 0 {
            0.0
        } else {
            shared.len() as f64 / union as f64
        };

        Self {
            score,
            shared,
            unique_to_a,
            unique_to_b,
        }
    }

    /// Compare the words present in two frequency tables.
    pub fn of_tables(a: &FrequencyTable, b: &FrequencyTable) -> Self {
        Self::between(&vocabulary(a), &vocabulary(b))
    }

    pub fn shared_count(&self) -> usize {
        self.shared.len()
    }

    pub fn union_count(&self) -> usize {
        self.shared.len() + self.unique_to_a.len() + self.unique_to_b.len()
    }

    /// The same comparison seen from the other side.
    pub fn swapped(self) -> Self {
        Self {
            score: self.score,
            shared: self.shared,
            unique_to_a: self.unique_to_b,
            unique_to_b: self.unique_to_a,
        }
    }
}

pub fn vocabulary(table: &FrequencyTable) -> BTreeSet<String> {
    table.words().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn half_overlap() {
        let result = SimilarityResult::between(
            &set(&["cat", "dog", "bird"]),
            &set(&["cat", "dog", "fish"]),
        );
        assert_eq!(result.shared, set(&["cat", "dog"]));
        assert_eq!(result.unique_to_a, set(&["bird"]));
        assert_eq!(result.unique_to_b, set(&["fish"]));
        assert_eq!(result.score, 0.5);
        assert_eq!(result.union_count(), 4);
    }

    #[test]
    fn empty_union_scores_zero() {
        let result = SimilarityResult::between(&BTreeSet::new(), &BTreeSet::new());
        assert_eq!(result.score, 0.0);
        assert!(result.shared.is_empty());
    }

    #[test]
    fn identical_and_disjoint() {
        let a = set(&["x", "y"]);
        assert_eq!(SimilarityResult::between(&a, &a).score, 1.0);
        assert_eq!(SimilarityResult::between(&a, &set(&["z"])).score, 0.0);
    }

    #[test]
    fn compares_precomputed_tables() {
        use crate::analyzers::StopWords;
        use crate::tokenizer::extract_words;

        let stop_words = StopWords::english();
        let words_a = extract_words("the cat and the dog");
        let words_b = extract_words("a dog, a dog, a dog");
        let a = FrequencyTable::from_words(&words_a, &stop_words, true);
        let b = FrequencyTable::from_words(&words_b, &stop_words, true);
        let result = SimilarityResult::of_tables(&a, &b);
        assert_eq!(result.shared, set(&["dog"]));
        assert_eq!(result.unique_to_a, set(&["cat"]));
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn swapping_sides_mirrors_unique_sets() {
        let a = set(&["one", "two"]);
        let b = set(&["two", "three", "four"]);
        let forward = SimilarityResult::between(&a, &b);
        let backward = SimilarityResult::between(&b, &a);
        assert_eq!(forward.clone().swapped(), backward);
        assert_eq!(forward.score, backward.score);
    }
}
