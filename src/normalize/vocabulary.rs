//! Frequency-based removal vocabulary.
//!
//! The vocabulary is learned once from a training batch and then reused
//! unchanged for every later batch, so training and inference strip the same
//! words.

use std::collections::BTreeSet;

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::WhitespaceTokenizer;

/// A word and how often it occurs in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Rank every whitespace-delimited word of a batch by descending frequency.
///
/// Words with equal counts keep the order of their first occurrence in the
/// batch, so the ranking is deterministic for a given input.
pub fn rank_words<S: AsRef<str>>(records: &[S]) -> Vec<WordCount> {
    // word -> (count, first occurrence)
    let mut counts: AHashMap<&str, (usize, usize)> = AHashMap::new();
    let mut seen = 0usize;
    for record in records {
        for word in WhitespaceTokenizer::words(record.as_ref()) {
            let entry = counts.entry(word).or_insert((0, seen));
            entry.0 += 1;
            seen += 1;
        }
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .map(|(word, count, _)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Number of ranked words a fraction selects: `ceil(fraction * distinct)`.
fn take_count(fraction: f64, distinct: usize) -> usize {
    if fraction <= 0.0 {
        return 0;
    }
    ((fraction * distinct as f64).ceil() as usize).min(distinct)
}

/// The set of words stripped by the vocabulary stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovalVocabulary {
    words: BTreeSet<String>,
    top_fraction: f64,
    bottom_fraction: f64,
    fitted_at: DateTime<Utc>,
}

impl RemovalVocabulary {
    /// Learn a vocabulary from a training batch.
    ///
    /// Takes the `ceil(top_fraction * n)` most frequent and the
    /// `ceil(bottom_fraction * n)` least frequent of the `n` distinct words.
    /// Returns `None` when the batch contains no words at all.
    pub fn fit<S: AsRef<str>>(
        records: &[S],
        top_fraction: f64,
        bottom_fraction: f64,
    ) -> Option<Self> {
        let ranked = rank_words(records);
        let distinct = ranked.len();
        if distinct == 0 {
            return None;
        }

        let top = take_count(top_fraction, distinct);
        let bottom = take_count(bottom_fraction, distinct);

        let words = ranked[..top]
            .iter()
            .chain(ranked[distinct - bottom..].iter())
            .map(|wc| wc.word.clone())
            .collect();

        Some(Self {
            words,
            top_fraction,
            bottom_fraction,
            fitted_at: Utc::now(),
        })
    }

    /// Build a vocabulary from an explicit word list.
    pub fn from_words<I, S>(words: I, top_fraction: f64, bottom_fraction: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            top_fraction,
            bottom_fraction,
            fitted_at: Utc::now(),
        }
    }

    /// Check whether a word is removed.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The removed words in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of removed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary removes nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The top fraction this vocabulary was fit with.
    pub fn top_fraction(&self) -> f64 {
        self.top_fraction
    }

    /// The bottom fraction this vocabulary was fit with.
    pub fn bottom_fraction(&self) -> f64 {
        self.bottom_fraction
    }

    /// When the vocabulary was fit.
    pub fn fitted_at(&self) -> DateTime<Utc> {
        self.fitted_at
    }

    /// Whether this vocabulary was fit with the given fractions.
    pub fn fitted_with(&self, top_fraction: f64, bottom_fraction: f64) -> bool {
        self.top_fraction == top_fraction && self.bottom_fraction == bottom_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_words() {
        let ranked = rank_words(&["b a b", "c a b"]);
        let words: Vec<_> = ranked.iter().map(|wc| (wc.word.as_str(), wc.count)).collect();
        assert_eq!(words, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_rank_ties_follow_first_occurrence() {
        let ranked = rank_words(&["z y x", "x y z"]);
        let words: Vec<_> = ranked.iter().map(|wc| wc.word.as_str()).collect();
        assert_eq!(words, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_fit_top_and_bottom() {
        // ranking: good(4) movie(3) plot(2) acting(1) score(1)
        let records = [
            "good movie plot",
            "good movie acting",
            "good movie plot",
            "good score",
        ];
        let vocabulary = RemovalVocabulary::fit(&records, 0.2, 0.2).unwrap();
        let words: Vec<_> = vocabulary.words().collect();
        assert_eq!(words, vec!["good", "score"]);
        assert!(vocabulary.fitted_with(0.2, 0.2));
    }

    #[test]
    fn test_fit_rounds_up() {
        // 3 distinct words, 0.1 * 3 = 0.3 -> 1 word
        let vocabulary = RemovalVocabulary::fit(&["a a b c"], 0.1, 0.0).unwrap();
        assert_eq!(vocabulary.len(), 1);
        assert!(vocabulary.contains("a"));
    }

    #[test]
    fn test_fit_full_fraction_takes_everything() {
        let vocabulary = RemovalVocabulary::fit(&["a b c"], 1.0, 1.0).unwrap();
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn test_fit_without_words() {
        assert!(RemovalVocabulary::fit(&["", "  "], 0.5, 0.5).is_none());
        assert!(RemovalVocabulary::fit::<&str>(&[], 0.5, 0.5).is_none());
    }

    #[test]
    fn test_zero_fractions_fit_nothing() {
        let vocabulary = RemovalVocabulary::fit(&["a b"], 0.0, 0.0).unwrap();
        assert!(vocabulary.is_empty());
    }
}
