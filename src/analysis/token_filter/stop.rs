//! Stop filter implementation.
//!
//! Removes common English function words whose presence carries little signal
//! for a sentiment model. Matching is exact: tokens are expected to be
//! lowercased already.
//!
//! # Examples
//!
//! ```
//! use lexiclean::analysis::token_filter::Filter;
//! use lexiclean::analysis::token_filter::stop::StopFilter;
//! use lexiclean::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = ["this", "film", "was", "great"].map(Token::new);
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "film");
//! assert_eq!(result[1].text, "great");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
///
/// Negations ("no", "not", "nor") are not part of the list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its",
    "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom",
    "this", "that", "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "if",
    "or", "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "into",
    "through", "during", "before", "after", "to", "from", "in", "out", "on", "off", "further",
    "then", "once", "here", "there", "when", "where", "why", "how", "all", "any", "both", "each",
    "other", "such", "only", "own", "same", "so", "than", "too", "can", "will", "just", "should",
    "now",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that drops stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexiclean::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("not"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use lexiclean::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let kept = tokens.filter(move |token| !stop_words.contains(&token.text));
        Ok(Box::new(kept))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn run(filter: &StopFilter, text: &str) -> Vec<String> {
        let tokens: Vec<Token> = text.split_whitespace().map(Token::new).collect();
        filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_review_keeps_content_words() {
        let filter = StopFilter::new();
        assert_eq!(
            run(&filter, "i thought this film was great and the cast too"),
            vec!["thought", "film", "great", "cast"]
        );
    }

    #[test]
    fn test_negations_survive() {
        let filter = StopFilter::new();
        assert_eq!(
            run(&filter, "it was not good and no one nor i liked it"),
            vec!["not", "good", "no", "one", "nor", "liked"]
        );
    }

    #[test]
    fn test_all_stop_words_leave_nothing() {
        let filter = StopFilter::new();
        assert!(run(&filter, "this is what we should have been").is_empty());
    }

    #[test]
    fn test_default_list() {
        let filter = StopFilter::new();
        assert_eq!(filter.len(), 106);
        assert_eq!(DEFAULT_ENGLISH_STOP_WORDS.len(), 106);
        assert!(filter.is_stop_word("i"));
        assert!(filter.is_stop_word("ourselves"));
        assert!(!filter.is_stop_word("not"));
        assert!(!filter.is_stop_word("The"));
    }

    #[test]
    fn test_custom_words_replace_default_list() {
        let filter = StopFilter::from_words(["movie", "film"]);
        assert_eq!(
            run(&filter, "the movie was a great film"),
            vec!["the", "was", "a", "great"]
        );
        assert!(!StopFilter::from_words(Vec::<String>::new()).is_stop_word("the"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
