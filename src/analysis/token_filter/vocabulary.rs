//! Removal vocabulary filter implementation.

use std::sync::Arc;

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;
use crate::normalize::vocabulary::RemovalVocabulary;

/// A filter that drops every token contained in a fitted
/// [`RemovalVocabulary`].
///
/// The vocabulary is shared, never copied, and never modified by the filter.
#[derive(Clone, Debug)]
pub struct VocabularyFilter {
    vocabulary: Arc<RemovalVocabulary>,
}

impl VocabularyFilter {
    /// Create a new vocabulary filter.
    pub fn new(vocabulary: Arc<RemovalVocabulary>) -> Self {
        VocabularyFilter { vocabulary }
    }

    /// The vocabulary this filter removes.
    pub fn vocabulary(&self) -> &RemovalVocabulary {
        &self.vocabulary
    }
}

impl Filter for VocabularyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        if self.vocabulary.is_empty() {
            return Ok(tokens);
        }
        let kept: Vec<Token> = tokens
            .filter(|token| !self.vocabulary.contains(&token.text))
            .collect();

        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "vocabulary"
    }
}
