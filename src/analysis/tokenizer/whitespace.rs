//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::char_filter::is_separator;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Uses the same notion of whitespace as
/// [`collapse_whitespace`](crate::analysis::char_filter::collapse_whitespace),
/// so tokenizing and rejoining a collapsed record is the identity.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Split text into borrowed words without building tokens.
    pub fn words(text: &str) -> impl Iterator<Item = &str> {
        text.split(is_separator).filter(|word| !word.is_empty())
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = Self::words(text).map(Token::new).collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
