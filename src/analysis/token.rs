//! Token types for text analysis.
//!
//! A [`Token`] is one whitespace-delimited word of a record. Token filters
//! drop the words they reject; whatever survives is rejoined with single
//! spaces by [`join_tokens`].
//!
//! # Examples
//!
//! ```
//! use lexiclean::analysis::token::Token;
//!
//! let token = Token::new("crêpe");
//! assert_eq!(token.text, "crêpe");
//! assert_eq!(token.char_len(), 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single word of a record after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,
}

impl Token {
    /// Create a new token with the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }

    /// Length of the token in characters.
    ///
    /// Band checks count characters, not bytes, so multi-byte input that
    /// survives transliteration is measured the same way as ASCII.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Join the tokens of a stream with single spaces, skipping empty ones.
pub fn join_tokens(tokens: TokenStream) -> String {
    let mut joined = String::new();
    for token in tokens.filter(|t| !t.is_empty()) {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(&token.text);
    }
    joined
}
