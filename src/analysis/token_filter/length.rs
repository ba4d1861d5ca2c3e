//! Length band filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{LexicleanError, Result};

/// A filter that removes tokens whose character count lies inside
/// `[min_length, max_length]`.
///
/// The band names what is *removed*: with `min_length = 1, max_length = 1`
/// every single-character token is dropped, while tokens shorter than
/// `min_length` or longer than `max_length` survive.
///
/// # Examples
///
/// ```
/// use lexiclean::analysis::token_filter::Filter;
/// use lexiclean::analysis::token_filter::length::LengthBandFilter;
/// use lexiclean::analysis::token::Token;
///
/// let filter = LengthBandFilter::new(1, 2).unwrap();
/// let tokens = vec![Token::new("a"), Token::new("ok"), Token::new("fine")];
/// let kept: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
///
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].text, "fine");
/// ```
#[derive(Clone, Debug)]
pub struct LengthBandFilter {
    min_length: usize,
    max_length: usize,
}

impl LengthBandFilter {
    /// Create a new length band filter.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self> {
        if min_length > max_length {
            return Err(LexicleanError::configuration(format!(
                "min_length ({min_length}) must not exceed max_length ({max_length})"
            )));
        }
        Ok(LengthBandFilter {
            min_length,
            max_length,
        })
    }

    /// Lower bound of the removed band (inclusive).
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Upper bound of the removed band (inclusive).
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Check whether a token of this text would be removed.
    pub fn in_band(&self, text: &str) -> bool {
        let len = text.chars().count();
        self.min_length <= len && len <= self.max_length
    }
}

impl Filter for LengthBandFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens.filter(|token| !self.in_band(&token.text)).collect();

        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length_band"
    }
}
