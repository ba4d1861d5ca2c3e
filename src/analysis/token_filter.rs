//! Token filter implementations for token transformation.
//!
//! Filters receive a stream of tokens and produce a new one. All filters in
//! this crate only ever remove tokens; they never reorder or rewrite them.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words
//! - [`length::LengthBandFilter`] - Removes tokens whose length falls inside a band
//! - [`vocabulary::VocabularyFilter`] - Removes words of a fitted removal vocabulary
//!
//! # Examples
//!
//! ```
//! use lexiclean::analysis::token_filter::Filter;
//! use lexiclean::analysis::token_filter::stop::StopFilter;
//! use lexiclean::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![Token::new("the"), Token::new("movie")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "movie");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so a built pipeline can be shared
/// between threads.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod length;
pub mod stop;
pub mod vocabulary;

pub use length::LengthBandFilter;
pub use stop::StopFilter;
pub use vocabulary::VocabularyFilter;
