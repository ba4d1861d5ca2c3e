//! Analyzers that combine char filters, a tokenizer and token filters.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexiclean::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use lexiclean::analysis::char_filter::lowercase::LowercaseCharFilter;
//! use lexiclean::analysis::token_filter::stop::StopFilter;
//! use lexiclean::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_char_filter(Arc::new(LowercaseCharFilter::new()))
//!     .add_filter(Arc::new(StopFilter::new()));
//!
//! assert_eq!(analyzer.analyze_to_string("The Plot Was Thin").unwrap(), "plot thin");
//! ```

use crate::analysis::token::{TokenStream, join_tokens};
use crate::error::Result;

mod pipeline;

pub use pipeline::PipelineAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across
/// threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Analyze the text and rejoin the surviving tokens with single spaces.
    fn analyze_to_string(&self, text: &str) -> Result<String> {
        Ok(join_tokens(self.analyze(text)?))
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
