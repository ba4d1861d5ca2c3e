//! Text analysis building blocks for Lexiclean.
//!
//! A record flows through char filters (whole-string rewrites), a tokenizer
//! and token filters. [`analyzer::PipelineAnalyzer`] wires the three together
//! for a single record; the batch-level normalizer in [`crate::normalize`]
//! drives it.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
