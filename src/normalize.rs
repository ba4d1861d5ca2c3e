//! Batch text normalization.
//!
//! [`Normalizer`] runs every record of a batch through a fixed sequence of
//! stages:
//!
//! 1. lowercasing
//! 2. transliteration to plain ASCII
//! 3. URL removal
//! 4. contraction expansion
//! 5. punctuation removal (optional)
//! 6. digit removal (optional)
//! 7. stop word removal (optional)
//! 8. length band removal (optional)
//! 9. frequency trimming against a learned vocabulary (optional)
//!
//! Records that end up empty are replaced with [`EMPTY_PLACEHOLDER`].

pub mod config;
pub mod mode;
pub mod normalizer;
pub mod state;
pub mod vocabulary;

pub use config::NormalizerConfig;
pub use mode::NormalizeMode;
pub use normalizer::{Normalizer, text_records};
pub use state::NormalizerState;
pub use vocabulary::{RemovalVocabulary, WordCount, rank_words};

/// Substituted for any record that normalizes to nothing.
pub const EMPTY_PLACEHOLDER: &str = "this is an empty message";
