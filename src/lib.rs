//! # Lexiclean
//!
//! A deterministic text normalization pipeline for feeding sequence models.
//!
//! ## Features
//!
//! - Fixed, ordered cleaning stages built from composable char filters,
//!   a tokenizer and token filters
//! - Frequency-based vocabulary trimming learned once from training data
//! - Persistable state so training and inference clean text identically
//! - A small serving boundary for plugging in a sentiment classifier

pub mod analysis;
pub mod cli;
pub mod error;
pub mod normalize;
pub mod serving;

pub mod prelude {
    pub use crate::error::{LexicleanError, Result};
    pub use crate::normalize::{
        EMPTY_PLACEHOLDER, NormalizeMode, Normalizer, NormalizerConfig, NormalizerState,
    };
    pub use crate::serving::{InferenceResponse, Predictor, SentimentClassifier};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
