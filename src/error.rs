//! Error types for the Lexiclean library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexicleanError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexiclean::error::{LexicleanError, Result};
//!
//! fn check_band(min: usize, max: usize) -> Result<()> {
//!     if min > max {
//!         return Err(LexicleanError::configuration("min_length exceeds max_length"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_band(3, 1).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexiclean operations.
///
/// Errors are local to the call that produced them: the normalizer never
/// returns a partially processed batch.
#[derive(Error, Debug)]
pub enum LexicleanError {
    /// A record or argument handed to the pipeline is not usable text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Normalizer options are inconsistent or conflict with fitted state.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A pipeline stage could not be built or run.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (state files, input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary state encoding errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexicleanError.
pub type Result<T> = std::result::Result<T, LexicleanError>;

impl LexicleanError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        LexicleanError::InvalidInput(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        LexicleanError::Configuration(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexicleanError::Analysis(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        LexicleanError::Serialization(msg.into())
    }
}

impl From<bincode::Error> for LexicleanError {
    fn from(err: bincode::Error) -> Self {
        LexicleanError::Serialization(err.to_string())
    }
}
