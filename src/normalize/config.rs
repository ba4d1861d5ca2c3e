//! Configuration for the text normalizer.

use serde::{Deserialize, Serialize};

use crate::error::{LexicleanError, Result};

/// Options fixed when a [`Normalizer`](super::Normalizer) is built.
///
/// Defaults enable every optional stage, remove single-character tokens and
/// disable frequency trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Replace ASCII punctuation with spaces.
    pub remove_punctuation: bool,

    /// Replace decimal digits with spaces.
    pub remove_digits: bool,

    /// Drop stop words.
    pub remove_stop_words: bool,

    /// Drop tokens whose length lies in `[min_length, max_length]`.
    pub remove_short_words: bool,

    /// Lower bound of the removed length band (inclusive, in characters).
    pub min_length: usize,

    /// Upper bound of the removed length band (inclusive, in characters).
    pub max_length: usize,

    /// Fraction of the most frequent training words to remove.
    pub top_fraction: f64,

    /// Fraction of the least frequent training words to remove.
    pub bottom_fraction: f64,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            remove_punctuation: true,
            remove_digits: true,
            remove_stop_words: true,
            remove_short_words: true,
            min_length: 1,
            max_length: 1,
            top_fraction: 0.0,
            bottom_fraction: 0.0,
        }
    }
}

impl NormalizerConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable punctuation removal.
    pub fn with_remove_punctuation(mut self, enabled: bool) -> Self {
        self.remove_punctuation = enabled;
        self
    }

    /// Enable or disable digit removal.
    pub fn with_remove_digits(mut self, enabled: bool) -> Self {
        self.remove_digits = enabled;
        self
    }

    /// Enable or disable stop word removal.
    pub fn with_remove_stop_words(mut self, enabled: bool) -> Self {
        self.remove_stop_words = enabled;
        self
    }

    /// Enable or disable length band removal.
    pub fn with_remove_short_words(mut self, enabled: bool) -> Self {
        self.remove_short_words = enabled;
        self
    }

    /// Set the removed length band.
    pub fn with_length_band(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Set the fraction of most frequent words to remove.
    pub fn with_top_fraction(mut self, fraction: f64) -> Self {
        self.top_fraction = fraction;
        self
    }

    /// Set the fraction of least frequent words to remove.
    pub fn with_bottom_fraction(mut self, fraction: f64) -> Self {
        self.bottom_fraction = fraction;
        self
    }

    /// Whether a fit-and-apply run should learn a removal vocabulary.
    pub fn trims_vocabulary(&self) -> bool {
        self.top_fraction > 0.0 || self.bottom_fraction > 0.0
    }

    /// Check the configuration for consistency.
    pub fn validate(&self) -> Result<()> {
        if self.min_length > self.max_length {
            return Err(LexicleanError::configuration(format!(
                "min_length ({}) must not exceed max_length ({})",
                self.min_length, self.max_length
            )));
        }
        check_fraction("top_fraction", self.top_fraction)?;
        check_fraction("bottom_fraction", self.bottom_fraction)?;
        Ok(())
    }
}

fn check_fraction(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(LexicleanError::configuration(format!(
            "{name} must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NormalizerConfig::default();
        assert!(config.remove_punctuation);
        assert!(config.remove_digits);
        assert!(config.remove_stop_words);
        assert!(config.remove_short_words);
        assert_eq!((config.min_length, config.max_length), (1, 1));
        assert!(!config.trims_vocabulary());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = NormalizerConfig::new()
            .with_remove_digits(false)
            .with_length_band(2, 3)
            .with_top_fraction(0.1);
        assert!(!config.remove_digits);
        assert_eq!(config.min_length, 2);
        assert!(config.trims_vocabulary());
    }

    #[test]
    fn test_invalid_band() {
        let config = NormalizerConfig::new().with_length_band(4, 2);
        assert!(matches!(
            config.validate(),
            Err(LexicleanError::Configuration(_))
        ));
    }

    #[test]
    fn test_invalid_fractions() {
        for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(NormalizerConfig::new().with_top_fraction(bad).validate().is_err());
            assert!(NormalizerConfig::new().with_bottom_fraction(bad).validate().is_err());
        }
        assert!(NormalizerConfig::new().with_top_fraction(1.0).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: NormalizerConfig = serde_json::from_str(r#"{"top_fraction": 0.2}"#).unwrap();
        assert_eq!(config.top_fraction, 0.2);
        assert!(config.remove_stop_words);
        assert_eq!(config.max_length, 1);
    }
}
