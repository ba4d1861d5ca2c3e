use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;
use serde_json::Value;

use super::EMPTY_PLACEHOLDER;
use super::config::NormalizerConfig;
use super::mode::NormalizeMode;
use super::state::NormalizerState;
use super::vocabulary::RemovalVocabulary;
use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::transliterate::TransliterateCharFilter;
use crate::analysis::char_filter::url::UrlCharFilter;
use crate::analysis::token_filter::length::LengthBandFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::vocabulary::VocabularyFilter;
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::{LexicleanError, Result};

/// Batch text normalizer.
///
/// Runs every record through the fixed stage sequence and, in
/// [`NormalizeMode::FitAndApply`], learns the removal vocabulary from the
/// first batch that contains words. The vocabulary never changes afterwards.
///
/// `Normalizer` is `Send + Sync`; share it behind an `Arc`. Concurrent fit
/// attempts are serialized and only the first one learns.
///
/// # Examples
///
/// ```
/// use lexiclean::normalize::{NormalizeMode, Normalizer, NormalizerConfig};
///
/// let normalizer = Normalizer::new(NormalizerConfig::default()).unwrap();
/// let cleaned = normalizer
///     .normalize(&["I don't think it's right!", "!!! ???"], NormalizeMode::ApplyOnly)
///     .unwrap();
///
/// assert_eq!(cleaned, vec!["not think right", "this is an empty message"]);
/// ```
pub struct Normalizer {
    config: NormalizerConfig,
    analyzer: PipelineAnalyzer,
    vocabulary: RwLock<Option<Arc<RemovalVocabulary>>>,
}

impl Normalizer {
    /// Create an unfitted normalizer.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = build_analyzer(&config)?;
        debug!("built normalizer stages: {:?}", analyzer.stage_names());
        Ok(Self {
            config,
            analyzer,
            vocabulary: RwLock::new(None),
        })
    }

    /// Rebuild a normalizer from persisted state.
    pub fn from_state(state: NormalizerState) -> Result<Self> {
        let normalizer = Self::new(state.config)?;
        *normalizer.vocabulary.write() = state.vocabulary.map(Arc::new);
        Ok(normalizer)
    }

    /// The configuration this normalizer was built with.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Whether the removal vocabulary has been learned (or loaded).
    pub fn is_fitted(&self) -> bool {
        self.vocabulary.read().is_some()
    }

    /// The current removal vocabulary, if fitted.
    pub fn vocabulary(&self) -> Option<Arc<RemovalVocabulary>> {
        self.vocabulary.read().clone()
    }

    /// Snapshot configuration and vocabulary for persistence.
    pub fn state(&self) -> NormalizerState {
        NormalizerState::new(
            self.config.clone(),
            self.vocabulary().map(|v| v.as_ref().clone()),
        )
    }

    /// Normalize a batch of records.
    ///
    /// The output has one non-empty record per input record, in input order.
    pub fn normalize<S: AsRef<str>>(
        &self,
        batch: &[S],
        mode: NormalizeMode,
    ) -> Result<Vec<String>> {
        debug!("normalizing {} records ({mode})", batch.len());

        let analyzed = batch
            .iter()
            .map(|record| self.analyzer.analyze_to_string(record.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        if mode.fits() {
            self.fit(&analyzed)?;
        }

        let trimmed = match self.vocabulary() {
            Some(vocabulary) if !vocabulary.is_empty() => {
                self.apply_vocabulary(analyzed, vocabulary)?
            }
            _ => analyzed,
        };

        Ok(trimmed.into_iter().map(finalize).collect())
    }

    /// Normalize a single inference record.
    pub fn normalize_one(&self, text: &str) -> Result<String> {
        let mut cleaned = self.normalize(&[text], NormalizeMode::ApplyOnly)?;
        cleaned
            .pop()
            .ok_or_else(|| LexicleanError::analysis("normalizer returned an empty batch"))
    }

    /// Normalize a batch of JSON values, which must all be strings.
    pub fn normalize_values(&self, values: &[Value], mode: NormalizeMode) -> Result<Vec<String>> {
        let batch = text_records(values)?;
        self.normalize(&batch, mode)
    }

    /// Learn the removal vocabulary unless already fitted.
    fn fit(&self, analyzed: &[String]) -> Result<()> {
        let top = self.config.top_fraction;
        let bottom = self.config.bottom_fraction;

        if let Some(existing) = self.vocabulary.read().as_ref() {
            return check_refit(existing, top, bottom);
        }
        if !self.config.trims_vocabulary() {
            return Ok(());
        }

        let mut guard = self.vocabulary.write();
        // another caller may have fit while we waited for the write lock
        if let Some(existing) = guard.as_ref() {
            return check_refit(existing, top, bottom);
        }
        match RemovalVocabulary::fit(analyzed, top, bottom) {
            Some(vocabulary) => {
                info!(
                    "fitted removal vocabulary: {} words (top {top}, bottom {bottom})",
                    vocabulary.len()
                );
                *guard = Some(Arc::new(vocabulary));
            }
            None => debug!("training batch has no words; vocabulary left unfitted"),
        }
        Ok(())
    }

    fn apply_vocabulary(
        &self,
        analyzed: Vec<String>,
        vocabulary: Arc<RemovalVocabulary>,
    ) -> Result<Vec<String>> {
        let trimmer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(VocabularyFilter::new(vocabulary)))
            .with_name("vocabulary");
        analyzed
            .iter()
            .map(|record| trimmer.analyze_to_string(record))
            .collect()
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("config", &self.config)
            .field("stages", &self.analyzer.stage_names())
            .field("fitted", &self.is_fitted())
            .finish()
    }
}

/// Stages 1-8 for one record.
fn build_analyzer(config: &NormalizerConfig) -> Result<PipelineAnalyzer> {
    let mut analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
        .add_char_filter(Arc::new(LowercaseCharFilter::new()))
        .add_char_filter(Arc::new(TransliterateCharFilter::new()))
        .add_char_filter(Arc::new(UrlCharFilter::new()?))
        .add_char_filter(Arc::new(MappingCharFilter::english_contractions()));

    if config.remove_punctuation {
        analyzer = analyzer.add_char_filter(Arc::new(MappingCharFilter::punctuation()));
    }
    if config.remove_digits {
        analyzer = analyzer.add_char_filter(Arc::new(PatternReplaceCharFilter::digits()?));
    }
    if config.remove_stop_words {
        analyzer = analyzer.add_filter(Arc::new(StopFilter::new()));
    }
    if config.remove_short_words {
        analyzer = analyzer.add_filter(Arc::new(LengthBandFilter::new(
            config.min_length,
            config.max_length,
        )?));
    }

    Ok(analyzer.with_name("normalizer"))
}

fn check_refit(existing: &RemovalVocabulary, top: f64, bottom: f64) -> Result<()> {
    if existing.fitted_with(top, bottom) {
        return Ok(());
    }
    Err(LexicleanError::configuration(format!(
        "vocabulary already fitted with top_fraction {} and bottom_fraction {}; refusing to refit with {top} and {bottom}",
        existing.top_fraction(),
        existing.bottom_fraction()
    )))
}

fn finalize(record: String) -> String {
    let trimmed = record.trim();
    if trimmed.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else if trimmed.len() == record.len() {
        record
    } else {
        trimmed.to_string()
    }
}

/// Extract string records from JSON values.
pub fn text_records(values: &[Value]) -> Result<Vec<String>> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(LexicleanError::invalid_input(format!(
                "record {i} is not text: {other}"
            ))),
        })
        .collect()
}
