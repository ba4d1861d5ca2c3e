use lexiclean::error::{LexicleanError, Result};
use lexiclean::normalize::{NormalizeMode, Normalizer, NormalizerConfig, NormalizerState};
use lexiclean::serving::{InferenceResponse, Predictor, SentimentClassifier};

use std::sync::Arc;
use tempfile::tempdir;

const TRAINING: [&str; 4] = [
    "The plot was great and the cast was great!",
    "Great soundtrack, weak plot.",
    "I couldn't stop watching, the cast is superb",
    "Weak ending but a great ride",
];

const INFERENCE: [&str; 2] = [
    "A great cast saves a weak script",
    "Visit https://reviews.example.com for more great reviews",
];

fn fitted() -> Result<Normalizer> {
    let config = NormalizerConfig::new()
        .with_top_fraction(0.1)
        .with_bottom_fraction(0.1);
    let normalizer = Normalizer::new(config)?;
    normalizer.normalize(&TRAINING, NormalizeMode::FitAndApply)?;
    assert!(normalizer.is_fitted());
    Ok(normalizer)
}

#[test]
fn test_json_state_reproduces_output() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("state.json");

    let original = fitted()?;
    original.state().save(&path)?;

    let restored = Normalizer::from_state(NormalizerState::load(&path)?)?;
    assert!(restored.is_fitted());
    assert_eq!(
        restored.normalize(&INFERENCE, NormalizeMode::ApplyOnly)?,
        original.normalize(&INFERENCE, NormalizeMode::ApplyOnly)?
    );
    assert_eq!(restored.state(), original.state());
    Ok(())
}

#[test]
fn test_binary_state_reproduces_output() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("state.bin");

    let original = fitted()?;
    original.state().save(&path)?;

    let restored = Normalizer::from_state(NormalizerState::load(&path)?)?;
    assert_eq!(
        restored.normalize(&INFERENCE, NormalizeMode::ApplyOnly)?,
        original.normalize(&INFERENCE, NormalizeMode::ApplyOnly)?
    );
    Ok(())
}

#[test]
fn test_unfitted_state_round_trips() -> Result<()> {
    let state = Normalizer::new(NormalizerConfig::new().with_remove_digits(false))?.state();
    assert!(state.vocabulary.is_none());

    let restored = NormalizerState::from_bytes(&state.to_bytes()?)?;
    assert_eq!(restored, state);
    assert!(!Normalizer::from_state(restored)?.is_fitted());
    Ok(())
}

#[test]
fn test_refit_with_different_fractions_is_rejected() -> Result<()> {
    let mut state = fitted()?.state();
    state.config.top_fraction = 0.3;

    let restored = Normalizer::from_state(state)?;
    // applying is still fine
    restored.normalize(&INFERENCE, NormalizeMode::ApplyOnly)?;

    let result = restored.normalize(&TRAINING, NormalizeMode::FitAndApply);
    assert!(matches!(result, Err(LexicleanError::Configuration(_))));
    Ok(())
}

#[test]
fn test_refit_with_same_fractions_keeps_vocabulary() -> Result<()> {
    let original = fitted()?;
    let restored = Normalizer::from_state(original.state())?;

    restored.normalize(&INFERENCE, NormalizeMode::FitAndApply)?;
    assert_eq!(restored.vocabulary(), original.vocabulary());
    Ok(())
}

#[test]
fn test_corrupt_state_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json")?;

    assert!(matches!(
        NormalizerState::load(&path),
        Err(LexicleanError::Json(_))
    ));
    Ok(())
}

struct Positive;

impl SentimentClassifier for Positive {
    fn predict(&self, cleaned: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        Ok(cleaned.iter().map(|_| vec![0.25, 0.75]).collect())
    }

    fn name(&self) -> &str {
        "positive"
    }
}

#[test]
fn test_predictor_with_restored_state() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("state.json");
    fitted()?.state().save(&path)?;

    let normalizer = Arc::new(Normalizer::from_state(NormalizerState::load(&path)?)?);
    let predictor = Predictor::new(normalizer, Arc::new(Positive));

    let response = predictor.infer(INFERENCE[0]);
    assert_eq!(response.best(), Some(("positive", 75.0)));
    assert!(matches!(response, InferenceResponse::Prediction { .. }));
    Ok(())
}
