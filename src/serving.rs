//! Inference boundary for sentiment classification.
//!
//! A [`Predictor`] cleans one text with an apply-only [`Normalizer`] and hands
//! the cleaned record to a caller-provided [`SentimentClassifier`]. Both are
//! injected at construction.

use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::normalize::Normalizer;

/// Class labels in the order classifiers report probabilities.
pub const SENTIMENT_LABELS: [&str; 2] = ["negative", "positive"];

/// Placeholder confidence reported with a failure.
const FAILURE_CONFIDENCE: &str = "-";

/// Sentiment classifier trait.
///
/// Implementations own token-id conversion, padding and the model itself.
pub trait SentimentClassifier: Send + Sync {
    /// Predict class probabilities for each cleaned record.
    ///
    /// # Arguments
    /// * `cleaned` - Normalized records
    ///
    /// # Returns
    /// One probability row per record, ordered like [`SENTIMENT_LABELS`].
    fn predict(&self, cleaned: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

/// The answer to one inference request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InferenceResponse {
    /// Labels with their confidences in percent.
    Prediction {
        result: Vec<String>,
        confidence: Vec<f64>,
    },

    /// The error text, with `"-"` as confidence.
    Failure { result: String, confidence: String },
}

impl InferenceResponse {
    /// Build a prediction from raw probabilities.
    pub fn from_probabilities(probabilities: &[f32]) -> Self {
        InferenceResponse::Prediction {
            result: SENTIMENT_LABELS.iter().map(|l| l.to_string()).collect(),
            confidence: probabilities.iter().map(|&p| to_percent(p)).collect(),
        }
    }

    /// Build a failure response.
    pub fn failure<S: Into<String>>(message: S) -> Self {
        InferenceResponse::Failure {
            result: message.into(),
            confidence: FAILURE_CONFIDENCE.to_string(),
        }
    }

    /// Whether this response carries a prediction.
    pub fn is_prediction(&self) -> bool {
        matches!(self, InferenceResponse::Prediction { .. })
    }

    /// The most confident label and its confidence.
    ///
    /// The first label wins a tie. Returns `None` for failures.
    pub fn best(&self) -> Option<(&str, f64)> {
        match self {
            InferenceResponse::Prediction { result, confidence } => {
                let mut best: Option<(usize, f64)> = None;
                for (i, &c) in confidence.iter().enumerate() {
                    if best.is_none_or(|(_, b)| c > b) {
                        best = Some((i, c));
                    }
                }
                best.and_then(|(i, c)| result.get(i).map(|label| (label.as_str(), c)))
            }
            InferenceResponse::Failure { .. } => None,
        }
    }
}

/// Probability to percent, rounded to two decimals.
fn to_percent(probability: f32) -> f64 {
    (f64::from(probability) * 100.0 * 100.0).round() / 100.0
}

/// Normalizer plus classifier, ready to answer requests.
#[derive(Clone)]
pub struct Predictor {
    normalizer: Arc<Normalizer>,
    classifier: Arc<dyn SentimentClassifier>,
}

impl Predictor {
    /// Create a predictor from already loaded resources.
    pub fn new(normalizer: Arc<Normalizer>, classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self {
            normalizer,
            classifier,
        }
    }

    /// The normalizer used for cleaning.
    pub fn normalizer(&self) -> &Arc<Normalizer> {
        &self.normalizer
    }

    /// Clean and classify one text. Never fails; errors become
    /// [`InferenceResponse::Failure`].
    pub fn infer(&self, text: &str) -> InferenceResponse {
        match self.try_infer(text) {
            Ok(response) => response,
            Err(e) => {
                warn!("inference failed: {e}");
                InferenceResponse::failure(e.to_string())
            }
        }
    }

    fn try_infer(&self, text: &str) -> anyhow::Result<InferenceResponse> {
        let cleaned = vec![self.normalizer.normalize_one(text)?];
        debug!("classifying {:?} with {}", cleaned[0], self.classifier.name());

        let rows = self.classifier.predict(&cleaned)?;
        let row = rows
            .first()
            .ok_or_else(|| anyhow::anyhow!("classifier returned no predictions"))?;
        if row.len() != SENTIMENT_LABELS.len() {
            anyhow::bail!(
                "classifier returned {} probabilities, expected {}",
                row.len(),
                SENTIMENT_LABELS.len()
            );
        }
        Ok(InferenceResponse::from_probabilities(row))
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("normalizer", &self.normalizer)
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NormalizerConfig;
    use parking_lot::Mutex;

    struct FixedClassifier {
        probabilities: Vec<f32>,
        seen: Mutex<Vec<String>>,
    }

    impl FixedClassifier {
        fn new(probabilities: Vec<f32>) -> Self {
            Self {
                probabilities,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl SentimentClassifier for FixedClassifier {
        fn predict(&self, cleaned: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
            self.seen.lock().extend(cleaned.iter().cloned());
            Ok(cleaned.iter().map(|_| self.probabilities.clone()).collect())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct BrokenClassifier;

    impl SentimentClassifier for BrokenClassifier {
        fn predict(&self, _cleaned: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
            anyhow::bail!("model not loaded")
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn normalizer() -> Arc<Normalizer> {
        Arc::new(Normalizer::new(NormalizerConfig::default()).unwrap())
    }

    #[test]
    fn test_infer() {
        let classifier = Arc::new(FixedClassifier::new(vec![0.123456, 0.876544]));
        let predictor = Predictor::new(normalizer(), classifier.clone());

        let response = predictor.infer("I LOVED this movie!!!");
        assert_eq!(
            response,
            InferenceResponse::Prediction {
                result: vec!["negative".to_string(), "positive".to_string()],
                confidence: vec![12.35, 87.65],
            }
        );
        assert_eq!(response.best(), Some(("positive", 87.65)));
        assert_eq!(*classifier.seen.lock(), vec!["loved movie".to_string()]);
    }

    #[test]
    fn test_classifier_error_becomes_failure() {
        let predictor = Predictor::new(normalizer(), Arc::new(BrokenClassifier));
        let response = predictor.infer("anything");
        assert_eq!(response, InferenceResponse::failure("model not loaded"));
        assert!(response.best().is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["confidence"], "-");
        assert_eq!(json["result"], "model not loaded");
    }

    #[test]
    fn test_wrong_width_is_failure() {
        let predictor = Predictor::new(normalizer(), Arc::new(FixedClassifier::new(vec![1.0])));
        assert!(!predictor.infer("good").is_prediction());
    }

    #[test]
    fn test_best_prefers_first_on_tie() {
        let response = InferenceResponse::from_probabilities(&[0.5, 0.5]);
        assert_eq!(response.best(), Some(("negative", 50.0)));
    }

    #[test]
    fn test_prediction_json_shape() {
        let response = InferenceResponse::from_probabilities(&[0.25, 0.75]);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"result":["negative","positive"],"confidence":[25.0,75.0]}"#
        );
        let parsed: InferenceResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
