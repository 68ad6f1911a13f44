//! Classifier Implementation

use crate::InferenceError;
use artifact_store::ClassifierParams;
use feature_pipeline::FeatureVector;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Confidence reported when the model cannot produce probabilities.
///
/// Signals "probability unavailable", not a measured value.
pub const NO_PROBABILITY_CONFIDENCE: f64 = 0.5;

/// Prediction from one inference call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted class label
    pub label: i64,
    /// Confidence score (0.0 to 1.0)
    pub confidence: f64,
    /// Per-class probabilities, when the model exposes them
    pub probabilities: Option<Vec<f64>>,
}

/// A trained classifier over scaled feature vectors
pub trait Classifier: Send + Sync {
    /// Class labels in score order
    fn classes(&self) -> &[i64];

    /// Number of features the model expects
    fn num_features(&self) -> usize;

    /// Per-class decision scores
    fn decision(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;

    /// Per-class probabilities, or `None` when the model cannot produce
    /// them
    fn probabilities(&self, features: &[f64]) -> Result<Option<Vec<f64>>, InferenceError>;

    /// Classify a feature vector.
    ///
    /// With probabilities available, the label is the arg-max class and the
    /// confidence its probability. Otherwise the label comes from the
    /// decision scores with a fixed [`NO_PROBABILITY_CONFIDENCE`].
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, InferenceError> {
        let values = features.values();
        if let Some(probabilities) = self.probabilities(values)? {
            let (best, confidence) = arg_max(&probabilities);
            debug!(label = self.classes()[best], confidence, "probability prediction");
            return Ok(Prediction {
                label: self.classes()[best],
                confidence,
                probabilities: Some(probabilities),
            });
        }

        let scores = self.decision(values)?;
        let (best, _) = arg_max(&scores);
        debug!(label = self.classes()[best], "decision-only prediction");
        Ok(Prediction {
            label: self.classes()[best],
            confidence: NO_PROBABILITY_CONFIDENCE,
            probabilities: None,
        })
    }
}

fn arg_max(scores: &[f64]) -> (usize, f64) {
    let mut best = 0;
    for (idx, &score) in scores.iter().enumerate() {
        if score > scores[best] {
            best = idx;
        }
    }
    (best, scores[best])
}

/// Softmax linear classifier evaluated from exported training parameters.
///
/// Multi-class models carry one coefficient row per class; binary models
/// may carry a single row, scored through the sigmoid complement pair.
#[derive(Debug, Clone)]
pub struct SoftmaxClassifier {
    classes: Vec<i64>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    probability: bool,
    num_features: usize,
}

impl SoftmaxClassifier {
    /// Build a classifier from exported parameters
    pub fn from_params(params: ClassifierParams) -> Result<Self, InferenceError> {
        if params.classes.len() < 2 {
            return Err(InferenceError::MalformedParams(format!(
                "expected at least 2 classes, got {}",
                params.classes.len()
            )));
        }
        if params.coefficients.is_empty() {
            return Err(InferenceError::MalformedParams(
                "no coefficient rows".to_string(),
            ));
        }
        if params.coefficients.len() != params.intercepts.len() {
            return Err(InferenceError::MalformedParams(format!(
                "{} coefficient rows but {} intercepts",
                params.coefficients.len(),
                params.intercepts.len()
            )));
        }
        let single_row_binary = params.coefficients.len() == 1 && params.classes.len() == 2;
        if !single_row_binary && params.coefficients.len() != params.classes.len() {
            return Err(InferenceError::MalformedParams(format!(
                "{} coefficient rows for {} classes",
                params.coefficients.len(),
                params.classes.len()
            )));
        }

        let num_features = params.coefficients[0].len();
        if params.coefficients.iter().any(|row| row.len() != num_features) {
            return Err(InferenceError::MalformedParams(
                "ragged coefficient rows".to_string(),
            ));
        }

        Ok(Self {
            classes: params.classes,
            coefficients: params.coefficients,
            intercepts: params.intercepts,
            probability: params.probability,
            num_features,
        })
    }

    fn check_width(&self, features: &[f64]) -> Result<(), InferenceError> {
        if features.len() != self.num_features {
            return Err(InferenceError::InvalidInputShape {
                expected: self.num_features,
                actual: features.len(),
            });
        }
        Ok(())
    }

    fn raw_scores(&self, features: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter().zip(features).map(|(c, x)| c * x).sum::<f64>() + intercept
            })
            .collect()
    }
}

impl Classifier for SoftmaxClassifier {
    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn num_features(&self) -> usize {
        self.num_features
    }

    fn decision(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        self.check_width(features)?;
        let scores = self.raw_scores(features);
        if scores.len() == 1 {
            // Single-row binary form: the negative class mirrors the score
            return Ok(vec![-scores[0], scores[0]]);
        }
        Ok(scores)
    }

    fn probabilities(&self, features: &[f64]) -> Result<Option<Vec<f64>>, InferenceError> {
        self.check_width(features)?;
        if !self.probability {
            return Ok(None);
        }
        let scores = self.raw_scores(features);
        if scores.len() == 1 {
            let p = sigmoid(scores[0]);
            return Ok(Some(vec![1.0 - p, p]));
        }
        Ok(Some(softmax(&scores)))
    }
}

fn sigmoid(score: f64) -> f64 {
    1.0 / (1.0 + (-score).exp())
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    // Shift by the max score so the exponentials cannot overflow
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.iter().map(|e| e / total).collect()
}
