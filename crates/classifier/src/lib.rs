//! Stress Classifier
//!
//! Classifier abstraction over the trained model parameters, plus the
//! concrete softmax linear classifier the pipeline ships with.

mod model;

pub use model::{Classifier, Prediction, SoftmaxClassifier};

use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Malformed classifier parameters: {0}")]
    MalformedParams(String),
    #[error("Invalid input shape: expected {expected} features, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
}
