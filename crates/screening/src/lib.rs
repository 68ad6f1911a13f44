//! Stress Screening
//!
//! The screening context ties the trained artifacts, the feature assembler
//! and the classifier together behind a single call: one questionnaire
//! record in, one typed screening outcome out. Construction happens once at
//! process startup; the built screener is immutable and freely shareable
//! across threads.

mod intake;
mod risk;
mod screener;

pub use intake::record_from_form;
pub use risk::RiskLevel;
pub use screener::{Screening, ScreeningOutcome, StressScreener};

pub use feature_pipeline::RawRecord;

use thiserror::Error;

/// Errors during screener construction or a checked screening call
#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("Artifact error: {0}")]
    Artifact(#[from] artifact_store::ArtifactError),
    #[error("Feature pipeline error: {0}")]
    Pipeline(#[from] feature_pipeline::PipelineError),
    #[error("Inference error: {0}")]
    Inference(#[from] classifier::InferenceError),
}
