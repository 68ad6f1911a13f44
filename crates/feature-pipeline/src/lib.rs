//! Feature Pipeline
//!
//! Turns one raw questionnaire record into a fixed-width feature vector in
//! the exact column order the classifier was trained against: weekday and
//! cyclic time encoding, ordinal and binary answer encoding with documented
//! fallbacks, then schema-ordered assembly with precomputed one-hot slots.

mod assembler;
mod record;
mod time;

pub use assembler::{
    FeatureAssembler, FeatureVector, DAYS_INDOORS_FALLBACK, MOOD_SWINGS_FALLBACK,
};
pub use record::{RawRecord, BINARY_FIELDS, CATEGORICAL_FIELDS};
pub use time::{cyclic_pair, encode_weekday, CyclicFeatures, WEEKDAYS};

use thiserror::Error;

/// Errors while building the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The documented fallback category was never trained, so unknown
    /// answers could not degrade safely
    #[error("Fallback category {fallback:?} for {field} is not in the trained vocabulary")]
    FallbackNotTrained {
        field: &'static str,
        fallback: &'static str,
    },
}
