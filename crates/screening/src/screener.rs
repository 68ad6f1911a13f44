//! Screening Context

use crate::{RiskLevel, ScreeningError};
use artifact_store::{AffineScaler, ArtifactBundle};
use classifier::{Classifier, Prediction, SoftmaxClassifier};
use feature_pipeline::{FeatureAssembler, RawRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A completed screening
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screening {
    /// Risk level behind the predicted label
    pub risk: RiskLevel,
    /// The raw model prediction
    pub prediction: Prediction,
}

/// Outcome of a screening call that never fails.
///
/// Typed replacement for the "(none, 0.0)" sentinel the caller would
/// otherwise have to recognize by magic values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScreeningOutcome {
    /// The record was screened
    Completed(Screening),
    /// The pipeline failed internally; no partial result is reported
    Unavailable,
}

impl ScreeningOutcome {
    /// Whether a result is available
    pub fn is_available(&self) -> bool {
        matches!(self, ScreeningOutcome::Completed(_))
    }

    /// Reported confidence, 0.0 when unavailable
    pub fn confidence(&self) -> f64 {
        match self {
            ScreeningOutcome::Completed(screening) => screening.prediction.confidence,
            ScreeningOutcome::Unavailable => 0.0,
        }
    }
}

/// The screening pipeline behind one call: assemble, scale, classify.
///
/// Holds every piece of read-only state a screening needs, so callers never
/// depend on process globals. Build once at startup, share everywhere.
pub struct StressScreener {
    assembler: FeatureAssembler,
    scaler: AffineScaler,
    model: SoftmaxClassifier,
}

impl StressScreener {
    /// Build a screener from a loaded artifact bundle
    pub fn new(bundle: ArtifactBundle) -> Result<Self, ScreeningError> {
        let ArtifactBundle {
            mood_encoder,
            days_encoder,
            scaler,
            binary_map,
            schema,
            classifier: params,
        } = bundle;

        let assembler = FeatureAssembler::new(&schema, mood_encoder, days_encoder, binary_map)?;
        let model = SoftmaxClassifier::from_params(params)?;

        info!(
            columns = assembler.width(),
            classes = model.classes().len(),
            "stress screener ready"
        );
        Ok(Self {
            assembler,
            scaler,
            model,
        })
    }

    /// Screen one record, surfacing internal failures as typed errors.
    ///
    /// Recoverable input problems (unknown categories, missing answers)
    /// never reach this level; they are absorbed by the assembler's
    /// documented defaults.
    pub fn try_screen(&self, record: &RawRecord) -> Result<Screening, ScreeningError> {
        let mut features = self.assembler.assemble(record);
        self.scaler.transform(features.values_mut())?;
        let prediction = self.model.predict(&features)?;

        debug!(
            label = prediction.label,
            confidence = prediction.confidence,
            "record screened"
        );
        Ok(Screening {
            risk: RiskLevel::from_label(prediction.label),
            prediction,
        })
    }

    /// Screen one record without ever failing the caller.
    ///
    /// Internal failures are logged and reported as
    /// [`ScreeningOutcome::Unavailable`]; the caller decides how to present
    /// them.
    pub fn screen(&self, record: &RawRecord) -> ScreeningOutcome {
        match self.try_screen(record) {
            Ok(screening) => ScreeningOutcome::Completed(screening),
            Err(err) => {
                warn!(error = %err, "screening failed");
                ScreeningOutcome::Unavailable
            }
        }
    }
}
