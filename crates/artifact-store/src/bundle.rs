//! Artifact Bundle Loading

use crate::{AffineScaler, ArtifactError, ColumnSchema, OrdinalEncoder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Trained mapping from answer tokens to {0, 1}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinaryMap {
    entries: HashMap<String, f64>,
}

impl BinaryMap {
    /// Create a map from token/value pairs
    pub fn new(entries: HashMap<String, f64>) -> Self {
        Self { entries }
    }

    /// Binary value for a token, if mapped
    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }
}

/// Exported parameters of the trained classifier.
///
/// One coefficient row per class, or a single row for the binary sigmoid
/// parameterization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierParams {
    /// Class labels in score order
    pub classes: Vec<i64>,
    /// Per-class coefficient rows
    pub coefficients: Vec<Vec<f64>>,
    /// Per-row intercepts
    pub intercepts: Vec<f64>,
    /// Whether the trained model exposes probability output
    pub probability: bool,
}

/// The full set of trained artifacts, loaded once at startup and immutable
/// for the process lifetime.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    /// Ordinal encoder for the mood-swings answer
    pub mood_encoder: OrdinalEncoder,
    /// Ordinal encoder for the days-indoors answer
    pub days_encoder: OrdinalEncoder,
    /// Fitted feature scaler
    pub scaler: AffineScaler,
    /// Yes/no token map
    pub binary_map: BinaryMap,
    /// Ordered final column layout
    pub schema: ColumnSchema,
    /// Trained classifier parameters
    pub classifier: ClassifierParams,
}

impl ArtifactBundle {
    /// Load and validate all artifacts from a directory.
    ///
    /// Expects `mood_encoder.json`, `days_encoder.json`, `scaler.json`,
    /// `binary_map.json`, `final_columns.json` and `classifier.json`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let dir = dir.as_ref();

        let bundle = Self {
            mood_encoder: read_json(dir, "mood_encoder.json")?,
            days_encoder: read_json(dir, "days_encoder.json")?,
            scaler: read_json(dir, "scaler.json")?,
            binary_map: read_json(dir, "binary_map.json")?,
            schema: read_json(dir, "final_columns.json")?,
            classifier: read_json(dir, "classifier.json")?,
        };
        bundle.validate()?;

        info!(
            columns = bundle.schema.len(),
            classes = bundle.classifier.classes.len(),
            "artifact bundle loaded from {}",
            dir.display()
        );
        Ok(bundle)
    }

    /// Cross-artifact consistency checks.
    ///
    /// A width mismatch here means the artifacts were exported from
    /// different training runs; catching it at startup avoids silently
    /// feeding the model misaligned features at call time.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.schema.is_empty() {
            return Err(ArtifactError::EmptySchema);
        }
        let mut seen = HashSet::new();
        for column in self.schema.iter() {
            if !seen.insert(column) {
                return Err(ArtifactError::DuplicateColumn(column.to_string()));
            }
        }

        if self.mood_encoder.is_empty() {
            return Err(ArtifactError::EmptyVocabulary("mood_encoder"));
        }
        if self.days_encoder.is_empty() {
            return Err(ArtifactError::EmptyVocabulary("days_encoder"));
        }

        self.scaler.check()?;
        if self.scaler.width() != self.schema.len() {
            return Err(ArtifactError::WidthMismatch {
                artifact: "scaler",
                expected: self.schema.len(),
                actual: self.scaler.width(),
            });
        }

        let params = &self.classifier;
        if params.classes.len() < 2 {
            return Err(ArtifactError::MalformedClassifier(format!(
                "expected at least 2 classes, got {}",
                params.classes.len()
            )));
        }
        if params.coefficients.is_empty() {
            return Err(ArtifactError::MalformedClassifier(
                "no coefficient rows".to_string(),
            ));
        }
        if params.coefficients.len() != params.intercepts.len() {
            return Err(ArtifactError::MalformedClassifier(format!(
                "{} coefficient rows but {} intercepts",
                params.coefficients.len(),
                params.intercepts.len()
            )));
        }
        let binary_single_row = params.coefficients.len() == 1 && params.classes.len() == 2;
        if !binary_single_row && params.coefficients.len() != params.classes.len() {
            return Err(ArtifactError::MalformedClassifier(format!(
                "{} coefficient rows for {} classes",
                params.coefficients.len(),
                params.classes.len()
            )));
        }
        for row in &params.coefficients {
            if row.len() != self.schema.len() {
                return Err(ArtifactError::WidthMismatch {
                    artifact: "classifier coefficients",
                    expected: self.schema.len(),
                    actual: row.len(),
                });
            }
        }

        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, ArtifactError> {
    let path = dir.join(file);
    let raw = std::fs::read_to_string(&path).map_err(|source| ArtifactError::Io {
        file: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        file: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bundle() -> ArtifactBundle {
        let schema = ColumnSchema::new(vec![
            "Mood_Swings".to_string(),
            "Month_sin".to_string(),
            "Gender_male".to_string(),
        ]);
        ArtifactBundle {
            mood_encoder: OrdinalEncoder::new(vec![
                "high".to_string(),
                "low".to_string(),
                "medium".to_string(),
            ]),
            days_encoder: OrdinalEncoder::new(vec![
                "1-14 days".to_string(),
                "15-30 days".to_string(),
            ]),
            scaler: AffineScaler::new(vec![0.0; 3], vec![1.0; 3]).unwrap(),
            binary_map: BinaryMap::new(HashMap::from([
                ("yes".to_string(), 1.0),
                ("no".to_string(), 0.0),
            ])),
            schema,
            classifier: ClassifierParams {
                classes: vec![0, 1],
                coefficients: vec![vec![0.5, -0.25, 1.0]],
                intercepts: vec![0.1],
                probability: true,
            },
        }
    }

    #[test]
    fn test_valid_bundle() {
        assert!(sample_bundle().validate().is_ok());
    }

    #[test]
    fn test_scaler_width_mismatch() {
        let mut bundle = sample_bundle();
        bundle.scaler = AffineScaler::new(vec![0.0; 2], vec![1.0; 2]).unwrap();
        assert!(matches!(
            bundle.validate(),
            Err(ArtifactError::WidthMismatch { artifact: "scaler", .. })
        ));
    }

    #[test]
    fn test_coefficient_width_mismatch() {
        let mut bundle = sample_bundle();
        bundle.classifier.coefficients = vec![vec![0.5, -0.25]];
        assert!(bundle.validate().is_err());
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut bundle = sample_bundle();
        bundle.schema = ColumnSchema::new(vec![
            "Month_sin".to_string(),
            "Month_sin".to_string(),
            "Gender_male".to_string(),
        ]);
        assert!(matches!(
            bundle.validate(),
            Err(ArtifactError::DuplicateColumn(_))
        ));
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nonexistent");
        assert!(matches!(
            ArtifactBundle::load(&missing),
            Err(ArtifactError::Io { .. })
        ));
    }

    #[test]
    fn test_load_corrupt_artifact() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mood_encoder.json"), "{ not json").unwrap();
        assert!(matches!(
            ArtifactBundle::load(dir.path()),
            Err(ArtifactError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_round_trip() {
        let bundle = sample_bundle();
        let dir = tempfile::tempdir().unwrap();
        let write = |file: &str, json: String| {
            std::fs::write(dir.path().join(file), json).unwrap();
        };
        write("mood_encoder.json", serde_json::to_string(&bundle.mood_encoder).unwrap());
        write("days_encoder.json", serde_json::to_string(&bundle.days_encoder).unwrap());
        write("scaler.json", serde_json::to_string(&bundle.scaler).unwrap());
        write("binary_map.json", serde_json::to_string(&bundle.binary_map).unwrap());
        write("final_columns.json", serde_json::to_string(&bundle.schema).unwrap());
        write("classifier.json", serde_json::to_string(&bundle.classifier).unwrap());

        let loaded = ArtifactBundle::load(dir.path()).unwrap();
        assert_eq!(loaded.schema.len(), 3);
        assert_eq!(loaded.classifier.classes, vec![0, 1]);
        assert_eq!(loaded.binary_map.get("yes"), Some(1.0));
    }
}
