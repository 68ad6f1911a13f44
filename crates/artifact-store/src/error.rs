//! Artifact Error Types

use thiserror::Error;

/// Errors while loading or validating trained artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file could not be read
    #[error("Failed to read artifact {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON for its type
    #[error("Failed to parse artifact {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Column schema has no columns
    #[error("Column schema is empty")]
    EmptySchema,

    /// Same column name appears twice in the schema
    #[error("Duplicate column {0:?} in schema")]
    DuplicateColumn(String),

    /// Encoder was serialized with no categories
    #[error("Encoder {0} has an empty vocabulary")]
    EmptyVocabulary(&'static str),

    /// Artifact width does not match the schema width
    #[error("{artifact} width {actual} does not match schema width {expected}")]
    WidthMismatch {
        artifact: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Scaler would divide by zero at this column
    #[error("Scaler has zero scale at column {0}")]
    ZeroScale(usize),

    /// Classifier parameter arrays disagree with each other
    #[error("Malformed classifier parameters: {0}")]
    MalformedClassifier(String),
}
