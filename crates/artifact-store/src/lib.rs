//! Trained Artifact Store
//!
//! Types for the externally-trained artifacts the screening pipeline depends
//! on (ordinal encoders, scaler, binary token map, column schema, classifier
//! parameters), plus loading and consistency validation of the full bundle.

mod bundle;
mod encoder;
mod error;
mod scaler;
mod schema;

pub use bundle::{ArtifactBundle, BinaryMap, ClassifierParams};
pub use encoder::OrdinalEncoder;
pub use error::ArtifactError;
pub use scaler::AffineScaler;
pub use schema::ColumnSchema;
