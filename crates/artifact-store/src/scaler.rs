//! Affine Feature Scaler

use crate::ArtifactError;
use serde::{Deserialize, Serialize};

/// Fitted affine scaler applied to the assembled feature vector.
///
/// Standardizes each column as `(x - mean) / scale` with the per-column
/// statistics the model was trained against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffineScaler {
    /// Per-column means
    mean: Vec<f64>,
    /// Per-column scales (standard deviations)
    scale: Vec<f64>,
}

impl AffineScaler {
    /// Create a scaler from fitted statistics
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ArtifactError> {
        let scaler = Self { mean, scale };
        scaler.check()?;
        Ok(scaler)
    }

    /// Validate internal consistency (equal widths, no zero scales)
    pub fn check(&self) -> Result<(), ArtifactError> {
        if self.mean.len() != self.scale.len() {
            return Err(ArtifactError::WidthMismatch {
                artifact: "scaler",
                expected: self.mean.len(),
                actual: self.scale.len(),
            });
        }
        if let Some(idx) = self.scale.iter().position(|&s| s == 0.0) {
            return Err(ArtifactError::ZeroScale(idx));
        }
        Ok(())
    }

    /// Number of columns the scaler was fitted on
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Standardize a feature vector in place
    pub fn transform(&self, values: &mut [f64]) -> Result<(), ArtifactError> {
        if values.len() != self.width() {
            return Err(ArtifactError::WidthMismatch {
                artifact: "scaler input",
                expected: self.width(),
                actual: values.len(),
            });
        }
        for ((value, mean), scale) in values.iter_mut().zip(&self.mean).zip(&self.scale) {
            *value = (*value - mean) / scale;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform() {
        let scaler = AffineScaler::new(vec![10.0, 0.0], vec![2.0, 1.0]).unwrap();
        let mut values = vec![14.0, -3.0];
        scaler.transform(&mut values).unwrap();
        assert!((values[0] - 2.0).abs() < 1e-12);
        assert!((values[1] + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_width_mismatch() {
        let scaler = AffineScaler::new(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap();
        let mut values = vec![1.0];
        assert!(scaler.transform(&mut values).is_err());
    }

    #[test]
    fn test_zero_scale_rejected() {
        assert!(AffineScaler::new(vec![0.0, 0.0], vec![1.0, 0.0]).is_err());
    }
}
