//! Ordinal Category Encoder

use serde::{Deserialize, Serialize};

/// Ordinal encoder over a trained category vocabulary.
///
/// The code of a category is its position in the trained category list,
/// matching how the encoder was fitted. The vocabulary is immutable for the
/// process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalEncoder {
    /// Trained vocabulary, in code order
    categories: Vec<String>,
}

impl OrdinalEncoder {
    /// Create an encoder from a trained vocabulary
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories }
    }

    /// Whether the category is in the trained vocabulary
    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Ordinal code for a known category
    pub fn code(&self, category: &str) -> Option<f64> {
        self.categories
            .iter()
            .position(|c| c == category)
            .map(|p| p as f64)
    }

    /// Encode a value, degrading to the fallback category when the value is
    /// unknown. Returns `None` only when the fallback itself was never
    /// trained.
    pub fn encode_with_fallback(&self, value: &str, fallback: &str) -> Option<f64> {
        self.code(value).or_else(|| self.code(fallback))
    }

    /// Trained categories in code order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of trained categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mood_encoder() -> OrdinalEncoder {
        OrdinalEncoder::new(vec![
            "high".to_string(),
            "low".to_string(),
            "medium".to_string(),
        ])
    }

    #[test]
    fn test_known_category_code() {
        let encoder = mood_encoder();
        assert_eq!(encoder.code("high"), Some(0.0));
        assert_eq!(encoder.code("medium"), Some(2.0));
    }

    #[test]
    fn test_unknown_category() {
        let encoder = mood_encoder();
        assert_eq!(encoder.code("extreme"), None);
        assert!(!encoder.contains("extreme"));
    }

    #[test]
    fn test_fallback_encoding() {
        let encoder = mood_encoder();
        // Unknown value degrades to the fallback's code, never an error
        assert_eq!(
            encoder.encode_with_fallback("extreme_unknown_value", "medium"),
            Some(2.0)
        );
        // Known value ignores the fallback
        assert_eq!(encoder.encode_with_fallback("low", "medium"), Some(1.0));
    }

    #[test]
    fn test_untrained_fallback() {
        let encoder = mood_encoder();
        assert_eq!(encoder.encode_with_fallback("extreme", "mild"), None);
    }
}
