//! Risk Level Mapping

use serde::{Deserialize, Serialize};

/// Risk level behind a predicted class label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Label 0: responses look balanced
    Balanced,
    /// Label 1: responses indicate elevated stress
    StressIndicated,
    /// The model returned a label outside the trained mapping
    Unrecognized(i64),
}

impl RiskLevel {
    /// Map a predicted class label to its risk level
    pub fn from_label(label: i64) -> Self {
        match label {
            0 => RiskLevel::Balanced,
            1 => RiskLevel::StressIndicated,
            other => RiskLevel::Unrecognized(other),
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Balanced => "balanced",
            RiskLevel::StressIndicated => "stress_indicated",
            RiskLevel::Unrecognized(_) => "unrecognized",
        }
    }

    /// One-line summary for display to the user
    pub fn summary(&self) -> &'static str {
        match self {
            RiskLevel::Balanced => "Responses look balanced. Keep up the habits that support you.",
            RiskLevel::StressIndicated => {
                "Responses indicate elevated stress. Consider talking to someone you trust \
                 or a professional."
            }
            RiskLevel::Unrecognized(_) => "The screening produced an unexpected result.",
        }
    }
}
