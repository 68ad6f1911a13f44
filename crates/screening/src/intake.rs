//! Form Intake
//!
//! Builds a well-formed [`RawRecord`] from loosely-keyed form input: keys
//! are the lowercase form field names, blank answers fall back to the
//! documented per-field defaults, and the questions the form does not ask
//! are filled with their survey defaults.

use feature_pipeline::{RawRecord, DAYS_INDOORS_FALLBACK, MOOD_SWINGS_FALLBACK};
use std::collections::HashMap;
use tracing::debug;

/// Build a record from submitted form fields.
///
/// Missing or blank answers take the same defaults the model was served
/// with: "unknown" for the free-form categoricals, "no" for the yes/no
/// questions, and the ordinal fallbacks for mood and days-indoors. Time
/// fields keep the record's fixed training-time context; callers wanting
/// the capture time stamp it afterwards.
pub fn record_from_form(form: &HashMap<String, String>) -> RawRecord {
    let get = |key: &str, default: &str| -> Option<String> {
        let value = form
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .unwrap_or(default);
        Some(value.to_string())
    };

    debug!(fields = form.len(), "building record from form input");

    RawRecord {
        gender: get("gender", "unknown"),
        country: get("country", "unknown"),
        occupation: get("occupation", "unknown"),
        // Not asked on the form
        self_employed: Some("no".to_string()),
        family_history: get("family_history", "no"),
        days_indoors: get("days_indoors", DAYS_INDOORS_FALLBACK),
        growing_stress: get("growing_stress", "no"),
        changes_habits: get("changes_habits", "no"),
        // Not asked on the form
        mental_health_history: Some("no".to_string()),
        mood_swings: get("mood_swings", MOOD_SWINGS_FALLBACK),
        coping_struggles: get("coping_struggles", "no"),
        work_interest: get("work_interest", "no"),
        // Not asked on the form
        social_weakness: Some("no".to_string()),
        mental_health_interview: get("mental_health_interview", "no"),
        care_options: get("care_options", "no"),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_values_pass_through() {
        let form = HashMap::from([
            ("gender".to_string(), "male".to_string()),
            ("country".to_string(), "usa".to_string()),
            ("mood_swings".to_string(), "high".to_string()),
        ]);
        let record = record_from_form(&form);
        assert_eq!(record.gender.as_deref(), Some("male"));
        assert_eq!(record.country.as_deref(), Some("usa"));
        assert_eq!(record.mood_swings.as_deref(), Some("high"));
    }

    #[test]
    fn test_blank_answers_take_defaults() {
        let form = HashMap::from([
            ("gender".to_string(), "   ".to_string()),
            ("growing_stress".to_string(), String::new()),
        ]);
        let record = record_from_form(&form);
        assert_eq!(record.gender.as_deref(), Some("unknown"));
        assert_eq!(record.growing_stress.as_deref(), Some("no"));
        assert_eq!(record.days_indoors.as_deref(), Some("15-30 days"));
        assert_eq!(record.mood_swings.as_deref(), Some("medium"));
    }

    #[test]
    fn test_unasked_questions_filled() {
        let record = record_from_form(&HashMap::new());
        assert_eq!(record.self_employed.as_deref(), Some("no"));
        assert_eq!(record.mental_health_history.as_deref(), Some("no"));
        assert_eq!(record.social_weakness.as_deref(), Some("no"));
        // Training-time context
        assert_eq!(record.year, 2014);
        assert_eq!(record.weekday.as_deref(), Some("wednesday"));
    }

    #[test]
    fn test_answers_are_trimmed() {
        let form = HashMap::from([("occupation".to_string(), "  engineer  ".to_string())]);
        let record = record_from_form(&form);
        assert_eq!(record.occupation.as_deref(), Some("engineer"));
    }
}
