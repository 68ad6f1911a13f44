//! Questionnaire Record

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Questionnaire fields that are one-hot expanded during assembly
pub const CATEGORICAL_FIELDS: [&str; 9] = [
    "Gender",
    "Country",
    "Occupation",
    "Work_Interest",
    "mental_health_interview",
    "self_employed",
    "family_history",
    "Coping_Struggles",
    "care_options",
];

/// Questionnaire fields mapped through the trained yes/no token map
pub const BINARY_FIELDS: [&str; 4] = [
    "Growing_Stress",
    "Changes_Habits",
    "Mental_Health_History",
    "Social_Weakness",
];

/// One raw questionnaire submission.
///
/// String answers arrive as the user gave them; any of them may be missing.
/// Field names mirror the survey the model was trained on, so records
/// serialize to and from the training-time JSON layout directly.
///
/// The time fields default to the fixed training-time context
/// (2014-08, Wednesday, 11:00) when the caller does not stamp a capture
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Occupation")]
    pub occupation: Option<String>,
    pub self_employed: Option<String>,
    pub family_history: Option<String>,
    #[serde(rename = "Days_Indoors")]
    pub days_indoors: Option<String>,
    #[serde(rename = "Growing_Stress")]
    pub growing_stress: Option<String>,
    #[serde(rename = "Changes_Habits")]
    pub changes_habits: Option<String>,
    #[serde(rename = "Mental_Health_History")]
    pub mental_health_history: Option<String>,
    #[serde(rename = "Mood_Swings")]
    pub mood_swings: Option<String>,
    #[serde(rename = "Coping_Struggles")]
    pub coping_struggles: Option<String>,
    #[serde(rename = "Work_Interest")]
    pub work_interest: Option<String>,
    #[serde(rename = "Social_Weakness")]
    pub social_weakness: Option<String>,
    pub mental_health_interview: Option<String>,
    pub care_options: Option<String>,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: u32,
    /// Lowercase weekday name, Monday first
    #[serde(rename = "Weekday")]
    pub weekday: Option<String>,
    #[serde(rename = "Hour")]
    pub hour: u32,
}

impl Default for RawRecord {
    fn default() -> Self {
        Self {
            gender: None,
            country: None,
            occupation: None,
            self_employed: None,
            family_history: None,
            days_indoors: None,
            growing_stress: None,
            changes_habits: None,
            mental_health_history: None,
            mood_swings: None,
            coping_struggles: None,
            work_interest: None,
            social_weakness: None,
            mental_health_interview: None,
            care_options: None,
            year: 2014,
            month: 8,
            weekday: Some("wednesday".to_string()),
            hour: 11,
        }
    }
}

impl RawRecord {
    /// Fill the time fields from a capture timestamp
    pub fn stamp_time<Tz: TimeZone>(&mut self, when: &DateTime<Tz>) {
        self.year = when.year();
        self.month = when.month();
        self.weekday = Some(weekday_name(when.weekday()).to_string());
        self.hour = when.hour();
    }

    /// Raw answer for a one-hot categorical field
    pub fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "Gender" => self.gender.as_deref(),
            "Country" => self.country.as_deref(),
            "Occupation" => self.occupation.as_deref(),
            "Work_Interest" => self.work_interest.as_deref(),
            "mental_health_interview" => self.mental_health_interview.as_deref(),
            "self_employed" => self.self_employed.as_deref(),
            "family_history" => self.family_history.as_deref(),
            "Coping_Struggles" => self.coping_struggles.as_deref(),
            "care_options" => self.care_options.as_deref(),
            _ => None,
        }
    }

    /// Raw answer for a binary-mapped field
    pub fn binary_answer(&self, field: &str) -> Option<&str> {
        match field {
            "Growing_Stress" => self.growing_stress.as_deref(),
            "Changes_Habits" => self.changes_habits.as_deref(),
            "Mental_Health_History" => self.mental_health_history.as_deref(),
            "Social_Weakness" => self.social_weakness.as_deref(),
            _ => None,
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_default_time_context() {
        let record = RawRecord::default();
        assert_eq!(record.year, 2014);
        assert_eq!(record.month, 8);
        assert_eq!(record.weekday.as_deref(), Some("wednesday"));
        assert_eq!(record.hour, 11);
    }

    #[test]
    fn test_stamp_time() {
        let mut record = RawRecord::default();
        // 2026-03-02 is a Monday
        let when = Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap();
        record.stamp_time(&when);
        assert_eq!(record.year, 2026);
        assert_eq!(record.month, 3);
        assert_eq!(record.weekday.as_deref(), Some("monday"));
        assert_eq!(record.hour, 9);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let record: RawRecord =
            serde_json::from_str(r#"{"Gender": "male", "Mood_Swings": "high"}"#).unwrap();
        assert_eq!(record.gender.as_deref(), Some("male"));
        assert_eq!(record.country, None);
        assert_eq!(record.month, 8);
    }

    #[test]
    fn test_field_accessors() {
        let record = RawRecord {
            gender: Some("Male".to_string()),
            growing_stress: Some("yes".to_string()),
            ..Default::default()
        };
        assert_eq!(record.categorical("Gender"), Some("Male"));
        assert_eq!(record.categorical("Country"), None);
        assert_eq!(record.binary_answer("Growing_Stress"), Some("yes"));
        assert_eq!(record.binary_answer("Changes_Habits"), None);
    }
}
