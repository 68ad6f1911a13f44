//! Schema-Ordered Feature Vector Assembly

use crate::record::{RawRecord, BINARY_FIELDS, CATEGORICAL_FIELDS};
use crate::time::{encode_weekday, CyclicFeatures};
use crate::PipelineError;
use artifact_store::{BinaryMap, ColumnSchema, OrdinalEncoder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Fallback category when the mood-swings answer is not in the trained
/// vocabulary
pub const MOOD_SWINGS_FALLBACK: &str = "medium";

/// Fallback category when the days-indoors answer is not in the trained
/// vocabulary
pub const DAYS_INDOORS_FALLBACK: &str = "15-30 days";

/// Model-ready feature vector, one slot per schema column, in schema order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Wrap already-assembled slot values
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no slots
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Slot values in schema order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable slot values, for in-place scaling
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

/// The fourteen numeric and cyclic features copied into the vector by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericFeature {
    DaysIndoors,
    GrowingStress,
    ChangesHabits,
    MentalHealthHistory,
    MoodSwings,
    SocialWeakness,
    Year,
    Month,
    Weekday,
    Hour,
    MonthSin,
    MonthCos,
    WeekdaySin,
    WeekdayCos,
}

impl NumericFeature {
    /// Feature/column pairs in training order
    const SLOTS: [(NumericFeature, &'static str); 14] = [
        (NumericFeature::DaysIndoors, "Days_Indoors"),
        (NumericFeature::GrowingStress, "Growing_Stress"),
        (NumericFeature::ChangesHabits, "Changes_Habits"),
        (NumericFeature::MentalHealthHistory, "Mental_Health_History"),
        (NumericFeature::MoodSwings, "Mood_Swings"),
        (NumericFeature::SocialWeakness, "Social_Weakness"),
        (NumericFeature::Year, "Year"),
        (NumericFeature::Month, "Month"),
        (NumericFeature::Weekday, "Weekday"),
        (NumericFeature::Hour, "Hour"),
        (NumericFeature::MonthSin, "Month_sin"),
        (NumericFeature::MonthCos, "Month_cos"),
        (NumericFeature::WeekdaySin, "Weekday_sin"),
        (NumericFeature::WeekdayCos, "Weekday_cos"),
    ];
}

/// Encoded intermediate values, computed once per record before slot
/// population
struct EncodedAnswers {
    days_indoors: f64,
    growing_stress: f64,
    changes_habits: f64,
    mental_health_history: f64,
    mood_swings: f64,
    social_weakness: f64,
    weekday: u32,
    cyclic: CyclicFeatures,
}

/// Assembles raw records into schema-ordered feature vectors.
///
/// All schema lookups happen once at construction: the numeric slot indices
/// and the per-field one-hot `(normalized value) -> index` tables are
/// precomputed, so assembly itself performs no column-name construction.
pub struct FeatureAssembler {
    schema_len: usize,
    mood_encoder: OrdinalEncoder,
    days_encoder: OrdinalEncoder,
    binary_map: BinaryMap,
    mood_fallback_code: f64,
    days_fallback_code: f64,
    numeric_slots: Vec<(NumericFeature, usize)>,
    /// One map per entry of [`CATEGORICAL_FIELDS`], normalized value -> slot
    one_hot_slots: Vec<HashMap<String, usize>>,
}

impl FeatureAssembler {
    /// Build an assembler for the given trained artifacts.
    ///
    /// Fails when a documented fallback category was never trained, since
    /// unknown answers could not degrade safely at call time.
    pub fn new(
        schema: &ColumnSchema,
        mood_encoder: OrdinalEncoder,
        days_encoder: OrdinalEncoder,
        binary_map: BinaryMap,
    ) -> Result<Self, PipelineError> {
        let mood_fallback_code = mood_encoder.code(MOOD_SWINGS_FALLBACK).ok_or(
            PipelineError::FallbackNotTrained {
                field: "Mood_Swings",
                fallback: MOOD_SWINGS_FALLBACK,
            },
        )?;
        let days_fallback_code = days_encoder.code(DAYS_INDOORS_FALLBACK).ok_or(
            PipelineError::FallbackNotTrained {
                field: "Days_Indoors",
                fallback: DAYS_INDOORS_FALLBACK,
            },
        )?;

        let numeric_slots = NumericFeature::SLOTS
            .iter()
            .filter_map(|&(feature, column)| schema.index_of(column).map(|idx| (feature, idx)))
            .collect();

        // Invert the schema once: every "{field}_{value}" column becomes a
        // (field, value) -> index entry keyed by field position.
        let mut one_hot_slots = vec![HashMap::new(); CATEGORICAL_FIELDS.len()];
        for (idx, column) in schema.iter().enumerate() {
            for (field_pos, field) in CATEGORICAL_FIELDS.iter().copied().enumerate() {
                if let Some(value) = column
                    .strip_prefix(field)
                    .and_then(|rest| rest.strip_prefix('_'))
                {
                    one_hot_slots[field_pos].insert(value.to_string(), idx);
                }
            }
        }

        Ok(Self {
            schema_len: schema.len(),
            mood_encoder,
            days_encoder,
            binary_map,
            mood_fallback_code,
            days_fallback_code,
            numeric_slots,
            one_hot_slots,
        })
    }

    /// Number of slots in the vectors this assembler produces
    pub fn width(&self) -> usize {
        self.schema_len
    }

    /// Assemble one record into a schema-ordered feature vector.
    ///
    /// Never fails: unknown ordinal categories degrade to their fallback
    /// code, unmapped binary answers become 0, and one-hot values without a
    /// trained column are dropped.
    pub fn assemble(&self, record: &RawRecord) -> FeatureVector {
        let encoded = self.encode_answers(record);
        let mut vector = FeatureVector::zeros(self.schema_len);

        for &(feature, idx) in &self.numeric_slots {
            vector.values[idx] = match feature {
                NumericFeature::DaysIndoors => encoded.days_indoors,
                NumericFeature::GrowingStress => encoded.growing_stress,
                NumericFeature::ChangesHabits => encoded.changes_habits,
                NumericFeature::MentalHealthHistory => encoded.mental_health_history,
                NumericFeature::MoodSwings => encoded.mood_swings,
                NumericFeature::SocialWeakness => encoded.social_weakness,
                NumericFeature::Year => record.year as f64,
                NumericFeature::Month => record.month as f64,
                NumericFeature::Weekday => encoded.weekday as f64,
                NumericFeature::Hour => record.hour as f64,
                NumericFeature::MonthSin => encoded.cyclic.month_sin,
                NumericFeature::MonthCos => encoded.cyclic.month_cos,
                NumericFeature::WeekdaySin => encoded.cyclic.weekday_sin,
                NumericFeature::WeekdayCos => encoded.cyclic.weekday_cos,
            };
        }

        for (field_pos, field) in CATEGORICAL_FIELDS.iter().copied().enumerate() {
            let normalized = normalize_category(record.categorical(field));
            match self.one_hot_slots[field_pos].get(normalized.as_str()) {
                Some(&idx) => vector.values[idx] = 1.0,
                // Out-of-vocabulary answer carries no signal. Frequent hits
                // here can mean schema drift, hence the log.
                None => debug!(field, value = %normalized, "one-hot value has no trained column"),
            }
        }

        vector
    }

    fn encode_answers(&self, record: &RawRecord) -> EncodedAnswers {
        let weekday = encode_weekday(record.weekday.as_deref().unwrap_or(""));
        let cyclic = CyclicFeatures::compute(record.month, weekday);

        let mood_swings = record
            .mood_swings
            .as_deref()
            .and_then(|v| self.mood_encoder.code(v))
            .unwrap_or(self.mood_fallback_code);
        let days_indoors = record
            .days_indoors
            .as_deref()
            .and_then(|v| self.days_encoder.code(v))
            .unwrap_or(self.days_fallback_code);

        let binary = |field: &str| {
            record
                .binary_answer(field)
                .and_then(|v| self.binary_map.get(v))
                .unwrap_or(0.0)
        };

        EncodedAnswers {
            days_indoors,
            growing_stress: binary(BINARY_FIELDS[0]),
            changes_habits: binary(BINARY_FIELDS[1]),
            mental_health_history: binary(BINARY_FIELDS[2]),
            social_weakness: binary(BINARY_FIELDS[3]),
            mood_swings,
            weekday,
            cyclic,
        }
    }
}

/// Normalize a raw categorical answer to its trained column token.
///
/// Missing answers normalize to the literal token "unknown"; present
/// answers are trimmed, lowercased, and space-separated words joined with
/// underscores.
fn normalize_category(raw: Option<&str>) -> String {
    match raw {
        Some(value) => value.trim().to_lowercase().replace(' ', "_"),
        None => "unknown".to_string(),
    }
}
