//! Cyclic Time Features

use std::f64::consts::PI;

/// Weekday names in encoding order, Monday = 0
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Encode a lowercase weekday name as 0-6 (Monday first).
///
/// Unrecognized or missing names encode to 0, matching the training-time
/// fill value.
pub fn encode_weekday(name: &str) -> u32 {
    WEEKDAYS.iter().position(|&w| w == name).unwrap_or(0) as u32
}

/// Sine/cosine pair of a value scaled to its period.
///
/// Encodes cyclical recurrence (December is adjacent to January) without an
/// ordinal discontinuity at the wrap point.
pub fn cyclic_pair(value: f64, period: f64) -> (f64, f64) {
    let angle = 2.0 * PI * value / period;
    (angle.sin(), angle.cos())
}

/// The four derived time features fed to the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclicFeatures {
    pub month_sin: f64,
    pub month_cos: f64,
    pub weekday_sin: f64,
    pub weekday_cos: f64,
}

impl CyclicFeatures {
    /// Compute from a 1-12 month and a 0-6 encoded weekday
    pub fn compute(month: u32, weekday: u32) -> Self {
        let (month_sin, month_cos) = cyclic_pair(month as f64, 12.0);
        let (weekday_sin, weekday_cos) = cyclic_pair(weekday as f64, 7.0);
        Self {
            month_sin,
            month_cos,
            weekday_sin,
            weekday_cos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_weekday_table() {
        assert_eq!(encode_weekday("monday"), 0);
        assert_eq!(encode_weekday("wednesday"), 2);
        assert_eq!(encode_weekday("sunday"), 6);
    }

    #[test]
    fn test_unknown_weekday_defaults_to_zero() {
        assert_eq!(encode_weekday("someday"), 0);
        assert_eq!(encode_weekday(""), 0);
        // Capitalized names are not recognized; input is lowercased upstream
        assert_eq!(encode_weekday("Monday"), 0);
    }

    #[test]
    fn test_august_cyclic_values() {
        let features = CyclicFeatures::compute(8, 2);
        // sin(2pi * 8/12) = sin(240 deg)
        assert!((features.month_sin - (-0.866_025_4)).abs() < 1e-6);
        assert!((features.month_cos - (-0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_december_wraps_toward_january() {
        let december = CyclicFeatures::compute(12, 0);
        let january = CyclicFeatures::compute(1, 0);
        let june = CyclicFeatures::compute(6, 0);
        let dist = |a: &CyclicFeatures, b: &CyclicFeatures| {
            ((a.month_sin - b.month_sin).powi(2) + (a.month_cos - b.month_cos).powi(2)).sqrt()
        };
        assert!(dist(&december, &january) < dist(&december, &june));
    }

    proptest! {
        #[test]
        fn month_pair_on_unit_circle(month in 1u32..=12) {
            let (sin, cos) = cyclic_pair(month as f64, 12.0);
            prop_assert!((sin * sin + cos * cos - 1.0).abs() < 1e-9);
        }

        #[test]
        fn weekday_pair_on_unit_circle(weekday in 0u32..=6) {
            let (sin, cos) = cyclic_pair(weekday as f64, 7.0);
            prop_assert!((sin * sin + cos * cos - 1.0).abs() < 1e-9);
        }

        #[test]
        fn encoded_weekday_in_range(name in "[a-z]{1,12}") {
            prop_assert!(encode_weekday(&name) <= 6);
        }
    }
}
