//! Property-based tests for the forecast summarizer and value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    CityName, MAX_FORECAST_DAYS, SampleCondition, WeatherSample, WeekdayLabels,
    summarize_forecast,
};
use proptest::prelude::*;

const DESCRIPTIONS: [&str; 4] = ["cielo claro", "nubes", "lluvia ligera", ""];

/// One sample on day `2024-01-{day}` with sane temperatures and pop
fn arb_sample() -> impl Strategy<Value = WeatherSample> {
    (
        1u32..=9,
        0u32..8,
        -30.0f64..40.0,
        0.0f64..15.0,
        proptest::option::of(0.0f64..=1.0),
        proptest::option::of(0usize..DESCRIPTIONS.len()),
    )
        .prop_map(|(day, slot, min, spread, pop, desc)| WeatherSample {
            timestamp: Some(format!("2024-01-{day:02} {:02}:00:00", slot * 3)),
            epoch: None,
            temp_min: Some(min),
            temp_max: Some(min + spread),
            pop,
            condition: desc.map(|i| SampleCondition {
                description: DESCRIPTIONS[i].to_string(),
                icon: format!("0{i}d"),
            }),
        })
}

// ============================================================================
// Forecast summarizer
// ============================================================================

mod summarizer_tests {
    use super::*;

    proptest! {
        #[test]
        fn never_more_than_five_days(samples in prop::collection::vec(arb_sample(), 0..80)) {
            let days = summarize_forecast(&samples, WeekdayLabels::SPANISH);
            prop_assert!(days.len() <= MAX_FORECAST_DAYS);
        }

        #[test]
        fn dates_strictly_ascending(samples in prop::collection::vec(arb_sample(), 1..80)) {
            let days = summarize_forecast(&samples, WeekdayLabels::SPANISH);
            for pair in days.windows(2) {
                prop_assert!(pair[0].date < pair[1].date);
            }
        }

        #[test]
        fn min_not_above_max(samples in prop::collection::vec(arb_sample(), 1..80)) {
            for day in summarize_forecast(&samples, WeekdayLabels::SPANISH) {
                prop_assert!(day.temp_min <= day.temp_max);
            }
        }

        #[test]
        fn pop_stays_in_unit_interval(samples in prop::collection::vec(arb_sample(), 1..80)) {
            for day in summarize_forecast(&samples, WeekdayLabels::SPANISH) {
                prop_assert!((0.0..=1.0).contains(&day.pop));
            }
        }

        #[test]
        fn summarizing_is_idempotent(samples in prop::collection::vec(arb_sample(), 0..80)) {
            let first = summarize_forecast(&samples, WeekdayLabels::SPANISH);
            let second = summarize_forecast(&samples, WeekdayLabels::SPANISH);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn days_without_minimum_are_dropped(
            samples in prop::collection::vec(arb_sample(), 1..40),
            dropped_day in 1u32..=9,
        ) {
            let prefix = format!("2024-01-{dropped_day:02}");
            let samples: Vec<_> = samples
                .into_iter()
                .map(|mut s| {
                    if s.timestamp.as_deref().is_some_and(|t| t.starts_with(&prefix)) {
                        s.temp_min = None;
                    }
                    s
                })
                .collect();

            let days = summarize_forecast(&samples, WeekdayLabels::SPANISH);
            prop_assert!(days.iter().all(|d| d.date != prefix));
        }

        #[test]
        fn samples_without_timestamp_change_nothing(
            samples in prop::collection::vec(arb_sample(), 0..40),
            orphan in arb_sample(),
        ) {
            let mut with_orphan = samples.clone();
            with_orphan.push(WeatherSample { timestamp: None, epoch: None, ..orphan });

            prop_assert_eq!(
                summarize_forecast(&samples, WeekdayLabels::SPANISH),
                summarize_forecast(&with_orphan, WeekdayLabels::SPANISH)
            );
        }
    }
}

// ============================================================================
// CityName
// ============================================================================

mod city_name_tests {
    use super::*;

    proptest! {
        #[test]
        fn whitespace_only_is_rejected(ws in "[ \t\n]{0,10}") {
            prop_assert!(CityName::new(&ws).is_err());
        }

        #[test]
        fn normalized_is_trimmed_lowercase(name in "[A-Za-z]{1,12}", pad in " {0,3}") {
            let city = CityName::new(&format!("{pad}{name}{pad}")).unwrap();
            prop_assert_eq!(city.normalized(), name.to_lowercase());
        }
    }
}
