//! Aggregation properties: determinism, fold equivalence, day bucketing

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use nutrio_engine::stats::{aggregate, apply_event};
use nutrio_engine::{ActivityEvent, EventKind, MealFacts, StatsSnapshot};

fn utc_offset() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, minute, 0).unwrap()
}

fn meal(day: u32, hour: u32, meal_type: &str) -> ActivityEvent {
    ActivityEvent::meal(
        at(day, hour, 0),
        MealFacts {
            meal_type: meal_type.to_string(),
            is_breakfast: hour < 10,
            is_dinner: hour >= 18,
            is_veggie_rich: meal_type.contains("salad"),
            is_high_protein: meal_type.contains("steak"),
            is_balanced_macro: false,
            calories_goal_met_day: false,
        },
    )
}

fn sample_log() -> Vec<ActivityEvent> {
    vec![
        meal(1, 7, "oats"),
        ActivityEvent::new(at(1, 9, 30), EventKind::ScanPerformed),
        ActivityEvent::new(at(1, 10, 0), EventKind::WaterTracked),
        meal(1, 13, "salad bowl"),
        meal(1, 19, "steak"),
        ActivityEvent::new(at(2, 8, 0), EventKind::WaterTracked),
        meal(2, 8, "oats"),
        ActivityEvent::new(at(2, 12, 0), EventKind::FavouriteSaved),
        meal(2, 20, "pasta"),
        meal(4, 23, "leftovers"),
        meal(5, 6, "toast"),
        ActivityEvent::new(at(5, 9, 0), EventKind::ScanPerformed),
    ]
}

#[test]
fn test_aggregate_is_deterministic() {
    let log = sample_log();
    let first = aggregate(&log, utc_offset());
    let second = aggregate(&log, utc_offset());
    assert_eq!(first, second);

    // Byte-identical through serialization, not just Eq
    let a = serde_json::to_vec(&first).unwrap();
    let b = serde_json::to_vec(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_incremental_fold_equals_full_fold() {
    let log = sample_log();
    let full = aggregate(&log, utc_offset());
    let mut incremental = StatsSnapshot::default();
    for event in &log {
        apply_event(&mut incremental, event, utc_offset());
    }
    assert_eq!(full, incremental);

    // And at every prefix, not only the end
    for cut in 0..=log.len() {
        assert_eq!(
            aggregate(&log[..cut], utc_offset()),
            {
                let mut s = StatsSnapshot::default();
                for event in &log[..cut] {
                    apply_event(&mut s, event, utc_offset());
                }
                s
            },
            "divergence at prefix length {cut}"
        );
    }
}

#[test]
fn test_skipped_day_resets_streak_to_one() {
    let log = vec![meal(1, 12, "lunch"), meal(3, 12, "lunch")];
    let snapshot = aggregate(&log, utc_offset());
    assert_eq!(
        snapshot.current_streak_days, 1,
        "day 3 after skipping day 2 restarts the streak, it does not continue it"
    );
}

#[test]
fn test_streak_days_follow_the_configured_offset() {
    // 22:30 UTC then 23:30 UTC the same evening: one UTC day, but at
    // UTC+2 the second event lands on the next local date.
    let log = vec![
        ActivityEvent::meal(
            at(1, 22, 30),
            MealFacts {
                meal_type: "dinner".to_string(),
                is_breakfast: false,
                is_dinner: true,
                is_veggie_rich: false,
                is_high_protein: false,
                is_balanced_macro: false,
                calories_goal_met_day: false,
            },
        ),
        ActivityEvent::meal(
            at(1, 23, 30),
            MealFacts {
                meal_type: "snack".to_string(),
                is_breakfast: false,
                is_dinner: false,
                is_veggie_rich: false,
                is_high_protein: false,
                is_balanced_macro: false,
                calories_goal_met_day: false,
            },
        ),
    ];

    let at_utc = aggregate(&log, utc_offset());
    assert_eq!(at_utc.current_streak_days, 1);

    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let shifted = aggregate(&log, plus_two);
    assert_eq!(shifted.current_streak_days, 2);
}

#[test]
fn test_totals_and_tallies() {
    let snapshot = aggregate(&sample_log(), utc_offset());
    assert_eq!(snapshot.total_meals_logged, 7);
    assert_eq!(snapshot.total_scans, 2);
    assert_eq!(snapshot.total_favourites, 1);
    assert_eq!(snapshot.total_water_days_tracked, 2);
    assert_eq!(snapshot.unique_meal_types_logged(), 6);
    assert_eq!(snapshot.veggie_meal_count, 1);
    assert_eq!(snapshot.high_protein_meal_count, 1);
    assert_eq!(snapshot.max_meals_in_single_day, 3);
    assert_eq!(snapshot.earliest_meal_hour, Some(6));
    assert_eq!(snapshot.latest_meal_hour, Some(23));
    // Days 1-2 consecutive, day 3 skipped, days 4-5 consecutive
    assert_eq!(snapshot.current_streak_days, 2);
    assert_eq!(snapshot.longest_streak_days, 2);
    assert_eq!(snapshot.days_since_last_log_before_return, 1);
}
