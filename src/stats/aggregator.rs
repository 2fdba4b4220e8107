//! Pure fold from the activity log to a stats snapshot
//!
//! `apply_event` is the single fold step; `aggregate` is defined as its
//! fold over the whole log, so the incremental hot path and the full
//! recompute agree bit-for-bit by construction. Feeding the same
//! ordered log always yields the same snapshot.

use chrono::{FixedOffset, NaiveDate};

use super::local_day::{days_between, local_date, local_hour};
use super::snapshot::StatsSnapshot;
use crate::event::{ActivityEvent, EventKind, MealFacts};

/// Full recompute over an ordered log (cold start / audits).
pub fn aggregate(events: &[ActivityEvent], offset: FixedOffset) -> StatsSnapshot {
    let mut snapshot = StatsSnapshot::default();
    for event in events {
        apply_event(&mut snapshot, event, offset);
    }
    snapshot
}

/// Fold one new event into the snapshot (hot path).
pub fn apply_event(snapshot: &mut StatsSnapshot, event: &ActivityEvent, offset: FixedOffset) {
    match &event.kind {
        EventKind::ScanPerformed => snapshot.total_scans += 1,
        EventKind::FavouriteSaved => snapshot.total_favourites += 1,
        EventKind::WaterTracked => {
            let day = local_date(event.timestamp, offset);
            if snapshot.last_water_date != Some(day) {
                snapshot.total_water_days_tracked += 1;
                snapshot.last_water_date = Some(day);
            }
        }
        EventKind::MealLogged { facts } => {
            let day = local_date(event.timestamp, offset);
            let hour = local_hour(event.timestamp, offset);
            apply_meal(snapshot, facts, day, hour);
        }
    }
}

fn apply_meal(snapshot: &mut StatsSnapshot, facts: &MealFacts, day: NaiveDate, hour: u32) {
    snapshot.total_meals_logged += 1;
    snapshot.unique_meal_types.insert(facts.meal_type.clone());

    if facts.is_veggie_rich {
        snapshot.veggie_meal_count += 1;
    }
    if facts.is_high_protein {
        snapshot.high_protein_meal_count += 1;
    }
    if facts.is_balanced_macro {
        snapshot.balanced_macro_meal_count += 1;
    }
    if facts.is_breakfast {
        snapshot.breakfast_meal_count += 1;
    }
    if facts.is_dinner {
        snapshot.dinner_meal_count += 1;
    }

    snapshot.earliest_meal_hour = Some(match snapshot.earliest_meal_hour {
        Some(earliest) => earliest.min(hour),
        None => hour,
    });
    snapshot.latest_meal_hour = Some(match snapshot.latest_meal_hour {
        Some(latest) => latest.max(hour),
        None => hour,
    });

    // Day-keyed state: streak continuity, per-day meal count, perfect
    // tracking. Multiple meals on one local day count one streak day.
    match snapshot.last_meal_date {
        None => {
            snapshot.current_streak_days = 1;
            snapshot.meals_on_current_day = 1;
            snapshot.current_day_perfect = facts.calories_goal_met_day;
        }
        Some(last) if last == day => {
            snapshot.meals_on_current_day += 1;
            snapshot.current_day_perfect =
                snapshot.current_day_perfect && facts.calories_goal_met_day;
        }
        Some(last) => {
            close_day(snapshot, last);
            let gap = days_between(last, day) - 1;
            if gap >= 1 {
                snapshot.days_since_last_log_before_return = gap as u32;
                snapshot.current_streak_days = 1;
            } else {
                snapshot.current_streak_days += 1;
            }
            snapshot.meals_on_current_day = 1;
            snapshot.current_day_perfect = facts.calories_goal_met_day;
        }
    }
    snapshot.last_meal_date = Some(day);
    snapshot.longest_streak_days = snapshot.longest_streak_days.max(snapshot.current_streak_days);
    snapshot.max_meals_in_single_day = snapshot
        .max_meals_in_single_day
        .max(snapshot.meals_on_current_day);

    if facts.is_breakfast {
        extend_scoped_streak(
            &mut snapshot.breakfast_streak_days,
            &mut snapshot.last_breakfast_date,
            day,
        );
    }
    if facts.is_dinner {
        extend_scoped_streak(
            &mut snapshot.dinner_streak_days,
            &mut snapshot.last_dinner_date,
            day,
        );
    }
}

/// Commit perfect-day accounting for a day that just ended (a meal
/// arrived on a later date).
fn close_day(snapshot: &mut StatsSnapshot, closed: NaiveDate) {
    if !snapshot.current_day_perfect {
        return;
    }
    snapshot.perfect_days_count += 1;
    snapshot.perfect_day_run = match snapshot.last_perfect_date {
        Some(previous) if days_between(previous, closed) == 1 => snapshot.perfect_day_run + 1,
        _ => 1,
    };
    snapshot.last_perfect_date = Some(closed);
}

/// Same continuity rule as the main streak, scoped to breakfast or
/// dinner flagged meals.
fn extend_scoped_streak(streak: &mut u32, last_date: &mut Option<NaiveDate>, day: NaiveDate) {
    match *last_date {
        Some(last) if last == day => return,
        Some(last) if days_between(last, day) == 1 => *streak += 1,
        _ => *streak = 1,
    }
    *last_date = Some(day);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ActivityEvent;
    use chrono::{DateTime, TimeZone, Utc};

    fn offset() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    fn plain_facts() -> MealFacts {
        MealFacts {
            meal_type: "lunch".to_string(),
            is_breakfast: false,
            is_dinner: false,
            is_veggie_rich: false,
            is_high_protein: false,
            is_balanced_macro: false,
            calories_goal_met_day: false,
        }
    }

    fn meal(day: u32, hour: u32) -> ActivityEvent {
        meal_with(day, hour, |_| {})
    }

    fn meal_with(day: u32, hour: u32, tweak: impl FnOnce(&mut MealFacts)) -> ActivityEvent {
        let mut facts = plain_facts();
        tweak(&mut facts);
        ActivityEvent::meal(at(day, hour), facts)
    }

    #[test]
    fn test_streak_extends_on_consecutive_days() {
        let log = vec![meal(1, 12), meal(2, 9), meal(3, 20)];
        let snapshot = aggregate(&log, offset());
        assert_eq!(snapshot.current_streak_days, 3);
        assert_eq!(snapshot.longest_streak_days, 3);
    }

    #[test]
    fn test_streak_resets_after_gap() {
        // Day 1 and day 3: the skipped day 2 breaks the streak
        let log = vec![meal(1, 12), meal(3, 12)];
        let snapshot = aggregate(&log, offset());
        assert_eq!(snapshot.current_streak_days, 1);
        assert_eq!(snapshot.longest_streak_days, 1);
        assert_eq!(snapshot.days_since_last_log_before_return, 1);
    }

    #[test]
    fn test_same_day_meals_count_one_streak_day() {
        let log = vec![meal(1, 8), meal(1, 13), meal(1, 19)];
        let snapshot = aggregate(&log, offset());
        assert_eq!(snapshot.current_streak_days, 1);
        assert_eq!(snapshot.total_meals_logged, 3);
        assert_eq!(snapshot.max_meals_in_single_day, 3);
    }

    #[test]
    fn test_local_midnight_splits_streak_days() {
        // 23:59 and 00:05 local time, two minutes apart, two streak days
        let log = vec![
            ActivityEvent::meal(
                Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 0).unwrap(),
                plain_facts(),
            ),
            ActivityEvent::meal(
                Utc.with_ymd_and_hms(2024, 3, 2, 0, 5, 0).unwrap(),
                plain_facts(),
            ),
        ];
        let snapshot = aggregate(&log, offset());
        assert_eq!(snapshot.current_streak_days, 2);
    }

    #[test]
    fn test_breakfast_streak_scoped_continuity() {
        let log = vec![
            meal_with(1, 7, |f| f.is_breakfast = true),
            meal_with(2, 7, |f| f.is_breakfast = true),
            meal_with(3, 12, |_| {}), // meal but no breakfast
            meal_with(4, 7, |f| f.is_breakfast = true),
        ];
        let snapshot = aggregate(&log, offset());
        assert_eq!(snapshot.current_streak_days, 4);
        assert_eq!(snapshot.breakfast_streak_days, 1);
        assert_eq!(snapshot.breakfast_meal_count, 3);
    }

    #[test]
    fn test_water_days_are_distinct_local_days() {
        let log = vec![
            ActivityEvent::new(at(1, 9), EventKind::WaterTracked),
            ActivityEvent::new(at(1, 18), EventKind::WaterTracked),
            ActivityEvent::new(at(2, 9), EventKind::WaterTracked),
        ];
        let snapshot = aggregate(&log, offset());
        assert_eq!(snapshot.total_water_days_tracked, 2);
    }

    #[test]
    fn test_meal_hour_extremes() {
        let log = vec![meal(1, 6), meal(1, 13), meal(1, 22)];
        let snapshot = aggregate(&log, offset());
        assert_eq!(snapshot.earliest_meal_hour, Some(6));
        assert_eq!(snapshot.latest_meal_hour, Some(22));
    }

    #[test]
    fn test_unique_meal_types() {
        let log = vec![
            meal_with(1, 8, |f| f.meal_type = "oats".into()),
            meal_with(1, 13, |f| f.meal_type = "pasta".into()),
            meal_with(2, 13, |f| f.meal_type = "pasta".into()),
        ];
        let snapshot = aggregate(&log, offset());
        assert_eq!(snapshot.unique_meal_types_logged(), 2);
    }

    #[test]
    fn test_perfect_day_closes_into_count_and_run() {
        let log = vec![
            meal_with(1, 8, |f| f.calories_goal_met_day = true),
            meal_with(1, 19, |f| f.calories_goal_met_day = true),
            meal_with(2, 8, |f| f.calories_goal_met_day = true),
            meal_with(3, 8, |f| f.calories_goal_met_day = false),
        ];
        let snapshot = aggregate(&log, offset());
        // Days 1 and 2 closed perfect, day 3 open and imperfect
        assert_eq!(snapshot.perfect_days_count, 2);
        assert_eq!(snapshot.perfect_day_run, 2);
        assert_eq!(snapshot.perfect_days_total(), 2);
        assert_eq!(snapshot.perfect_run_days(), 0);
    }

    #[test]
    fn test_failed_goal_check_spoils_open_day() {
        let log = vec![
            meal_with(1, 8, |f| f.calories_goal_met_day = true),
            meal_with(1, 19, |f| f.calories_goal_met_day = false),
            meal_with(2, 8, |f| f.calories_goal_met_day = true),
        ];
        let snapshot = aggregate(&log, offset());
        assert_eq!(snapshot.perfect_days_count, 0);
        assert!(snapshot.current_day_perfect);
        assert_eq!(snapshot.perfect_run_days(), 1);
    }

    #[test]
    fn test_comeback_gap_measured_in_full_missed_days() {
        let log = vec![meal(1, 12), meal(31, 12)];
        let snapshot = aggregate(&log, offset());
        assert_eq!(snapshot.days_since_last_log_before_return, 29);
    }

    #[test]
    fn test_incremental_matches_full_fold() {
        let log = vec![
            meal_with(1, 7, |f| {
                f.is_breakfast = true;
                f.calories_goal_met_day = true;
            }),
            ActivityEvent::new(at(1, 10), EventKind::ScanPerformed),
            ActivityEvent::new(at(1, 11), EventKind::WaterTracked),
            meal_with(2, 20, |f| f.is_dinner = true),
            ActivityEvent::new(at(3, 9), EventKind::FavouriteSaved),
            meal_with(5, 23, |f| f.is_high_protein = true),
        ];
        let full = aggregate(&log, offset());
        let mut incremental = StatsSnapshot::default();
        for event in &log {
            apply_event(&mut incremental, event, offset());
        }
        assert_eq!(full, incremental);
    }
}
