//! Derived statistics model
//!
//! A snapshot is never hand-edited: every field is derivable as a pure
//! fold over the activity log, and the aggregator is the only writer.
//! Besides the counters the rule evaluator reads, the snapshot carries
//! the bookkeeping (last-seen local dates, open-day state) that lets a
//! single new event be folded in without revisiting the log.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::local_day::days_between;

/// Rolling behavioral statistics derived from the activity log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    // Cumulative totals (monotonically non-decreasing)
    pub total_meals_logged: u64,
    pub total_scans: u64,
    pub total_favourites: u64,
    /// Distinct local days with at least one water event
    pub total_water_days_tracked: u32,

    // Streaks, in consecutive user-local calendar days
    pub current_streak_days: u32,
    pub longest_streak_days: u32,
    pub breakfast_streak_days: u32,
    pub dinner_streak_days: u32,

    // Classification tallies (facts computed upstream, per meal)
    pub veggie_meal_count: u32,
    pub high_protein_meal_count: u32,
    pub balanced_macro_meal_count: u32,
    pub breakfast_meal_count: u32,
    pub dinner_meal_count: u32,

    /// Every distinct meal type ever logged (ordered for determinism)
    pub unique_meal_types: BTreeSet<String>,

    pub max_meals_in_single_day: u32,
    pub meals_on_current_day: u32,

    /// Closed days on which every meal-bearing goal check was met
    pub perfect_days_count: u32,
    /// Consecutive closed perfect days ending at `last_perfect_date`
    pub perfect_day_run: u32,
    /// The open day has >= 1 meal and no failed goal check so far
    pub current_day_perfect: bool,

    /// Gap length (full meal-free days) observed the most recent time a
    /// meal log followed at least one day of inactivity
    pub days_since_last_log_before_return: u32,

    // Local hour extremes over all meal logs
    pub earliest_meal_hour: Option<u32>,
    pub latest_meal_hour: Option<u32>,

    // Incremental-fold bookkeeping (user-local dates)
    pub last_meal_date: Option<NaiveDate>,
    pub last_breakfast_date: Option<NaiveDate>,
    pub last_dinner_date: Option<NaiveDate>,
    pub last_water_date: Option<NaiveDate>,
    /// Most recent closed day that was perfect
    pub last_perfect_date: Option<NaiveDate>,
}

impl StatsSnapshot {
    /// Count of distinct meal types ever seen.
    pub fn unique_meal_types_logged(&self) -> u32 {
        self.unique_meal_types.len() as u32
    }

    /// Perfect days including the open day's provisional state.
    ///
    /// The open day counts as soon as it is provisionally perfect, so
    /// the rule fires on the day itself rather than at the next
    /// day-close.
    pub fn perfect_days_total(&self) -> u32 {
        self.perfect_days_count + u32::from(self.current_day_perfect)
    }

    /// Consecutive perfect days ending on the open day (0 if the open
    /// day is not provisionally perfect).
    pub fn perfect_run_days(&self) -> u32 {
        if !self.current_day_perfect {
            return 0;
        }
        let closed_run = match (self.last_perfect_date, self.last_meal_date) {
            (Some(perfect), Some(open)) if days_between(perfect, open) == 1 => {
                self.perfect_day_run
            }
            _ => 0,
        };
        closed_run + 1
    }

    /// Whether the stored meal streak can still be extended as of
    /// `today` (last qualifying log was today or yesterday).
    ///
    /// The snapshot itself is a pure fold and never decays with wall
    /// time; this is the read-only staleness check for display code.
    pub fn streak_alive(&self, today: NaiveDate) -> bool {
        self.last_meal_date
            .is_some_and(|last| days_between(last, today) <= 1)
    }
}
