//! Activity events - the raw substrate every statistic is derived from
//!
//! Events are immutable once appended to the log. Meal classification
//! facts (high protein, balanced macros, goal met) are computed
//! upstream by the nutrition analyzer and arrive as booleans here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InvalidEvent;

/// One observed user action, stamped with the UTC instant it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// What the user did. Meal facts exist iff the event is a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    MealLogged { facts: MealFacts },
    ScanPerformed,
    WaterTracked,
    FavouriteSaved,
}

/// Upstream-computed facts about a logged meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealFacts {
    /// Free-form meal type label ("breakfast", "pasta", ...), used for
    /// the distinct-meal-type tally
    pub meal_type: String,
    pub is_breakfast: bool,
    pub is_dinner: bool,
    pub is_veggie_rich: bool,
    /// 40g+ protein, per the analyzer's threshold
    pub is_high_protein: bool,
    pub is_balanced_macro: bool,
    /// Whether all daily goals were met as of this check
    pub calories_goal_met_day: bool,
}

impl ActivityEvent {
    pub fn new(timestamp: DateTime<Utc>, kind: EventKind) -> Self {
        Self { timestamp, kind }
    }

    pub fn meal(timestamp: DateTime<Utc>, facts: MealFacts) -> Self {
        Self::new(timestamp, EventKind::MealLogged { facts })
    }

    /// Facts for meal events, None otherwise.
    pub fn meal_facts(&self) -> Option<&MealFacts> {
        match &self.kind {
            EventKind::MealLogged { facts } => Some(facts),
            _ => None,
        }
    }

    /// Validate the event for ingestion.
    ///
    /// `last_logged` is the timestamp of the newest event already
    /// recorded; recorded history is timestamp-ascending (ties allowed,
    /// broken by insertion order), so an older timestamp is rejected.
    pub fn validate(&self, last_logged: Option<DateTime<Utc>>) -> Result<(), InvalidEvent> {
        if let Some(facts) = self.meal_facts() {
            if facts.meal_type.trim().is_empty() {
                return Err(InvalidEvent::MissingMealType);
            }
        }
        if let Some(last) = last_logged {
            if self.timestamp < last {
                return Err(InvalidEvent::OutOfOrder {
                    got: self.timestamp,
                    last,
                });
            }
        }
        Ok(())
    }
}
