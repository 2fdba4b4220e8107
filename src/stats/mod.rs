//! Statistics aggregation for the Nutrio engine
//!
//! Folds the activity log into a [`StatsSnapshot`]: counts, calendar
//! streaks, classification tallies, perfect-day tracking.
//!
//! ```text
//! ActivityEvent ──► apply_event ──► StatsSnapshot ──► rule evaluator
//!                   (one fold step, also the unit
//!                    of the full recompute)
//! ```
//!
//! The fold is pure: two engines fed the same ordered log produce
//! identical snapshots, and incremental updates agree bit-for-bit with
//! a full recompute.

mod aggregator;
mod local_day;
mod snapshot;

pub use aggregator::{aggregate, apply_event};
pub use local_day::{days_between, local_date, local_hour};
pub use snapshot::StatsSnapshot;
