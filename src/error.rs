//! Error taxonomy for the engine
//!
//! Every anomaly resolves to a reported condition plus a consistent
//! state; nothing in this crate is allowed to crash the host.

use chrono::{DateTime, Utc};

/// Top-level error type returned by the engine facade
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid event: {0}")]
    InvalidEvent(#[from] InvalidEvent),
}

/// An event rejected at ingestion. The activity log is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEvent {
    #[error("meal event has an empty meal type")]
    MissingMealType,

    #[error("event timestamp {got} predates the last logged event at {last}")]
    OutOfOrder {
        got: DateTime<Utc>,
        last: DateTime<Utc>,
    },
}

/// A defect found in persisted state during restore.
///
/// Faults are never fatal: the engine falls back to a replay of the
/// activity log when one is available, or to a zeroed state otherwise,
/// and reports the faults upward.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateFault {
    #[error("persisted xp is negative: {xp}")]
    NegativeXp { xp: i64 },

    #[error("unlocked achievement id {id:?} is not in the catalog")]
    UnknownAchievementId { id: String },

    #[error("unlock record for {id:?} has an unreadable timestamp {millis}")]
    BadUnlockTimestamp { id: String, millis: i64 },

    #[error("persisted last-event timestamp {millis} is unreadable")]
    BadEventTimestamp { millis: i64 },

    #[error("persisted event #{index} failed replay: {reason}")]
    UnreplayableEvent { index: usize, reason: String },
}
