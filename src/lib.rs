//! Nutrio Engine - achievements and progression for the Nutrio tracker
//!
//! Turns a stream of user activity (meal logs, scans, water tracking,
//! favourites) into behavioral statistics, achievement unlocks and an
//! XP/level progression. The engine is a deterministic in-process
//! library: same event log in, same state out, every time.
//!
//! ## Pipeline
//!
//! 1. **Activity log**: validated, timestamp-ordered [`ActivityEvent`]s.
//! 2. **Stats aggregation**: a pure fold producing a [`StatsSnapshot`].
//! 3. **Rule evaluation**: the fixed achievement catalog checked
//!    against the snapshot and current level.
//! 4. **Progression**: unlock rewards feed the XP [`Ledger`], which
//!    derives the level.
//!
//! [`Engine::record_event`] drives all four stages atomically; wrap the
//! engine in [`SharedEngine`] to share it across threads.

pub mod achievements;
pub mod engine;
pub mod error;
pub mod event;
pub mod persist;
pub mod stats;

pub use achievements::{
    AchievementDefinition, AchievementId, Difficulty, Ledger, LevelUp, Progression, Requirement,
    CATALOG, MAX_LEVEL,
};
pub use engine::{Engine, EngineConfig, RecordOutcome, SharedEngine, UnlockNotice, UnlockRecord};
pub use error::{EngineError, InvalidEvent, StateFault};
pub use event::{ActivityEvent, EventKind, MealFacts};
pub use persist::{PersistedState, PersistedUnlock, Recovery, RestoreOutcome};
pub use stats::StatsSnapshot;
