//! Achievement catalog, rule evaluation and XP progression
//!
//! ```text
//! StatsSnapshot ──> evaluator ──> unlocks ──> Ledger (XP / level)
//!                      ^                          │
//!                      └── level rules read ──────┘
//! ```

mod definitions;
mod evaluator;
mod levels;

pub use definitions::{
    AchievementDefinition, AchievementId, Difficulty, Requirement, CATALOG,
};
pub use evaluator::evaluate;
pub use levels::{level_for_xp, xp_for_next, xp_threshold, Ledger, LevelUp, Progression, MAX_LEVEL};
