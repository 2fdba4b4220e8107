//! Rule evaluation over the stats snapshot
//!
//! Stateless: given a snapshot, the current level and the set of
//! already-unlocked ids, return which catalog entries newly qualify.
//! The engine owns when to run this and what to do with the result.

use std::collections::BTreeSet;

use tracing::debug;

use super::definitions::{AchievementDefinition, AchievementId};
use crate::stats::StatsSnapshot;

/// Newly satisfied achievements, in catalog order.
///
/// Already-unlocked ids are skipped, so an unlock can never repeat and
/// re-evaluating an unchanged snapshot yields nothing.
pub fn evaluate(
    catalog: &'static [AchievementDefinition],
    snapshot: &StatsSnapshot,
    level: u32,
    unlocked: &BTreeSet<AchievementId>,
) -> Vec<&'static AchievementDefinition> {
    let newly: Vec<_> = catalog
        .iter()
        .filter(|def| !unlocked.contains(&def.id) && def.requirement.is_met(snapshot, level))
        .collect();
    if !newly.is_empty() {
        debug!(count = newly.len(), "achievements newly satisfied");
    }
    newly
}
