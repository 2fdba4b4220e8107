//! State capture and restore
//!
//! Persisted state is a plain serde blob the host app stores wherever
//! it likes. Restore never fails: defects in the blob are collected as
//! [`StateFault`]s and the engine falls back down a recovery ladder,
//! from trusting the snapshot to replaying the log to starting fresh.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::achievements::AchievementId;
use crate::engine::{Engine, EngineConfig, UnlockRecord};
use crate::error::StateFault;
use crate::event::ActivityEvent;
use crate::stats::StatsSnapshot;

/// The durable form of the engine's state.
///
/// The log is the source of truth; the snapshot and xp are derivable
/// caches carried so a restore does not have to replay history. Hosts
/// that trim the log can persist the snapshot alone, at the cost of
/// losing the replay fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<ActivityEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<StatsSnapshot>,
    #[serde(default)]
    pub unlocked: Vec<PersistedUnlock>,
    #[serde(default)]
    pub xp: i64,
    /// Epoch-millis stamp of the newest event; keeps the ordering check
    /// effective when the blob carries no log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event_at: Option<i64>,
}

/// One unlock at the storage boundary: string id, epoch-millis stamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedUnlock {
    pub id: String,
    pub unlocked_at: i64,
}

/// How a restore arrived at its engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Blob was clean; snapshot and ledger taken as-is
    TrustedSnapshot,
    /// Blob was clean but carried no snapshot; recomputed from the log
    RecomputedFromLog,
    /// Blob was faulty; state regenerated by replaying the event log
    ReplayedLog,
    /// Blob was faulty with no usable log; started from zero
    Reset,
}

/// A restored engine plus how it was obtained.
#[derive(Debug)]
pub struct RestoreOutcome {
    pub engine: Engine,
    pub recovery: Recovery,
    /// Defects found in the blob; empty on the trusted paths
    pub faults: Vec<StateFault>,
}

impl Engine {
    /// Capture durable state. `include_log` controls whether the full
    /// activity log travels with the blob.
    pub fn persist(&self, include_log: bool) -> PersistedState {
        PersistedState {
            events: include_log.then(|| self.events().to_vec()),
            snapshot: Some(self.snapshot().clone()),
            unlocked: self
                .unlock_records()
                .iter()
                .map(|record| PersistedUnlock {
                    id: record.id.as_str().to_string(),
                    unlocked_at: record.unlocked_at.timestamp_millis(),
                })
                .collect(),
            xp: self.ledger().xp as i64,
            last_event_at: self.last_event_at().map(|t| t.timestamp_millis()),
        }
    }

    /// Restore from a persisted blob. Never fails; see [`Recovery`] for
    /// the fallback ladder.
    pub fn restore(state: PersistedState, config: EngineConfig) -> RestoreOutcome {
        let mut faults = Vec::new();

        if state.xp < 0 {
            faults.push(StateFault::NegativeXp { xp: state.xp });
        }

        let mut last_event_at = None;
        if let Some(millis) = state.last_event_at {
            match DateTime::from_timestamp_millis(millis) {
                Some(instant) => last_event_at = Some(instant),
                None => faults.push(StateFault::BadEventTimestamp { millis }),
            }
        }

        let mut unlocked = Vec::with_capacity(state.unlocked.len());
        for persisted in &state.unlocked {
            let Some(id) = AchievementId::from_str(&persisted.id) else {
                faults.push(StateFault::UnknownAchievementId {
                    id: persisted.id.clone(),
                });
                continue;
            };
            let Some(unlocked_at) = DateTime::from_timestamp_millis(persisted.unlocked_at) else {
                faults.push(StateFault::BadUnlockTimestamp {
                    id: persisted.id.clone(),
                    millis: persisted.unlocked_at,
                });
                continue;
            };
            unlocked.push(UnlockRecord { id, unlocked_at });
        }

        if faults.is_empty() {
            let log = state.events.unwrap_or_default();
            return match state.snapshot {
                Some(snapshot) => RestoreOutcome {
                    engine: Engine::restore_trusted(
                        config,
                        log,
                        snapshot,
                        unlocked,
                        state.xp as u64,
                        last_event_at,
                    ),
                    recovery: Recovery::TrustedSnapshot,
                    faults,
                },
                None => RestoreOutcome {
                    engine: Engine::from_parts(config, log, unlocked),
                    recovery: Recovery::RecomputedFromLog,
                    faults,
                },
            };
        }

        for fault in &faults {
            warn!(%fault, "persisted state fault");
        }

        // Faulty blob: the cached snapshot, unlocks and xp cannot be
        // trusted as a set, so regenerate everything from the log.
        match state.events {
            Some(events) => {
                let mut engine = Engine::new(config);
                for (index, event) in events.into_iter().enumerate() {
                    if let Err(err) = engine.record_event(event) {
                        let fault = StateFault::UnreplayableEvent {
                            index,
                            reason: err.to_string(),
                        };
                        warn!(%fault, "skipping event during replay");
                        faults.push(fault);
                    }
                }
                RestoreOutcome {
                    engine,
                    recovery: Recovery::ReplayedLog,
                    faults,
                }
            }
            None => {
                warn!("no event log available, resetting progression state");
                RestoreOutcome {
                    engine: Engine::new(config),
                    recovery: Recovery::Reset,
                    faults,
                }
            }
        }
    }
}
