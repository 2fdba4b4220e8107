//! Engine facade - the one write path and the read surface
//!
//! `record_event` is the single entry point for new activity: validate,
//! append to the log, fold the snapshot forward, then run the unlock
//! loop. Everything else is a read. Validation is the only fallible
//! step, so a rejected event leaves every piece of state untouched.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::achievements::{
    evaluate, AchievementDefinition, AchievementId, Difficulty, Ledger, LevelUp, Progression,
    CATALOG,
};
use crate::error::EngineError;
use crate::event::ActivityEvent;
use crate::stats::{aggregate, apply_event, StatsSnapshot};

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// The user's local UTC offset, used for calendar-day bucketing
    pub utc_offset: FixedOffset,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            utc_offset: FixedOffset::east_opt(0).expect("zero offset is valid"),
        }
    }
}

impl EngineConfig {
    /// Configuration using the host machine's current UTC offset.
    pub fn local() -> Self {
        Self {
            utc_offset: *chrono::Local::now().offset(),
        }
    }
}

/// A permanent unlock, stamped with the timestamp of the event that
/// caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockRecord {
    pub id: AchievementId,
    pub unlocked_at: DateTime<Utc>,
}

/// What one `record_event` call changed, for the caller's UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    /// Achievements unlocked by this event, in catalog order
    pub unlocked: Vec<UnlockNotice>,
    /// Level change, if the rewards crossed a threshold
    pub level_up: Option<LevelUp>,
    /// Ledger state after the commit
    pub ledger: Ledger,
}

/// Display payload for a single unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnlockNotice {
    #[serde(serialize_with = "serialize_id")]
    pub id: AchievementId,
    pub name: &'static str,
    pub xp_reward: u32,
    pub difficulty: Difficulty,
}

fn serialize_id<S: serde::Serializer>(id: &AchievementId, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(id.as_str())
}

/// The achievement and progression engine.
///
/// Owns the activity log, the derived stats snapshot, the unlock set
/// and the XP ledger. Single-writer by construction: wrap it in
/// [`SharedEngine`] to share across threads.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    log: Vec<ActivityEvent>,
    snapshot: StatsSnapshot,
    unlocked: Vec<UnlockRecord>,
    unlocked_ids: BTreeSet<AchievementId>,
    ledger: Ledger,
    /// Timestamp of the newest committed event. Tracked separately from
    /// the log so ordering survives a snapshot-only restore, where the
    /// log is empty but history exists.
    last_event_at: Option<DateTime<Utc>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            log: Vec::new(),
            snapshot: StatsSnapshot::default(),
            unlocked: Vec::new(),
            unlocked_ids: BTreeSet::new(),
            ledger: Ledger::default(),
            last_event_at: None,
        }
    }

    /// Rebuild an engine from a previously captured log and unlock
    /// history. Used by the restore path; the snapshot and ledger are
    /// recomputed, not trusted.
    pub(crate) fn from_parts(
        config: EngineConfig,
        log: Vec<ActivityEvent>,
        unlocked: Vec<UnlockRecord>,
    ) -> Self {
        let snapshot = aggregate(&log, config.utc_offset);
        let unlocked_ids: BTreeSet<_> = unlocked.iter().map(|u| u.id).collect();
        let xp = unlocked_ids
            .iter()
            .map(|id| u64::from(AchievementDefinition::get(*id).xp_reward))
            .sum();
        let last_event_at = log.last().map(|e| e.timestamp);
        Self {
            config,
            log,
            snapshot,
            unlocked,
            unlocked_ids,
            ledger: Ledger::new(xp),
            last_event_at,
        }
    }

    pub(crate) fn restore_trusted(
        config: EngineConfig,
        log: Vec<ActivityEvent>,
        snapshot: StatsSnapshot,
        unlocked: Vec<UnlockRecord>,
        xp: u64,
        last_event_at: Option<DateTime<Utc>>,
    ) -> Self {
        let unlocked_ids = unlocked.iter().map(|u| u.id).collect();
        let last_event_at = last_event_at.or_else(|| log.last().map(|e| e.timestamp));
        Self {
            config,
            log,
            snapshot,
            unlocked,
            unlocked_ids,
            ledger: Ledger::new(xp),
            last_event_at,
        }
    }

    /// Ingest one activity event.
    ///
    /// Validation happens before any mutation, so an `Err` means
    /// nothing changed. On success the event is in the log, the
    /// snapshot is folded forward, and every achievement the new state
    /// satisfies is unlocked with its XP applied.
    pub fn record_event(&mut self, event: ActivityEvent) -> Result<RecordOutcome, EngineError> {
        event.validate(self.last_event_at)?;

        let unlocked_at = event.timestamp;
        apply_event(&mut self.snapshot, &event, self.config.utc_offset);
        self.log.push(event);
        self.last_event_at = Some(unlocked_at);
        debug!(events = self.log.len(), "event committed");

        let level_before = self.ledger.level;
        let mut notices = Vec::new();

        // XP from an unlock can raise the level, which can itself
        // satisfy a level-gated achievement, so evaluate to a fixpoint.
        // Each pass unlocks at least one new id, so this terminates
        // within the catalog size.
        loop {
            let newly = evaluate(CATALOG, &self.snapshot, self.ledger.level, &self.unlocked_ids);
            if newly.is_empty() {
                break;
            }
            for def in newly {
                self.unlocked_ids.insert(def.id);
                self.unlocked.push(UnlockRecord {
                    id: def.id,
                    unlocked_at,
                });
                self.ledger.apply_reward(def.xp_reward);
                info!(
                    id = def.id.as_str(),
                    name = def.name,
                    xp = def.xp_reward,
                    "achievement unlocked"
                );
                notices.push(UnlockNotice {
                    id: def.id,
                    name: def.name,
                    xp_reward: def.xp_reward,
                    difficulty: def.difficulty,
                });
            }
        }

        let level_up = (self.ledger.level > level_before).then(|| {
            info!(from = level_before, to = self.ledger.level, "level up");
            LevelUp {
                from: level_before,
                to: self.ledger.level,
            }
        });

        Ok(RecordOutcome {
            unlocked: notices,
            level_up,
            ledger: self.ledger,
        })
    }

    // --- read surface ---

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &StatsSnapshot {
        &self.snapshot
    }

    pub fn ledger(&self) -> Ledger {
        self.ledger
    }

    pub fn progression(&self) -> Progression {
        self.ledger.progression()
    }

    pub fn unlocked_ids(&self) -> &BTreeSet<AchievementId> {
        &self.unlocked_ids
    }

    pub fn unlock_records(&self) -> &[UnlockRecord] {
        &self.unlocked
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked_ids.contains(&id)
    }

    /// The full catalog, for listing locked and unlocked achievements.
    pub fn catalog(&self) -> &'static [AchievementDefinition] {
        CATALOG
    }

    pub fn events(&self) -> &[ActivityEvent] {
        &self.log
    }

    /// Timestamp of the newest committed event, if any history exists.
    pub fn last_event_at(&self) -> Option<DateTime<Utc>> {
        self.last_event_at
    }

    /// Recompute the snapshot from the full log and replace the
    /// incremental one. The two are equal by construction; this is the
    /// audit hook that proves it on live data.
    pub fn recompute_snapshot(&mut self) -> &StatsSnapshot {
        self.snapshot = aggregate(&self.log, self.config.utc_offset);
        &self.snapshot
    }
}

/// Thread-safe handle around a single engine instance.
///
/// All state transitions run under one lock, so concurrent
/// `record_event` calls serialize and each one sees the state produced
/// by the previous.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine(Arc<Mutex<Engine>>);

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self(Arc::new(Mutex::new(engine)))
    }

    pub fn record_event(&self, event: ActivityEvent) -> Result<RecordOutcome, EngineError> {
        self.lock().record_event(event)
    }

    /// Run a closure against the locked engine.
    pub fn with<R>(&self, f: impl FnOnce(&Engine) -> R) -> R {
        f(&self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Engine> {
        // A poisoned lock means a panic mid-read; state mutation is
        // transactional so the data itself is still consistent.
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
