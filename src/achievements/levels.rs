//! XP ledger and level curve
//!
//! XP only ever increases (unlocks are permanent, rewards are never
//! clawed back), so the level derived from it is monotone too. The
//! curve is quadratic: each level costs 25 XP more than the one before,
//! starting at 150 for level 2 and topping out at level 50.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Level cap; XP keeps accumulating past it but the level stays put.
pub const MAX_LEVEL: u32 = 50;

/// Total XP required to reach `level`.
///
/// Closed form of the arithmetic series 150, 175, 200, ...:
/// `threshold(n) = 25 * (n - 1) * (n + 10) / 2`. Level 1 costs nothing,
/// level 2 costs 150, level 50 costs 36 750.
pub fn xp_threshold(level: u32) -> u64 {
    let n = u64::from(level.clamp(1, MAX_LEVEL));
    25 * (n - 1) * (n + 10) / 2
}

/// The level a lifetime XP total corresponds to.
pub fn level_for_xp(xp: u64) -> u32 {
    for level in (1..=MAX_LEVEL).rev() {
        if xp >= xp_threshold(level) {
            return level;
        }
    }
    1
}

/// XP needed to reach the next level, or None at the cap.
pub fn xp_for_next(level: u32) -> Option<u64> {
    if level >= MAX_LEVEL {
        None
    } else {
        Some(xp_threshold(level + 1))
    }
}

/// A level increase produced by an XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub from: u32,
    pub to: u32,
}

/// Lifetime XP and the level derived from it.
///
/// The pair is kept consistent by construction: the only mutator is
/// `apply_reward`, which re-derives the level after adding XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub xp: u64,
    pub level: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Ledger {
    pub fn new(xp: u64) -> Self {
        Self {
            xp,
            level: level_for_xp(xp),
        }
    }

    /// Add an achievement reward; returns the level change if one
    /// boundary (or several) was crossed.
    pub fn apply_reward(&mut self, xp_reward: u32) -> Option<LevelUp> {
        let from = self.level;
        self.xp += u64::from(xp_reward);
        self.level = level_for_xp(self.xp);
        if self.level > from {
            debug!(from, to = self.level, xp = self.xp, "level up");
            Some(LevelUp {
                from,
                to: self.level,
            })
        } else {
            None
        }
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Progress view for display code.
    pub fn progression(&self) -> Progression {
        let current_floor = xp_threshold(self.level);
        let next = xp_for_next(self.level);
        let progress_to_next = match next {
            Some(next) => {
                let span = next - current_floor;
                let into = self.xp.saturating_sub(current_floor).min(span);
                into as f32 / span as f32
            }
            None => 1.0,
        };
        Progression {
            level: self.level,
            xp: self.xp,
            xp_for_next_level: next,
            progress_to_next,
        }
    }
}

/// Read-only progression summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub xp: u64,
    /// Total XP threshold of the next level; None at the cap
    pub xp_for_next_level: Option<u64>,
    /// Fraction of the current level span completed, 0.0..=1.0
    pub progress_to_next: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_anchors() {
        assert_eq!(xp_threshold(1), 0);
        assert_eq!(xp_threshold(2), 150);
        assert_eq!(xp_threshold(3), 325);
        assert_eq!(xp_threshold(4), 525);
        assert_eq!(xp_threshold(50), 36_750);
    }

    #[test]
    fn test_level_for_xp_is_consistent_with_thresholds() {
        for level in 1..=MAX_LEVEL {
            let at = xp_threshold(level);
            assert_eq!(level_for_xp(at), level, "at threshold of {level}");
            if level > 1 {
                assert_eq!(level_for_xp(at - 1), level - 1, "just below {level}");
            }
        }
    }

    #[test]
    fn test_level_monotone_in_xp() {
        let mut previous = 0;
        for xp in (0..40_000).step_by(37) {
            let level = level_for_xp(xp);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn test_small_reward_stays_level_one() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.apply_reward(100), None);
        assert_eq!(ledger.level, 1);
        assert_eq!(ledger.xp, 100);
    }

    #[test]
    fn test_reward_crossing_several_levels() {
        let mut ledger = Ledger::default();
        let up = ledger.apply_reward(600).expect("600 XP crosses level 2");
        assert_eq!(up, LevelUp { from: 1, to: 4 });
        assert_eq!(ledger.level, 4);
    }

    #[test]
    fn test_xp_keeps_accumulating_at_cap() {
        let mut ledger = Ledger::new(xp_threshold(MAX_LEVEL));
        assert!(ledger.is_max_level());
        assert_eq!(ledger.apply_reward(5000), None);
        assert_eq!(ledger.level, MAX_LEVEL);
        assert_eq!(ledger.xp, 36_750 + 5000);
        assert_eq!(ledger.progression().progress_to_next, 1.0);
    }

    #[test]
    fn test_progression_fraction() {
        let ledger = Ledger::new(75);
        let progression = ledger.progression();
        assert_eq!(progression.level, 1);
        assert_eq!(progression.xp_for_next_level, Some(150));
        assert!((progression.progress_to_next - 0.5).abs() < f32::EPSILON);
    }
}
