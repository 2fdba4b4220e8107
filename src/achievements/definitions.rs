//! Achievement definitions and metadata
//!
//! The full Nutrio catalog: 48 achievements from easy to hard. Loaded
//! once as static data and never mutated; ids are stable and globally
//! unique.

use serde::{Deserialize, Serialize};

use crate::stats::StatsSnapshot;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AchievementId {
    // Easy
    FirstMeal,
    FirstFavourite,
    ThreeMeals,
    EarlyBird,
    NightOwlSingle,
    TwoDayStreak,
    ScannerFirst,
    WaterTracker,
    FirstBreakfast,
    FiveMeals,

    // Medium
    Meals10,
    WeekStreak,
    ProteinPower,
    VeggieStart,
    BalancedMeal,
    Meals25,
    TwoWeekStreak,
    ScannerRegular,
    MorningRoutine,
    ExplorerStart,
    Level5,
    FiveFavourites,
    HydrationWeek,
    DinnerRoutine,
    ThreeSquares,

    // Hard
    Meals50,
    Meals100,
    Meals250,
    Meals500,
    Meals1000,
    Streak30,
    Streak60,
    Streak100,
    Streak365,
    Level10,
    Level25,
    Level50,
    VeggieLover,
    Explorer,
    ScannerPro,
    MorningMaster,
    NightMaster,
    Perfectionist,
    PerfectWeek,
    Comeback,
    MacroMaster,
    ProteinLegend,
    HydrationMaster,
}

impl AchievementId {
    /// Stable string id used at the persistence boundary
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstMeal => "first_meal",
            Self::FirstFavourite => "first_favourite",
            Self::ThreeMeals => "three_meals",
            Self::EarlyBird => "early_bird",
            Self::NightOwlSingle => "night_owl_single",
            Self::TwoDayStreak => "two_day_streak",
            Self::ScannerFirst => "scanner_first",
            Self::WaterTracker => "water_tracker",
            Self::FirstBreakfast => "first_breakfast",
            Self::FiveMeals => "five_meals",
            Self::Meals10 => "meals_10",
            Self::WeekStreak => "week_streak",
            Self::ProteinPower => "protein_power",
            Self::VeggieStart => "veggie_start",
            Self::BalancedMeal => "balanced_meal",
            Self::Meals25 => "meals_25",
            Self::TwoWeekStreak => "two_week_streak",
            Self::ScannerRegular => "scanner_regular",
            Self::MorningRoutine => "morning_routine",
            Self::ExplorerStart => "explorer_start",
            Self::Level5 => "level_5",
            Self::FiveFavourites => "five_favourites",
            Self::HydrationWeek => "hydration_week",
            Self::DinnerRoutine => "dinner_routine",
            Self::ThreeSquares => "three_squares",
            Self::Meals50 => "meals_50",
            Self::Meals100 => "meals_100",
            Self::Meals250 => "meals_250",
            Self::Meals500 => "meals_500",
            Self::Meals1000 => "meals_1000",
            Self::Streak30 => "streak_30",
            Self::Streak60 => "streak_60",
            Self::Streak100 => "streak_100",
            Self::Streak365 => "streak_365",
            Self::Level10 => "level_10",
            Self::Level25 => "level_25",
            Self::Level50 => "level_50",
            Self::VeggieLover => "veggie_lover",
            Self::Explorer => "explorer",
            Self::ScannerPro => "scanner_pro",
            Self::MorningMaster => "morning_master",
            Self::NightMaster => "night_master",
            Self::Perfectionist => "perfectionist",
            Self::PerfectWeek => "perfect_week",
            Self::Comeback => "comeback",
            Self::MacroMaster => "macro_master",
            Self::ProteinLegend => "protein_legend",
            Self::HydrationMaster => "hydration_master",
        }
    }

    /// Parse a persisted string id
    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }

    /// All achievement ids, in catalog order
    pub fn all() -> &'static [AchievementId] {
        static ALL: [AchievementId; 48] = [
            AchievementId::FirstMeal,
            AchievementId::FirstFavourite,
            AchievementId::ThreeMeals,
            AchievementId::EarlyBird,
            AchievementId::NightOwlSingle,
            AchievementId::TwoDayStreak,
            AchievementId::ScannerFirst,
            AchievementId::WaterTracker,
            AchievementId::FirstBreakfast,
            AchievementId::FiveMeals,
            AchievementId::Meals10,
            AchievementId::WeekStreak,
            AchievementId::ProteinPower,
            AchievementId::VeggieStart,
            AchievementId::BalancedMeal,
            AchievementId::Meals25,
            AchievementId::TwoWeekStreak,
            AchievementId::ScannerRegular,
            AchievementId::MorningRoutine,
            AchievementId::ExplorerStart,
            AchievementId::Level5,
            AchievementId::FiveFavourites,
            AchievementId::HydrationWeek,
            AchievementId::DinnerRoutine,
            AchievementId::ThreeSquares,
            AchievementId::Meals50,
            AchievementId::Meals100,
            AchievementId::Meals250,
            AchievementId::Meals500,
            AchievementId::Meals1000,
            AchievementId::Streak30,
            AchievementId::Streak60,
            AchievementId::Streak100,
            AchievementId::Streak365,
            AchievementId::Level10,
            AchievementId::Level25,
            AchievementId::Level50,
            AchievementId::VeggieLover,
            AchievementId::Explorer,
            AchievementId::ScannerPro,
            AchievementId::MorningMaster,
            AchievementId::NightMaster,
            AchievementId::Perfectionist,
            AchievementId::PerfectWeek,
            AchievementId::Comeback,
            AchievementId::MacroMaster,
            AchievementId::ProteinLegend,
            AchievementId::HydrationMaster,
        ];
        &ALL
    }
}

/// Difficulty tier for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Unlock requirement: a predicate over the stats snapshot (and, for
/// `Level`, the progression ledger). One variant per rule kind so the
/// evaluator match is exhaustive and adding a kind is a compile-time
/// checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Total meals logged >= count
    MealsLogged { count: u64 },
    /// Current daily logging streak >= days
    Streak { days: u32 },
    FavouritesSaved { count: u64 },
    ScansCompleted { count: u64 },
    /// Meals with 40g+ protein >= count
    HighProtein { count: u32 },
    VeggieMeals { count: u32 },
    BalancedMacros { count: u32 },
    BreakfastStreak { days: u32 },
    DinnerStreak { days: u32 },
    UniqueMeals { count: u32 },
    /// Max meals logged on any single local day >= count
    MealsPerDay { count: u32 },
    Level { value: u32 },
    /// At least one day with every daily goal met
    PerfectDay,
    /// Seven consecutive perfect days
    PerfectWeek,
    /// A meal logged after >= days of inactivity
    ReturnAfterBreak { days: u32 },
    /// A meal logged before the given local hour
    EarlyLog { hour: u32 },
    /// A meal logged at or after the given local hour
    LateLog { hour: u32 },
    /// Water tracked on >= days distinct days
    WaterTracked { days: u32 },
    /// First breakfast-flagged meal
    FirstBreakfast,
}

impl Requirement {
    /// Test the requirement against a snapshot and the current level.
    pub fn is_met(&self, snapshot: &StatsSnapshot, level: u32) -> bool {
        match *self {
            Self::MealsLogged { count } => snapshot.total_meals_logged >= count,
            Self::Streak { days } => snapshot.current_streak_days >= days,
            Self::FavouritesSaved { count } => snapshot.total_favourites >= count,
            Self::ScansCompleted { count } => snapshot.total_scans >= count,
            Self::HighProtein { count } => snapshot.high_protein_meal_count >= count,
            Self::VeggieMeals { count } => snapshot.veggie_meal_count >= count,
            Self::BalancedMacros { count } => snapshot.balanced_macro_meal_count >= count,
            Self::BreakfastStreak { days } => snapshot.breakfast_streak_days >= days,
            Self::DinnerStreak { days } => snapshot.dinner_streak_days >= days,
            Self::UniqueMeals { count } => snapshot.unique_meal_types_logged() >= count,
            Self::MealsPerDay { count } => snapshot.max_meals_in_single_day >= count,
            Self::Level { value } => level >= value,
            Self::PerfectDay => snapshot.perfect_days_total() >= 1,
            Self::PerfectWeek => snapshot.perfect_run_days() >= 7,
            Self::ReturnAfterBreak { days } => snapshot.days_since_last_log_before_return >= days,
            Self::EarlyLog { hour } => snapshot.earliest_meal_hour.is_some_and(|h| h < hour),
            Self::LateLog { hour } => snapshot.latest_meal_hour.is_some_and(|h| h >= hour),
            Self::WaterTracked { days } => snapshot.total_water_days_tracked >= days,
            Self::FirstBreakfast => snapshot.breakfast_meal_count >= 1,
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct AchievementDefinition {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub xp_reward: u32,
    pub difficulty: Difficulty,
    pub requirement: Requirement,
}

/// The full catalog, in stable evaluation order.
pub static CATALOG: &[AchievementDefinition] = &[
    // === EASY ===
    AchievementDefinition {
        id: AchievementId::FirstMeal,
        name: "First Step",
        description: "Log your very first meal",
        icon: "🍽️",
        xp_reward: 50,
        difficulty: Difficulty::Easy,
        requirement: Requirement::MealsLogged { count: 1 },
    },
    AchievementDefinition {
        id: AchievementId::FirstFavourite,
        name: "Found a Gem",
        description: "Save your first favourite meal",
        icon: "❤️",
        xp_reward: 50,
        difficulty: Difficulty::Easy,
        requirement: Requirement::FavouritesSaved { count: 1 },
    },
    AchievementDefinition {
        id: AchievementId::ThreeMeals,
        name: "Triple Threat",
        description: "Log 3 meals in total",
        icon: "🍱",
        xp_reward: 75,
        difficulty: Difficulty::Easy,
        requirement: Requirement::MealsLogged { count: 3 },
    },
    AchievementDefinition {
        id: AchievementId::EarlyBird,
        name: "Early Bird",
        description: "Log a meal before 7 AM",
        icon: "🐦",
        xp_reward: 75,
        difficulty: Difficulty::Easy,
        requirement: Requirement::EarlyLog { hour: 7 },
    },
    AchievementDefinition {
        id: AchievementId::NightOwlSingle,
        name: "Night Crawler",
        description: "Log a meal after 10 PM",
        icon: "🦉",
        xp_reward: 75,
        difficulty: Difficulty::Easy,
        requirement: Requirement::LateLog { hour: 22 },
    },
    AchievementDefinition {
        id: AchievementId::TwoDayStreak,
        name: "Back to Back",
        description: "Log meals for 2 consecutive days",
        icon: "🔗",
        xp_reward: 100,
        difficulty: Difficulty::Easy,
        requirement: Requirement::Streak { days: 2 },
    },
    AchievementDefinition {
        id: AchievementId::ScannerFirst,
        name: "Scanner Starter",
        description: "Use the barcode scanner for the first time",
        icon: "📱",
        xp_reward: 50,
        difficulty: Difficulty::Easy,
        requirement: Requirement::ScansCompleted { count: 1 },
    },
    AchievementDefinition {
        id: AchievementId::WaterTracker,
        name: "Hydration Station",
        description: "Track your water intake for 1 day",
        icon: "💧",
        xp_reward: 50,
        difficulty: Difficulty::Easy,
        requirement: Requirement::WaterTracked { days: 1 },
    },
    AchievementDefinition {
        id: AchievementId::FirstBreakfast,
        name: "Breakfast Champion",
        description: "Log your first breakfast",
        icon: "🌅",
        xp_reward: 50,
        difficulty: Difficulty::Easy,
        requirement: Requirement::FirstBreakfast,
    },
    AchievementDefinition {
        id: AchievementId::FiveMeals,
        name: "Gaining Momentum",
        description: "Log 5 meals total",
        icon: "⚡",
        xp_reward: 100,
        difficulty: Difficulty::Easy,
        requirement: Requirement::MealsLogged { count: 5 },
    },
    // === MEDIUM ===
    AchievementDefinition {
        id: AchievementId::Meals10,
        name: "Double Digits",
        description: "Log 10 meals",
        icon: "🎯",
        xp_reward: 150,
        difficulty: Difficulty::Medium,
        requirement: Requirement::MealsLogged { count: 10 },
    },
    AchievementDefinition {
        id: AchievementId::WeekStreak,
        name: "Week Warrior",
        description: "Maintain a 7-day logging streak",
        icon: "📅",
        xp_reward: 250,
        difficulty: Difficulty::Medium,
        requirement: Requirement::Streak { days: 7 },
    },
    AchievementDefinition {
        id: AchievementId::ProteinPower,
        name: "Protein Powerhouse",
        description: "Log a meal with 40g+ protein",
        icon: "🥩",
        xp_reward: 150,
        difficulty: Difficulty::Medium,
        requirement: Requirement::HighProtein { count: 1 },
    },
    AchievementDefinition {
        id: AchievementId::VeggieStart,
        name: "Green Thumb",
        description: "Log 5 vegetable-rich meals",
        icon: "🥗",
        xp_reward: 150,
        difficulty: Difficulty::Medium,
        requirement: Requirement::VeggieMeals { count: 5 },
    },
    AchievementDefinition {
        id: AchievementId::BalancedMeal,
        name: "Perfect Balance",
        description: "Log a perfectly balanced meal",
        icon: "⚖️",
        xp_reward: 200,
        difficulty: Difficulty::Medium,
        requirement: Requirement::BalancedMacros { count: 1 },
    },
    AchievementDefinition {
        id: AchievementId::Meals25,
        name: "Quarter Century",
        description: "Log 25 meals",
        icon: "🎊",
        xp_reward: 250,
        difficulty: Difficulty::Medium,
        requirement: Requirement::MealsLogged { count: 25 },
    },
    AchievementDefinition {
        id: AchievementId::TwoWeekStreak,
        name: "Fortnight Fighter",
        description: "Maintain a 14-day streak",
        icon: "🔥",
        xp_reward: 350,
        difficulty: Difficulty::Medium,
        requirement: Requirement::Streak { days: 14 },
    },
    AchievementDefinition {
        id: AchievementId::ScannerRegular,
        name: "Scan Master",
        description: "Use barcode scanner 10 times",
        icon: "📲",
        xp_reward: 200,
        difficulty: Difficulty::Medium,
        requirement: Requirement::ScansCompleted { count: 10 },
    },
    AchievementDefinition {
        id: AchievementId::MorningRoutine,
        name: "Morning Ritual",
        description: "Log breakfast 5 days in a row",
        icon: "☀️",
        xp_reward: 200,
        difficulty: Difficulty::Medium,
        requirement: Requirement::BreakfastStreak { days: 5 },
    },
    AchievementDefinition {
        id: AchievementId::ExplorerStart,
        name: "Culinary Curious",
        description: "Log 10 different meal types",
        icon: "🌍",
        xp_reward: 200,
        difficulty: Difficulty::Medium,
        requirement: Requirement::UniqueMeals { count: 10 },
    },
    AchievementDefinition {
        id: AchievementId::Level5,
        name: "Rising Star",
        description: "Reach level 5",
        icon: "🌟",
        xp_reward: 250,
        difficulty: Difficulty::Medium,
        requirement: Requirement::Level { value: 5 },
    },
    AchievementDefinition {
        id: AchievementId::FiveFavourites,
        name: "Favorites Collection",
        description: "Save 5 favourite meals",
        icon: "💖",
        xp_reward: 150,
        difficulty: Difficulty::Medium,
        requirement: Requirement::FavouritesSaved { count: 5 },
    },
    AchievementDefinition {
        id: AchievementId::HydrationWeek,
        name: "Hydration Hero",
        description: "Track water intake for 7 days",
        icon: "💦",
        xp_reward: 200,
        difficulty: Difficulty::Medium,
        requirement: Requirement::WaterTracked { days: 7 },
    },
    AchievementDefinition {
        id: AchievementId::DinnerRoutine,
        name: "Evening Consistency",
        description: "Log dinner 5 days in a row",
        icon: "🌙",
        xp_reward: 200,
        difficulty: Difficulty::Medium,
        requirement: Requirement::DinnerStreak { days: 5 },
    },
    AchievementDefinition {
        id: AchievementId::ThreeSquares,
        name: "Three Square Meals",
        description: "Log 3 meals in one day",
        icon: "🍴",
        xp_reward: 150,
        difficulty: Difficulty::Medium,
        requirement: Requirement::MealsPerDay { count: 3 },
    },
    // === HARD ===
    AchievementDefinition {
        id: AchievementId::Meals50,
        name: "Half Century",
        description: "Log 50 meals",
        icon: "⭐",
        xp_reward: 400,
        difficulty: Difficulty::Hard,
        requirement: Requirement::MealsLogged { count: 50 },
    },
    AchievementDefinition {
        id: AchievementId::Meals100,
        name: "Century Club",
        description: "Log 100 meals",
        icon: "💯",
        xp_reward: 600,
        difficulty: Difficulty::Hard,
        requirement: Requirement::MealsLogged { count: 100 },
    },
    AchievementDefinition {
        id: AchievementId::Meals250,
        name: "Nutrition Master",
        description: "Log 250 meals",
        icon: "🏆",
        xp_reward: 1000,
        difficulty: Difficulty::Hard,
        requirement: Requirement::MealsLogged { count: 250 },
    },
    AchievementDefinition {
        id: AchievementId::Meals500,
        name: "Legendary Logger",
        description: "Log 500 meals",
        icon: "👑",
        xp_reward: 2000,
        difficulty: Difficulty::Hard,
        requirement: Requirement::MealsLogged { count: 500 },
    },
    AchievementDefinition {
        id: AchievementId::Meals1000,
        name: "Millennium Master",
        description: "Log 1000 meals - Ultimate dedication!",
        icon: "🎆",
        xp_reward: 5000,
        difficulty: Difficulty::Hard,
        requirement: Requirement::MealsLogged { count: 1000 },
    },
    AchievementDefinition {
        id: AchievementId::Streak30,
        name: "Monthly Dedication",
        description: "Maintain a 30-day streak",
        icon: "🔥",
        xp_reward: 600,
        difficulty: Difficulty::Hard,
        requirement: Requirement::Streak { days: 30 },
    },
    AchievementDefinition {
        id: AchievementId::Streak60,
        name: "Two Month Hero",
        description: "Maintain a 60-day streak",
        icon: "💪",
        xp_reward: 1200,
        difficulty: Difficulty::Hard,
        requirement: Requirement::Streak { days: 60 },
    },
    AchievementDefinition {
        id: AchievementId::Streak100,
        name: "Centurion Streak",
        description: "Maintain a 100-day streak",
        icon: "🎖️",
        xp_reward: 2500,
        difficulty: Difficulty::Hard,
        requirement: Requirement::Streak { days: 100 },
    },
    AchievementDefinition {
        id: AchievementId::Streak365,
        name: "Year-Long Champion",
        description: "Maintain a 365-day streak - Legendary!",
        icon: "🏅",
        xp_reward: 10000,
        difficulty: Difficulty::Hard,
        requirement: Requirement::Streak { days: 365 },
    },
    AchievementDefinition {
        id: AchievementId::Level10,
        name: "Nutrition Expert",
        description: "Reach level 10",
        icon: "💎",
        xp_reward: 500,
        difficulty: Difficulty::Hard,
        requirement: Requirement::Level { value: 10 },
    },
    AchievementDefinition {
        id: AchievementId::Level25,
        name: "Health Guru",
        description: "Reach level 25",
        icon: "🎯",
        xp_reward: 1500,
        difficulty: Difficulty::Hard,
        requirement: Requirement::Level { value: 25 },
    },
    AchievementDefinition {
        id: AchievementId::Level50,
        name: "Nutrition Legend",
        description: "Reach level 50",
        icon: "🌠",
        xp_reward: 5000,
        difficulty: Difficulty::Hard,
        requirement: Requirement::Level { value: 50 },
    },
    AchievementDefinition {
        id: AchievementId::VeggieLover,
        name: "Plant-Based Pro",
        description: "Log 25 vegetable-rich meals",
        icon: "🌱",
        xp_reward: 400,
        difficulty: Difficulty::Hard,
        requirement: Requirement::VeggieMeals { count: 25 },
    },
    AchievementDefinition {
        id: AchievementId::Explorer,
        name: "Food Explorer",
        description: "Log 30 different meal types",
        icon: "🗺️",
        xp_reward: 500,
        difficulty: Difficulty::Hard,
        requirement: Requirement::UniqueMeals { count: 30 },
    },
    AchievementDefinition {
        id: AchievementId::ScannerPro,
        name: "Scanner Virtuoso",
        description: "Use barcode scanner 50 times",
        icon: "📡",
        xp_reward: 500,
        difficulty: Difficulty::Hard,
        requirement: Requirement::ScansCompleted { count: 50 },
    },
    AchievementDefinition {
        id: AchievementId::MorningMaster,
        name: "Breakfast Veteran",
        description: "Log breakfast 30 days in a row",
        icon: "🌄",
        xp_reward: 600,
        difficulty: Difficulty::Hard,
        requirement: Requirement::BreakfastStreak { days: 30 },
    },
    AchievementDefinition {
        id: AchievementId::NightMaster,
        name: "Dinner Devotee",
        description: "Log dinner 30 days in a row",
        icon: "🌃",
        xp_reward: 600,
        difficulty: Difficulty::Hard,
        requirement: Requirement::DinnerStreak { days: 30 },
    },
    AchievementDefinition {
        id: AchievementId::Perfectionist,
        name: "Perfectionist",
        description: "Complete all daily goals in one day",
        icon: "✨",
        xp_reward: 400,
        difficulty: Difficulty::Hard,
        requirement: Requirement::PerfectDay,
    },
    AchievementDefinition {
        id: AchievementId::PerfectWeek,
        name: "Flawless Week",
        description: "Complete all daily goals for 7 days straight",
        icon: "🌟",
        xp_reward: 1000,
        difficulty: Difficulty::Hard,
        requirement: Requirement::PerfectWeek,
    },
    AchievementDefinition {
        id: AchievementId::Comeback,
        name: "The Comeback",
        description: "Log a meal after 30+ days away",
        icon: "🎭",
        xp_reward: 300,
        difficulty: Difficulty::Hard,
        requirement: Requirement::ReturnAfterBreak { days: 30 },
    },
    AchievementDefinition {
        id: AchievementId::MacroMaster,
        name: "Macro Mastermind",
        description: "Log 20 perfectly balanced meals",
        icon: "⚗️",
        xp_reward: 800,
        difficulty: Difficulty::Hard,
        requirement: Requirement::BalancedMacros { count: 20 },
    },
    AchievementDefinition {
        id: AchievementId::ProteinLegend,
        name: "Protein Legend",
        description: "Log 30 high-protein meals (40g+)",
        icon: "🦾",
        xp_reward: 700,
        difficulty: Difficulty::Hard,
        requirement: Requirement::HighProtein { count: 30 },
    },
    AchievementDefinition {
        id: AchievementId::HydrationMaster,
        name: "Hydration Master",
        description: "Track water intake for 30 consecutive days",
        icon: "🌊",
        xp_reward: 600,
        difficulty: Difficulty::Hard,
        requirement: Requirement::WaterTracked { days: 30 },
    },
];

impl AchievementDefinition {
    /// Get the definition for an id
    pub fn get(id: AchievementId) -> &'static AchievementDefinition {
        CATALOG
            .iter()
            .find(|a| a.id == id)
            .expect("every achievement id has a catalog entry")
    }

    /// Total number of achievements
    pub fn total_count() -> usize {
        CATALOG.len()
    }

    /// Total XP obtainable from the whole catalog
    pub fn total_xp() -> u64 {
        CATALOG.iter().map(|a| u64::from(a.xp_reward)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_catalog_covers_every_id_once() {
        assert_eq!(CATALOG.len(), AchievementId::all().len());
        let catalog_ids: BTreeSet<_> = CATALOG.iter().map(|a| a.id).collect();
        assert_eq!(catalog_ids.len(), CATALOG.len(), "duplicate id in catalog");
        for id in AchievementId::all() {
            assert!(catalog_ids.contains(id), "missing catalog entry: {id:?}");
        }
    }

    #[test]
    fn test_string_id_roundtrip() {
        let mut seen = BTreeSet::new();
        for id in AchievementId::all() {
            assert_eq!(AchievementId::from_str(id.as_str()), Some(*id));
            assert!(seen.insert(id.as_str()), "duplicate string id");
        }
        assert_eq!(AchievementId::from_str("no_such_achievement"), None);
    }

    #[test]
    fn test_catalog_order_matches_id_order() {
        let catalog_order: Vec<_> = CATALOG.iter().map(|a| a.id).collect();
        assert_eq!(catalog_order.as_slice(), AchievementId::all());
    }

    #[test]
    fn test_total_xp() {
        assert_eq!(AchievementDefinition::total_xp(), 40_425);
    }
}
