//! Daily totals and target computation.
//!
//! This module provides pure functions over the current meal log.
//! All inputs are plain data structures - no store or FFI dependencies.
//! Totals are recomputed on every read; nothing here is cached or stored.

use crate::models::{DailyTotals, DayType, MealEntry, Targets};

/// Goals for a training day.
pub const GYM_DAY_TARGETS: Targets = Targets {
    calories: 2880.0,
    protein_g: 182.0,
    carbs_g: 344.0,
    fat_g: 86.0,
};

/// Goals for a rest day. Same protein and fat, reduced carbohydrates.
pub const REST_DAY_TARGETS: Targets = Targets {
    calories: 2540.0,
    protein_g: 182.0,
    carbs_g: 258.0,
    fat_g: 86.0,
};

/// Progress bars turn warning-colored past this share of the target.
const NEAR_LIMIT_PERCENT: f64 = 90.0;

/// Look up the fixed targets record for a day type.
pub fn targets_for(day_type: DayType) -> Targets {
    match day_type {
        DayType::GymDay => GYM_DAY_TARGETS,
        DayType::RestDay => REST_DAY_TARGETS,
    }
}

/// Sum calories and macros across all entries.
///
/// Element-wise addition, so the result is independent of entry order.
/// An empty log yields all zeros.
pub fn daily_totals(entries: &[MealEntry]) -> DailyTotals {
    entries.iter().fold(DailyTotals::default(), |acc, e| DailyTotals {
        calories: acc.calories + e.calories,
        protein_g: acc.protein_g + e.protein_g,
        carbs_g: acc.carbs_g + e.carbs_g,
        fat_g: acc.fat_g + e.fat_g,
    })
}

/// Consumption measured against one target value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacroProgress {
    /// Amount consumed so far.
    pub current: f64,
    /// Goal for the active day type.
    pub target: f64,
    /// Share of the target consumed, capped at 100.
    pub percent: f64,
    /// Target minus current; negative once the target is exceeded.
    pub remaining: f64,
    /// True past 90% of the target.
    pub near_limit: bool,
}

impl MacroProgress {
    fn compute(current: f64, target: f64) -> Self {
        let raw = if target > 0.0 {
            current / target * 100.0
        } else {
            0.0
        };
        MacroProgress {
            current,
            target,
            percent: raw.min(100.0),
            remaining: target - current,
            near_limit: raw > NEAR_LIMIT_PERCENT,
        }
    }
}

/// Per-macro progress for the whole day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NutritionProgress {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
}

impl NutritionProgress {
    /// Compare totals against the targets of the active day type.
    pub fn compute(totals: DailyTotals, targets: Targets) -> Self {
        NutritionProgress {
            calories: MacroProgress::compute(totals.calories, targets.calories),
            protein: MacroProgress::compute(totals.protein_g, targets.protein_g),
            carbs: MacroProgress::compute(totals.carbs_g, targets.carbs_g),
            fat: MacroProgress::compute(totals.fat_g, targets.fat_g),
        }
    }
}
