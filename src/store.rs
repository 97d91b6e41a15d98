//! In-memory nutrition store.
//!
//! [`NutritionStore`] owns the meal log and the day-type flag for one app
//! session. It is handed to consumers explicitly rather than living as a
//! process-wide singleton, and nothing is ever written to disk: closing the
//! app intentionally starts the next session from an empty log.
//!
//! Totals and targets are derived on every read; the store never caches
//! them. Mutations cannot fail, so none of these methods return `Result`.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::models::{DailyTotals, DayType, MealEntry, MealId, MealInput, QuickAddItem, Targets};
use crate::totals::{daily_totals, targets_for, NutritionProgress};

#[derive(Debug)]
struct StoreInner {
    day_type: DayType,
    meals: Vec<MealEntry>,
    last_id: i64,
}

#[derive(Debug)]
pub struct NutritionStore {
    inner: Mutex<StoreInner>,
}

impl Default for NutritionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionStore {
    /// Empty log, gym day selected.
    pub fn new() -> Self {
        NutritionStore {
            inner: Mutex::new(StoreInner {
                day_type: DayType::GymDay,
                meals: Vec::new(),
                last_id: 0,
            }),
        }
    }

    /// Store a meal under a fresh id and return the stored record.
    ///
    /// Macro fields left unset default to zero. Ids are millisecond
    /// timestamps bumped past the previous id, so two adds within the same
    /// millisecond still get distinct, increasing ids.
    pub fn add_meal(&self, input: MealInput) -> MealEntry {
        let mut inner = self.lock();
        let entry = MealEntry {
            id: next_id(&mut inner),
            name: input.name,
            calories: input.calories,
            protein_g: input.protein_g.unwrap_or(0.0),
            carbs_g: input.carbs_g.unwrap_or(0.0),
            fat_g: input.fat_g.unwrap_or(0.0),
        };
        debug!("add meal {:?} '{}' {} kcal", entry.id, entry.name, entry.calories);
        inner.meals.push(entry.clone());
        entry
    }

    /// Log one catalog item as a meal.
    pub fn quick_add(&self, item: QuickAddItem) -> MealEntry {
        self.add_meal(MealInput {
            name: item.name,
            calories: item.calories,
            protein_g: Some(item.protein_g),
            carbs_g: Some(item.carbs_g),
            fat_g: Some(item.fat_g),
        })
    }

    /// Remove the entry with this id. Unknown ids are a no-op, not an error.
    pub fn remove_meal(&self, id: MealId) {
        let mut inner = self.lock();
        let before = inner.meals.len();
        inner.meals.retain(|m| m.id != id);
        if inner.meals.len() < before {
            debug!("removed meal {:?}", id);
        }
    }

    /// Snapshot of the current log, in insertion order.
    pub fn meals(&self) -> Vec<MealEntry> {
        self.lock().meals.clone()
    }

    /// Sum of calories and macros across the current log.
    pub fn totals(&self) -> DailyTotals {
        daily_totals(&self.lock().meals)
    }

    pub fn day_type(&self) -> DayType {
        self.lock().day_type
    }

    /// Switch between gym-day and rest-day targets. The log is untouched.
    pub fn set_day_type(&self, day_type: DayType) {
        debug!("day type -> {day_type:?}");
        self.lock().day_type = day_type;
    }

    /// The fixed targets record for the active day type.
    pub fn targets(&self) -> Targets {
        targets_for(self.lock().day_type)
    }

    /// Current totals measured against the active targets.
    pub fn progress(&self) -> NutritionProgress {
        let inner = self.lock();
        NutritionProgress::compute(daily_totals(&inner.meals), targets_for(inner.day_type))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        self.inner.lock().expect("nutrition store lock poisoned")
    }
}

fn next_id(inner: &mut StoreInner) -> MealId {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    let id = now_ms.max(inner.last_id + 1);
    inner.last_id = id;
    MealId(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, calories: f64) -> MealInput {
        MealInput {
            name: name.to_string(),
            calories,
            ..MealInput::default()
        }
    }

    #[test]
    fn test_add_assigns_unique_increasing_ids() {
        let store = NutritionStore::new();
        let ids: Vec<_> = (0..50)
            .map(|i| store.add_meal(input(&format!("m{i}"), 10.0)).id)
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_macros_default_to_zero() {
        let store = NutritionStore::new();
        let entry = store.add_meal(input("Pomme", 52.0));
        assert_eq!(entry.protein_g, 0.0);
        assert_eq!(entry.carbs_g, 0.0);
        assert_eq!(entry.fat_g, 0.0);
        assert_eq!(entry.calories, 52.0);
    }

    #[test]
    fn test_totals_spec_scenario() {
        let store = NutritionStore::new();
        store.add_meal(MealInput {
            name: "Oeuf entier".to_string(),
            calories: 78.0,
            protein_g: Some(6.0),
            carbs_g: Some(0.0),
            fat_g: Some(5.0),
        });
        store.add_meal(MealInput {
            name: "Skyr 200g".to_string(),
            calories: 120.0,
            protein_g: Some(20.0),
            carbs_g: Some(8.0),
            fat_g: Some(0.0),
        });

        let totals = store.totals();
        assert_eq!(totals.calories, 198.0);
        assert_eq!(totals.protein_g, 26.0);
        assert_eq!(totals.carbs_g, 8.0);
        assert_eq!(totals.fat_g, 5.0);
    }

    #[test]
    fn test_remove_excludes_exactly_one_entry() {
        let store = NutritionStore::new();
        let kept = store.add_meal(input("a", 100.0));
        let removed = store.add_meal(input("b", 40.0));
        store.remove_meal(removed.id);

        assert_eq!(store.totals().calories, 100.0);
        assert_eq!(store.meals(), vec![kept]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let store = NutritionStore::new();
        store.add_meal(input("a", 100.0));
        let before = store.totals();
        store.remove_meal(MealId(-1));
        assert_eq!(store.totals(), before);
        assert_eq!(store.meals().len(), 1);
    }

    #[test]
    fn test_day_type_switch_changes_targets_not_totals() {
        let store = NutritionStore::new();
        store.add_meal(input("a", 500.0));

        assert_eq!(store.day_type(), DayType::GymDay);
        assert_eq!(store.targets().calories, 2880.0);
        let totals_before = store.totals();

        store.set_day_type(DayType::RestDay);
        assert_eq!(store.targets().calories, 2540.0);
        assert_eq!(store.totals(), totals_before);
        assert_eq!(store.meals().len(), 1);
    }

    #[test]
    fn test_quick_add_copies_catalog_values() {
        let store = NutritionStore::new();
        let item = crate::catalog::quick_add_catalog()
            .into_iter()
            .find(|i| i.name == "Saumon 150g")
            .unwrap();
        let entry = store.quick_add(item);

        assert_eq!(entry.name, "Saumon 150g");
        assert_eq!(entry.calories, 280.0);
        assert_eq!(entry.protein_g, 36.0);
        assert_eq!(store.totals().fat_g, 14.0);
    }

    #[test]
    fn test_rejected_manual_submission_leaves_log_unchanged() {
        let store = NutritionStore::new();
        store.add_meal(input("a", 100.0));

        // Empty calories field: the form yields nothing to add.
        let submission =
            crate::forms::manual_meal("Poulet".into(), "".into(), "".into(), "".into(), "".into());
        if let Some(meal) = submission {
            store.add_meal(meal);
        }

        assert_eq!(store.meals().len(), 1);
        assert_eq!(store.totals().calories, 100.0);
    }

    #[test]
    fn test_progress_uses_active_day_type() {
        let store = NutritionStore::new();
        store.add_meal(input("a", 1270.0));

        store.set_day_type(DayType::RestDay);
        let progress = store.progress();
        assert_eq!(progress.calories.percent, 50.0);
        assert_eq!(progress.calories.remaining, 1270.0);
    }
}
