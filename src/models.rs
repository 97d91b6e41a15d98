#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MealId(pub i64);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReminderId(pub String);

uniffi::custom_newtype!(MealId, i64);
uniffi::custom_newtype!(ReminderId, String);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayType {
    GymDay,
    RestDay,
}

/// One logged food item. Immutable once stored; removed only as a whole.
#[derive(Clone, Debug, PartialEq)]
pub struct MealEntry {
    pub id: MealId,
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Caller-supplied meal data before an id is assigned.
/// Missing macro fields default to zero when stored.
#[derive(Clone, Debug, Default)]
pub struct MealInput {
    pub name: String,
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
}

/// Element-wise sum over the current meal log. Derived, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Fixed calorie/macro goals for one day type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Targets {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Predefined food from the quick-add catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct QuickAddItem {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// A named daily meal reminder. Seeded at startup, edited in place.
#[derive(Clone, Debug, PartialEq)]
pub struct ReminderEntry {
    pub id: ReminderId,
    pub label: String,
    pub hour: u8,
    pub minute: u8,
    pub enabled: bool,
}
