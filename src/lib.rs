pub mod catalog;
pub mod forms;
pub mod models;
pub mod notify;
pub mod notify_mock;
pub mod reminders;
pub mod store;
pub mod totals;

uniffi::include_scaffolding!("nutrition");

pub use catalog::quick_add_catalog;
pub use forms::{manual_meal, parse_macro_field, parse_time_field};
pub use models::{
    DailyTotals, DayType, MealEntry, MealId, MealInput, QuickAddItem, ReminderEntry, ReminderId,
    Targets,
};
pub use notify::{NotificationScheduler, NotifyError, PermissionStatus, TriggerHandle};
pub use notify_mock::MockScheduler;
pub use reminders::{default_reminders, format_time, ReminderSchedule};
pub use store::NutritionStore;
pub use totals::{daily_totals, targets_for, MacroProgress, NutritionProgress};
