//! Daily meal reminders.
//!
//! [`ReminderSchedule`] owns six seeded reminder slots for the lifetime of
//! the screen that created it. Users can toggle a slot or move its time;
//! slots are never added or deleted. Edits only touch the in-memory list —
//! nothing reaches the platform until [`ReminderSchedule::apply`] replaces
//! all registered triggers with the current enabled set.

use std::sync::{Arc, Mutex};

use log::{debug, info};

use crate::models::{ReminderEntry, ReminderId};
use crate::notify::{NotificationScheduler, NotifyError, PermissionStatus, TriggerHandle};

/// Body text shared by every meal notification.
const REMINDER_BODY: &str = "Il est temps de manger et de noter tes macros !";

const TEST_TITLE: &str = "🍽 Test — Déjeuner";
const TEST_DELAY_SEC: u32 = 5;

const DEFAULT_REMINDERS: [(&str, &str, u8, u8); 6] = [
    ("1", "Petit-déjeuner", 8, 0),
    ("2", "Collation matin", 11, 0),
    ("3", "Déjeuner", 13, 0),
    ("4", "Collation après-midi", 16, 0),
    ("5", "Dîner", 19, 30),
    ("6", "Collation soir", 21, 30),
];

/// The seeded reminder list: six meals, all enabled.
pub fn default_reminders() -> Vec<ReminderEntry> {
    DEFAULT_REMINDERS
        .iter()
        .map(|&(id, label, hour, minute)| ReminderEntry {
            id: ReminderId(id.to_string()),
            label: label.to_string(),
            hour,
            minute,
            enabled: true,
        })
        .collect()
}

/// Render a reminder time as zero-padded `HH:MM`.
pub fn format_time(hour: u8, minute: u8) -> String {
    format!("{hour:02}:{minute:02}")
}

pub struct ReminderSchedule {
    notifier: Arc<dyn NotificationScheduler>,
    reminders: Mutex<Vec<ReminderEntry>>,
}

impl ReminderSchedule {
    /// Schedule seeded with the default reminders.
    pub fn new(notifier: Arc<dyn NotificationScheduler>) -> Self {
        ReminderSchedule {
            notifier,
            reminders: Mutex::new(default_reminders()),
        }
    }

    /// Snapshot of the reminder list, in display order.
    pub fn reminders(&self) -> Vec<ReminderEntry> {
        self.lock().clone()
    }

    /// Flip the enabled flag of one reminder. Unknown ids are a no-op.
    pub fn toggle(&self, id: ReminderId) {
        let mut reminders = self.lock();
        if let Some(reminder) = reminders.iter_mut().find(|r| r.id == id) {
            reminder.enabled = !reminder.enabled;
            debug!("reminder {:?} enabled={}", id, reminder.enabled);
        }
    }

    /// Replace one reminder's time.
    ///
    /// Out-of-range values clamp to [0,23]/[0,59] rather than being
    /// rejected, so hour 25 lands on 23 and minute -1 on 0. Unknown ids
    /// are a no-op.
    pub fn reschedule(&self, id: ReminderId, hour: i64, minute: i64) {
        let hour = hour.clamp(0, 23) as u8;
        let minute = minute.clamp(0, 59) as u8;
        let mut reminders = self.lock();
        if let Some(reminder) = reminders.iter_mut().find(|r| r.id == id) {
            reminder.hour = hour;
            reminder.minute = minute;
            debug!("reminder {:?} moved to {}", id, format_time(hour, minute));
        }
    }

    /// Ask for notification permission.
    ///
    /// Refused outright on simulators, where local notifications never
    /// fire; a denied answer is a normal outcome, not an error.
    pub fn request_permission(&self) -> Result<PermissionStatus, NotifyError> {
        if !self.notifier.is_physical_device() {
            return Err(NotifyError::UnsupportedDevice);
        }
        self.notifier.request_permission()
    }

    /// Push the current schedule to the platform.
    ///
    /// Cancels every previously registered trigger, then registers one
    /// daily trigger per enabled reminder. Returns how many were
    /// registered.
    pub fn apply(&self) -> Result<u32, NotifyError> {
        self.notifier.cancel_all()?;

        let enabled: Vec<ReminderEntry> =
            self.lock().iter().filter(|r| r.enabled).cloned().collect();
        for reminder in &enabled {
            self.notifier.schedule_daily(
                format!("🍽 {}", reminder.label),
                REMINDER_BODY.to_string(),
                reminder.hour,
                reminder.minute,
            )?;
        }

        let count = enabled.len() as u32;
        info!("applied reminder schedule: {count} daily trigger(s)");
        Ok(count)
    }

    /// Fire a one-shot test notification a few seconds from now.
    pub fn send_test(&self) -> Result<TriggerHandle, NotifyError> {
        self.notifier
            .schedule_once(TEST_TITLE.to_string(), REMINDER_BODY.to_string(), TEST_DELAY_SEC)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ReminderEntry>> {
        self.reminders.lock().expect("reminder list lock poisoned")
    }
}
