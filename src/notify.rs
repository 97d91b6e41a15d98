//! Boundary to the platform notification capability.
//!
//! The core never talks to the OS itself; the host app implements
//! [`NotificationScheduler`] over its platform API (UNUserNotificationCenter,
//! AlarmManager, ...) and hands it across the FFI. Everything here is plain
//! data plus one trait.

use thiserror::Error;

/// Opaque identifier for one registered trigger, as issued by the platform.
pub type TriggerHandle = String;

/// Outcome of a notification permission request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Errors surfaced by the platform scheduling capability.
///
/// None of these are fatal to the core; callers report them as status text
/// and leave the in-memory schedule untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("notification permission denied")]
    PermissionDenied,

    #[error("notifications require a physical device")]
    UnsupportedDevice,

    #[error("platform refused to register the trigger")]
    SchedulingFailed,

    #[error("platform refused to cancel scheduled triggers")]
    CancellationFailed,
}

/// Recurring local-notification scheduling, implemented by the host app.
///
/// All calls are synchronous from the core's point of view; the host side
/// owns any async dispatch and must not call back into a screen that has
/// since been dismissed.
#[uniffi::trait_interface]
pub trait NotificationScheduler: Send + Sync {
    /// Ask the user for notification permission, or report the prior answer.
    fn request_permission(&self) -> Result<PermissionStatus, NotifyError>;

    /// Register one trigger that fires every day at `hour`:`minute`.
    fn schedule_daily(
        &self,
        title: String,
        body: String,
        hour: u8,
        minute: u8,
    ) -> Result<TriggerHandle, NotifyError>;

    /// Register one trigger that fires once after `delay_sec` seconds.
    fn schedule_once(
        &self,
        title: String,
        body: String,
        delay_sec: u32,
    ) -> Result<TriggerHandle, NotifyError>;

    /// Drop every trigger previously registered by this app.
    fn cancel_all(&self) -> Result<(), NotifyError>;

    /// False on simulators/emulators, where local notifications do not fire.
    fn is_physical_device(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_error_display() {
        assert_eq!(
            NotifyError::PermissionDenied.to_string(),
            "notification permission denied"
        );
        assert_eq!(
            NotifyError::UnsupportedDevice.to_string(),
            "notifications require a physical device"
        );
    }
}
