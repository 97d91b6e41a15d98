use std::sync::Mutex;

use crate::notify::{NotificationScheduler, NotifyError, PermissionStatus, TriggerHandle};

#[derive(Clone, Debug, PartialEq)]
pub enum MockTrigger {
    Daily {
        title: String,
        body: String,
        hour: u8,
        minute: u8,
    },
    Once {
        title: String,
        body: String,
        delay_sec: u32,
    },
}

#[derive(Debug, Default)]
struct MockState {
    triggers: Vec<MockTrigger>,
    permission_requests: u32,
    cancel_all_calls: u32,
    next_handle: u64,
}

/// In-memory [`NotificationScheduler`] for tests and host-side development.
/// Records every call instead of touching a platform API.
#[derive(Debug)]
pub struct MockScheduler {
    permission: PermissionStatus,
    physical_device: bool,
    fail_scheduling: bool,
    state: Mutex<MockState>,
}

impl Default for MockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl MockScheduler {
    /// Physical device with permission granted.
    pub fn new() -> Self {
        MockScheduler {
            permission: PermissionStatus::Granted,
            physical_device: true,
            fail_scheduling: false,
            state: Mutex::new(MockState::default()),
        }
    }

    /// Physical device where the user refuses permission.
    pub fn denied() -> Self {
        MockScheduler {
            permission: PermissionStatus::Denied,
            ..Self::new()
        }
    }

    /// Simulator: no trigger ever fires.
    pub fn simulator() -> Self {
        MockScheduler {
            physical_device: false,
            ..Self::new()
        }
    }

    /// Every schedule call fails with [`NotifyError::SchedulingFailed`].
    pub fn failing() -> Self {
        MockScheduler {
            fail_scheduling: true,
            ..Self::new()
        }
    }

    pub fn triggers(&self) -> Vec<MockTrigger> {
        self.state.lock().expect("mock state poisoned").triggers.clone()
    }

    pub fn permission_requests(&self) -> u32 {
        self.state.lock().expect("mock state poisoned").permission_requests
    }

    pub fn cancel_all_calls(&self) -> u32 {
        self.state.lock().expect("mock state poisoned").cancel_all_calls
    }
}

impl NotificationScheduler for MockScheduler {
    fn request_permission(&self) -> Result<PermissionStatus, NotifyError> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.permission_requests += 1;
        Ok(self.permission)
    }

    fn schedule_daily(
        &self,
        title: String,
        body: String,
        hour: u8,
        minute: u8,
    ) -> Result<TriggerHandle, NotifyError> {
        if self.fail_scheduling {
            return Err(NotifyError::SchedulingFailed);
        }
        let mut state = self.state.lock().expect("mock state poisoned");
        state.triggers.push(MockTrigger::Daily {
            title,
            body,
            hour,
            minute,
        });
        state.next_handle += 1;
        Ok(format!("mock-trigger-{}", state.next_handle))
    }

    fn schedule_once(
        &self,
        title: String,
        body: String,
        delay_sec: u32,
    ) -> Result<TriggerHandle, NotifyError> {
        if self.fail_scheduling {
            return Err(NotifyError::SchedulingFailed);
        }
        let mut state = self.state.lock().expect("mock state poisoned");
        state.triggers.push(MockTrigger::Once {
            title,
            body,
            delay_sec,
        });
        state.next_handle += 1;
        Ok(format!("mock-trigger-{}", state.next_handle))
    }

    fn cancel_all(&self) -> Result<(), NotifyError> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.triggers.clear();
        state.cancel_all_calls += 1;
        Ok(())
    }

    fn is_physical_device(&self) -> bool {
        self.physical_device
    }
}
