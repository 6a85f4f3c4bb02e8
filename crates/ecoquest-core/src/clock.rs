//! Clock abstraction for determinism.

use chrono::Local;

use crate::calendar::CalendarDate;

/// Abstraction over the device calendar for deterministic behavior.
pub trait Clock: Send + Sync {
    /// Returns the current device-local calendar date.
    fn today(&self) -> CalendarDate;
}

/// Production clock that delegates to the system clock in local time.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from(Local::now().date_naive())
    }
}
