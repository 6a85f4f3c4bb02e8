//! Test clock: deterministic `Clock` implementation for tests.

use ecoquest_core::calendar::CalendarDate;
use ecoquest_core::clock::Clock;

/// A clock that always reports the same calendar date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl FixedClock {
    /// Convenience constructor from date components.
    ///
    /// # Panics
    ///
    /// Panics if the components do not form a valid date.
    #[must_use]
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self(CalendarDate::from_ymd(year, month, day).expect("FixedClock::ymd requires a valid date"))
    }

    /// Returns a clock advanced by `days` calendar days.
    #[must_use]
    pub fn plus_days(self, days: u32) -> Self {
        let mut date = self.0;
        for _ in 0..days {
            date = date.succ();
        }
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
