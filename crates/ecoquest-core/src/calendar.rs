//! Calendar date value type.
//!
//! Dates carry no time of day and no timezone. The canonical text encoding is
//! ISO-8601 (`YYYY-MM-DD`), which is also the serialized form.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// A device-local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from its components, returning `None` for impossible dates.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The calendar day immediately following this one.
    ///
    /// # Panics
    ///
    /// Panics only at the end of chrono's representable range (year 262143).
    #[must_use]
    pub fn succ(self) -> Self {
        Self(self.0.succ_opt().expect("calendar date out of range"))
    }

    /// The calendar day immediately preceding this one.
    ///
    /// # Panics
    ///
    /// Panics only at the start of chrono's representable range.
    #[must_use]
    pub fn pred(self) -> Self {
        Self(self.0.pred_opt().expect("calendar date out of range"))
    }

    /// Returns `true` if `self` is exactly one calendar day after `other`.
    #[must_use]
    pub fn is_day_after(self, other: Self) -> bool {
        other.0.succ_opt() == Some(self.0)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, CANONICAL_FORMAT)
            .map(Self)
            .map_err(|e| DomainError::Validation(format!("invalid calendar date {s:?}: {e}")))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
