//! Day classification and the per-class event count ranges.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

/// Holiday dates keyed by calendar day.
pub type HolidayCalendar = BTreeSet<NaiveDate>;

/// Classification of a calendar date for sampling purposes.
///
/// Holiday takes precedence over weekend, which takes precedence over weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayClass {
    Holiday,
    Weekend,
    Weekday,
}

impl DayClass {
    pub fn classify(date: NaiveDate, holidays: &HolidayCalendar) -> Self {
        if holidays.contains(&date) {
            DayClass::Holiday
        } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            DayClass::Weekend
        } else {
            DayClass::Weekday
        }
    }

    /// Number of donations collected on a day of this class (upper-exclusive).
    pub fn donation_range(&self) -> Range<u32> {
        match self {
            DayClass::Holiday => 10..30,
            DayClass::Weekend => 80..150,
            DayClass::Weekday => 50..100,
        }
    }

    /// Number of units issued on a day of this class (upper-exclusive).
    pub fn issuance_range(&self) -> Range<u32> {
        match self {
            DayClass::Holiday => 60..120,
            DayClass::Weekend | DayClass::Weekday => 70..130,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayClass::Holiday => "holiday",
            DayClass::Weekend => "weekend",
            DayClass::Weekday => "weekday",
        }
    }
}

impl fmt::Display for DayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every date from `start` to `end`, both inclusive. Empty when `start > end`.
pub fn inclusive_dates(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}
