//! Holiday calendar loading.
//!
//! The `Date` column is parsed leniently: ISO dates are preferred, with a
//! handful of common spreadsheet layouts accepted as fallbacks. Numeric dates
//! with the year last are read month-first, whether written with dashes or
//! slashes, falling back to day-first when that fails.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use bloodbank_model::HolidayCalendar;

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};

pub const HOLIDAY_DATE_COLUMN: &str = "Date";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a calendar date in any of the accepted layouts.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(trimmed, format)
                    .ok()
                    .map(|datetime| datetime.date())
            })
        })
}

/// Read the holiday calendar. Blank dates are skipped; unparseable ones fail.
pub fn read_holidays(path: &Path) -> Result<HolidayCalendar> {
    let table = read_csv_table(path)?;
    let column = table.require_column(HOLIDAY_DATE_COLUMN, path)?;
    let mut holidays = HolidayCalendar::new();
    for row in &table.rows {
        let value = row.get(column);
        if value.is_empty() {
            continue;
        }
        let date = parse_calendar_date(value).ok_or_else(|| IngestError::InvalidValue {
            field: HOLIDAY_DATE_COLUMN.to_string(),
            value: value.to_string(),
            line: row.line,
            path: path.to_path_buf(),
        })?;
        holidays.insert(date);
    }
    Ok(holidays)
}
