use chrono::NaiveDate;

use bloodbank_model::DEFAULT_DONOR_PREFIX;

use crate::error::{Result, SynthError};

pub const DEFAULT_NUM_DONORS: usize = 5000;
pub const DEFAULT_START_DATE: NaiveDate = ymd(2023, 1, 1);
pub const DEFAULT_END_DATE: NaiveDate = ymd(2024, 12, 31);

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid default date"),
    }
}

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub num_donors: usize,
    pub donor_prefix: String,
    /// First day of the log, inclusive.
    pub start_date: NaiveDate,
    /// Last day of the log, inclusive.
    pub end_date: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_donors: DEFAULT_NUM_DONORS,
            donor_prefix: DEFAULT_DONOR_PREFIX.to_string(),
            start_date: DEFAULT_START_DATE,
            end_date: DEFAULT_END_DATE,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn with_num_donors(mut self, num_donors: usize) -> Self {
        self.num_donors = num_donors;
        self
    }

    #[must_use]
    pub fn with_donor_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.donor_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Number of calendar days covered by the log.
    pub fn day_count(&self) -> usize {
        if self.start_date > self.end_date {
            0
        } else {
            (self.end_date - self.start_date).num_days() as usize + 1
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_donors == 0 {
            return Err(SynthError::NoDonors);
        }
        if self.start_date > self.end_date {
            return Err(SynthError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}
