use serde::{Deserialize, Serialize};

use crate::calendar::HolidayCalendar;

/// One row of the historical transfusion service statistics (RFMTC layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransfusionRecord {
    /// Months since last donation.
    pub recency_months: u32,
    /// Total number of donations.
    pub frequency: u32,
    /// Total blood donated in c.c.
    pub monetary_cc: u32,
    /// Months since first donation.
    pub time_months: u32,
    /// Whether the donor gave blood in March 2007.
    pub donated_march_2007: bool,
}

/// Reference tables loaded before generation.
///
/// `transfusions` is read and reported but does not feed generation.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub transfusions: Vec<TransfusionRecord>,
    pub pincodes: Vec<String>,
    pub holidays: HolidayCalendar,
}

impl ReferenceData {
    /// Share of historical donors who donated in March 2007.
    pub fn march_2007_donation_rate(&self) -> Option<f64> {
        if self.transfusions.is_empty() {
            return None;
        }
        let donated = self
            .transfusions
            .iter()
            .filter(|record| record.donated_march_2007)
            .count();
        Some(donated as f64 / self.transfusions.len() as f64)
    }
}
