//! Daily donation and issuance log generation.
//!
//! Each calendar day gets exactly one donation count and one issuance count,
//! drawn from the ranges of its [`DayClass`]. Donors are sampled without
//! replacement within a day, so nobody donates twice on the same date.
//! Issuance blood types are drawn from the population distribution and are
//! independent of what was collected.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::index;
use tracing::{debug, trace};

use bloodbank_model::{
    DayClass, DonationEvent, Donor, HolidayCalendar, IssuanceEvent, UNITS_PER_EVENT,
    inclusive_dates,
};

use crate::error::{Result, SynthError};
use crate::sampler::BloodTypeSampler;

/// Per-day count decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub class: DayClass,
    pub donations: usize,
    pub issuances: usize,
}

/// Donation and issuance events in chronological order.
#[derive(Debug, Clone, Default)]
pub struct GeneratedLogs {
    pub donations: Vec<DonationEvent>,
    pub issuances: Vec<IssuanceEvent>,
    pub days: Vec<DaySummary>,
}

impl GeneratedLogs {
    pub fn days_of_class(&self, class: DayClass) -> usize {
        self.days.iter().filter(|day| day.class == class).count()
    }
}

/// Generate logs for every date from `start` to `end` inclusive.
///
/// Fails with [`SynthError::DonorPoolExhausted`] on the first day whose
/// donation count exceeds the number of donors.
pub fn generate_logs<R: Rng + ?Sized>(
    donors: &[Donor],
    holidays: &HolidayCalendar,
    start: NaiveDate,
    end: NaiveDate,
    sampler: &BloodTypeSampler,
    rng: &mut R,
) -> Result<GeneratedLogs> {
    let mut logs = GeneratedLogs::default();
    for date in inclusive_dates(start, end) {
        let class = DayClass::classify(date, holidays);

        let donations = rng.gen_range(class.donation_range()) as usize;
        if donations > donors.len() {
            return Err(SynthError::DonorPoolExhausted {
                date,
                requested: donations,
                available: donors.len(),
            });
        }
        for donor_index in index::sample(rng, donors.len(), donations).iter() {
            let donor = &donors[donor_index];
            logs.donations.push(DonationEvent {
                date,
                donor_id: donor.donor_id.clone(),
                blood_type: donor.blood_type,
                units_collected: UNITS_PER_EVENT,
            });
        }

        let issuances = rng.gen_range(class.issuance_range()) as usize;
        for _ in 0..issuances {
            logs.issuances.push(IssuanceEvent {
                date,
                blood_type: sampler.sample(rng),
                units_issued: UNITS_PER_EVENT,
            });
        }

        trace!(%date, %class, donations, issuances, "day generated");
        logs.days.push(DaySummary {
            date,
            class,
            donations,
            issuances,
        });
    }
    debug!(
        days = logs.days.len(),
        holidays = logs.days_of_class(DayClass::Holiday),
        weekends = logs.days_of_class(DayClass::Weekend),
        "log generation finished"
    );
    Ok(logs)
}
