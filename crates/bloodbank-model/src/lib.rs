pub mod blood_type;
pub mod calendar;
pub mod donor;
pub mod error;
pub mod event;
pub mod reference;

pub use blood_type::{BLOOD_TYPE_DISTRIBUTION, BloodType, DISTRIBUTION_TOLERANCE, distribution_total};
pub use calendar::{DayClass, HolidayCalendar, inclusive_dates};
pub use donor::{DEFAULT_DONOR_PREFIX, Donor, DonorId, FIRST_DONOR_NUMBER};
pub use error::{ModelError, Result};
pub use event::{DonationEvent, IssuanceEvent, UNITS_PER_EVENT};
pub use reference::{ReferenceData, TransfusionRecord};
