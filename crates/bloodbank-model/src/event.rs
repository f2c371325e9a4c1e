use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::blood_type::BloodType;
use crate::donor::DonorId;

/// Units recorded per donation or issuance event.
pub const UNITS_PER_EVENT: u32 = 1;

/// One unit collected from one donor on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationEvent {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Donor_ID")]
    pub donor_id: DonorId,
    #[serde(rename = "Blood_Type")]
    pub blood_type: BloodType,
    #[serde(rename = "Units_Collected")]
    pub units_collected: u32,
}

/// One unit dispensed for a blood group on one date.
///
/// Issuances are not tied to any donor or stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceEvent {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Blood_Type")]
    pub blood_type: BloodType,
    #[serde(rename = "Units_Issued")]
    pub units_issued: u32,
}
