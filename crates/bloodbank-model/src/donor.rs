use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::blood_type::BloodType;
use crate::error::{ModelError, Result};

/// Default prefix for donor identifiers.
pub const DEFAULT_DONOR_PREFIX: &str = "D";

/// First sequence number handed out to a generated donor.
pub const FIRST_DONOR_NUMBER: u64 = 1001;

/// Donor identifier: a prefix followed by a sequence number (`D1001`).
///
/// Deserialization goes through [`DonorId::parts`], so ids read back from
/// CSV are checked the same way as parsed ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DonorId(String);

impl DonorId {
    /// Identifier for the donor at `index` (zero-based) within a generation run.
    pub fn sequential(prefix: &str, index: u64) -> Self {
        Self(format!("{prefix}{}", FIRST_DONOR_NUMBER + index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into prefix and the trailing sequence number.
    pub fn parts(&self) -> Result<(&str, u64)> {
        let digits_start = self.0.trim_end_matches(|ch: char| ch.is_ascii_digit()).len();
        if digits_start == self.0.len() {
            return Err(ModelError::InvalidDonorId {
                value: self.0.clone(),
                reason: "missing sequence number".to_string(),
            });
        }
        let (prefix, digits) = self.0.split_at(digits_start);
        let number = digits.parse::<u64>().map_err(|_| ModelError::InvalidDonorId {
            value: self.0.clone(),
            reason: format!("'{digits}' is not a sequence number"),
        })?;
        Ok((prefix, number))
    }
}

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DonorId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s.to_string())
    }
}

impl TryFrom<String> for DonorId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        let trimmed = value.trim();
        let id = if trimmed.len() == value.len() {
            Self(value)
        } else {
            Self(trimmed.to_string())
        };
        id.parts()?;
        Ok(id)
    }
}

impl From<DonorId> for String {
    fn from(id: DonorId) -> Self {
        id.0
    }
}

/// A synthetic donor. Created once per run and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    #[serde(rename = "Donor_ID")]
    pub donor_id: DonorId,
    #[serde(rename = "Blood_Type")]
    pub blood_type: BloodType,
    #[serde(rename = "Pincode")]
    pub pincode: String,
}
