//! ABO/Rh blood groups and the population distribution they are drawn from.
//!
//! The weights approximate the blood group mix of the Indian donor
//! population. Both donor profiles and issuance demand are sampled from the
//! same table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One of the eight ABO/Rh blood groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "AB-")]
    AbNegative,
}

/// Blood group weights, in sampling order. Weights sum to 1.
pub const BLOOD_TYPE_DISTRIBUTION: [(BloodType, f64); 8] = [
    (BloodType::OPositive, 0.37),
    (BloodType::BPositive, 0.32),
    (BloodType::APositive, 0.17),
    (BloodType::AbPositive, 0.07),
    (BloodType::ONegative, 0.02),
    (BloodType::BNegative, 0.02),
    (BloodType::ANegative, 0.02),
    (BloodType::AbNegative, 0.01),
];

/// Tolerance used when checking that distribution weights sum to 1.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-9;

impl BloodType {
    /// All blood groups in distribution order.
    pub const ALL: [BloodType; 8] = [
        BloodType::OPositive,
        BloodType::BPositive,
        BloodType::APositive,
        BloodType::AbPositive,
        BloodType::ONegative,
        BloodType::BNegative,
        BloodType::ANegative,
        BloodType::AbNegative,
    ];

    /// Returns the label used in output files (`O+`, `AB-`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::OPositive => "O+",
            BloodType::BPositive => "B+",
            BloodType::APositive => "A+",
            BloodType::AbPositive => "AB+",
            BloodType::ONegative => "O-",
            BloodType::BNegative => "B-",
            BloodType::ANegative => "A-",
            BloodType::AbNegative => "AB-",
        }
    }

    pub fn is_rh_positive(&self) -> bool {
        matches!(
            self,
            BloodType::OPositive
                | BloodType::BPositive
                | BloodType::APositive
                | BloodType::AbPositive
        )
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = ModelError;

    /// Parse a blood group label (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "O+" => Ok(BloodType::OPositive),
            "B+" => Ok(BloodType::BPositive),
            "A+" => Ok(BloodType::APositive),
            "AB+" => Ok(BloodType::AbPositive),
            "O-" => Ok(BloodType::ONegative),
            "B-" => Ok(BloodType::BNegative),
            "A-" => Ok(BloodType::ANegative),
            "AB-" => Ok(BloodType::AbNegative),
            _ => Err(ModelError::UnknownBloodType(s.to_string())),
        }
    }
}

/// Sum of all distribution weights.
pub fn distribution_total() -> f64 {
    BLOOD_TYPE_DISTRIBUTION.iter().map(|(_, weight)| weight).sum()
}
