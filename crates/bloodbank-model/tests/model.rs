//! Tests for bloodbank-model types.

use bloodbank_model::{BLOOD_TYPE_DISTRIBUTION, BloodType, ReferenceData, TransfusionRecord};

fn record(donated: bool) -> TransfusionRecord {
    TransfusionRecord {
        recency_months: 2,
        frequency: 50,
        monetary_cc: 12500,
        time_months: 98,
        donated_march_2007: donated,
    }
}

#[test]
fn march_donation_rate() {
    let reference = ReferenceData {
        transfusions: vec![record(true), record(false), record(false), record(true)],
        ..ReferenceData::default()
    };
    assert_eq!(reference.march_2007_donation_rate(), Some(0.5));
}

#[test]
fn march_donation_rate_without_rows() {
    assert_eq!(ReferenceData::default().march_2007_donation_rate(), None);
}

#[test]
fn weights_follow_distribution_order() {
    let order: Vec<BloodType> = BLOOD_TYPE_DISTRIBUTION.iter().map(|(blood_type, _)| *blood_type).collect();
    let weights: Vec<f64> = BLOOD_TYPE_DISTRIBUTION.iter().map(|(_, weight)| *weight).collect();
    assert_eq!(order, BloodType::ALL.to_vec());
    assert_eq!(weights, vec![0.37, 0.32, 0.17, 0.07, 0.02, 0.02, 0.02, 0.01]);
}
