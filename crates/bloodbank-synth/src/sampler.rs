use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use bloodbank_model::{BLOOD_TYPE_DISTRIBUTION, BloodType};

use crate::error::Result;

/// Weighted categorical draw over the blood group distribution.
#[derive(Debug, Clone)]
pub struct BloodTypeSampler {
    blood_types: Vec<BloodType>,
    index: WeightedIndex<f64>,
}

impl BloodTypeSampler {
    pub fn new() -> Result<Self> {
        Self::from_weights(&BLOOD_TYPE_DISTRIBUTION)
    }

    pub fn from_weights(weights: &[(BloodType, f64)]) -> Result<Self> {
        let index = WeightedIndex::new(weights.iter().map(|(_, weight)| *weight))?;
        Ok(Self {
            blood_types: weights.iter().map(|(blood_type, _)| *blood_type).collect(),
            index,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BloodType {
        self.blood_types[self.index.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn frequencies_track_weights() {
        let sampler = BloodTypeSampler::new().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let draws = 100_000;
        let mut counts = [0usize; 8];
        for _ in 0..draws {
            let drawn = sampler.sample(&mut rng);
            let slot = BloodType::ALL.iter().position(|bt| *bt == drawn).unwrap();
            counts[slot] += 1;
        }
        for (slot, (_, weight)) in BLOOD_TYPE_DISTRIBUTION.iter().enumerate() {
            let observed = counts[slot] as f64 / draws as f64;
            assert!(
                (observed - weight).abs() < 0.01,
                "slot {slot}: observed {observed}, expected {weight}"
            );
        }
    }

    #[test]
    fn zero_weight_is_never_drawn() {
        let sampler = BloodTypeSampler::from_weights(&[
            (BloodType::APositive, 1.0),
            (BloodType::ANegative, 0.0),
        ])
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            assert_eq!(sampler.sample(&mut rng), BloodType::APositive);
        }
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        assert!(BloodTypeSampler::from_weights(&[(BloodType::OPositive, 0.0)]).is_err());
    }
}
