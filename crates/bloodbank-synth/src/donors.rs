use rand::Rng;
use rand::seq::SliceRandom;

use bloodbank_model::{Donor, DonorId};

use crate::error::{Result, SynthError};
use crate::sampler::BloodTypeSampler;

/// Build `count` donors with sequential ids.
///
/// Blood types follow the weighted distribution; pincodes are drawn
/// uniformly with replacement from `pincodes`.
pub fn generate_donors<R: Rng + ?Sized>(
    count: usize,
    prefix: &str,
    pincodes: &[String],
    sampler: &BloodTypeSampler,
    rng: &mut R,
) -> Result<Vec<Donor>> {
    if pincodes.is_empty() {
        return Err(SynthError::NoPincodes);
    }
    let mut donors = Vec::with_capacity(count);
    for index in 0..count {
        let blood_type = sampler.sample(rng);
        let pincode = pincodes.choose(rng).ok_or(SynthError::NoPincodes)?;
        donors.push(Donor {
            donor_id: DonorId::sequential(prefix, index as u64),
            blood_type,
            pincode: pincode.clone(),
        });
    }
    Ok(donors)
}
