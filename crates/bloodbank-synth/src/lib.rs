//! Synthetic blood bank data generation.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig + ReferenceData
//!        │
//!        ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │ generate_donors  │ ──▶ │  generate_logs   │
//! │ (id, type, pin)  │     │ (per-day counts) │
//! └──────────────────┘     └────────┬─────────┘
//!                                   ▼
//!                 Dataset { donors, donations, issuances }
//! ```
//!
//! All randomness comes from the caller's RNG, so a seeded
//! [`rand_chacha::ChaCha8Rng`] reproduces a run exactly.

pub mod config;
pub mod donors;
pub mod error;
pub mod logs;
pub mod rng;
pub mod sampler;

use rand::Rng;
use tracing::info;

use bloodbank_model::{DonationEvent, Donor, IssuanceEvent, ReferenceData};

pub use config::{DEFAULT_END_DATE, DEFAULT_NUM_DONORS, DEFAULT_START_DATE, GeneratorConfig};
pub use donors::generate_donors;
pub use error::{Result, SynthError};
pub use logs::{DaySummary, GeneratedLogs, generate_logs};
pub use rng::make_rng;
pub use sampler::BloodTypeSampler;

/// The three generated tables, plus the per-day count decisions behind the logs.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub donors: Vec<Donor>,
    pub donations: Vec<DonationEvent>,
    pub issuances: Vec<IssuanceEvent>,
    pub days: Vec<DaySummary>,
}

/// Run donor and log generation for one configuration.
pub fn generate_dataset<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    reference: &ReferenceData,
    rng: &mut R,
) -> Result<Dataset> {
    config.validate()?;
    let sampler = BloodTypeSampler::new()?;

    info!(num_donors = config.num_donors, "generating synthetic donors");
    let donors = generate_donors(
        config.num_donors,
        &config.donor_prefix,
        &reference.pincodes,
        &sampler,
        rng,
    )?;

    info!(
        start = %config.start_date,
        end = %config.end_date,
        days = config.day_count(),
        "generating time-series logs"
    );
    let GeneratedLogs {
        donations,
        issuances,
        days,
    } = generate_logs(
        &donors,
        &reference.holidays,
        config.start_date,
        config.end_date,
        &sampler,
        rng,
    )?;

    Ok(Dataset {
        donors,
        donations,
        issuances,
        days,
    })
}
