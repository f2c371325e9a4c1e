use std::path::PathBuf;

use bloodbank_model::{DayClass, DonationEvent};
use bloodbank_output::OutputPaths;
use bloodbank_synth::GeneratorConfig;

#[derive(Debug)]
pub struct GenerateResult {
    pub config: GeneratorConfig,
    pub seed: u64,
    pub output_dir: PathBuf,
    pub outputs: OutputPaths,
    pub reference: ReferenceSummary,
    pub day_classes: Vec<DayClassSummary>,
    /// Leading rows of the donation log.
    pub donation_sample: Vec<DonationEvent>,
}

#[derive(Debug)]
pub struct ReferenceSummary {
    pub transfusion_rows: usize,
    pub march_2007_rate: Option<f64>,
    pub pincodes: usize,
    pub holidays: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayClassSummary {
    pub class: DayClass,
    pub days: usize,
    pub donations: usize,
    pub issuances: usize,
}
